//! Use cases behind the Today, History and Pantry views.
//!
//! Each mutation loads the whole collection from the repository, applies a
//! [`lifecycle`](crate::lifecycle) function and writes the result back. A
//! collection that can't be read aborts the mutation.

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

use crate::lifecycle;
use crate::models::{FoodEntry, FoodForm, MealType, WaterState};
use crate::repository::Repository;
use crate::storage::StorageError;

/// Behaviour switches for a [`Journal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalOptions {
    /// Start each new day with zero water intake.
    pub daily_water_reset: bool,
}

/// Food and water journal over a [`Repository`].
pub struct Journal<R> {
    repo: R,
    options: JournalOptions,
}

impl<R: Repository> Journal<R> {
    pub fn new(repo: R) -> Self {
        Self::with_options(repo, JournalOptions::default())
    }

    pub fn with_options(repo: R, options: JournalOptions) -> Self {
        Self { repo, options }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    // ========== Food ==========

    /// Adds the food described by `form`.
    ///
    /// Returns `Ok(None)` without touching storage when the form has no name.
    pub fn add_food(
        &self,
        form: &FoodForm,
        now: DateTime<Local>,
    ) -> Result<Option<FoodEntry>, StorageError> {
        let Some(entry) = form.build(now) else {
            tracing::debug!("Ignoring food form without a name");
            return Ok(None);
        };

        self.insert(entry).map(Some)
    }

    /// Logs a copy of a pantry item for today.
    ///
    /// Returns `Ok(None)` if `id` does not name a pantry item.
    pub fn log_from_pantry(
        &self,
        id: Uuid,
        meal_type: MealType,
        now: DateTime<Local>,
    ) -> Result<Option<FoodEntry>, StorageError> {
        let entries = self.repo.try_food_entries()?;
        let Some(item) = lifecycle::find_entry(&entries, id).filter(|e| e.is_pantry_item) else {
            return Ok(None);
        };

        let entry = FoodEntry::from_pantry(item, meal_type, now);
        let updated = lifecycle::add_entry(&entries, entry.clone());
        self.repo.save_food_entries(&updated)?;

        tracing::info!("Logged '{}' from pantry as {}", entry.name, entry.meal_type);
        Ok(Some(entry))
    }

    /// Removes an entry. Returns the removed entry, or `None` if there was none.
    pub fn delete_food(&self, id: Uuid) -> Result<Option<FoodEntry>, StorageError> {
        let entries = self.repo.try_food_entries()?;
        let Some(removed) = lifecycle::find_entry(&entries, id).cloned() else {
            tracing::debug!("No entry {} to delete", id);
            return Ok(None);
        };

        let updated = lifecycle::delete_entry(&entries, id);
        self.repo.save_food_entries(&updated)?;

        tracing::info!("Deleted '{}' ({})", removed.name, removed.id);
        Ok(Some(removed))
    }

    /// Every entry, daily and pantry, in collection order.
    pub fn entries(&self) -> Vec<FoodEntry> {
        self.repo.food_entries()
    }

    pub fn find(&self, id: Uuid) -> Option<FoodEntry> {
        let entries = self.repo.food_entries();
        lifecycle::find_entry(&entries, id).cloned()
    }

    /// Entries logged on `today`, most recently added first.
    pub fn today(&self, today: NaiveDate) -> Vec<FoodEntry> {
        let entries = self.repo.food_entries();
        lifecycle::filter_today(&entries, today)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn pantry(&self) -> Vec<FoodEntry> {
        let entries = self.repo.food_entries();
        lifecycle::filter_pantry(&entries)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Daily entries grouped by date, most recent date first.
    pub fn history(&self) -> Vec<(NaiveDate, Vec<FoodEntry>)> {
        let entries = self.repo.food_entries();
        lifecycle::group_by_date(&entries)
            .into_iter()
            .map(|(date, group)| (date, group.into_iter().cloned().collect()))
            .collect()
    }

    fn insert(&self, entry: FoodEntry) -> Result<FoodEntry, StorageError> {
        let entries = self.repo.try_food_entries()?;
        let updated = lifecycle::add_entry(&entries, entry.clone());
        self.repo.save_food_entries(&updated)?;

        if entry.is_pantry_item {
            tracing::info!("Added '{}' to pantry", entry.name);
        } else {
            tracing::info!("Logged '{}' as {}", entry.name, entry.meal_type);
        }
        Ok(entry)
    }

    // ========== Water ==========

    /// Current water state, rolled over to `today` if daily reset is enabled.
    pub fn water(&self, today: NaiveDate) -> WaterState {
        let state = self.repo.water_state();
        if self.options.daily_water_reset {
            state.roll_over(today)
        } else {
            state
        }
    }

    pub fn add_water(&self, today: NaiveDate) -> Result<WaterState, StorageError> {
        let state = self.water(today).increment().touched_on(today);
        self.repo.save_water_state(&state)?;
        tracing::info!("Water logged: {}", state);
        Ok(state)
    }

    pub fn set_water(
        &self,
        intake: u32,
        goal: u32,
        today: NaiveDate,
    ) -> Result<WaterState, StorageError> {
        let state = self.water(today).set(intake, goal).touched_on(today);
        self.repo.save_water_state(&state)?;
        tracing::info!("Water set to {}", state);
        Ok(state)
    }

    pub fn reset_water(&self, today: NaiveDate) -> Result<WaterState, StorageError> {
        let state = self.water(today).reset().touched_on(today);
        self.repo.save_water_state(&state)?;
        tracing::info!("Water reset, goal {}", state.goal);
        Ok(state)
    }
}
