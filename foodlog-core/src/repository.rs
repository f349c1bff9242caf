//! Typed access to persisted records.

use crate::models::{FoodEntry, WaterState};
use crate::storage::{KeyValueStore, StorageError, StoreKey};

/// The records foodlog persists, without any knowledge of keys or encoding.
pub trait Repository {
    fn food_entries(&self) -> Vec<FoodEntry>;
    /// Like `food_entries`, but fails when the record exists and can't be read.
    fn try_food_entries(&self) -> Result<Vec<FoodEntry>, StorageError>;
    fn save_food_entries(&self, entries: &[FoodEntry]) -> Result<(), StorageError>;
    fn water_state(&self) -> WaterState;
    fn save_water_state(&self, state: &WaterState) -> Result<(), StorageError>;
}

/// [`Repository`] on top of any [`KeyValueStore`].
///
/// Water intake and goal are written as a single record. When that record is
/// missing, the separate `waterIntake` / `waterGoal` records are read instead.
#[derive(Debug)]
pub struct StoreRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn legacy_water_state(&self) -> WaterState {
        let defaults = WaterState::default();
        let intake: u32 = self.store.load(StoreKey::WaterIntake, defaults.intake);
        let goal: u32 = self.store.load(StoreKey::WaterGoal, defaults.goal);
        WaterState::new(intake, goal)
    }
}

impl<S: KeyValueStore> Repository for StoreRepository<S> {
    fn food_entries(&self) -> Vec<FoodEntry> {
        self.store.load(StoreKey::FoodEntries, Vec::new())
    }

    fn try_food_entries(&self) -> Result<Vec<FoodEntry>, StorageError> {
        Ok(self
            .store
            .load_checked(StoreKey::FoodEntries)?
            .unwrap_or_default())
    }

    fn save_food_entries(&self, entries: &[FoodEntry]) -> Result<(), StorageError> {
        self.store.save(StoreKey::FoodEntries, entries)
    }

    fn water_state(&self) -> WaterState {
        match self.store.try_load::<WaterState>(StoreKey::WaterState) {
            // A hand-edited goal of zero would divide by zero in progress.
            Some(state) => state.set(state.intake, state.goal),
            None => self.legacy_water_state(),
        }
    }

    fn save_water_state(&self, state: &WaterState) -> Result<(), StorageError> {
        self.store.save(StoreKey::WaterState, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use crate::storage::{FileStore, MemoryStore};
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn memory_repo() -> StoreRepository<MemoryStore> {
        StoreRepository::new(MemoryStore::new())
    }

    #[test]
    fn test_empty_repository_defaults() {
        let repo = memory_repo();
        assert!(repo.food_entries().is_empty());
        assert_eq!(repo.water_state(), WaterState::default());
    }

    #[test]
    fn test_food_entries_roundtrip() {
        let repo = memory_repo();
        let now = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let entries = vec![
            FoodEntry::logged("Toast", MealType::Breakfast, now),
            FoodEntry::pantry("Almonds", now),
        ];

        repo.save_food_entries(&entries).unwrap();
        assert_eq!(repo.food_entries(), entries);
    }

    #[test]
    fn test_corrupt_food_entries_load_empty() {
        let repo = memory_repo();
        repo.store()
            .write(StoreKey::FoodEntries, "[{\"name\": 42}]")
            .unwrap();
        assert!(repo.food_entries().is_empty());
    }

    #[test]
    fn test_try_food_entries_treats_corrupt_as_empty() {
        let repo = memory_repo();
        assert!(repo.try_food_entries().unwrap().is_empty());

        repo.store().write(StoreKey::FoodEntries, "not json").unwrap();
        assert!(repo.try_food_entries().unwrap().is_empty());
    }

    #[test]
    fn test_try_food_entries_reports_read_errors() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the record file should be makes the read fail.
        let record = temp_dir.path().join(StoreKey::FoodEntries.filename());
        std::fs::create_dir(record).unwrap();

        let repo = StoreRepository::new(FileStore::new(temp_dir.path()));
        assert!(matches!(
            repo.try_food_entries(),
            Err(StorageError::Io(_, _))
        ));
        assert!(repo.food_entries().is_empty());
    }

    #[test]
    fn test_water_state_is_one_record() {
        let repo = memory_repo();
        repo.save_water_state(&WaterState::new(3, 10)).unwrap();

        assert!(repo.store().contains(StoreKey::WaterState));
        assert!(!repo.store().contains(StoreKey::WaterIntake));
        assert!(!repo.store().contains(StoreKey::WaterGoal));

        let state = repo.water_state();
        assert_eq!(state.intake, 3);
        assert_eq!(state.goal, 10);
    }

    #[test]
    fn test_water_state_falls_back_to_legacy_records() {
        let repo = memory_repo();
        repo.store().save(StoreKey::WaterIntake, &5u32).unwrap();
        repo.store().save(StoreKey::WaterGoal, &6u32).unwrap();

        let state = repo.water_state();
        assert_eq!(state.intake, 5);
        assert_eq!(state.goal, 6);
    }

    #[test]
    fn test_corrupt_legacy_intake_is_zero() {
        let repo = memory_repo();
        repo.store().write(StoreKey::WaterIntake, "oops").unwrap();

        let intake: u32 = repo.store().load(StoreKey::WaterIntake, 0);
        assert_eq!(intake, 0);
        assert_eq!(repo.water_state().intake, 0);
    }

    #[test]
    fn test_zero_goal_on_disk_is_clamped() {
        let repo = memory_repo();
        repo.store()
            .write(StoreKey::WaterState, r#"{"intake": 2, "goal": 0}"#)
            .unwrap();

        let state = repo.water_state();
        assert_eq!(state.intake, 2);
        assert_eq!(state.goal, 1);
        assert!(state.day.is_none());
    }

    #[test]
    fn test_file_repository_persists() {
        let temp_dir = TempDir::new().unwrap();
        let now = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let entry = FoodEntry::logged("Toast", MealType::Breakfast, now);

        {
            let repo = StoreRepository::new(FileStore::new(temp_dir.path()));
            repo.save_food_entries(std::slice::from_ref(&entry)).unwrap();
            repo.save_water_state(&WaterState::new(1, 8)).unwrap();
        }

        let repo = StoreRepository::new(FileStore::new(temp_dir.path()));
        assert_eq!(repo.food_entries(), vec![entry]);
        assert_eq!(repo.water_state().intake, 1);
    }
}
