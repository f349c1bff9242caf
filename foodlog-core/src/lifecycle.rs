//! Collection-level operations over food entries.
//!
//! Every function takes the whole collection and returns a new one (or a
//! view of it). Persisting the result is up to the caller.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::FoodEntry;

/// Puts `entry` at the front. Insertion order, not timestamp, decides display order.
pub fn add_entry(collection: &[FoodEntry], entry: FoodEntry) -> Vec<FoodEntry> {
    let mut entries = Vec::with_capacity(collection.len() + 1);
    entries.push(entry);
    entries.extend_from_slice(collection);
    entries
}

/// Removes the entry with `id`. Unknown ids leave the collection unchanged.
pub fn delete_entry(collection: &[FoodEntry], id: Uuid) -> Vec<FoodEntry> {
    collection.iter().filter(|e| e.id != id).cloned().collect()
}

pub fn find_entry(collection: &[FoodEntry], id: Uuid) -> Option<&FoodEntry> {
    collection.iter().find(|e| e.id == id)
}

/// Daily entries logged on `today`.
pub fn filter_today(collection: &[FoodEntry], today: NaiveDate) -> Vec<&FoodEntry> {
    collection
        .iter()
        .filter(|e| !e.is_pantry_item && e.date == Some(today))
        .collect()
}

pub fn filter_pantry(collection: &[FoodEntry]) -> Vec<&FoodEntry> {
    collection.iter().filter(|e| e.is_pantry_item).collect()
}

/// Daily entries grouped by date, most recent date first.
///
/// Entries keep their collection order inside each group. Pantry items and
/// entries without a date are left out.
pub fn group_by_date(collection: &[FoodEntry]) -> Vec<(NaiveDate, Vec<&FoodEntry>)> {
    let mut groups: Vec<(NaiveDate, Vec<&FoodEntry>)> = Vec::new();

    for entry in collection.iter().filter(|e| !e.is_pantry_item) {
        let Some(date) = entry.date else {
            continue;
        };
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, entries)) => entries.push(entry),
            None => groups.push((date, vec![entry])),
        }
    }

    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}
