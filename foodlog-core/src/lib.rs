//! Foodlog Core Library
//!
//! Food entries, pantry items and water tracking kept in local storage.

pub mod journal;
pub mod lifecycle;
pub mod models;
pub mod photo;
pub mod repository;
pub mod storage;

pub use journal::{Journal, JournalOptions};
pub use models::{FoodEntry, FoodForm, MealType, Nutrition, WaterState, DEFAULT_WATER_GOAL};
pub use photo::{decode_data_uri, encode_photo, PhotoError};
pub use repository::{Repository, StoreRepository};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StoreKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
