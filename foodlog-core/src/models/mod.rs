mod food_entry;
mod form;
mod meal_type;
mod nutrition;
mod water;

pub use food_entry::FoodEntry;
pub use form::FoodForm;
pub use meal_type::MealType;
pub use nutrition::Nutrition;
pub use water::{WaterState, DEFAULT_WATER_GOAL};
