use chrono::{DateTime, Local};

use super::food_entry::FoodEntry;
use super::meal_type::MealType;
use super::nutrition::Nutrition;

/// Input gathered before a food is added to the log or the pantry.
#[derive(Debug, Clone, Default)]
pub struct FoodForm {
    pub name: String,
    pub meal_type: MealType,
    pub nutrition: Nutrition,
    /// Photo as a `data:` URI, see [`crate::photo::encode_photo`].
    pub image: Option<String>,
    pub is_pantry: bool,
}

impl FoodForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    pub fn nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn pantry(mut self) -> Self {
        self.is_pantry = true;
        self
    }

    /// Builds the entry, or `None` when the name is blank.
    ///
    /// The name is trimmed. Pantry forms ignore the selected meal type.
    pub fn build(&self, now: DateTime<Local>) -> Option<FoodEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        let entry = if self.is_pantry {
            FoodEntry::pantry(name, now)
        } else {
            FoodEntry::logged(name, self.meal_type, now)
        }
        .with_nutrition(self.nutrition);

        Some(match &self.image {
            Some(image) => entry.with_image(image.clone()),
            None => entry,
        })
    }
}
