use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal_type::MealType;
use super::nutrition::Nutrition;

/// A logged food, or a pantry item when `is_pantry_item` is set.
///
/// Both kinds live in the same collection. Pantry items never carry a date
/// or time; daily entries always carry both. Use [`FoodEntry::logged`] and
/// [`FoodEntry::pantry`] to build entries that respect this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,
    pub meal_type: MealType,
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    /// Photo as a `data:` URI.
    pub image: Option<String>,
    #[serde(default, with = "clock_time")]
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_pantry_item: bool,
}

impl FoodEntry {
    /// Creates a daily log entry stamped with the local day and minute of `now`.
    pub fn logged(name: impl Into<String>, meal_type: MealType, now: DateTime<Local>) -> Self {
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now.time());
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            meal_type,
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            image: None,
            time: Some(time),
            date: Some(now.date_naive()),
            timestamp: now.with_timezone(&Utc),
            is_pantry_item: false,
        }
    }

    /// Creates a pantry item. Pantry items are always of type `meal`.
    pub fn pantry(name: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            meal_type: MealType::Meal,
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            image: None,
            time: None,
            date: None,
            timestamp: now.with_timezone(&Utc),
            is_pantry_item: true,
        }
    }

    /// Copies a pantry item into a fresh daily entry with its own id.
    pub fn from_pantry(item: &FoodEntry, meal_type: MealType, now: DateTime<Local>) -> Self {
        let mut entry =
            Self::logged(item.name.clone(), meal_type, now).with_nutrition(item.nutrition());
        entry.image = item.image.clone();
        entry
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.calories = nutrition.calories;
        self.protein = nutrition.protein;
        self.carbs = nutrition.carbs;
        self.fat = nutrition.fat;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// "HH:MM" for daily entries, empty for pantry items.
    pub fn time_label(&self) -> String {
        self.time
            .map(|t| t.format(clock_time::FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for FoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count().max(10)))?;

        match (self.date, self.time) {
            (Some(date), Some(_)) => {
                writeln!(f, "{} • {} {}", self.meal_type, date, self.time_label())?
            }
            _ => writeln!(f, "{} • pantry", self.meal_type)?,
        }

        let nutrition = self.nutrition();
        if !nutrition.is_empty() {
            writeln!(f, "\nNutrition: {}", nutrition)?;
        }

        if self.image.is_some() {
            writeln!(f, "Photo: attached")?;
        }

        Ok(())
    }
}

/// Serializes an optional clock time as "HH:MM".
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            NaiveTime::parse_from_str(&s, FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}
