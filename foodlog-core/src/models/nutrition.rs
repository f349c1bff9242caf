use serde::{Deserialize, Serialize};
use std::fmt;

use super::food_entry::FoodEntry;

/// Calories and macronutrients, each optional.
///
/// `None` means "not provided", which is different from zero. The same shape
/// is used for a single entry and for totals over several entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
}

impl Nutrition {
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }

    /// Sums the provided values of every entry.
    ///
    /// A total stays `None` unless at least one entry provided that value.
    pub fn total<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodEntry>,
    {
        entries
            .into_iter()
            .fold(Nutrition::default(), |acc, entry| acc.add(&entry.nutrition()))
    }

    fn add(self, other: &Nutrition) -> Self {
        Self {
            calories: sum(self.calories, other.calories),
            protein: sum(self.protein, other.protein),
            carbs: sum(self.carbs, other.carbs),
            fat: sum(self.fat, other.fat),
        }
    }
}

fn sum(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.saturating_add(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Formats as "300 cal | 12g protein | 40g carbs | 9g fat", skipping absent values.
impl fmt::Display for Nutrition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(calories) = self.calories {
            parts.push(format!("{} cal", calories));
        }
        if let Some(protein) = self.protein {
            parts.push(format!("{}g protein", protein));
        }
        if let Some(carbs) = self.carbs {
            parts.push(format!("{}g carbs", carbs));
        }
        if let Some(fat) = self.fat {
            parts.push(format!("{}g fat", fat));
        }
        write!(f, "{}", parts.join(" | "))
    }
}
