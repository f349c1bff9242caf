use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of meal an entry belongs to.
///
/// `Meal` is reserved for pantry items, which are not tied to a time of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Meal,
}

impl MealType {
    /// Meal types offered when logging a daily entry.
    pub const DAILY: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::Snack => write!(f, "snack"),
            MealType::Meal => write!(f, "meal"),
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            "meal" => Ok(MealType::Meal),
            _ => Err(format!(
                "Invalid meal type '{}'. Valid options: breakfast, lunch, dinner, snack, meal",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_display() {
        assert_eq!(format!("{}", MealType::Breakfast), "breakfast");
        assert_eq!(format!("{}", MealType::Snack), "snack");
        assert_eq!(format!("{}", MealType::Meal), "meal");
    }

    #[test]
    fn test_meal_type_from_str() {
        assert_eq!(
            MealType::from_str("breakfast").unwrap(),
            MealType::Breakfast
        );
        assert_eq!(MealType::from_str("LUNCH").unwrap(), MealType::Lunch);
        assert_eq!(MealType::from_str(" Dinner ").unwrap(), MealType::Dinner);
        assert_eq!(MealType::from_str("meal").unwrap(), MealType::Meal);
    }

    #[test]
    fn test_meal_type_from_str_invalid() {
        assert!(MealType::from_str("brunch").is_err());
        assert!(MealType::from_str("").is_err());
    }

    #[test]
    fn test_meal_type_serializes_lowercase() {
        let json = serde_json::to_string(&MealType::Snack).unwrap();
        assert_eq!(json, "\"snack\"");

        let parsed: MealType = serde_json::from_str("\"meal\"").unwrap();
        assert_eq!(parsed, MealType::Meal);
    }

    #[test]
    fn test_daily_meal_types_exclude_meal() {
        assert!(!MealType::DAILY.contains(&MealType::Meal));
        assert_eq!(MealType::default(), MealType::Breakfast);
    }
}
