mod config_cmd;
mod history;
mod meal;
mod pantry;
mod render;
mod today;
mod water;

pub use config_cmd::ConfigCommand;
pub use history::HistoryCommand;
pub use meal::MealCommand;
pub use pantry::PantryCommand;
pub use today::TodayCommand;
pub use water::WaterCommand;

use clap::{Args, ValueEnum};
use foodlog_core::{
    encode_photo, FileStore, FoodEntry, Journal, MealType, Nutrition, StoreRepository,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use uuid::Uuid;

/// The journal every command works against.
pub type FoodJournal = Journal<StoreRepository<FileStore>>;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Optional nutrition values shared by the log and pantry commands
#[derive(Args, Clone, Default)]
pub struct NutritionArgs {
    /// Calories
    #[arg(long)]
    pub calories: Option<u32>,

    /// Protein in grams
    #[arg(long)]
    pub protein: Option<u32>,

    /// Carbohydrates in grams
    #[arg(long)]
    pub carbs: Option<u32>,

    /// Fat in grams
    #[arg(long)]
    pub fat: Option<u32>,
}

impl From<&NutritionArgs> for Nutrition {
    fn from(args: &NutritionArgs) -> Self {
        Nutrition {
            calories: args.calories,
            protein: args.protein,
            carbs: args.carbs,
            fat: args.fat,
        }
    }
}

/// Parses a meal type for a daily entry; `meal` is kept for pantry items.
fn parse_daily_meal_type(raw: &str) -> Result<MealType, Box<dyn std::error::Error>> {
    let meal_type: MealType = raw.parse()?;
    if !MealType::DAILY.contains(&meal_type) {
        return Err(format!(
            "Meal type '{}' is reserved for pantry items; choose breakfast, lunch, dinner or snack",
            meal_type
        )
        .into());
    }
    Ok(meal_type)
}

/// Finds an entry by full UUID or by a unique prefix of one.
fn resolve_entry(
    entries: &[FoodEntry],
    identifier: &str,
) -> Result<FoodEntry, Box<dyn std::error::Error>> {
    if let Ok(id) = Uuid::parse_str(identifier) {
        return entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| format!("Entry not found: {}", identifier).into());
    }

    let prefix = identifier.trim().to_lowercase();
    if prefix.is_empty() {
        return Err("Entry ID is required".into());
    }

    let matches: Vec<&FoodEntry> = entries
        .iter()
        .filter(|e| e.id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [entry] => Ok((*entry).clone()),
        [] => Err(format!("Entry not found: {}", identifier).into()),
        _ => Err(format!(
            "ID prefix '{}' matches {} entries; use more characters",
            identifier,
            matches.len()
        )
        .into()),
    }
}

/// Reads the optional photo into a data URI.
fn load_photo(path: Option<&Path>) -> Result<Option<String>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(encode_photo(path)?)),
        None => Ok(None),
    }
}

/// Asks a yes/no question, reading the answer from `input`.
///
/// Anything but "y" declines, including end of input.
fn confirm_with(
    input: &mut impl BufRead,
    prompt: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Deletes `entry` unless the user declines the prompt.
///
/// Returns whether the entry was deleted.
fn delete_confirmed(
    journal: &FoodJournal,
    entry: &FoodEntry,
    prompt: &str,
    force: bool,
    input: &mut impl BufRead,
) -> Result<bool, Box<dyn std::error::Error>> {
    if !force && !confirm_with(input, prompt)? {
        return Ok(false);
    }

    journal.delete_food(entry.id)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use foodlog_core::FoodForm;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn entries() -> Vec<FoodEntry> {
        let now = Local.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();
        let mut a = FoodEntry::logged("Eggs", MealType::Breakfast, now);
        a.id = Uuid::parse_str("aaaa1111-0000-4000-8000-000000000001").unwrap();
        let mut b = FoodEntry::logged("Toast", MealType::Breakfast, now);
        b.id = Uuid::parse_str("aaaa2222-0000-4000-8000-000000000002").unwrap();
        vec![a, b]
    }

    #[test]
    fn test_resolve_full_uuid() {
        let entries = entries();
        let found = resolve_entry(&entries, "aaaa2222-0000-4000-8000-000000000002").unwrap();
        assert_eq!(found.name, "Toast");
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let entries = entries();
        let found = resolve_entry(&entries, "AAAA1").unwrap();
        assert_eq!(found.name, "Eggs");
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let entries = entries();
        let err = resolve_entry(&entries, "aaaa").unwrap_err();
        assert!(err.to_string().contains("matches 2 entries"));
    }

    #[test]
    fn test_resolve_unknown() {
        let entries = entries();
        assert!(resolve_entry(&entries, "ffff").is_err());
        assert!(resolve_entry(&entries, "ffffffff-0000-4000-8000-000000000000").is_err());
        assert!(resolve_entry(&entries, "").is_err());
    }

    #[test]
    fn test_parse_daily_meal_type() {
        assert_eq!(parse_daily_meal_type("Lunch").unwrap(), MealType::Lunch);
        assert_eq!(parse_daily_meal_type(" snack ").unwrap(), MealType::Snack);

        let err = parse_daily_meal_type("meal").unwrap_err();
        assert!(err.to_string().contains("reserved for pantry items"));
        assert!(parse_daily_meal_type("brunch").is_err());
    }

    #[test]
    fn test_nutrition_args_conversion() {
        let args = NutritionArgs {
            calories: Some(120),
            fat: Some(3),
            ..Default::default()
        };
        let nutrition = Nutrition::from(&args);
        assert_eq!(nutrition.calories, Some(120));
        assert_eq!(nutrition.protein, None);
        assert_eq!(nutrition.fat, Some(3));
    }

    #[test]
    fn test_confirm_declines_by_default() {
        for answer in ["n\n", "\n", "", "yes\n"] {
            let mut input = Cursor::new(answer);
            assert!(!confirm_with(&mut input, "Delete?").unwrap(), "{:?}", answer);
        }
    }

    #[test]
    fn test_confirm_accepts_y() {
        let mut input = Cursor::new(" Y \n");
        assert!(confirm_with(&mut input, "Delete?").unwrap());
    }

    #[test]
    fn test_declined_delete_keeps_entries() {
        let temp_dir = TempDir::new().unwrap();
        let journal = Journal::new(StoreRepository::new(FileStore::new(temp_dir.path())));
        let now = Local.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();
        let entry = journal
            .add_food(&FoodForm::new("Oatmeal"), now)
            .unwrap()
            .unwrap();
        let before = journal.entries();

        let mut input = Cursor::new("n\n");
        let deleted = delete_confirmed(&journal, &entry, "Delete?", false, &mut input).unwrap();
        assert!(!deleted);
        assert_eq!(journal.entries(), before);

        let mut input = Cursor::new("y\n");
        assert!(delete_confirmed(&journal, &entry, "Delete?", false, &mut input).unwrap());
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_forced_delete_skips_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let journal = Journal::new(StoreRepository::new(FileStore::new(temp_dir.path())));
        let now = Local.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();
        let entry = journal
            .add_food(&FoodForm::new("Almonds").pantry(), now)
            .unwrap()
            .unwrap();

        let mut input = Cursor::new("");
        assert!(delete_confirmed(&journal, &entry, "Remove?", true, &mut input).unwrap());
        assert!(journal.pantry().is_empty());
    }
}
