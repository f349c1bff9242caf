//! Text rendering shared by the views.

use chrono::NaiveDate;
use foodlog_core::{FoodEntry, Nutrition, WaterState};

const BAR_WIDTH: usize = 20;

/// First block of the UUID, enough to pick an entry on the command line.
pub fn short_id(entry: &FoodEntry) -> String {
    entry.id.to_string().chars().take(8).collect()
}

/// One line per entry: "  a1b2c3d4  07:45  breakfast  Oatmeal  (300 cal | 10g protein) [photo]"
pub fn entry_line(entry: &FoodEntry) -> String {
    let mut line = if entry.is_pantry_item {
        format!("  {}  {}", short_id(entry), entry.name)
    } else {
        format!(
            "  {}  {:5}  {:9}  {}",
            short_id(entry),
            entry.time_label(),
            entry.meal_type.to_string(),
            entry.name
        )
    };

    let nutrition = entry.nutrition();
    if !nutrition.is_empty() {
        line.push_str(&format!("  ({})", nutrition));
    }
    if entry.image.is_some() {
        line.push_str(" [photo]");
    }
    line
}

/// "[########------------] 3/8 glasses (37%)"
pub fn water_bar(state: &WaterState) -> String {
    let filled = state.progress_percent() as usize * BAR_WIDTH / 100;
    format!(
        "[{}{}] {} ({}%)",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        state,
        state.progress_percent()
    )
}

pub fn print_daily_totals(entries: &[FoodEntry]) {
    let totals = Nutrition::total(entries);
    if !totals.is_empty() {
        println!("  {}", "-".repeat(56));
        println!("  Daily Total: {}", totals);
    }
}

/// "Tuesday, January 14, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use foodlog_core::MealType;

    fn oatmeal() -> FoodEntry {
        let now = Local.with_ymd_and_hms(2025, 1, 14, 7, 45, 0).unwrap();
        FoodEntry::logged("Oatmeal", MealType::Breakfast, now).with_nutrition(Nutrition {
            calories: Some(300),
            ..Default::default()
        })
    }

    #[test]
    fn test_entry_line() {
        let entry = oatmeal();
        let line = entry_line(&entry);
        assert!(line.contains(&short_id(&entry)));
        assert!(line.contains("07:45"));
        assert!(line.contains("breakfast"));
        assert!(line.contains("Oatmeal"));
        assert!(line.contains("(300 cal)"));
        assert!(!line.contains("[photo]"));
    }

    #[test]
    fn test_entry_line_marks_photo() {
        let entry = oatmeal().with_image("data:image/png;base64,AA==");
        assert!(entry_line(&entry).ends_with("[photo]"));
    }

    #[test]
    fn test_short_id_length() {
        assert_eq!(short_id(&oatmeal()).len(), 8);
    }

    #[test]
    fn test_water_bar() {
        assert_eq!(
            water_bar(&WaterState::new(4, 8)),
            "[##########----------] 4/8 glasses (50%)"
        );
        assert!(water_bar(&WaterState::new(12, 8)).starts_with(&format!("[{}]", "#".repeat(20))));
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        assert_eq!(long_date(date), "Tuesday, January 14, 2025");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-14").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
        );
        assert!(parse_date("14/01/2025").is_err());
    }
}
