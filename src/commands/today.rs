use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use super::render::{entry_line, long_date, print_daily_totals, water_bar};
use super::{FoodJournal, OutputFormat};
use foodlog_core::Nutrition;

/// Today's water and meals
#[derive(Args, Default)]
pub struct TodayCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TodayCommand {
    pub fn run(
        &self,
        journal: &FoodJournal,
        today: NaiveDate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let water = journal.water(today);
        let entries = journal.today(today);

        match self.format {
            OutputFormat::Json => {
                let output = json!({
                    "date": today,
                    "water": {
                        "intake": water.intake,
                        "goal": water.goal,
                        "progressPercent": water.progress_percent(),
                    },
                    "entries": entries,
                    "totals": Nutrition::total(&entries),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                let title = format!("Today - {}", long_date(today));
                println!("{}", title);
                println!("{}", "=".repeat(title.len()));
                println!();

                println!("Water: {}", water_bar(&water));
                println!();

                println!("Today's Meals");
                println!("{}", "-".repeat(60));
                if entries.is_empty() {
                    println!("  No meals logged yet");
                    println!("  Use 'foodlog meal log <name>' to add your first meal");
                } else {
                    for entry in &entries {
                        println!("{}", entry_line(entry));
                    }
                    print_daily_totals(&entries);
                }
            }
        }

        Ok(())
    }
}
