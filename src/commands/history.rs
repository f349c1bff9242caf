use chrono::NaiveDate;
use clap::Args;
use foodlog_core::{FoodEntry, Nutrition};
use serde::Serialize;

use super::render::{entry_line, long_date, parse_date, print_daily_totals};
use super::{FoodJournal, OutputFormat};

/// Past meals grouped by day
#[derive(Args)]
pub struct HistoryCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Serialize)]
struct DayRecord<'a> {
    date: NaiveDate,
    entries: &'a [FoodEntry],
    totals: Nutrition,
}

impl HistoryCommand {
    pub fn run(&self, journal: &FoodJournal) -> Result<(), Box<dyn std::error::Error>> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;

        let days: Vec<(NaiveDate, Vec<FoodEntry>)> = journal
            .history()
            .into_iter()
            .filter(|(date, _)| in_range(*date, from, to))
            .collect();

        match self.format {
            OutputFormat::Json => {
                let records: Vec<DayRecord<'_>> = days
                    .iter()
                    .map(|(date, entries)| DayRecord {
                        date: *date,
                        entries,
                        totals: Nutrition::total(entries),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
            OutputFormat::Text => {
                if days.is_empty() {
                    println!("No history yet");
                    println!("Start logging meals to see your journey");
                    return Ok(());
                }

                for (i, (date, entries)) in days.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", long_date(*date));
                    println!("{}", "-".repeat(60));
                    for entry in entries {
                        println!("{}", entry_line(entry));
                    }
                    print_daily_totals(entries);
                }

                let total: usize = days.iter().map(|(_, entries)| entries.len()).sum();
                println!("\nTotal: {} meal(s) over {} day(s)", total, days.len());
            }
        }

        Ok(())
    }
}

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}
