use chrono::NaiveDate;
use clap::{Args, Subcommand};
use foodlog_core::WaterState;
use serde_json::json;

use super::render::water_bar;
use super::{FoodJournal, OutputFormat};

#[derive(Args)]
pub struct WaterCommand {
    #[command(subcommand)]
    pub command: WaterSubcommand,
}

#[derive(Subcommand)]
pub enum WaterSubcommand {
    /// Show water intake against the goal
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Log one glass of water
    Add,

    /// Set intake and/or goal directly
    Set {
        /// Glasses drunk so far
        #[arg(long)]
        intake: Option<u32>,

        /// Target glasses (at least 1)
        #[arg(long)]
        goal: Option<u32>,
    },

    /// Set intake back to zero, keeping the goal
    Reset,
}

impl WaterCommand {
    pub fn run(
        &self,
        journal: &FoodJournal,
        today: NaiveDate,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WaterSubcommand::Show { format } => {
                let state = journal.water(today);
                match format {
                    OutputFormat::Json => {
                        let output = json!({
                            "intake": state.intake,
                            "goal": state.goal,
                            "progressPercent": state.progress_percent(),
                        });
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Text => print_state(&state),
                }
                Ok(())
            }

            WaterSubcommand::Add => {
                let state = journal.add_water(today)?;
                println!("Water logged!");
                print_state(&state);
                Ok(())
            }

            WaterSubcommand::Set { intake, goal } => {
                if intake.is_none() && goal.is_none() {
                    return Err("Provide --intake, --goal, or both".into());
                }
                if *goal == Some(0) {
                    return Err("Goal must be at least 1 glass".into());
                }

                let current = journal.water(today);
                let state = journal.set_water(
                    intake.unwrap_or(current.intake),
                    goal.unwrap_or(current.goal),
                    today,
                )?;
                println!("Water updated.");
                print_state(&state);
                Ok(())
            }

            WaterSubcommand::Reset => {
                let state = journal.reset_water(today)?;
                println!("Water intake reset.");
                print_state(&state);
                Ok(())
            }
        }
    }
}

fn print_state(state: &WaterState) {
    println!("Water: {}", water_bar(state));
    if state.goal_reached() {
        println!("Goal reached!");
    }
}
