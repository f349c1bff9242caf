//! Pantry: foods saved for quick logging.

use chrono::{DateTime, Local};
use clap::{Args, Subcommand};
use foodlog_core::FoodForm;
use std::io;
use std::path::PathBuf;

use super::render::entry_line;
use super::{
    delete_confirmed, load_photo, parse_daily_meal_type, resolve_entry, FoodJournal, NutritionArgs,
    OutputFormat,
};

#[derive(Args)]
pub struct PantryCommand {
    #[command(subcommand)]
    pub command: PantrySubcommand,
}

#[derive(Subcommand)]
pub enum PantrySubcommand {
    /// List saved foods
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Save a food to the pantry
    Add {
        /// What food are you adding?
        name: String,

        #[command(flatten)]
        nutrition: NutritionArgs,

        /// Photo of the food (image file)
        #[arg(long, value_name = "PATH")]
        photo: Option<PathBuf>,
    },

    /// Log a pantry food for today
    Log {
        /// Pantry item ID (UUID or unique prefix)
        id: String,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "snack")]
        meal_type: String,
    },

    /// Remove a food from the pantry
    Remove {
        /// Pantry item ID (UUID or unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl PantryCommand {
    pub fn run(
        &self,
        journal: &FoodJournal,
        now: DateTime<Local>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PantrySubcommand::List { format } => {
                let items = journal.pantry();
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
                    OutputFormat::Text => {
                        if items.is_empty() {
                            println!("Your pantry is empty");
                            println!("Save foods you eat often with 'foodlog pantry add <name>'");
                            return Ok(());
                        }
                        println!("Pantry");
                        println!("{}", "-".repeat(60));
                        for item in &items {
                            println!("{}", entry_line(item));
                        }
                        println!("\nTotal: {} item(s)", items.len());
                    }
                }
                Ok(())
            }

            PantrySubcommand::Add {
                name,
                nutrition,
                photo,
            } => {
                let form = FoodForm::new(name.as_str())
                    .pantry()
                    .nutrition(nutrition.into())
                    .image(load_photo(photo.as_deref())?);

                match journal.add_food(&form, now)? {
                    Some(item) => {
                        println!("Food added to pantry!");
                        println!("{}", entry_line(&item));
                    }
                    None => println!("Nothing added: food name is empty."),
                }
                Ok(())
            }

            PantrySubcommand::Log { id, meal_type } => {
                let meal_type = parse_daily_meal_type(meal_type)?;

                let item = resolve_entry(&journal.pantry(), id)?;
                let entry = journal
                    .log_from_pantry(item.id, meal_type, now)?
                    .ok_or_else(|| format!("Pantry item not found: {}", id))?;

                println!("Food logged successfully!");
                println!("{}", entry_line(&entry));
                Ok(())
            }

            PantrySubcommand::Remove { id, force } => {
                let item = resolve_entry(&journal.pantry(), id)?;

                let prompt = format!("Remove '{}' from pantry?", item.name);
                if !delete_confirmed(journal, &item, &prompt, *force, &mut io::stdin().lock())? {
                    println!("Removal cancelled.");
                    return Ok(());
                }

                println!("Removed from pantry: {}", item.name);
                Ok(())
            }
        }
    }
}
