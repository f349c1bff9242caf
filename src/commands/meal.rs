use chrono::{DateTime, Local};
use clap::{Args, Subcommand};
use foodlog_core::photo::extension_for_mime;
use foodlog_core::{decode_data_uri, FoodForm};
use std::fs;
use std::io;
use std::path::PathBuf;

use super::render::entry_line;
use super::{
    delete_confirmed, load_photo, parse_daily_meal_type, resolve_entry, FoodJournal, NutritionArgs,
    OutputFormat,
};

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Log something you ate
    Log {
        /// What did you eat?
        name: String,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "breakfast")]
        meal_type: String,

        #[command(flatten)]
        nutrition: NutritionArgs,

        /// Photo of the food (image file)
        #[arg(long, value_name = "PATH")]
        photo: Option<PathBuf>,
    },

    /// Show an entry's details
    Show {
        /// Entry ID (UUID or unique prefix)
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Save an entry's photo to a file
    Photo {
        /// Entry ID (UUID or unique prefix)
        id: String,

        /// Where to write the image; the extension is added if missing
        #[arg(long, short, value_name = "PATH")]
        output: PathBuf,
    },

    /// Delete an entry
    Delete {
        /// Entry ID (UUID or unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl MealCommand {
    pub fn run(
        &self,
        journal: &FoodJournal,
        now: DateTime<Local>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealSubcommand::Log {
                name,
                meal_type,
                nutrition,
                photo,
            } => {
                let meal_type = parse_daily_meal_type(meal_type)?;

                let form = FoodForm::new(name.as_str())
                    .meal_type(meal_type)
                    .nutrition(nutrition.into())
                    .image(load_photo(photo.as_deref())?);

                match journal.add_food(&form, now)? {
                    Some(entry) => {
                        println!("Food logged successfully!");
                        println!("{}", entry_line(&entry));
                    }
                    None => println!("Nothing logged: food name is empty."),
                }
                Ok(())
            }

            MealSubcommand::Show { id, format } => {
                let entry = resolve_entry(&journal.entries(), id)?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                    OutputFormat::Text => {
                        print!("{}", entry);
                        println!("\nID: {}", entry.id);
                    }
                }
                Ok(())
            }

            MealSubcommand::Photo { id, output } => {
                let entry = resolve_entry(&journal.entries(), id)?;
                let uri = entry
                    .image
                    .as_deref()
                    .ok_or_else(|| format!("'{}' has no photo", entry.name))?;

                let (mime, bytes) = decode_data_uri(uri)?;
                let path = if output.extension().is_some() {
                    output.clone()
                } else {
                    output.with_extension(extension_for_mime(&mime))
                };
                fs::write(&path, bytes)?;

                println!("Saved photo of '{}' to {}", entry.name, path.display());
                Ok(())
            }

            MealSubcommand::Delete { id, force } => {
                let entry = resolve_entry(&journal.entries(), id)?;

                let prompt = format!("Delete '{}'?", entry.name);
                if !delete_confirmed(journal, &entry, &prompt, *force, &mut io::stdin().lock())? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                println!("Deleted: {}", entry.name);
                Ok(())
            }
        }
    }
}
