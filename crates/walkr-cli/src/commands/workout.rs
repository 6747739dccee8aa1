use clap::Subcommand;
use walkr_core::Database;

use super::{exercise_row, print_workout, CmdResult};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show a saved workout
    Show {
        /// Workout ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// List the exercises instead of the share text
        #[arg(long)]
        detail: bool,
    },
    /// List saved workouts, newest first
    List {
        /// Maximum number of workouts
        #[arg(long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved workout
    Delete {
        /// Workout ID
        id: String,
    },
}

pub fn run(action: WorkoutAction) -> CmdResult {
    let db = Database::open()?;

    match action {
        WorkoutAction::Show { id, json, detail } => {
            let record = db.require_workout(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else if detail {
                println!("{}", record.workout.heading());
                for e in &record.workout.exercises {
                    println!("{}", exercise_row(e));
                }
                println!("Finisher: {}", record.workout.finisher);
            } else {
                print_workout(&record.workout);
            }
        }
        WorkoutAction::List { limit, json } => {
            let records = db.list_workouts(limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No saved workouts.");
            } else {
                for r in records {
                    let w = &r.workout;
                    println!(
                        "{}  {}  {:>3} min  {:<10} {:<11} {} exercises",
                        w.id,
                        r.created_at.format("%Y-%m-%d %H:%M"),
                        w.duration,
                        w.goal.as_str(),
                        w.equipment.as_str(),
                        w.exercises.len()
                    );
                }
            }
        }
        WorkoutAction::Delete { id } => {
            if db.delete_workout(&id)? {
                println!("Deleted {id}");
            } else {
                return Err(format!("no workout with id '{id}'").into());
            }
        }
    }
    Ok(())
}
