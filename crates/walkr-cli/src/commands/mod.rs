pub mod catalog;
pub mod completions;
pub mod config;
pub mod generate;
pub mod session;
pub mod share;
pub mod workout;

use walkr_core::{Exercise, GeneratedWorkout};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// One catalog row for plain-text listings.
pub fn exercise_row(e: &Exercise) -> String {
    format!(
        "{:>3}  {:<28} {:<10} {:<11} {}",
        e.id,
        e.name,
        e.goal.as_str(),
        e.equipment.as_str(),
        e.intensity
    )
}

pub fn print_workout(workout: &GeneratedWorkout) {
    println!("{}", workout.share_text);
    if workout.used_fallback {
        eprintln!("note: too few matching exercises, using bodyweight moves instead");
    }
}
