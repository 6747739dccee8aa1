use clap::Args;
use walkr_core::{generate_workout, Config, Database, WorkoutRequest};

use super::{print_workout, CmdResult};

#[derive(Args)]
pub struct GenerateArgs {
    /// Training goal, e.g. "Strength", "Full Body", "HIIT"
    #[arg(long)]
    goal: Option<String>,
    /// Available minutes
    #[arg(long)]
    time: Option<u32>,
    /// Available equipment, e.g. "Bodyweight", "Dumbbells", "Full Gym"
    #[arg(long)]
    equipment: Option<String>,
    /// Print the workout as JSON
    #[arg(long)]
    json: bool,
    /// Keep the workout so it can be shared or run later
    #[arg(long)]
    save: bool,
}

pub fn run(args: GenerateArgs) -> CmdResult {
    let config = Config::load_or_default();
    let defaults = config.default_request();
    let request = WorkoutRequest {
        goal: args.goal.map_or(defaults.goal, Into::into),
        time: args.time.unwrap_or(defaults.time),
        equipment: args.equipment.map_or(defaults.equipment, Into::into),
    };

    let workout = generate_workout(&request)?;

    if args.save {
        Database::open()?.save_workout(&workout)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
    } else {
        print_workout(&workout);
        if args.save {
            println!("\nSaved as {}", workout.id);
        }
    }
    Ok(())
}
