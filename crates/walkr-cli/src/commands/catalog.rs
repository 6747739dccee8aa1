use clap::Args;
use walkr_core::{Catalog, Equipment, Goal};

use super::{exercise_row, CmdResult};

#[derive(Args)]
pub struct CatalogArgs {
    /// Only exercises tagged with this goal
    #[arg(long)]
    goal: Option<String>,
    /// Only exercises tagged with this equipment
    #[arg(long)]
    equipment: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CatalogArgs) -> CmdResult {
    let goal = args.goal.map(Goal::from);
    let equipment = args.equipment.map(Equipment::from);
    let exercises = Catalog::builtin().list(goal.as_ref(), equipment.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&exercises)?);
    } else if exercises.is_empty() {
        println!("No exercises match.");
    } else {
        for e in exercises {
            println!("{}", exercise_row(e));
        }
    }
    Ok(())
}
