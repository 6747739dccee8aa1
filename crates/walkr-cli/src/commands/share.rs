use clap::Args;
use walkr_core::share::{self, ShareAction, SharePlatform};
use walkr_core::{Config, Database};

use super::CmdResult;

#[derive(Args)]
pub struct ShareArgs {
    /// Workout ID
    id: String,
    /// twitter, instagram or tiktok. Without it, print the workout link.
    #[arg(long)]
    platform: Option<SharePlatform>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShareArgs) -> CmdResult {
    let config = Config::load_or_default();
    let record = Database::open()?.require_workout(&args.id)?;

    let action = match args.platform {
        Some(platform) => share::share_action(&record.workout, platform, &config.share.hashtags)?,
        None => ShareAction::Open {
            url: share::workout_url(&config.share.base_url, &record.workout.id)?.to_string(),
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&action)?);
        return Ok(());
    }
    match action {
        ShareAction::Open { url } => println!("{url}"),
        ShareAction::CopyText { text } => {
            println!("{text}");
            eprintln!("Copy the text above and paste it into your post.");
        }
    }
    Ok(())
}
