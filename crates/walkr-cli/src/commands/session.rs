use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use walkr_core::timer::{format_clock, format_total, run_session};
use walkr_core::{Config, Database, Event, Phase, SessionCommand, SessionEnd, SessionTimer};

use super::CmdResult;

const SESSION_KEY: &str = "session";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Run a saved workout live in this terminal (p pause, s skip, r reset, q quit)
    Run {
        /// Workout ID
        id: String,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Start a background session for a saved workout
    Start {
        /// Workout ID
        id: String,
    },
    /// Pause the background session
    Pause,
    /// Resume the background session
    Resume,
    /// Skip the current phase
    Skip,
    /// Back to the first exercise, idle
    Reset,
    /// Print the session state as JSON
    Status,
    /// Abandon the background session
    Exit,
}

/// The engine plus the wall-clock instant its state was last brought up to date.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    timer: SessionTimer,
    synced_at: DateTime<Utc>,
}

impl StoredSession {
    /// Replay the whole seconds since the last sync as ticks.
    fn sync(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        if !self.timer.is_running() {
            self.synced_at = now;
            return Vec::new();
        }
        let secs = (now - self.synced_at).num_seconds().max(0);
        self.synced_at += chrono::Duration::seconds(secs);
        self.timer.advance_secs(secs as u64)
    }
}

fn load_session(db: &Database) -> Result<StoredSession, Box<dyn std::error::Error>> {
    let json = db
        .kv_get(SESSION_KEY)?
        .ok_or("no session in progress; start one with `walkr session start <id>`")?;
    Ok(serde_json::from_str(&json)?)
}

fn save_session(db: &Database, session: &StoredSession) -> CmdResult {
    let json = serde_json::to_string(session)?;
    db.kv_set(SESSION_KEY, &json)?;
    Ok(())
}

fn print_events(events: &[Event]) -> CmdResult {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}

/// Bring the stored session up to date, apply one command, store it again.
fn update<F>(db: &Database, apply: F) -> CmdResult
where
    F: FnOnce(&mut SessionTimer) -> Option<Event>,
{
    let mut session = load_session(db)?;
    let mut events = session.sync(Utc::now());
    events.extend(apply(&mut session.timer));
    print_events(&events)?;
    save_session(db, &session)
}

pub fn run(action: SessionAction) -> CmdResult {
    let db = Database::open()?;

    match action {
        SessionAction::Run { id, json } => {
            let workout = db.require_workout(&id)?.workout;
            run_live(SessionTimer::new(&workout), json)
        }
        SessionAction::Start { id } => {
            let workout = db.require_workout(&id)?.workout;
            let mut session = StoredSession {
                timer: SessionTimer::new(&workout),
                synced_at: Utc::now(),
            };
            let events: Vec<Event> = session.timer.start().into_iter().collect();
            print_events(&events)?;
            save_session(&db, &session)
        }
        SessionAction::Pause => update(&db, SessionTimer::pause),
        SessionAction::Resume => update(&db, SessionTimer::resume),
        SessionAction::Skip => update(&db, SessionTimer::skip),
        SessionAction::Reset => update(&db, SessionTimer::reset),
        SessionAction::Status => update(&db, |timer| Some(timer.snapshot())),
        SessionAction::Exit => {
            load_session(&db)?;
            db.kv_delete(SESSION_KEY)?;
            println!("{{\"type\": \"session_exited\"}}");
            Ok(())
        }
    }
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "p" | "pause" | "resume" => Some(SessionCommand::TogglePause),
        "s" | "skip" => Some(SessionCommand::Skip),
        "r" | "reset" => Some(SessionCommand::Reset),
        "start" | "go" => Some(SessionCommand::Start),
        "q" | "quit" | "exit" => Some(SessionCommand::Exit),
        _ => None,
    }
}

fn render(event: &Event) -> Option<String> {
    match event {
        Event::SessionStarted { exercise_count, .. } => {
            Some(format!("Starting {exercise_count} exercises. Let's go!"))
        }
        Event::SessionPaused { .. } => Some("Paused. Enter to resume.".into()),
        Event::SessionResumed { .. } => Some("Resumed.".into()),
        Event::PhaseChanged { .. } => None,
        Event::SessionCompleted {
            total_elapsed_secs, ..
        } => Some(format!(
            "Workout complete! Total time {}",
            format_total(*total_elapsed_secs)
        )),
        Event::SessionReset { .. } => Some("Reset. Type `start` to go again.".into()),
        Event::StateSnapshot {
            phase,
            is_paused,
            exercise_index,
            exercise_count,
            exercise,
            next_up,
            time_remaining_secs,
            total_elapsed_secs,
            ..
        } => {
            let label = match phase {
                Phase::Work => exercise.clone().unwrap_or_default(),
                Phase::Rest => "Rest".to_string(),
                Phase::Idle | Phase::Complete => return None,
            };
            let mut line = format!(
                "[{}/{}] {:<28} {}  total {}",
                exercise_index + 1,
                exercise_count,
                label,
                format_clock(*time_remaining_secs),
                format_total(*total_elapsed_secs)
            );
            if let Some(next) = next_up {
                line.push_str(&format!("  next: {next}"));
            }
            if *is_paused {
                line.push_str("  (paused)");
            }
            Some(line)
        }
    }
}

fn run_live(mut timer: SessionTimer, json: bool) -> CmdResult {
    let tick = Duration::from_millis(Config::load_or_default().session.tick_ms);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let end = runtime.block_on(async {
        let (tx, rx) = mpsc::channel(8);
        tx.send(SessionCommand::Start).await.ok();

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                match parse_command(&line) {
                    Some(command) => {
                        if tx.send(command).await.is_err() {
                            break;
                        }
                    }
                    None => eprintln!("commands: p pause/resume, s skip, r reset, start, q quit"),
                }
            }
            tracing::debug!("stdin closed");
        });

        run_session(&mut timer, tick, rx, |event| {
            if json {
                if let Ok(line) = serde_json::to_string(event) {
                    println!("{line}");
                }
            } else if let Some(line) = render(event) {
                println!("{line}");
            }
        })
        .await
    });

    if end == SessionEnd::Exited && !json {
        println!("Session ended.");
    }
    runtime.shutdown_background();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkr_core::{generate_workout, WorkoutRequest};

    fn stored() -> StoredSession {
        let workout = generate_workout(&WorkoutRequest::new("Cardio", 10, "Bodyweight")).unwrap();
        StoredSession {
            timer: SessionTimer::new(&workout),
            synced_at: Utc::now(),
        }
    }

    #[test]
    fn sync_replays_whole_seconds() {
        let mut session = stored();
        session.timer.start();
        let t0 = session.synced_at;
        session.sync(t0 + chrono::Duration::milliseconds(10_700));
        assert_eq!(session.timer.state().total_elapsed, 10);
        assert_eq!(session.synced_at, t0 + chrono::Duration::seconds(10));
        session.sync(t0 + chrono::Duration::seconds(50));
        assert_eq!(session.timer.phase(), Phase::Rest);
        assert_eq!(session.timer.state().time_remaining, 10);
    }

    #[test]
    fn sync_ignores_time_while_paused() {
        let mut session = stored();
        session.timer.start();
        session.timer.pause();
        let later = session.synced_at + chrono::Duration::seconds(120);
        assert!(session.sync(later).is_empty());
        assert_eq!(session.timer.state().total_elapsed, 0);
        assert_eq!(session.synced_at, later);
    }

    #[test]
    fn command_letters() {
        assert_eq!(parse_command("p"), Some(SessionCommand::TogglePause));
        assert_eq!(parse_command(" S "), Some(SessionCommand::Skip));
        assert_eq!(parse_command("q"), Some(SessionCommand::Exit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn work_snapshot_renders_clock_and_next_up() {
        let mut session = stored();
        session.timer.start();
        let line = render(&session.timer.snapshot()).unwrap();
        assert!(line.starts_with("[1/5]"));
        assert!(line.contains("00:45"));
        assert!(line.contains("next: "));
    }
}
