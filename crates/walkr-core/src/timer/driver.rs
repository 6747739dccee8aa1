//! Live session driver.
//!
//! Thin async adapter around [`SessionTimer`]: a `tokio` interval supplies
//! the once-per-second tick and an mpsc channel supplies user commands. The
//! interval branch is only polled while the session is running, so nothing
//! ticks while idle, paused, or complete.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::engine::SessionTimer;
use super::state::Phase;
use crate::events::Event;

/// Commands accepted from the user while a session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCommand {
    Start,
    TogglePause,
    Skip,
    Reset,
    /// Navigate away; the session is abandoned as-is.
    Exit,
}

/// Why [`run_session`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    /// Exit command, or every command sender was dropped.
    Exited,
}

/// Drive `timer` until it completes or the user exits.
///
/// `on_event` receives every transition event, followed by a fresh
/// [`Event::StateSnapshot`] after each handled tick or command.
pub async fn run_session<F>(
    timer: &mut SessionTimer,
    tick: Duration,
    mut commands: mpsc::Receiver<SessionCommand>,
    mut on_event: F,
) -> SessionEnd
where
    F: FnMut(&Event),
{
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a fresh interval fires immediately; skip it.
    interval.reset();

    loop {
        tokio::select! {
            _ = interval.tick(), if timer.is_running() => {
                if let Some(event) = timer.tick() {
                    on_event(&event);
                }
                on_event(&timer.snapshot());
                if timer.phase() == Phase::Complete {
                    return SessionEnd::Completed;
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    return SessionEnd::Exited;
                };
                let event = match command {
                    SessionCommand::Start => timer.start(),
                    SessionCommand::TogglePause => timer.toggle_pause(),
                    SessionCommand::Skip => timer.skip(),
                    SessionCommand::Reset => timer.reset(),
                    SessionCommand::Exit => {
                        tracing::debug!(workout_id = timer.workout_id(), "session exited");
                        return SessionEnd::Exited;
                    }
                };
                if let Some(event) = event {
                    // A (re)started or resumed session gets a full second
                    // before its first tick.
                    if matches!(event, Event::SessionStarted { .. } | Event::SessionResumed { .. }) {
                        interval.reset();
                    }
                    on_event(&event);
                    on_event(&timer.snapshot());
                }
                if timer.phase() == Phase::Complete {
                    return SessionEnd::Completed;
                }
            }
        }
    }
}
