use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every session state change produces an Event.
/// Display layers render them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        workout_id: String,
        exercise_count: usize,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        time_remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        time_remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Entered a new work or rest phase, by timeout or by skip.
    PhaseChanged {
        exercise_index: usize,
        phase: Phase,
        duration_secs: u32,
        skipped: bool,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        total_elapsed_secs: u64,
        skipped: bool,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        is_paused: bool,
        exercise_index: usize,
        exercise_count: usize,
        /// Exercise being worked, or coming up after this rest.
        exercise: Option<String>,
        /// Shown during work: the next exercise, or the finisher after the last.
        next_up: Option<String>,
        time_remaining_secs: u32,
        total_elapsed_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short label, e.g. for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::SessionStarted { .. } => "session_started",
            Event::SessionPaused { .. } => "session_paused",
            Event::SessionResumed { .. } => "session_resumed",
            Event::PhaseChanged { .. } => "phase_changed",
            Event::SessionCompleted { .. } => "session_completed",
            Event::SessionReset { .. } => "session_reset",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::PhaseChanged {
            exercise_index: 2,
            phase: Phase::Rest,
            duration_secs: 15,
            skipped: false,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PhaseChanged");
        assert_eq!(json["phase"], "rest");
        assert_eq!(event.kind(), "phase_changed");
    }
}
