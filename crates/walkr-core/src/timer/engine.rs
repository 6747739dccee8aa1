//! Session timer engine.
//!
//! Wraps the pure [`step`] function with the workout it is running and turns
//! transitions into [`Event`]s. It has no internal thread: the caller calls
//! `tick()` once per elapsed second while the session is running.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SessionTimer::new(&workout);
//! timer.start();
//! // Once per second:
//! if let Some(event) = timer.tick() { /* phase changed or completed */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::state::{step, Command, Phase, SessionPlan, TimerState, Transition, WORK_SECS};
use crate::events::Event;
use crate::generator::GeneratedWorkout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    workout_id: String,
    exercises: Vec<String>,
    finisher: String,
    plan: SessionPlan,
    state: TimerState,
}

impl SessionTimer {
    /// Starts in Idle, ready at the first exercise.
    pub fn new(workout: &GeneratedWorkout) -> Self {
        Self {
            workout_id: workout.id.clone(),
            exercises: workout.exercises.iter().map(|e| e.name.clone()).collect(),
            finisher: workout.finisher.clone(),
            plan: SessionPlan::for_workout(workout),
            state: TimerState::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn workout_id(&self) -> &str {
        &self.workout_id
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress(self.plan.exercise_count)
    }

    pub fn current_exercise(&self) -> Option<&str> {
        self.exercises
            .get(self.state.current_exercise_index)
            .map(String::as_str)
    }

    /// During work: the following exercise, or the finisher after the last one.
    pub fn next_up(&self) -> Option<&str> {
        if self.phase() != Phase::Work {
            return None;
        }
        self.exercises
            .get(self.state.current_exercise_index + 1)
            .map(String::as_str)
            .or(Some(self.finisher.as_str()))
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase(),
            is_paused: self.state.is_paused,
            exercise_index: self.state.current_exercise_index,
            exercise_count: self.plan.exercise_count,
            exercise: self.current_exercise().map(str::to_string),
            next_up: self.next_up().map(str::to_string),
            time_remaining_secs: self.state.time_remaining,
            total_elapsed_secs: self.state.total_elapsed,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.apply(Command::Start, false)
    }

    /// Pause if running, resume if paused.
    pub fn toggle_pause(&mut self) -> Option<Event> {
        self.apply(Command::TogglePause, false)
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state.is_paused {
            return None;
        }
        self.toggle_pause()
    }

    pub fn resume(&mut self) -> Option<Event> {
        if !self.state.is_paused {
            return None;
        }
        self.toggle_pause()
    }

    /// End the current phase now, exactly as if it had run out.
    pub fn skip(&mut self) -> Option<Event> {
        self.apply(Command::Skip, true)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.apply(Command::Reset, false)
    }

    /// One elapsed second. Returns an event only when the phase changes.
    pub fn tick(&mut self) -> Option<Event> {
        self.apply(Command::Tick, false)
    }

    /// Replay `secs` ticks, stopping early once the session stops running.
    pub fn advance_secs(&mut self, secs: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..secs {
            if !self.is_running() {
                break;
            }
            events.extend(self.tick());
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn apply(&mut self, command: Command, skipped: bool) -> Option<Event> {
        let (next, transition) = step(&self.state, &self.plan, command);
        self.state = next;
        if !matches!(transition, Transition::Ignored | Transition::Ticked) {
            tracing::debug!(?command, ?transition, "session transition");
        }
        let at = Utc::now();
        match transition {
            Transition::Ignored | Transition::Ticked => None,
            Transition::Started => Some(Event::SessionStarted {
                workout_id: self.workout_id.clone(),
                exercise_count: self.plan.exercise_count,
                duration_secs: WORK_SECS,
                at,
            }),
            Transition::Paused => Some(Event::SessionPaused {
                time_remaining_secs: self.state.time_remaining,
                at,
            }),
            Transition::Resumed => Some(Event::SessionResumed {
                time_remaining_secs: self.state.time_remaining,
                at,
            }),
            Transition::EnteredRest { index } => Some(Event::PhaseChanged {
                exercise_index: index,
                phase: Phase::Rest,
                duration_secs: self.plan.rest_secs,
                skipped,
                at,
            }),
            Transition::EnteredWork { index } => Some(Event::PhaseChanged {
                exercise_index: index,
                phase: Phase::Work,
                duration_secs: WORK_SECS,
                skipped,
                at,
            }),
            Transition::Completed => Some(Event::SessionCompleted {
                total_elapsed_secs: self.state.total_elapsed,
                skipped,
                at,
            }),
            Transition::Reset => Some(Event::SessionReset { at }),
        }
    }
}
