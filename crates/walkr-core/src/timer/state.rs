//! Pure session state machine.
//!
//! ```text
//! Idle ─start─▶ Work ─(0 | skip)─▶ Rest ─(0 | skip)─▶ Work (next exercise)
//!                 │                                      ...
//!                 └──── last exercise, (0 | skip) ─────▶ Complete
//! ```
//!
//! Paused is a flag layered on Work/Rest, not a phase. [`step`] is a pure
//! function of (state, plan, command); scheduling the once-per-second
//! [`Command::Tick`] is the caller's business.

use serde::{Deserialize, Serialize};

use crate::generator::GeneratedWorkout;

/// Length of every work phase.
pub const WORK_SECS: u32 = 45;
/// Rest between exercises for workouts of at most [`SHORT_REST_MAX_MINUTES`].
pub const SHORT_REST_SECS: u32 = 15;
pub const LONG_REST_SECS: u32 = 30;
pub const SHORT_REST_MAX_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Work,
    Rest,
    Complete,
}

/// Fixed parameters of one session, derived once from the workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub exercise_count: usize,
    pub rest_secs: u32,
}

impl SessionPlan {
    pub fn new(exercise_count: usize, duration_minutes: u32) -> Self {
        Self {
            exercise_count,
            rest_secs: rest_secs_for(duration_minutes),
        }
    }

    pub fn for_workout(workout: &GeneratedWorkout) -> Self {
        Self::new(workout.exercises.len(), workout.duration)
    }
}

/// Rest length for a workout of `minutes`.
pub fn rest_secs_for(minutes: u32) -> u32 {
    if minutes <= SHORT_REST_MAX_MINUTES {
        SHORT_REST_SECS
    } else {
        LONG_REST_SECS
    }
}

/// Mutable state of one live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub current_exercise_index: usize,
    pub is_active: bool,
    pub is_paused: bool,
    /// Seconds left in the current phase.
    pub time_remaining: u32,
    pub is_resting: bool,
    /// Seconds ticked while active and unpaused.
    pub total_elapsed: u64,
    /// Distinguishes Complete from Idle; both are inactive.
    #[serde(default)]
    pub is_complete: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            current_exercise_index: 0,
            is_active: false,
            is_paused: false,
            time_remaining: WORK_SECS,
            is_resting: false,
            total_elapsed: 0,
            is_complete: false,
        }
    }
}

impl TimerState {
    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if !self.is_active {
            Phase::Idle
        } else if self.is_resting {
            Phase::Rest
        } else {
            Phase::Work
        }
    }

    /// Ticks only count while this holds.
    pub fn is_running(&self) -> bool {
        self.is_active && !self.is_paused
    }

    /// 0.0 ..= 1.0 for a progress bar; a rest counts as half an exercise.
    pub fn progress(&self, exercise_count: usize) -> f64 {
        if exercise_count == 0 {
            return 0.0;
        }
        let half = if self.is_resting { 0.5 } else { 0.0 };
        (self.current_exercise_index as f64 + half) / exercise_count as f64
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Start,
    TogglePause,
    Skip,
    Reset,
    /// One elapsed second.
    Tick,
}

/// What a [`step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Command had no effect in this state.
    Ignored,
    Started,
    Paused,
    Resumed,
    /// A second elapsed without changing phase.
    Ticked,
    EnteredRest { index: usize },
    EnteredWork { index: usize },
    Completed,
    Reset,
}

/// Apply `command` to `state`.
pub fn step(state: &TimerState, plan: &SessionPlan, command: Command) -> (TimerState, Transition) {
    let mut next = state.clone();
    let transition = match command {
        Command::Start => {
            if state.is_active || state.is_complete {
                Transition::Ignored
            } else if plan.exercise_count == 0 {
                complete(&mut next)
            } else {
                next = TimerState {
                    is_active: true,
                    ..TimerState::default()
                };
                Transition::Started
            }
        }
        Command::TogglePause => {
            if !state.is_active {
                Transition::Ignored
            } else {
                next.is_paused = !state.is_paused;
                if next.is_paused {
                    Transition::Paused
                } else {
                    Transition::Resumed
                }
            }
        }
        Command::Skip => {
            if state.is_active {
                exhaust_phase(&mut next, plan)
            } else {
                Transition::Ignored
            }
        }
        Command::Reset => {
            next = TimerState::default();
            Transition::Reset
        }
        Command::Tick => {
            if !state.is_running() {
                Transition::Ignored
            } else {
                next.time_remaining = next.time_remaining.saturating_sub(1);
                next.total_elapsed += 1;
                if next.time_remaining == 0 {
                    exhaust_phase(&mut next, plan)
                } else {
                    Transition::Ticked
                }
            }
        }
    };
    (next, transition)
}

/// The current phase ran out (or was skipped).
fn exhaust_phase(state: &mut TimerState, plan: &SessionPlan) -> Transition {
    let has_next = state.current_exercise_index + 1 < plan.exercise_count;
    match (state.is_resting, has_next) {
        (false, true) => {
            state.is_resting = true;
            state.time_remaining = plan.rest_secs;
            Transition::EnteredRest {
                index: state.current_exercise_index,
            }
        }
        (true, true) => {
            state.current_exercise_index += 1;
            state.is_resting = false;
            state.time_remaining = WORK_SECS;
            Transition::EnteredWork {
                index: state.current_exercise_index,
            }
        }
        // No rest after the final exercise.
        (_, false) => complete(state),
    }
}

fn complete(state: &mut TimerState) -> Transition {
    state.is_active = false;
    state.is_paused = false;
    state.is_resting = false;
    state.time_remaining = 0;
    state.is_complete = true;
    Transition::Completed
}
