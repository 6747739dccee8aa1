mod display;
pub mod driver;
mod engine;
mod state;

pub use display::{format_clock, format_total};
pub use driver::{run_session, SessionCommand, SessionEnd};
pub use engine::SessionTimer;
pub use state::{
    rest_secs_for, step, Command, Phase, SessionPlan, TimerState, Transition, LONG_REST_SECS,
    SHORT_REST_SECS, WORK_SECS,
};
