//! # Walkr Core Library
//!
//! This library provides the core logic for Walkr, a short-workout generator
//! with a work/rest interval timer. All operations are available through the
//! standalone `walkr` CLI, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: fixed, read-only exercise collection
//! - **Generator**: filter → randomized selection → assembly into a
//!   shareable workout. Pure apart from the caller-supplied RNG
//! - **Timer**: a pure state machine (`step`) wrapped by an engine that
//!   emits events. The caller supplies the once-per-second tick, either
//!   directly or through the async driver
//! - **Storage**: SQLite workout store and TOML configuration
//!
//! ## Key Components
//!
//! - [`WorkoutGenerator`]: the generation pipeline
//! - [`SessionTimer`]: live session engine
//! - [`Database`]: workout persistence
//! - [`Config`]: application configuration

pub mod catalog;
pub mod error;
pub mod events;
pub mod generator;
pub mod share;
pub mod storage;
pub mod timer;

pub use catalog::{Catalog, Equipment, Exercise, Goal, Intensity};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use events::Event;
pub use generator::{
    generate_workout, GeneratedWorkout, IntervalStructure, WorkoutGenerator, WorkoutRequest,
};
pub use share::{ShareAction, SharePlatform};
pub use storage::{Config, Database, WorkoutRecord};
pub use timer::{Phase, SessionCommand, SessionEnd, SessionPlan, SessionTimer, TimerState};
