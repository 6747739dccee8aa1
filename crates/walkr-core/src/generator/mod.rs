//! Workout generation: filter → select → assemble.
//!
//! Generation is pure apart from the random source, which is always passed
//! in by the caller. Seed a [`rand_pcg::Mcg128Xsl64`] for reproducible output.

pub mod assembler;
pub mod filter;
pub mod selection;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Equipment, Exercise, Goal};
use crate::error::{Result, ValidationError};

pub use assembler::IntervalStructure;
pub use filter::CandidatePool;

/// Accepted bounds for [`WorkoutRequest::time`]. The UI offers 5–30.
pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 180;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub goal: Goal,
    /// Minutes.
    pub time: u32,
    pub equipment: Equipment,
}

impl WorkoutRequest {
    pub fn new(goal: impl Into<Goal>, time: u32, equipment: impl Into<Equipment>) -> Self {
        Self {
            goal: goal.into(),
            time,
            equipment: equipment.into(),
        }
    }

    /// Only the duration is checked; goal and equipment are never rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&self.time) {
            return Err(ValidationError::TimeOutOfRange {
                got: self.time,
                min: MIN_MINUTES,
                max: MAX_MINUTES,
            });
        }
        Ok(())
    }
}

/// A finished workout. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub id: String,
    pub title: String,
    pub structure: IntervalStructure,
    pub exercises: Vec<Exercise>,
    pub finisher: String,
    pub share_text: String,
    /// Requested minutes.
    pub duration: u32,
    pub goal: Goal,
    pub equipment: Equipment,
    /// Set when the requested goal/equipment matched too little and the
    /// plain bodyweight pool was used instead.
    #[serde(default)]
    pub used_fallback: bool,
}

impl GeneratedWorkout {
    /// Title followed by the interval-structure line, as shown on screen.
    pub fn heading(&self) -> String {
        format!("{}\n{}", self.title, self.structure)
    }
}

/// Runs the generation pipeline against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutGenerator<'c> {
    catalog: &'c Catalog,
}

impl<'c> WorkoutGenerator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Candidates for `request`, after the bodyweight fallback if needed.
    pub fn candidates(&self, request: &WorkoutRequest) -> CandidatePool<'c> {
        filter::filter(self.catalog.exercises(), request)
    }

    /// Generate one workout.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the requested time is out of range, or
    /// if the catalog yields no candidates even after the fallback (an empty
    /// catalog, or one with no bodyweight exercises).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &WorkoutRequest,
        rng: &mut R,
    ) -> Result<GeneratedWorkout> {
        request.validate()?;

        let pool = self.candidates(request);
        if pool.is_empty() {
            return Err(ValidationError::EmptyCollection(
                "no exercises available after bodyweight fallback".into(),
            )
            .into());
        }

        let selected = selection::select(&pool.exercises, request.time, rng);
        let workout = assembler::assemble(&selected, request, pool.used_fallback, rng);
        tracing::debug!(
            id = %workout.id,
            exercises = workout.exercises.len(),
            fallback = workout.used_fallback,
            "generated workout"
        );
        Ok(workout)
    }
}

impl Default for WorkoutGenerator<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Generate from the built-in catalog with the thread-local RNG.
///
/// # Errors
///
/// See [`WorkoutGenerator::generate`].
pub fn generate_workout(request: &WorkoutRequest) -> Result<GeneratedWorkout> {
    WorkoutGenerator::default().generate(request, &mut rand::thread_rng())
}
