//! Candidate filtering.
//!
//! An exercise is a candidate when its goal, equipment and intensity are all
//! compatible with the request. If fewer than [`MIN_POOL`] exercises survive,
//! every filter is dropped and the pool becomes the catalog's plain
//! bodyweight subset, whatever the request asked for.

use crate::catalog::{Equipment, Exercise, Goal, Intensity};

use super::WorkoutRequest;

/// Smallest pool the selection step is allowed to draw from.
pub const MIN_POOL: usize = 4;

/// Exercises eligible for one request.
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    pub exercises: Vec<&'a Exercise>,
    /// True when the specific match came up short and the bodyweight
    /// pool was substituted.
    pub used_fallback: bool,
}

impl<'a> CandidatePool<'a> {
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Narrow `catalog` to the exercises compatible with `request`.
pub fn filter<'a>(catalog: &'a [Exercise], request: &WorkoutRequest) -> CandidatePool<'a> {
    let matched: Vec<&Exercise> = catalog.iter().filter(|e| matches(e, request)).collect();

    if matched.len() >= MIN_POOL {
        return CandidatePool {
            exercises: matched,
            used_fallback: false,
        };
    }

    tracing::warn!(
        goal = %request.goal,
        equipment = %request.equipment,
        matched = matched.len(),
        "too few matching exercises, falling back to the bodyweight pool"
    );
    CandidatePool {
        exercises: bodyweight_pool(catalog),
        used_fallback: true,
    }
}

/// Every exercise tagged exactly `Bodyweight`, catalog order.
pub fn bodyweight_pool(catalog: &[Exercise]) -> Vec<&Exercise> {
    catalog
        .iter()
        .filter(|e| e.equipment == Equipment::Bodyweight)
        .collect()
}

/// Whether `exercise` passes the goal, equipment and intensity rules.
pub fn matches(exercise: &Exercise, request: &WorkoutRequest) -> bool {
    goal_matches(&exercise.goal, &request.goal)
        && equipment_matches(&exercise.equipment, &request.equipment)
        && intensity_allowed(exercise.intensity, &request.goal)
}

fn goal_matches(exercise: &Goal, requested: &Goal) -> bool {
    exercise == requested
        || *exercise == Goal::FullBody
        || (*requested == Goal::Quick && Goal::QUICK_ACCEPTS.contains(exercise))
}

fn equipment_matches(exercise: &Equipment, requested: &Equipment) -> bool {
    match requested {
        Equipment::Bodyweight => exercise.is_equipment_free(),
        Equipment::FullGym => true,
        other => exercise == other || exercise.is_equipment_free(),
    }
}

fn intensity_allowed(intensity: Intensity, requested: &Goal) -> bool {
    match requested {
        Goal::Hiit => matches!(intensity, Intensity::Medium | Intensity::Hard),
        _ => true,
    }
}
