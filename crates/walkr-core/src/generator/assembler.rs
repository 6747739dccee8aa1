//! Workout assembly: title, interval structure, finisher and share text.
//!
//! The share text is consumed verbatim by share links and by anything that
//! displays a saved workout, so its line layout is fixed:
//!
//! ```text
//! Your WALKR Workout (10 min, Bodyweight)
//! 45 sec work, 15 sec rest between exercises
//! • <caption>
//! • <caption>
//! Finish strong: <finisher>
//!
//! Copy this workout & challenge your friends!
//!
//! #Walkr #WorkoutChallenge #FitnessMotivation
//! ```

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Equipment, Exercise};

use super::{GeneratedWorkout, WorkoutRequest};

/// Closing micro-exercises; one is appended to every workout.
pub const FINISHERS: [&str; 5] = [
    "50 Jumping Jacks",
    "30 sec Victory Dance",
    "1 min Celebration Plank",
    "20 Victory Squats",
    "Flex in the Mirror",
];

/// Fixed call-to-action block that ends every share text.
pub const CLOSING: &str = indoc::indoc! {"
    Copy this workout & challenge your friends!

    #Walkr #WorkoutChallenge #FitnessMotivation"};

pub const BULLET: &str = "• ";
pub const FINISHER_PREFIX: &str = "Finish strong: ";

/// Work phase length shared by every interval structure.
pub const WORK_SECS: u32 = 45;

const ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How the selected exercises are meant to be strung together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalStructure {
    /// Circuit repeated `rounds` times, resting between rounds.
    Rounds { rounds: u32, rest_secs: u32 },
    /// One pass with a work/rest interval per exercise.
    Intervals { work_secs: u32, rest_secs: u32 },
}

impl IntervalStructure {
    /// Structure for a workout of `minutes`. Bands are checked longest first.
    pub fn for_minutes(minutes: u32) -> Self {
        if minutes >= 25 {
            IntervalStructure::Rounds {
                rounds: minutes.div_ceil(12),
                rest_secs: 30,
            }
        } else if minutes >= 15 {
            IntervalStructure::Intervals {
                work_secs: WORK_SECS,
                rest_secs: 30,
            }
        } else {
            IntervalStructure::Intervals {
                work_secs: WORK_SECS,
                rest_secs: 15,
            }
        }
    }
}

impl fmt::Display for IntervalStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalStructure::Rounds { rounds, rest_secs } => write!(
                f,
                "Complete {rounds} rounds with {rest_secs} sec rest between rounds"
            ),
            IntervalStructure::Intervals {
                work_secs,
                rest_secs,
            } => write!(
                f,
                "{work_secs} sec work, {rest_secs} sec rest between exercises"
            ),
        }
    }
}

pub fn title(minutes: u32, equipment: &Equipment) -> String {
    format!("Your WALKR Workout ({minutes} min, {equipment})")
}

/// Compose the share text. See the module docs for the layout.
pub fn share_text(
    title: &str,
    structure: &IntervalStructure,
    exercises: &[Exercise],
    finisher: &str,
) -> String {
    let mut lines = Vec::with_capacity(exercises.len() + 4);
    lines.push(title.to_string());
    lines.push(structure.to_string());
    lines.extend(exercises.iter().map(|e| format!("{BULLET}{}", e.caption)));
    lines.push(format!("{FINISHER_PREFIX}{finisher}"));
    lines.push(String::new());
    lines.push(CLOSING.to_string());
    lines.join("\n")
}

pub fn pick_finisher<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FINISHERS.choose(rng).copied().unwrap_or(FINISHERS[0])
}

/// Short random base-36 token. Collision-tolerant, not a secret.
pub fn workout_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Build the final workout from an already selected exercise list.
pub fn assemble<R: Rng + ?Sized>(
    selected: &[&Exercise],
    request: &WorkoutRequest,
    used_fallback: bool,
    rng: &mut R,
) -> GeneratedWorkout {
    let exercises: Vec<Exercise> = selected.iter().map(|e| (*e).clone()).collect();
    let title = title(request.time, &request.equipment);
    let structure = IntervalStructure::for_minutes(request.time);
    let finisher = pick_finisher(rng);
    let share_text = share_text(&title, &structure, &exercises, finisher);

    GeneratedWorkout {
        id: workout_id(rng),
        title,
        structure,
        exercises,
        finisher: finisher.to_string(),
        share_text,
        duration: request.time,
        goal: request.goal.clone(),
        equipment: request.equipment.clone(),
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Goal, Intensity};
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn ex(id: u32) -> Exercise {
        Exercise {
            id,
            name: format!("Move {id}"),
            goal: Goal::Cardio,
            equipment: Equipment::Bodyweight,
            intensity: Intensity::Easy,
            caption: format!("Move {id}: go"),
            description: None,
        }
    }

    #[test]
    fn structure_lines_by_band() {
        assert_eq!(
            IntervalStructure::for_minutes(10).to_string(),
            "45 sec work, 15 sec rest between exercises"
        );
        assert_eq!(
            IntervalStructure::for_minutes(14).to_string(),
            "45 sec work, 15 sec rest between exercises"
        );
        assert_eq!(
            IntervalStructure::for_minutes(15).to_string(),
            "45 sec work, 30 sec rest between exercises"
        );
        assert_eq!(
            IntervalStructure::for_minutes(20).to_string(),
            "45 sec work, 30 sec rest between exercises"
        );
        assert_eq!(
            IntervalStructure::for_minutes(25).to_string(),
            "Complete 3 rounds with 30 sec rest between rounds"
        );
        assert_eq!(
            IntervalStructure::for_minutes(30).to_string(),
            "Complete 3 rounds with 30 sec rest between rounds"
        );
        assert_eq!(
            IntervalStructure::for_minutes(37).to_string(),
            "Complete 4 rounds with 30 sec rest between rounds"
        );
    }

    #[test]
    fn structure_is_deterministic() {
        for minutes in 1..=60 {
            assert_eq!(
                IntervalStructure::for_minutes(minutes),
                IntervalStructure::for_minutes(minutes)
            );
        }
    }

    #[test]
    fn title_embeds_minutes_and_equipment() {
        assert_eq!(
            title(20, &Equipment::FullGym),
            "Your WALKR Workout (20 min, Full Gym)"
        );
    }

    #[test]
    fn share_text_layout() {
        let exercises = vec![ex(1), ex(2)];
        let text = share_text(
            "Your WALKR Workout (10 min, Bodyweight)",
            &IntervalStructure::for_minutes(10),
            &exercises,
            "Flex in the Mirror",
        );
        let expected = "Your WALKR Workout (10 min, Bodyweight)\n\
                        45 sec work, 15 sec rest between exercises\n\
                        • Move 1: go\n\
                        • Move 2: go\n\
                        Finish strong: Flex in the Mirror\n\
                        \n\
                        Copy this workout & challenge your friends!\n\
                        \n\
                        #Walkr #WorkoutChallenge #FitnessMotivation";
        assert_eq!(text, expected);
    }

    #[test]
    fn finisher_comes_from_fixed_set() {
        let mut rng = Mcg128Xsl64::seed_from_u64(3);
        for _ in 0..100 {
            assert!(FINISHERS.contains(&pick_finisher(&mut rng)));
        }
    }

    #[test]
    fn ids_are_base36_and_vary() {
        let mut rng = Mcg128Xsl64::seed_from_u64(9);
        let a = workout_id(&mut rng);
        let b = workout_id(&mut rng);
        assert_eq!(a.len(), 9);
        assert!(a.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn assemble_keeps_selection_order() {
        let exercises = vec![ex(3), ex(1), ex(2), ex(4)];
        let refs: Vec<&Exercise> = exercises.iter().collect();
        let request = WorkoutRequest::new("Cardio", 10, "Bodyweight");
        let mut rng = Mcg128Xsl64::seed_from_u64(11);
        let workout = assemble(&refs, &request, false, &mut rng);
        let ids: Vec<u32> = workout.exercises.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(workout.duration, 10);
        assert!(workout.share_text.ends_with(CLOSING));
        assert!(workout
            .share_text
            .contains(&format!("{FINISHER_PREFIX}{}", workout.finisher)));
    }
}
