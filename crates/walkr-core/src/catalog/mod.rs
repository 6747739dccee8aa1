//! Exercise catalog.
//!
//! The catalog is a fixed, ordered, read-only collection of [`Exercise`]
//! records. The generator only ever reads from it.
//!
//! Goal and equipment categories are closed enums with an `Other` escape
//! hatch: parsing never fails, so a request carrying a category the catalog
//! has never heard of simply matches nothing specific and falls through to
//! the bodyweight pool.

mod builtin;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Training objective of an exercise or a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Strength,
    Cardio,
    FullBody,
    Hiit,
    Core,
    Mobility,
    /// "Quick Workout": accepts any goal in [`Goal::QUICK_ACCEPTS`].
    Quick,
    Other(String),
}

impl Goal {
    /// Goals accepted by the [`Goal::Quick`] sentinel.
    pub const QUICK_ACCEPTS: [Goal; 2] = [Goal::Cardio, Goal::FullBody];

    /// Every named goal, in display order.
    pub fn all() -> [Goal; 7] {
        [
            Goal::Strength,
            Goal::Cardio,
            Goal::FullBody,
            Goal::Hiit,
            Goal::Core,
            Goal::Mobility,
            Goal::Quick,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Goal::Strength => "Strength",
            Goal::Cardio => "Cardio",
            Goal::FullBody => "Full Body",
            Goal::Hiit => "HIIT",
            Goal::Core => "Core",
            Goal::Mobility => "Mobility",
            Goal::Quick => "Quick Workout",
            Goal::Other(s) => s,
        }
    }
}

impl FromStr for Goal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match normalize(s).as_str() {
            "strength" => Goal::Strength,
            "cardio" => Goal::Cardio,
            "full body" | "fullbody" => Goal::FullBody,
            "hiit" => Goal::Hiit,
            "core" => Goal::Core,
            "mobility" => Goal::Mobility,
            "quick" | "quick workout" => Goal::Quick,
            _ => Goal::Other(s.trim().to_string()),
        })
    }
}

/// Gear an exercise needs, or gear a user has available.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Equipment {
    Bodyweight,
    Wall,
    Chair,
    Dumbbells,
    Kettlebell,
    /// Requested only: everything in the catalog is fair game.
    FullGym,
    Other(String),
}

impl Equipment {
    /// Every named equipment category, in display order.
    pub fn all() -> [Equipment; 6] {
        [
            Equipment::Bodyweight,
            Equipment::Wall,
            Equipment::Chair,
            Equipment::Dumbbells,
            Equipment::Kettlebell,
            Equipment::FullGym,
        ]
    }

    /// Bodyweight, Wall and Chair need nothing a user can't find at home.
    pub fn is_equipment_free(&self) -> bool {
        matches!(
            self,
            Equipment::Bodyweight | Equipment::Wall | Equipment::Chair
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Wall => "Wall",
            Equipment::Chair => "Chair",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::FullGym => "Full Gym",
            Equipment::Other(s) => s,
        }
    }
}

impl FromStr for Equipment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match normalize(s).as_str() {
            "bodyweight" | "body weight" | "none" => Equipment::Bodyweight,
            "wall" => Equipment::Wall,
            "chair" => Equipment::Chair,
            "dumbbells" | "dumbbell" => Equipment::Dumbbells,
            "kettlebell" | "kettlebells" => Equipment::Kettlebell,
            "full gym" | "gym" => Equipment::FullGym,
            _ => Equipment::Other(s.trim().to_string()),
        })
    }
}

/// Difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intensity {
    Easy,
    Medium,
    #[serde(alias = "High")]
    Hard,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Easy => "Easy",
            Intensity::Medium => "Medium",
            Intensity::Hard => "Hard",
        }
    }
}

impl FromStr for Intensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "easy" => Ok(Intensity::Easy),
            "medium" => Ok(Intensity::Medium),
            "hard" | "high" => Ok(Intensity::Hard),
            _ => Err(ValidationError::InvalidValue {
                field: "intensity".into(),
                message: format!("expected Easy, Medium or Hard, got '{s}'"),
            }),
        }
    }
}

macro_rules! string_backed {
    ($($ty:ty),*) => {$(
        impl From<String> for $ty {
            fn from(s: String) -> Self {
                match s.parse() {
                    Ok(v) => v,
                    Err(never) => match never {},
                }
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> String {
                v.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

string_backed!(Goal, Equipment);

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub goal: Goal,
    pub equipment: Equipment,
    pub intensity: Intensity,
    /// Short social caption, used verbatim as a bullet in the share text.
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ordered, read-only exercise collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// The catalog shipped with the library.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog::new(builtin::exercises()))
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Exercises tagged with exactly this goal and/or equipment, catalog order.
    ///
    /// Plain listing, not the generator's matching rules.
    pub fn list(&self, goal: Option<&Goal>, equipment: Option<&Equipment>) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| goal.map_or(true, |g| &e.goal == g))
            .filter(|e| equipment.map_or(true, |eq| &e.equipment == eq))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_parsing_is_forgiving() {
        assert_eq!("full-body".parse::<Goal>().unwrap(), Goal::FullBody);
        assert_eq!("HIIT".parse::<Goal>().unwrap(), Goal::Hiit);
        assert_eq!("Quick Workout".parse::<Goal>().unwrap(), Goal::Quick);
        assert_eq!(
            "Yoga".parse::<Goal>().unwrap(),
            Goal::Other("Yoga".to_string())
        );
    }

    #[test]
    fn equipment_free_categories() {
        assert!(Equipment::Bodyweight.is_equipment_free());
        assert!(Equipment::Wall.is_equipment_free());
        assert!(Equipment::Chair.is_equipment_free());
        assert!(!Equipment::Dumbbells.is_equipment_free());
        assert!(!Equipment::FullGym.is_equipment_free());
    }

    #[test]
    fn categories_serialize_as_display_names() {
        let json = serde_json::to_string(&Equipment::FullGym).unwrap();
        assert_eq!(json, "\"Full Gym\"");
        let goal: Goal = serde_json::from_str("\"Full Body\"").unwrap();
        assert_eq!(goal, Goal::FullBody);
    }

    #[test]
    fn intensity_accepts_high_alias() {
        let i: Intensity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(i, Intensity::Hard);
        assert!("extreme".parse::<Intensity>().is_err());
    }

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        let mut ids: Vec<u32> = catalog.exercises().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn builtin_catalog_has_a_usable_bodyweight_pool() {
        let pool = Catalog::builtin().list(None, Some(&Equipment::Bodyweight));
        assert!(pool.len() >= 12);
    }

    #[test]
    fn list_filters_by_exact_tags() {
        let catalog = Catalog::builtin();
        let strength_db = catalog.list(Some(&Goal::Strength), Some(&Equipment::Dumbbells));
        assert!(!strength_db.is_empty());
        assert!(strength_db
            .iter()
            .all(|e| e.goal == Goal::Strength && e.equipment == Equipment::Dumbbells));
        assert_eq!(catalog.get(1).map(|e| e.id), Some(1));
        assert!(catalog.get(99_999).is_none());
    }
}
