//! Exercise catalog: the fact base every selection runs against.
//!
//! The built-in catalog is provided through [`get_default_catalog`]; other
//! catalogs (custom JSON files, small test fixtures) plug in through the
//! [`ExerciseCatalog`] trait.

use crate::types::*;
use crate::Result;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of built-in exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// Criteria for [`ExerciseCatalog::filter`]; `None` matches everything
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub muscle_group: Option<MuscleGroup>,
    pub level: Option<ExperienceLevel>,
    pub equipment: Option<Equipment>,
}

impl ExerciseFilter {
    fn matches(&self, exercise: &Exercise) -> bool {
        self.muscle_group.map_or(true, |g| exercise.muscle_group == g)
            && self.level.map_or(true, |l| exercise.level == l)
            && self.equipment.map_or(true, |e| exercise.equipment == e)
    }
}

/// Read-only query interface over a collection of exercises
pub trait ExerciseCatalog {
    /// Every exercise, in definition order
    fn exercises(&self) -> &[Exercise];

    fn lookup_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises().iter().find(|e| e.id == id)
    }

    /// Case-insensitive exact match on the display name
    fn lookup_by_name(&self, name: &str) -> Option<&Exercise> {
        let wanted = name.trim().to_lowercase();
        self.exercises()
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
    }

    fn filter(&self, criteria: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises()
            .iter()
            .filter(|e| criteria.matches(e))
            .collect()
    }
}

/// An in-memory exercise catalog
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog for Catalog {
    fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Load a catalog from a JSON array of exercises
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let exercises: Vec<Exercise> = serde_json::from_str(&contents)?;
        tracing::info!("Loaded {} exercises from {:?}", exercises.len(), path);
        Ok(Self::new(exercises))
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    /// Muscle groups with no exercises only produce a warning, since
    /// generation tolerates short sessions.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();

        if self.exercises.is_empty() {
            errors.push("Catalog has no exercises".to_string());
        }

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push(format!("Exercise '{}' has empty ID", exercise.name));
            } else if !seen_ids.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }

            if exercise.name.trim().is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            } else if !seen_names.insert(exercise.name.to_lowercase()) {
                errors.push(format!(
                    "Duplicate exercise name '{}' (names must be unique ignoring case)",
                    exercise.name
                ));
            }
        }

        for group in MuscleGroup::ALL {
            if !self.exercises.iter().any(|e| e.muscle_group == group) {
                tracing::warn!("Catalog has no exercises for {:?}", group);
            }
        }

        errors
    }
}

/// Compact constructor for the built-in table below
#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    movement_type: MovementType,
    level: ExperienceLevel,
    equipment: Equipment,
    description: &str,
    media_url: Option<&str>,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_group,
        movement_type,
        level,
        equipment,
        description: description.into(),
        media_url: media_url.map(Into::into),
    }
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    use Equipment::*;
    use ExperienceLevel::*;
    use MovementType::*;
    use MuscleGroup::*;

    let exercises = vec![
        // ====================================================================
        // Chest
        // ====================================================================
        exercise(
            "bench_press",
            "Barbell Bench Press",
            Chest,
            Compound,
            Intermediate,
            Barbell,
            "Compound press for the chest, front delts and triceps.",
            Some("https://i.imgur.com/r69vB2s.gif"),
        ),
        exercise(
            "incline_dumbbell_press",
            "Incline Dumbbell Press",
            Chest,
            Compound,
            Intermediate,
            Dumbbell,
            "Incline variation that biases the upper chest.",
            Some("https://i.imgur.com/1g8g1e3.gif"),
        ),
        exercise(
            "dumbbell_fly",
            "Dumbbell Fly",
            Chest,
            Isolation,
            Beginner,
            Dumbbell,
            "Isolation movement for the pecs.",
            Some("https://i.imgur.com/sS5g2ez.gif"),
        ),
        exercise(
            "chest_dip",
            "Chest Dip",
            Chest,
            Compound,
            Advanced,
            Bodyweight,
            "Bodyweight dip leaning forward; chest, shoulders and triceps.",
            Some("https://i.imgur.com/7g4g3fE.gif"),
        ),
        exercise(
            "push_up",
            "Push-up",
            Chest,
            Compound,
            Beginner,
            Bodyweight,
            "Fundamental bodyweight pressing movement.",
            None,
        ),
        exercise(
            "cable_crossover",
            "Cable Crossover",
            Chest,
            Isolation,
            Intermediate,
            Cable,
            "Cable fly emphasising the inner chest.",
            None,
        ),
        exercise(
            "dumbbell_bench_press",
            "Dumbbell Bench Press",
            Chest,
            Compound,
            Beginner,
            Dumbbell,
            "Dumbbell alternative to the bench press with a longer range of motion.",
            None,
        ),
        // ====================================================================
        // Legs (quads, glutes)
        // ====================================================================
        exercise(
            "back_squat",
            "Barbell Back Squat",
            Legs,
            Compound,
            Intermediate,
            Barbell,
            "Foundational lower-body strength movement.",
            Some("https://i.imgur.com/v58y2XT.gif"),
        ),
        exercise(
            "bodyweight_squat",
            "Bodyweight Squat",
            Legs,
            Compound,
            Beginner,
            Bodyweight,
            "Unloaded squat pattern for the lower body.",
            None,
        ),
        exercise(
            "leg_press",
            "Leg Press",
            Legs,
            Compound,
            Beginner,
            Machine,
            "Machine squat alternative for quads and glutes.",
            Some("https://i.imgur.com/YQ8g0nS.gif"),
        ),
        exercise(
            "dumbbell_lunge",
            "Dumbbell Lunge",
            Legs,
            Compound,
            Beginner,
            Dumbbell,
            "Unilateral movement for legs and glutes.",
            Some("https://i.imgur.com/3qg3g1d.gif"),
        ),
        exercise(
            "leg_extension",
            "Leg Extension",
            Legs,
            Isolation,
            Beginner,
            Machine,
            "Machine isolation for the quadriceps.",
            Some("https://i.imgur.com/sS5fE2z.gif"),
        ),
        exercise(
            "goblet_squat",
            "Goblet Squat",
            Legs,
            Compound,
            Beginner,
            Kettlebell,
            "Front-loaded squat that is friendly to new lifters.",
            None,
        ),
        exercise(
            "bulgarian_split_squat",
            "Bulgarian Split Squat",
            Legs,
            Compound,
            Intermediate,
            Dumbbell,
            "Rear-foot-elevated split squat for quads and glutes.",
            None,
        ),
        exercise(
            "hip_thrust",
            "Barbell Hip Thrust",
            Legs,
            Compound,
            Intermediate,
            Barbell,
            "Primary glute builder.",
            None,
        ),
        exercise(
            "assisted_pistol_squat",
            "Assisted Pistol Squat",
            Legs,
            Compound,
            Advanced,
            Bodyweight,
            "Single-leg squat for strength and balance.",
            None,
        ),
        // ====================================================================
        // Hamstrings
        // ====================================================================
        exercise(
            "lying_leg_curl",
            "Lying Leg Curl",
            Hamstrings,
            Isolation,
            Beginner,
            Machine,
            "Machine isolation for the hamstrings.",
            Some("https://i.imgur.com/tY3B3g1.gif"),
        ),
        exercise(
            "romanian_deadlift",
            "Barbell Romanian Deadlift",
            Hamstrings,
            Compound,
            Advanced,
            Barbell,
            "Hip hinge targeting hamstrings and glutes.",
            Some("https://i.imgur.com/j3g2g1d.gif"),
        ),
        exercise(
            "dumbbell_romanian_deadlift",
            "Dumbbell Romanian Deadlift",
            Hamstrings,
            Compound,
            Intermediate,
            Dumbbell,
            "Dumbbell version of the Romanian deadlift.",
            None,
        ),
        exercise(
            "glute_bridge",
            "Glute Bridge",
            Hamstrings,
            Isolation,
            Beginner,
            Bodyweight,
            "Activates and strengthens glutes and hamstrings.",
            None,
        ),
        // ====================================================================
        // Back
        // ====================================================================
        exercise(
            "conventional_deadlift",
            "Conventional Deadlift",
            Back,
            Compound,
            Advanced,
            Barbell,
            "Full-body pull that builds the posterior chain.",
            Some("https://i.imgur.com/w2C3aQG.gif"),
        ),
        exercise(
            "pull_up",
            "Pull-up",
            Back,
            Compound,
            Intermediate,
            Bodyweight,
            "Vertical pull for the lats and biceps.",
            Some("https://i.imgur.com/V70g430.gif"),
        ),
        exercise(
            "barbell_row",
            "Barbell Row",
            Back,
            Compound,
            Intermediate,
            Barbell,
            "Horizontal pull for the upper back.",
            Some("https://i.imgur.com/8QlH1h2.gif"),
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            Back,
            Compound,
            Beginner,
            Machine,
            "Pull-up alternative for the lats.",
            Some("https://i.imgur.com/uG9g9e1.gif"),
        ),
        exercise(
            "seated_cable_row",
            "Seated Cable Row",
            Back,
            Compound,
            Beginner,
            Cable,
            "Controlled horizontal pull for the mid back.",
            None,
        ),
        exercise(
            "dumbbell_row",
            "Dumbbell Row",
            Back,
            Compound,
            Beginner,
            Dumbbell,
            "Single-arm row to train each side independently.",
            None,
        ),
        exercise(
            "inverted_row",
            "Inverted Row",
            Back,
            Compound,
            Intermediate,
            Bodyweight,
            "Bodyweight horizontal pull; barbell row alternative.",
            None,
        ),
        // ====================================================================
        // Shoulders
        // ====================================================================
        exercise(
            "face_pull",
            "Face Pull",
            Shoulders,
            Isolation,
            Beginner,
            Cable,
            "Rear delt and shoulder health staple.",
            None,
        ),
        exercise(
            "barbell_overhead_press",
            "Barbell Overhead Press",
            Shoulders,
            Compound,
            Intermediate,
            Barbell,
            "Standing vertical press for the shoulders.",
            Some("https://i.imgur.com/Y2s5CPA.gif"),
        ),
        exercise(
            "dumbbell_shoulder_press",
            "Dumbbell Shoulder Press",
            Shoulders,
            Compound,
            Beginner,
            Dumbbell,
            "Dumbbell alternative to the overhead press.",
            None,
        ),
        exercise(
            "dumbbell_lateral_raise",
            "Dumbbell Lateral Raise",
            Shoulders,
            Isolation,
            Beginner,
            Dumbbell,
            "Isolation for the side delts.",
            Some("https://i.imgur.com/6M1Z2mD.gif"),
        ),
        exercise(
            "arnold_press",
            "Arnold Press",
            Shoulders,
            Compound,
            Intermediate,
            Dumbbell,
            "Rotating press that works all three delt heads.",
            None,
        ),
        exercise(
            "pike_push_up",
            "Pike Push-up",
            Shoulders,
            Compound,
            Intermediate,
            Bodyweight,
            "Shoulder-focused push-up; handstand push-up progression.",
            None,
        ),
        // ====================================================================
        // Biceps
        // ====================================================================
        exercise(
            "barbell_curl",
            "Barbell Curl",
            Biceps,
            Isolation,
            Beginner,
            Barbell,
            "Isolation for the biceps.",
            Some("https://i.imgur.com/4S0t2uR.gif"),
        ),
        exercise(
            "hammer_curl",
            "Dumbbell Hammer Curl",
            Biceps,
            Isolation,
            Beginner,
            Dumbbell,
            "Neutral-grip curl for the brachialis and forearms.",
            None,
        ),
        exercise(
            "alternating_dumbbell_curl",
            "Alternating Dumbbell Curl",
            Biceps,
            Isolation,
            Beginner,
            Dumbbell,
            "Classic curl alternating arms.",
            None,
        ),
        // ====================================================================
        // Triceps
        // ====================================================================
        exercise(
            "cable_triceps_pushdown",
            "Cable Triceps Pushdown",
            Triceps,
            Isolation,
            Beginner,
            Cable,
            "Isolation for the triceps.",
            Some("https://i.imgur.com/8Q8D5gE.gif"),
        ),
        exercise(
            "skull_crusher",
            "Skull Crusher",
            Triceps,
            Isolation,
            Intermediate,
            Barbell,
            "Lying triceps extension.",
            Some("https://i.imgur.com/5S5fE2z.gif"),
        ),
        exercise(
            "close_grip_bench_press",
            "Close-Grip Bench Press",
            Triceps,
            Compound,
            Intermediate,
            Barbell,
            "Bench press variation that emphasises the triceps.",
            None,
        ),
        exercise(
            "diamond_push_up",
            "Diamond Push-up",
            Triceps,
            Compound,
            Intermediate,
            Bodyweight,
            "Close-hand push-up for extra triceps emphasis.",
            None,
        ),
        // ====================================================================
        // Abdominals
        // ====================================================================
        exercise(
            "hanging_leg_raise",
            "Hanging Leg Raise",
            Abdominals,
            Isolation,
            Intermediate,
            Bodyweight,
            "Advanced movement for the rectus abdominis and hip flexors.",
            None,
        ),
        exercise(
            "plank",
            "Plank",
            Abdominals,
            Isolation,
            Beginner,
            Bodyweight,
            "Isometric core staple.",
            None,
        ),
        exercise(
            "crunch",
            "Crunch",
            Abdominals,
            Isolation,
            Beginner,
            Bodyweight,
            "Classic upper-abdominal movement.",
            None,
        ),
    ];

    Catalog::new(exercises)
}
