//! Core domain types for the split generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise taxonomy (muscle groups, movement types, equipment, levels)
//! - Catalog entries
//! - Training styles and athlete profiles
//! - Generated plans (prescriptions, sessions, weekly plans)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Exercise Taxonomy
// ============================================================================

/// Athlete experience level, also used as an exercise's recommended minimum
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Equipment an exercise requires
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Machine,
    Bodyweight,
    Kettlebell,
    Cable,
}

/// Primary muscle group targeted by an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Legs,
    Hamstrings,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Abdominals,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 8] = [
        MuscleGroup::Chest,
        MuscleGroup::Legs,
        MuscleGroup::Hamstrings,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Abdominals,
    ];
}

/// Multi-joint (compound) or single-joint (isolation) movement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Compound,
    Isolation,
}

/// An exercise definition from the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub movement_type: MovementType,
    pub level: ExperienceLevel,
    pub equipment: Equipment,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Equipment restriction applied while selecting exercises
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EquipmentFilter {
    Any,
    Only(BTreeSet<Equipment>),
}

impl EquipmentFilter {
    pub fn bodyweight_only() -> Self {
        EquipmentFilter::Only(BTreeSet::from([Equipment::Bodyweight]))
    }

    pub fn allows(&self, equipment: Equipment) -> bool {
        match self {
            EquipmentFilter::Any => true,
            EquipmentFilter::Only(allowed) => allowed.contains(&equipment),
        }
    }
}

// ============================================================================
// Training Style and Profile
// ============================================================================

/// Training methodology chosen by the athlete
///
/// Unknown names are kept as `Other` and resolved to the hypertrophy
/// configuration at generation time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum TrainingStyle {
    Hypertrophy,
    Strength,
    Powerbuilding,
    Bodybuilding,
    Calisthenics,
    Other(String),
}

impl TrainingStyle {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingStyle::Hypertrophy => "hypertrophy",
            TrainingStyle::Strength => "strength",
            TrainingStyle::Powerbuilding => "powerbuilding",
            TrainingStyle::Bodybuilding => "bodybuilding",
            TrainingStyle::Calisthenics => "calisthenics",
            TrainingStyle::Other(name) => name,
        }
    }
}

impl From<&str> for TrainingStyle {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hypertrophy" | "hipertrofia" => TrainingStyle::Hypertrophy,
            "strength" | "fuerza" => TrainingStyle::Strength,
            "powerbuilding" => TrainingStyle::Powerbuilding,
            "bodybuilding" => TrainingStyle::Bodybuilding,
            "calisthenics" | "calistenia" => TrainingStyle::Calisthenics,
            _ => TrainingStyle::Other(s.to_string()),
        }
    }
}

impl From<String> for TrainingStyle {
    fn from(s: String) -> Self {
        TrainingStyle::from(s.as_str())
    }
}

impl From<TrainingStyle> for String {
    fn from(style: TrainingStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for TrainingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of an athlete's profile that drive plan generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AthleteProfile {
    pub experience: ExperienceLevel,
    pub training_style: TrainingStyle,
    pub training_days: u32,
}

// ============================================================================
// Generated Plan Types
// ============================================================================

/// One exercise bound into a session with its set/rep/rest scheme
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

/// A single workout session within a weekly plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub prescriptions: Vec<Prescription>,
}

impl Session {
    /// Deduplicated muscle groups of the given prescriptions, first-seen order
    pub fn derive_muscle_groups(prescriptions: &[Prescription]) -> Vec<MuscleGroup> {
        let mut groups = Vec::new();
        for p in prescriptions {
            if !groups.contains(&p.exercise.muscle_group) {
                groups.push(p.exercise.muscle_group);
            }
        }
        groups
    }

    pub fn exercise_ids(&self) -> impl Iterator<Item = &str> {
        self.prescriptions.iter().map(|p| p.exercise.id.as_str())
    }
}

/// A complete week of sessions for one athlete
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub training_style: TrainingStyle,
    pub sessions: Vec<Session>,
}

impl WeeklyPlan {
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// All exercise ids in the plan, in session order
    pub fn exercise_ids(&self) -> Vec<&str> {
        self.sessions.iter().flat_map(|s| s.exercise_ids()).collect()
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for ExperienceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Ok(ExperienceLevel::Beginner),
            "intermediate" | "intermedio" => Ok(ExperienceLevel::Intermediate),
            "advanced" | "avanzado" => Ok(ExperienceLevel::Advanced),
            other => Err(Error::Parse(format!("unknown experience level '{}'", other))),
        }
    }
}

impl FromStr for Equipment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "barbell" => Ok(Equipment::Barbell),
            "dumbbell" => Ok(Equipment::Dumbbell),
            "machine" => Ok(Equipment::Machine),
            "bodyweight" => Ok(Equipment::Bodyweight),
            "kettlebell" => Ok(Equipment::Kettlebell),
            "cable" => Ok(Equipment::Cable),
            other => Err(Error::Parse(format!("unknown equipment '{}'", other))),
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "chest" => Ok(MuscleGroup::Chest),
            "legs" => Ok(MuscleGroup::Legs),
            "hamstrings" => Ok(MuscleGroup::Hamstrings),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "biceps" => Ok(MuscleGroup::Biceps),
            "triceps" => Ok(MuscleGroup::Triceps),
            "abdominals" | "abs" => Ok(MuscleGroup::Abdominals),
            other => Err(Error::Parse(format!("unknown muscle group '{}'", other))),
        }
    }
}
