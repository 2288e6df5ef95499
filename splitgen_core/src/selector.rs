//! Candidate selection against the exercise catalog.
//!
//! Selection logic:
//! - Filter by muscle group, movement type, exclusions and equipment
//! - Priority slots take canonical barbell lifts first, in catalog order
//! - Otherwise level-matched candidates come first, each group shuffled
//! - Short results are valid; nothing here fails

use crate::catalog::ExerciseCatalog;
use crate::types::{EquipmentFilter, Exercise, ExperienceLevel, MovementType, MuscleGroup};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Canonical barbell lifts favoured by priority slots
pub const PRIORITY_LIFT_IDS: [&str; 4] = [
    "bench_press",
    "back_squat",
    "conventional_deadlift",
    "barbell_overhead_press",
];

pub fn is_priority_lift(id: &str) -> bool {
    PRIORITY_LIFT_IDS.contains(&id)
}

/// Constraints for one selection request
#[derive(Clone, Debug)]
pub struct SelectionCriteria<'a> {
    pub muscle_groups: &'a [MuscleGroup],
    pub movement_type: MovementType,
    pub count: usize,
    pub level: ExperienceLevel,
    pub exclude: &'a HashSet<String>,
    pub equipment: &'a EquipmentFilter,
    pub priority: bool,
}

impl SelectionCriteria<'_> {
    fn admits(&self, exercise: &Exercise) -> bool {
        self.muscle_groups.contains(&exercise.muscle_group)
            && exercise.movement_type == self.movement_type
            && !self.exclude.contains(&exercise.id)
            && self.equipment.allows(exercise.equipment)
    }
}

/// Select up to `criteria.count` exercises from the catalog
///
/// Returns fewer than requested (possibly none) when the constraints leave
/// too few candidates.
pub fn select_candidates<'c, C, R>(
    catalog: &'c C,
    criteria: &SelectionCriteria<'_>,
    rng: &mut R,
) -> Vec<&'c Exercise>
where
    C: ExerciseCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let candidates: Vec<&Exercise> = catalog
        .exercises()
        .iter()
        .filter(|e| criteria.admits(e))
        .collect();

    if criteria.priority {
        let lifts: Vec<&Exercise> = candidates
            .iter()
            .copied()
            .filter(|e| is_priority_lift(&e.id))
            .take(criteria.count)
            .collect();

        if !lifts.is_empty() {
            return lifts;
        }
        tracing::debug!(
            "No priority lift available for {:?}, selecting ordinary candidates",
            criteria.muscle_groups
        );
    }

    let (mut matched, mut others): (Vec<&Exercise>, Vec<&Exercise>) = candidates
        .into_iter()
        .partition(|e| e.level == criteria.level);

    matched.shuffle(rng);
    others.shuffle(rng);

    let selected: Vec<&Exercise> = matched
        .into_iter()
        .chain(others)
        .take(criteria.count)
        .collect();

    if selected.len() < criteria.count {
        tracing::debug!(
            "Only {} of {} {:?} exercises available for {:?}",
            selected.len(),
            criteria.count,
            criteria.movement_type,
            criteria.muscle_groups
        );
    }

    selected
}
