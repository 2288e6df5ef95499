//! Session assembly from a template.

use crate::catalog::ExerciseCatalog;
use crate::selector::{select_candidates, SelectionCriteria};
use crate::style::{SessionTemplate, StyleConfig};
use crate::types::{EquipmentFilter, ExperienceLevel, Prescription, Session};
use rand::Rng;
use std::collections::HashSet;

/// Per-week inputs shared by every session the assembler builds
#[derive(Clone, Debug)]
pub struct AssemblyContext<'a> {
    pub config: &'a StyleConfig,
    pub level: ExperienceLevel,
    pub equipment: &'a EquipmentFilter,
}

/// Build one session by running each template request in order
///
/// Every chosen exercise id is added to `used` as soon as it is picked, so
/// later requests in this session and later sessions in the week skip it.
pub fn assemble_session<C, R>(
    id: &str,
    name: &str,
    template: SessionTemplate,
    ctx: &AssemblyContext<'_>,
    catalog: &C,
    used: &mut HashSet<String>,
    rng: &mut R,
) -> Session
where
    C: ExerciseCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let mut prescriptions = Vec::new();

    for request in template {
        let criteria = SelectionCriteria {
            muscle_groups: request.muscle_groups,
            movement_type: request.movement_type,
            count: request.count,
            level: ctx.level,
            exclude: &*used,
            equipment: ctx.equipment,
            priority: request.priority,
        };

        let selected = select_candidates(catalog, &criteria, rng);

        for exercise in selected {
            let scheme = ctx
                .config
                .scheme_for(exercise.movement_type, request.priority);

            prescriptions.push(Prescription {
                exercise: exercise.clone(),
                sets: scheme.sets,
                reps: scheme.reps.to_string(),
                rest_seconds: scheme.rest_seconds,
            });
            used.insert(exercise.id.clone());
        }
    }

    let requested: usize = template.iter().map(|r| r.count).sum();
    if prescriptions.len() < requested {
        tracing::debug!(
            "Session '{}' filled {} of {} slots",
            id,
            prescriptions.len(),
            requested
        );
    }

    Session {
        id: id.to_string(),
        name: name.to_string(),
        muscle_groups: Session::derive_muscle_groups(&prescriptions),
        prescriptions,
    }
}
