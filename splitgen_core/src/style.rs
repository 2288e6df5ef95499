//! Style configuration table.
//!
//! Each training style carries a set/rep/rest scheme per movement type, an
//! optional scheme for priority lifts, an equipment restriction, and one
//! session template per split role.

use crate::types::{EquipmentFilter, MovementType, MuscleGroup as M, TrainingStyle};

/// Sets, rep range and rest interval applied to one prescription
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrescriptionScheme {
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

const fn scheme(sets: u32, reps: &'static str, rest_seconds: u32) -> PrescriptionScheme {
    PrescriptionScheme {
        sets,
        reps,
        rest_seconds,
    }
}

/// Prescription numbers for one training style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleConfig {
    /// Scheme for priority-lift slots; `None` if the style has none
    pub priority: Option<PrescriptionScheme>,
    pub compound: PrescriptionScheme,
    pub isolation: PrescriptionScheme,
}

impl StyleConfig {
    /// Scheme for a slot, keyed by the chosen exercise's movement type
    ///
    /// Priority slots use the priority scheme when the style defines one and
    /// fall back to the movement-type scheme otherwise.
    pub fn scheme_for(&self, movement_type: MovementType, priority: bool) -> PrescriptionScheme {
        match (priority, self.priority) {
            (true, Some(priority_scheme)) => priority_scheme,
            _ => match movement_type {
                MovementType::Compound => self.compound,
                MovementType::Isolation => self.isolation,
            },
        }
    }
}

/// Muscle-group focus of one session within a weekly split
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitRole {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
}

/// One line of a session template
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRequest {
    /// A candidate must match at least one of these
    pub muscle_groups: &'static [M],
    pub movement_type: MovementType,
    pub count: usize,
    pub priority: bool,
}

const fn compound(muscle_groups: &'static [M], count: usize) -> SelectionRequest {
    SelectionRequest {
        muscle_groups,
        movement_type: MovementType::Compound,
        count,
        priority: false,
    }
}

const fn isolation(muscle_groups: &'static [M], count: usize) -> SelectionRequest {
    SelectionRequest {
        muscle_groups,
        movement_type: MovementType::Isolation,
        count,
        priority: false,
    }
}

/// A single canonical lift slot
const fn priority(muscle_groups: &'static [M]) -> SelectionRequest {
    SelectionRequest {
        muscle_groups,
        movement_type: MovementType::Compound,
        count: 1,
        priority: true,
    }
}

/// Ordered selection requests for one session
pub type SessionTemplate = &'static [SelectionRequest];

/// Session templates for every split role of one style
#[derive(Debug)]
pub struct TemplateSet {
    pub push: SessionTemplate,
    pub pull: SessionTemplate,
    pub legs: SessionTemplate,
    pub upper: SessionTemplate,
    pub lower: SessionTemplate,
    pub full_body: SessionTemplate,
}

impl TemplateSet {
    pub fn for_role(&self, role: SplitRole) -> SessionTemplate {
        match role {
            SplitRole::Push => self.push,
            SplitRole::Pull => self.pull,
            SplitRole::Legs => self.legs,
            SplitRole::Upper => self.upper,
            SplitRole::Lower => self.lower,
            SplitRole::FullBody => self.full_body,
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

const HYPERTROPHY_CONFIG: StyleConfig = StyleConfig {
    priority: None,
    compound: scheme(3, "8-12", 120),
    isolation: scheme(3, "10-15", 90),
};

const STRENGTH_CONFIG: StyleConfig = StyleConfig {
    priority: Some(scheme(5, "3-5", 240)),
    compound: scheme(3, "6-8", 180),
    isolation: scheme(3, "8-12", 90),
};

const POWERBUILDING_CONFIG: StyleConfig = StyleConfig {
    priority: Some(scheme(4, "4-6", 180)),
    compound: scheme(3, "8-12", 120),
    isolation: scheme(3, "10-15", 90),
};

const BODYBUILDING_CONFIG: StyleConfig = StyleConfig {
    priority: None,
    compound: scheme(4, "8-15", 90),
    isolation: scheme(4, "12-20", 60),
};

const CALISTHENICS_CONFIG: StyleConfig = StyleConfig {
    priority: None,
    compound: scheme(4, "5-20", 120),
    isolation: scheme(3, "10-25", 75),
};

/// Shared by hypertrophy and bodybuilding
static VOLUME_TEMPLATES: TemplateSet = TemplateSet {
    push: &[
        compound(&[M::Chest], 2),
        compound(&[M::Shoulders], 1),
        isolation(&[M::Triceps], 2),
    ],
    pull: &[
        compound(&[M::Back], 2),
        isolation(&[M::Shoulders], 1),
        isolation(&[M::Biceps], 2),
    ],
    legs: &[
        compound(&[M::Legs], 2),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Legs], 1),
        isolation(&[M::Abdominals], 1),
    ],
    upper: &[
        compound(&[M::Chest], 1),
        compound(&[M::Back], 1),
        compound(&[M::Shoulders], 1),
        isolation(&[M::Biceps], 1),
        isolation(&[M::Triceps], 1),
    ],
    lower: &[
        compound(&[M::Legs], 2),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Legs], 1),
        isolation(&[M::Abdominals], 1),
    ],
    full_body: &[
        compound(&[M::Legs], 1),
        compound(&[M::Chest], 1),
        compound(&[M::Back], 1),
        isolation(&[M::Shoulders], 1),
        isolation(&[M::Biceps, M::Triceps], 1),
    ],
};

static STRENGTH_TEMPLATES: TemplateSet = TemplateSet {
    push: &[
        priority(&[M::Chest]),
        priority(&[M::Shoulders]),
        compound(&[M::Triceps], 1),
    ],
    pull: &[
        priority(&[M::Back]),
        compound(&[M::Back], 1),
        isolation(&[M::Biceps], 1),
    ],
    legs: &[
        priority(&[M::Legs]),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Abdominals], 1),
    ],
    upper: &[
        priority(&[M::Chest]),
        priority(&[M::Back]),
        compound(&[M::Shoulders], 1),
    ],
    lower: &[
        priority(&[M::Legs]),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Abdominals], 1),
    ],
    full_body: &[
        priority(&[M::Legs]),
        priority(&[M::Chest]),
        priority(&[M::Back]),
    ],
};

static POWERBUILDING_TEMPLATES: TemplateSet = TemplateSet {
    push: &[
        priority(&[M::Chest]),
        compound(&[M::Shoulders], 1),
        isolation(&[M::Chest], 1),
        isolation(&[M::Triceps], 2),
    ],
    pull: &[
        priority(&[M::Back]),
        compound(&[M::Back], 1),
        isolation(&[M::Biceps], 2),
    ],
    legs: &[
        priority(&[M::Legs]),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Legs], 2),
        isolation(&[M::Abdominals], 1),
    ],
    upper: &[
        priority(&[M::Chest]),
        compound(&[M::Back], 1),
        isolation(&[M::Shoulders, M::Triceps], 1),
        isolation(&[M::Biceps], 1),
    ],
    lower: &[
        priority(&[M::Legs]),
        compound(&[M::Hamstrings], 1),
        isolation(&[M::Legs], 1),
        isolation(&[M::Abdominals], 1),
    ],
    full_body: &[
        priority(&[M::Legs]),
        compound(&[M::Chest], 1),
        compound(&[M::Back], 1),
        isolation(&[M::Abdominals], 1),
    ],
};

static CALISTHENICS_TEMPLATES: TemplateSet = TemplateSet {
    push: &[
        compound(&[M::Chest, M::Shoulders], 2),
        compound(&[M::Triceps], 2),
    ],
    pull: &[
        compound(&[M::Back], 3),
        isolation(&[M::Abdominals], 1),
    ],
    legs: &[
        compound(&[M::Legs], 3),
        isolation(&[M::Hamstrings], 1),
    ],
    upper: &[
        compound(&[M::Chest], 1),
        compound(&[M::Back], 1),
        compound(&[M::Shoulders], 1),
        compound(&[M::Triceps], 1),
    ],
    lower: &[
        compound(&[M::Legs], 2),
        isolation(&[M::Hamstrings], 1),
        isolation(&[M::Abdominals], 2),
    ],
    full_body: &[
        compound(&[M::Legs], 1),
        compound(&[M::Chest], 1),
        compound(&[M::Back], 1),
        isolation(&[M::Abdominals], 1),
    ],
};

// ============================================================================
// Resolution
// ============================================================================

/// Everything the composer needs to know about a style
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    /// The style whose tables are in use (never `Other`)
    pub style: TrainingStyle,
    pub config: StyleConfig,
    pub templates: &'static TemplateSet,
    pub equipment: EquipmentFilter,
}

/// Look up the tables for a style
///
/// Unrecognized styles use the hypertrophy tables.
pub fn resolve_style(style: &TrainingStyle) -> ResolvedStyle {
    let (style, config, templates) = match style {
        TrainingStyle::Hypertrophy => (style.clone(), HYPERTROPHY_CONFIG, &VOLUME_TEMPLATES),
        TrainingStyle::Bodybuilding => (style.clone(), BODYBUILDING_CONFIG, &VOLUME_TEMPLATES),
        TrainingStyle::Strength => (style.clone(), STRENGTH_CONFIG, &STRENGTH_TEMPLATES),
        TrainingStyle::Powerbuilding => {
            (style.clone(), POWERBUILDING_CONFIG, &POWERBUILDING_TEMPLATES)
        }
        TrainingStyle::Calisthenics => {
            (style.clone(), CALISTHENICS_CONFIG, &CALISTHENICS_TEMPLATES)
        }
        TrainingStyle::Other(name) => {
            tracing::warn!(
                "Unknown training style '{}', using hypertrophy configuration",
                name
            );
            (TrainingStyle::Hypertrophy, HYPERTROPHY_CONFIG, &VOLUME_TEMPLATES)
        }
    };

    let equipment = match style {
        TrainingStyle::Calisthenics => EquipmentFilter::bodyweight_only(),
        _ => EquipmentFilter::Any,
    };

    ResolvedStyle {
        style,
        config,
        templates,
        equipment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [SplitRole; 6] = [
        SplitRole::Push,
        SplitRole::Pull,
        SplitRole::Legs,
        SplitRole::Upper,
        SplitRole::Lower,
        SplitRole::FullBody,
    ];

    fn all_styles() -> Vec<TrainingStyle> {
        vec![
            TrainingStyle::Hypertrophy,
            TrainingStyle::Strength,
            TrainingStyle::Powerbuilding,
            TrainingStyle::Bodybuilding,
            TrainingStyle::Calisthenics,
        ]
    }

    #[test]
    fn test_unknown_style_falls_back_to_hypertrophy() {
        let resolved = resolve_style(&TrainingStyle::Other("crossfit".into()));
        assert_eq!(resolved.style, TrainingStyle::Hypertrophy);
        assert_eq!(resolved.config, HYPERTROPHY_CONFIG);
        assert_eq!(resolved.equipment, EquipmentFilter::Any);
    }

    #[test]
    fn test_only_calisthenics_restricts_equipment() {
        for style in all_styles() {
            let resolved = resolve_style(&style);
            if style == TrainingStyle::Calisthenics {
                assert_eq!(resolved.equipment, EquipmentFilter::bodyweight_only());
            } else {
                assert_eq!(resolved.equipment, EquipmentFilter::Any);
            }
        }
    }

    #[test]
    fn test_scheme_for_priority_slot() {
        let strength = resolve_style(&TrainingStyle::Strength).config;
        assert_eq!(
            strength.scheme_for(MovementType::Compound, true),
            scheme(5, "3-5", 240)
        );
        assert_eq!(
            strength.scheme_for(MovementType::Compound, false),
            scheme(3, "6-8", 180)
        );

        // No priority scheme: the compound scheme applies
        let hypertrophy = resolve_style(&TrainingStyle::Hypertrophy).config;
        assert_eq!(
            hypertrophy.scheme_for(MovementType::Compound, true),
            hypertrophy.compound
        );
    }

    #[test]
    fn test_every_scheme_has_at_least_one_set() {
        for style in all_styles() {
            let config = resolve_style(&style).config;
            assert!(config.compound.sets >= 1);
            assert!(config.isolation.sets >= 1);
            if let Some(p) = config.priority {
                assert!(p.sets >= 1);
            }
        }
    }

    #[test]
    fn test_priority_requests_are_single_compound_slots() {
        for style in all_styles() {
            let templates = resolve_style(&style).templates;
            for role in ALL_ROLES {
                for request in templates.for_role(role) {
                    if request.priority {
                        assert_eq!(request.movement_type, MovementType::Compound);
                        assert_eq!(request.count, 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_priority_requests_precede_ordinary_requests() {
        for style in all_styles() {
            let templates = resolve_style(&style).templates;
            for role in ALL_ROLES {
                let template = templates.for_role(role);
                let first_ordinary = template.iter().position(|r| !r.priority);
                if let Some(idx) = first_ordinary {
                    assert!(
                        template[idx..].iter().all(|r| !r.priority),
                        "{:?} {:?} has a priority request after an ordinary one",
                        style,
                        role
                    );
                }
            }
        }
    }

    #[test]
    fn test_strength_legs_template() {
        let legs = resolve_style(&TrainingStyle::Strength).templates.legs;
        assert_eq!(legs.len(), 3);
        assert!(legs[0].priority);
        assert_eq!(legs[0].muscle_groups, &[M::Legs]);
        assert_eq!(legs[1].muscle_groups, &[M::Hamstrings]);
        assert_eq!(legs[2].movement_type, MovementType::Isolation);
    }
}
