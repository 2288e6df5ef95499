//! Weekly plan composition.
//!
//! Composition logic:
//! 1. Resolve the style tables (unknown styles use hypertrophy)
//! 2. Map the weekly session count onto a split structure
//! 3. Assemble each session in order, threading one exclusion set so no
//!    exercise is used twice in the week

use crate::assembler::{assemble_session, AssemblyContext};
use crate::catalog::ExerciseCatalog;
use crate::style::{resolve_style, SplitRole};
use crate::types::{AthleteProfile, WeeklyPlan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// One session slot of a split structure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSlot {
    pub id: &'static str,
    pub name: &'static str,
    pub role: SplitRole,
}

const fn slot(id: &'static str, name: &'static str, role: SplitRole) -> SplitSlot {
    SplitSlot { id, name, role }
}

const TWO_DAY: [SplitSlot; 2] = [
    slot("full_body_a", "Full Body A", SplitRole::FullBody),
    slot("full_body_b", "Full Body B", SplitRole::FullBody),
];

const THREE_DAY: [SplitSlot; 3] = [
    slot("push", "Push", SplitRole::Push),
    slot("pull", "Pull", SplitRole::Pull),
    slot("legs", "Legs", SplitRole::Legs),
];

const FOUR_DAY: [SplitSlot; 4] = [
    slot("upper_a", "Upper A", SplitRole::Upper),
    slot("lower_a", "Lower A", SplitRole::Lower),
    slot("upper_b", "Upper B", SplitRole::Upper),
    slot("lower_b", "Lower B", SplitRole::Lower),
];

const FIVE_DAY: [SplitSlot; 5] = [
    slot("push_a", "Push A", SplitRole::Push),
    slot("pull_a", "Pull A", SplitRole::Pull),
    slot("legs_a", "Legs A", SplitRole::Legs),
    slot("upper_b", "Upper B", SplitRole::Upper),
    slot("lower_b", "Lower B", SplitRole::Lower),
];

const SIX_DAY: [SplitSlot; 6] = [
    slot("push_a", "Push A", SplitRole::Push),
    slot("pull_a", "Pull A", SplitRole::Pull),
    slot("legs_a", "Legs A", SplitRole::Legs),
    slot("push_b", "Push B", SplitRole::Push),
    slot("pull_b", "Pull B", SplitRole::Pull),
    slot("legs_b", "Legs B", SplitRole::Legs),
];

/// Split structure for a weekly session count
///
/// Six or more sessions share the push/pull/legs twice-a-week structure.
/// Counts below two are outside the supported range and land on the same
/// default.
pub fn split_structure(training_days: u32) -> &'static [SplitSlot] {
    match training_days {
        2 => &TWO_DAY,
        3 => &THREE_DAY,
        4 => &FOUR_DAY,
        5 => &FIVE_DAY,
        n => {
            if n < 2 {
                tracing::warn!(
                    "{} training days is below the supported range, using the 6-day split",
                    n
                );
            }
            &SIX_DAY
        }
    }
}

/// Generate a full weekly plan with a freshly seeded random source
pub fn generate_weekly_plan<C>(profile: &AthleteProfile, catalog: &C) -> WeeklyPlan
where
    C: ExerciseCatalog + ?Sized,
{
    let mut rng = StdRng::from_entropy();
    generate_weekly_plan_with_rng(profile, catalog, &mut rng)
}

/// Generate a reproducible weekly plan from a fixed seed
pub fn generate_weekly_plan_with_seed<C>(
    profile: &AthleteProfile,
    catalog: &C,
    seed: u64,
) -> WeeklyPlan
where
    C: ExerciseCatalog + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    generate_weekly_plan_with_rng(profile, catalog, &mut rng)
}

/// Generate a full weekly plan using the caller's random source
///
/// The same profile, catalog and seeded rng always produce the same plan.
pub fn generate_weekly_plan_with_rng<C, R>(
    profile: &AthleteProfile,
    catalog: &C,
    rng: &mut R,
) -> WeeklyPlan
where
    C: ExerciseCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let resolved = resolve_style(&profile.training_style);
    let structure = split_structure(profile.training_days);

    tracing::info!(
        "Generating {}-session {} plan for {:?} athlete",
        structure.len(),
        resolved.style,
        profile.experience
    );

    let ctx = AssemblyContext {
        config: &resolved.config,
        level: profile.experience,
        equipment: &resolved.equipment,
    };

    let mut used = HashSet::new();
    let sessions = structure
        .iter()
        .map(|slot| {
            let session = assemble_session(
                slot.id,
                slot.name,
                resolved.templates.for_role(slot.role),
                &ctx,
                catalog,
                &mut used,
                rng,
            );
            tracing::debug!(
                "Assembled '{}' with {} exercises",
                session.name,
                session.prescriptions.len()
            );
            session
        })
        .collect();

    WeeklyPlan {
        training_style: resolved.style,
        sessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_default_catalog, Catalog};
    use crate::selector::is_priority_lift;
    use crate::types::{
        Equipment, Exercise, ExperienceLevel, MovementType, MuscleGroup, Session, TrainingStyle,
    };
    use std::collections::HashMap;

    fn profile(style: TrainingStyle, days: u32) -> AthleteProfile {
        AthleteProfile {
            experience: ExperienceLevel::Intermediate,
            training_style: style,
            training_days: days,
        }
    }

    fn all_styles() -> Vec<TrainingStyle> {
        vec![
            TrainingStyle::Hypertrophy,
            TrainingStyle::Strength,
            TrainingStyle::Powerbuilding,
            TrainingStyle::Bodybuilding,
            TrainingStyle::Calisthenics,
        ]
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn session_ids(plan: &WeeklyPlan) -> Vec<&str> {
        plan.sessions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_split_structure_sizes() {
        assert_eq!(split_structure(2).len(), 2);
        assert_eq!(split_structure(3).len(), 3);
        assert_eq!(split_structure(4).len(), 4);
        assert_eq!(split_structure(5).len(), 5);
        assert_eq!(split_structure(6).len(), 6);
        assert_eq!(split_structure(7), split_structure(6));
        assert_eq!(split_structure(1), split_structure(6));
    }

    #[test]
    fn test_no_exercise_repeats_within_week() {
        let catalog = get_default_catalog();
        for style in all_styles() {
            for days in 2..=7 {
                for seed in 0..10 {
                    let plan = generate_weekly_plan_with_rng(
                        &profile(style.clone(), days),
                        catalog,
                        &mut seeded(seed),
                    );
                    let ids = plan.exercise_ids();
                    let unique: HashSet<_> = ids.iter().collect();
                    assert_eq!(
                        ids.len(),
                        unique.len(),
                        "{} / {} days / seed {} repeated an exercise",
                        style,
                        days,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn test_three_days_is_push_pull_legs_for_every_style() {
        let catalog = get_default_catalog();
        for style in all_styles() {
            let plan = generate_weekly_plan_with_rng(&profile(style, 3), catalog, &mut seeded(1));
            assert_eq!(session_ids(&plan), vec!["push", "pull", "legs"]);
        }
    }

    #[test]
    fn test_four_days_alternates_upper_lower() {
        let catalog = get_default_catalog();
        for style in all_styles() {
            let plan = generate_weekly_plan_with_rng(&profile(style, 4), catalog, &mut seeded(2));
            let names: Vec<_> = plan.sessions.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Upper A", "Lower A", "Upper B", "Lower B"]);
        }
    }

    #[test]
    fn test_five_and_two_day_structures() {
        let catalog = get_default_catalog();
        let plan = generate_weekly_plan_with_rng(
            &profile(TrainingStyle::Powerbuilding, 5),
            catalog,
            &mut seeded(3),
        );
        assert_eq!(
            session_ids(&plan),
            vec!["push_a", "pull_a", "legs_a", "upper_b", "lower_b"]
        );

        let plan = generate_weekly_plan_with_rng(
            &profile(TrainingStyle::Bodybuilding, 2),
            catalog,
            &mut seeded(3),
        );
        assert_eq!(session_ids(&plan), vec!["full_body_a", "full_body_b"]);
    }

    #[test]
    fn test_intermediate_hypertrophy_three_day_example() {
        let catalog = get_default_catalog();
        for seed in 0..20 {
            let plan = generate_weekly_plan_with_rng(
                &profile(TrainingStyle::Hypertrophy, 3),
                catalog,
                &mut seeded(seed),
            );
            let names: Vec<_> = plan.sessions.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Push", "Pull", "Legs"]);

            let push = plan.session("push").unwrap();
            let chest_or_shoulder_compounds = push
                .prescriptions
                .iter()
                .filter(|p| {
                    p.exercise.movement_type == MovementType::Compound
                        && matches!(
                            p.exercise.muscle_group,
                            MuscleGroup::Chest | MuscleGroup::Shoulders
                        )
                })
                .count();
            let triceps_isolations = push
                .prescriptions
                .iter()
                .filter(|p| {
                    p.exercise.movement_type == MovementType::Isolation
                        && p.exercise.muscle_group == MuscleGroup::Triceps
                })
                .count();
            assert_eq!(chest_or_shoulder_compounds, 3);
            assert_eq!(triceps_isolations, 2);

            let push_ids: HashSet<_> = push.exercise_ids().collect();
            for other in ["pull", "legs"] {
                let session = plan.session(other).unwrap();
                assert!(session.exercise_ids().all(|id| !push_ids.contains(id)));
            }
        }
    }

    #[test]
    fn test_six_day_b_sessions_disjoint_from_a() {
        let catalog = get_default_catalog();
        for seed in 0..10 {
            let plan = generate_weekly_plan_with_rng(
                &profile(TrainingStyle::Hypertrophy, 6),
                catalog,
                &mut seeded(seed),
            );
            assert_eq!(
                session_ids(&plan),
                vec!["push_a", "pull_a", "legs_a", "push_b", "pull_b", "legs_b"]
            );

            let a_ids: HashSet<&str> = plan.sessions[..3]
                .iter()
                .flat_map(|s| s.exercise_ids())
                .collect();
            for b in &plan.sessions[3..] {
                assert!(b.exercise_ids().all(|id| !a_ids.contains(id)));
            }

            // 30 slots requested; the built-in catalog only has 2 triceps
            // isolations, 3 biceps isolations and 1 leg isolation
            assert_eq!(plan.exercise_ids().len(), 26);
        }
    }

    #[test]
    fn test_strength_priority_lifts() {
        let catalog = get_default_catalog();
        for seed in 0..10 {
            let plan = generate_weekly_plan_with_rng(
                &profile(TrainingStyle::Strength, 3),
                catalog,
                &mut seeded(seed),
            );

            let first_ids: Vec<&str> = plan
                .sessions
                .iter()
                .map(|s| s.prescriptions[0].exercise.id.as_str())
                .collect();
            assert_eq!(first_ids, vec!["bench_press", "conventional_deadlift", "back_squat"]);

            let push = plan.session("push").unwrap();
            assert_eq!(push.prescriptions[1].exercise.id, "barbell_overhead_press");

            for session in &plan.sessions {
                assert!(is_priority_lift(&session.prescriptions[0].exercise.id));
                assert_eq!(session.prescriptions[0].sets, 5);
                assert_eq!(session.prescriptions[0].reps, "3-5");
                assert_eq!(session.prescriptions[0].rest_seconds, 240);
            }
        }
    }

    #[test]
    fn test_strength_upper_lower_priority_lifts() {
        let catalog = get_default_catalog();
        let plan = generate_weekly_plan_with_rng(
            &profile(TrainingStyle::Strength, 4),
            catalog,
            &mut seeded(4),
        );

        let upper_a = plan.session("upper_a").unwrap();
        assert_eq!(upper_a.prescriptions[0].exercise.id, "bench_press");
        assert_eq!(upper_a.prescriptions[1].exercise.id, "conventional_deadlift");

        let lower_a = plan.session("lower_a").unwrap();
        assert_eq!(lower_a.prescriptions[0].exercise.id, "back_squat");

        // Canonical lifts are used up; B sessions still get priority-scheme slots
        let upper_b = plan.session("upper_b").unwrap();
        assert!(!is_priority_lift(&upper_b.prescriptions[0].exercise.id));
        assert_eq!(upper_b.prescriptions[0].sets, 5);
    }

    #[test]
    fn test_calisthenics_is_bodyweight_only() {
        let catalog = get_default_catalog();
        for days in 2..=6 {
            for seed in 0..10 {
                let plan = generate_weekly_plan_with_rng(
                    &profile(TrainingStyle::Calisthenics, days),
                    catalog,
                    &mut seeded(seed),
                );
                for session in &plan.sessions {
                    for p in &session.prescriptions {
                        assert_eq!(
                            p.exercise.equipment,
                            Equipment::Bodyweight,
                            "{} in {} is not bodyweight",
                            p.exercise.id,
                            session.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_prescriptions_are_deterministic_per_exercise() {
        let catalog = get_default_catalog();
        for style in [TrainingStyle::Hypertrophy, TrainingStyle::Bodybuilding] {
            let mut seen: HashMap<String, (u32, String, u32)> = HashMap::new();
            for seed in 0..30 {
                let plan = generate_weekly_plan_with_rng(
                    &profile(style.clone(), 6),
                    catalog,
                    &mut seeded(seed),
                );
                for p in plan.sessions.iter().flat_map(|s| &s.prescriptions) {
                    let scheme = (p.sets, p.reps.clone(), p.rest_seconds);
                    let previous = seen.entry(p.exercise.id.clone()).or_insert(scheme.clone());
                    assert_eq!(*previous, scheme, "{} changed prescription", p.exercise.id);
                }
            }
        }
    }

    #[test]
    fn test_muscle_groups_rederive_exactly() {
        let catalog = get_default_catalog();
        for style in all_styles() {
            for days in 2..=6 {
                let plan = generate_weekly_plan_with_rng(
                    &profile(style.clone(), days),
                    catalog,
                    &mut seeded(u64::from(days)),
                );
                for session in &plan.sessions {
                    assert_eq!(
                        session.muscle_groups,
                        Session::derive_muscle_groups(&session.prescriptions)
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_style_uses_hypertrophy() {
        crate::logging::init_test();
        let catalog = get_default_catalog();
        let plan = generate_weekly_plan_with_rng(
            &profile(TrainingStyle::Other("yoga".into()), 3),
            catalog,
            &mut seeded(8),
        );

        assert_eq!(plan.training_style, TrainingStyle::Hypertrophy);
        assert_eq!(plan.sessions.len(), 3);
        assert_eq!(plan.session("push").unwrap().prescriptions.len(), 5);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let catalog = get_default_catalog();
        let p = profile(TrainingStyle::Powerbuilding, 5);

        let first = generate_weekly_plan_with_rng(&p, catalog, &mut seeded(1234));
        let second = generate_weekly_plan_with_rng(&p, catalog, &mut seeded(1234));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let catalog = get_default_catalog();
        let p = profile(TrainingStyle::Calisthenics, 4);
        assert_eq!(
            generate_weekly_plan_with_seed(&p, catalog, 77),
            generate_weekly_plan_with_seed(&p, catalog, 77)
        );
    }

    #[test]
    fn test_unseeded_generation_is_complete() {
        let plan = generate_weekly_plan(&profile(TrainingStyle::Hypertrophy, 3), get_default_catalog());
        assert_eq!(plan.exercise_ids().len(), 15);
    }

    #[test]
    fn test_tiny_catalog_degrades_to_short_sessions() {
        crate::logging::init_test();
        let catalog = Catalog::new(vec![
            Exercise {
                id: "push_up".into(),
                name: "Push-up".into(),
                muscle_group: MuscleGroup::Chest,
                movement_type: MovementType::Compound,
                level: ExperienceLevel::Beginner,
                equipment: Equipment::Bodyweight,
                description: String::new(),
                media_url: None,
            },
            Exercise {
                id: "pull_up".into(),
                name: "Pull-up".into(),
                muscle_group: MuscleGroup::Back,
                movement_type: MovementType::Compound,
                level: ExperienceLevel::Intermediate,
                equipment: Equipment::Bodyweight,
                description: String::new(),
                media_url: None,
            },
        ]);

        let plan = generate_weekly_plan_with_rng(
            &profile(TrainingStyle::Hypertrophy, 6),
            &catalog,
            &mut seeded(0),
        );

        assert_eq!(plan.sessions.len(), 6);
        assert_eq!(plan.session("push_a").unwrap().prescriptions.len(), 1);
        assert_eq!(plan.session("pull_a").unwrap().prescriptions.len(), 1);
        assert!(plan.session("push_b").unwrap().prescriptions.is_empty());
        assert!(plan.session("legs_a").unwrap().muscle_groups.is_empty());
    }
}
