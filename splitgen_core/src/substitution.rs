//! In-place exercise substitution on a generated plan.

use crate::types::{Exercise, Session, WeeklyPlan};
use crate::{Error, Result};

impl WeeklyPlan {
    /// Replace one prescription's exercise, keeping its sets/reps/rest
    ///
    /// The replacement is trusted as-is: its muscle group and equipment are
    /// not checked against the original. The session's muscle groups are
    /// re-derived afterwards.
    pub fn substitute_exercise(
        &mut self,
        session_id: &str,
        original_exercise_id: &str,
        replacement: Exercise,
    ) -> Result<&Session> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| Error::Substitution(format!("No session '{}' in plan", session_id)))?;

        let prescription = session
            .prescriptions
            .iter_mut()
            .find(|p| p.exercise.id == original_exercise_id)
            .ok_or_else(|| {
                Error::Substitution(format!(
                    "Session '{}' has no exercise '{}'",
                    session_id, original_exercise_id
                ))
            })?;

        tracing::info!(
            "Substituting '{}' with '{}' in session '{}'",
            original_exercise_id,
            replacement.id,
            session_id
        );
        prescription.exercise = replacement;
        session.muscle_groups = Session::derive_muscle_groups(&session.prescriptions);

        Ok(&*session)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{get_default_catalog, ExerciseCatalog};
    use crate::composer::generate_weekly_plan_with_rng;
    use crate::types::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strength_plan() -> WeeklyPlan {
        let profile = AthleteProfile {
            experience: ExperienceLevel::Beginner,
            training_style: TrainingStyle::Strength,
            training_days: 3,
        };
        generate_weekly_plan_with_rng(&profile, get_default_catalog(), &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_substitute_keeps_prescription_numbers() {
        let mut plan = strength_plan();
        let replacement = get_default_catalog()
            .lookup_by_name("Dumbbell Bench Press")
            .unwrap()
            .clone();

        let session = plan
            .substitute_exercise("push", "bench_press", replacement)
            .unwrap();

        let p = &session.prescriptions[0];
        assert_eq!(p.exercise.id, "dumbbell_bench_press");
        // Still the priority-slot scheme, not the replacement's compound scheme
        assert_eq!((p.sets, p.reps.as_str(), p.rest_seconds), (5, "3-5", 240));
    }

    #[test]
    fn test_substitute_rederives_muscle_groups() {
        let mut plan = strength_plan();
        let curl = get_default_catalog().lookup_by_id("barbell_curl").unwrap().clone();

        plan.substitute_exercise("legs", "back_squat", curl).unwrap();

        let legs = plan.session("legs").unwrap();
        assert!(legs.muscle_groups.contains(&MuscleGroup::Biceps));
        assert!(!legs.muscle_groups.contains(&MuscleGroup::Legs));
        assert_eq!(legs.muscle_groups, Session::derive_muscle_groups(&legs.prescriptions));
    }

    #[test]
    fn test_substitute_unknown_session() {
        let mut plan = strength_plan();
        let curl = get_default_catalog().lookup_by_id("barbell_curl").unwrap().clone();

        let result = plan.substitute_exercise("arms", "back_squat", curl);
        assert!(matches!(result, Err(Error::Substitution(_))));
    }

    #[test]
    fn test_substitute_unknown_exercise_leaves_plan_untouched() {
        let mut plan = strength_plan();
        let before = plan.clone();
        let curl = get_default_catalog().lookup_by_id("barbell_curl").unwrap().clone();

        let result = plan.substitute_exercise("push", "back_squat", curl);
        assert!(matches!(result, Err(Error::Substitution(_))));
        assert_eq!(plan, before);
    }
}
