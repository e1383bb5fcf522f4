//! Step completion tracking.

use crate::{
    error::{PlannerError, Result},
    models::ProjectPlan,
    store::PlanStore,
};

/// Marks the step with the given 1-based order complete or incomplete and
/// persists the plan through [`PlanStore::update`].
///
/// Only the step's `completed` flag, the cached progress and `updated_at`
/// change. The plan status is left alone even when every step is done.
///
/// # Errors
///
/// Returns [`PlannerError::StepNotFound`] without writing anything when no
/// step has that order, or the store's error if the write fails.
pub fn set_step_completion(
    store: &PlanStore,
    mut plan: ProjectPlan,
    step_order: u32,
    completed: bool,
) -> Result<ProjectPlan> {
    let step = plan
        .steps
        .iter_mut()
        .find(|step| step.order == step_order)
        .ok_or_else(|| PlannerError::StepNotFound {
            plan_id: plan.id.clone(),
            order: step_order,
        })?;

    step.completed = completed;
    store.update(&mut plan)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tempfile::TempDir;

    use super::*;
    use crate::models::{PlanStatus, PlanStep};

    fn three_step_plan() -> ProjectPlan {
        let mut plan = ProjectPlan {
            id: "three-steps-1".to_string(),
            title: "Three steps".to_string(),
            description: String::new(),
            created_at: Timestamp::from_second(1700000000).unwrap(),
            updated_at: Timestamp::from_second(1700000000).unwrap(),
            status: PlanStatus::Planning,
            overview: Default::default(),
            file_structure: Default::default(),
            dependencies: Default::default(),
            steps: (1..=3).map(|n| PlanStep::new(n, format!("Step {n}"), "")).collect(),
            progress: Default::default(),
        };
        plan.refresh_progress();
        plan
    }

    #[test]
    fn test_completing_step_updates_progress_and_persists() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PlanStore::new(temp_dir.path());
        let plan = three_step_plan();
        store.save(&plan).unwrap();

        let updated = set_step_completion(&store, plan.clone(), 2, true).unwrap();

        assert!(updated.steps[1].completed);
        assert_eq!(updated.progress.completed_steps, 1);
        assert_eq!(updated.progress.percentage, 33);
        assert!(updated.updated_at > plan.updated_at);
        assert_eq!(updated.status, PlanStatus::Planning);
        assert_eq!(store.load(&plan.id), Some(updated));
    }

    #[test]
    fn test_completion_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PlanStore::new(temp_dir.path());
        let plan = three_step_plan();

        let once = set_step_completion(&store, plan, 1, true).unwrap();
        let twice = set_step_completion(&store, once.clone(), 1, true).unwrap();

        assert_eq!(once.steps, twice.steps);
        assert_eq!(once.progress, twice.progress);
        assert_eq!(once.status, twice.status);
    }

    #[test]
    fn test_unknown_step_leaves_stored_plan_untouched() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PlanStore::new(temp_dir.path());
        let plan = three_step_plan();
        store.save(&plan).unwrap();
        let before = std::fs::read_to_string(store.plan_path(&plan.id)).unwrap();

        let err = set_step_completion(&store, plan.clone(), 99, true).unwrap_err();

        assert!(matches!(err, PlannerError::StepNotFound { order: 99, .. }));
        let after = std::fs::read_to_string(store.plan_path(&plan.id)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_marking_incomplete_reverts_progress() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PlanStore::new(temp_dir.path());

        let plan = set_step_completion(&store, three_step_plan(), 3, true).unwrap();
        let plan = set_step_completion(&store, plan, 3, false).unwrap();

        assert!(!plan.steps[2].completed);
        assert_eq!(plan.progress.completed_steps, 0);
        assert_eq!(plan.progress.percentage, 0);
    }
}
