//! Step operations for the Planner.

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::ProjectPlan,
    params::SetStepCompletion,
    progress,
};

impl Planner {
    /// Marks a step complete or incomplete and returns the updated plan.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` if the plan does not exist, `StepNotFound` if no step
    /// has the requested order. The stored plan is untouched in both cases.
    pub async fn set_step_completion(&self, params: &SetStepCompletion) -> Result<ProjectPlan> {
        let plan_id = params.plan_id.clone();
        let step = params.step;
        let completed = params.completed;

        self.with_store(move |store| {
            let plan = store
                .load(&plan_id)
                .ok_or(PlannerError::PlanNotFound { id: plan_id })?;
            progress::set_step_completion(store, plan, step, completed)
        })
        .await
    }
}
