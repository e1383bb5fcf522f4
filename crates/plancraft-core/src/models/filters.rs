//! Filter types for querying plans.

use super::{PlanStatus, ProjectPlan};
use crate::params::ListPlans;

/// Filter options for listing plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Only plans with this status
    pub status: Option<PlanStatus>,

    /// Keep at most this many plans (newest first)
    pub limit: Option<usize>,
}

impl PlanFilter {
    /// Whether a single plan passes the status filter.
    pub fn matches(&self, plan: &ProjectPlan) -> bool {
        self.status.map_or(true, |status| plan.status == status)
    }

    /// Applies the filter to plans already sorted newest first.
    pub fn apply(&self, plans: Vec<ProjectPlan>) -> Vec<ProjectPlan> {
        let filtered = plans.into_iter().filter(|plan| self.matches(plan));
        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        Self {
            status: params.status,
            limit: params.limit,
        }
    }
}
