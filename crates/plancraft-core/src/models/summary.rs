//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, Progress, ProjectPlan};

/// Summary information about a plan used in list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Plan status
    pub status: PlanStatus,
    /// Project type from the overview
    pub project_type: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Cached progress counters
    pub progress: Progress,
}

impl From<&ProjectPlan> for PlanSummary {
    fn from(plan: &ProjectPlan) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            status: plan.status,
            project_type: plan.overview.project_type.clone(),
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            progress: plan.progress,
        }
    }
}
