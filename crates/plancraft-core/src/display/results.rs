//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::models::PlanView;
use crate::{
    generator::{Generated, PlanSource},
    models::ProjectPlan,
};

/// Outcome of `create`: the new plan and where it came from.
pub struct CreateResult<'a> {
    pub generated: &'a Generated,
}

impl<'a> CreateResult<'a> {
    pub fn new(generated: &'a Generated) -> Self {
        Self { generated }
    }
}

impl fmt::Display for CreateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.generated.plan;
        let origin = match self.generated.source {
            PlanSource::Ai => "generated with AI",
            PlanSource::Fallback => "built from the offline template",
        };
        writeln!(f, "Created plan `{}` ({origin})", plan.id)?;
        writeln!(f)?;
        write!(f, "{}", PlanView::new(plan).with_steps(true))
    }
}

/// Outcome of an update, listing what changed.
///
/// # Examples
///
/// ```rust
/// use plancraft_core::{display::UpdateResult, models::ProjectPlan};
/// use jiff::Timestamp;
///
/// let plan: ProjectPlan = serde_json::from_str(
///     r#"{"id": "p-1", "title": "P", "createdAt": "2024-01-01T00:00:00Z",
///         "updatedAt": "2024-01-01T00:00:00Z"}"#,
/// ).unwrap();
/// let output = UpdateResult::with_changes(&plan, vec!["Step 1 completed".into()]).to_string();
/// assert!(output.contains("- Step 1 completed"));
/// ```
pub struct UpdateResult<'a> {
    pub plan: &'a ProjectPlan,
    pub changes: Vec<String>,
}

impl<'a> UpdateResult<'a> {
    pub fn with_changes(plan: &'a ProjectPlan, changes: Vec<String>) -> Self {
        Self { plan, changes }
    }
}

impl fmt::Display for UpdateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan `{}`", self.plan.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", PlanView::new(self.plan))
    }
}

/// Confirmation of a deleted plan.
pub struct DeleteResult<'a> {
    pub plan: &'a ProjectPlan,
}

impl<'a> DeleteResult<'a> {
    pub fn new(plan: &'a ProjectPlan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted plan '{}' (ID: {})", self.plan.title, self.plan.id)
    }
}
