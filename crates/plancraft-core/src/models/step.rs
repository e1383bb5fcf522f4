//! Step model definition.

use serde::{Deserialize, Serialize};

use crate::id::step_id;

/// Represents an individual step within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    /// Identifier of the step, unique within its plan
    pub id: String,

    /// Brief title/summary of the step
    pub title: String,

    /// What needs to be done
    #[serde(default)]
    pub description: String,

    /// Files touched by the step (informational only)
    #[serde(default)]
    pub files: Vec<String>,

    /// Packages or tools relevant to the step
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Whether the step has been marked complete
    #[serde(default)]
    pub completed: bool,

    /// 1-based position of the step within the plan
    pub order: u32,
}

impl PlanStep {
    /// Creates an incomplete step at the given 1-based position.
    pub fn new(order: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: step_id(order),
            title: title.into(),
            description: description.into(),
            files: Vec::new(),
            dependencies: Vec::new(),
            completed: false,
            order,
        }
    }

    /// Sets the files touched by this step.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dependencies relevant to this step.
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}
