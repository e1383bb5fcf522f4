//! Status and complexity enumerations for plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
///
/// The status is chosen by the user; it is never derived from step progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    /// Plan has been generated but work has not started
    #[default]
    Planning,

    /// Plan is being worked on
    InProgress,

    /// Plan has been finished
    Completed,

    /// Plan is on hold
    Paused,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(PlanStatus::Planning),
            "in-progress" | "in_progress" | "inprogress" => Ok(PlanStatus::InProgress),
            "completed" => Ok(PlanStatus::Completed),
            "paused" => Ok(PlanStatus::Paused),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planning => "planning",
            PlanStatus::InProgress => "in-progress",
            PlanStatus::Completed => "completed",
            PlanStatus::Paused => "paused",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plancraft_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Completed.with_icon(), "✓ completed");
    /// assert_eq!(PlanStatus::Planning.with_icon(), "○ planning");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Planning => "○ planning",
            PlanStatus::InProgress => "➤ in-progress",
            PlanStatus::Completed => "✓ completed",
            PlanStatus::Paused => "‖ paused",
        }
    }
}

/// Estimated complexity of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(format!("Invalid complexity: {s}")),
        }
    }
}

impl Complexity {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}
