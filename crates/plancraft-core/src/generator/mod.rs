//! Plan generation from a task description.
//!
//! [`PlanGenerator::generate`] asks a [`CompletionModel`] for a JSON plan and
//! falls back to a deterministic template whenever that fails. The caller
//! always receives a complete [`ProjectPlan`]; [`Generated::source`] records
//! which strategy produced it.
//!
//! ```text
//! task ──▶ prompt ──▶ CompletionModel ──▶ extract {...} ──▶ map + defaults ──▶ plan
//!   │                        ✗                 ✗                  ✗
//!   └──────────────────────────────▶ fallback template ───────────────────▶ plan
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info, warn};

use crate::models::ProjectPlan;

pub mod fallback;
pub mod gemini;
pub mod parse;
pub mod prompt;

pub use gemini::GeminiClient;

/// Project type assumed when the caller gives none.
pub const DEFAULT_PROJECT_TYPE: &str = "fullstack";

/// A text-completion backend.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends a prompt and returns the raw response text.
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Optional hints that shape the generated plan.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub project_type: Option<String>,
    pub framework: Option<String>,
}

impl GenerateOptions {
    /// Project type to use, defaulting to [`DEFAULT_PROJECT_TYPE`].
    pub fn project_type_or_default(&self) -> &str {
        self.project_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PROJECT_TYPE)
    }
}

/// Which strategy produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// Parsed from the model's response
    Ai,
    /// Built from the offline template
    Fallback,
}

/// A generated plan together with its provenance.
#[derive(Debug, Clone)]
pub struct Generated {
    pub plan: ProjectPlan,
    pub source: PlanSource,
}

impl Generated {
    /// True when the plan came from the AI model.
    pub fn from_ai(&self) -> bool {
        self.source == PlanSource::Ai
    }
}

/// Produces plans, using an AI model when one is configured.
#[derive(Clone, Default)]
pub struct PlanGenerator {
    model: Option<Arc<dyn CompletionModel>>,
}

impl PlanGenerator {
    /// Generator that only uses the offline template.
    pub fn offline() -> Self {
        Self { model: None }
    }

    /// Generator backed by the given model.
    pub fn with_model(model: Arc<dyn CompletionModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Whether an AI model is configured.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Generates a plan for `task`. Never fails: any problem with the AI
    /// strategy is logged and answered with the fallback template.
    pub async fn generate(&self, task: &str, options: &GenerateOptions) -> Generated {
        let now = Timestamp::now();

        if let Some(model) = &self.model {
            match Self::generate_with_model(model.as_ref(), task, options, now).await {
                Ok(plan) => {
                    info!("Generated plan '{}' with {} steps", plan.title, plan.steps.len());
                    return Generated {
                        plan,
                        source: PlanSource::Ai,
                    };
                }
                Err(e) => warn!("AI plan generation failed: {e:#}, using fallback plan"),
            }
        }

        Generated {
            plan: fallback::fallback_plan(task, options, now),
            source: PlanSource::Fallback,
        }
    }

    async fn generate_with_model(
        model: &dyn CompletionModel,
        task: &str,
        options: &GenerateOptions,
        now: Timestamp,
    ) -> anyhow::Result<ProjectPlan> {
        let prompt = prompt::build_prompt(task, options);
        debug!("Plan prompt is {} chars", prompt.len());

        let response = model.complete(&prompt).await?;
        parse::parse_plan_response(&response, task, options, now)
    }
}
