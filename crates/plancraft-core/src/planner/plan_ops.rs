//! Plan operations for the Planner.

use std::sync::Arc;

use log::info;

use super::Planner;
use crate::{
    credentials::ensure_api_key,
    display::PlanSummaries,
    error::{PlannerError, Result},
    generator::{GenerateOptions, Generated, GeminiClient, PlanGenerator},
    models::{PlanFilter, PlanSummary, ProjectPlan},
    params::{CreatePlan, DeletePlan, Id, ListPlans},
};

impl Planner {
    /// Generates a plan for the task and saves it.
    ///
    /// With `use_ai` set, the configured model (or a Gemini client built from
    /// the API key) is asked first; generation itself never fails and falls
    /// back to the offline template.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::MissingApiKey` when AI is requested but no key
    /// is configured. Nothing is written in that case. Storage errors while
    /// saving are propagated.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Generated> {
        let generator = if params.use_ai {
            self.ai_generator().await?
        } else {
            PlanGenerator::offline()
        };

        let options = GenerateOptions {
            project_type: params.project_type.clone(),
            framework: params.framework.clone(),
        };
        let generated = generator.generate(&params.task, &options).await;

        let plan = generated.plan.clone();
        self.with_store(move |store| store.save(&plan)).await?;

        info!(
            "Saved plan {} ({:?}, {} steps)",
            generated.plan.id,
            generated.source,
            generated.plan.steps.len()
        );
        Ok(generated)
    }

    async fn ai_generator(&self) -> Result<PlanGenerator> {
        if let Some(model) = &self.model {
            return Ok(PlanGenerator::with_model(Arc::clone(model)));
        }

        let config = self.config().await?;
        let api_key = ensure_api_key(&config)?;
        let client = GeminiClient::new(api_key).map_err(|e| PlannerError::Configuration {
            message: format!("Failed to create Gemini client: {e}"),
        })?;
        Ok(PlanGenerator::with_model(Arc::new(client)))
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<ProjectPlan>> {
        let id = params.id.clone();
        self.with_store(move |store| Ok(store.load(&id))).await
    }

    /// Lists plans newest first, applying the status filter and limit.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<ProjectPlan>> {
        let filter = PlanFilter::from(params);
        self.with_store(move |store| Ok(filter.apply(store.list())))
            .await
    }

    /// Lists plans as summaries for display.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let plans = self.list_plans(params).await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Finds plans whose title loosely matches `term`.
    pub async fn find_plans(&self, term: &str) -> Result<Vec<ProjectPlan>> {
        let term = term.to_string();
        self.with_store(move |store| Ok(store.find_by_title(&term)))
            .await
    }

    /// Resolves a user-supplied plan reference.
    ///
    /// `None` selects the most recently created plan. Otherwise the value is
    /// tried as a plan ID first and then as a title search that must match
    /// exactly one plan.
    ///
    /// # Errors
    ///
    /// `NoPlans` when the store is empty, `PlanNotFound` when nothing
    /// matches and `AmbiguousPlan` when a title search matches several plans.
    pub async fn resolve_plan(&self, reference: Option<&str>) -> Result<ProjectPlan> {
        let Some(reference) = reference else {
            return self
                .with_store(|store| {
                    store.list().into_iter().next().ok_or(PlannerError::NoPlans)
                })
                .await;
        };

        let id = Id {
            id: reference.to_string(),
        };
        if let Some(plan) = self.get_plan(&id).await? {
            return Ok(plan);
        }

        let mut matches = self.find_plans(reference).await?;
        match matches.len() {
            0 => Err(PlannerError::PlanNotFound { id: id.id }),
            1 => Ok(matches.remove(0)),
            _ => Err(PlannerError::AmbiguousPlan {
                candidates: matches
                    .iter()
                    .map(|plan| plan.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                term: id.id,
            }),
        }
    }

    /// Permanently deletes a plan after explicit confirmation.
    ///
    /// Returns the deleted plan, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<ProjectPlan>> {
        if !params.confirmed {
            return Err(PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Pass --confirm to proceed with permanent deletion.".to_string(),
            });
        }

        let id = params.id.clone();
        self.with_store(move |store| {
            let plan = store.load(&id);
            if plan.is_some() {
                store.delete(&id)?;
            }
            Ok(plan)
        })
        .await
    }
}
