//! Command handlers.
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! [`Planner`] and renders the markdown result.

use std::io;

use anyhow::{Context, Result};
use log::{info, warn};
use plancraft_core::{
    display::{CreateResult, DeleteResult, OperationStatus, PlanView, Steps, UpdateResult},
    params::{CreatePlan, DeletePlan, ListPlans, SetStepCompletion},
    Planner, PlannerError,
};

use crate::{
    args::{Commands, ConfigArgs, CreateArgs, DeleteArgs, ListArgs, ProgressArgs, ShowArgs},
    interactive,
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Create(args) => self.create(args).await,
            Commands::List(args) => self.list(args).await,
            Commands::Show(args) => self.show(args).await,
            Commands::Progress(args) => self.progress(args).await,
            Commands::Config(args) => self.config(args).await,
            Commands::Delete(args) => self.delete(args).await,
        }
    }

    async fn create(&self, args: CreateArgs) -> Result<()> {
        let interactive = args.interactive;
        let mut params = CreatePlan::from(args);

        if interactive {
            let stdin = io::stdin();
            interactive::fill_create_params(&mut params, &mut stdin.lock(), &mut io::stderr())?;
        }

        let generated = match self.planner.create_plan(&params).await {
            Err(PlannerError::MissingApiKey) => {
                warn!("No Gemini API key, falling back to the offline template");
                self.renderer.status(&OperationStatus::warning(format!(
                    "{} Using the offline template instead.",
                    PlannerError::MissingApiKey
                )));
                params.use_ai = false;
                self.planner.create_plan(&params).await
            }
            other => other,
        }
        .context("Failed to create plan")?;

        self.renderer
            .render(&CreateResult::new(&generated).to_string())
    }

    async fn list(&self, args: ListArgs) -> Result<()> {
        let limit = match args.limit {
            Some(limit) => limit,
            None => {
                self.planner
                    .config()
                    .await
                    .context("Failed to read configuration")?
                    .max_plans
            }
        };
        let params = ListPlans {
            status: args.status.map(Into::into),
            limit: Some(limit),
        };

        let summaries = self
            .planner
            .list_plans_summary(&params)
            .await
            .context("Failed to list plans")?;

        let heading = match params.status {
            Some(status) => format!("# Plans ({status})\n\n"),
            None => "# Plans\n\n".to_string(),
        };
        self.renderer.render(&format!("{heading}{summaries}"))
    }

    async fn show(&self, args: ShowArgs) -> Result<()> {
        let plan = self.planner.resolve_plan(args.plan.as_deref()).await?;
        let view = PlanView::new(&plan)
            .with_steps(args.steps)
            .with_files(args.files)
            .with_dependencies(args.dependencies);
        self.renderer.render(&view.to_string())
    }

    async fn progress(&self, args: ProgressArgs) -> Result<()> {
        let plan = self.planner.resolve_plan(args.plan.as_deref()).await?;

        let Some(step) = args.step else {
            let mut output = PlanView::new(&plan).to_string();
            if args.show {
                output.push_str(&format!("\n## Steps\n\n{}", Steps(&plan.steps)));
            }
            return self.renderer.render(&output);
        };

        let completed = args.completed();
        let updated = self
            .planner
            .set_step_completion(&SetStepCompletion {
                plan_id: plan.id.clone(),
                step,
                completed,
            })
            .await?;
        info!("Step {step} of {} set to completed={completed}", updated.id);

        let change = format!(
            "Step {step} marked {}",
            if completed { "complete" } else { "incomplete" }
        );
        let mut output = UpdateResult::with_changes(&updated, vec![change]).to_string();
        if args.show {
            output.push_str(&format!("\n## Steps\n\n{}", Steps(&updated.steps)));
        }
        self.renderer.render(&output)
    }

    async fn config(&self, args: ConfigArgs) -> Result<()> {
        if args.reset {
            self.planner
                .reset_config()
                .await
                .context("Failed to reset configuration")?;
            self.renderer
                .status(&OperationStatus::success("Configuration reset to defaults"));
        }

        if let Some(key) = args.set_api_key.as_deref() {
            self.planner.set_api_key(key).await?;
            self.renderer
                .status(&OperationStatus::success("Gemini API key saved"));
        }

        let changed = args.reset || args.set_api_key.is_some();
        if args.show || !changed {
            let config = self
                .planner
                .config()
                .await
                .context("Failed to read configuration")?;
            let env_key = self.planner.api_key().await?.is_some() && config.gemini_api_key.is_none();
            let api_key = match (config.masked_api_key(), env_key) {
                (Some(masked), _) => masked,
                (None, true) => "from GEMINI_API_KEY".to_string(),
                (None, false) => "not set".to_string(),
            };

            let output = format!(
                "# Configuration\n\n\
                 - **Data directory**: {}\n\
                 - **Gemini API key**: {api_key}\n\
                 - **Default output directory**: {}\n\
                 - **Max plans**: {}\n",
                self.planner.store().root().display(),
                config.default_output_dir,
                config.max_plans,
            );
            self.renderer.render(&output)?;
        }
        Ok(())
    }

    async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let params = DeletePlan::from(args);
        match self.planner.delete_plan(&params).await? {
            Some(plan) => self.renderer.render(&DeleteResult::new(&plan).to_string()),
            None => Err(PlannerError::PlanNotFound { id: params.id }.into()),
        }
    }
}
