//! Command-line argument definitions.
//!
//! Clap structs live here and convert into the framework-free parameter
//! types of `plancraft_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use plancraft_core::{
    models::PlanStatus,
    params::{CreatePlan, DeletePlan},
};

/// Turn a task description into a step-by-step project plan and track it.
#[derive(Parser)]
#[command(version, about, name = "plancraft")]
pub struct Args {
    /// Directory holding config.json and plans/. Defaults to
    /// $XDG_CONFIG_HOME/plancraft
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and save a plan for a coding task
    #[command(alias = "c")]
    Create(CreateArgs),
    /// List saved plans, newest first
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a plan
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Show progress or mark a step complete
    #[command(alias = "p")]
    Progress(ProgressArgs),
    /// View or change configuration
    Config(ConfigArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

#[derive(ClapArgs)]
pub struct CreateArgs {
    /// What you want to build, in plain words
    pub task: String,
    /// Project type (fullstack, frontend, backend, cli, ...)
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,
    /// Framework hint (react, vue, angular, next, ...)
    #[arg(short, long)]
    pub framework: Option<String>,
    /// Prompt for project type and framework
    #[arg(short, long)]
    pub interactive: bool,
    /// Skip the AI model and use the offline template
    #[arg(long)]
    pub no_ai: bool,
}

impl From<CreateArgs> for CreatePlan {
    fn from(val: CreateArgs) -> Self {
        CreatePlan {
            task: val.task,
            project_type: val.project_type,
            framework: val.framework,
            use_ai: !val.no_ai,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only show plans with this status
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Maximum number of plans to show. Defaults to maxPlans from the config
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Show a plan's overview and, optionally, its details.
///
/// Without a plan argument the most recently created plan is shown. The
/// argument may be a plan ID or part of its title.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Plan ID or title search term
    #[arg(allow_hyphen_values = true)]
    pub plan: Option<String>,
    /// Include the steps
    #[arg(short, long)]
    pub steps: bool,
    /// Include the file structure
    #[arg(short, long)]
    pub files: bool,
    /// Include the dependencies
    #[arg(short, long)]
    pub dependencies: bool,
}

#[derive(ClapArgs)]
pub struct ProgressArgs {
    /// Plan ID or title search term; defaults to the most recent plan
    #[arg(allow_hyphen_values = true)]
    pub plan: Option<String>,
    /// Step number to update
    #[arg(short, long)]
    pub step: Option<u32>,
    /// Mark the step complete (the default when --step is given)
    #[arg(long, conflicts_with = "incomplete", requires = "step")]
    pub complete: bool,
    /// Mark the step incomplete
    #[arg(long, requires = "step")]
    pub incomplete: bool,
    /// List every step with its completion state
    #[arg(long)]
    pub show: bool,
}

impl ProgressArgs {
    /// Requested completion flag for `--step`.
    pub fn completed(&self) -> bool {
        self.complete || !self.incomplete
    }
}

#[derive(ClapArgs)]
pub struct ConfigArgs {
    /// Store a Gemini API key
    #[arg(long, value_name = "KEY")]
    pub set_api_key: Option<String>,
    /// Print the current configuration
    #[arg(long)]
    pub show: bool,
    /// Restore the default configuration
    #[arg(long, conflicts_with = "set_api_key")]
    pub reset: bool,
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    /// ID of the plan to delete
    #[arg(allow_hyphen_values = true)]
    pub plan: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeletePlan {
    fn from(val: DeleteArgs) -> Self {
        DeletePlan {
            id: val.plan,
            confirmed: val.confirm,
        }
    }
}

/// Plan status values accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Planning,
    InProgress,
    Completed,
    Paused,
}

impl From<StatusArg> for PlanStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planning => PlanStatus::Planning,
            StatusArg::InProgress => PlanStatus::InProgress,
            StatusArg::Completed => PlanStatus::Completed,
            StatusArg::Paused => PlanStatus::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_create_args_convert() {
        let args = Args::parse_from([
            "plancraft", "create", "Build a blog", "--type", "backend", "--no-ai",
        ]);
        let Commands::Create(create) = args.command else {
            panic!("expected create");
        };
        let params = CreatePlan::from(create);
        assert_eq!(params.task, "Build a blog");
        assert_eq!(params.project_type.as_deref(), Some("backend"));
        assert!(!params.use_ai);
    }

    #[test]
    fn test_status_value_names() {
        let args = Args::parse_from(["plancraft", "list", "--status", "in-progress"]);
        let Commands::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.status.map(PlanStatus::from), Some(PlanStatus::InProgress));
    }

    #[test]
    fn test_progress_flags_conflict() {
        let result = Args::try_parse_from([
            "plancraft", "progress", "--step", "1", "--complete", "--incomplete",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["plancraft", "list", "--data-dir", "/tmp/x", "--no-color"]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(args.no_color);
    }

    #[test]
    fn test_plan_ids_may_start_with_hyphen() {
        let args = Args::parse_from(["plancraft", "delete", "-1792410365769", "--confirm"]);
        let Commands::Delete(delete) = args.command else {
            panic!("expected delete");
        };
        assert_eq!(delete.plan, "-1792410365769");
        assert!(delete.confirm);

        let args = Args::parse_from(["plancraft", "show", "-1792410365769", "--steps"]);
        let Commands::Show(show) = args.command else {
            panic!("expected show");
        };
        assert_eq!(show.plan.as_deref(), Some("-1792410365769"));
        assert!(show.steps);

        let args = Args::parse_from(["plancraft", "progress", "-1792410365769", "-s", "2"]);
        let Commands::Progress(progress) = args.command else {
            panic!("expected progress");
        };
        assert_eq!(progress.plan.as_deref(), Some("-1792410365769"));
        assert_eq!(progress.step, Some(2));
    }

    #[test]
    fn test_show_flags_without_plan() {
        let args = Args::parse_from(["plancraft", "show", "--steps", "-f"]);
        let Commands::Show(show) = args.command else {
            panic!("expected show");
        };
        assert!(show.plan.is_none());
        assert!(show.steps);
        assert!(show.files);
    }
}
