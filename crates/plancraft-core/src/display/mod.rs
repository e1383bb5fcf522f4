//! Display formatting functions and result types.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes get newtype wrappers. Everything renders as markdown so the CLI
//! can hand it to a terminal skin unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views, Wrappers │    │    Markdown     │
//! │ (Plan, Step)    │───▶│ & Result Types  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, Steps)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models, [`PlanView`] and
//!   [`ProgressBar`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use plancraft_core::{
//!     display::{PlanView, ProgressBar},
//!     models::{PlanStep, ProjectPlan},
//! };
//! use jiff::Timestamp;
//!
//! let mut plan = ProjectPlan {
//!     id: "todo-app-1".to_string(),
//!     title: "Todo App".to_string(),
//!     description: String::new(),
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//!     status: Default::default(),
//!     overview: Default::default(),
//!     file_structure: Default::default(),
//!     dependencies: Default::default(),
//!     steps: vec![PlanStep::new(1, "Setup", ""), PlanStep::new(2, "Build", "")],
//!     progress: Default::default(),
//! };
//! plan.steps[0].completed = true;
//! plan.refresh_progress();
//!
//! let bar = ProgressBar::new(&plan.progress).to_string();
//! assert!(bar.contains("50%"));
//!
//! let overview = PlanView::new(&plan).to_string();
//! assert!(overview.contains("# Todo App"));
//! assert!(!overview.contains("## Steps"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, Steps};
pub use datetime::LocalDateTime;
pub use models::{PlanView, ProgressBar};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
