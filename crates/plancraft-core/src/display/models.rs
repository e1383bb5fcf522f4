//! Display implementations for domain models.
//!
//! A plan renders as an overview by default; [`PlanView`] toggles the
//! optional steps, file structure and dependency sections.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Complexity, PlanDependencies, PlanStatus, PlanStep, PlanSummary, Progress, ProjectPlan,
};

const BAR_WIDTH: usize = 20;

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text progress bar: `` `██████░░░░…` 30% (3/10 steps) ``.
pub struct ProgressBar<'a> {
    progress: &'a Progress,
    width: usize,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: &'a Progress) -> Self {
        Self {
            progress,
            width: BAR_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }
}

impl fmt::Display for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percentage = self.progress.percentage.min(100) as usize;
        let filled = (percentage * self.width + 50) / 100;
        write!(
            f,
            "`{}{}` {}% ({}/{} steps)",
            "█".repeat(filled),
            "░".repeat(self.width - filled),
            self.progress.percentage,
            self.progress.completed_steps,
            self.progress.total_steps
        )
    }
}

/// A plan with optional sections switched on.
pub struct PlanView<'a> {
    plan: &'a ProjectPlan,
    steps: bool,
    files: bool,
    dependencies: bool,
}

impl<'a> PlanView<'a> {
    /// Overview only: metadata, description and progress.
    pub fn new(plan: &'a ProjectPlan) -> Self {
        Self {
            plan,
            steps: false,
            files: false,
            dependencies: false,
        }
    }

    /// Every section.
    pub fn full(plan: &'a ProjectPlan) -> Self {
        Self::new(plan)
            .with_steps(true)
            .with_files(true)
            .with_dependencies(true)
    }

    pub fn with_steps(mut self, show: bool) -> Self {
        self.steps = show;
        self
    }

    pub fn with_files(mut self, show: bool) -> Self {
        self.files = show;
        self
    }

    pub fn with_dependencies(mut self, show: bool) -> Self {
        self.dependencies = show;
        self
    }

    fn fmt_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "# {}", plan.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", plan.id)?;
        writeln!(f, "- Status: {}", plan.status.with_icon())?;
        writeln!(f, "- Type: {}", plan.overview.project_type)?;
        writeln!(f, "- Estimated time: {}", plan.overview.estimated_time)?;
        writeln!(f, "- Complexity: {}", plan.overview.complexity)?;
        writeln!(f, "- Created: {}", LocalDateTime(&plan.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&plan.updated_at))?;

        if !plan.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", plan.description)?;
        }

        writeln!(f, "\n## Progress")?;
        writeln!(f)?;
        writeln!(f, "{}", ProgressBar::new(&plan.progress))?;
        match plan.progress.remaining_steps() {
            0 => {}
            1 => writeln!(f, "\n1 step remaining")?,
            remaining => writeln!(f, "\n{remaining} steps remaining")?,
        }
        if let Some(next) = plan.next_step() {
            writeln!(f)?;
            writeln!(f, "Next: step {}. {}", next.order, next.title)?;
        }
        Ok(())
    }

    fn fmt_steps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        if self.plan.steps.is_empty() {
            return writeln!(f, "No steps in this plan.");
        }
        for step in &self.plan.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }

    fn fmt_files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let structure = &self.plan.file_structure;
        writeln!(f, "\n## File Structure")?;
        writeln!(f)?;
        if structure.directories.is_empty() && structure.files.is_empty() {
            return writeln!(f, "No files listed.");
        }
        for dir in &structure.directories {
            writeln!(f, "- `{}/`", dir.trim_end_matches('/'))?;
        }
        for file in &structure.files {
            writeln!(f, "- `{file}`")?;
        }
        Ok(())
    }

    fn fmt_dependencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n## Dependencies")?;
        writeln!(f)?;
        write!(f, "{}", self.plan.dependencies)
    }
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_overview(f)?;
        if self.steps {
            self.fmt_steps(f)?;
        }
        if self.files {
            self.fmt_files(f)?;
        }
        if self.dependencies {
            self.fmt_dependencies(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProjectPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanView::full(self))
    }
}

impl fmt::Display for PlanDependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No dependencies listed.");
        }

        for (label, items) in [
            ("npm", &self.npm),
            ("APIs", &self.apis),
            ("Services", &self.services),
        ] {
            if !items.is_empty() {
                writeln!(f, "- **{label}**: {}", items.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { "✓ done" } else { "○ todo" };
        writeln!(f, "### {}. {} ({marker})", self.order, self.title)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if !self.files.is_empty() {
            writeln!(f, "#### Files")?;
            writeln!(f)?;
            for file in &self.files {
                writeln!(f, "- `{file}`")?;
            }
            writeln!(f)?;
        }

        if !self.dependencies.is_empty() {
            writeln!(f, "#### Dependencies")?;
            writeln!(f)?;
            writeln!(f, "{}", self.dependencies.join(", "))?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Type**: {}", self.project_type)?;
        writeln!(f, "- **Progress**: {}", ProgressBar::new(&self.progress).with_width(10))?;
        writeln!(f, "- **Created**: {}", LocalDate(&self.created_at))?;
        writeln!(f)
    }
}
