//! Plan document operations.

use std::{fs, io::ErrorKind};

use jiff::Timestamp;
use log::{debug, warn};

use super::{matching::title_matches, validate_plan_id, PlanStore, PLAN_EXTENSION};
use crate::{
    error::{IoResultExt, Result},
    models::ProjectPlan,
};

impl PlanStore {
    /// Writes the plan as its own document, replacing any previous version.
    pub fn save(&self, plan: &ProjectPlan) -> Result<()> {
        validate_plan_id(&plan.id)?;
        Self::write_json(&self.plan_path(&plan.id), plan)
    }

    /// Reads a plan by ID.
    ///
    /// Returns `None` when the document does not exist, cannot be read or
    /// does not decode as a plan.
    pub fn load(&self, id: &str) -> Option<ProjectPlan> {
        if validate_plan_id(id).is_err() {
            return None;
        }

        let path = self.plan_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No plan document at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read plan {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(plan) => Some(plan),
            Err(e) => {
                warn!("Skipping corrupt plan {}: {e}", path.display());
                None
            }
        }
    }

    /// Loads every readable plan, newest first.
    pub fn list(&self) -> Vec<ProjectPlan> {
        let dir = self.plans_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Failed to read plans directory {}: {e}", dir.display());
                }
                return Vec::new();
            }
        };

        let mut plans: Vec<ProjectPlan> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == PLAN_EXTENSION))
            .filter_map(|path| {
                let id = path.file_stem()?.to_str()?.to_string();
                self.load(&id)
            })
            .collect();

        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans
    }

    /// Finds plans whose title loosely matches `term`, newest first.
    ///
    /// See [`title_matches`] for the matching rule.
    pub fn find_by_title(&self, term: &str) -> Vec<ProjectPlan> {
        self.list()
            .into_iter()
            .filter(|plan| title_matches(&plan.title, term))
            .collect()
    }

    /// Recomputes progress, bumps `updated_at` and rewrites the plan.
    pub fn update(&self, plan: &mut ProjectPlan) -> Result<()> {
        plan.refresh_progress();
        plan.updated_at = Timestamp::now();
        self.save(plan)
    }

    /// Removes a plan document. Returns `false` if there was nothing to
    /// remove.
    pub fn delete(&self, id: &str) -> Result<bool> {
        validate_plan_id(id)?;
        let path = self.plan_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).at_path(&path),
        }
    }
}
