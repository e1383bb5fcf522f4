//! File-backed persistence for plans and configuration.
//!
//! The store owns a single root directory laid out as:
//!
//! ```text
//! <root>/
//! ├── config.json
//! └── plans/
//!     ├── build-a-todo-app-1712345678901.json
//!     └── ...
//! ```
//!
//! Every write replaces a whole document. Reads degrade gracefully: a
//! missing or corrupt plan file is reported as absent rather than as an
//! error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

use crate::error::{IoResultExt, PlannerError, Result};

pub mod config_file;
pub mod matching;
pub mod plan_files;

const CONFIG_FILE: &str = "config.json";
const PLANS_DIR: &str = "plans";
const PLAN_EXTENSION: &str = "json";

/// Directory-backed store for plan and config documents.
#[derive(Debug, Clone)]
pub struct PlanStore {
    root: PathBuf,
}

impl PlanStore {
    /// Creates a store rooted at the given directory. Nothing is created on
    /// disk until the first write.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one JSON document per plan.
    pub fn plans_dir(&self) -> PathBuf {
        self.root.join(PLANS_DIR)
    }

    /// Path of the configuration document.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Path of the document for a plan ID.
    pub fn plan_path(&self, id: &str) -> PathBuf {
        self.plans_dir().join(format!("{id}.{PLAN_EXTENSION}"))
    }

    /// Serializes `value` and replaces the file at `path` with it.
    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }

        let contents = serde_json::to_string_pretty(value)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).at_path(&tmp_path)?;
        fs::rename(&tmp_path, path).at_path(path)?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Rejects IDs that would escape the plans directory or produce an empty
/// file name.
pub(crate) fn validate_plan_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(PlannerError::invalid_input("id").with_reason("plan ID must not be empty"));
    }
    if id.contains(['/', '\\']) || id == "." || id == ".." {
        return Err(PlannerError::invalid_input("id")
            .with_reason(format!("plan ID '{id}' is not a valid file name")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let store = PlanStore::new("/data/plancraft");
        assert_eq!(store.config_path(), PathBuf::from("/data/plancraft/config.json"));
        assert_eq!(store.plans_dir(), PathBuf::from("/data/plancraft/plans"));
        assert_eq!(
            store.plan_path("abc-1"),
            PathBuf::from("/data/plancraft/plans/abc-1.json")
        );
    }

    #[test]
    fn test_validate_plan_id() {
        assert!(validate_plan_id("build-a-todo-app-1").is_ok());
        assert!(validate_plan_id("").is_err());
        assert!(validate_plan_id("  ").is_err());
        assert!(validate_plan_id("../escape").is_err());
        assert!(validate_plan_id("a\\b").is_err());
        assert!(validate_plan_id("..").is_err());
    }
}
