mod common;

use std::fs;

use common::sample_plan;
use plancraft_core::{credentials, models::PlannerConfig, progress, PlanStore, PlannerError};
use tempfile::TempDir;

fn create_store() -> (TempDir, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = PlanStore::new(temp_dir.path());
    (temp_dir, store)
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_temp_dir, store) = create_store();
    let plan = sample_plan("todo-app-1", "Todo App", 3, 1_700_000_000);

    store.save(&plan).expect("save");

    let loaded = store.load("todo-app-1").expect("plan should load");
    assert_eq!(loaded, plan);
    assert_eq!(loaded.created_at, plan.created_at);
}

#[test]
fn test_document_is_camel_case_json() {
    let (_temp_dir, store) = create_store();
    store
        .save(&sample_plan("doc-1", "Doc", 1, 1_640_995_200))
        .expect("save");

    let raw = fs::read_to_string(store.plan_path("doc-1")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");

    assert_eq!(value["createdAt"], "2022-01-01T00:00:00Z");
    assert_eq!(value["progress"]["totalSteps"], 1);
    assert_eq!(value["fileStructure"]["files"], serde_json::json!([]));
    assert_eq!(value["status"], "planning");
    assert!(!store.plans_dir().join("doc-1.json.tmp").exists());
}

#[test]
fn test_load_missing_plan_is_none() {
    let (_temp_dir, store) = create_store();
    assert!(store.load("nothing-here").is_none());
    assert!(store.list().is_empty());
}

#[test]
fn test_list_skips_corrupt_and_foreign_files() {
    let (_temp_dir, store) = create_store();
    store
        .save(&sample_plan("good-1", "Good", 2, 1_700_000_000))
        .expect("save");
    fs::write(store.plans_dir().join("broken.json"), "{ not json").expect("write");
    fs::write(store.plans_dir().join("notes.txt"), "ignore me").expect("write");

    let plans = store.list();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "good-1");
    assert!(store.load("broken").is_none());
}

#[test]
fn test_list_is_newest_first() {
    let (_temp_dir, store) = create_store();
    for (id, second) in [("old-1", 1_600_000_000), ("new-1", 1_800_000_000), ("mid-1", 1_700_000_000)] {
        store.save(&sample_plan(id, id, 1, second)).expect("save");
    }

    let ids: Vec<String> = store.list().into_iter().map(|plan| plan.id).collect();
    assert_eq!(ids, ["new-1", "mid-1", "old-1"]);
}

#[test]
fn test_find_by_title() {
    let (_temp_dir, store) = create_store();
    store
        .save(&sample_plan("todo-1", "Build a Todo App with Authentication", 3, 1_700_000_000))
        .expect("save");
    store
        .save(&sample_plan("blog-1", "Build a REST API for Blog", 3, 1_700_000_100))
        .expect("save");

    let found = store.find_by_title("todo");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "todo-1");
}

#[test]
fn test_update_refreshes_progress_and_timestamp() {
    let (_temp_dir, store) = create_store();
    let mut plan = sample_plan("upd-1", "Update me", 5, 1_600_000_000);
    store.save(&plan).expect("save");

    for step in plan.steps.iter_mut().take(3) {
        step.completed = true;
    }
    store.update(&mut plan).expect("update");

    let loaded = store.load("upd-1").expect("load");
    assert_eq!(loaded.progress.completed_steps, 3);
    assert_eq!(loaded.progress.total_steps, 5);
    assert_eq!(loaded.progress.percentage, 60);
    assert!(loaded.updated_at > loaded.created_at);
}

#[test]
fn test_step_completion_is_idempotent() {
    let (_temp_dir, store) = create_store();
    let plan = sample_plan("idem-1", "Idempotent", 3, 1_700_000_000);
    store.save(&plan).expect("save");

    let once = progress::set_step_completion(&store, plan, 1, true).expect("first");
    let twice = progress::set_step_completion(&store, once.clone(), 1, true).expect("second");

    assert_eq!(once.steps, twice.steps);
    assert_eq!(once.progress, twice.progress);
}

#[test]
fn test_unknown_step_leaves_file_unchanged() {
    let (_temp_dir, store) = create_store();
    let plan = sample_plan("three-1", "Three", 3, 1_700_000_000);
    store.save(&plan).expect("save");
    let before = fs::read_to_string(store.plan_path("three-1")).expect("read");

    let result = progress::set_step_completion(&store, plan, 99, true);

    assert!(matches!(result, Err(PlannerError::StepNotFound { order: 99, .. })));
    let after = fs::read_to_string(store.plan_path("three-1")).expect("read");
    assert_eq!(before, after);
}

#[test]
fn test_delete() {
    let (_temp_dir, store) = create_store();
    store
        .save(&sample_plan("gone-1", "Gone", 1, 1_700_000_000))
        .expect("save");

    assert!(store.delete("gone-1").expect("delete"));
    assert!(!store.delete("gone-1").expect("delete again"));
    assert!(store.load("gone-1").is_none());
}

#[test]
fn test_config_default_save_reset() {
    let (_temp_dir, store) = create_store();

    let defaults = store.load_config();
    assert_eq!(defaults.gemini_api_key, None);
    assert_eq!(defaults.max_plans, 50);

    let custom = PlannerConfig {
        gemini_api_key: Some("secret-key-1234".to_string()),
        default_output_dir: "/projects".to_string(),
        max_plans: 10,
    };
    store.save_config(&custom).expect("save config");
    assert_eq!(store.load_config(), custom);

    let raw = fs::read_to_string(store.config_path()).expect("read");
    assert!(raw.contains("\"geminiApiKey\""));
    assert!(raw.contains("\"maxPlans\": 10"));

    let reset = store.reset_config().expect("reset");
    assert_eq!(reset.gemini_api_key, None);
    assert_eq!(store.load_config().max_plans, 50);
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let (_temp_dir, store) = create_store();
    fs::write(store.config_path(), "[]").expect("write");
    assert_eq!(store.load_config().max_plans, 50);
}

#[test]
fn test_config_without_output_dir_keeps_saved_key() {
    let (_temp_dir, store) = create_store();
    fs::write(
        store.config_path(),
        r#"{"geminiApiKey":"real-key","maxPlans":20}"#,
    )
    .expect("write");

    let config = store.load_config();
    assert_eq!(
        credentials::resolve_api_key(&config, None).as_deref(),
        Some("real-key")
    );
    assert_eq!(config.max_plans, 20);
}
