use jiff::Timestamp;
use plancraft_core::{
    models::{PlanStep, ProjectPlan},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner over a fresh data directory
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Builds a plan with `steps` incomplete steps created at `created_second`.
#[allow(dead_code)]
pub fn sample_plan(id: &str, title: &str, steps: u32, created_second: i64) -> ProjectPlan {
    let created_at = Timestamp::from_second(created_second).expect("valid timestamp");
    let mut plan = ProjectPlan {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        created_at,
        updated_at: created_at,
        status: Default::default(),
        overview: Default::default(),
        file_structure: Default::default(),
        dependencies: Default::default(),
        steps: (1..=steps)
            .map(|n| PlanStep::new(n, format!("Step {n}"), ""))
            .collect(),
        progress: Default::default(),
    };
    plan.refresh_progress();
    plan
}
