//! Deterministic plan template used when AI generation is unavailable.

use jiff::Timestamp;

use super::{GenerateOptions, DEFAULT_PROJECT_TYPE};
use crate::{
    id::{plan_id, step_id},
    models::{
        Complexity, FileStructure, Overview, PlanDependencies, PlanStatus, PlanStep, Progress,
        ProjectPlan,
    },
};

const UNTITLED: &str = "New Project";
const TITLE_MAX_CHARS: usize = 60;

/// npm packages added on top of `express` for a framework hint.
pub fn framework_dependencies(framework: Option<&str>) -> &'static [&'static str] {
    match framework.map(|f| f.trim().to_lowercase()).as_deref() {
        Some("react") => &["react", "react-dom"],
        Some("vue") => &["vue"],
        Some("angular") => &["@angular/core"],
        Some("next") => &["next", "react"],
        _ => &[],
    }
}

/// Builds the offline plan for `task`.
pub fn fallback_plan(task: &str, options: &GenerateOptions, now: Timestamp) -> ProjectPlan {
    let task = task.trim();
    let title = fallback_title(task);
    let project_type = options.project_type_or_default().to_string();
    let fullstack = project_type.eq_ignore_ascii_case(DEFAULT_PROJECT_TYPE);

    let mut npm = vec!["express".to_string()];
    npm.extend(
        framework_dependencies(options.framework.as_deref())
            .iter()
            .map(|dep| dep.to_string()),
    );

    let steps = template_steps(task, fullstack, &npm);

    let mut directories = vec!["src".to_string(), "tests".to_string()];
    let mut files = vec![
        "package.json".to_string(),
        "README.md".to_string(),
        "src/index.js".to_string(),
    ];
    if fullstack {
        directories.extend(["server".to_string(), "client".to_string()]);
        files.extend(["server/index.js".to_string(), "client/index.html".to_string()]);
    }

    let mut plan = ProjectPlan {
        id: plan_id(&title),
        title,
        description: if task.is_empty() {
            UNTITLED.to_string()
        } else {
            task.to_string()
        },
        created_at: now,
        updated_at: now,
        status: PlanStatus::Planning,
        overview: Overview {
            project_type,
            estimated_time: if fullstack { "3-5 days" } else { "1-2 days" }.to_string(),
            complexity: if fullstack {
                Complexity::Medium
            } else {
                Complexity::Low
            },
        },
        file_structure: FileStructure { directories, files },
        dependencies: PlanDependencies {
            npm,
            apis: Vec::new(),
            services: Vec::new(),
        },
        steps,
        progress: Progress::default(),
    };
    plan.refresh_progress();
    plan
}

fn fallback_title(task: &str) -> String {
    if task.is_empty() {
        return UNTITLED.to_string();
    }
    if task.chars().count() > TITLE_MAX_CHARS {
        let truncated: String = task.chars().take(TITLE_MAX_CHARS - 3).collect();
        format!("{}...", truncated.trim_end())
    } else {
        task.to_string()
    }
}

fn template_steps(task: &str, fullstack: bool, npm: &[String]) -> Vec<PlanStep> {
    let core_description = if task.is_empty() {
        "Implement the core functionality of the project.".to_string()
    } else {
        format!("Implement the core functionality: {task}")
    };

    let mut drafts = vec![
        PlanStep::new(
            0,
            "Project Setup",
            "Initialize the project structure, install dependencies and configure tooling.",
        )
        .with_files(["package.json", "README.md"])
        .with_dependencies(npm.iter().cloned()),
        PlanStep::new(0, "Core Implementation", core_description).with_files(["src/index.js"]),
        PlanStep::new(
            0,
            "Testing",
            "Write tests for the main features and fix any issues they uncover.",
        )
        .with_files(["tests/"])
        .with_dependencies(["jest"]),
    ];

    if fullstack {
        drafts.insert(
            1,
            PlanStep::new(
                0,
                "Backend Setup",
                "Create the server, define the API routes and connect data storage.",
            )
            .with_files(["server/index.js", "server/routes/"])
            .with_dependencies(["express"]),
        );
        drafts.push(
            PlanStep::new(
                0,
                "Frontend Integration",
                "Build the user interface and connect it to the backend API.",
            )
            .with_files(["client/index.html", "client/app.js"]),
        );
    }

    for (step, order) in drafts.iter_mut().zip(1..) {
        step.order = order;
        step.id = step_id(order);
    }
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_second(1700000000).unwrap()
    }

    fn options(project_type: Option<&str>, framework: Option<&str>) -> GenerateOptions {
        GenerateOptions {
            project_type: project_type.map(str::to_string),
            framework: framework.map(str::to_string),
        }
    }

    fn step_titles(plan: &ProjectPlan) -> Vec<&str> {
        plan.steps.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_non_fullstack_has_three_steps() {
        let plan = fallback_plan("Build a CLI", &options(Some("cli"), None), now());
        assert_eq!(
            step_titles(&plan),
            vec!["Project Setup", "Core Implementation", "Testing"]
        );
        assert_eq!(plan.overview.project_type, "cli");
        assert!(plan.steps[1].description.contains("Build a CLI"));
    }

    #[test]
    fn test_fullstack_inserts_backend_and_appends_frontend() {
        let plan = fallback_plan("Build a shop", &options(Some("fullstack"), None), now());
        assert_eq!(
            step_titles(&plan),
            vec![
                "Project Setup",
                "Backend Setup",
                "Core Implementation",
                "Testing",
                "Frontend Integration"
            ]
        );
    }

    #[test]
    fn test_default_project_type_is_fullstack() {
        let plan = fallback_plan("Build a shop", &GenerateOptions::default(), now());
        assert_eq!(plan.overview.project_type, "fullstack");
        assert_eq!(plan.steps.len(), 5);
    }

    #[test]
    fn test_orders_and_ids_are_sequential() {
        let plan = fallback_plan("x", &GenerateOptions::default(), now());
        for (i, step) in plan.steps.iter().enumerate() {
            assert_eq!(step.order, i as u32 + 1);
            assert_eq!(step.id, format!("step-{}", i + 1));
            assert!(!step.completed);
        }
    }

    #[test]
    fn test_framework_dependencies() {
        let deps = |fw: Option<&str>| {
            fallback_plan("x", &options(Some("frontend"), fw), now())
                .dependencies
                .npm
        };
        assert_eq!(deps(Some("react")), vec!["express", "react", "react-dom"]);
        assert_eq!(deps(Some("Vue")), vec!["express", "vue"]);
        assert_eq!(deps(Some("angular")), vec!["express", "@angular/core"]);
        assert_eq!(deps(Some("next")), vec!["express", "next", "react"]);
        assert_eq!(deps(Some("svelte")), vec!["express"]);
        assert_eq!(deps(None), vec!["express"]);
    }

    #[test]
    fn test_progress_starts_at_zero() {
        let plan = fallback_plan("Anything", &GenerateOptions::default(), now());
        assert_eq!(plan.progress.completed_steps, 0);
        assert_eq!(plan.progress.total_steps, 5);
        assert_eq!(plan.progress.percentage, 0);
        assert_eq!(plan.status, PlanStatus::Planning);
    }

    #[test]
    fn test_empty_and_long_tasks_get_usable_titles() {
        let empty = fallback_plan("   ", &GenerateOptions::default(), now());
        assert_eq!(empty.title, "New Project");
        assert!(!empty.id.is_empty());

        let long_task = "word ".repeat(40);
        let long = fallback_plan(&long_task, &GenerateOptions::default(), now());
        assert!(long.title.chars().count() <= 60);
        assert!(long.title.ends_with("..."));
    }
}
