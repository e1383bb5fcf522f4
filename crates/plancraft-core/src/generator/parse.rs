//! Parsing of model responses into plans.

use anyhow::{anyhow, bail, Context};
use jiff::Timestamp;
use serde_json::Value;

use super::GenerateOptions;
use crate::{
    id::plan_id,
    models::{
        Complexity, FileStructure, Overview, PlanDependencies, PlanStatus, PlanStep, Progress,
        ProjectPlan,
    },
};

/// Returns the first brace-balanced `{...}` region of `text`.
///
/// Braces inside JSON string literals are ignored, so commentary before or
/// after the object (including markdown fences) is tolerated.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Maps a raw model response onto a [`ProjectPlan`].
///
/// Missing optional fields get defaults; a missing title or an empty step
/// list is an error. Step IDs and orders are always reassigned locally.
pub fn parse_plan_response(
    response: &str,
    task: &str,
    options: &GenerateOptions,
    now: Timestamp,
) -> anyhow::Result<ProjectPlan> {
    let json = extract_json_object(response).ok_or_else(|| anyhow!("no JSON object in response"))?;
    let value: Value = serde_json::from_str(json).context("response is not valid JSON")?;

    let title = str_field(&value, "title")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("response has no title"))?;

    let raw_steps = value
        .get("steps")
        .and_then(Value::as_array)
        .filter(|steps| !steps.is_empty())
        .ok_or_else(|| anyhow!("response has no steps"))?;

    let steps = raw_steps
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_step(raw, i as u32 + 1))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let overview = value.get("overview");
    let overview = Overview {
        project_type: overview
            .and_then(|o| str_field(o, "projectType"))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| options.project_type_or_default().to_string()),
        estimated_time: overview
            .and_then(|o| str_field(o, "estimatedTime"))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "TBD".to_string()),
        complexity: overview
            .and_then(|o| str_field(o, "complexity"))
            .and_then(|c| c.parse::<Complexity>().ok())
            .unwrap_or_default(),
    };

    let file_structure = value.get("fileStructure");
    let dependencies = value.get("dependencies");

    let mut plan = ProjectPlan {
        id: plan_id(&title),
        description: str_field(&value, "description")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| task.trim().to_string()),
        title,
        created_at: now,
        updated_at: now,
        status: PlanStatus::Planning,
        overview,
        file_structure: FileStructure {
            directories: string_list(file_structure, "directories"),
            files: string_list(file_structure, "files"),
        },
        dependencies: PlanDependencies {
            npm: string_list(dependencies, "npm"),
            apis: string_list(dependencies, "apis"),
            services: string_list(dependencies, "services"),
        },
        steps,
        progress: Progress::default(),
    };
    plan.refresh_progress();
    Ok(plan)
}

fn parse_step(raw: &Value, order: u32) -> anyhow::Result<PlanStep> {
    if !raw.is_object() {
        bail!("step {order} is not an object");
    }

    let title = str_field(raw, "title")
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Step {order}"));
    let description = str_field(raw, "description").unwrap_or_default();

    Ok(PlanStep::new(order, title, description)
        .with_files(string_list(Some(raw), "files"))
        .with_dependencies(string_list(Some(raw), "dependencies")))
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

/// Collects the string entries of an array field, skipping anything else.
fn string_list(value: Option<&Value>, key: &str) -> Vec<String> {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_second(1700000000).unwrap()
    }

    #[test]
    fn test_extract_json_raw() {
        let input = r#"{"title": "x", "steps": []}"#;
        assert_eq!(extract_json_object(input), Some(input));
    }

    #[test]
    fn test_extract_json_with_commentary_and_fence() {
        let input = "Here is your plan:\n```json\n{\"a\": {\"b\": 1}}\n```\nGood luck! {not this}";
        assert_eq!(extract_json_object(input), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_json_ignores_braces_in_strings() {
        let input = r#"{"title": "Use {curly} \"braces\" }", "n": 1} trailing"#;
        assert_eq!(
            extract_json_object(input),
            Some(r#"{"title": "Use {curly} \"braces\" }", "n": 1}"#)
        );
    }

    #[test]
    fn test_extract_json_unbalanced_or_missing() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{\"open\": {"), None);
    }

    #[test]
    fn test_parse_full_response() {
        let response = r#"Sure!
{
  "title": "Todo App",
  "description": "A todo app with auth",
  "overview": {"projectType": "frontend", "estimatedTime": "2 days", "complexity": "High"},
  "fileStructure": {"directories": ["src"], "files": ["src/App.jsx"]},
  "dependencies": {"npm": ["react"], "apis": [], "services": ["Firebase"]},
  "steps": [
    {"id": "model-id", "title": "Scaffold", "description": "Create the app", "files": ["package.json"], "dependencies": ["vite"], "order": 7},
    {"title": "Auth", "description": "Add login", "order": 3}
  ]
}"#;

        let plan =
            parse_plan_response(response, "todo app", &GenerateOptions::default(), now()).unwrap();

        assert_eq!(plan.title, "Todo App");
        assert!(plan.id.starts_with("todo-app-"));
        assert_eq!(plan.overview.project_type, "frontend");
        assert_eq!(plan.overview.complexity, Complexity::High);
        assert_eq!(plan.file_structure.files, vec!["src/App.jsx"]);
        assert_eq!(plan.dependencies.services, vec!["Firebase"]);
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].id, "step-1");
        assert_eq!(plan.steps[0].order, 1);
        assert_eq!(plan.steps[0].dependencies, vec!["vite"]);
        assert_eq!(plan.steps[1].order, 2);
        assert!(plan.steps.iter().all(|s| !s.completed));
        assert_eq!(plan.progress.total_steps, 2);
        assert_eq!(plan.status, PlanStatus::Planning);
        assert_eq!(plan.created_at, now());
    }

    #[test]
    fn test_parse_applies_defaults() {
        let response = r#"{"title": "Minimal", "steps": [{"title": "Only step"}]}"#;
        let options = GenerateOptions {
            project_type: Some("cli".to_string()),
            framework: None,
        };

        let plan = parse_plan_response(response, "a small tool", &options, now()).unwrap();

        assert_eq!(plan.description, "a small tool");
        assert_eq!(plan.overview.project_type, "cli");
        assert_eq!(plan.overview.estimated_time, "TBD");
        assert_eq!(plan.overview.complexity, Complexity::Medium);
        assert!(plan.file_structure.directories.is_empty());
        assert!(plan.dependencies.is_empty());
        assert!(plan.steps[0].files.is_empty());
    }

    #[test]
    fn test_parse_defaults_project_type_to_fullstack() {
        let response = r#"{"title": "X", "steps": [{"title": "s"}]}"#;
        let plan = parse_plan_response(response, "x", &GenerateOptions::default(), now()).unwrap();
        assert_eq!(plan.overview.project_type, "fullstack");
    }

    #[test]
    fn test_parse_rejects_missing_steps() {
        let response = r#"{"title": "No steps"}"#;
        let err =
            parse_plan_response(response, "x", &GenerateOptions::default(), now()).unwrap_err();
        assert!(err.to_string().contains("no steps"));

        let empty = r#"{"title": "No steps", "steps": []}"#;
        assert!(parse_plan_response(empty, "x", &GenerateOptions::default(), now()).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_title_and_bad_json() {
        let no_title = r#"{"steps": [{"title": "s"}]}"#;
        assert!(parse_plan_response(no_title, "x", &GenerateOptions::default(), now()).is_err());

        let malformed = r#"{"title": "Broken", "steps": [}"#;
        assert!(parse_plan_response(malformed, "x", &GenerateOptions::default(), now()).is_err());
    }

    #[test]
    fn test_parse_untitled_step_gets_placeholder() {
        let response = r#"{"title": "X", "steps": [{"description": "no title"}]}"#;
        let plan = parse_plan_response(response, "x", &GenerateOptions::default(), now()).unwrap();
        assert_eq!(plan.steps[0].title, "Step 1");
    }
}
