//! Prompt construction for AI plan generation.

use super::GenerateOptions;

/// JSON shape the model is asked to return.
const RESPONSE_SHAPE: &str = r#"{
  "title": "Short project title",
  "description": "One or two sentence summary of the project",
  "overview": {
    "projectType": "frontend | backend | fullstack | cli | library | ...",
    "estimatedTime": "e.g. 2-3 days",
    "complexity": "low | medium | high"
  },
  "fileStructure": {
    "directories": ["src", "src/components"],
    "files": ["package.json", "src/index.js"]
  },
  "dependencies": {
    "npm": ["express"],
    "apis": ["Third-party APIs the project calls"],
    "services": ["Databases, queues, hosting"]
  },
  "steps": [
    {
      "title": "Step title",
      "description": "What to do and how to verify it",
      "files": ["files created or edited in this step"],
      "dependencies": ["packages installed in this step"],
      "order": 1
    }
  ]
}"#;

/// Builds the instruction sent to the model for `task`.
pub fn build_prompt(task: &str, options: &GenerateOptions) -> String {
    let mut prompt = String::from(
        "You are a senior software engineer. Break the following coding task into a \
         practical, ordered implementation plan.\n\n",
    );

    prompt.push_str(&format!("Task: {}\n", task.trim()));
    if let Some(project_type) = options.project_type.as_deref() {
        prompt.push_str(&format!("Project type: {project_type}\n"));
    }
    if let Some(framework) = options.framework.as_deref() {
        prompt.push_str(&format!("Framework: {framework}\n"));
    }

    prompt.push_str(
        "\nRequirements:\n\
         - Between 4 and 10 steps, each small enough to finish in one sitting\n\
         - Reference concrete file paths in each step\n\
         - List only dependencies the project actually needs\n\
         \nRespond with a single JSON object and nothing else, using exactly this shape:\n",
    );
    prompt.push_str(RESPONSE_SHAPE);
    prompt.push('\n');
    prompt
}
