//! Line-based prompts for `create --interactive`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use plancraft_core::params::CreatePlan;

/// Asks for the project type and framework, keeping values already given on
/// the command line as defaults. An empty answer keeps the default.
pub fn fill_create_params<R: BufRead, W: Write>(
    params: &mut CreatePlan,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let project_type = params.project_type.as_deref().unwrap_or("fullstack");
    if let Some(answer) = ask(input, output, &format!("Project type [{project_type}]"))? {
        params.project_type = Some(answer);
    }

    let framework = params.framework.as_deref().unwrap_or("none");
    if let Some(answer) = ask(input, output, &format!("Framework [{framework}]"))? {
        params.framework = Some(answer);
    }

    Ok(())
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
