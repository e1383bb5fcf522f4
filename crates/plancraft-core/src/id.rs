//! Identifier generation for plans and steps.
//!
//! Plan IDs double as file names in the plan store, so they are restricted to
//! `[a-z0-9-]`.

use jiff::Timestamp;

/// Maximum length of the title-derived part of a plan ID.
const SLUG_MAX_LEN: usize = 30;

/// Derives a plan ID from a title and the current time.
///
/// # Examples
///
/// ```rust
/// use plancraft_core::id::plan_id;
///
/// let id = plan_id("Build a Todo App!");
/// assert!(id.starts_with("build-a-todo-app-"));
/// ```
pub fn plan_id(title: &str) -> String {
    plan_id_at(title, Timestamp::now().as_millisecond())
}

/// Derives a plan ID from a title and an explicit millisecond timestamp.
pub fn plan_id_at(title: &str, millis: i64) -> String {
    format!("{}-{}", slugify(title), millis.unsigned_abs())
}

/// Returns the ID for the step at the given 1-based position.
pub fn step_id(n: u32) -> String {
    format!("step-{n}")
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_whitespace = false;
        }
        // anything else is dropped without ending a whitespace run
    }

    // slug is pure ASCII, byte truncation is safe
    slug.truncate(SLUG_MAX_LEN);
    slug
}
