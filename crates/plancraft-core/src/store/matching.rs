//! Loose title matching used by plan search.

/// Case-insensitive title match.
///
/// A title matches when it contains `term`, or when `term` contains the
/// title's first whitespace-delimited word. The second rule lets
/// `"the todo app"` find a plan titled `"Todo List"`, but it also makes a
/// one-word title match any term containing that word.
///
/// # Examples
///
/// ```rust
/// use plancraft_core::store::matching::title_matches;
///
/// assert!(title_matches("Build a Todo App", "todo"));
/// assert!(title_matches("Dashboard", "admin dashboard redesign"));
/// assert!(!title_matches("Build a REST API for Blog", "todo"));
/// ```
pub fn title_matches(title: &str, term: &str) -> bool {
    let title = title.to_lowercase();
    let term = term.to_lowercase();

    if title.contains(&term) {
        return true;
    }

    title
        .split_whitespace()
        .next()
        .is_some_and(|first_word| term.contains(first_word))
}
