//! Markdown rendering for terminal output.
//!
//! Rich mode styles inline markdown with termimad and colors headings by
//! level; plain mode (`--no-color`) prints the markdown untouched.

use anyhow::Result;
use plancraft_core::display::{status::StatusKind, OperationStatus};
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Prints markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match heading_color(line) {
                // headings keep their hashes so nesting stays visible
                Some(code) => println!("\x1b[{code}m{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Prints a one-line status to stderr.
    pub fn status(&self, status: &OperationStatus) {
        if self.rich_enabled {
            let code = match status.kind {
                StatusKind::Success => "32",
                StatusKind::Warning => "33",
            };
            eprint!("\x1b[{code}m{status}\x1b[0m");
        } else {
            eprint!("{status}");
        }
    }
}

/// ANSI color for a markdown heading line, by level.
fn heading_color(line: &str) -> Option<&'static str> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || !line[level..].starts_with(' ') {
        return None;
    }
    Some(match level {
        1 => "1;36",
        2 => "36",
        _ => "34",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n").is_ok());
    }

    #[test]
    fn test_heading_color_by_level() {
        assert_eq!(heading_color("# Plan"), Some("1;36"));
        assert_eq!(heading_color("## Steps"), Some("36"));
        assert_eq!(heading_color("### 1. Setup"), Some("34"));
        assert_eq!(heading_color("#hashtag"), None);
        assert_eq!(heading_color("- item"), None);
    }
}
