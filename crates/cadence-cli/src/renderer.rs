//! Terminal rendering module for rich markdown output
//!
//! This module renders the core crate's markdown with termimad, or prints it
//! unchanged when color is disabled. Headers take the accent color of the
//! phase being shown.

use anyhow::Result;
use cadence_core::models::PhaseColor;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_accented(markdown, None)
    }

    /// Render markdown with headers drawn in a phase's color
    pub fn render_accented(&self, markdown: &str, accent: Option<PhaseColor>) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let code = header_code(accent);
        for line in markdown.lines() {
            // Print headers ourselves so the hash symbols stay visible
            if line.starts_with('#') {
                println!("\x1b[{code}m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI foreground code for header lines.
fn header_code(accent: Option<PhaseColor>) -> u8 {
    match accent {
        None | Some(PhaseColor::Blue) => 34,
        Some(PhaseColor::Emerald) => 32,
        Some(PhaseColor::Indigo) => 35,
        Some(PhaseColor::Rose) => 31,
    }
}
