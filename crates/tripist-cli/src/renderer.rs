//! Markdown output for the terminal.
//!
//! Rich output goes through a termimad skin; plain output writes the
//! markdown untouched so it can be piped or diffed.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            skin: Self::skin(),
        }
    }

    fn skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::Reset);
        skin
    }

    /// Writes `markdown` to stdout, styled when rich output is enabled.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            write!(stdout, "{}", self.skin.term_text(markdown))?;
        } else {
            write!(stdout, "{markdown}")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
