//! Terminal rendering of the markdown produced by the display wrappers.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as is.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.quote_mark.set_fg(Color::Red);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Writes `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            // Headers keep their hashes so step titles stand out in scrollback.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(stdout, "\x1b[36m{line}\x1b[0m")
                } else {
                    writeln!(stdout, "{}", self.skin.inline(line))
                }
                .context("Failed to write to terminal")?;
            }
        } else {
            write!(stdout, "{markdown}").context("Failed to write to terminal")?;
        }
        stdout.flush().context("Failed to flush terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
