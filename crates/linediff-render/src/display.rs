//! Plain and styled output of rendered lines

use super::types::{RenderedLine, SegmentKind};
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::io::{self, Write};

/// Marker printed after a line that has no terminator
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Concatenate rendered lines into the final diff text.
///
/// Each line is `prefix + content`, followed by `\n` only when flagged.
pub fn to_text(lines: &[RenderedLine]) -> String {
    let mut result = String::new();
    for line in lines {
        result.push_str(line.prefix);
        result.push_str(&line.content);
        if line.line_break {
            result.push('\n');
        }
    }
    result
}

/// Terminal styles per line kind
#[derive(Debug, Clone, Copy)]
pub struct DiffTheme {
    pub added: Style,
    pub removed: Style,
    pub unchanged: Style,
    pub marker: Style,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self {
            added: Style::new().green(),
            removed: Style::new().red(),
            unchanged: Style::new().dimmed(),
            marker: Style::new().dimmed().italic(),
        }
    }
}

impl DiffTheme {
    pub fn style_for(&self, kind: SegmentKind) -> Style {
        match kind {
            SegmentKind::Added => self.added,
            SegmentKind::Removed => self.removed,
            SegmentKind::Unchanged => self.unchanged,
        }
    }
}

/// Options for [`write_styled`]
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    pub color: bool,
    pub newline_marker: bool,
    pub theme: DiffTheme,
}

/// Write one physical terminal line per rendered line.
///
/// Unterminated lines still end the terminal line so the next line does not
/// run into them; the missing terminator is shown with [`NO_NEWLINE_MARKER`]
/// when `newline_marker` is set.
pub fn write_styled<W: Write>(
    out: &mut W,
    lines: &[RenderedLine],
    options: &StyleOptions,
) -> io::Result<()> {
    for line in lines {
        let text = line.display_text();
        if options.color {
            writeln!(out, "{}", text.style(options.theme.style_for(line.kind)))?;
        } else {
            writeln!(out, "{}", text)?;
        }

        if !line.line_break && options.newline_marker {
            if options.color {
                writeln!(out, "{}", NO_NEWLINE_MARKER.style(options.theme.marker))?;
            } else {
                writeln!(out, "{}", NO_NEWLINE_MARKER)?;
            }
        }
    }
    Ok(())
}

/// Line counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn from_lines(lines: &[RenderedLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind {
                SegmentKind::Unchanged => stats.unchanged += 1,
                SegmentKind::Added => stats.added += 1,
                SegmentKind::Removed => stats.removed += 1,
            }
        }
        stats
    }

    /// True when nothing was added or removed
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    /// One-line summary such as `2 added, 1 removed, 10 unchanged`
    pub fn summary(&self) -> String {
        format!(
            "{} added, {} removed, {} unchanged",
            self.added, self.removed, self.unchanged
        )
    }
}
