//! Line-level diff rendering
//!
//! Computes the line diff of two documents, groups it into segments of
//! unchanged, added and removed lines, and turns those segments into
//! prefixed display lines.

mod display;
mod processor;
mod types;

pub use display::{
    to_text, write_styled, DiffStats, DiffTheme, StyleOptions, NO_NEWLINE_MARKER,
};
pub use processor::{
    diff_segments, reconstruct_new, reconstruct_old, render, render_segment, render_segments,
};
pub use types::{DiffSegment, DocumentText, RenderedLine, SegmentKind};

#[cfg(test)]
mod tests;
