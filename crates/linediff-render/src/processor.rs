//! Core diff computation and line rendering logic

use super::types::{DiffSegment, RenderedLine, SegmentKind};
use similar::{Algorithm, TextDiff};
use tracing::debug;

/// Diff two documents line by line and group the result into segments.
///
/// Line terminators are part of each token, so `"a"` and `"a\n"` differ.
/// Only `\n` ends a line, the same rule [`render_segment`] splits on.
/// Comparison is exact; whitespace is never normalized.
pub fn diff_segments(old: &str, new: &str) -> Vec<DiffSegment> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(old_lines.as_slice(), new_lines.as_slice());

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value())),
        }
    }

    debug!(
        old_bytes = old.len(),
        new_bytes = new.len(),
        segments = segments.len(),
        "computed line diff"
    );
    segments
}

/// Lines with their `\n` terminator kept; a lone `\r` is line content.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Render the line diff of two documents.
pub fn render(old: &str, new: &str) -> Vec<RenderedLine> {
    render_segments(&diff_segments(old, new))
}

/// Render already computed segments, in order.
pub fn render_segments(segments: &[DiffSegment]) -> Vec<RenderedLine> {
    segments.iter().flat_map(render_segment).collect()
}

/// Split one segment into display lines.
///
/// A trailing line break does not produce an extra empty line. Every line
/// carries a break except the last one of a segment whose text is not
/// terminated.
pub fn render_segment(segment: &DiffSegment) -> Vec<RenderedLine> {
    let terminated = segment.is_terminated();
    let mut raw_lines: Vec<&str> = segment.text.split('\n').collect();
    if raw_lines.last() == Some(&"") {
        raw_lines.pop();
    }

    let last = raw_lines.len().saturating_sub(1);
    raw_lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| RenderedLine::new(segment.kind, line, i != last || terminated))
        .collect()
}

/// Rebuild the old document from its segments.
pub fn reconstruct_old(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_old())
        .map(|s| s.text.as_str())
        .collect()
}

/// Rebuild the new document from its segments.
pub fn reconstruct_new(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_new())
        .map(|s| s.text.as_str())
        .collect()
}
