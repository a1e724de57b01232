//! Document loading and comparison for linediff
//!
//! Both documents are read and decoded before anything is rendered; a
//! document that could not be loaded never stands in as an empty one.

mod error;
mod selection;
mod source;

pub use error::{CompareError, CompareResult};
pub use selection::CompareSession;
pub use source::{load, load_pair, DocumentSource, LoadOptions, LoadedDocument};

use linediff_render::{
    diff_segments, render_segments, DiffSegment, DiffStats, RenderedLine, SegmentKind,
};

/// The rendered line diff of two loaded documents
#[derive(Debug, Clone)]
pub struct Comparison {
    old: LoadedDocument,
    new: LoadedDocument,
    segments: Vec<DiffSegment>,
    lines: Vec<RenderedLine>,
}

impl Comparison {
    pub fn new(old: LoadedDocument, new: LoadedDocument) -> Self {
        let segments = diff_segments(old.text().as_str(), new.text().as_str());
        let lines = render_segments(&segments);
        Self {
            old,
            new,
            segments,
            lines,
        }
    }

    pub fn old_document(&self) -> &LoadedDocument {
        &self.old
    }

    pub fn new_document(&self) -> &LoadedDocument {
        &self.new
    }

    pub fn segments(&self) -> &[DiffSegment] {
        &self.segments
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_lines(&self.lines)
    }

    pub fn is_identical(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.kind == SegmentKind::Unchanged)
    }
}

/// Load both documents and render their line diff.
pub async fn compare(
    old: &DocumentSource,
    new: &DocumentSource,
    options: &LoadOptions,
) -> CompareResult<Comparison> {
    let (old, new) = load_pair(old, new, options).await?;
    Ok(Comparison::new(old, new))
}
