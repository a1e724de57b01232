//! Type definitions for line diff rendering

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Full content of one document at comparison time.
///
/// Cheap to clone; the text itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentText(Arc<str>);

impl DocumentText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lines, counting an unterminated last line.
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Classification of a run of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Unchanged => "unchanged",
            SegmentKind::Added => "added",
            SegmentKind::Removed => "removed",
        }
    }

    /// Prefix printed in front of every line of this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            SegmentKind::Unchanged => "  ",
            SegmentKind::Added => "+ ",
            SegmentKind::Removed => "- ",
        }
    }

    /// Whether lines of this kind belong to the old document
    pub fn in_old(&self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Removed)
    }

    /// Whether lines of this kind belong to the new document
    pub fn in_new(&self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Added)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<similar::ChangeTag> for SegmentKind {
    fn from(tag: similar::ChangeTag) -> Self {
        match tag {
            similar::ChangeTag::Equal => SegmentKind::Unchanged,
            similar::ChangeTag::Insert => SegmentKind::Added,
            similar::ChangeTag::Delete => SegmentKind::Removed,
        }
    }
}

/// A maximal run of lines sharing one classification.
///
/// `text` keeps the original line terminators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whether the segment text ends in a line break
    pub fn is_terminated(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// One display-ready line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub kind: SegmentKind,
    pub prefix: &'static str,
    /// Line content without prefix or terminator
    pub content: String,
    /// Whether a line break follows this line
    pub line_break: bool,
}

impl RenderedLine {
    pub fn new(kind: SegmentKind, content: impl Into<String>, line_break: bool) -> Self {
        Self {
            kind,
            prefix: kind.prefix(),
            content: content.into(),
            line_break,
        }
    }

    /// Literal display text, `prefix + content`, without the line break
    pub fn display_text(&self) -> String {
        format!("{}{}", self.prefix, self.content)
    }
}
