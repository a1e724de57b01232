//! Two-step "select, then compare with" flow

use crate::error::{CompareError, CompareResult};
use crate::source::{DocumentSource, LoadOptions};
use crate::{compare, Comparison};
use tracing::debug;

/// Holds the document picked first while the user chooses the second one.
///
/// The selection is dropped on [`clear`](Self::clear), when a comparison
/// is attempted, or together with the session.
#[derive(Debug, Default)]
pub struct CompareSession {
    selected: Option<DocumentSource>,
    options: LoadOptions,
}

impl CompareSession {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            selected: None,
            options,
        }
    }

    /// Remember `source` as the old side, replacing any earlier selection.
    pub fn select(&mut self, source: DocumentSource) {
        debug!(source = %source, "selected document for comparison");
        self.selected = Some(source);
    }

    pub fn selected(&self) -> Option<&DocumentSource> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        if let Some(source) = self.selected.take() {
            debug!(source = %source, "cleared comparison selection");
        }
    }

    /// Compare the selected document with `other`.
    ///
    /// The selection is consumed whether or not loading succeeds.
    pub async fn compare_with(&mut self, other: &DocumentSource) -> CompareResult<Comparison> {
        let selected = self.selected.take().ok_or(CompareError::NothingSelected)?;
        compare(&selected, other, &self.options).await
    }
}
