//! Document sources and loading

use crate::error::{CompareError, CompareResult};
use linediff_core::LoadConfig;
use linediff_render::DocumentText;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Where a document's content comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentSource {
    Path(PathBuf),
    Stdin,
}

impl DocumentSource {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            DocumentSource::Stdin
        } else {
            DocumentSource::Path(PathBuf::from(arg))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, DocumentSource::Stdin)
    }

    /// Name used in messages
    pub fn name(&self) -> String {
        match self {
            DocumentSource::Path(path) => path.display().to_string(),
            DocumentSource::Stdin => "<stdin>".to_string(),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        DocumentSource::Path(path.to_path_buf())
    }
}

/// Limits applied while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Largest accepted document in bytes, `None` for no limit
    pub max_bytes: Option<u64>,
}

impl From<&LoadConfig> for LoadOptions {
    fn from(config: &LoadConfig) -> Self {
        Self {
            max_bytes: config.limit(),
        }
    }
}

/// A document whose content was read and decoded successfully.
///
/// An empty document is a loaded document with empty text; there is no
/// "not yet loaded" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    source: DocumentSource,
    text: DocumentText,
}

impl LoadedDocument {
    /// Only [`load`] hands these out; callers cannot make one from thin air.
    pub(crate) fn new(source: DocumentSource, text: DocumentText) -> Self {
        Self { source, text }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn text(&self) -> &DocumentText {
        &self.text
    }
}

/// Read and decode one document.
pub async fn load(source: &DocumentSource, options: &LoadOptions) -> CompareResult<LoadedDocument> {
    let name = source.name();
    let bytes = match source {
        DocumentSource::Path(path) => read_path(path, options).await?,
        DocumentSource::Stdin => {
            read_limited(tokio::io::stdin(), &name, options, CompareError::Stdin).await?
        }
    };

    debug!(source = %name, bytes = bytes.len(), "loaded document");
    let text = decode(&name, bytes)?;
    Ok(LoadedDocument::new(source.clone(), text))
}

/// Load both sides of a comparison concurrently.
///
/// Fails as a whole if either side fails.
pub async fn load_pair(
    old: &DocumentSource,
    new: &DocumentSource,
    options: &LoadOptions,
) -> CompareResult<(LoadedDocument, LoadedDocument)> {
    if old.is_stdin() && new.is_stdin() {
        return Err(CompareError::StdinTwice);
    }
    tokio::try_join!(load(old, options), load(new, options))
}

async fn read_path(path: &Path, options: &LoadOptions) -> CompareResult<Vec<u8>> {
    let read_error = |source: io::Error| CompareError::Read {
        path: path.to_path_buf(),
        source,
    };

    if let Some(limit) = options.max_bytes {
        let size = tokio::fs::metadata(path).await.map_err(read_error)?.len();
        check_size(&path.display().to_string(), size, limit)?;
    }

    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    read_limited(file, &path.display().to_string(), options, read_error).await
}

/// Read to the end, stopping one byte past the limit so oversized input is
/// detected without buffering all of it.
pub(crate) async fn read_limited<R, F>(
    mut reader: R,
    name: &str,
    options: &LoadOptions,
    on_error: F,
) -> CompareResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
    F: Fn(io::Error) -> CompareError,
{
    let mut buf = Vec::new();
    match options.max_bytes {
        Some(limit) => {
            (&mut reader)
                .take(limit.saturating_add(1))
                .read_to_end(&mut buf)
                .await
                .map_err(on_error)?;
            check_size(name, buf.len() as u64, limit)?;
        }
        None => {
            reader.read_to_end(&mut buf).await.map_err(on_error)?;
        }
    }
    Ok(buf)
}

fn check_size(name: &str, size: u64, limit: u64) -> CompareResult<()> {
    if size > limit {
        return Err(CompareError::TooLarge {
            name: name.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}

/// Strict UTF-8 decoding; invalid input is an error, never replaced.
pub(crate) fn decode(name: &str, bytes: Vec<u8>) -> CompareResult<DocumentText> {
    String::from_utf8(bytes)
        .map(DocumentText::from)
        .map_err(|e| CompareError::NotUtf8 {
            name: name.to_string(),
            offset: e.utf8_error().valid_up_to(),
        })
}
