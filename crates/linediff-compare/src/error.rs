use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{name} is not valid UTF-8 (first invalid byte at offset {offset})")]
    NotUtf8 { name: String, offset: usize },

    #[error("{name} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("Standard input can only be used for one side of a comparison")]
    StdinTwice,

    #[error("No document selected for comparison")]
    NothingSelected,
}

pub type CompareResult<T> = Result<T, CompareError>;
