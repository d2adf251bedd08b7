use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail between input enumeration and the final fold.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing configuration key {key:?}")]
    MissingConfig { key: String },

    #[error("failed to list input directory {}", dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no inputs to process")]
    EmptyInput,

    #[error("map task did not run to completion")]
    Join(#[from] tokio::task::JoinError),

    #[error("worker finished without a result")]
    NoResult,
}
