use std::path::PathBuf;

use thiserror::Error;

pub type FdResult<T> = Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the root of the file name is needed")]
    Argument,
    #[error("Unable to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
