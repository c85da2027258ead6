use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise from resolving a
/// repository.
#[derive(Debug, Error)]
pub enum Error {
    /// libgit2 couldn't open the repository. Passed through untouched.
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// A relative path was given but the directory it is relative to isn't
    /// absolute either.
    #[error("can't resolve a relative path against relative directory {}", .0.display())]
    RelativeBaseDir(PathBuf),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for repository cache operations.
pub type Result<T> = std::result::Result<T, Error>;
