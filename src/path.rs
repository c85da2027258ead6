//! Absolute filesystem paths used as repository cache keys.

use std::{
    borrow::Borrow,
    fmt,
    path::{Path, PathBuf},
};

/// The path used when a caller doesn't name one.
pub const DEFAULT_PATH: &str = ".";

/// A filesystem path that is known to be absolute.
///
/// No normalization is performed beyond what `Path::join` does. Symlinks are
/// not resolved and `..` components are kept. Equality and hashing follow
/// `Path`, which compares by component, so `/repo` and `/repo/.` are the
/// same key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AbsolutePath(PathBuf);

impl AbsolutePath {
    /// Wrap `path` if it is absolute. Returns `None` otherwise.
    pub fn new<P: Into<PathBuf>>(path: P) -> Option<AbsolutePath> {
        let path = path.into();
        if path.is_absolute() {
            Some(AbsolutePath(path))
        } else {
            None
        }
    }

    /// Resolve `path` against `base`.
    ///
    /// An absolute `path` is taken as-is and `base` is ignored. A relative
    /// `path` is joined onto `base`, which must itself be absolute for the
    /// result to be. Returns `None` when that isn't the case.
    pub fn resolve<P: AsRef<Path>>(path: P, base: &Path) -> Option<AbsolutePath> {
        let path = path.as_ref();
        if path.is_absolute() {
            Some(AbsolutePath(path.to_path_buf()))
        } else {
            AbsolutePath::new(base.join(path))
        }
    }

    /// Return the wrapped path.
    pub fn as_path(&self) -> &Path {
        self.0.as_path()
    }

    /// Unwrap into the inner `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

// Lets the cache be queried with a plain `&Path`.
impl Borrow<Path> for AbsolutePath {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.display(), f)
    }
}
