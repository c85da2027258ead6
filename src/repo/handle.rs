use std::{fmt, path::Path};

use git2::Repository;

use super::{Repo, Result};
use crate::path::AbsolutePath;

/// An open git repository along with the path it was opened from.
///
/// The path is exactly the cache key the handle was created for, which may
/// differ from what libgit2 reports as the working directory (for example when
/// it was opened through a `..` component or through the `.git` directory
/// itself).
pub struct RepositoryHandle {
    path: AbsolutePath,
    repo: Repository,
}

impl RepositoryHandle {
    /// Open the existing repository at `path`.
    ///
    /// `path` must be a working directory containing `.git`, a `.git`
    /// directory, or a bare repository. Parent directories are not searched.
    /// Any failure is libgit2's error, unchanged.
    pub fn open(path: &AbsolutePath) -> Result<RepositoryHandle> {
        let repo = Repository::open(path.as_path())?;
        Ok(RepositoryHandle {
            path: path.clone(),
            repo,
        })
    }

    /// Return the path this handle was opened from.
    pub fn path(&self) -> &AbsolutePath {
        &self.path
    }

    /// Return the path to the `.git` directory (or the repository itself, if
    /// bare).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Return the working directory, or `None` for a bare repository.
    pub fn work_dir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Borrow the underlying libgit2 repository.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }
}

impl Repo for RepositoryHandle {
    fn open(path: &AbsolutePath) -> Result<Self> {
        RepositoryHandle::open(path)
    }
}

// git2::Repository has no Debug impl.
impl fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryHandle")
            .field("path", &self.path)
            .field("git_dir", &self.git_dir())
            .finish()
    }
}
