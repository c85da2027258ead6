use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Error, RepositoryCache, RepositoryHandle, Result};
use crate::path::{AbsolutePath, DEFAULT_PATH};

/// The state that `get-repository` carries from one invocation to the next.
///
/// A session owns the current directory that relative paths are resolved
/// against, plus the `REPOSITORIES` cache. The cache is created the first
/// time it's asked for and lives as long as the session does.
#[derive(Debug)]
pub struct Session {
    current_dir: AbsolutePath,
    repositories: Option<RepositoryCache<RepositoryHandle>>,
}

impl Session {
    /// Start a session rooted at `current_dir`, which must be absolute.
    pub fn new<P: Into<PathBuf>>(current_dir: P) -> Result<Session> {
        let current_dir = current_dir.into();
        let current_dir = AbsolutePath::new(current_dir.clone())
            .ok_or(Error::RelativeBaseDir(current_dir))?;

        Ok(Session {
            current_dir,
            repositories: None,
        })
    }

    /// Start a session rooted at the process's working directory.
    pub fn from_env() -> Result<Session> {
        Session::new(env::current_dir()?)
    }

    /// Return the directory relative paths are resolved against.
    pub fn current_dir(&self) -> &Path {
        self.current_dir.as_path()
    }

    /// Move to `dir`. A relative `dir` is taken relative to the current
    /// directory. The directory isn't required to exist.
    pub fn set_current_dir<P: AsRef<Path>>(&mut self, dir: P) {
        // The existing current dir is always absolute, so this can't fail.
        if let Some(dir) = AbsolutePath::resolve(dir, self.current_dir.as_path()) {
            self.current_dir = dir;
        }
    }

    /// Return this session's repository cache, creating it if needed.
    pub fn repositories(&mut self) -> &mut RepositoryCache<RepositoryHandle> {
        self.repositories.get_or_insert_with(|| {
            debug!("creating REPOSITORIES cache");
            RepositoryCache::new()
        })
    }

    /// True once `repositories` (or `get_repository`) has been called.
    pub fn has_repositories(&self) -> bool {
        self.repositories.is_some()
    }

    /// Return the repository at `path`, or at the current directory when
    /// `path` is `None`.
    ///
    /// Repeating a path (in any form that resolves to the same absolute path)
    /// returns the same handle.
    pub fn get_repository(&mut self, path: Option<&Path>) -> Result<&RepositoryHandle> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_PATH));
        let current_dir = self.current_dir.clone();
        self.repositories().resolve(path, current_dir.as_path())
    }
}
