use std::{
    collections::{hash_map::Entry, HashMap},
    path::Path,
};

use tracing::{debug, info, warn};

use super::{Error, Repo, RepositoryHandle, Result};
use crate::path::{AbsolutePath, DEFAULT_PATH};

/// Maps absolute paths to open repositories.
///
/// Each path is opened at most once; every later lookup of the same absolute
/// path returns the handle that was stored the first time. Handles are boxed
/// so a handle's address doesn't change as the map grows.
///
/// Nothing is ever evicted or revalidated. A cached handle stays in the cache
/// (and stays open) until the cache itself is dropped, even if the repository
/// on disk is moved or deleted in the meantime.
#[derive(Debug)]
pub struct RepositoryCache<R = RepositoryHandle> {
    repos: HashMap<AbsolutePath, Box<R>>,
}

impl<R: Repo> RepositoryCache<R> {
    /// Create an empty cache.
    pub fn new() -> Self {
        RepositoryCache {
            repos: HashMap::new(),
        }
    }

    /// Return the repository at `path`, opening it if this cache hasn't seen
    /// that path before.
    ///
    /// A relative `path` is joined onto `current_dir`. If opening fails the
    /// error is returned and nothing is added to the cache.
    pub fn resolve<P: AsRef<Path>>(&mut self, path: P, current_dir: &Path) -> Result<&R> {
        let path = AbsolutePath::resolve(path, current_dir)
            .ok_or_else(|| Error::RelativeBaseDir(current_dir.to_path_buf()))?;

        match self.repos.entry(path) {
            Entry::Occupied(entry) => {
                debug!(path = %entry.key(), "repository cache hit");
                let repo: &R = entry.into_mut();
                Ok(repo)
            }
            Entry::Vacant(entry) => {
                let repo = R::open(entry.key()).map_err(|err| {
                    warn!(path = %entry.key(), error = %err, "unable to open repository");
                    err
                })?;

                info!(path = %entry.key(), "opened repository");
                let repo: &R = entry.insert(Box::new(repo));
                Ok(repo)
            }
        }
    }

    /// Same as `resolve` with the default path (`.`): the repository at
    /// `current_dir` itself.
    pub fn resolve_default(&mut self, current_dir: &Path) -> Result<&R> {
        self.resolve(DEFAULT_PATH, current_dir)
    }
}

impl<R> RepositoryCache<R> {
    /// Return the cached repository for an absolute `path` without opening
    /// anything.
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&R> {
        self.repos.get(path.as_ref()).map(|repo| &**repo)
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.repos.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Iterate over the cached paths in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &AbsolutePath> {
        self.repos.keys()
    }
}

impl<R: Repo> Default for RepositoryCache<R> {
    fn default() -> Self {
        RepositoryCache::new()
    }
}
