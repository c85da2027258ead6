//! Opening git repositories and remembering them for the rest of a session.
//!
//! ## Design Goals
//!
//! Everything that makes a directory a git repository (object database, refs,
//! working tree) belongs to libgit2. What lives here is the bookkeeping around
//! it: a [`RepositoryCache`] that hands out at most one handle per absolute
//! path, and a [`Session`] that owns that cache along with the current
//! directory used to resolve relative paths.

mod cache;
pub use cache::RepositoryCache;

mod error;
pub use error::{Error, Result};

mod handle;
pub use handle::RepositoryHandle;

mod session;
pub use session::Session;

use crate::path::AbsolutePath;

/// A type that implements `Repo` knows how to open a repository at a given
/// absolute path.
///
/// [`RepositoryHandle`] is the libgit2-backed implementation and the one the
/// cache uses unless told otherwise. Opening must either produce a usable
/// handle or fail; the cache never stores a failed open.
pub trait Repo: Sized {
    fn open(path: &AbsolutePath) -> Result<Self>;
}
