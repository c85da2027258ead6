//! Victor keeps a session-scoped cache of open git repositories.
//!
//! The repositories themselves are opened and managed by libgit2 (via the
//! `git2` crate). This crate only decides _which_ handle a caller gets for a
//! given path: paths are made absolute against a current directory and each
//! absolute path is opened at most once per session.

#![deny(warnings)]

pub mod path;
pub mod repo;

#[cfg(test)]
pub(crate) mod test_support;
