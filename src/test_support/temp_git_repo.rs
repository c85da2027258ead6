use std::path::{Path, PathBuf};

use git2::Repository;

/// A `TempGitRepo` creates a temporary, empty repo using libgit2.
/// The directory is deleted when the struct is dropped.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub(crate) struct TempGitRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    // Create a new repo with a working directory.
    pub fn new() -> TempGitRepo {
        TempGitRepo::create(false)
    }

    // Create a new bare repo.
    pub fn new_bare() -> TempGitRepo {
        TempGitRepo::create(true)
    }

    fn create(bare: bool) -> TempGitRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("repo");

        if bare {
            Repository::init_bare(&path).unwrap();
        } else {
            Repository::init(&path).unwrap();
        }

        TempGitRepo { tempdir, path }
    }

    // Return the path for this repo's root (working directory, or the
    // repo itself if bare).
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::TempGitRepo;

    #[test]
    fn temp_path() {
        let path = {
            let r = TempGitRepo::new();
            let path = r.path().to_path_buf();

            let git_dir = path.join(".git");
            assert_eq!(git_dir.is_dir(), true);

            path
        };

        assert_eq!(path.as_path().is_dir(), false);
    }

    #[test]
    fn bare() {
        let r = TempGitRepo::new_bare();
        assert_eq!(r.path().join(".git").is_dir(), false);
        assert_eq!(r.path().join("HEAD").is_file(), true);
    }
}
