use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

// A directory holding one freshly initialized repo named `repo`.
// Everything is deleted when the returned TempDir is dropped.
pub fn temp_repo() -> (TempDir, PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("repo");
    git2::Repository::init(&path).unwrap();
    (tempdir, path)
}

// A `victor get-repository` command running in `cwd`, with environment
// overrides cleared so results don't depend on the caller's shell.
pub fn get_repository(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("victor").unwrap();
    cmd.current_dir(cwd)
        .env_remove("VICTOR_DIR")
        .env_remove("VICTOR_LOG")
        .arg("get-repository");
    cmd
}
