// Items in this module (and submodules) are only used in test code.

mod temp_git_repo;
pub(crate) use temp_git_repo::TempGitRepo;
