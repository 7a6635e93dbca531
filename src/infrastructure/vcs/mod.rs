//! Version-control collaborator adapters

pub mod git_cli;

pub use git_cli::GitCliWikiRepo;
