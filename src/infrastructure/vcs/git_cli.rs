//! Wiki repository collaborator backed by the `git` CLI
//!
//! Operates on a previously-prepared working copy; cloning and repository
//! discovery are the caller's concern. Each commit writes the full new file
//! content, stages it, and commits only when git reports staged changes,
//! so no-op writes never produce empty commits.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info};

use crate::generation::{GenerationError, WikiRepo};

const COMMIT_MESSAGE: &str = "Update icon associations";
const WIKI_BRANCH: &str = "master";

/// Result of one git invocation
#[derive(Debug, Clone)]
struct GitResult {
    exit_code: i32,
    stderr: String,
}

impl GitResult {
    fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// `WikiRepo` implementation shelling out to `git`
pub struct GitCliWikiRepo {
    working_copy: PathBuf,
}

impl GitCliWikiRepo {
    pub fn new(working_copy: PathBuf) -> Self {
        Self { working_copy }
    }

    async fn run_git(&self, args: &[&str]) -> Result<GitResult, GenerationError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.working_copy)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                GenerationError::Sync(format!("Failed to run git {}: {}", args.join(" "), e))
            })?;

        Ok(GitResult {
            exit_code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[async_trait]
impl WikiRepo for GitCliWikiRepo {
    async fn commit_file(&self, filename: &str, content: &str) -> Result<bool, GenerationError> {
        // The commit carries the full new file body, never a partial write
        let path = self.working_copy.join(filename);
        fs::write(&path, content).await.map_err(|e| {
            GenerationError::Sync(format!(
                "Failed to write {} into the wiki working copy: {}",
                filename, e
            ))
        })?;

        let add = self.run_git(&["add", "--", filename]).await?;
        if !add.is_success() {
            return Err(GenerationError::Sync(format!(
                "git add {} failed: {}",
                filename,
                add.stderr.trim()
            )));
        }

        let diff = self
            .run_git(&["diff", "--cached", "--quiet", "--", filename])
            .await?;
        match diff.exit_code {
            // Nothing staged: the artifact is identical to what the wiki
            // already holds
            0 => {
                debug!(file = filename, "Artifact unchanged, skipping commit");
                Ok(false)
            }
            1 => {
                let commit = self
                    .run_git(&["commit", "-m", COMMIT_MESSAGE, "--", filename])
                    .await?;
                if !commit.is_success() {
                    return Err(GenerationError::Sync(format!(
                        "git commit of {} failed: {}",
                        filename,
                        commit.stderr.trim()
                    )));
                }
                info!(file = filename, "Committed artifact to wiki working copy");
                Ok(true)
            }
            code => Err(GenerationError::Sync(format!(
                "git diff for {} exited with {}: {}",
                filename,
                code,
                diff.stderr.trim()
            ))),
        }
    }

    async fn push(&self, artifact_count: usize) -> Result<(), GenerationError> {
        info!(artifacts = artifact_count, "Pushing wiki working copy");

        let push = self.run_git(&["push", "origin", WIKI_BRANCH]).await?;
        if !push.is_success() {
            return Err(GenerationError::Sync(format!(
                "git push failed: {}",
                push.stderr.trim()
            )));
        }

        Ok(())
    }
}
