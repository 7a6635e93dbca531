//! Batch synchronization: one commit per changed artifact, at most one push
//! per batch.

use crate::generation::{Artifact, GenerationError, WikiRepo};
use tracing::{debug, info};

/// What a sync pass did, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// How many commits recorded a real change
    pub committed: usize,
    /// Whether the batch was pushed
    pub pushed: bool,
}

/// Commits every artifact in batch order and pushes once if any commit
/// recorded a real change.
///
/// The any-commit flag is a cumulative OR over the sequential loop; every
/// commit result is observed. The push carries the total batch length, not
/// the changed count. An empty batch performs no repository calls. The
/// first commit or push error aborts the remaining sequence; commits
/// already performed stay in the repository.
pub async fn sync_batch(
    repo: &dyn WikiRepo,
    batch: &[Artifact],
) -> Result<SyncReport, GenerationError> {
    let mut report = SyncReport::default();
    if batch.is_empty() {
        debug!("Empty batch, skipping wiki synchronization");
        return Ok(report);
    }

    let mut any_committed = false;
    for artifact in batch {
        let committed = repo.commit_file(&artifact.filename, &artifact.content).await?;
        any_committed |= committed;
        if committed {
            report.committed += 1;
        }
    }

    if any_committed {
        info!(artifacts = batch.len(), "Pushing batch to wiki");
        repo.push(batch.len()).await?;
        report.pushed = true;
    } else {
        info!("No artifact changed, skipping push");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records every repository call and replays scripted commit outcomes
    #[derive(Default)]
    struct ScriptedRepo {
        outcomes: Mutex<VecDeque<Result<bool, String>>>,
        commits: Mutex<Vec<String>>,
        pushes: Mutex<Vec<usize>>,
        push_error: Option<String>,
    }

    impl ScriptedRepo {
        fn with_outcomes(outcomes: Vec<Result<bool, String>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl WikiRepo for ScriptedRepo {
        async fn commit_file(
            &self,
            filename: &str,
            _content: &str,
        ) -> Result<bool, GenerationError> {
            self.commits.lock().unwrap().push(filename.to_string());
            match self.outcomes.lock().unwrap().pop_front() {
                Some(Ok(committed)) => Ok(committed),
                Some(Err(message)) => Err(GenerationError::Sync(message)),
                None => panic!("unexpected commit call for {filename}"),
            }
        }

        async fn push(&self, artifact_count: usize) -> Result<(), GenerationError> {
            self.pushes.lock().unwrap().push(artifact_count);
            match &self.push_error {
                Some(message) => Err(GenerationError::Sync(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn batch_of(filenames: &[&str]) -> Vec<Artifact> {
        filenames
            .iter()
            .map(|filename| Artifact {
                filename: filename.to_string(),
                content: format!("content of {filename}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_single_push_with_total_count_when_any_commit() {
        let repo = ScriptedRepo::with_outcomes(vec![Ok(false), Ok(true), Ok(false)]);
        let batch = batch_of(&["a.kt", "b.kt", "c.kt"]);

        let report = sync_batch(&repo, &batch).await.unwrap();

        assert_eq!(report, SyncReport { committed: 1, pushed: true });
        assert_eq!(*repo.commits.lock().unwrap(), vec!["a.kt", "b.kt", "c.kt"]);
        // Exactly one push, carrying the batch length, not the changed count
        assert_eq!(*repo.pushes.lock().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn test_no_push_when_all_commits_report_no_change() {
        let repo = ScriptedRepo::with_outcomes(vec![Ok(false), Ok(false)]);
        let batch = batch_of(&["a.kt", "b.kt"]);

        let report = sync_batch(&repo, &batch).await.unwrap();

        assert_eq!(report, SyncReport { committed: 0, pushed: false });
        assert!(repo.pushes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_repository_calls() {
        let repo = ScriptedRepo::default();

        let report = sync_batch(&repo, &[]).await.unwrap();

        assert_eq!(report, SyncReport::default());
        assert!(repo.commits.lock().unwrap().is_empty());
        assert!(repo.pushes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_error_aborts_remaining_sequence() {
        let repo = ScriptedRepo::with_outcomes(vec![
            Ok(true),
            Err("refusing to commit".to_string()),
        ]);
        let batch = batch_of(&["a.kt", "b.kt", "c.kt"]);

        let result = sync_batch(&repo, &batch).await;

        assert!(matches!(result, Err(GenerationError::Sync(_))));
        // The third commit never runs, and neither does the push
        assert_eq!(*repo.commits.lock().unwrap(), vec!["a.kt", "b.kt"]);
        assert!(repo.pushes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_push_error_propagates() {
        let mut repo = ScriptedRepo::with_outcomes(vec![Ok(true)]);
        repo.push_error = Some("remote rejected".to_string());
        let batch = batch_of(&["a.kt"]);

        let result = sync_batch(&repo, &batch).await;

        assert!(matches!(result, Err(GenerationError::Sync(_))));
        assert_eq!(*repo.pushes.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_every_commit_result_is_observed() {
        // A later no-change commit must not drop an earlier change
        let repo = ScriptedRepo::with_outcomes(vec![Ok(true), Ok(false)]);
        let batch = batch_of(&["a.kt", "b.kt"]);

        let report = sync_batch(&repo, &batch).await.unwrap();

        assert!(report.pushed);
        assert_eq!(*repo.pushes.lock().unwrap(), vec![2]);
    }
}
