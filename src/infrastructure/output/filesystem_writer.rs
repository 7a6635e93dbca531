//! Filesystem-based artifact writer

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::generation::utils::unix_join;
use crate::generation::{Artifact, ArtifactWriter, GenerationError};

/// Writes artifacts under a base directory decided by the sync mode: the
/// wiki working copy root, or the running binary's own directory.
pub struct FileSystemArtifactWriter {
    base_dir: PathBuf,
}

impl FileSystemArtifactWriter {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }
}

#[async_trait]
impl ArtifactWriter for FileSystemArtifactWriter {
    async fn write(&self, artifact: &Artifact) -> Result<(), GenerationError> {
        let path = self.base_dir.join(&artifact.filename);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&path).await?;
        file.write_all(artifact.content.as_bytes()).await?;
        file.flush().await?;

        info!(
            path = %unix_join(&self.base_dir, &artifact.filename),
            "Wrote artifact"
        );
        Ok(())
    }
}
