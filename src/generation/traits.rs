//! Port interfaces for the generation domain

use crate::generation::{Artifact, GenerationError};
use async_trait::async_trait;

/// One generator kind: knows how to render its association list and where
/// the result goes. The shared generate contract lives in
/// [`crate::generation::GeneratorPipeline`].
pub trait AssociationGenerator: Send + Sync {
    /// Relative filename of the generated artifact
    fn output_file(&self) -> &str;

    /// Tag used to group log output per kind
    fn log_group(&self) -> &'static str;

    /// Base URL for this kind's icon preview images
    fn images_url(&self) -> String;

    /// Render the association list fragment injected into the template
    fn create_list(&self) -> String;
}

/// Source of the base template, one complete text payload per fetch
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Human-readable location of the template, for log output
    fn describe(&self) -> String;

    /// Fetch the whole template. A single attempt; failures are fatal to
    /// the batch, never retried here.
    async fn fetch(&self) -> Result<String, GenerationError>;
}

/// Persists a generated artifact to local storage
#[async_trait]
pub trait ArtifactWriter: Send + Sync {
    async fn write(&self, artifact: &Artifact) -> Result<(), GenerationError>;
}

/// Version-control collaborator that durably persists and publishes
/// artifacts. Repository clone/open mechanics live behind this boundary.
#[async_trait]
pub trait WikiRepo: Send + Sync {
    /// Commit one artifact. Returns whether the commit recorded a real
    /// change (an identical file is skipped and reports `false`).
    async fn commit_file(&self, filename: &str, content: &str) -> Result<bool, GenerationError>;

    /// Publish all commits of the batch. Called at most once per batch,
    /// with the total artifact count.
    async fn push(&self, artifact_count: usize) -> Result<(), GenerationError>;
}
