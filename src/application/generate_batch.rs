//! Use case for generating and synchronizing one artifact batch

use crate::application::{
    ApplicationError, AssociationSource, GenerateRequest, GenerateResponse,
};
use crate::generation::{
    Artifact, GeneratorPipeline, WikiRepo, generators, sync_batch,
};
use std::sync::Arc;
use tracing::info;

/// Runs the selected generators strictly in sequence, aggregates their
/// artifacts into one batch, and feeds the batch to the wiki collaborator
/// when one is configured.
///
/// Generation never overlaps: the push decision needs the complete, final
/// content of every artifact in the batch.
pub struct GenerateBatchUseCase {
    association_source: Arc<dyn AssociationSource>,
    pipeline: Arc<GeneratorPipeline>,
    wiki_repo: Option<Arc<dyn WikiRepo>>,
}

impl GenerateBatchUseCase {
    pub fn new(
        association_source: Arc<dyn AssociationSource>,
        pipeline: Arc<GeneratorPipeline>,
        wiki_repo: Option<Arc<dyn WikiRepo>>,
    ) -> Self {
        Self {
            association_source,
            pipeline,
            wiki_repo,
        }
    }

    pub async fn execute(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ApplicationError> {
        request.validate()?;

        info!(scope = %request.scope, "Running generate command");

        // Only the tables the scope needs are loaded
        let files = if request.scope.includes_files() {
            self.association_source.load_icon_associations().await?
        } else {
            Vec::new()
        };
        let folders = if request.scope.includes_folders() {
            self.association_source.load_folder_associations().await?
        } else {
            Vec::new()
        };

        let selected = generators::for_scope(request.scope, &request.account, files, folders);

        let mut batch: Vec<Artifact> = Vec::with_capacity(selected.len());
        for generator in &selected {
            let artifact = self.pipeline.generate(generator.as_ref()).await?;
            batch.push(artifact);
        }

        let sync = match &self.wiki_repo {
            Some(repo) => Some(sync_batch(repo.as_ref(), &batch).await?),
            None => None,
        };

        Ok(GenerateResponse {
            artifacts: batch,
            sync,
        })
    }
}
