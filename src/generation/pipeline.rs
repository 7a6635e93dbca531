//! The shared generate contract: build the list fragment, fetch the base
//! template, substitute the placeholder, persist and return the artifact.
//!
//! Each step is strictly ordered; no step starts before the previous one
//! completes, and any failure aborts the generator's contribution to the
//! batch.

use crate::generation::{
    Artifact, ArtifactWriter, AssociationGenerator, GenerationError, TemplateSource,
};
use regex::{NoExpand, Regex};
use std::sync::Arc;
use tracing::{debug, info};

/// The single reserved marker replaced with generated content. Recognized
/// via exact, case-sensitive textual match; expected at most once per
/// template.
pub const PLACEHOLDER: &str = "// Placeholder";

/// Replaces every occurrence of the placeholder marker with the fragment.
///
/// A template without the marker is returned unchanged; every other
/// character stays byte-identical.
pub fn substitute(template: &str, fragment: &str) -> Result<String, GenerationError> {
    let marker = Regex::new(&regex::escape(PLACEHOLDER))?;
    Ok(marker.replace_all(template, NoExpand(fragment)).into_owned())
}

/// Runs one generator through the fetch → substitute → write sequence
pub struct GeneratorPipeline {
    template_source: Arc<dyn TemplateSource>,
    writer: Arc<dyn ArtifactWriter>,
}

impl GeneratorPipeline {
    pub fn new(template_source: Arc<dyn TemplateSource>, writer: Arc<dyn ArtifactWriter>) -> Self {
        Self {
            template_source,
            writer,
        }
    }

    /// Produce this generator's artifact and persist it locally
    pub async fn generate(
        &self,
        generator: &dyn AssociationGenerator,
    ) -> Result<Artifact, GenerationError> {
        debug!(
            group = generator.log_group(),
            images_url = %generator.images_url(),
            "Building association list"
        );
        let fragment = generator.create_list();

        info!(
            group = generator.log_group(),
            source = %self.template_source.describe(),
            "Fetching association template"
        );
        let template = self.template_source.fetch().await?;

        let content = substitute(&template, &fragment)?;

        let artifact = Artifact {
            filename: generator.output_file().to_string(),
            content,
        };
        self.writer.write(&artifact).await?;

        Ok(artifact)
    }
}
