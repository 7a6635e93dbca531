//! Template source reading from a prepared wiki working copy

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::generation::utils::unix_join;
use crate::generation::{GenerationError, TemplateSource};
use crate::infrastructure::templates::TEMPLATE_PAGE;

/// Reads the template page from the wiki working copy root
pub struct LocalTemplateSource {
    wiki_dir: PathBuf,
}

impl LocalTemplateSource {
    pub fn new(wiki_dir: PathBuf) -> Self {
        Self { wiki_dir }
    }
}

#[async_trait]
impl TemplateSource for LocalTemplateSource {
    fn describe(&self) -> String {
        unix_join(&self.wiki_dir, TEMPLATE_PAGE)
    }

    async fn fetch(&self) -> Result<String, GenerationError> {
        let path = self.wiki_dir.join(TEMPLATE_PAGE);
        fs::read_to_string(&path).await.map_err(|e| {
            GenerationError::TemplateFetch(format!(
                "Failed to read template page {}: {}",
                unix_join(&self.wiki_dir, TEMPLATE_PAGE),
                e
            ))
        })
    }
}
