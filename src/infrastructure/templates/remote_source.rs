//! Template source fetching the hosted wiki page over HTTPS

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::generation::{GenerationError, REPO_NAME, TemplateSource};
use crate::infrastructure::templates::TEMPLATE_PAGE;

/// Fetches the template page from the hosted wiki of the account's
/// repository.
///
/// A single attempt per fetch, and deliberately no client timeout: a hung
/// connection blocks the run rather than producing a partial batch.
pub struct RemoteTemplateSource {
    url: Url,
    client: Client,
}

impl RemoteTemplateSource {
    pub fn new(account: &str) -> Result<Self, GenerationError> {
        let url = Url::parse(&format!(
            "https://raw.githubusercontent.com/wiki/{account}/{REPO_NAME}/{TEMPLATE_PAGE}"
        ))
        .map_err(|e| {
            GenerationError::TemplateFetch(format!(
                "Invalid wiki template URL for account '{account}': {e}"
            ))
        })?;
        Ok(Self::with_url(url))
    }

    /// Point the source at an explicit URL. Used by tests against a mock
    /// server; production code goes through [`RemoteTemplateSource::new`].
    pub fn with_url(url: Url) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self { url, client }
    }
}

#[async_trait]
impl TemplateSource for RemoteTemplateSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String, GenerationError> {
        let response = self.client.get(self.url.clone()).send().await.map_err(|e| {
            GenerationError::TemplateFetch(format!(
                "Failed to request wiki page {}: {}",
                self.url, e
            ))
        })?;

        // A well-formed error page is not a valid template
        let status = response.status();
        if status != StatusCode::OK {
            return Err(GenerationError::TemplateFetch(format!(
                "HTTP {} when fetching {}",
                status, self.url
            )));
        }

        response.text().await.map_err(|e| {
            GenerationError::TemplateFetch(format!(
                "Failed to read wiki page body from {}: {}",
                self.url, e
            ))
        })
    }
}
