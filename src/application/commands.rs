//! Data Transfer Objects for the application layer

use std::path::PathBuf;

use crate::generation::{Artifact, OutputTarget, Scope, SyncReport};

/// Request to generate the Kotlin association artifacts
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub scope: Scope,
    pub account: String,
    pub output: OutputTarget,
    pub associations_dir: PathBuf,
    pub wiki_dir: Option<PathBuf>,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), crate::application::ValidationError> {
        if self.account.is_empty() {
            return Err(crate::application::ValidationError::EmptyAccount);
        }

        if !self
            .account
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-')
        {
            return Err(crate::application::ValidationError::InvalidAccount(
                self.account.clone(),
            ));
        }

        if self.output == OutputTarget::Repo && self.wiki_dir.is_none() {
            return Err(crate::application::ValidationError::MissingField(
                "wiki-dir is required when output is 'repo'".to_string(),
            ));
        }

        Ok(())
    }
}

/// Response from one generation run
#[derive(Debug)]
pub struct GenerateResponse {
    /// Artifacts produced in batch order
    pub artifacts: Vec<Artifact>,
    /// Sync outcome; `None` when no collaborator was configured
    pub sync: Option<SyncReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            scope: Scope::All,
            account: "octocat".to_string(),
            output: OutputTarget::Local,
            associations_dir: PathBuf::from("associations"),
            wiki_dir: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_empty_account_is_rejected() {
        let mut invalid = request();
        invalid.account = "".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_account_with_path_characters_is_rejected() {
        let mut invalid = request();
        invalid.account = "octo/cat".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_repo_output_requires_wiki_dir() {
        let mut invalid = request();
        invalid.output = OutputTarget::Repo;
        assert!(invalid.validate().is_err());

        invalid.wiki_dir = Some(PathBuf::from("/tmp/wiki"));
        assert!(invalid.validate().is_ok());
    }
}
