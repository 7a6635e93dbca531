//! JSON-based association table loader
//!
//! The association tables live in JSON documents whose payload is nested
//! two envelopes deep: `associations.associations.regex` holds the ordered
//! record list.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::fs;

use crate::application::{ApplicationError, AssociationSource};
use crate::generation::{FolderAssociation, IconAssociation};

/// File association table document
pub const ICON_ASSOCIATIONS_FILE: &str = "icon_associations.json";
/// Folder association table document
pub const FOLDER_ASSOCIATIONS_FILE: &str = "folder_associations.json";

#[derive(Debug, Deserialize)]
struct AssociationsDocument<T> {
    associations: AssociationsEnvelope<T>,
}

#[derive(Debug, Deserialize)]
struct AssociationsEnvelope<T> {
    associations: RegexAssociations<T>,
}

#[derive(Debug, Deserialize)]
struct RegexAssociations<T> {
    regex: Vec<T>,
}

/// Loads association tables from JSON documents under a root directory
pub struct JsonAssociationLoader {
    root: PathBuf,
}

impl JsonAssociationLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, ApplicationError> {
        let path = self.root.join(file);
        let raw = fs::read_to_string(&path).await.map_err(|e| {
            ApplicationError::AssociationLoad(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        let document: AssociationsDocument<T> = serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::AssociationLoad(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(document.associations.associations.regex)
    }
}

#[async_trait]
impl AssociationSource for JsonAssociationLoader {
    async fn load_icon_associations(&self) -> Result<Vec<IconAssociation>, ApplicationError> {
        self.load(ICON_ASSOCIATIONS_FILE).await
    }

    async fn load_folder_associations(&self) -> Result<Vec<FolderAssociation>, ApplicationError> {
        self.load(FOLDER_ASSOCIATIONS_FILE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ICON_DOCUMENT: &str = r#"{
        "associations": {
            "associations": {
                "regex": [
                    {
                        "name": "Angular",
                        "pattern": "^(angular[^.]*|ng)\\.json$",
                        "icon": "/angular.svg",
                        "fileNames": "angular.json"
                    },
                    {
                        "name": "Babel",
                        "pattern": "^\\.babelrc$",
                        "icon": "/babel.svg",
                        "fileNames": ".babelrc"
                    }
                ]
            }
        }
    }"#;

    #[tokio::test]
    async fn test_load_icon_associations_preserves_order() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(ICON_ASSOCIATIONS_FILE), ICON_DOCUMENT).unwrap();

        let loader = JsonAssociationLoader::new(dir.path().to_path_buf());
        let associations = loader.load_icon_associations().await.unwrap();

        assert_eq!(associations.len(), 2);
        assert_eq!(associations[0].name, "Angular");
        assert_eq!(associations[1].name, "Babel");
        assert_eq!(associations[1].file_names, ".babelrc");
    }

    #[tokio::test]
    async fn test_load_folder_associations() {
        let dir = tempdir().unwrap();
        let document = r#"{
            "associations": {
                "associations": {
                    "regex": [
                        {
                            "name": "Android",
                            "pattern": "^android$",
                            "icon": "/folder-android.svg",
                            "folderNames": "android"
                        }
                    ]
                }
            }
        }"#;
        std::fs::write(dir.path().join(FOLDER_ASSOCIATIONS_FILE), document).unwrap();

        let loader = JsonAssociationLoader::new(dir.path().to_path_buf());
        let associations = loader.load_folder_associations().await.unwrap();

        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].folder_names, "android");
    }

    #[tokio::test]
    async fn test_missing_document_is_an_error() {
        let dir = tempdir().unwrap();

        let loader = JsonAssociationLoader::new(dir.path().to_path_buf());
        let result = loader.load_icon_associations().await;

        assert!(matches!(
            result,
            Err(ApplicationError::AssociationLoad(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_document_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(ICON_ASSOCIATIONS_FILE),
            r#"{"associations": []}"#,
        )
        .unwrap();

        let loader = JsonAssociationLoader::new(dir.path().to_path_buf());
        let result = loader.load_icon_associations().await;

        match result {
            Err(ApplicationError::AssociationLoad(message)) => {
                assert!(message.contains("Failed to parse"));
            }
            other => panic!("Expected AssociationLoad error, got {other:?}"),
        }
    }
}
