//! Port interfaces for the application layer

use async_trait::async_trait;

use crate::application::ApplicationError;
use crate::generation::{FolderAssociation, IconAssociation};

/// Source of the declarative association tables
#[async_trait]
pub trait AssociationSource: Send + Sync {
    /// Load the file association table, in its declared order
    async fn load_icon_associations(&self) -> Result<Vec<IconAssociation>, ApplicationError>;

    /// Load the folder association table, in its declared order
    async fn load_folder_associations(&self) -> Result<Vec<FolderAssociation>, ApplicationError>;
}
