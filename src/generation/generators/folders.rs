//! Kotlin association map for folder icons

use crate::generation::sanitizers::icon_key;
use crate::generation::{AssociationGenerator, FolderAssociation, REPO_NAME};
use tracing::debug;

/// Generates `FolderIconAssociations.kt` from the folder association table
pub struct FoldersGenerator {
    folders: Vec<FolderAssociation>,
    account: String,
}

impl FoldersGenerator {
    pub fn new(folders: Vec<FolderAssociation>, account: impl Into<String>) -> Self {
        Self {
            folders,
            account: account.into(),
        }
    }

    fn entry_line(&self, association: &FolderAssociation, last: bool) -> String {
        let key = icon_key(&association.name);
        let terminator = if last { "\n" } else { ",\n" };
        format!(
            "    \"{key}\" to loadIcon(\"/{REPO_NAME}/assets/icons/folders{icon}\"){terminator}",
            icon = association.icon
        )
    }
}

impl AssociationGenerator for FoldersGenerator {
    fn output_file(&self) -> &str {
        "FolderIconAssociations.kt"
    }

    fn log_group(&self) -> &'static str {
        "folders"
    }

    fn images_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/master/assets",
            self.account, REPO_NAME
        )
    }

    fn create_list(&self) -> String {
        debug!(
            count = self.folders.len(),
            "Creating folder icon associations"
        );

        let mut code = String::from("object FolderIconAssociations {\n  val icons = mapOf(\n");
        let last = self.folders.len().saturating_sub(1);
        for (index, association) in self.folders.iter().enumerate() {
            code.push_str(&self.entry_line(association, index == last));
        }
        code.push_str("  )\n}");
        code
    }
}
