//! Kotlin association map for file icons

use crate::generation::sanitizers::icon_key;
use crate::generation::{AssociationGenerator, IconAssociation, REPO_NAME};
use tracing::debug;

/// Generates `FileIconAssociations.kt` from the file association table
pub struct FilesGenerator {
    files: Vec<IconAssociation>,
    account: String,
}

impl FilesGenerator {
    pub fn new(files: Vec<IconAssociation>, account: impl Into<String>) -> Self {
        Self {
            files,
            account: account.into(),
        }
    }

    fn entry_line(&self, association: &IconAssociation, last: bool) -> String {
        let key = icon_key(&association.name);
        // The final entry closes the mapOf argument list instead of
        // continuing it
        let terminator = if last { "\n" } else { ",\n" };
        format!(
            "    \"{key}\" to loadIcon(\"/{REPO_NAME}/assets/icons/files{icon}\"){terminator}",
            icon = association.icon
        )
    }
}

impl AssociationGenerator for FilesGenerator {
    fn output_file(&self) -> &str {
        "FileIconAssociations.kt"
    }

    fn log_group(&self) -> &'static str {
        "files"
    }

    fn images_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/master/assets",
            self.account, REPO_NAME
        )
    }

    fn create_list(&self) -> String {
        debug!(count = self.files.len(), "Creating file icon associations");

        let mut code = String::from("object FileIconAssociations {\n  val icons = mapOf(\n");
        let last = self.files.len().saturating_sub(1);
        for (index, association) in self.files.iter().enumerate() {
            code.push_str(&self.entry_line(association, index == last));
        }
        code.push_str("  )\n}");
        code
    }
}
