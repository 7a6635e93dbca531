//! Concrete generator kinds, one per artifact

pub mod files;
pub mod folders;

pub use files::FilesGenerator;
pub use folders::FoldersGenerator;

use crate::generation::{
    AssociationGenerator, FolderAssociation, IconAssociation, Scope,
};

/// Selects the generators a scope runs, in their declared batch order:
/// files first, then folders.
pub fn for_scope(
    scope: Scope,
    account: &str,
    files: Vec<IconAssociation>,
    folders: Vec<FolderAssociation>,
) -> Vec<Box<dyn AssociationGenerator>> {
    match scope {
        Scope::All => vec![
            Box::new(FilesGenerator::new(files, account)),
            Box::new(FoldersGenerator::new(folders, account)),
        ],
        Scope::Files => vec![Box::new(FilesGenerator::new(files, account))],
        Scope::Folders => vec![Box::new(FoldersGenerator::new(folders, account))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_scope_all_runs_files_then_folders() {
        let generators = for_scope(Scope::All, "octocat", vec![], vec![]);

        let outputs: Vec<&str> = generators.iter().map(|g| g.output_file()).collect();
        assert_eq!(
            outputs,
            vec!["FileIconAssociations.kt", "FolderIconAssociations.kt"]
        );
    }

    #[test]
    fn test_for_scope_subset() {
        let files_only = for_scope(Scope::Files, "octocat", vec![], vec![]);
        assert_eq!(files_only.len(), 1);
        assert_eq!(files_only[0].output_file(), "FileIconAssociations.kt");

        let folders_only = for_scope(Scope::Folders, "octocat", vec![], vec![]);
        assert_eq!(folders_only.len(), 1);
        assert_eq!(folders_only[0].output_file(), "FolderIconAssociations.kt");
    }
}
