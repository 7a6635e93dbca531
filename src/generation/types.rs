//! Core types for the generation domain

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// One file association: which icon applies to which file naming rule.
///
/// Records are sourced from the association tables and keep their insertion
/// order, which determines line order in generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconAssociation {
    pub name: String,
    pub pattern: String,
    pub icon: String,
    #[serde(rename = "fileNames")]
    pub file_names: String,
}

/// One folder association: which icon applies to which folder naming rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderAssociation {
    pub name: String,
    pub pattern: String,
    pub icon: String,
    #[serde(rename = "folderNames")]
    pub folder_names: String,
}

/// A generated output file: relative filename plus the complete new body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
}

/// Which association kinds a run generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Files,
    Folders,
}

impl Scope {
    pub fn includes_files(&self) -> bool {
        matches!(self, Scope::All | Scope::Files)
    }

    pub fn includes_folders(&self) -> bool {
        matches!(self, Scope::All | Scope::Folders)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::Files => write!(f, "files"),
            Scope::Folders => write!(f, "folders"),
        }
    }
}

impl FromStr for Scope {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Scope::All),
            "files" => Ok(Scope::Files),
            "folders" => Ok(Scope::Folders),
            _ => Err(crate::generation::GenerationError::InvalidScope(
                s.to_string(),
            )),
        }
    }
}

/// Where artifacts are written and where the template comes from.
///
/// `Repo` writes into a previously-prepared wiki working copy and reads the
/// template from it; `Local` writes next to the running binary and fetches
/// the template over HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Local,
    Repo,
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Local => write!(f, "local"),
            OutputTarget::Repo => write!(f, "repo"),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(OutputTarget::Local),
            "repo" => Ok(OutputTarget::Repo),
            _ => Err(crate::generation::GenerationError::InvalidOutputTarget(
                s.to_string(),
            )),
        }
    }
}
