//! Path utilities for the generation domain

use std::path::Path;

/// Joins a base directory and a relative filename into a forward-slash path.
///
/// Log messages and remote URL construction assume `/` separators, so the
/// joined path is normalized regardless of host conventions.
pub fn unix_join(base: &Path, filename: &str) -> String {
    base.join(filename).to_string_lossy().replace('\\', "/")
}
