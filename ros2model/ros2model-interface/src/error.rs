//! Error types for definition-file parsing and scanning.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InterfaceError {
    /// A definition file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path has no file stem to name the definition after.
    #[error("cannot derive a definition name from {}", path.display())]
    InvalidFileName { path: PathBuf },

    /// No prefix on `AMENT_PREFIX_PATH` has a share directory for the package.
    #[error("package '{package_name}' not found")]
    PackageNotFound { package_name: String },

    /// Directory traversal failed part-way.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
