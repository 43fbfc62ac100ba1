use std::path::PathBuf;
use thiserror::Error;

/// Global error type for the scaffolding tool.
///
/// Every variant is terminal for the invocation; `main` maps all of them to exit code 1.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No component name was supplied on the command line.
    #[error("Please provide a component name")]
    MissingName,

    /// The supplied name is not PascalCase.
    #[error("Component name should be in PascalCase (e.g., ExampleButton)")]
    InvalidName(String),

    /// The target component directory is already present.
    #[error("Component \"{name}\" already exists")]
    ComponentExists { name: String, path: PathBuf },

    /// The fallback components directory could not be created.
    #[error("Failed to create components directory {}: {source}", .path.display())]
    CreateComponentsDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Creating the component directory or writing one of its files failed.
    #[error("Error creating component: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
        rollback: Rollback,
    },

    /// Underlying IO failure outside of the scaffold itself.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to a partially written component after a failed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollback {
    /// The partial component directory was removed.
    Removed,
    /// Nothing created by this run needed removing.
    Skipped,
    /// Removal was attempted and failed; the directory may still be on disk.
    Failed(String),
}

/// A specialized Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
