//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Document generation itself never fails; these errors come from loading
//! manifests, parsing Rust type expressions, and writing output.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The procedure manifest could not be read or has an invalid shape.
    #[from(ignore)]
    #[display("Manifest Error: {_0}")]
    Manifest(String),

    /// A type expression could not be mapped to a type shape.
    #[from(ignore)]
    #[display("Type Error: {_0}")]
    Type(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
