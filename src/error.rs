//! Error types for the strut CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every failure is fatal to the run: there is no retry, no partial-success
//! reporting, and no cleanup of partially-created output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for strut operations.
///
/// Each variant maps to a specific exit code. Messages are formatted at the
/// call site so they can name the exact path or template involved.
#[derive(Error, Debug)]
pub enum StrutError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template descriptor or source fragment could not be opened.
    #[error("{0}")]
    TemplateNotFound(String),

    /// A descriptor parsed cleanly but left required fields empty.
    #[error("template '{0}' is missing required field(s): {1}")]
    MissingField(String, String),

    /// The target project directory already exists.
    #[error("project directory '{0}' already exists")]
    ProjectExists(String),

    /// A directory in the target tree could not be created.
    #[error("{0}")]
    CreateDir(String),

    /// A generated file could not be written.
    #[error("{0}")]
    WriteFile(String),
}

impl StrutError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StrutError::UserError(_) => exit_codes::USER_ERROR,
            StrutError::TemplateNotFound(_) => exit_codes::TEMPLATE_FAILURE,
            StrutError::MissingField(_, _) => exit_codes::TEMPLATE_FAILURE,
            StrutError::ProjectExists(_) => exit_codes::GENERATE_FAILURE,
            StrutError::CreateDir(_) => exit_codes::GENERATE_FAILURE,
            StrutError::WriteFile(_) => exit_codes::GENERATE_FAILURE,
        }
    }
}

/// Result type alias for strut operations.
pub type Result<T> = std::result::Result<T, StrutError>;
