//! CLI error type.

use thiserror::Error;

/// Errors that can end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input could not be read.
    #[error("Failed to read {source_name}: {source}")]
    Read {
        /// Path, or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input exceeded the configured size cap.
    #[error("Input {source_name} is larger than {max} bytes")]
    InputTooLarge {
        /// Path, or `stdin`.
        source_name: String,
        /// Configured cap.
        max: usize,
    },

    /// JSON input could not be parsed, or output could not be rendered.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input could not be parsed.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An array element is not an object.
    #[error("Record {index} is not an object")]
    NotAnObject {
        /// Zero-based position in the document.
        index: usize,
    },

    /// The document is neither an object nor an array.
    #[error("Document must be an object or an array of objects")]
    UnexpectedDocument,

    /// One or more records failed validation.
    #[error("{invalid} of {total} records failed validation")]
    InvalidRecords {
        /// Number of rejected records.
        invalid: usize,
        /// Number of records in the document.
        total: usize,
    },

    /// Writing to stdout or stderr failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
