//! Reading record documents from files or stdin.
//!
//! A document is either a single record object or an array of record
//! objects, written as JSON or YAML.

use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};

use roastery_core::RawFields;

use crate::error::CliError;

/// Input document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension; JSON unless `.yaml`/`.yml`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Where a document comes from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> Source<'a> {
    /// Interpret a command-line path argument; missing or `-` means stdin.
    #[must_use]
    pub fn from_arg(path: Option<&'a Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => Self::File(p),
            _ => Self::Stdin,
        }
    }

    /// Name used in log lines and errors.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(p) => p.display().to_string(),
        }
    }

    /// Format implied by the source, before any explicit override.
    #[must_use]
    pub fn default_format(&self) -> InputFormat {
        match self {
            Self::Stdin => InputFormat::Json,
            Self::File(p) => InputFormat::from_path(p),
        }
    }

    /// Read the whole source, refusing anything over `max_bytes`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Read` on I/O failure or `CliError::InputTooLarge`
    /// past the cap.
    pub async fn read(&self, max_bytes: usize) -> Result<String, CliError> {
        match self {
            Self::Stdin => read_capped(tokio::io::stdin(), &self.name(), max_bytes).await,
            Self::File(p) => {
                let file = tokio::fs::File::open(p).await.map_err(|source| CliError::Read {
                    source_name: self.name(),
                    source,
                })?;
                read_capped(file, &self.name(), max_bytes).await
            }
        }
    }
}

/// Read `reader` to the end as UTF-8, failing once more than `max_bytes` arrive.
///
/// The size cap is checked on raw bytes before decoding, so a multibyte
/// character split at the cap reports `InputTooLarge`, not a UTF-8 error.
///
/// # Errors
///
/// Returns `CliError::Read` on I/O or UTF-8 failure and
/// `CliError::InputTooLarge` past the cap.
pub async fn read_capped<R>(reader: R, source_name: &str, max_bytes: usize) -> Result<String, CliError>
where
    R: AsyncRead + Unpin,
{
    let read_error = |source| CliError::Read {
        source_name: source_name.to_string(),
        source,
    };

    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut bytes)
        .await
        .map_err(read_error)?;

    if bytes.len() > max_bytes {
        return Err(CliError::InputTooLarge {
            source_name: source_name.to_string(),
            max: max_bytes,
        });
    }

    String::from_utf8(bytes)
        .map_err(|e| read_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Parse document text into a JSON value.
///
/// # Errors
///
/// Returns `CliError::Json` or `CliError::Yaml` for malformed input.
pub fn parse_document(text: &str, format: InputFormat) -> Result<Value, CliError> {
    Ok(match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

/// Split a document into raw records.
///
/// # Errors
///
/// Returns `CliError::NotAnObject` for a non-object array element and
/// `CliError::UnexpectedDocument` for a scalar document.
pub fn into_records(document: Value) -> Result<Vec<RawFields>, CliError> {
    match document {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(CliError::NotAnObject { index }),
            })
            .collect(),
        _ => Err(CliError::UnexpectedDocument),
    }
}
