//! Validate a document of records against a schema.
//!
//! # Usage
//!
//! ```bash
//! # Validate a YAML menu file
//! roastery validate coffeeitem menu.yaml
//!
//! # Validate JSON piped on stdin
//! cat messages.json | roastery validate ContactMessage
//!
//! # Force the input format
//! roastery validate product products.txt --format yaml
//! ```
//!
//! Valid records are written to stdout as a JSON array. Each rejected
//! record is reported on stderr with its index and every field failure, and
//! the command exits non-zero.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use roastery_core::{RawFields, Record, SchemaKind, ValidationError};

use crate::config::{CliConfig, OutputStyle};
use crate::error::CliError;
use crate::input::{self, InputFormat, Source};
use crate::output;

/// Outcome of validating every record in a document.
#[derive(Debug)]
pub struct Report {
    /// Number of records in the document.
    pub total: usize,
    /// Records that passed, in document order.
    pub valid: Vec<Record>,
    /// Rejected records as `(index, error)`, in document order.
    pub invalid: Vec<(usize, ValidationError)>,
}

impl Report {
    /// Whether every record passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Validate each raw record against `kind`.
#[must_use]
pub fn check_records(kind: SchemaKind, records: Vec<RawFields>) -> Report {
    let total = records.len();
    let mut valid = Vec::with_capacity(total);
    let mut invalid = Vec::new();

    for (index, raw) in records.into_iter().enumerate() {
        match kind.construct(&raw) {
            Ok(record) => valid.push(record),
            Err(err) => {
                debug!(index, error = %err, "Record rejected");
                invalid.push((index, err));
            }
        }
    }

    Report {
        total,
        valid,
        invalid,
    }
}

/// Render the valid records as a JSON array.
///
/// # Errors
///
/// Returns `CliError::Json` if a record cannot be serialized.
pub fn render_valid(report: &Report, style: OutputStyle) -> Result<String, CliError> {
    let mut out = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(&report.valid)?,
        OutputStyle::Compact => serde_json::to_string(&report.valid)?,
    };
    out.push('\n');
    Ok(out)
}

/// Render one line per field failure: `record <index>: <field>: <reason>`.
#[must_use]
pub fn render_invalid(report: &Report) -> String {
    report
        .invalid
        .iter()
        .flat_map(|(index, err)| {
            err.errors()
                .iter()
                .map(move |field| format!("record {index}: {field}\n"))
        })
        .collect()
}

/// Run the `validate` command.
///
/// # Errors
///
/// Returns `CliError` if the input cannot be read or parsed, if output
/// cannot be written, or `CliError::InvalidRecords` if any record failed.
#[instrument(skip(config), fields(schema = %kind))]
pub async fn run(
    kind: SchemaKind,
    path: Option<&Path>,
    format: Option<InputFormat>,
    config: &CliConfig,
) -> Result<(), CliError> {
    let source = Source::from_arg(path);
    let format = format.unwrap_or_else(|| source.default_format());
    info!(source = %source.name(), ?format, "Reading records");

    let text = source.read(config.max_input_bytes).await?;
    let records = input::into_records(input::parse_document(&text, format)?)?;
    let report = check_records(kind, records);

    info!(
        total = report.total,
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        collection = %kind.collection(),
        "Validation finished"
    );

    output::stdout(&render_valid(&report, config.output)?).await?;

    if report.is_clean() {
        return Ok(());
    }

    warn!(invalid = report.invalid.len(), "Some records were rejected");
    output::stderr(&render_invalid(&report)).await?;
    Err(CliError::InvalidRecords {
        invalid: report.invalid.len(),
        total: report.total,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use serde_json::{Value, json};

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    fn records(value: Value) -> Vec<RawFields> {
        input::into_records(value).unwrap()
    }

    #[test]
    fn test_check_records_splits_valid_and_invalid() {
        let report = check_records(
            SchemaKind::ContactMessage,
            records(json!([
                { "name": "Ada", "email": "a@b.com", "message": "Hello there" },
                { "name": "Bob", "email": "not-an-email", "message": "hey" },
            ])),
        );
        assert_eq!(report.total, 2);
        assert_eq!(report.valid.len(), 1);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].0, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_render_invalid_lists_each_field() {
        let report = check_records(
            SchemaKind::ContactMessage,
            records(json!({ "name": "Bob", "email": "not-an-email", "message": "hey" })),
        );
        let out = render_invalid(&report);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("record 0: email: invalid email address"));
        assert_eq!(lines[1], "record 0: message: must be at least 5 characters, got 3");
    }

    #[test]
    fn test_render_valid_normalizes() {
        let report = check_records(
            SchemaKind::CoffeeItem,
            records(json!({ "name": "Espresso", "price": "2.80" })),
        );
        let out = render_valid(&report, OutputStyle::Compact).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["category"], "coffee");
        assert_eq!(parsed[0]["available"], true);
        assert_eq!(parsed[0]["price"], "2.80");
    }

    #[test]
    fn test_menu_fixture_is_valid() {
        let text = std::fs::read_to_string(fixture("menu.yaml")).unwrap();
        let document = input::parse_document(&text, InputFormat::Yaml).unwrap();
        let report = check_records(SchemaKind::CoffeeItem, records(document));
        assert!(report.is_clean(), "{}", render_invalid(&report));
        assert_eq!(report.total, 5);
    }

    #[tokio::test]
    async fn test_run_rejects_bad_contact_fixture() {
        let path = fixture("contact_messages.json");
        let err = run(
            SchemaKind::ContactMessage,
            Some(&path),
            None,
            &CliConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidRecords { invalid: 2, total: 3 }));
    }

    #[tokio::test]
    async fn test_run_respects_size_cap() {
        let path = fixture("menu.yaml");
        let config = CliConfig {
            max_input_bytes: 16,
            ..CliConfig::default()
        };
        let err = run(SchemaKind::CoffeeItem, Some(&path), None, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::InputTooLarge { max: 16, .. }));
    }
}
