//! List schemas and the collections their records are stored in.
//!
//! # Usage
//!
//! ```bash
//! roastery collections
//! ```

use roastery_core::SchemaKind;

/// One line per schema: `TypeName -> collection`.
#[must_use]
pub fn render() -> String {
    let width = SchemaKind::ALL
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0);

    SchemaKind::ALL
        .iter()
        .map(|kind| format!("{:<width$} -> {}\n", kind.name(), kind.collection()))
        .collect()
}
