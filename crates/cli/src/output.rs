//! Writing command output.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::CliError;

/// Write `text` to stdout.
///
/// # Errors
///
/// Returns `CliError::Output` if the write fails.
pub async fn stdout(text: &str) -> Result<(), CliError> {
    write_all(tokio::io::stdout(), text).await
}

/// Write `text` to stderr.
///
/// # Errors
///
/// Returns `CliError::Output` if the write fails.
pub async fn stderr(text: &str) -> Result<(), CliError> {
    write_all(tokio::io::stderr(), text).await
}

async fn write_all<W: AsyncWrite + Unpin>(mut writer: W, text: &str) -> Result<(), CliError> {
    if text.is_empty() {
        return Ok(());
    }
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(CliError::Output)?;
    writer.flush().await.map_err(CliError::Output)
}
