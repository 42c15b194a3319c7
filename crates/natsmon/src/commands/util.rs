//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use natsmon_core::decode;
use natsmon_core::model::Snapshot;

use crate::error::CliError;

/// Whether `path` names stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a snapshot document from a file, or stdin for `-`, and decode it.
pub fn read_snapshot<T: Snapshot>(path: &Path) -> Result<T, CliError> {
    let shown = path.display().to_string();
    let text = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CliError::SnapshotNotFound {
                    path: shown.clone(),
                }
            } else {
                CliError::Io(e)
            }
        })?
    };

    tracing::debug!(
        path = %shown,
        endpoint = %T::ENDPOINT,
        bytes = text.len(),
        "decoding snapshot"
    );
    decode(&text).map_err(|source| CliError::InvalidSnapshot {
        path: shown,
        source,
    })
}

/// Stdin can only be consumed once per invocation.
pub fn ensure_single_stdin<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<(), CliError> {
    if paths.into_iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(CliError::Validation {
            field: "snapshots".into(),
            reason: "'-' (stdin) may be given at most once".into(),
        });
    }
    Ok(())
}
