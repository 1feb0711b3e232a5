//! Backup-artifact persistence.
//!
//! The backup is a plain-text snapshot of the frequency table: one
//! `<name> <count>` line per distinct item, in the table's canonical
//! (lexicographic) order. Overwritten on every run, never appended.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use grocer_core::models::FrequencyTable;
use grocer_core::{GrocerError, Result};
use tracing::warn;

/// Write `table` to `path`, one `<name> <count>` line per entry.
///
/// Creates or overwrites the file and flushes before returning; any
/// create/write/flush failure maps to [`GrocerError::BackupWrite`].
pub fn write_backup(table: &FrequencyTable, path: &Path) -> Result<()> {
    let to_backup_err = |source: std::io::Error| GrocerError::BackupWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_backup_err)?;
    let mut writer = BufWriter::new(file);

    for (name, count) in table.iter() {
        writeln!(writer, "{} {}", name, count).map_err(to_backup_err)?;
    }

    writer.flush().map_err(to_backup_err)?;
    Ok(())
}

/// Parse a backup artifact back into a [`FrequencyTable`].
///
/// Lines that do not parse as `<name> <count>` are skipped with a warning;
/// a well-formed backup round-trips to the exact table it was written from.
pub fn read_backup(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| GrocerError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut table = FrequencyTable::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next().map(str::parse::<u64>)) {
            (Some(name), Some(Ok(count))) => table.insert_count(name.to_string(), count),
            _ => warn!("Skipping malformed backup line: {:?}", line),
        }
    }

    Ok(table)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
