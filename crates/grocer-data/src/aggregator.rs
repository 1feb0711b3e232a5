//! Transaction-file aggregation.
//!
//! Reads the input file token-by-token, normalizes each token and counts it
//! in a [`FrequencyTable`], then persists the table via [`crate::backup`].
//!
//! Tokenization rule: items are whitespace-delimited tokens, so a line
//! containing `"green apples"` counts `green` and `apples` separately. The
//! same rule applies everywhere the input is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use grocer_core::models::FrequencyTable;
use grocer_core::{GrocerError, Result};
use tracing::{debug, warn};

use crate::backup::write_backup;

// ── LoadOutcome ───────────────────────────────────────────────────────────────

/// The result of a successful load: the table plus load statistics for the
/// data-load summary.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The fully populated frequency table. Read-only from here on.
    pub table: FrequencyTable,
    /// Total tokens processed (equals the table's transaction total).
    pub transactions: u64,
    /// Number of distinct items observed.
    pub unique_items: usize,
    /// Where the backup artifact was written.
    pub backup_path: PathBuf,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the transaction source into a [`FrequencyTable`].
///
/// The table is either fully populated (the source was read to completion)
/// or the call fails with [`GrocerError::SourceOpen`] before any entry is
/// added; there is no partially populated state.
pub fn read_source(input: &Path) -> Result<FrequencyTable> {
    let file = File::open(input).map_err(|source| GrocerError::SourceOpen {
        path: input.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut table = FrequencyTable::new();

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                warn!("Skipping unreadable line in {}: {}", input.display(), err);
                continue;
            }
        };
        for token in line.split_whitespace() {
            table.record(token);
        }
    }

    debug!(
        "Read {} transactions ({} unique items) from {}",
        table.total_transactions(),
        table.unique_item_count(),
        input.display()
    );

    Ok(table)
}

/// Load the transaction file and persist the backup artifact.
///
/// Success means both phases completed: the source was read to the end AND
/// the backup was written and flushed. A caller that wants to keep running
/// without persistence can call [`read_source`] and
/// [`write_backup`](crate::backup::write_backup) separately; the reference
/// behavior treats a backup failure as fatal.
pub fn load_transactions(input: &Path, backup: &Path) -> Result<LoadOutcome> {
    let table = read_source(input)?;
    write_backup(&table, backup)?;

    Ok(LoadOutcome {
        transactions: table.total_transactions(),
        unique_items: table.unique_item_count(),
        backup_path: backup.to_path_buf(),
        table,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
