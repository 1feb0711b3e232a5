//! Pure queries over an already-built [`FrequencyTable`].
//!
//! Every method is a read: nothing here mutates the table, and calling any
//! query twice in a row yields identical results. Absence is always a valid
//! zero/empty result, never an error.

use grocer_core::models::{DemandLevel, FrequencyTable};

// ── Row types ─────────────────────────────────────────────────────────────────

/// One histogram row: an item, its count, and the derived demand level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramRow<'a> {
    pub name: &'a str,
    pub count: u64,
    pub level: DemandLevel,
}

/// The least- and most-purchased entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes<'a> {
    /// Entry with the smallest count (first in canonical order on ties).
    pub min: (&'a str, u64),
    /// Entry with the largest count (first in canonical order on ties).
    pub max: (&'a str, u64),
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Stateless view over a borrowed frequency table.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    table: &'a FrequencyTable,
}

impl<'a> Reporter<'a> {
    pub fn new(table: &'a FrequencyTable) -> Self {
        Self { table }
    }

    /// Count for `name`, normalized the same way the aggregator normalized
    /// at load time; 0 when the item was never observed.
    pub fn lookup(&self, name: &str) -> u64 {
        self.table.get(name)
    }

    /// Every entry in canonical (lexicographic) order.
    pub fn all_frequencies(&self) -> Vec<(&'a str, u64)> {
        self.table.iter().collect()
    }

    /// Every entry annotated with its demand level, canonical order.
    pub fn histogram(&self) -> Vec<HistogramRow<'a>> {
        self.table
            .iter()
            .map(|(name, count)| HistogramRow {
                name,
                count,
                level: DemandLevel::classify(count),
            })
            .collect()
    }

    /// The least- and most-purchased entries, or `None` on an empty table.
    ///
    /// A single linear scan that overwrites only on strict `<` / `>`, so
    /// ties resolve to the entry that comes first in canonical order.
    pub fn extremes(&self) -> Option<Extremes<'a>> {
        let mut iter = self.table.iter();
        let first = iter.next()?;

        let mut min = first;
        let mut max = first;
        for entry in iter {
            if entry.1 < min.1 {
                min = entry;
            }
            if entry.1 > max.1 {
                max = entry;
            }
        }

        Some(Extremes { min, max })
    }

    /// Entries partitioned by demand level, presented High → Medium → Low,
    /// canonical order within each bucket. Empty buckets are included.
    pub fn classification_buckets(&self) -> Vec<(DemandLevel, Vec<&'a str>)> {
        [DemandLevel::High, DemandLevel::Medium, DemandLevel::Low]
            .into_iter()
            .map(|level| {
                let names = self
                    .table
                    .iter()
                    .filter(|&(_, count)| DemandLevel::classify(count) == level)
                    .map(|(name, _)| name)
                    .collect();
                (level, names)
            })
            .collect()
    }

    /// Percentage of distinct items with count strictly greater than 3,
    /// truncated to an integer. 0 for an empty table.
    pub fn health_score_percent(&self) -> u8 {
        let unique = self.table.unique_item_count() as u64;
        if unique == 0 {
            return 0;
        }
        let healthy = self
            .table
            .iter()
            .filter(|&(_, count)| count > 3)
            .count() as u64;
        (healthy * 100 / unique) as u8
    }

    /// All LOW-demand items in canonical order: the restock list.
    pub fn restock_candidates(&self) -> Vec<&'a str> {
        self.table
            .iter()
            .filter(|&(_, count)| DemandLevel::classify(count) == DemandLevel::Low)
            .map(|(name, _)| name)
            .collect()
    }

    /// Sum of all counts.
    pub fn total_transactions(&self) -> u64 {
        self.table.total_transactions()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.table.unique_item_count()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
