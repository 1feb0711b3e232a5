use std::collections::BTreeMap;

// ── Normalization ─────────────────────────────────────────────────────────────

/// Canonicalize a raw item token: trim surrounding whitespace and lowercase.
///
/// This is the single normalization function shared by the load path and every
/// lookup, so `" Apple "`, `"apple"` and `"APPLE"` all map to the same key.
///
/// # Examples
///
/// ```
/// use grocer_core::models::normalize_item;
///
/// assert_eq!(normalize_item(" Apple "), "apple");
/// assert_eq!(normalize_item("BANANA"), "banana");
/// assert_eq!(normalize_item("cherry"), "cherry");
/// ```
pub fn normalize_item(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ── DemandLevel ───────────────────────────────────────────────────────────────

/// Three-bucket demand classification derived from a purchase count.
///
/// Never stored; recomputed on demand from the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    /// Count ≤ 3.
    Low,
    /// Count 4–5.
    Medium,
    /// Count ≥ 6.
    High,
}

impl DemandLevel {
    /// Classify a purchase count into a demand bucket.
    pub fn classify(count: u64) -> Self {
        match count {
            0..=3 => DemandLevel::Low,
            4..=5 => DemandLevel::Medium,
            _ => DemandLevel::High,
        }
    }

    /// Short bracketed label used in histogram and classification output.
    pub fn label(self) -> &'static str {
        match self {
            DemandLevel::Low => "[LOW]",
            DemandLevel::Medium => "[MED]",
            DemandLevel::High => "[HIGH]",
        }
    }
}

// ── FrequencyTable ────────────────────────────────────────────────────────────

/// Mapping from normalized item name to purchase count.
///
/// Backed by a `BTreeMap` so iteration is lexicographic by key; that order is
/// the canonical order every report uses. The table is built once by the
/// aggregator and only read afterwards. Every stored count is ≥ 1: entries
/// exist only for items observed at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw_item` and increment its count, inserting at zero first
    /// if the item has not been seen before.
    pub fn record(&mut self, raw_item: &str) {
        let key = normalize_item(raw_item);
        if key.is_empty() {
            return;
        }
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Insert a pre-normalized entry with an explicit count.
    ///
    /// Used when re-reading a backup artifact; `record` is the load-time path.
    pub fn insert_count(&mut self, name: String, count: u64) {
        self.counts.insert(name, count);
    }

    /// Look up an item's count. The argument is normalized first; absence is
    /// a valid zero-count result, never an error.
    pub fn get(&self, raw_item: &str) -> u64 {
        self.counts
            .get(&normalize_item(raw_item))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate entries in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the total number of transactions processed.
    pub fn total_transactions(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
