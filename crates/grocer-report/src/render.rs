//! Text rendering for reporter output.
//!
//! Every renderer returns a `String` so output is testable without a
//! terminal. Color only ever changes presentation, never the values.

use std::io::IsTerminal;
use std::path::Path;

use crossterm::style::{style, Color, Stylize};
use grocer_core::formatting::{frequency_bar, pad_name, section_header};
use grocer_core::models::DemandLevel;

use crate::reporter::Reporter;

// ── ColorMode ─────────────────────────────────────────────────────────────────

/// How color-coded output is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    On,
    Off,
    /// Color only when stdout is a terminal.
    Auto,
}

impl ColorMode {
    /// Parse the `--color` flag value. Unknown strings fall back to `Auto`.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "on" => ColorMode::On,
            "off" => ColorMode::Off,
            _ => ColorMode::Auto,
        }
    }

    /// Resolve the mode to a concrete on/off decision.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// ANSI color associated with a demand level.
fn demand_color(level: DemandLevel) -> Color {
    match level {
        DemandLevel::Low => Color::Red,
        DemandLevel::Medium => Color::Yellow,
        DemandLevel::High => Color::Green,
    }
}

/// Wrap `text` in the given color when color is enabled.
fn paint(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

// ── Renderers ─────────────────────────────────────────────────────────────────

/// The data-load summary printed once after a successful load.
pub fn render_load_summary(transactions: u64, unique_items: usize, backup_path: &Path) -> String {
    let mut out = section_header("Data Load Summary");
    out.push_str(&format!("Transactions processed: {}\n", transactions));
    out.push_str(&format!("Unique items tracked:   {}\n", unique_items));
    out.push_str(&format!("Backup file created:    {}\n", backup_path.display()));
    out
}

/// The result line for a single item search.
pub fn render_lookup(name: &str, count: u64) -> String {
    if count > 0 {
        format!("{} was purchased {} times.\n", name, count)
    } else {
        "Item not found.\n".to_string()
    }
}

/// Full `<name> <count>` listing in canonical order.
pub fn render_all_frequencies(reporter: &Reporter<'_>) -> String {
    let mut out = section_header("All Item Frequencies");
    for (name, count) in reporter.all_frequencies() {
        out.push_str(&format!("{}{}\n", pad_name(name), count));
    }
    out
}

/// Star-bar histogram with demand labels, demand-colored when enabled.
pub fn render_histogram(reporter: &Reporter<'_>, use_color: bool) -> String {
    let mut out = section_header("Purchase Frequency Histogram");
    for row in reporter.histogram() {
        let line = format!(
            "{}{} {}",
            pad_name(row.name),
            frequency_bar(row.count),
            row.level.label()
        );
        out.push_str(&paint(&line, demand_color(row.level), use_color));
        out.push('\n');
    }
    out
}

/// Most- and least-purchased items; extremes are undefined on an empty table.
pub fn render_top_movers(reporter: &Reporter<'_>) -> String {
    let mut out = section_header("Top Movers");
    let Some(extremes) = reporter.extremes() else {
        out.push_str("No purchase data available.\n");
        return out;
    };
    out.push_str(&format!(
        "Most Purchased:  {} ({})\n",
        extremes.max.0, extremes.max.1
    ));
    out.push_str(&format!(
        "Least Purchased: {} ({})\n",
        extremes.min.0, extremes.min.1
    ));
    out
}

/// Items grouped by demand level, HIGH first.
pub fn render_classification(reporter: &Reporter<'_>) -> String {
    let mut out = section_header("Demand Classification");
    for (level, names) in reporter.classification_buckets() {
        out.push_str(&format!("{} demand:\n", level.label()));
        for name in names {
            out.push_str(&format!(" - {}\n", name));
        }
    }
    out
}

/// Qualitative band for a health score.
pub fn health_band(score: u8) -> &'static str {
    if score >= 80 {
        "Good"
    } else if score >= 50 {
        "Moderate"
    } else {
        "Critical"
    }
}

/// Inventory health score with its qualitative band.
pub fn render_inventory_health(reporter: &Reporter<'_>) -> String {
    let score = reporter.health_score_percent();
    let mut out = section_header("Inventory Health");
    out.push_str(&format!(
        "Inventory Health Score: {}% ({})\n",
        score,
        health_band(score)
    ));
    out
}

/// Restock recommendations: every LOW-demand item, or an all-clear line.
pub fn render_restock(reporter: &Reporter<'_>) -> String {
    let mut out = section_header("Restock Recommendations");
    let candidates = reporter.restock_candidates();
    if candidates.is_empty() {
        out.push_str("All items are sufficiently stocked.\n");
    } else {
        for name in candidates {
            out.push_str(&format!("- {} (LOW stock)\n", name));
        }
    }
    out
}

/// Closing summary printed on exit: restock count, health score, and a
/// recommendation chosen by whether any restock candidates exist.
pub fn render_session_summary(reporter: &Reporter<'_>) -> String {
    let restock_count = reporter.restock_candidates().len();
    let mut out = section_header("Session Summary");
    out.push_str(&format!("Items requiring restock: {}\n", restock_count));
    out.push_str(&format!(
        "Inventory health score:  {}%\n",
        reporter.health_score_percent()
    ));
    out.push_str("Thank you for using Corner Grocer.\n");

    if restock_count > 0 {
        out.push_str(
            "Recommendation: Prioritize restocking and prominent placement of \
             HIGH-demand items to prevent stockouts. Consider reducing shelf \
             space for LOW-demand items.\n",
        );
    } else {
        out.push_str(
            "Recommendation: Demand levels are balanced. Maintain current \
             restocking strategy and layout.\n",
        );
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::models::FrequencyTable;

    fn sample_table() -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for item in ["apple", "banana", "apple", "apple", "banana", "cherry"] {
            table.record(item);
        }
        table
    }

    #[test]
    fn test_color_mode_from_flag() {
        assert_eq!(ColorMode::from_flag("on"), ColorMode::On);
        assert_eq!(ColorMode::from_flag("off"), ColorMode::Off);
        assert_eq!(ColorMode::from_flag("auto"), ColorMode::Auto);
        assert_eq!(ColorMode::from_flag("bogus"), ColorMode::Auto);
    }

    #[test]
    fn test_render_lookup() {
        assert_eq!(render_lookup("apple", 3), "apple was purchased 3 times.\n");
        assert_eq!(render_lookup("durian", 0), "Item not found.\n");
    }

    #[test]
    fn test_render_all_frequencies_lists_in_order() {
        let table = sample_table();
        let out = render_all_frequencies(&Reporter::new(&table));
        let lines: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(lines[0], "apple         3");
        assert_eq!(lines[1], "banana        2");
        assert_eq!(lines[2], "cherry        1");
    }

    #[test]
    fn test_render_histogram_bars_and_labels() {
        let table = sample_table();
        let out = render_histogram(&Reporter::new(&table), false);
        assert!(out.contains("apple         *** [LOW]"));
        assert!(out.contains("banana        ** [LOW]"));
        assert!(out.contains("cherry        * [LOW]"));
        // No ANSI escapes without color.
        assert!(!out.contains('\u{1b}'));
    }

    /// Drop ANSI escape sequences (`ESC [ ... m`) from `s`.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut in_escape = false;
        for c in s.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\u{1b}' {
                in_escape = true;
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_render_histogram_color_adds_escapes_only() {
        let table = sample_table();
        let plain = render_histogram(&Reporter::new(&table), false);
        let colored = render_histogram(&Reporter::new(&table), true);
        assert!(colored.contains('\u{1b}'));
        // Color changes presentation only: stripping the escapes yields the
        // plain rendering.
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn test_render_top_movers() {
        let table = sample_table();
        let out = render_top_movers(&Reporter::new(&table));
        assert!(out.contains("Most Purchased:  apple (3)"));
        assert!(out.contains("Least Purchased: cherry (1)"));
    }

    #[test]
    fn test_render_top_movers_empty_table() {
        let table = FrequencyTable::new();
        let out = render_top_movers(&Reporter::new(&table));
        assert!(out.contains("No purchase data available."));
    }

    #[test]
    fn test_health_band_thresholds() {
        assert_eq!(health_band(100), "Good");
        assert_eq!(health_band(80), "Good");
        assert_eq!(health_band(79), "Moderate");
        assert_eq!(health_band(50), "Moderate");
        assert_eq!(health_band(49), "Critical");
        assert_eq!(health_band(0), "Critical");
    }

    #[test]
    fn test_render_restock_all_clear() {
        let mut table = FrequencyTable::new();
        for _ in 0..6 {
            table.record("milk");
        }
        let out = render_restock(&Reporter::new(&table));
        assert!(out.contains("All items are sufficiently stocked."));
    }

    #[test]
    fn test_render_session_summary_recommendation_switches() {
        let low = sample_table();
        let out = render_session_summary(&Reporter::new(&low));
        assert!(out.contains("Items requiring restock: 3"));
        assert!(out.contains("Prioritize restocking"));

        let mut healthy = FrequencyTable::new();
        for _ in 0..6 {
            healthy.record("milk");
        }
        let out = render_session_summary(&Reporter::new(&healthy));
        assert!(out.contains("Items requiring restock: 0"));
        assert!(out.contains("Demand levels are balanced."));
    }
}
