//! The interactive numbered menu.
//!
//! The loop is generic over `BufRead` / `Write` so tests can drive it with
//! in-memory buffers. All report output goes through the renderers in
//! `grocer_report::render`; the loop itself owns no report logic.

use std::io::{BufRead, Write};

use grocer_report::render;
use grocer_report::reporter::Reporter;

// ── Choice parsing ─────────────────────────────────────────────────────────────

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    ListAll,
    Histogram,
    Exit,
}

/// Why a line of input was not a valid selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// Not a number at all.
    NotANumber,
    /// A number outside 1–4.
    OutOfRange,
}

/// Parse one line of menu input.
pub fn parse_choice(input: &str) -> Result<MenuChoice, ChoiceError> {
    let number: u32 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    match number {
        1 => Ok(MenuChoice::Search),
        2 => Ok(MenuChoice::ListAll),
        3 => Ok(MenuChoice::Histogram),
        4 => Ok(MenuChoice::Exit),
        _ => Err(ChoiceError::OutOfRange),
    }
}

// ── Menu loop ──────────────────────────────────────────────────────────────────

const MENU: &str = "\n===== Corner Grocer Menu =====\n\
                    1. Search for an item\n\
                    2. Display all item frequencies\n\
                    3. Display histogram and insights\n\
                    4. Exit\n\
                    Enter your choice: ";

/// Run the menu loop until the operator exits or input ends.
///
/// Invalid input is reported and re-prompted, never fatal. End-of-input is
/// treated like choosing Exit so piped sessions terminate cleanly. The
/// session summary is printed on the way out.
pub fn run_menu<R: BufRead, W: Write>(
    reporter: &Reporter<'_>,
    use_color: bool,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let mut last_search: Option<String> = None;

    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_choice(&line) {
            Err(ChoiceError::NotANumber) => {
                writeln!(output, "Invalid input. Please enter a number.")?;
            }
            Err(ChoiceError::OutOfRange) => {
                writeln!(output, "Invalid menu option.")?;
            }
            Ok(MenuChoice::Search) => {
                if let Some(previous) = &last_search {
                    writeln!(output, "Last searched item: {}", previous)?;
                }
                write!(output, "Enter item name to search: ")?;
                output.flush()?;

                let Some(item) = read_line(&mut input)? else {
                    break;
                };
                let count = reporter.lookup(&item);
                write!(output, "{}", render::render_lookup(item.trim(), count))?;
                if count > 0 {
                    last_search = Some(item.trim().to_string());
                }
            }
            Ok(MenuChoice::ListAll) => {
                write!(output, "{}", render::render_all_frequencies(reporter))?;
            }
            Ok(MenuChoice::Histogram) => {
                write!(output, "{}", render::render_histogram(reporter, use_color))?;
                writeln!(output, "\n===== Business Insights =====")?;
                write!(output, "{}", render::render_top_movers(reporter))?;
                write!(output, "{}", render::render_classification(reporter))?;
                write!(output, "{}", render::render_inventory_health(reporter))?;
                write!(output, "{}", render::render_restock(reporter))?;
            }
            Ok(MenuChoice::Exit) => {
                writeln!(output, "\nExiting program...")?;
                break;
            }
        }
    }

    write!(output, "{}", render::render_session_summary(reporter))?;
    output.flush()?;
    Ok(())
}

/// Read one line, `None` on end-of-input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

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

    /// Drive the menu with scripted input and capture its output.
    fn run_script(table: &FrequencyTable, script: &str) -> String {
        let reporter = Reporter::new(table);
        let mut output = Vec::new();
        run_menu(&reporter, false, script.as_bytes(), &mut output).expect("menu run");
        String::from_utf8(output).expect("utf8 output")
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Ok(MenuChoice::Search));
        assert_eq!(parse_choice(" 2 "), Ok(MenuChoice::ListAll));
        assert_eq!(parse_choice("3"), Ok(MenuChoice::Histogram));
        assert_eq!(parse_choice("4"), Ok(MenuChoice::Exit));
        assert_eq!(parse_choice("0"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("9"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("banana"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice(""), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_exit_prints_session_summary() {
        let table = sample_table();
        let out = run_script(&table, "4\n");
        assert!(out.contains("Exiting program..."));
        assert!(out.contains("Session Summary"));
        assert!(out.contains("Items requiring restock: 3"));
        assert!(out.contains("Inventory health score:  0%"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let table = sample_table();
        let out = run_script(&table, "banana\n7\n4\n");
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid menu option."));
        // The menu was shown again after each invalid line.
        assert_eq!(out.matches("Corner Grocer Menu").count(), 3);
    }

    #[test]
    fn test_search_found_and_missing() {
        let table = sample_table();
        let out = run_script(&table, "1\nAPPLE\n1\ndurian\n4\n");
        assert!(out.contains("APPLE was purchased 3 times."));
        assert!(out.contains("Item not found."));
        // The successful search is remembered for the next search.
        assert!(out.contains("Last searched item: APPLE"));
    }

    #[test]
    fn test_list_all_frequencies() {
        let table = sample_table();
        let out = run_script(&table, "2\n4\n");
        assert!(out.contains("All Item Frequencies"));
        assert!(out.contains("apple         3"));
    }

    #[test]
    fn test_histogram_option_includes_insights() {
        let table = sample_table();
        let out = run_script(&table, "3\n4\n");
        assert!(out.contains("Purchase Frequency Histogram"));
        assert!(out.contains("===== Business Insights ====="));
        assert!(out.contains("Top Movers"));
        assert!(out.contains("Demand Classification"));
        assert!(out.contains("Inventory Health"));
        assert!(out.contains("Restock Recommendations"));
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        let table = sample_table();
        let out = run_script(&table, "");
        assert!(out.contains("Session Summary"));
    }
}
