/// Width of the item-name column in frequency and histogram listings.
pub const NAME_COLUMN_WIDTH: usize = 14;

/// Render a section header: the title on its own line, underlined with
/// dashes of the same length, preceded by a blank line.
///
/// # Examples
///
/// ```
/// use grocer_core::formatting::section_header;
///
/// assert_eq!(section_header("Top Movers"), "\nTop Movers\n----------\n");
/// ```
pub fn section_header(title: &str) -> String {
    format!("\n{}\n{}\n", title, "-".repeat(title.chars().count()))
}

/// Left-align `name` in the item-name column, padding with spaces.
///
/// Names longer than the column are not truncated; the row simply overflows.
///
/// # Examples
///
/// ```
/// use grocer_core::formatting::pad_name;
///
/// assert_eq!(pad_name("apple"), "apple         ");
/// assert_eq!(pad_name("pomegranates!!"), "pomegranates!!");
/// ```
pub fn pad_name(name: &str) -> String {
    format!("{:<width$}", name, width = NAME_COLUMN_WIDTH)
}

/// Build a histogram bar of `count` marker characters.
///
/// # Examples
///
/// ```
/// use grocer_core::formatting::frequency_bar;
///
/// assert_eq!(frequency_bar(4), "****");
/// assert_eq!(frequency_bar(0), "");
/// ```
pub fn frequency_bar(count: u64) -> String {
    "*".repeat(count as usize)
}
