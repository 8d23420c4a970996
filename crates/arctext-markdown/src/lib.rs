#![forbid(unsafe_code)]

//! Markdown table cell extraction.
//!
//! A deliberately small detector for pipe tables, used to decide whether an
//! input should be laid out as one string or as a batch of cell strings.
//! It is not a markdown parser: anything that fails the table heuristic is
//! reported as "not a table" and the caller falls back to whole-text
//! treatment. Malformed tables are never a hard failure.
//!
//! # Recognized shape
//!
//! ```text
//! | H1 | H2 |
//! | --- | --- |
//! | a | b |
//! | c | |
//! ```
//!
//! - Lines are trimmed; blank lines are dropped.
//! - Candidate rows both start and end with `|`.
//! - A table needs at least two candidate rows, the second containing `---`
//!   (the separator row; `:---`-style alignment colons are accepted).
//! - Header and separator rows are skipped. Every later row is split on
//!   `|`, cells are trimmed, empty cells are dropped, and all cells are
//!   flattened into one ordered sequence - row boundaries are deliberately
//!   not preserved.
//!
//! # Example
//! ```
//! use arctext_markdown::extract_table_cells;
//!
//! let input = "| H1 | H2 |\n| --- | --- |\n| a | b |\n| c | |";
//! assert_eq!(
//!     extract_table_cells(input),
//!     Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
//! );
//!
//! // No pipes: not a table, caller treats the input as one item.
//! assert_eq!(extract_table_cells("hello\nworld"), None);
//! ```

use tracing::debug;

/// Extract the data cells of a pipe table, flattened across rows.
///
/// Returns `None` when the input is not recognized as a table; the caller
/// should then treat the whole input as a single text item. A recognized
/// table with no data rows yields `Some(vec![])`.
#[must_use]
pub fn extract_table_cells(input: &str) -> Option<Vec<String>> {
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| is_candidate_row(line))
        .collect();

    if rows.len() < 2 || !is_separator_row(rows[1]) {
        return None;
    }

    let mut cells = Vec::new();
    for row in &rows[2..] {
        // Strip the outer pipes, then split the interior.
        let interior = &row[1..row.len() - 1];
        cells.extend(
            interior
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string),
        );
    }

    debug!(rows = rows.len(), cells = cells.len(), "recognized pipe table");
    Some(cells)
}

/// A trimmed line that looks like a table row: `|` at both ends.
fn is_candidate_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// The header/body separator row: any candidate row containing `---`.
fn is_separator_row(row: &str) -> bool {
    row.contains("---")
}
