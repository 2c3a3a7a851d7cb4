//! Solution-heading removal.
//!
//! Generated solutions open with a `## 解答` ("solution") heading. The page
//! that embeds the fragment already shows its own heading, so the leading
//! one is dropped together with the blank lines around it.

use super::normalise;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_SOLUTION_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s*解答\s*$").unwrap());

/// Drop a leading `## 解答` heading and the blank lines around it.
///
/// Only the first non-blank line is inspected. When it is not the solution
/// heading the input is returned byte-for-byte unchanged, leading blank
/// lines and CRLF endings included.
pub fn strip_solution_heading(input: &str) -> String {
    let text = normalise(input);
    match solution_body_start(&text) {
        Some(start) => {
            debug!("Stripped leading solution heading");
            text[start..].to_string()
        }
        None => input.to_string(),
    }
}

/// Byte offset of the first non-blank line after the solution heading, or
/// of the end of input when nothing follows it.
///
/// `text` must already be normalised to LF line endings.
pub(crate) fn solution_body_start(text: &str) -> Option<usize> {
    let mut lines = text.split_inclusive('\n');
    let mut offset = 0;

    let heading = loop {
        let line = lines.next()?;
        offset += line.len();
        if !line.trim().is_empty() {
            break line;
        }
    };
    if !RE_SOLUTION_HEADING.is_match(heading.trim()) {
        return None;
    }

    for line in lines {
        if !line.trim().is_empty() {
            return Some(offset);
        }
        offset += line.len();
    }
    Some(offset)
}
