//! Footer removal: drop the "original problem" source-link block.
//!
//! Imported problems end with a separator and a link back to the scanned
//! original:
//!
//! ```text
//! ---
//! 元問題 PDF: [こちらを開く](../archive/01_tokyo/1961/q1.pdf)
//! ```
//!
//! Those links are meaningless in the preview, so they are removed before
//! classification. This runs as a pre-filter over the line array, separate
//! from rendering, so that removed lines never reach the classifier.

/// Label prefixes that mark a source-link line ("original problem PDF:" and
/// "original problem scan:").
pub const FOOTER_LABELS: [&str; 2] = ["元問題 PDF:", "元問題スキャン:"];

/// True when the trimmed line starts with one of the [`FOOTER_LABELS`].
pub fn is_footer_label(line: &str) -> bool {
    let trimmed = line.trim();
    FOOTER_LABELS.iter().any(|label| trimmed.starts_with(label))
}

/// Remove footer label lines and the `---` separator that introduces them.
///
/// A separator is only removed when the next non-blank line is a label; a
/// lone `---` elsewhere in the body is kept. Blank lines between the
/// separator and the label are kept (they render as nothing anyway).
pub fn remove_footer_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .enumerate()
        .filter(|&(i, line)| !(is_footer_label(line) || introduces_footer(lines, i)))
        .map(|(_, line)| *line)
        .collect()
}

fn introduces_footer(lines: &[&str], i: usize) -> bool {
    lines[i].trim() == "---"
        && lines[i + 1..]
            .iter()
            .find(|l| !l.trim().is_empty())
            .is_some_and(|next| is_footer_label(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_and_label_removed() {
        let lines = ["Body", "---", "元問題 PDF: [open](x.pdf)"];
        assert_eq!(remove_footer_lines(&lines), vec!["Body"]);
    }

    #[test]
    fn test_standalone_labels_removed() {
        let lines = ["元問題スキャン: [scan](x.jpg)", "Body", "  元問題 PDF: x"];
        assert_eq!(remove_footer_lines(&lines), vec!["Body"]);
    }

    #[test]
    fn test_separator_with_blank_gap_removed() {
        let lines = ["Body", "", "---", "", "元問題 PDF: [open](x.pdf)", ""];
        assert_eq!(remove_footer_lines(&lines), vec!["Body", "", "", ""]);
    }

    #[test]
    fn test_plain_separator_kept() {
        let lines = ["a", "---", "b"];
        assert_eq!(remove_footer_lines(&lines), vec!["a", "---", "b"]);
    }

    #[test]
    fn test_trailing_separator_kept() {
        let lines = ["a", "---"];
        assert_eq!(remove_footer_lines(&lines), vec!["a", "---"]);
    }

    #[test]
    fn test_label_in_middle_of_line_kept() {
        let lines = ["see 元問題 PDF: later"];
        assert_eq!(remove_footer_lines(&lines), vec!["see 元問題 PDF: later"]);
    }

    #[test]
    fn test_empty() {
        assert!(remove_footer_lines(&[]).is_empty());
    }
}
