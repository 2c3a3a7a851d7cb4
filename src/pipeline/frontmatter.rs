//! Front-matter removal.
//!
//! A QMD document may open with a YAML metadata block delimited by two lines
//! that read exactly `---` (surrounding whitespace ignored). The HTML preview
//! never needs the metadata, so this stage cuts it off without parsing it.
//!
//! Malformed front matter (no opening delimiter on the first line, or no
//! closing delimiter before end of input) is treated as "no front matter"
//! and the text passes through unchanged.

use super::normalise;
use tracing::debug;

/// A document split at its front-matter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Lines strictly between the two delimiters, verbatim.
    pub yaml_lines: Vec<String>,
    /// Everything after the closing delimiter line.
    pub body: String,
}

/// Remove a leading `---` … `---` block, if present.
///
/// Returns the text strictly after the closing delimiter line, with LF line
/// endings. Input without a complete block is returned byte-for-byte
/// unchanged, CRLF endings and BOM included.
pub fn strip_front_matter(input: &str) -> String {
    let text = normalise(input);
    match front_matter_end(&text) {
        Some(end) => {
            debug!("Stripped {} bytes of front matter", end);
            text[end..].to_string()
        }
        None => input.to_string(),
    }
}

/// Split a document into its YAML lines and body.
///
/// Returns `None` under the same conditions in which [`strip_front_matter`]
/// is the identity.
pub fn split_front_matter(input: &str) -> Option<FrontMatter> {
    let text = normalise(input);
    let end = front_matter_end(&text)?;
    let mut yaml_lines: Vec<String> = text[..end].lines().skip(1).map(str::to_string).collect();
    // closing delimiter
    yaml_lines.pop();
    Some(FrontMatter {
        yaml_lines,
        body: text[end..].to_string(),
    })
}

/// Byte offset just past the closing delimiter line of `text`.
///
/// `text` must already be normalised to LF line endings.
pub(crate) fn front_matter_end(text: &str) -> Option<usize> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim() != "---" {
        return None;
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim() == "---" {
            return Some(offset);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_block() {
        let input = "---\ntitle: \"x\"\nproblem_id: \"abc\"\n---\n# Body\ntext";
        assert_eq!(strip_front_matter(input), "# Body\ntext");
    }

    #[test]
    fn test_no_front_matter_passthrough() {
        let input = "# Body\n---\nmore";
        assert_eq!(strip_front_matter(input), input);
    }

    #[test]
    fn test_unterminated_passthrough() {
        let input = "---\ntitle: x\n# Body";
        assert_eq!(strip_front_matter(input), input);
    }

    #[test]
    fn test_delimiters_with_whitespace() {
        let input = "  ---  \na: 1\n --- \nBody";
        assert_eq!(strip_front_matter(input), "Body");
    }

    #[test]
    fn test_closing_delimiter_at_eof() {
        assert_eq!(strip_front_matter("---\na: 1\n---"), "");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(strip_front_matter("---\n---\nBody"), "Body");
    }

    #[test]
    fn test_only_first_block_removed() {
        let input = "---\na: 1\n---\nBody\n---\nfooter";
        assert_eq!(strip_front_matter(input), "Body\n---\nfooter");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(strip_front_matter("---\r\na: 1\r\n---\r\nBody\r\n"), "Body\n");
    }

    #[test]
    fn test_passthrough_keeps_crlf_and_bom() {
        for input in ["Body\r\nmore\r\n", "\u{FEFF}Body", "---\r\nunterminated\r\n"] {
            assert_eq!(strip_front_matter(input), input, "input: {input:?}");
        }
    }

    #[test]
    fn test_bom_before_block() {
        assert_eq!(strip_front_matter("\u{FEFF}---\na: 1\n---\nBody"), "Body");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_front_matter(""), "");
    }

    #[test]
    fn test_split_front_matter() {
        let fm = split_front_matter("---\na: 1\nb: 2\n---\nBody").unwrap();
        assert_eq!(fm.yaml_lines, vec!["a: 1", "b: 2"]);
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_split_front_matter_empty_block() {
        let fm = split_front_matter("---\n---\nBody").unwrap();
        assert!(fm.yaml_lines.is_empty());
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_split_front_matter_absent() {
        assert!(split_front_matter("Body").is_none());
        assert!(split_front_matter("---\nunterminated").is_none());
    }
}
