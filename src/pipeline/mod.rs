//! Pipeline stages for QMD-to-HTML conversion.
//!
//! Each submodule implements exactly one transformation step. Every stage is
//! a pure `&str → String` function with no shared state, so stages can be
//! tested in isolation and composed in any caller.
//!
//! ## Data Flow
//!
//! ```text
//! raw QMD ──▶ solution ──▶ frontmatter ──▶ sanitize ──▶ footer ──▶ classify ──▶ render ──▶ citation
//!            (solutions    (YAML block)    (TeX fixes)  (source    (LineKind)    (HTML)     (trailer)
//!             only)                                      links)
//! ```
//!
//! 1. [`solution`]    : drop the leading `## 解答` heading of a solution document
//! 2. [`frontmatter`] : remove the leading `---` delimited metadata block
//! 3. [`sanitize`]    : rewrite TeX notation the typesetter cannot handle
//! 4. [`footer`]      : remove the "original problem" source-link lines
//! 5. [`classify`]    : assign each trimmed line exactly one [`classify::LineKind`]
//! 6. [`render`]      : emit one HTML fragment per classified line
//! 7. [`citation`]    : append an escaped citation block to finished HTML
//!
//! [`escape`] is the leaf utility shared by the rendering stages.

pub mod citation;
pub mod classify;
pub mod escape;
pub mod footer;
pub mod frontmatter;
pub mod render;
pub mod sanitize;
pub mod solution;

use std::borrow::Cow;

/// Normalise line endings (CRLF and lone CR → LF) and drop a leading BOM.
///
/// Every public stage runs its input through this first so that Windows
/// line endings never reach the line-oriented matchers.
pub(crate) fn normalise(input: &str) -> Cow<'_, str> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_normalise_borrows_clean_input() {
        assert!(matches!(normalise("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalise_drops_bom() {
        assert_eq!(normalise("\u{FEFF}---\nx"), "---\nx");
    }
}
