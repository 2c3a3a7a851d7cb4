//! Citation trailer.

use super::escape::escape_html;

/// Append an escaped citation block to already-rendered HTML.
///
/// A blank citation is a no-op. The HTML itself is never re-parsed.
pub fn append_citation(html: &str, citation: &str) -> String {
    let citation = citation.trim();
    if citation.is_empty() {
        return html.to_string();
    }
    format!(
        "{html}\n\n<div class=\"citation\">{}</div>",
        escape_html(citation)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_citation_is_noop() {
        assert_eq!(append_citation("<p>x</p>", ""), "<p>x</p>");
        assert_eq!(append_citation("<p>x</p>", "  "), "<p>x</p>");
    }

    #[test]
    fn test_citation_escaped_and_appended() {
        assert_eq!(
            append_citation("<p>x</p>", "A & B"),
            "<p>x</p>\n\n<div class=\"citation\">A &amp; B</div>"
        );
    }

    #[test]
    fn test_html_not_touched() {
        let html = "<p>a &lt; b</p>\n";
        assert!(append_citation(html, "c").starts_with(html));
    }

    #[test]
    fn test_empty_html() {
        assert_eq!(
            append_citation("", "東京大学 1961年 第1問"),
            "\n\n<div class=\"citation\">東京大学 1961年 第1問</div>"
        );
    }
}
