//! HTML emission: one fragment per classified line.
//!
//! [`render_body`] runs the footer pre-filter, classifies every surviving
//! line and joins the emitted fragments with single newlines. Blank lines
//! and environment delimiters emit an empty string, which keeps vertical
//! spacing in the joined output without producing markup.
//!
//! All text derived from the document is escaped. Link and image targets
//! are inserted verbatim.

use super::classify::{classify_line, LineKind};
use super::escape::escape_html;
use super::footer::remove_footer_lines;
use super::normalise;
use tracing::debug;

/// Inline style that lets an image shrink to the container width while
/// keeping its aspect ratio.
const IMAGE_STYLE: &str = "max-width:100%;height:auto;";

/// Result of rendering a body, with the counters the stats are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RenderedBody {
    pub html: String,
    pub input_lines: usize,
    pub emitted_lines: usize,
    pub footer_lines_removed: usize,
}

/// Render sanitised body text to an HTML fragment.
///
/// Never fails: unrecognised syntax falls through to escaped text.
pub fn render_body(input: &str) -> String {
    render_lines(input, true).html
}

/// Emit the HTML fragment for one classified line.
pub fn render_line(kind: &LineKind<'_>) -> String {
    match *kind {
        LineKind::Blank | LineKind::EnvironmentDelimiter => String::new(),
        LineKind::Item { label, body } if label.is_empty() => {
            format!("<p>{}</p>", escape_html(body))
        }
        LineKind::Item { label, body } if body.is_empty() => {
            format!("<p><strong>{}</strong></p>", escape_html(label))
        }
        LineKind::Item { label, body } => format!(
            "<p><strong>{}</strong> {}</p>",
            escape_html(label),
            escape_html(body)
        ),
        LineKind::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", escape_html(text))
        }
        LineKind::Image { url } => format!(
            "<div class=\"qmd-figure\"><img src=\"{url}\" alt=\"\" style=\"{IMAGE_STYLE}\"></div>"
        ),
        LineKind::Link { text, url } => format!(
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(text)
        ),
        LineKind::Text(text) => escape_html(text),
    }
}

pub(crate) fn render_lines(input: &str, strip_footer: bool) -> RenderedBody {
    let text = normalise(input);
    let lines: Vec<&str> = text.lines().collect();
    let kept = if strip_footer {
        remove_footer_lines(&lines)
    } else {
        lines.clone()
    };
    let footer_lines_removed = lines.len() - kept.len();
    if footer_lines_removed > 0 {
        debug!("Removed {} footer line(s)", footer_lines_removed);
    }

    let emitted: Vec<String> = kept
        .iter()
        .map(|line| render_line(&classify_line(line)))
        .collect();

    RenderedBody {
        emitted_lines: emitted.iter().filter(|s| !s.is_empty()).count(),
        html: emitted.join("\n"),
        input_lines: lines.len(),
        footer_lines_removed,
    }
}
