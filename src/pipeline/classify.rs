//! Line classification.
//!
//! Each trimmed body line is assigned exactly one [`LineKind`]. The rules are
//! tried in a fixed order and the first match wins:
//!
//! | Order | Shape | Kind |
//! |-------|-------|------|
//! | 1 | `\begin{description}` / `\end{description}` | [`LineKind::EnvironmentDelimiter`] |
//! | 2 | `\item[label]rest` | [`LineKind::Item`] |
//! | 3 | `#`…`#` + space + text | [`LineKind::Heading`] |
//! | 4 | `![alt](url)` | [`LineKind::Image`] |
//! | 5 | `[text](url)` | [`LineKind::Link`] |
//! | - | anything else | [`LineKind::Text`] |
//!
//! Blank lines are [`LineKind::Blank`] before any rule runs. The dialect is
//! the restricted one our generators emit, not general Markdown: a shape only
//! matches when it spans the whole line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Highest heading level HTML supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// The shape of one trimmed line, borrowing its parts from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `\begin{description}` or `\end{description}`; emits nothing.
    EnvironmentDelimiter,
    /// `\item[label]body`. `label` is trimmed and may be empty.
    Item { label: &'a str, body: &'a str },
    /// Markdown heading, `level` already clamped to [`MAX_HEADING_LEVEL`].
    Heading { level: usize, text: &'a str },
    /// Image-only line. The alt text is discarded.
    Image { url: &'a str },
    /// Link-only line.
    Link { text: &'a str, url: &'a str },
    /// Fallback: the trimmed line, rendered escaped.
    Text(&'a str),
}

type Rule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

/// Classification rules in priority order.
const RULES: [Rule; 5] = [
    environment_delimiter,
    item,
    heading,
    image,
    link,
];

/// Classify a single line. Leading and trailing whitespace is ignored.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    RULES
        .iter()
        .find_map(|rule| rule(trimmed))
        .unwrap_or(LineKind::Text(trimmed))
}

// ── Rules ────────────────────────────────────────────────────────────────────

static RE_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\(?:begin|end)\{description\}$").unwrap());

fn environment_delimiter(line: &str) -> Option<LineKind<'_>> {
    RE_DESCRIPTION
        .is_match(line)
        .then_some(LineKind::EnvironmentDelimiter)
}

static RE_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\item\[([^\]]*)\](.*)$").unwrap());

fn item(line: &str) -> Option<LineKind<'_>> {
    let caps = RE_ITEM.captures(line)?;
    let label = caps.get(1).map_or("", |m| m.as_str()).trim();
    let body = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some(LineKind::Item { label, body })
}

static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.+)$").unwrap());

fn heading(line: &str) -> Option<LineKind<'_>> {
    let caps = RE_HEADING.captures(line)?;
    let level = caps[1].len().min(MAX_HEADING_LEVEL);
    let text = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some(LineKind::Heading { level, text })
}

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[[^\]]*\]\(([^)]+)\)$").unwrap());

fn image(line: &str) -> Option<LineKind<'_>> {
    let caps = RE_IMAGE.captures(line)?;
    let url = caps.get(1)?.as_str();
    Some(LineKind::Image { url })
}

static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)$").unwrap());

fn link(line: &str) -> Option<LineKind<'_>> {
    let caps = RE_LINK.captures(line)?;
    let text = caps.get(1)?.as_str();
    let url = caps.get(2)?.as_str();
    Some(LineKind::Link { text, url })
}
