//! HTML escaping for text embedded in emitted markup.

/// Escape the three characters that would otherwise be read as markup.
///
/// Quotes are left alone: escaped text is only ever placed in element
/// content, never in attribute values. Dollar signs and backslashes pass
/// through untouched so the client-side typesetter still sees the TeX.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
