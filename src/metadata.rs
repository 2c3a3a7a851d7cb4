//! Front-matter metadata maintenance.
//!
//! Small line-oriented edits of the YAML block of a problem document. The
//! YAML is never parsed: keys are located by prefix, which is all the flat
//! `key: value` headers our importers write require. Every operation returns
//! `None` when it has nothing to do, so callers can skip the write.

use crate::pipeline::frontmatter::split_front_matter;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const PROBLEM_NUMBER_KEY: &str = "problem_number:";
const PROBLEM_ID_KEY: &str = "problem_id:";
const EXAM_YEAR_KEY: &str = "exam_year:";
const FIELDS_KEY: &str = "fields:";
const FORMAT_KEY: &str = "format:";
const TITLE_KEY: &str = "title";
const UNIVERSITY_KEY: &str = "university";

/// University directory codes and the display label written to front matter.
pub const UNIVERSITY_LABELS: &[(&str, &str)] = &[
    ("01_tokyo", "東京大学"),
    ("02_kyoto", "京都大学"),
    ("03_hokudai", "北海道大学"),
    ("04_tohoku", "東北大学"),
    ("05_nagoya", "名古屋大学"),
    ("06_osaka", "大阪大学"),
    ("07_kyushu", "九州大学"),
    ("08_titech", "東京科学大学"),
];

/// A bare problem number (ASCII or full-width digits), optionally followed
/// by a note such as `5 旧`.
static RE_NUMBER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9０-９]+)(?:\s+.*)?$").unwrap());

/// Move a leading problem-number line from the body into the front matter.
///
/// The first non-blank body line must be a bare number. It is written to
/// `problem_number:` (replacing an existing entry, otherwise inserted after
/// `problem_id:`, otherwise appended), removed from the body, and any
/// leading ideographic spaces on the next non-blank line are dropped.
///
/// Returns `None` when the document has no front matter, an empty body, or
/// no leading number line.
pub fn assign_problem_number(text: &str) -> Option<String> {
    let fm = split_front_matter(text)?;
    let mut body: Vec<String> = fm.body.lines().map(str::to_string).collect();

    let idx = body.iter().position(|l| !l.trim().is_empty())?;
    let number = {
        let caps = RE_NUMBER_LINE.captures(&body[idx])?;
        to_ascii_digits(&caps[1])
    };
    debug!("Found problem number {}", number);

    let yaml = set_problem_number(fm.yaml_lines, &number);
    body.remove(idx);

    if let Some(next) = body[idx..].iter_mut().find(|l| !l.trim().is_empty()) {
        *next = next.trim_start_matches('\u{3000}').to_string();
    }

    Some(assemble(&yaml, &body))
}

/// Move the `problem_number:` entry directly after `exam_year:`.
///
/// Returns `None` when either key is missing or the order is already right.
pub fn reorder_problem_number(text: &str) -> Option<String> {
    let fm = split_front_matter(text)?;
    let mut yaml = fm.yaml_lines;

    let problem_idx = find_key(&yaml, PROBLEM_NUMBER_KEY)?;
    let exam_idx = find_key(&yaml, EXAM_YEAR_KEY)?;
    if problem_idx == exam_idx + 1 {
        return None;
    }

    let line = yaml.remove(problem_idx);
    match find_key(&yaml, EXAM_YEAR_KEY) {
        Some(exam_idx) => yaml.insert(exam_idx + 1, line),
        None => yaml.push(line),
    }

    let body: Vec<String> = fm.body.lines().map(str::to_string).collect();
    Some(assemble(&yaml, &body))
}

/// Insert a `fields:` list into the front matter.
///
/// The list goes before the first `format:` line, or at the end of the
/// block when there is none. Returns `None` when `fields` is empty, the
/// document has no front matter, or a `fields:` entry already exists.
pub fn add_fields(text: &str, fields: &[&str]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let fm = split_front_matter(text)?;
    let mut yaml = fm.yaml_lines;
    if find_key(&yaml, FIELDS_KEY).is_some() {
        return None;
    }

    let at = find_key(&yaml, FORMAT_KEY).unwrap_or(yaml.len());
    let tail = yaml.split_off(at);
    yaml.push(FIELDS_KEY.to_string());
    yaml.extend(fields.iter().map(|f| format!("  - {f}")));
    yaml.extend(tail);
    debug!("Inserted {} fields at YAML line {}", fields.len(), at);

    let body: Vec<String> = fm.body.lines().map(str::to_string).collect();
    Some(assemble(&yaml, &body))
}

/// Look up the display label for a university directory code.
pub fn university_label(code: &str) -> Option<&'static str> {
    UNIVERSITY_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Tidy the `title` and `university` entries of the front matter.
///
/// A doubled colon (`title::`, `university::`) is collapsed to one. A
/// `university` value that is a known directory code is replaced by its
/// label, and a `title` that starts with a code followed by a space gets the
/// label in its place. Returns `None` when nothing changed.
pub fn normalize_university_labels(text: &str) -> Option<String> {
    let fm = split_front_matter(text)?;
    let mut changed = false;

    let yaml: Vec<String> = fm
        .yaml_lines
        .into_iter()
        .map(|line| match normalize_label_line(&line) {
            Some(fixed) if fixed != line => {
                changed = true;
                fixed
            }
            _ => line,
        })
        .collect();

    if !changed {
        return None;
    }
    debug!("Normalised university labels");
    let body: Vec<String> = fm.body.lines().map(str::to_string).collect();
    Some(assemble(&yaml, &body))
}

/// Rewrite a top-level `title`/`university` line, or `None` when it needs
/// no change.
fn normalize_label_line(line: &str) -> Option<String> {
    let (key, rest) = line.split_once(':')?;
    if key != TITLE_KEY && key != UNIVERSITY_KEY {
        return None;
    }
    let doubled = rest.starts_with(':');
    let raw = rest.strip_prefix(':').unwrap_or(rest).trim();
    let value = unquote(raw);

    let relabelled = if key == UNIVERSITY_KEY {
        university_label(value).map(str::to_string)
    } else {
        value.split_once(' ').and_then(|(code, tail)| {
            university_label(code).map(|label| format!("{label} {tail}"))
        })
    };

    match relabelled {
        Some(v) => Some(format!("{key}: \"{v}\"")),
        None if doubled => Some(format!("{key}: {raw}")),
        None => None,
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Convert full-width digits (`０`-`９`) to ASCII, leaving others alone.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn find_key(yaml: &[String], key: &str) -> Option<usize> {
    yaml.iter().position(|l| l.trim_start().starts_with(key))
}

fn set_problem_number(mut yaml: Vec<String>, number: &str) -> Vec<String> {
    let entry = format!("{PROBLEM_NUMBER_KEY} {number}");

    if find_key(&yaml, PROBLEM_NUMBER_KEY).is_some() {
        for line in yaml.iter_mut() {
            if line.trim_start().starts_with(PROBLEM_NUMBER_KEY) {
                *line = entry.clone();
            }
        }
        return yaml;
    }

    match find_key(&yaml, PROBLEM_ID_KEY) {
        Some(i) => yaml.insert(i + 1, entry),
        None => yaml.push(entry),
    }
    yaml
}

fn assemble(yaml: &[String], body: &[String]) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(yaml.len() + body.len() + 2);
    lines.push("---");
    lines.extend(yaml.iter().map(String::as_str));
    lines.push("---");
    lines.extend(body.iter().map(String::as_str));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_digits() {
        assert_eq!(to_ascii_digits("１２"), "12");
        assert_eq!(to_ascii_digits("3"), "3");
    }

    #[test]
    fn test_assign_after_problem_id() {
        let input = "---\ntitle: \"t\"\nproblem_id: \"p1\"\nformat: x\n---\n\n５\n\u{3000}次の問に答えよ。\n";
        let out = assign_problem_number(input).unwrap();
        assert_eq!(
            out,
            "---\ntitle: \"t\"\nproblem_id: \"p1\"\nproblem_number: 5\nformat: x\n---\n\n次の問に答えよ。\n"
        );
    }

    #[test]
    fn test_assign_replaces_existing() {
        let input = "---\nproblem_number: 1\n---\n3 旧\nBody";
        let out = assign_problem_number(input).unwrap();
        assert_eq!(out, "---\nproblem_number: 3\n---\nBody\n");
    }

    #[test]
    fn test_assign_appends_without_problem_id() {
        let input = "---\ntitle: t\n---\n2\nBody";
        let out = assign_problem_number(input).unwrap();
        assert_eq!(out, "---\ntitle: t\nproblem_number: 2\n---\nBody\n");
    }

    #[test]
    fn test_assign_none_cases() {
        assert!(assign_problem_number("2\nBody").is_none());
        assert!(assign_problem_number("---\na: 1\n---\n\n\n").is_none());
        assert!(assign_problem_number("---\na: 1\n---\n次の問に答えよ。\n").is_none());
    }

    #[test]
    fn test_assign_is_idempotent_once_applied() {
        let input = "---\nproblem_id: p\n---\n4\nBody";
        let once = assign_problem_number(input).unwrap();
        assert!(assign_problem_number(&once).is_none());
    }

    #[test]
    fn test_reorder_moves_after_exam_year() {
        let input = "---\nproblem_number: 2\ntitle: t\nexam_year: \"1961\"\nformat: x\n---\nBody";
        let out = reorder_problem_number(input).unwrap();
        assert_eq!(
            out,
            "---\ntitle: t\nexam_year: \"1961\"\nproblem_number: 2\nformat: x\n---\nBody\n"
        );
    }

    #[test]
    fn test_add_fields_before_format() {
        let input = "---\ntitle: t\nformat:\n  html: default\n---\nBody";
        let out = add_fields(input, &["algebra", "geometry"]).unwrap();
        assert_eq!(
            out,
            "---\ntitle: t\nfields:\n  - algebra\n  - geometry\nformat:\n  html: default\n---\nBody\n"
        );
    }

    #[test]
    fn test_add_fields_appends_without_format() {
        let out = add_fields("---\ntitle: t\n---\nBody", &["calculus"]).unwrap();
        assert_eq!(out, "---\ntitle: t\nfields:\n  - calculus\n---\nBody\n");
    }

    #[test]
    fn test_add_fields_noop_cases() {
        assert!(add_fields("---\ntitle: t\n---\nBody", &[]).is_none());
        assert!(add_fields("Body only", &["x"]).is_none());
        assert!(add_fields("---\nfields:\n  - a\n---\nBody", &["b"]).is_none());
        assert!(add_fields("---\ntitle: t\nBody", &["b"]).is_none());
    }

    #[test]
    fn test_double_colon_collapsed() {
        let input = "---\ntitle:: \"第1問\"\nuniversity:: \"東京大学\"\n---\nBody";
        let out = normalize_university_labels(input).unwrap();
        assert_eq!(out, "---\ntitle: \"第1問\"\nuniversity: \"東京大学\"\n---\nBody\n");
    }

    #[test]
    fn test_university_code_replaced() {
        let input = "---\ntitle: \"02_kyoto 1965 第3問\"\nuniversity: \"02_kyoto\"\nformat: x\n---\n";
        let out = normalize_university_labels(input).unwrap();
        assert_eq!(
            out,
            "---\ntitle: \"京都大学 1965 第3問\"\nuniversity: \"京都大学\"\nformat: x\n---\n"
        );
    }

    #[test]
    fn test_normalize_labels_noop_cases() {
        assert!(normalize_university_labels("---\ntitle: \"t\"\nuniversity: \"大阪大学\"\n---\n").is_none());
        assert!(normalize_university_labels("---\nuniversity: \"99_unknown\"\n---\n").is_none());
        assert!(normalize_university_labels("no front matter").is_none());
        assert!(normalize_university_labels("---\nformat:\n  title: \"01_tokyo x\"\n---\n").is_none());
    }

    #[test]
    fn test_university_label_lookup() {
        assert_eq!(university_label("08_titech"), Some("東京科学大学"));
        assert_eq!(university_label("tokyo"), None);
    }

    #[test]
    fn test_reorder_noop_cases() {
        assert!(reorder_problem_number("---\nexam_year: 1\nproblem_number: 2\n---\n").is_none());
        assert!(reorder_problem_number("---\nproblem_number: 2\n---\n").is_none());
        assert!(reorder_problem_number("no front matter").is_none());
    }
}
