//! Conversion entry points.
//!
//! [`convert_problem`] and [`convert_solution`] are the two compositions the
//! web layer calls:
//!
//! ```text
//! problem:  front matter ──▶ sanitize ──▶ footer/classify/render
//! solution: solution heading ──▶ (problem pipeline)
//! ```
//!
//! Both are pure functions of their input. [`convert`] runs the same
//! pipeline under a [`ConversionConfig`] and also reports
//! [`ConversionStats`]; [`convert_file`] and [`convert_to_file`] add the
//! only I/O in the crate.

use crate::config::{ConversionConfig, DocumentKind};
use crate::error::QmdError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{citation, frontmatter, normalise, render, sanitize, solution};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert a problem document to an HTML fragment.
///
/// Empty input yields an empty string. Never fails.
pub fn convert_problem(text: &str) -> String {
    convert(text, &ConversionConfig::default()).html
}

/// Convert a solution document to an HTML fragment.
///
/// Identical to [`convert_problem`] after the leading `## 解答` heading (if
/// any) has been removed.
pub fn convert_solution(text: &str) -> String {
    let config = ConversionConfig {
        kind: DocumentKind::Solution,
        ..ConversionConfig::default()
    };
    convert(text, &config).html
}

/// Run the full pipeline under `config`.
pub fn convert(text: &str, config: &ConversionConfig) -> ConversionOutput {
    let text = normalise(text);

    // ── Step 1: Solution heading ─────────────────────────────────────────
    let (text, solution_heading_stripped) = match config.kind {
        DocumentKind::Solution => match solution::solution_body_start(&text) {
            Some(start) => (&text[start..], true),
            None => (&text[..], false),
        },
        DocumentKind::Problem => (&text[..], false),
    };

    // ── Step 2: Front matter ─────────────────────────────────────────────
    let (body, front_matter_stripped) = match frontmatter::front_matter_end(text) {
        Some(end) => (&text[end..], true),
        None => (text, false),
    };

    // ── Step 3: Notation ─────────────────────────────────────────────────
    let sanitized = sanitize::sanitize_notation(body);

    // ── Step 4: Classify and render ──────────────────────────────────────
    let rendered = render::render_lines(&sanitized, config.strip_footer);

    // ── Step 5: Citation ─────────────────────────────────────────────────
    let html = match config.citation.as_deref() {
        Some(c) => citation::append_citation(&rendered.html, c),
        None => rendered.html,
    };

    debug!(
        "Converted {:?}: {} lines in, {} emitted, front matter {}",
        config.kind,
        rendered.input_lines,
        rendered.emitted_lines,
        if front_matter_stripped { "stripped" } else { "absent" }
    );

    ConversionOutput {
        html,
        stats: ConversionStats {
            input_lines: rendered.input_lines,
            emitted_lines: rendered.emitted_lines,
            footer_lines_removed: rendered.footer_lines_removed,
            front_matter_stripped,
            solution_heading_stripped,
        },
    }
}

/// Read a QMD file and convert it.
///
/// # Errors
/// Returns `Err(QmdError)` when the file cannot be read as UTF-8 text. The
/// conversion itself cannot fail.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, QmdError> {
    let path = path.as_ref();
    info!("Converting {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|e| QmdError::from_read(path, e))?;
    Ok(convert(&text, config))
}

/// Convert a QMD file and write the HTML fragment to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, QmdError> {
    let output = convert_file(input_path, config)?;
    let path = output_path.as_ref();
    write_atomic(path, &output.html)?;
    info!("Wrote {} ({} bytes)", path.display(), output.html.len());
    Ok(output.stats)
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
///
/// Missing parent directories are created first.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), QmdError> {
    let write_err = |e| QmdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, contents).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_pipeline_order() {
        let input = "---\ntitle: \"t\"\n---\n# 第1問\n\\hspace{1zw}$x<1$\n\n---\n元問題 PDF: [open](a.pdf)\n";
        let out = convert(input, &ConversionConfig::default());
        assert_eq!(out.html, "<h1>第1問</h1>\n\\quad$x&lt;1$\n");
        assert!(out.stats.front_matter_stripped);
        assert!(!out.stats.solution_heading_stripped);
        assert_eq!(out.stats.footer_lines_removed, 2);
    }

    #[test]
    fn test_solution_heading_before_front_matter() {
        // A heading ahead of the YAML means the YAML is no longer on line 1.
        let input = "## 解答\n---\na: 1\n---\nA";
        let config = ConversionConfig::builder()
            .kind(DocumentKind::Solution)
            .build()
            .unwrap();
        let out = convert(input, &config);
        assert_eq!(out.html, "A");
        assert!(out.stats.solution_heading_stripped);
        assert!(out.stats.front_matter_stripped);
    }

    #[test]
    fn test_problem_kind_keeps_solution_heading() {
        assert_eq!(convert_problem("## 解答\nA"), "<h2>解答</h2>\nA");
    }

    #[test]
    fn test_citation_from_config() {
        let config = ConversionConfig::builder().citation("A & B").build().unwrap();
        let out = convert("x", &config);
        assert_eq!(out.html, "x\n\n<div class=\"citation\">A &amp; B</div>");
    }

    #[test]
    fn test_footer_kept_when_disabled() {
        let config = ConversionConfig::builder().strip_footer(false).build().unwrap();
        let out = convert("x\n元問題 PDF: [o](a)", &config);
        assert_eq!(out.stats.footer_lines_removed, 0);
        assert!(out.html.contains("元問題 PDF:"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(convert_problem(""), "");
        assert_eq!(convert_solution(""), "");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.html");
        write_atomic(&path, "<p>x</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>");
        assert!(!path.with_extension("html.tmp").exists());
    }

    #[test]
    fn test_write_atomic_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/abc_handout.qmd");
        write_atomic(&path, "---\n---\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "---\n---\n");
        assert!(!dir.path().join("a/b/abc_handout.qmd.tmp").exists());
    }
}
