//! Handout assembly: combine a problem and its solution into one QMD file.
//!
//! The handout is rendered by an external document tool, not by this crate,
//! so the result is QMD text with a fixed print-oriented YAML header and two
//! HTML sections. The problem's own metadata, the `---` separators and the
//! source-link footer are dropped; the solution is included as written.

use crate::pipeline::footer::is_footer_label;
use crate::pipeline::frontmatter::strip_front_matter;
use crate::pipeline::normalise;

/// YAML header shared by every handout.
pub const HANDOUT_YAML_HEADER: &str = "---
lang: ja
format:
  html:
    theme: default
    toc: false
    number-sections: false
    css: ../static/handout-print.css
---";

/// Build the combined handout QMD for a problem and its solution.
pub fn build_handout(problem_qmd: &str, solution_qmd: &str) -> String {
    let body = handout_problem_body(problem_qmd);
    let solution = normalise(solution_qmd);

    let parts = [
        HANDOUT_YAML_HEADER,
        "",
        "<div class=\"main-wrap\">",
        "",
        "<section id=\"problem-section\">",
        "# 問題",
        "",
        body.as_str(),
        "</section>",
        "",
        "<section id=\"solution-section\">",
        "# 解答",
        "",
        solution.trim(),
        "</section>",
        "",
        "</div>",
    ];
    let mut out = parts.join("\n");
    out.push('\n');
    out
}

/// Problem body with front matter, separators and footer labels removed.
fn handout_problem_body(problem_qmd: &str) -> String {
    let body = strip_front_matter(&normalise(problem_qmd));
    body.trim()
        .lines()
        .filter(|line| line.trim() != "---" && !is_footer_label(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
