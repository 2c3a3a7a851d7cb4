//! # qmd2html
//!
//! Convert QMD documents (YAML front matter + a restricted Markdown/TeX
//! body) into sanitised HTML fragments for pages that typeset math on the
//! client.
//!
//! ## Why this crate?
//!
//! Exam problems arrive as OCR output and solutions as generated text. Both
//! use a small, predictable subset of Markdown and TeX, plus a few OCR
//! artefacts (`\hspace{1zw}`, matrices with blank-line rows) that the
//! browser-side typesetter rejects. A general Markdown renderer would
//! interpret `<` inside `$...$` as markup and mangle the math. This crate
//! classifies each line by shape, escapes everything that is not a
//! recognised shape, and leaves the TeX for the typesetter.
//!
//! ## Pipeline Overview
//!
//! ```text
//! QMD
//!  │
//!  ├─ 1. Solution   drop the leading "## 解答" heading (solutions only)
//!  ├─ 2. Strip      remove the leading --- YAML --- block
//!  ├─ 3. Sanitise   \hspace{1zw} → \quad, bmatrix blank rows → \\
//!  ├─ 4. Filter     remove the "元問題 PDF:" source-link footer
//!  ├─ 5. Render     classify each line, emit HTML, join with newlines
//!  └─ 6. Cite       optionally append an escaped citation block
//! ```
//!
//! Every stage is a pure function; no stage can fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use qmd2html::{append_citation, convert_problem, convert_solution};
//!
//! let html = convert_problem("---\ntitle: \"q1\"\n---\n# 第1問\n$x<5/2$ を示せ。");
//! assert_eq!(html, "<h1>第1問</h1>\n$x&lt;5/2$ を示せ。");
//!
//! let html = convert_solution("## 解答\n\n$x = 1$");
//! let html = append_citation(&html, "東京大学 1961年");
//! assert!(html.ends_with("<div class=\"citation\">東京大学 1961年</div>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `qmd2html` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod handout;
pub mod metadata;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DocumentKind};
pub use convert::{convert, convert_file, convert_problem, convert_solution, convert_to_file};
pub use error::QmdError;
pub use handout::build_handout;
pub use metadata::{
    add_fields, assign_problem_number, normalize_university_labels, reorder_problem_number,
};
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::citation::append_citation;
pub use pipeline::escape::escape_html;
pub use pipeline::frontmatter::{split_front_matter, strip_front_matter, FrontMatter};
pub use pipeline::sanitize::sanitize_notation;
pub use pipeline::solution::strip_solution_heading;
