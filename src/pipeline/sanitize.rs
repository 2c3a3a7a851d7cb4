//! Notation sanitising: targeted rewrites of TeX the typesetter rejects.
//!
//! OCR output for Japanese exam problems regularly contains two constructs
//! that break client-side math typesetting:
//!
//! - `\hspace{1zw}`: a full-width (zenkaku) space. The `zw` unit only exists
//!   in Japanese TeX engines, so it is replaced with `\quad`.
//! - `bmatrix` rows separated by blank lines instead of `\\`. Inside a
//!   matrix block every run of two or more newlines becomes `\\` plus a
//!   single newline.
//!
//! The two rules are independent of each other and of order. Matrix blocks
//! are matched non-greedily (the first `\end{bmatrix}` closes the block) and
//! do not nest. An opening marker without a closing one is left untouched.

use super::normalise;
use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};
use tracing::debug;

/// Apply both notation rewrites.
pub fn sanitize_notation(input: &str) -> String {
    let text = normalise(input);
    let s = replace_zw_spacing(&text);
    terminate_matrix_rows(&s)
}

// ── Rule 1: Full-width spacing ───────────────────────────────────────────────

static RE_ZW_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\hspace\*?\{\s*1\s*zw\s*\}").unwrap());

/// Replace `\hspace{1zw}` (and `\hspace*{1zw}`) with `\quad`.
pub fn replace_zw_spacing(input: &str) -> String {
    RE_ZW_SPACE.replace_all(input, NoExpand(r"\quad")).into_owned()
}

// ── Rule 2: Matrix row terminators ───────────────────────────────────────────

static RE_BMATRIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{bmatrix\}.*?\\end\{bmatrix\}").unwrap());

static RE_BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Turn blank-line row separators inside `bmatrix` blocks into `\\`.
pub fn terminate_matrix_rows(input: &str) -> String {
    let mut rewritten = 0usize;
    let out = RE_BMATRIX.replace_all(input, |caps: &Captures<'_>| {
        let block = &caps[0];
        if RE_BLANK_RUN.is_match(block) {
            rewritten += 1;
        }
        RE_BLANK_RUN
            .replace_all(block, NoExpand("\\\\\n"))
            .into_owned()
    });
    if rewritten > 0 {
        debug!("Terminated blank-line rows in {} matrix block(s)", rewritten);
    }
    out.into_owned()
}
