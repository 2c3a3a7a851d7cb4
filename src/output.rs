//! Conversion result types.

use serde::{Deserialize, Serialize};

/// The HTML fragment plus what the pipeline did to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The HTML fragment, ready for a page that loads the math typesetter.
    pub html: String,
    pub stats: ConversionStats,
}

/// Counters collected during a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Body lines handed to the classifier stage, before footer removal.
    pub input_lines: usize,
    /// Lines that produced non-empty markup.
    pub emitted_lines: usize,
    /// Footer separator and label lines removed.
    pub footer_lines_removed: usize,
    pub front_matter_stripped: bool,
    pub solution_heading_stripped: bool,
}
