//! Configuration types for QMD-to-HTML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The pipeline stages themselves take
//! no options; the config only selects which stages run and what trails the
//! output.

use crate::error::QmdError;
use serde::{Deserialize, Serialize};

/// Configuration for a QMD-to-HTML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use qmd2html::{ConversionConfig, DocumentKind};
///
/// let config = ConversionConfig::builder()
///     .kind(DocumentKind::Solution)
///     .citation("東京大学 1961年 第1問")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Problem or solution document. Default: [`DocumentKind::Problem`].
    ///
    /// Solutions additionally lose their leading `## 解答` heading.
    pub kind: DocumentKind,

    /// Citation appended as a trailing `<div class="citation">`. Default: None.
    pub citation: Option<String>,

    /// Remove the `元問題 PDF:` / `元問題スキャン:` source-link footer. Default: true.
    pub strip_footer: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            kind: DocumentKind::default(),
            citation: None,
            strip_footer: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.config.kind = kind;
        self
    }

    pub fn citation(mut self, citation: impl Into<String>) -> Self {
        self.config.citation = Some(citation.into());
        self
    }

    pub fn strip_footer(mut self, v: bool) -> Self {
        self.config.strip_footer = v;
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// A blank citation is dropped; a multi-line citation is rejected.
    pub fn build(mut self) -> Result<ConversionConfig, QmdError> {
        let citation = self.config.citation.take().filter(|c| !c.trim().is_empty());
        if citation.as_deref().is_some_and(|c| c.trim().contains('\n')) {
            return Err(QmdError::InvalidConfig(
                "citation must be a single line".into(),
            ));
        }
        self.config.citation = citation;
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which kind of QMD document is being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// OCR'd problem statement. (default)
    #[default]
    Problem,
    /// Generated model solution, opening with `## 解答`.
    Solution,
}
