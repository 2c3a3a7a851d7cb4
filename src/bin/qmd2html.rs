//! CLI binary for qmd2html.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use qmd2html::convert::write_atomic;
use qmd2html::{
    assign_problem_number, build_handout, convert, ConversionConfig, ConversionOutput,
    DocumentKind,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Problem preview fragment (stdout)
  qmd2html problems/abc123.qmd

  # Solution fragment with a citation block, written to a file
  qmd2html --solution --citation "東京大学 1961年 第1問" solutions/abc123_solution.qmd -o out.html

  # Read from stdin
  cat problem.qmd | qmd2html -

  # Fragment plus conversion stats as JSON
  qmd2html --json problems/abc123.qmd

  # Combined problem + solution handout QMD for the document renderer
  qmd2html problems/abc123.qmd --handout solutions/abc123_solution.qmd -o output/abc123_handout.qmd

  # Move a leading problem number into the front matter
  qmd2html --assign-number problems/abc123.qmd

ENVIRONMENT VARIABLES:
  RUST_LOG             Overrides the log filter (e.g. RUST_LOG=qmd2html=debug)
  QMD2HTML_OUTPUT      Default for --output
  QMD2HTML_CITATION    Default for --citation
"#;

/// Convert QMD problem and solution documents to HTML fragments.
#[derive(Parser, Debug)]
#[command(
    name = "qmd2html",
    version,
    about = "Convert QMD problem and solution documents to HTML fragments",
    long_about = "Convert QMD documents (YAML front matter + restricted Markdown/TeX) into \
sanitised HTML fragments for pages that typeset math on the client. Front matter and \
source-link footers are removed; TeX is escaped but otherwise left for the typesetter.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// QMD file to convert, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "QMD2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Treat the input as a solution (drops a leading `## 解答` heading).
    #[arg(long, env = "QMD2HTML_SOLUTION")]
    solution: bool,

    /// Append this citation as a trailing block.
    #[arg(long, env = "QMD2HTML_CITATION")]
    citation: Option<String>,

    /// Keep the `元問題 PDF:` / `元問題スキャン:` footer lines.
    #[arg(long, env = "QMD2HTML_KEEP_FOOTER")]
    keep_footer: bool,

    /// Output structured JSON (ConversionOutput) instead of bare HTML.
    #[arg(long, env = "QMD2HTML_JSON", conflicts_with_all = ["handout", "assign_number"])]
    json: bool,

    /// Emit a combined handout QMD using this solution file instead of HTML.
    #[arg(long, value_name = "SOLUTION_QMD", conflicts_with = "assign_number")]
    handout: Option<PathBuf>,

    /// Emit the input QMD with its leading problem number moved into the front matter.
    #[arg(long)]
    assign_number: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "QMD2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "QMD2HTML_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let input = read_input(&cli.input)?;

    // ── Handout mode ─────────────────────────────────────────────────────
    if let Some(ref solution_path) = cli.handout {
        let solution = std::fs::read_to_string(solution_path)
            .with_context(|| format!("Failed to read solution from {:?}", solution_path))?;
        return emit(&build_handout(&input, &solution), cli.output.as_deref());
    }

    // ── Problem-number mode ──────────────────────────────────────────────
    if cli.assign_number {
        let updated = match assign_problem_number(&input) {
            Some(updated) => updated,
            None => {
                if !cli.quiet {
                    eprintln!("No leading problem number found; input unchanged");
                }
                input
            }
        };
        return emit(&updated, cli.output.as_deref());
    }

    // ── Conversion ───────────────────────────────────────────────────────
    let config = build_config(&cli)?;
    let output = convert(&input, &config);

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        emit(&json, cli.output.as_deref())?;
    } else {
        emit(&output.html, cli.output.as_deref())?;
    }

    if !cli.quiet && cli.output.is_some() {
        print_summary(&output);
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let kind = if cli.solution {
        DocumentKind::Solution
    } else {
        DocumentKind::Problem
    };

    let mut builder = ConversionConfig::builder()
        .kind(kind)
        .strip_footer(!cli.keep_footer);
    if let Some(ref citation) = cli.citation {
        builder = builder.citation(citation.clone());
    }

    builder.build().context("Invalid configuration")
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {:?}", input))
    }
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_atomic(path, text)
            .with_context(|| format!("Failed to write output file {:?}", path)),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !text.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
            Ok(())
        }
    }
}

fn print_summary(output: &ConversionOutput) {
    let s = &output.stats;
    eprintln!(
        "Converted {} lines → {} elements ({} footer lines removed{}{})",
        s.input_lines,
        s.emitted_lines,
        s.footer_lines_removed,
        if s.front_matter_stripped {
            ", front matter stripped"
        } else {
            ""
        },
        if s.solution_heading_stripped {
            ", solution heading stripped"
        } else {
            ""
        },
    );
}
