//! Rendering a finished cloud as an HTML page, a JSON document, or a text table.

mod format;
mod html;

pub use format::{escape_html, format_number};
use format::format_word_cell;

use std::io::Write;

use serde::Serialize;

use crate::cloud::{Cloud, CloudEntry};

/// Stylesheet linked from generated pages unless overridden.
pub const DEFAULT_STYLESHEET: &str = "doc/tagcloud.css";

/// Which renderer to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// A standalone HTML page with one styled `<span>` per word.
    #[default]
    Html,
    /// A JSON document listing every entry.
    Json,
    /// An aligned plain-text table.
    Text,
}

/// Rendering configuration derived from CLI flags.
pub struct OutputOptions {
    /// Renderer to use.
    pub format: OutputFormat,
    /// When `true`, emit ANSI color codes (text format only).
    pub color: bool,
    /// `href` of the stylesheet linked from HTML output.
    pub stylesheet: String,
    /// Inline the tier font sizes instead of linking `stylesheet`.
    pub embed_style: bool,
}

impl OutputOptions {
    /// Create a new output configuration from CLI flags.
    #[must_use]
    pub fn new(
        format: OutputFormat,
        no_color: bool,
        stylesheet: String,
        embed_style: bool,
    ) -> Self {
        let color = !no_color && std::env::var("NO_COLOR").is_err() && {
            use std::io::IsTerminal;
            std::io::stdout().is_terminal()
        };
        Self {
            format,
            color,
            stylesheet,
            embed_style,
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            color: false,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            embed_style: false,
        }
    }
}

// ─── Public entry point ───────────────────────────────────────────────────────

/// Write `cloud`, read from the source named `source`, to `out`.
pub fn write_output(
    out: &mut dyn Write,
    source: &str,
    cloud: &Cloud,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    match opts.format {
        OutputFormat::Html => html::write_html(out, source, cloud, opts),
        OutputFormat::Json => write_json(out, source, cloud),
        OutputFormat::Text => write_text(out, source, cloud, opts),
    }
}

/// Heading shared by every format.
fn heading(source: &str, cloud: &Cloud) -> String {
    format!("Top {} words in {source}", cloud.requested)
}

// ─── JSON mode ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonCloud<'a> {
    source: &'a str,
    requested: usize,
    available: usize,
    occurrences: usize,
    min_count: Option<usize>,
    max_count: Option<usize>,
    words: &'a [CloudEntry],
}

fn write_json(out: &mut dyn Write, source: &str, cloud: &Cloud) -> std::io::Result<()> {
    let doc = JsonCloud {
        source,
        requested: cloud.requested,
        available: cloud.available,
        occurrences: cloud.occurrences,
        min_count: cloud.min_count(),
        max_count: cloud.max_count(),
        words: &cloud.entries,
    };
    let json_str =
        serde_json::to_string_pretty(&doc).map_err(|e| std::io::Error::other(e.to_string()))?;
    writeln!(out, "{json_str}")
}

// ─── Text mode ────────────────────────────────────────────────────────────────

fn write_text(
    out: &mut dyn Write,
    source: &str,
    cloud: &Cloud,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    writeln!(out, "{}", heading(source, cloud))?;
    let (Some(min), Some(max)) = (cloud.min_count(), cloud.max_count()) else {
        return Ok(());
    };
    writeln!(
        out,
        "{} distinct of {} words; selected counts {} to {}",
        format_number(cloud.available),
        format_number(cloud.occurrences),
        format_number(min),
        format_number(max)
    )?;

    let word_w = cloud
        .entries
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max(4); // at least wide enough for "WORD"
    let counts: Vec<String> = cloud
        .entries
        .iter()
        .map(|e| format_number(e.count))
        .collect();
    let count_w = counts.iter().map(String::len).max().unwrap_or(0).max(5);

    writeln!(out, "\n{:<word_w$}  {:>count_w$}  TIER", "WORD", "COUNT")?;
    for (entry, count) in cloud.entries.iter().zip(&counts) {
        let word = format_word_cell(&entry.word, word_w, opts.color);
        writeln!(out, "{word}  {count:>count_w$}  {:>4}", entry.tier)?;
    }
    Ok(())
}
