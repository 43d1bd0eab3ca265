//! tagcloud — render the most frequent words of a document as a tag cloud.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use tagcloud::error::STDOUT_TARGET;
use tagcloud::output::{DEFAULT_STYLESHEET, OutputFormat, OutputOptions};
use tagcloud::{CloudError, cloud, count, output, source};

// ─── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "tagcloud",
    about = "Render the most frequent words of a document as a tag cloud",
    version
)]
struct Cli {
    /// Text file to read (`-` for stdin).
    input: PathBuf,

    /// Number of words to include in the cloud.
    #[arg(short = 'n', long = "words", value_name = "N", env = "TAGCLOUD_WORDS")]
    words: String,

    /// Write the cloud to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Stylesheet linked from the HTML page.
    #[arg(long, value_name = "HREF", default_value = DEFAULT_STYLESHEET)]
    stylesheet: String,

    /// Inline the font-size rules instead of linking a stylesheet.
    #[arg(long, conflicts_with = "stylesheet")]
    embed_style: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn exit_with(err: CloudError) -> ! {
    let code = err.exit_code();
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(code);
}

fn warn(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) {
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Validate everything up front so a failed run leaves no output behind.
    let requested = cloud::parse_word_count(&cli.words).unwrap_or_else(|e| exit_with(e));
    let reader = source::open_source(&cli.input).unwrap_or_else(|e| exit_with(e));

    let scan = count::scan(reader);
    if let Some(interrupted) = scan.interrupted {
        warn(interrupted);
    }

    let cloud = cloud::build_cloud(&scan.freqs, requested);
    if let Some(shortfall) = cloud.shortfall() {
        warn(shortfall);
    }

    let out_opts = OutputOptions::new(
        cli.format,
        cli.no_color || cli.output.is_some(),
        cli.stylesheet,
        cli.embed_style,
    );
    let label = source::source_label(&cli.input);

    let mut rendered: Vec<u8> = Vec::new();
    if let Err(source) = output::write_output(&mut rendered, &label, &cloud, &out_opts) {
        exit_with(CloudError::Render { source });
    }

    match &cli.output {
        Some(path) => {
            if let Err(source) = std::fs::write(path, &rendered) {
                exit_with(CloudError::Output {
                    target: path.display().to_string(),
                    source,
                });
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(source) = out.write_all(&rendered).and_then(|()| out.flush()) {
                exit_with(CloudError::Output {
                    target: STDOUT_TARGET.to_string(),
                    source,
                });
            }
        }
    }
}
