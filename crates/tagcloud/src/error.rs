//! Fatal errors and non-fatal warnings surfaced by a run.

use std::path::PathBuf;

/// A failure that aborts the run before any output is written.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CloudError {
    /// The text source could not be opened.
    #[error("cannot open input {}", .path.display())]
    #[diagnostic(
        code(tagcloud::input),
        help("check that the path names a readable file, or pass `-` to read stdin")
    )]
    InputUnavailable {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The requested word count is not a non-negative whole number.
    #[error("invalid word count {value:?}")]
    #[diagnostic(
        code(tagcloud::word_count),
        help("pass a whole number such as `-n 50`")
    )]
    InvalidCount {
        /// The rejected argument.
        value: String,
    },

    /// The rendered cloud could not be written.
    #[error("cannot write output to {target}")]
    #[diagnostic(code(tagcloud::output))]
    Output {
        /// Output path, or `stdout`.
        target: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The cloud could not be rendered into the requested format.
    #[error("cannot render the cloud")]
    #[diagnostic(code(tagcloud::render))]
    Render {
        /// Underlying renderer error.
        #[source]
        source: std::io::Error,
    },
}

/// [`CloudError::Output`] target used when writing to standard output.
pub const STDOUT_TARGET: &str = "stdout";

impl CloudError {
    /// Process exit status for this failure (sysexits conventions).
    #[must_use]
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::InputUnavailable { .. } => exitcode::NOINPUT,
            Self::InvalidCount { .. } => exitcode::USAGE,
            Self::Output { target, .. } if target == STDOUT_TARGET => exitcode::IOERR,
            Self::Output { .. } => exitcode::CANTCREAT,
            Self::Render { .. } => exitcode::SOFTWARE,
        }
    }
}

/// Fewer distinct words exist than were requested; the cloud uses all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("only {available} distinct words found, fewer than the {requested} requested")]
#[diagnostic(
    code(tagcloud::too_few_words),
    severity(Warning),
    help("the cloud contains every distinct word")
)]
pub struct TooFewWords {
    /// Size asked for.
    pub requested: usize,
    /// Distinct words in the document.
    pub available: usize,
}

/// Reading the source failed part-way; words read before the failure are kept.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("stopped reading input after {lines_read} lines")]
#[diagnostic(code(tagcloud::read_interrupted), severity(Warning))]
pub struct ReadInterrupted {
    /// Lines counted before the failure.
    pub lines_read: usize,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_failures() {
        let missing = CloudError::InputUnavailable {
            path: "nope.txt".into(),
            source: std::io::ErrorKind::NotFound.into(),
        };
        let bad_count = CloudError::InvalidCount {
            value: "ten".to_string(),
        };
        assert_eq!(missing.exit_code(), exitcode::NOINPUT);
        assert_eq!(bad_count.exit_code(), exitcode::USAGE);
        assert_ne!(missing.exit_code(), bad_count.exit_code());
    }

    #[test]
    fn stdout_failure_is_an_io_error_not_a_create_error() {
        let broken_stdout = CloudError::Output {
            target: STDOUT_TARGET.to_string(),
            source: std::io::ErrorKind::BrokenPipe.into(),
        };
        let unwritable_file = CloudError::Output {
            target: "out/cloud.html".to_string(),
            source: std::io::ErrorKind::PermissionDenied.into(),
        };
        assert_eq!(broken_stdout.exit_code(), exitcode::IOERR);
        assert_eq!(broken_stdout.to_string(), "cannot write output to stdout");
        assert_eq!(unwritable_file.exit_code(), exitcode::CANTCREAT);
    }

    #[test]
    fn render_failure_is_an_internal_error() {
        let err = CloudError::Render {
            source: std::io::Error::other("serialiser failed"),
        };
        assert_eq!(err.exit_code(), exitcode::SOFTWARE);
    }

    #[test]
    fn input_error_names_the_path() {
        let err = CloudError::InputUnavailable {
            path: "docs/story.txt".into(),
            source: std::io::ErrorKind::NotFound.into(),
        };
        assert_eq!(err.to_string(), "cannot open input docs/story.txt");
    }

    #[test]
    fn too_few_words_is_a_warning() {
        use miette::Diagnostic as _;
        let warning = TooFewWords {
            requested: 10,
            available: 3,
        };
        assert_eq!(warning.severity(), Some(miette::Severity::Warning));
        assert!(warning.to_string().contains("only 3 distinct words"));
    }
}
