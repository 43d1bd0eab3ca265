//! Opening the document to be counted.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::CloudError;

/// Path argument that selects standard input.
pub const STDIN: &str = "-";

/// Open `path` for line-by-line reading (`-` reads stdin).
///
/// Directories are rejected up front instead of failing on the first read.
pub fn open_source(path: &Path) -> Result<Box<dyn BufRead>, CloudError> {
    if path.as_os_str() == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }

    let unavailable = |source: io::Error| CloudError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(unavailable(io::ErrorKind::IsADirectory.into()));
    }
    let file = File::open(path).map_err(unavailable)?;
    Ok(Box::new(BufReader::new(file)))
}

/// Human-readable name of the source for headings.
#[must_use]
pub fn source_label(path: &Path) -> String {
    if path.as_os_str() == STDIN {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}
