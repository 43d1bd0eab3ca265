//! Word frequency aggregation.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::ReadInterrupted;
use crate::tokenize;

/// Occurrence count of every distinct lowercased word in a document.
///
/// Built once per document and not modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, usize>,
}

impl FrequencyMap {
    /// Count the words of each line in `lines`.  Runs never cross lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for line in lines {
            tally(&mut counts, line.as_ref());
        }
        Self { counts }
    }

    /// Occurrences of `word`, if it appears at all.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the document contained no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word occurrences.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(word, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

impl FromIterator<String> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = String>>(words: T) -> Self {
        let mut counts = BTreeMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }
}

fn tally(counts: &mut BTreeMap<String, usize>, line: &str) {
    for word in tokenize::words(line) {
        *counts.entry(word).or_insert(0) += 1;
    }
}

/// Result of reading a whole document.
#[derive(Debug)]
pub struct Scan {
    /// Counts for every word read.
    pub freqs: FrequencyMap,
    /// Set when a read failed before the end of input.
    pub interrupted: Option<ReadInterrupted>,
}

/// Read `reader` line by line and count its words.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// ending the scan.  An I/O failure is not propagated: counting stops, the
/// words seen so far are kept, and the error is returned in
/// [`Scan::interrupted`].
pub fn scan<R: BufRead>(mut reader: R) -> Scan {
    let mut counts = BTreeMap::new();
    let mut interrupted = None;
    let mut buf = Vec::new();
    let mut lines_read = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(strip_line_ending(&buf));
                tally(&mut counts, &line);
                lines_read += 1;
            }
            Err(source) => {
                interrupted = Some(ReadInterrupted { lines_read, source });
                break;
            }
        }
    }

    Scan {
        freqs: FrequencyMap { counts },
        interrupted,
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
