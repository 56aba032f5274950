//! Newline-delimited word lists fed into a [`WordFilter`].

use clap::ValueEnum;
use lexbloom_core::WordFilter;
use std::collections::HashSet;
use std::io::{self, BufRead};
use tracing::warn;

/// How lines are normalized before they reach the filter.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalize {
    /// Unicode lower-casing
    #[default]
    Lower,
    /// Bytes are used as-is
    None,
}

/// A loaded filter plus the exact word set it was built from.
pub struct Vocabulary {
    pub filter: WordFilter,
    pub words: HashSet<String>,
    pub skipped: usize,
    normalize: Normalize,
}

impl Vocabulary {
    pub fn new(filter: WordFilter, normalize: Normalize) -> Self {
        Self { filter, words: HashSet::new(), skipped: 0, normalize }
    }

    /// Inserts every non-empty line of `reader`; lines that are not UTF-8 are skipped.
    pub fn load<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let line = trim_eol(&buf);
            if line.is_empty() {
                continue;
            }
            if let Err(e) = self.add_line(line) {
                warn!(line = line_no, error = %e, "skipping word");
                self.skipped += 1;
            }
        }
        Ok(())
    }

    fn add_line(&mut self, line: &[u8]) -> lexbloom_core::Result<()> {
        match self.normalize {
            Normalize::Lower => {
                let word = std::str::from_utf8(line)?.to_lowercase();
                self.filter.insert(&word);
                self.words.insert(word);
            }
            Normalize::None => {
                self.filter.insert_raw(line)?;
                self.words.insert(String::from_utf8_lossy(line).into_owned());
            }
        }
        Ok(())
    }

    /// Filter answer for a query, normalized the same way the list was.
    pub fn lookup(&self, raw: &[u8]) -> lexbloom_core::Result<bool> {
        match self.normalize {
            Normalize::Lower => {
                let word = std::str::from_utf8(raw)?.to_lowercase();
                Ok(self.filter.query(&word))
            }
            Normalize::None => self.filter.query_raw(raw),
        }
    }

    /// Exact membership, for measuring false positives.
    pub fn contains_exact(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

pub fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
