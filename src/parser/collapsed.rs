//! Parse collapsed-stack profiles.
//!
//! Format: "outer;middle;leaf count", one stack per line, as produced by
//! async-profiler `collapsed` output or `stackcollapse-*.pl`.
//!
//! Example: "main;run;Cipher.encrypt 42"
//! This means: 42 samples were taken while main -> run -> Cipher.encrypt was on CPU.

use crate::utils::error::AnalyzeError;
use log::debug;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A single parsed stack line
///
/// Frames borrow from the line they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLine<'a> {
    /// Frames ordered caller first, leaf last
    pub frames: Vec<&'a str>,

    /// Samples attributed to this exact stack
    pub count: u128,
}

impl<'a> StackLine<'a> {
    /// Innermost frame of the stack
    pub fn leaf(&self) -> &'a str {
        // parse_line never builds an empty frame list
        self.frames.last().copied().unwrap_or_default()
    }
}

/// Parse one collapsed-stack line
///
/// **Public** - main entry point for line parsing
///
/// # Returns
/// `None` for blank lines and for malformed records: no space separator,
/// a count that is not a non-negative integer, or an empty frame list.
pub fn parse_line(line: &str) -> Option<StackLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // Only the final token is the count; frame names may not contain spaces
    let (stack, count) = line.rsplit_once(' ')?;
    let count = count.parse::<u128>().ok()?;

    let frames: Vec<&str> = stack.split(';').collect();
    if frames.is_empty() {
        return None;
    }

    Some(StackLine { frames, count })
}

/// Line iterator over a collapsed-stack source
///
/// `\n`, `\r\n` and a bare `\r` all end a line; yielded lines carry no
/// terminator. Invalid UTF-8 is replaced rather than rejected, so profiles
/// with mangled native symbols still load. I/O errors are yielded to the caller.
pub struct CollapsedReader<R> {
    inner: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> CollapsedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Split the chunk in `buf` into lines on bare `\r`
    fn split_chunk(&mut self) {
        let mut chunk: &[u8] = &self.buf;
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest.strip_suffix(b"\r").unwrap_or(rest);
        } else if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }

        for piece in chunk.split(|&b| b == b'\r') {
            self.pending
                .push_back(String::from_utf8_lossy(piece).into_owned());
        }
    }
}

impl<R: BufRead> Iterator for CollapsedReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.split_chunk(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Open a collapsed-stack file for reading
///
/// **Public** - used by the analyze command
///
/// # Errors
/// * `AnalyzeError::FileNotFound` - path does not exist
/// * `AnalyzeError::ReadFailed` - file exists but cannot be opened
pub fn open_collapsed(
    path: impl AsRef<Path>,
) -> Result<CollapsedReader<BufReader<File>>, AnalyzeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnalyzeError::FileNotFound(path.to_path_buf()));
    }

    debug!("Opening collapsed stacks: {}", path.display());
    let file = File::open(path)?;

    Ok(CollapsedReader::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let parsed = parse_line("a;b;c 10").unwrap();
        assert_eq!(parsed.frames, vec!["a", "b", "c"]);
        assert_eq!(parsed.count, 10);
        assert_eq!(parsed.leaf(), "c");
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let parsed = parse_line("  main;work 7\r\n").unwrap();
        assert_eq!(parsed.frames, vec!["main", "work"]);
        assert_eq!(parsed.count, 7);
    }

    #[test]
    fn test_parse_line_splits_on_last_space() {
        // Everything before the last space belongs to the stack
        let parsed = parse_line("a b;c 3").unwrap();
        assert_eq!(parsed.frames, vec!["a b", "c"]);
        assert_eq!(parsed.count, 3);
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("a;b;c notanumber").is_none());
        assert!(parse_line("a;b;c").is_none());
        assert!(parse_line("a;b;c -4").is_none());
        assert!(parse_line("a;b;c 1.5").is_none());
    }

    #[test]
    fn test_parse_line_single_frame() {
        let parsed = parse_line("idle 99").unwrap();
        assert_eq!(parsed.frames, vec!["idle"]);
        assert_eq!(parsed.leaf(), "idle");
    }

    #[test]
    fn test_reader_tolerates_invalid_utf8() {
        let data: &[u8] = b"a;b\xff;c 4\nd 1\n";
        let lines: Vec<String> = CollapsedReader::new(data)
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(lines.len(), 2);
        let parsed = parse_line(&lines[0]).unwrap();
        assert_eq!(parsed.count, 4);
        assert_eq!(parsed.frames.len(), 3);
        assert!(parsed.frames[1].starts_with('b'));
    }

    #[test]
    fn test_reader_last_line_without_newline() {
        let data: &[u8] = b"x;y 2";
        let lines: Vec<String> = CollapsedReader::new(data)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["x;y 2".to_string()]);
    }

    #[test]
    fn test_reader_line_endings() {
        let data: &[u8] = b"a;b 1\rc;d 2\r\ne;f 3\ng 4\r";
        let lines: Vec<String> = CollapsedReader::new(data)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a;b 1", "c;d 2", "e;f 3", "g 4"]);
    }

    #[test]
    fn test_parse_line_counts_beyond_u64() {
        let parsed = parse_line("a;b 18446744073709551616").unwrap();
        assert_eq!(parsed.count, u128::from(u64::MAX) + 1);
    }

    #[test]
    fn test_open_collapsed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.collapsed");

        match open_collapsed(&missing) {
            Err(AnalyzeError::FileNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }
}
