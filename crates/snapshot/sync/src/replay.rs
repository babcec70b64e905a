//! Recorded snapshot streams: one JSON frame per line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::Result;

/// One non-blank line of a frame log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLine {
    /// 1-based line number in the log.
    pub number: usize,
    pub text: String,
}

/// Iterates the frames of a newline-delimited log, skipping blank lines.
pub struct FrameLog<R> {
    lines: Lines<R>,
    number: usize,
}

impl<R: BufRead> FrameLog<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }
}

impl FrameLog<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for FrameLog<R> {
    type Item = Result<FrameLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(error.into())),
            };
            self.number += 1;

            if !line.trim().is_empty() {
                return Some(Ok(FrameLine {
                    number: self.number,
                    text: line,
                }));
            }
        }
    }
}
