// src/core/scanner.rs

use std::io::BufRead;
use std::str::FromStr;
use std::collections::VecDeque;
use log::trace;
use crate::core::errors::NumUtilError;

/// Reads whitespace-delimited tokens from any buffered reader.
///
/// Lines are pulled lazily, so a token may sit on any line after the previous one.
pub struct Scanner<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, NumUtilError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| NumUtilError::MalformedInput(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Parses the next token as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T, NumUtilError> {
        let token = self
            .next_token()?
            .ok_or_else(|| NumUtilError::MalformedInput("unexpected end of input".to_string()))?;
        trace!("scanner token: {}", token);
        token
            .parse::<T>()
            .map_err(|_| NumUtilError::MalformedInput(format!("cannot parse token '{}'", token)))
    }

    pub fn next_vec<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>, NumUtilError> {
        (0..count).map(|_| self.next()).collect()
    }
}
