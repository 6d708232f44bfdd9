//! Whitespace tokenizer over buffered input.
//!
//! Commands are bare tokens and their arguments may span lines. Integer
//! reads are non-consuming on failure: the offending token stays queued and
//! gets interpreted as the next command word.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Pulls whitespace-separated tokens out of a reader, one line at a time.
pub struct TokenStream<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read lines until at least one token is queued. Returns false at end
    /// of input.
    fn refill(&mut self) -> io::Result<bool> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.refill()? {
            return Ok(None);
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `i32`. A token that is not an integer is left in
    /// place and `None` is returned.
    pub fn next_int(&mut self) -> io::Result<Option<i32>> {
        if !self.refill()? {
            return Ok(None);
        }
        match self.pending.front().and_then(|t| t.parse().ok()) {
            Some(value) => {
                self.pending.pop_front();
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
