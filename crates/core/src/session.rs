//! Session module - per-call decode state
//!
//! A [`DecodeSession`] holds the state the decode loop threads through one
//! pass over the input: the output buffer, the digit whose presses are
//! still being counted, and that press count. One session lives for one
//! decode call and is consumed by [`DecodeSession::finish`].
//!
//! Invariant: `presses >= 1` exactly while a pending key is set.

use crate::keymap;

/// Accumulator for one decode pass.
#[derive(Debug, Default)]
pub struct DecodeSession {
    output: String,
    pending: Option<char>,
    presses: usize,
}

impl DecodeSession {
    /// Create an empty session with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press of `key`.
    ///
    /// A repeat of the pending key extends its press run; any other key
    /// commits the pending run first and starts a new one.
    pub fn press(&mut self, key: char) {
        if self.pending == Some(key) {
            self.presses += 1;
        } else {
            self.flush();
            self.pending = Some(key);
            self.presses = 1;
        }
    }

    /// Commit the pending key without starting a new one.
    pub fn pause(&mut self) {
        self.flush();
    }

    /// Commit the pending key, then delete the newest output character.
    ///
    /// Deleting from an empty buffer is a no-op.
    pub fn backspace(&mut self) {
        self.flush();
        self.output.pop();
    }

    /// Commit the pending key and return the decoded text.
    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    /// Resolve the pending press run to a character.
    ///
    /// Press counts beyond the candidate list wrap back to its start.
    fn flush(&mut self) {
        if let Some(key) = self.pending.take() {
            if let Some(letters) = keymap::candidates(key) {
                let index = (self.presses - 1) % letters.len();
                self.output.push(letters[index]);
            }
            self.presses = 0;
        }
    }
}
