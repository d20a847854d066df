//! Terminal shell module.
//!
//! A small, line-oriented front end for the decoder. It intentionally does
//! nothing clever with the terminal: print a prompt, read a line, decode,
//! print the outcome, repeat.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Make the loop itself testable by running it over any reader/writer
//! - Confine styling to this crate, off by default

pub mod messages;
pub mod shell;

pub use multitap_core as core;

pub use shell::{should_exit, Shell, EXIT_COMMAND};
