//! Core decoding module - pure, deterministic, and testable
//!
//! This module contains the complete multi-tap decoding logic. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same sequence always decodes to the same text
//! - **Testable**: every transition of the state machine is unit tested
//! - **Thread-safe**: each call owns its session state and the key map is
//!   a read-only static table, so concurrent calls need no locking
//!
//! # Module Structure
//!
//! - [`keymap`]: fixed digit → candidate-letter table
//! - [`session`]: per-call decode state (output buffer, pending key, count)
//! - [`decoder`]: input validation and the single-pass decode loop
//! - [`error`]: the decoder's error type
//!
//! # Example
//!
//! ```
//! use multitap_core::decode;
//!
//! assert_eq!(decode("4433555 555666#").unwrap(), "HELLO");
//! assert_eq!(decode("8 88777444666*664#").unwrap(), "TURING");
//! assert!(decode("no terminator").is_err());
//! ```

pub mod decoder;
pub mod error;
pub mod keymap;
pub mod session;

pub use multitap_types as types;

// Re-export commonly used items for convenience
pub use decoder::decode;
pub use error::DecodeError;
pub use keymap::candidates;
pub use session::DecodeSession;
