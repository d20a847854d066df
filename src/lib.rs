//! Multi-tap keypad decoder (workspace facade crate).
//!
//! This package keeps the `multitap::{core,term,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use multitap_core as core;
pub use multitap_term as term;
pub use multitap_types as types;
