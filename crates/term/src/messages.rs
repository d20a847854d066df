//! Fixed user-facing strings for the interactive shell.

/// Prompt printed before every read.
pub const PROMPT: &str = "Enter keypad input to decode (or enter X to exit): ";

/// Label prefixed to each successfully decoded result.
pub const RESULT_LABEL: &str = "Decoded Result:";

/// Fallback for failures other than a rejected input.
pub const DECODE_FAILURE: &str = "Something went wrong while decoding. Please try again.";
