//! Decoder module - validation and the single-pass decode loop
//!
//! Decoding is a single left-to-right scan with no lookahead: a run of
//! identical digit presses resolves only when an interrupting character
//! (different digit, pause, backspace, or terminator) is seen. This is the
//! deterministic substitute for the timeout between key presses on a real
//! handset.

use multitap_types::{Keypress, TERMINATOR};

use crate::error::DecodeError;
use crate::session::DecodeSession;

/// Decode a multi-tap keypad sequence into the text it spells.
///
/// The input must consist of digits, spaces, and `*` ahead of a trailing
/// `#`; anything else fails with [`DecodeError::InvalidInputFormat`].
/// Characters after the first terminator are ignored.
///
/// # Examples
///
/// ```
/// use multitap_core::{decode, DecodeError};
///
/// assert_eq!(decode("222#").unwrap(), "C");
/// assert_eq!(decode("2 2#").unwrap(), "AA");
/// assert_eq!(decode("227*#").unwrap(), "B");
/// assert_eq!(decode("2!2#"), Err(DecodeError::InvalidInputFormat));
/// ```
pub fn decode(input: &str) -> Result<String, DecodeError> {
    if !is_valid(input) {
        return Err(DecodeError::InvalidInputFormat);
    }

    let mut session = DecodeSession::new();
    for press in input.chars().map_while(Keypress::from_char) {
        match press {
            Keypress::Terminator => break,
            Keypress::Pause => session.pause(),
            Keypress::Backspace => session.backspace(),
            Keypress::Digit(key) => session.press(key),
        }
    }

    Ok(session.finish())
}

/// The validity predicate: non-blank, `#`-terminated, and nothing but
/// digits, spaces, and `*` ahead of the terminator.
fn is_valid(input: &str) -> bool {
    if input.trim().is_empty() || !input.ends_with(TERMINATOR) {
        return false;
    }

    let presses = &input[..input.len() - TERMINATOR.len_utf8()];
    presses.chars().all(|c| {
        matches!(
            Keypress::from_char(c),
            Some(Keypress::Digit(_) | Keypress::Pause | Keypress::Backspace)
        )
    })
}
