//! Key map module - the fixed multi-tap keypad layout
//!
//! Standard layout of the old numeric-keypad phones: each digit key carries
//! an ordered list of candidate characters, and repeated presses cycle
//! through them. The table is static and read-only; it is never rebuilt
//! per call and never mutated.

/// Candidate characters for a digit key, in press order.
///
/// Returns `None` for anything that is not an ASCII digit.
pub fn candidates(key: char) -> Option<&'static [char]> {
    match key {
        '0' => Some(&[' ']),
        '1' => Some(&['&', ',', '(']),
        '2' => Some(&['A', 'B', 'C']),
        '3' => Some(&['D', 'E', 'F']),
        '4' => Some(&['G', 'H', 'I']),
        '5' => Some(&['J', 'K', 'L']),
        '6' => Some(&['M', 'N', 'O']),
        '7' => Some(&['P', 'Q', 'R', 'S']),
        '8' => Some(&['T', 'U', 'V']),
        '9' => Some(&['W', 'X', 'Y', 'Z']),
        _ => None,
    }
}
