//! Shell tests - transcript behavior of the interactive loop

use std::io::Cursor;

use multitap::term::{messages, Shell};

/// Run an unstyled shell over `input` and return everything it printed.
fn transcript(input: &str) -> String {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    shell.run().expect("shell loop should not fail");
    String::from_utf8(shell.into_writer()).expect("shell output should be UTF-8")
}

#[test]
fn test_exit_command_ends_session() {
    assert_eq!(transcript("x\n"), messages::PROMPT);
    assert_eq!(transcript("X\n"), messages::PROMPT);
}

#[test]
fn test_eof_ends_session() {
    assert_eq!(transcript(""), format!("{}\n", messages::PROMPT));
}

#[test]
fn test_decoded_result_is_labeled() {
    let out = transcript("8 88777444666*664#\nx\n");
    let expected = format!(
        "{prompt}{label} TURING\n\n{prompt}",
        prompt = messages::PROMPT,
        label = messages::RESULT_LABEL,
    );
    assert_eq!(out, expected);
}

#[test]
fn test_invalid_input_prints_error_message() {
    let out = transcript("not keypad\nx\n");
    let expected = format!(
        "{prompt}Invalid input format. Please use numbers, spaces for pauses, * for backspace, and finish with #\n\n{prompt}",
        prompt = messages::PROMPT,
    );
    assert_eq!(out, expected);
}

#[test]
fn test_loop_continues_after_error() {
    let out = transcript("bad\n23#\nx\n");

    assert!(out.contains("Invalid input format."));
    assert!(out.contains(&format!("{} AD", messages::RESULT_LABEL)));
    assert_eq!(out.matches(messages::PROMPT).count(), 3);
}

#[test]
fn test_crlf_line_endings_are_stripped() {
    let out = transcript("2#\r\nx\r\n");
    assert!(out.contains(&format!("{} A", messages::RESULT_LABEL)));
}

#[test]
fn test_exit_command_requires_exact_match() {
    // "xx" is not an exit request; it goes to the decoder and is rejected.
    let out = transcript("xx\nx\n");
    assert!(out.contains("Invalid input format."));
}
