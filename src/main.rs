//! Interactive multi-tap decoder (default binary).
//!
//! Runs the prompt loop over real stdin/stdout. Enter keypad sequences such
//! as `8 88777444666*664#`; enter `x` (or close the stream) to leave.

use std::io;

use anyhow::Result;
use crossterm::tty::IsTty;

use multitap::term::Shell;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let styled = stdout.is_tty();

    Shell::with_style(stdin.lock(), stdout.lock(), styled).run()
}
