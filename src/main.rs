//! Terminal entrypoint for the score calculator.
//!
//! Everything interesting lives in the member crates; this just wires the
//! interactive session to stdin/stdout.

use std::io;

use anyhow::Result;

use tenpin::term::Session;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}
