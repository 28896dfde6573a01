use rustyline::{DefaultEditor, error::ReadlineError};

use crate::interpreter::object::environment::Environment;

/// The prompt printed before every line of input.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until end of input or interruption.
///
/// One global environment persists across lines, so definitions accumulate:
/// a `let` on one line is visible on every later line. Parse errors print
/// under a `parsing errors:` header and the line is not evaluated; otherwise
/// the result's printable form is written out.
///
/// # Errors
/// Returns an error when the line editor cannot be initialized or reading
/// from the terminal fails.
pub fn start() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Environment::global();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(error) => return Err(error),
        };

        let _ = editor.add_history_entry(line.as_str());

        match crate::interpret(&line, &env) {
            Ok(result) => println!("{}", result.inspect()),
            Err(errors) => {
                println!("parsing errors:");
                for error in errors {
                    println!("\t{error}");
                }
            },
        }
    }
}
