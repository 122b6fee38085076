use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::session::{Flow, Session};

pub const BANNER: &str = "FridgeSavvy – Smart kitchen inventory and meal planning assistant\n\
                          Type 'help' to see available commands. Type 'exit' to quit.";

/// Interactive read loop. Ctrl-C drops the current line, Ctrl-D ends the
/// session.
pub fn run(session: &mut Session, prompt: &str) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{BANNER}");
    tracing::info!("interactive session started");

    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }

                let reply = session.execute(&line);
                println!("{}", reply.text);

                if reply.flow == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("interactive session finished");

    Ok(())
}
