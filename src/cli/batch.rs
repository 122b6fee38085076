use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::{Flow, Session};

/// Run the commands in `path`, one per line, printing each reply.
pub fn run_file(session: &mut Session, path: &Path) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open command file {}", path.display()))?;

    tracing::info!(path = %path.display(), "running command file");
    let executed = run(session, BufReader::new(file), io::stdout().lock())?;
    tracing::info!(path = %path.display(), executed, "command file finished");

    Ok(())
}

/// Feed `input` line by line into `session`, writing replies to `output`.
///
/// Blank lines are skipped and `exit`/`quit` stops early. Returns the
/// number of commands executed.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<usize> {
    let mut executed = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = session.execute(&line);
        executed += 1;
        writeln!(output, "{}", reply.text)?;

        if reply.flow == Flow::Exit {
            break;
        }
    }

    output.flush()?;

    Ok(executed)
}
