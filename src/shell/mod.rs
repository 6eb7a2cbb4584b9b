use std::io::{self, Stdout, Write};

use log::{debug, warn};

mod executor;

use crate::{
    config::Config,
    core::{
        commands::{CommandRegistry, ExternalCommand, Flow},
        ShellState,
    },
    error::ShellError,
    history::HistoryLog,
    input::{Input, LineEditor, LineReader},
};

use executor::CommandHandler;

/// Consecutive failed reads after which the input is treated as gone.
const MAX_READ_ERRORS: usize = 3;

/// The read-dispatch loop. Generic over where lines come from and where
/// output goes so sessions can be driven without a terminal.
pub struct Shell<R: LineReader, W: Write> {
    pub(crate) reader: R,
    pub(crate) out: W,
    pub(crate) state: ShellState,
    pub(crate) history: HistoryLog,
    pub(crate) registry: CommandRegistry,
    pub(crate) fallback: ExternalCommand,
    pub(crate) config: Config,
}

impl Shell<LineEditor, Stdout> {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let state = ShellState::from_process()?;
        let reader = LineEditor::new()?;
        Ok(Shell::with_io(config, state, reader, io::stdout()))
    }
}

impl<R: LineReader, W: Write> Shell<R, W> {
    pub fn with_io(config: Config, state: ShellState, reader: R, out: W) -> Self {
        Shell {
            reader,
            out,
            state,
            history: HistoryLog::new(),
            registry: CommandRegistry::new(),
            fallback: ExternalCommand::new(),
            config,
        }
    }

    /// Runs until `exit` or end-of-input, then prints one blank line. A
    /// line that can't be read is reported and skipped; input that keeps
    /// failing ends the session the same way end-of-input does.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if let Some(intro) = &self.config.intro {
            writeln!(self.out, "{}", intro)?;
        }

        let mut read_errors = 0;
        loop {
            self.out.flush()?;
            let prompt = self.state.prompt().to_string();
            let line = match self.reader.read_line(&prompt) {
                Ok(Input::Line(line)) => {
                    read_errors = 0;
                    line
                }
                Ok(Input::Interrupted | Input::Eof) => {
                    debug!("input closed");
                    break;
                }
                Err(e) => {
                    read_errors += 1;
                    warn!("read failed ({} in a row): {}", read_errors, e);
                    eprintln!("Error: {}", e);
                    if read_errors >= MAX_READ_ERRORS {
                        break;
                    }
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            self.reader.remember(&line);

            match self.execute_command(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    warn!("{}: {}", line.trim(), e);
                    eprintln!("{}", e);
                }
            }
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}
