use log::debug;

use super::{Command, CommandError, Context, Flow};
use crate::process::{signal, ProcessExecutor};

/// Fallback for anything that isn't a built-in: the whole raw line goes to
/// the system shell and its standard output is printed. Standard error,
/// exit status and launch failures are deliberately not reported.
#[derive(Debug, Clone, Default)]
pub struct ExternalCommand {
    process_executor: ProcessExecutor,
}

impl ExternalCommand {
    pub fn new() -> Self {
        ExternalCommand {
            process_executor: ProcessExecutor::new(),
        }
    }
}

impl Command for ExternalCommand {
    fn execute(&self, ctx: &mut Context<'_>, line: &str) -> Result<Flow, CommandError> {
        match self.process_executor.run_captured(line, ctx.state.cwd()) {
            Ok(output) => {
                let output = output.trim_end();
                if !output.is_empty() {
                    writeln!(ctx.out, "{}", output)?;
                }
            }
            Err(e) => debug!("ignoring external command failure: {}", e),
        }

        if signal::take_interrupt() {
            writeln!(ctx.out)?;
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Run the line with the system shell."
    }
}
