use super::{Command, CommandError, Context, Flow};
use crate::error::os_reason;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        if let Err(e) = ctx.state.change_dir(args) {
            writeln!(ctx.out, "Error: {}", os_reason(&e))?;
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Change the working directory; no argument means the home directory."
    }
}
