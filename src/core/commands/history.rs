use super::{Command, CommandError, Context, Flow};

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &str) -> Result<Flow, CommandError> {
        for line in ctx.history.lines() {
            writeln!(ctx.out, "{}", line)?;
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Show every command run in this session, numbered from 1."
    }
}
