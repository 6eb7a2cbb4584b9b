use std::env;

use super::{Command, CommandError, Context, Flow};

#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &str) -> Result<Flow, CommandError> {
        for (name, value) in env::vars_os() {
            writeln!(
                ctx.out,
                "{}={}",
                name.to_string_lossy(),
                value.to_string_lossy()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Print every environment variable as NAME=VALUE."
    }
}
