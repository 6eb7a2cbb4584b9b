use std::fs;

use super::{Command, CommandError, Context, Flow};
use crate::format::write_columns;

#[derive(Debug, Clone, Copy, Default)]
pub struct LsCommand;

/// Case-insensitive ordering that ignores underscores, so `_foo` lands
/// next to `foo`.
fn sort_key(name: &str) -> String {
    name.to_uppercase().replace('_', "")
}

impl Command for LsCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &str) -> Result<Flow, CommandError> {
        let mut names = fs::read_dir(ctx.state.cwd())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<String>, _>>()?;
        names.sort_by_cached_key(|name| sort_key(name));

        write_columns(ctx.out, &names, ctx.config.columns)?;
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "List the working directory in columns."
    }
}
