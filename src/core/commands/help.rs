use super::{Command, CommandError, Context, Flow};
use crate::format::write_columns;

const HEADER: &str = "Documented commands (type help <topic>):";

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            match ctx.registry.lookup(args) {
                Some(cmd) => writeln!(ctx.out, "{}", cmd.summary())?,
                None => writeln!(ctx.out, "*** No help on {}", args)?,
            }
            return Ok(Flow::Continue);
        }

        let names: Vec<&str> = ctx
            .registry
            .names()
            .filter(|name| name.chars().all(|c| c.is_ascii_alphanumeric()))
            .collect();
        writeln!(ctx.out, "{}", HEADER)?;
        writeln!(ctx.out, "{}", "=".repeat(HEADER.len()))?;
        write_columns(ctx.out, &names, ctx.config.columns)?;
        writeln!(ctx.out)?;
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "List built-in commands, or describe one: help <topic>."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;

    #[test]
    fn test_help_lists_commands() {
        let mut h = Harness::new(std::path::Path::new("/"));
        h.run(&HelpCommand, "").unwrap();

        let output = h.output();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next().map(str::len), Some(HEADER.len()));
        for name in ["cat", "cd", "grep", "history", "ls"] {
            assert!(output.split_whitespace().any(|w| w == name), "{} missing", name);
        }
        assert!(!output.split_whitespace().any(|w| w == "?"));
    }

    #[test]
    fn test_help_topic() {
        let mut h = Harness::new(std::path::Path::new("/"));
        h.run(&HelpCommand, "cd").unwrap();
        h.run(&HelpCommand, "frobnicate").unwrap();

        let output = h.output();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Change the working directory"));
        assert_eq!(lines[1], "*** No help on frobnicate");
    }
}
