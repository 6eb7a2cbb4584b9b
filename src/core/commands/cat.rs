use std::fs::File;
use std::io::{BufRead, BufReader};

use super::{Command, CommandError, Context, Flow};
use crate::error::os_reason;
use crate::input::Input;

#[derive(Debug, Clone, Copy, Default)]
pub struct CatCommand;

impl CatCommand {
    fn echo_input(ctx: &mut Context<'_>) -> Result<(), CommandError> {
        loop {
            let input = ctx
                .input
                .read_line("")
                .map_err(|e| CommandError::Readline(e.to_string()))?;
            match input {
                Input::Line(line) => writeln!(ctx.out, "{}", line.trim_end())?,
                Input::Interrupted => {
                    writeln!(ctx.out)?;
                    return Ok(());
                }
                Input::Eof => return Ok(()),
            }
        }
    }

    fn print_file(ctx: &mut Context<'_>, path: &str) -> Result<(), CommandError> {
        let file = match File::open(ctx.state.locate(path)) {
            Ok(file) => file,
            Err(e) => {
                writeln!(ctx.out, "Error: {}: {}", path, os_reason(&e))?;
                return Ok(());
            }
        };

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => writeln!(ctx.out, "{}", line.trim_end())?,
                Err(e) => {
                    writeln!(ctx.out, "Error: {}: {}", path, os_reason(&e))?;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Command for CatCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        if args.is_empty() {
            Self::echo_input(ctx)?;
        } else {
            for path in args.split_whitespace() {
                Self::print_file(ctx, path)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Print files, or echo standard input when no file is given."
    }
}
