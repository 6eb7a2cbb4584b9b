use std::fs::File;
use std::io::{BufRead, BufReader};

use super::{Command, CommandError, Context, Flow};
use crate::error::os_reason;

#[derive(Debug, Clone, Copy, Default)]
pub struct GrepCommand;

impl GrepCommand {
    fn search_file(
        ctx: &mut Context<'_>,
        pattern: &str,
        path: &str,
        with_prefix: bool,
    ) -> Result<(), CommandError> {
        let file = match File::open(ctx.state.locate(path)) {
            Ok(file) => file,
            Err(e) => {
                writeln!(ctx.out, "Error: {}: {}", path, os_reason(&e))?;
                return Ok(());
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    writeln!(ctx.out, "Error: {}: {}", path, os_reason(&e))?;
                    break;
                }
            };
            if !line.contains(pattern) {
                continue;
            }
            if with_prefix {
                writeln!(ctx.out, "{}:{}", path, line.trim_end())?;
            } else {
                writeln!(ctx.out, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

impl Command for GrepCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        let mut words = args.split_whitespace();
        let pattern = words
            .next()
            .ok_or_else(|| CommandError::InvalidArguments("usage: grep PATTERN FILE...".to_string()))?;
        let files: Vec<&str> = words.collect();
        if files.is_empty() {
            return Err(CommandError::InvalidArguments(
                "usage: grep PATTERN FILE...".to_string(),
            ));
        }

        let with_prefix = files.len() > 1;
        for path in files {
            Self::search_file(ctx, pattern, path, with_prefix)?;
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Print lines of the given files that contain PATTERN literally."
    }
}
