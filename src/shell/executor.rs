use std::io::Write;

use log::debug;

use crate::core::commands::{Command, CommandError, Context, Flow};
use crate::history::HistoryEntry;
use crate::input::LineReader;

/// Splits a trimmed line into its command word and the trimmed remainder.
/// A leading `?` is its own word, so `?cd` asks for help on `cd`.
pub(crate) fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(rest) = line.strip_prefix('?') {
        return Some(("?", rest.trim_start()));
    }
    match line.find(char::is_whitespace) {
        Some(pos) => Some((&line[..pos], line[pos..].trim_start())),
        None => Some((line, "")),
    }
}

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Flow, CommandError>;
}

impl<R: LineReader, W: Write> CommandHandler for super::Shell<R, W> {
    /// Resolves the command, records it, then runs it. Recording happens
    /// before the handler so failed commands still show up in history.
    fn execute_command(&mut self, line: &str) -> Result<Flow, CommandError> {
        let line = line.trim();
        let Some((name, rest)) = split_command(line) else {
            return Ok(Flow::Continue);
        };

        let builtin = self.registry.lookup(name);
        let (entry, command, args): (HistoryEntry, &dyn Command, &str) = match &builtin {
            Some(cmd) => (HistoryEntry::builtin(name, rest), cmd as &dyn Command, rest),
            None => (HistoryEntry::external(line), &self.fallback as &dyn Command, line),
        };
        debug!(
            "dispatching {} ({})",
            name,
            if entry.is_external() { "external" } else { "builtin" }
        );
        self.history.record(entry);

        let mut ctx = Context {
            state: &mut self.state,
            history: &self.history,
            registry: &self.registry,
            config: &self.config,
            input: &mut self.reader,
            out: &mut self.out,
        };
        command.execute(&mut ctx, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("ls"), Some(("ls", "")));
        assert_eq!(split_command("  grep  foo a.txt  "), Some(("grep", "foo a.txt")));
        assert_eq!(split_command("echo\thello   world"), Some(("echo", "hello   world")));
        assert_eq!(split_command("?"), Some(("?", "")));
        assert_eq!(split_command("?cd"), Some(("?", "cd")));
        assert_eq!(split_command("? grep"), Some(("?", "grep")));
        assert_eq!(split_command("   "), None);
        assert_eq!(split_command(""), None);
    }
}
