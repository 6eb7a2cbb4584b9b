use std::borrow::Cow;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::core::commands::CommandRegistry;
use crate::highlight::SyntaxHighlighter;

/// rustyline helper: completes built-in names in command position and
/// file paths after it, and highlights built-in command words.
pub struct ShellCompleter {
    commands: Vec<&'static str>,
    path_completer: FilenameCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            commands: CommandRegistry::new().names().collect(),
            path_completer: FilenameCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect()
    }

    fn is_builtin(&self, word: &str) -> bool {
        self.commands.iter().any(|name| *name == word)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| self.is_builtin(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let leading = line_up_to_cursor.len() - line_up_to_cursor.trim_start().len();
        let in_command_position = !line_up_to_cursor[leading..].contains(char::is_whitespace);

        if in_command_position {
            Ok((leading, self.complete_command(&line_up_to_cursor[leading..])))
        } else {
            self.path_completer.complete(line, pos, ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_command_prefix() {
        let completer = ShellCompleter::new();
        let names: Vec<String> = completer
            .complete_command("e")
            .into_iter()
            .map(|pair| pair.display)
            .collect();
        assert_eq!(names, vec!["echo", "env", "exit"]);
    }

    #[test]
    fn test_complete_command_no_match() {
        let completer = ShellCompleter::new();
        assert!(completer.complete_command("zz").is_empty());
    }
}
