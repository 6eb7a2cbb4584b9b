use log::warn;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use super::ShellCompleter;
use crate::error::ShellError;

/// Outcome of one blocking read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of input lines for the dispatch loop and for handlers that read
/// standard input themselves.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ShellError>;

    /// Makes a dispatched command line available for recall.
    fn remember(&mut self, _line: &str) {}
}

pub struct LineEditor {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl LineEditor {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        Ok(LineEditor { editor })
    }
}

impl LineReader for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!("Couldn't add to history: {}", e);
        }
    }
}

/// Replays a fixed sequence of inputs, then reports end-of-input.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    inputs: std::collections::VecDeque<Input>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        ScriptedInput {
            inputs: inputs.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().map(|l| Input::Line(l.to_string())))
    }
}

#[cfg(test)]
impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}
