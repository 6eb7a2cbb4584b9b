mod completer;
mod reader;

pub use completer::ShellCompleter;
pub use reader::{Input, LineEditor, LineReader};

#[cfg(test)]
pub use reader::ScriptedInput;
