use std::collections::BTreeMap;
use std::io::{self, Write};

mod builtin;
mod cat;
mod cd;
mod echo;
mod env;
mod external;
mod grep;
mod help;
mod history;
mod ls;

pub use builtin::ExitCommand;
pub use cat::CatCommand;
pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use external::ExternalCommand;
pub use grep::GrepCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;

use crate::config::Config;
use crate::core::state::ShellState;
use crate::history::HistoryLog;
use crate::input::LineReader;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    Io(io::Error),
    Readline(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::Io(err) => write!(f, "IO error: {}", err),
            CommandError::Readline(msg) => write!(f, "read error: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

/// What the loop should do once a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub history: &'a HistoryLog,
    pub registry: &'a CommandRegistry,
    pub config: &'a Config,
    pub input: &'a mut dyn LineReader,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    /// `args` is the rest of the input line after the command word,
    /// trimmed; each command splits it as it needs.
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError>;

    fn summary(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
pub enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Cat(CatCommand),
    Grep(GrepCommand),
    Echo(EchoCommand),
    Env(EnvCommand),
    History(HistoryCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Cat(cmd) => cmd.execute(ctx, args),
            CommandType::Grep(cmd) => cmd.execute(ctx, args),
            CommandType::Echo(cmd) => cmd.execute(ctx, args),
            CommandType::Env(cmd) => cmd.execute(ctx, args),
            CommandType::History(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            CommandType::Ls(cmd) => cmd.summary(),
            CommandType::Cd(cmd) => cmd.summary(),
            CommandType::Cat(cmd) => cmd.summary(),
            CommandType::Grep(cmd) => cmd.summary(),
            CommandType::Echo(cmd) => cmd.summary(),
            CommandType::Env(cmd) => cmd.summary(),
            CommandType::History(cmd) => cmd.summary(),
            CommandType::Help(cmd) => cmd.summary(),
            CommandType::Exit(cmd) => cmd.summary(),
        }
    }
}

/// Name to built-in mapping. Names not found here go to the external
/// fallback.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("ls", CommandType::Ls(LsCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("cat", CommandType::Cat(CatCommand));
        commands.insert("grep", CommandType::Grep(GrepCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("history", CommandType::History(HistoryCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        commands.insert("?", CommandType::Help(HelpCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("EOF", CommandType::Exit(ExitCommand));

        CommandRegistry { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<CommandType> {
        self.commands.get(name).copied()
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_command_detection() {
        let registry = CommandRegistry::new();

        for name in ["ls", "cd", "cat", "grep", "echo", "env", "history", "help", "?", "exit", "EOF"] {
            assert!(registry.is_builtin(name), "{} should be built in", name);
        }
        assert!(!registry.is_builtin("unknown"));
        assert!(!registry.is_builtin(""));
        assert!(!registry.is_builtin("LS"));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = CommandRegistry::new();
        assert!(registry.lookup("uname").is_none());
        assert!(matches!(registry.lookup("cd"), Some(CommandType::Cd(_))));
        assert!(matches!(registry.lookup("?"), Some(CommandType::Help(_))));
    }

    #[test]
    fn test_every_command_has_summary() {
        let registry = CommandRegistry::new();
        for name in registry.names() {
            let cmd = registry.lookup(name).unwrap();
            assert!(!cmd.summary().is_empty(), "{} has no summary", name);
        }
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::InvalidArguments("bad args".to_string()),
            CommandError::Readline("closed".to_string()),
            CommandError::Io(io::Error::new(io::ErrorKind::NotFound, "io error")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
