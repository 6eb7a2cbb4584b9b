use std::env;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ShellError;
use crate::path::{abbreviate_home, home_dir, PathExpander};

/// Working directory, home directory and the prompt derived from them.
/// Handlers resolve relative paths against `cwd` rather than the process
/// working directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    cwd: PathBuf,
    prompt: String,
    expander: PathExpander,
}

impl ShellState {
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let expander = PathExpander::new(home);
        let prompt = render_prompt(&cwd, expander.home());
        ShellState {
            cwd,
            prompt,
            expander,
        }
    }

    pub fn from_process() -> Result<Self, ShellError> {
        Ok(Self::new(env::current_dir()?, home_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn home(&self) -> &Path {
        self.expander.home()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Path of a file argument: absolute paths as given, anything else
    /// relative to the shell's working directory.
    pub fn locate(&self, path: &str) -> PathBuf {
        self.cwd.join(path)
    }

    /// Moves to `target` (home when empty), updating the process working
    /// directory and the prompt. On failure nothing changes.
    pub fn change_dir(&mut self, target: &str) -> io::Result<()> {
        let path = if target.is_empty() {
            self.home().to_path_buf()
        } else {
            self.expander.absolutize(target, &self.cwd)
        };

        env::set_current_dir(&path)?;
        debug!("changed directory to {}", path.display());
        self.prompt = render_prompt(&path, self.home());
        self.cwd = path;
        Ok(())
    }
}

fn render_prompt(cwd: &Path, home: &Path) -> String {
    format!("{}> ", abbreviate_home(cwd, home))
}
