use super::{Command, CommandError, Context, Flow};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &str) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }

    fn summary(&self) -> &'static str {
        "Leave the shell."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;

    #[test]
    fn test_exit_command() {
        let mut h = Harness::new(std::path::Path::new("/"));
        assert_eq!(h.run(&ExitCommand, "").unwrap(), Flow::Exit);
        assert_eq!(h.run(&ExitCommand, "now please").unwrap(), Flow::Exit);
        assert!(h.output().is_empty());
    }
}
