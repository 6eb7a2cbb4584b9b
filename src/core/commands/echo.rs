use std::env;

use super::{Command, CommandError, Context, Flow};

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Flow, CommandError> {
        match args.strip_prefix('$') {
            Some(name) => {
                let value = env::var_os(name).unwrap_or_default();
                writeln!(ctx.out, "{}", value.to_string_lossy())?;
            }
            None => writeln!(ctx.out, "{}", args)?,
        }
        Ok(Flow::Continue)
    }

    fn summary(&self) -> &'static str {
        "Print the argument, or the value of $NAME."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;

    fn echo(args: &str) -> String {
        let mut h = Harness::new(std::path::Path::new("/"));
        h.run(&EchoCommand, args).unwrap();
        h.output()
    }

    #[test]
    fn test_echo_verbatim() {
        assert_eq!(echo("hello world"), "hello world\n");
        assert_eq!(echo("a  $b"), "a  $b\n");
        assert_eq!(echo(""), "\n");
    }

    #[test]
    fn test_echo_variable() {
        env::set_var("CMDSHELL_TEST_ECHO", "/usr/bin");
        assert_eq!(echo("$CMDSHELL_TEST_ECHO"), "/usr/bin\n");
    }

    #[test]
    fn test_echo_unset_variable_is_empty() {
        env::remove_var("CMDSHELL_TEST_UNSET");
        assert_eq!(echo("$CMDSHELL_TEST_UNSET"), "\n");
    }
}
