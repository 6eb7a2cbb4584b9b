use cmdshell::config::Config;
use cmdshell::process::signal;
use cmdshell::shell::Shell;

fn main() -> Result<(), cmdshell::error::ShellError> {
    let config = Config::from_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    signal::install_interrupt_handler()?;

    let mut shell = Shell::new(config)?;
    shell.run()
}
