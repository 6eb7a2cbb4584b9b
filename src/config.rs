use std::env;

pub const LOG_ENV: &str = "CMDSHELL_LOG";

const DEFAULT_COLUMNS: usize = 5;
const DEFAULT_INTRO: &str = "Starting interactive shell...";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings. There are no config files; everything is either a
/// compiled-in default or comes from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub columns: usize,
    pub intro: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: DEFAULT_COLUMNS,
            intro: Some(DEFAULT_INTRO.to_string()),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(filter) = env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }
        config
    }

    pub fn without_intro(mut self) -> Self {
        self.intro = None;
        self
    }
}
