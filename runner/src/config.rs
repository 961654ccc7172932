use std::env;
use std::error::Error;
use std::fmt::Display;
use std::num::NonZeroUsize;

use log::LevelFilter;
use processor::ProcessorConfig;
use scheduler::RoundRobinMode;

/// The runner configuration, read from the environment.
///
/// * `QUANTUM` - the round robin quantum, `2` by default
/// * `ROUND_ROBIN` - `sweep` (default) or `queue`
/// * `PARALLEL` - when set, the algorithms run on separate threads
/// * `LOG_LEVEL` - `off`, `error`, `warn`, `info` (default), `debug` or `trace`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub processor: ProcessorConfig,
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment variable `name` holds a value that cannot be used.
    Invalid { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { name, value } => {
                write!(f, "invalid value {:?} for {}", value, name)
            }
        }
    }
}

impl Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            processor: ProcessorConfig::default(),
            log_level: LevelFilter::Info,
        };

        if let Some(value) = lookup("QUANTUM") {
            config.processor.quantum = value
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| invalid("QUANTUM", value))?;
        }

        if let Some(value) = lookup("ROUND_ROBIN") {
            config.processor.round_robin = match value.trim().to_ascii_lowercase().as_str() {
                "sweep" => RoundRobinMode::Sweep,
                "queue" | "fifo" => RoundRobinMode::Queue,
                _ => return Err(invalid("ROUND_ROBIN", value)),
            };
        }

        config.processor.parallel = lookup("PARALLEL").is_some();

        if let Some(value) = lookup("LOG_LEVEL") {
            config.log_level = value
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| invalid("LOG_LEVEL", value))?;
        }

        Ok(config)
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { name, value }
}
