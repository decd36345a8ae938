use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::collections::HashMap;
use tic_tac_toe::Team;
use tracing_subscriber::filter::EnvFilter;

fn default_cache() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    human: TeamConfig,

    #[serde(default = "default_cache")]
    cache: bool,

    #[serde(default = "default_log_level")]
    log_level: String,

    log_dir: Option<Utf8PathBuf>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// The team the human plays as, unless the cli says otherwise.
    pub fn human(&self) -> Team {
        self.human.into()
    }

    /// Whether to precompile a table of every board instead of searching every move.
    pub fn cache(&self) -> bool {
        self.cache
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_dir(&self) -> Option<&Utf8Path> {
        self.log_dir.as_deref()
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read(path)
            .with_context(|| format!("failed to read config from '{path}'"))
            .and_then(|b| Self::load_from_bytes(&b))
    }

    /// Load a config from bytes
    pub fn load_from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes).context("config is not valid utf8")?;
        toml::from_str(text).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        for key in self.extra.keys() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        if EnvFilter::try_new(&self.log_level).is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel(self.log_level.clone()),
            });
        }

        if let Some(log_dir) = &self.log_dir {
            if log_dir.is_file() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::LogDirIsFile(log_dir.clone()),
                });
            }
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human: TeamConfig::default(),
            cache: default_cache(),
            log_level: default_log_level(),
            log_dir: None,
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
pub enum TeamConfig {
    #[default]
    #[serde(alias = "x")]
    X,

    #[serde(alias = "o")]
    O,
}

impl From<TeamConfig> for Team {
    fn from(team: TeamConfig) -> Self {
        match team {
            TeamConfig::X => Team::X,
            TeamConfig::O => Team::O,
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),

    #[error("`{0}` is not a valid log level")]
    InvalidLogLevel(String),

    #[error("the log dir `{0}` is a file")]
    LogDirIsFile(Utf8PathBuf),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::load_from_bytes(b"").expect("failed to load config");
        assert_eq!(config.human(), Team::X);
        assert!(config.cache());
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.log_dir(), None);
        assert!(config.validate().is_empty());

        let default = Config::default();
        assert_eq!(default.human(), config.human());
        assert_eq!(default.cache(), config.cache());
        assert_eq!(default.log_level(), config.log_level());
    }

    #[test]
    fn load() {
        let config = Config::load_from_bytes(
            br#"
human = "o"
cache = false
log_level = "tic_tac_toe_solver=debug"
log_dir = "./logs"
"#,
        )
        .expect("failed to load config");

        assert_eq!(config.human(), Team::O);
        assert!(!config.cache());
        assert_eq!(config.log_level(), "tic_tac_toe_solver=debug");
        assert_eq!(config.log_dir(), Some(Utf8Path::new("./logs")));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn invalid_team() {
        assert!(Config::load_from_bytes(b"human = \"Z\"").is_err());
    }

    #[test]
    fn validate() {
        let config = Config::load_from_bytes(
            br#"
log_level = "tic_tac_toe=loud"
colour = "blue"
"#,
        )
        .expect("failed to load config");

        let messages = config.validate();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|message| {
            message.severity() == Severity::Warn
                && matches!(message.error(), ValidationError::UnknownKey(key) if key == "colour")
        }));
        assert!(messages.iter().any(|message| {
            message.severity() == Severity::Error
                && matches!(message.error(), ValidationError::InvalidLogLevel(_))
        }));
    }
}
