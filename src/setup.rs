use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use camino::Utf8Path;

/// The config path used if none is given
const DEFAULT_CONFIG_PATH: &str = "./tic-tac-toe.toml";

/// Load a config.
///
/// If no path is given, `./tic-tac-toe.toml` is used if it exists.
/// Otherwise, the default config is used.
///
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
pub(crate) fn load_config(path: Option<&Utf8Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = Utf8Path::new(DEFAULT_CONFIG_PATH);
            if !default_path.exists() {
                eprintln!("no config found, using defaults...");
                return Ok(Config::default());
            }
            default_path
        }
    };

    eprintln!("loading `{path}`...");
    let config = Config::load_from_path(path).with_context(|| format!("failed to load `{path}`"))?;

    eprintln!("validating config...");
    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}
