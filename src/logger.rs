use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter,
    layer::SubscriberExt,
};

/// The name of the log file in the log dir
const LOG_FILE_NAME: &str = "tic-tac-toe.log";

/// Try to setup a logger.
///
/// `RUST_LOG` overrides the configured log level.
/// If the config has a log dir, logs also go to a file there.
/// The returned guard flushes the file when dropped.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::try_new(config.log_level()).context("invalid log level")?,
    };

    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_dir() {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("failed to create log dir '{log_dir}'"))?;

            let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
