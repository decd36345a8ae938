#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe Solver
//!
//! Play against, analyse with, or watch a minimax tic-tac-toe player that never loses.

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod engine;
pub mod logger;
pub mod setup;
pub mod util;

use crate::{
    cli_options::{
        CliOptions,
        Subcommand,
    },
    config::Config,
    engine::Engine,
};
use anyhow::Context as _;
use std::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(&cli_options)?;
    real_main(cli_options, setup_data)?;
    Ok(())
}

/// Data from the setup function
#[derive(Debug)]
struct SetupData {
    config: Config,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: &CliOptions) -> anyhow::Result<SetupData> {
    let config =
        setup::load_config(cli_options.config.as_deref()).context("failed to load config")?;

    eprintln!("setting up logger...");
    let worker_guard = crate::logger::setup(&config).context("failed to initialize logger")?;

    info!("loaded config");

    Ok(SetupData {
        config,
        worker_guard,
    })
}

/// The actual entry point
fn real_main(cli_options: CliOptions, setup_data: SetupData) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = &setup_data.config;
    let mut engine = Engine::new(config.cache());

    let ret = match cli_options.subcommand {
        Subcommand::Play(options) => commands::play::run(options, config, &mut engine),
        Subcommand::Solve(options) => commands::solve::run(options, &mut engine),
        Subcommand::SelfPlay(options) => commands::self_play::run(options, &mut engine),
    };

    info!("finished in {:?}", start.elapsed());

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}
