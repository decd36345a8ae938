use camino::Utf8PathBuf;
use tic_tac_toe::{
    Board,
    Team,
};

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "A tic-tac-toe player that never loses")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config. Defaults to `./tic-tac-toe.toml` if it exists"
    )]
    pub config: Option<Utf8PathBuf>,

    #[argh(subcommand)]
    pub subcommand: Subcommand,
}

/// The command to run
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand)]
pub enum Subcommand {
    Play(PlayOptions),
    Solve(SolveOptions),
    SelfPlay(SelfPlayOptions),
}

/// Options for the `play` subcommand
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(subcommand, name = "play", description = "play a game against the computer")]
pub struct PlayOptions {
    #[argh(
        option,
        description = "the team to play as, X or O. X goes first. Overrides the config"
    )]
    pub team: Option<Team>,
}

/// Options for the `solve` subcommand
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "solve",
    description = "show the value of every move on a board"
)]
pub struct SolveOptions {
    #[argh(
        positional,
        description = "the board, as 9 tiles of X, O, or `.`, like `XX./OO./...`"
    )]
    pub board: Board,
}

/// Options for the `self-play` subcommand
#[derive(Debug, Clone, Copy, argh::FromArgs)]
#[argh(
    subcommand,
    name = "self-play",
    description = "let the computer play against itself"
)]
pub struct SelfPlayOptions {
    #[argh(switch, description = "only print the final board")]
    pub quiet: bool,
}
