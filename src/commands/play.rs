use crate::{
    cli_options::PlayOptions,
    commands::describe_outcome,
    config::Config,
    engine::Engine,
};
use anyhow::Context;
use std::io::{
    BufRead,
    Write,
};
use tic_tac_toe::{
    Action,
    Board,
    Team,
};
use tracing::info;

/// Play a game against the engine on the terminal.
pub fn run(options: PlayOptions, config: &Config, engine: &mut Engine) -> anyhow::Result<()> {
    let human = options.team.unwrap_or_else(|| config.human());
    info!("human is playing as {human}");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match play_game(human, engine, stdin.lock(), stdout.lock())? {
        Some(board) => info!("game over, winner: {:?}", board.get_winner()),
        None => info!("game abandoned"),
    }

    Ok(())
}

/// Play a game, reading the human's moves from `input` and writing the game to `output`.
///
/// Returns the final board, or `None` if the input ran out before the game was over.
pub fn play_game<R, W>(
    human: Team,
    engine: &mut Engine,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Option<Board>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "You are {human}. Enter a tile number (1-9) or a zero-based `row,column` pair."
    )?;

    let mut board = Board::new();
    let mut line = String::new();
    while !board.is_terminal() {
        write!(output, "\n{board}")?;

        let turn = board.get_turn();
        if turn != human {
            let action = engine
                .best_action(board)
                .context("the engine found no move on an unfinished board")?;
            writeln!(output, "computer ({turn}) plays {action}")?;
            board = board
                .result(action)
                .context("the engine picked an illegal action")?;
            continue;
        }

        write!(output, "your move ({human}): ")?;
        output.flush().context("failed to flush output")?;

        line.clear();
        let n = input.read_line(&mut line).context("failed to read move")?;
        if n == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let action: Action = match line.trim().parse() {
            Ok(action) => action,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };

        match board.result(action) {
            Ok(new_board) => {
                board = new_board;
            }
            Err(error) => {
                writeln!(output, "{error}")?;
            }
        }
    }

    write!(output, "\n{board}")?;
    let outcome = describe_outcome(board).context("the game ended early")?;
    writeln!(output, "{outcome}")?;
    output.flush().context("failed to flush output")?;

    Ok(Some(board))
}
