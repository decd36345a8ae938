use crate::{
    cli_options::SelfPlayOptions,
    commands::describe_outcome,
    engine::Engine,
};
use anyhow::{
    ensure,
    Context,
};
use std::io::Write;
use tic_tac_toe::Board;
use tracing::info;

/// Let the engine play both sides.
pub fn run(options: SelfPlayOptions, engine: &mut Engine) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let board = self_play(engine, options.quiet, stdout.lock())?;
    info!("self-play finished in {} moves", board.num_marks());

    Ok(())
}

/// Play a game of the engine against itself, writing every board to `output`.
///
/// Perfect play is always a draw, so any other outcome is an error.
#[tracing::instrument(skip(engine, output))]
pub fn self_play<W>(engine: &mut Engine, quiet: bool, mut output: W) -> anyhow::Result<Board>
where
    W: Write,
{
    let mut board = Board::new();
    while let Some(action) = engine.best_action(board) {
        let turn = board.get_turn();
        board = board
            .result(action)
            .context("the engine picked an illegal action")?;

        if !quiet {
            writeln!(output, "{turn} plays {action}")?;
            writeln!(output, "{board}")?;
        }
    }

    if quiet {
        writeln!(output, "{board}")?;
    }

    let outcome = describe_outcome(board).context("the engine stopped before the game was over")?;
    writeln!(output, "{outcome}")?;
    output.flush().context("failed to flush output")?;

    ensure!(
        board.get_winner().is_none(),
        "perfect play should end in a draw, but {outcome}"
    );

    Ok(board)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn draws() {
        for cache in [false, true] {
            let mut engine = Engine::new(cache);
            let mut output = Vec::new();
            let board = self_play(&mut engine, false, &mut output).expect("self-play failed");

            assert!(board.is_full());
            assert_eq!(board.get_winner(), None);

            let output = String::from_utf8(output).expect("output is not utf8");
            assert!(output.starts_with("X plays (0, 0)"));
            assert!(output.ends_with("draw\n"));
        }
    }

    #[test]
    fn quiet() {
        let mut engine = Engine::new(true);
        let mut output = Vec::new();
        self_play(&mut engine, true, &mut output).expect("self-play failed");

        let output = String::from_utf8(output).expect("output is not utf8");
        assert!(!output.contains("plays"));
        assert!(output.ends_with("draw\n"));
    }
}
