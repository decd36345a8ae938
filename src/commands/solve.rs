use crate::{
    cli_options::SolveOptions,
    commands::describe_outcome,
    engine::Engine,
    util::AsciiTable,
};
use std::fmt::Write;
use tic_tac_toe::{
    Board,
    Team,
};
use tracing::warn;

/// Print the analysis of a board.
pub fn run(options: SolveOptions, engine: &mut Engine) -> anyhow::Result<()> {
    let board = options.board;
    if !board.is_valid() {
        warn!("the board cannot be reached in a real game, the analysis may be meaningless");
    }

    print!("{}", report(board, engine)?);

    Ok(())
}

/// Describe what a value means for the team that is about to move.
fn outcome_name(turn: Team, value: i8) -> &'static str {
    match value * turn.win_utility() {
        1 => "win",
        -1 => "loss",
        _ => "draw",
    }
}

/// Make a report of a board, its status, and the value of every legal action.
pub fn report(board: Board, engine: &mut Engine) -> anyhow::Result<String> {
    let turn = board.get_turn();
    let mut report = String::new();

    writeln!(report, "{board}")?;
    writeln!(report, "To Move: {turn}")?;
    match board.get_winner() {
        Some(winner) => writeln!(report, "Winner: {winner}")?,
        None => writeln!(report, "Winner: none")?,
    }
    writeln!(report, "Terminal: {}", board.is_terminal())?;
    writeln!(report, "Utility: {}", board.utility())?;

    if let Some(outcome) = describe_outcome(board) {
        writeln!(report, "Game Over: {outcome}")?;
        return Ok(report);
    }

    let scored_actions = engine.scored_actions(board);
    let mut table = AsciiTable::new(3, scored_actions.len() + 1);
    table.set_row(0, ["Action", "Value", "Outcome"]);
    for (i, (action, value)) in scored_actions.iter().enumerate() {
        table.set_row(
            i + 1,
            [
                action.to_string(),
                value.to_string(),
                outcome_name(turn, *value).to_string(),
            ],
        );
    }
    writeln!(report)?;
    write!(report, "{table}")?;

    if let Some(action) = engine.best_action(board) {
        writeln!(report)?;
        writeln!(report, "Best Action: {action}")?;
    }

    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finished() {
        let mut engine = Engine::new(false);
        let board: Board = "XXX / OO. / ...".parse().expect("invalid board");
        let report = report(board, &mut engine).expect("failed to make report");

        assert!(report.contains("Winner: X"));
        assert!(report.contains("Terminal: true"));
        assert!(report.contains("Utility: 1"));
        assert!(report.contains("Game Over: X wins"));
        assert!(!report.contains("Best Action"));
    }

    #[test]
    fn winning_move() {
        let mut engine = Engine::new(false);
        let board: Board = "XX. / OO. / ...".parse().expect("invalid board");
        let report = report(board, &mut engine).expect("failed to make report");

        assert!(report.contains("To Move: X"));
        assert!(report.contains("Winner: none"));
        assert!(report.contains("Terminal: false"));
        assert!(report.contains("| (0, 2) |   1   |   win   |"));
        assert!(report.contains("Best Action: (0, 2)"));
    }

    #[test]
    fn outcome_names() {
        assert_eq!(outcome_name(Team::X, 1), "win");
        assert_eq!(outcome_name(Team::O, 1), "loss");
        assert_eq!(outcome_name(Team::O, -1), "win");
        assert_eq!(outcome_name(Team::X, 0), "draw");
    }
}
