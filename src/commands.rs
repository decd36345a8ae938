pub mod play;
pub mod self_play;
pub mod solve;

use tic_tac_toe::{
    Board,
    WinType,
};

/// Describe how a finished game ended.
///
/// Returns `None` if the game is not over.
pub fn describe_outcome(board: Board) -> Option<String> {
    if !board.is_terminal() {
        return None;
    }

    let outcome = match board.get_winner_info() {
        Some(winner_info) => {
            let line = match winner_info.win_type {
                WinType::Horizontal => "a row",
                WinType::Vertical => "a column",
                WinType::Diagonal => "the diagonal",
                WinType::AntiDiagonal => "the anti-diagonal",
            };
            format!(
                "{} wins with {line}, from {} to {}",
                winner_info.team,
                winner_info.start_tile(),
                winner_info.end_tile()
            )
        }
        None => "draw".to_string(),
    };

    Some(outcome)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn outcomes() {
        let board: Board = "XXX / OO. / ...".parse().expect("invalid board");
        assert_eq!(
            describe_outcome(board).as_deref(),
            Some("X wins with a row, from (0, 0) to (0, 2)")
        );

        let board: Board = "XOX / XOO / OXX".parse().expect("invalid board");
        assert_eq!(describe_outcome(board).as_deref(), Some("draw"));

        assert_eq!(describe_outcome(Board::new()), None);
    }
}
