//! Tic-Tac-Toe rules and a minimax search that always finds the best move.
//!
//! The free functions in this crate are the whole game:
//! [`initial_state`], [`player`], [`actions`], [`result`], [`winner`], [`terminal`], [`utility`] and [`minimax`].
//! They are thin wrappers over the methods of [`Board`].

mod action;
mod board;
mod minimax;
mod solver;
mod team;

pub use self::{
    action::{
        Action,
        InvalidActionStrError,
    },
    board::{
        Board,
        Cell,
        ChildrenIter,
        InvalidBoardStrError,
        WinType,
        WinnerInfo,
    },
    minimax::{
        max_value,
        min_value,
        minimax,
        scored_actions,
    },
    solver::Solver,
    team::{
        InvalidCharError,
        InvalidStrError,
        Team,
    },
};
use std::collections::HashSet;

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// The # of rows, and the # of columns
pub const BOARD_SIZE: u8 = 3;

/// Library Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The action is off the board or the cell is already taken.
    #[error("{0} is not a legal action")]
    InvalidAction(Action),
}

/// Get the starting board, with every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Get the team whose turn it is.
///
/// X goes first.
/// Finished games still report a team, so check [`terminal`] first.
pub fn player(board: Board) -> Team {
    board.get_turn()
}

/// Get every legal action.
///
/// This is empty if the board is full.
pub fn actions(board: Board) -> HashSet<Action> {
    board.iter_actions().collect()
}

/// Get the board that results from the team whose turn it is taking the action.
///
/// The given board is not changed.
///
/// # Errors
/// Returns [`Error::InvalidAction`] if the action is not in [`actions`].
pub fn result(board: Board, action: Action) -> Result<Board, Error> {
    board.result(action)
}

/// Get the winner, if there is one.
pub fn winner(board: Board) -> Option<Team> {
    board.get_winner()
}

/// Returns true if the game is over.
pub fn terminal(board: Board) -> bool {
    board.is_terminal()
}

/// Get the utility of a board.
///
/// 1 if X won, -1 if O won, 0 otherwise.
pub fn utility(board: Board) -> i8 {
    board.utility()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial() {
        let board = initial_state();
        assert_eq!(winner(board), None);
        assert!(!terminal(board));
        assert_eq!(player(board), Team::X);
        assert_eq!(actions(board).len(), 9);
    }

    #[test]
    fn actions_and_marks_add_up() {
        let mut board = initial_state();
        while !terminal(board) {
            assert_eq!(
                actions(board).len() + usize::from(board.num_marks()),
                usize::from(NUM_TILES)
            );

            // Play the highest empty tile to get a mix of boards.
            let action = actions(board)
                .into_iter()
                .max()
                .expect("non-terminal board has actions");
            board = result(board, action).expect("legal move");
        }

        assert_eq!(
            actions(board).len() + usize::from(board.num_marks()),
            usize::from(NUM_TILES)
        );
    }

    #[test]
    fn terminal_iff_winner_or_full() {
        for s in [
            "... / ... / ...",
            "XXX / OO. / ...",
            "XOX / XOO / OXX",
            "XO. / XO. / X..",
            "XO. / .X. / O..",
        ] {
            let board: Board = s.parse().expect("invalid board");
            assert_eq!(
                terminal(board),
                winner(board).is_some() || actions(board).is_empty(),
                "{s}"
            );
        }
    }

    #[test]
    fn top_row_x() {
        let board: Board = "XXX / OO. / ...".parse().expect("invalid board");
        assert_eq!(winner(board), Some(Team::X));
        assert!(terminal(board));
        assert_eq!(utility(board), 1);
        assert_eq!(minimax(board), None);
    }

    #[test]
    fn full_draw() {
        let board: Board = "XOX / XOO / OXX".parse().expect("invalid board");
        assert!(terminal(board));
        assert_eq!(winner(board), None);
        assert_eq!(utility(board), 0);
    }

    #[test]
    fn invalid_action() {
        let board = result(initial_state(), Action::new(1, 1)).expect("legal move");
        assert_eq!(player(board), Team::O);
        assert_eq!(
            result(board, Action::new(1, 1)),
            Err(Error::InvalidAction(Action::new(1, 1)))
        );
        assert_eq!(
            result(board, Action::new(0, 3)),
            Err(Error::InvalidAction(Action::new(0, 3)))
        );
        assert_eq!(
            Error::InvalidAction(Action::new(0, 3)).to_string(),
            "(0, 3) is not a legal action"
        );
    }
}
