use crate::{
    minimax::pick_best,
    Action,
    Board,
    Team,
};
use std::collections::HashMap;

/// A minimax solver that remembers the value of every board it searches.
///
/// This picks exactly the same actions as [`minimax`](crate::minimax),
/// but each board is only searched once per solver.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    max_values: HashMap<Board, i8>,
    min_values: HashMap<Board, i8>,
}

impl Solver {
    /// Make a new, empty [`Solver`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a [`Solver`] that already knows every board reachable from the start of a game.
    pub fn compiled() -> Self {
        let mut solver = Self::new();
        solver.max_value(Board::new());
        solver
    }

    /// Get the number of boards this solver knows the value of.
    pub fn len(&self) -> usize {
        self.max_values.len() + self.min_values.len()
    }

    /// Returns true if this solver has not searched anything yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the best action for the team whose turn it is.
    ///
    /// See [`minimax`](crate::minimax).
    pub fn best_action(&mut self, board: Board) -> Option<Action> {
        let scored_actions = self.scored_actions(board);
        pick_best(board.get_turn(), scored_actions)
    }

    /// Score every legal action of a board.
    ///
    /// See [`scored_actions`](crate::scored_actions).
    pub fn scored_actions(&mut self, board: Board) -> Vec<(Action, i8)> {
        if board.is_terminal() {
            return Vec::new();
        }

        let turn = board.get_turn();
        board
            .iter_children()
            .map(|(action, child)| {
                let value = match turn {
                    Team::X => self.min_value(child),
                    Team::O => self.max_value(child),
                };
                (action, value)
            })
            .collect()
    }

    /// Get the value of a board for the maximizing player.
    pub fn max_value(&mut self, board: Board) -> i8 {
        if let Some(value) = self.max_values.get(&board) {
            return *value;
        }

        let value = if board.is_terminal() {
            board.utility()
        } else {
            board
                .iter_children()
                .fold(i8::MIN, |value, (_, child)| value.max(self.min_value(child)))
        };

        self.max_values.insert(board, value);
        value
    }

    /// Get the value of a board for the minimizing player.
    pub fn min_value(&mut self, board: Board) -> i8 {
        if let Some(value) = self.min_values.get(&board) {
            return *value;
        }

        let value = if board.is_terminal() {
            board.utility()
        } else {
            board
                .iter_children()
                .fold(i8::MAX, |value, (_, child)| value.min(self.max_value(child)))
        };

        self.min_values.insert(board, value);
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        max_value,
        min_value,
        minimax,
        scored_actions,
    };
    use std::collections::HashSet;

    /// Collect every board reachable from the start of a game.
    fn reachable_boards() -> HashSet<Board> {
        let mut boards = HashSet::new();
        let mut stack = vec![Board::new()];
        while let Some(board) = stack.pop() {
            if !boards.insert(board) || board.is_terminal() {
                continue;
            }

            stack.extend(board.iter_children().map(|(_, child)| child));
        }
        boards
    }

    #[test]
    fn compiled_knows_every_board() {
        let solver = Solver::compiled();
        assert_eq!(solver.len(), 5478);
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn lazy() {
        let mut solver = Solver::new();
        assert!(solver.is_empty());

        let board: Board = "XX. / OO. / ...".parse().expect("invalid board");
        assert_eq!(solver.best_action(board), Some(Action::new(0, 2)));
        assert!(!solver.is_empty());

        let len = solver.len();
        assert_eq!(solver.best_action(board), Some(Action::new(0, 2)));
        assert_eq!(solver.len(), len, "a repeated search should only hit the cache");
    }

    #[test]
    fn matches_minimax() {
        let mut solver = Solver::compiled();
        let len = solver.len();

        for board in reachable_boards() {
            assert_eq!(solver.best_action(board), minimax(board), "{board}");
            assert_eq!(solver.scored_actions(board), scored_actions(board));

            match board.get_turn() {
                Team::X => assert_eq!(solver.max_value(board), max_value(board)),
                Team::O => assert_eq!(solver.min_value(board), min_value(board)),
            }
        }

        assert_eq!(solver.len(), len);
    }
}
