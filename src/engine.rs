use std::time::Instant;
use tic_tac_toe::{
    Action,
    Board,
    Solver,
};
use tracing::{
    debug,
    info,
};

/// The computer player
#[derive(Debug)]
pub enum Engine {
    /// Search the whole game tree for every move
    BruteForce,

    /// Look moves up in a table of every reachable board
    Compiled(Box<Solver>),
}

impl Engine {
    /// Make a new [`Engine`].
    ///
    /// If `cache` is true, this compiles a table of every board first.
    pub fn new(cache: bool) -> Self {
        if !cache {
            info!("using brute-force tic-tac-toe search");
            return Self::BruteForce;
        }

        let start = Instant::now();
        info!("compiling tic-tac-toe solver");

        let solver = Solver::compiled();

        info!(
            "compiled tic-tac-toe solver with {} boards in {:?}",
            solver.len(),
            start.elapsed()
        );

        Self::Compiled(Box::new(solver))
    }

    /// Pick the best action for whoever's turn it is.
    ///
    /// Returns `None` if the game is over.
    #[tracing::instrument(skip(self, board), fields(turn = %board.get_turn()))]
    pub fn best_action(&mut self, board: Board) -> Option<Action> {
        let start = Instant::now();
        let action = match self {
            Self::BruteForce => tic_tac_toe::minimax(board),
            Self::Compiled(solver) => solver.best_action(board),
        };
        debug!("picked {action:?} in {:?}", start.elapsed());

        action
    }

    /// Score every legal action.
    pub fn scored_actions(&mut self, board: Board) -> Vec<(Action, i8)> {
        match self {
            Self::BruteForce => tic_tac_toe::scored_actions(board),
            Self::Compiled(solver) => solver.scored_actions(board),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn engines_agree() {
        let mut brute_force = Engine::new(false);
        let mut compiled = Engine::new(true);

        let board: Board = "X.. / .O. / ..X".parse().expect("invalid board");
        assert_eq!(brute_force.best_action(board), compiled.best_action(board));
        assert_eq!(
            brute_force.scored_actions(board),
            compiled.scored_actions(board)
        );

        let board: Board = "XXX / OO. / ...".parse().expect("invalid board");
        assert_eq!(brute_force.best_action(board), None);
        assert_eq!(compiled.best_action(board), None);
    }
}
