use crate::{
    Action,
    Board,
    Team,
};

/// Run minimax on a board.
///
/// # Returns
/// Returns the best action for the team whose turn it is,
/// or `None` if the game is over.
/// X tries to maximize the utility and O tries to minimize it.
/// Ties go to the first best action in row-major order.
pub fn minimax(board: Board) -> Option<Action> {
    pick_best(board.get_turn(), scored_actions(board))
}

/// Score every legal action of a board.
///
/// # Returns
/// Returns pairs of an action and the value of the board it leads to, assuming perfect play afterwards.
/// The list is in row-major order, and empty if the game is over.
pub fn scored_actions(board: Board) -> Vec<(Action, i8)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let turn = board.get_turn();
    board
        .iter_children()
        .map(|(action, child)| {
            // The opponent moves next.
            let value = match turn {
                Team::X => min_value(child),
                Team::O => max_value(child),
            };
            (action, value)
        })
        .collect()
}

/// Get the value of a board for the maximizing player.
pub fn max_value(board: Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    board
        .iter_children()
        .fold(i8::MIN, |value, (_, child)| value.max(min_value(child)))
}

/// Get the value of a board for the minimizing player.
pub fn min_value(board: Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    board
        .iter_children()
        .fold(i8::MAX, |value, (_, child)| value.min(max_value(child)))
}

/// Pick the best scored action for the given team.
///
/// The first action wins ties.
pub(crate) fn pick_best<I>(team: Team, scored_actions: I) -> Option<Action>
where
    I: IntoIterator<Item = (Action, i8)>,
{
    let mut best: Option<(Action, i8)> = None;
    for (action, value) in scored_actions {
        let is_better = match (best, team) {
            (None, _) => true,
            (Some((_, best_value)), Team::X) => value > best_value,
            (Some((_, best_value)), Team::O) => value < best_value,
        };

        if is_better {
            best = Some((action, value));
        }
    }

    best.map(|(action, _)| action)
}
