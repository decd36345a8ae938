use crate::{
    Action,
    Error,
    Team,
    BOARD_SIZE,
    NUM_TILES,
};

/// The lines that win the game, in the order they are checked.
///
/// Rows from top to bottom, columns from left to right, then the diagonal and the anti-diagonal.
const WINNING_LINES: [([u8; 3], WinType); 8] = [
    ([0, 1, 2], WinType::Horizontal),
    ([3, 4, 5], WinType::Horizontal),
    ([6, 7, 8], WinType::Horizontal),
    ([0, 3, 6], WinType::Vertical),
    ([1, 4, 7], WinType::Vertical),
    ([2, 5, 8], WinType::Vertical),
    ([0, 4, 8], WinType::Diagonal),
    ([2, 4, 6], WinType::AntiDiagonal),
];

/// Failed to parse a [`Board`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoardStrError {
    /// The input does not describe exactly 9 tiles.
    #[error("a Tic-Tac-Toe board needs exactly 9 tiles, got {0}")]
    InvalidLength(usize),

    /// A char is not a tile or a separator.
    #[error("{0:?} is not a valid Tic-Tac-Toe tile")]
    InvalidChar(char),
}

/// A single tile of a [`Board`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No mark
    #[default]
    Empty,

    /// Marked by X
    X,

    /// Marked by O
    O,
}

impl Cell {
    /// Get the team that owns this cell, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            Self::Empty => None,
            Self::X => Some(Team::X),
            Self::O => Some(Team::O),
        }
    }

    /// Returns true if this cell has no mark.
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Parse a cell from a [`char`].
    ///
    /// `.` and `_` are empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Self::Empty),
            c => Team::from_char(c).ok().map(Self::from),
        }
    }

    /// Get the [`char`] used to display this cell.
    pub fn as_char(self) -> char {
        self.team().map_or('.', Team::as_char)
    }
}

impl From<Team> for Cell {
    fn from(team: Team) -> Self {
        match team {
            Team::X => Self::X,
            Team::O => Self::O,
        }
    }
}

impl From<Option<Team>> for Cell {
    fn from(team: Option<Team>) -> Self {
        team.map_or(Self::Empty, Self::from)
    }
}

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning team
    pub team: Team,

    /// The tiles that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tiles: [Action; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinnerInfo {
    /// Get the first tile of the line
    pub fn start_tile(&self) -> Action {
        self.tiles[0]
    }

    /// Get the last tile of the line
    pub fn end_tile(&self) -> Action {
        self.tiles[2]
    }
}

/// A Tic Tac Toe board.
///
/// Boards are plain values.
/// Every move makes a new board and leaves the old one untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    // Row-major, 0 is the top left and 8 is the bottom right.
    cells: [Cell; NUM_TILES as usize],
}

impl Board {
    /// Make a new, empty [`Board`].
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_TILES as usize],
        }
    }

    /// Make a [`Board`] from rows of cells, top to bottom.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row_index, row) in rows.iter().enumerate() {
            for (column_index, cell) in row.iter().enumerate() {
                board.cells[row_index * usize::from(BOARD_SIZE) + column_index] = *cell;
            }
        }
        board
    }

    /// Get the cell at the action's coordinates.
    ///
    /// Returns `None` if the coordinates are not on the board.
    pub fn get(self, action: Action) -> Option<Cell> {
        action
            .index()
            .map(|index| self.cells[usize::from(index)])
    }

    /// Get the number of marks the given team has on the board.
    pub fn count(self, team: Team) -> u8 {
        let cell = Cell::from(team);
        let count = self.cells.iter().filter(|c| **c == cell).count();

        // There are only 9 cells.
        count as u8
    }

    /// Get the number of marks on the board.
    pub fn num_marks(self) -> u8 {
        self.count(Team::X) + self.count(Team::O)
    }

    /// Returns true if no empty cells remain.
    pub fn is_full(self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns true if this board could come up in a real game.
    ///
    /// Only the mark counts are checked.
    /// Nothing else in this crate requires or enforces this.
    pub fn is_valid(self) -> bool {
        let num_x = self.count(Team::X);
        let num_o = self.count(Team::O);

        num_x == num_o || num_x == num_o + 1
    }

    /// Get the team whos turn it is.
    ///
    /// This still returns a team for finished games.
    pub fn get_turn(self) -> Team {
        if self == Self::new() {
            return Team::X;
        }

        if self.count(Team::X) > self.count(Team::O) {
            Team::O
        } else {
            Team::X
        }
    }

    /// Iterate over the empty cells, in row-major order.
    pub fn iter_actions(self) -> impl Iterator<Item = Action> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(action, _)| action)
    }

    /// Make a move for whoever's turn it is.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAction`] if the action is off the board or the cell is taken.
    pub fn result(self, action: Action) -> Result<Self, Error> {
        match self.get(action) {
            Some(Cell::Empty) => Ok(self.set(action, Cell::from(self.get_turn()))),
            _ => Err(Error::InvalidAction(action)),
        }
    }

    /// Set the cell at the action's coordinates, ignoring turn order.
    ///
    /// # Panics
    /// Panics if the action is not on the board.
    #[must_use]
    pub fn set(mut self, action: Action, cell: Cell) -> Self {
        let index = action.index().expect("action is not on the board");
        self.cells[usize::from(index)] = cell;
        self
    }

    /// Get the winner if they exist
    pub fn get_winner(self) -> Option<Team> {
        self.get_winner_info().map(|info| info.team)
    }

    /// Get the winner info, if there is a winner.
    ///
    /// Lines are checked in a fixed order and the first complete line wins.
    pub fn get_winner_info(self) -> Option<WinnerInfo> {
        WINNING_LINES.iter().find_map(|(line, win_type)| {
            let [i0, i1, i2] = line.map(usize::from);
            let team = self.cells[i0].team()?;
            if self.cells[i1] != self.cells[i0] || self.cells[i2] != self.cells[i0] {
                return None;
            }

            let tiles = line.map(|index| Action::new(index / BOARD_SIZE, index % BOARD_SIZE));

            Some(WinnerInfo {
                team,
                tiles,
                win_type: *win_type,
            })
        })
    }

    /// Returns true if the game is over, either by a win or a full board.
    pub fn is_terminal(self) -> bool {
        self.get_winner().is_some() || self.is_full()
    }

    /// Get the utility of this board from X's point of view.
    ///
    /// This is 1 if X won, -1 if O won, and 0 for draws AND unfinished games.
    pub fn utility(self) -> i8 {
        self.get_winner().map_or(0, Team::win_utility)
    }

    /// Get an iterator over child board states.
    ///
    /// # Returns
    /// Returns an Iterator where Items are tuples.
    /// The first item is the action that was taken.
    /// The second is the resulting board state.
    pub fn iter_children(self) -> ChildrenIter {
        ChildrenIter::new(self)
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at the top left and ends at the bottom right.
    pub fn iter(self) -> impl Iterator<Item = (Action, Cell)> {
        (0..NUM_TILES).zip(self.cells).filter_map(|(index, cell)| {
            let action = Action::from_index(index)?;
            Some((action, cell))
        })
    }
}

impl std::str::FromStr for Board {
    type Err = InvalidBoardStrError;

    /// Parse a board from 9 tile chars.
    ///
    /// `X` and `O` are marks, `.` and `_` are empty.
    /// Whitespace and the separators `|`, `/`, `-` and `+` are skipped,
    /// so the [`Display`](std::fmt::Display) output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(*c, '|' | '/' | '-' | '+'))
            .map(|c| Cell::from_char(c).ok_or(InvalidBoardStrError::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [Cell; NUM_TILES as usize] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| InvalidBoardStrError::InvalidLength(cells.len()))?;

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index != 0 {
                writeln!(f, "-+-+-")?;
            }

            writeln!(
                f,
                "{}|{}|{}",
                row[0].as_char(),
                row[1].as_char(),
                row[2].as_char()
            )?;
        }

        Ok(())
    }
}

/// An iterator over the boards reachable in one move.
#[derive(Debug)]
pub struct ChildrenIter {
    board: Board,
    cell: Cell,
    index: u8,
}

impl ChildrenIter {
    fn new(board: Board) -> Self {
        let cell = Cell::from(board.get_turn());
        Self {
            board,
            cell,
            index: 0,
        }
    }
}

impl Iterator for ChildrenIter {
    type Item = (Action, Board);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NUM_TILES {
            let index = self.index;
            self.index += 1;

            if self.board.cells[usize::from(index)].is_empty() {
                let mut board = self.board;
                board.cells[usize::from(index)] = self.cell;

                let action = Action::from_index(index)?;
                return Some((action, board));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(NUM_TILES - self.index)))
    }
}

impl std::iter::FusedIterator for ChildrenIter {}
