use crate::{
    BOARD_SIZE,
    NUM_TILES,
};

/// Failed to parse an [`Action`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidActionStrError {
    /// The input was not a tile number or a `row,column` pair.
    #[error("expected a tile number (1-9) or a `row,column` pair, got {0:?}")]
    InvalidFormat(String),

    /// A coordinate was not a digit.
    #[error("{0:?} is not a valid coordinate")]
    InvalidCoordinate(String),
}

/// A move on a Tic-Tac-Toe board.
///
/// Coordinates start at 0 in the top left corner.
/// Coordinates outside of the board are representable,
/// but will never be accepted by [`Board::result`](crate::Board::result).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    /// The row, from the top
    pub row: u8,

    /// The column, from the left
    pub column: u8,
}

impl Action {
    /// Make a new [`Action`].
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Make an [`Action`] from a tile index.
    ///
    /// Tile indexes are row-major, 0 at the top left and 8 at the bottom right.
    /// Returns `None` if the index >= 9.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= NUM_TILES {
            return None;
        }

        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Returns true if this action is on the board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Get the tile index of this action, if it is on the board.
    pub fn index(self) -> Option<u8> {
        if !self.in_bounds() {
            return None;
        }

        Some(self.row * BOARD_SIZE + self.column)
    }
}

impl std::str::FromStr for Action {
    type Err = InvalidActionStrError;

    /// Parse either a tile number, from 1 to 9 like a phone keypad,
    /// or a zero-based `row,column` pair separated by a comma or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let parse_digit = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| InvalidActionStrError::InvalidCoordinate(part.to_string()))
        };

        match parts[..] {
            [tile] => {
                let tile = parse_digit(tile)?;
                tile.checked_sub(1)
                    .and_then(Self::from_index)
                    .ok_or_else(|| InvalidActionStrError::InvalidCoordinate(s.to_string()))
            }
            [row, column] => Ok(Self::new(parse_digit(row)?, parse_digit(column)?)),
            _ => Err(InvalidActionStrError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
