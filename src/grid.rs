use crate::Error;
use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;

/// The center square; on an empty board the first word must cover it.
pub const CENTER: (usize, usize) = (N / 2, N / 2);

/// Bonus of a square on the board.
///
/// The order is the order in which bonuses are listed for a move: `2L`, `2W`, `3L`, `3W`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bonus {
    None,
    DoubleLetter,
    DoubleWord,
    TripleLetter,
    TripleWord,
}

impl Default for Bonus {
    fn default() -> Self {
        Bonus::None
    }
}

impl Bonus {
    /// The factor applied to the letter placed on this square
    pub fn letter_multiplier(&self) -> u32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    /// The factor applied to the words through this square
    pub fn word_multiplier(&self) -> u32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }

    /// Bonus code as shown on the board, empty for no bonus
    pub fn code(&self) -> &'static str {
        match self {
            Bonus::None => "",
            Bonus::DoubleLetter => "2L",
            Bonus::DoubleWord => "2W",
            Bonus::TripleLetter => "3L",
            Bonus::TripleWord => "3W",
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bonus::None => write!(f, "--"),
            bonus => write!(f, "{}", bonus.code()),
        }
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Bonus::None),
            "2L" => Ok(Bonus::DoubleLetter),
            "3L" => Ok(Bonus::TripleLetter),
            "2W" => Ok(Bonus::DoubleWord),
            "3W" => Ok(Bonus::TripleWord),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// One eighth of the standard board. Each entry is mirrored to all eight symmetric squares.
const OCTANT: &[(usize, usize, Bonus)] = &[
    (0, 0, Bonus::TripleWord),
    (0, 7, Bonus::TripleWord),
    (1, 1, Bonus::DoubleWord),
    (2, 2, Bonus::DoubleWord),
    (3, 3, Bonus::DoubleWord),
    (4, 4, Bonus::DoubleWord),
    (7, 7, Bonus::DoubleWord),
    (0, 3, Bonus::DoubleLetter),
    (2, 6, Bonus::DoubleLetter),
    (3, 0, Bonus::DoubleLetter),
    (3, 7, Bonus::DoubleLetter),
    (6, 2, Bonus::DoubleLetter),
    (6, 6, Bonus::DoubleLetter),
    (7, 3, Bonus::DoubleLetter),
    (1, 5, Bonus::TripleLetter),
    (5, 5, Bonus::TripleLetter),
];

lazy_static! {
    static ref STANDARD: Grid = Grid::from_octant(OCTANT);
}

type Inner = [[Bonus; N]; N];

/// Scrabble board grid, consisting of 15x15 (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The layout is fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// The standard scrabble layout
impl Default for Grid {
    fn default() -> Grid {
        STANDARD.clone()
    }
}

impl Grid {
    /// Create a new grid of 15x15 cells with no bonus.
    fn empty() -> Grid {
        Grid([[Bonus::None; N]; N])
    }

    /// Create a symmetrical board by mirroring each entry of `octant`
    /// over both diagonals and both center lines.
    fn from_octant(octant: &[(usize, usize, Bonus)]) -> Grid {
        let mut grid = Grid::empty();
        let m = N - 1;
        for &(row, col, bonus) in octant {
            for &(r, c) in &[
                (row, col),
                (col, row),
                (m - row, col),
                (m - col, row),
                (col, m - row),
                (row, m - col),
                (m - col, m - row),
                (m - row, m - col),
            ] {
                grid.0[r][c] = bonus;
            }
        }
        grid
    }

    /// Bonus at `row`, `col`, or `Bonus::None` outside the grid.
    pub fn bonus_at(&self, row: usize, col: usize) -> Bonus {
        if row < N && col < N {
            self.0[row][col]
        } else {
            Bonus::None
        }
    }

    /// The grid mirrored over its main diagonal.
    pub fn transposed(&self) -> Grid {
        let mut grid = Grid::empty();
        for (r, row) in self.0.iter().enumerate() {
            for (c, &bonus) in row.iter().enumerate() {
                grid.0[c][r] = bonus;
            }
        }
        grid
    }

    /// Get board cells as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Bonus`.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Grid, Error};
    /// let grid = Grid::default();
    /// let strings = grid.to_strings();
    /// assert_eq!(strings[0], "3W -- -- 2L -- -- -- 3W -- -- -- 2L -- -- 3W");
    /// assert_eq!(Grid::from_strings(&strings)?, grid);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board.0[i][j] = cell.parse()?;
            }
        }
        Ok(board)
    }
}
