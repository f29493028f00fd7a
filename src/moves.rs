use crate::board::Board;
use crate::grid::{Bonus, N};
use crate::tiles::{letter_score, Letter, Letters, Tile};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The number of tiles in a full rack
pub const RACK_SIZE: usize = 7;

/// Extra points for a move that uses all tiles of a full rack
pub const BINGO_BONUS: u32 = 50;

/// The direction in which a word is played.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    /// The perpendicular direction
    pub fn flip(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// The square `steps` squares from (`row`, `col`) in this direction.
    pub fn advance(self, row: usize, col: usize, steps: usize) -> (usize, usize) {
        match self {
            Direction::Across => (row, col + steps),
            Direction::Down => (row + steps, col),
        }
    }

    /// (row, col) of square `pos` on `lane`. A lane is a row for `Across`, a column for `Down`.
    #[inline]
    pub(crate) fn coords(self, lane: usize, pos: usize) -> (usize, usize) {
        match self {
            Direction::Across => (lane, pos),
            Direction::Down => (pos, lane),
        }
    }

    /// (lane, pos) of the square at (`row`, `col`). Inverse of `coords`.
    #[inline]
    pub(crate) fn lane_pos(self, row: usize, col: usize) -> (usize, usize) {
        self.coords(row, col)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Across => 0,
            Direction::Down => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A move: a word placed on the board, or a trade of tiles.
///
/// The text form of a placement is `<word> <position>`. In the word, a blank is
/// written in lowercase, and letters that are already on the board are put
/// between parentheses. The position is `<row><column>` for a word played across,
/// and `<column><row>` for a word played down, with rows counted from 1 and
/// columns lettered from `A`.
/// A trade is written as `<tiles> --`; a pass is a trade of no tiles: `--`.
///
/// ## Examples
/// ```
/// use scrabble_solver::{Board, Direction, Move, Error};
/// let board = Board::new();
/// let mv = Move::parse("COMRADE H8", Some(&board))?;
/// assert_eq!(mv.direction(), Direction::Down);
/// assert_eq!((mv.row(), mv.col()), (7, 7));
/// assert_eq!(mv.score(), 76);
/// assert_eq!(mv.to_string(), "COMRADE H8");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    direction: Direction,
    row: usize,
    col: usize,
    word: String,
    raw: String,
    tiles: Letters,
    words: u32,
    score: u32,
    bonuses: Vec<Bonus>,
    is_trade: bool,
}

impl Move {
    /// Create a move that places `raw` at (`row`, `col`).
    /// If `board` is given, the move is scored against it.
    /// ## Errors
    /// - `OutOfBounds` if (`row`, `col`) is not on the board,
    /// - `InvalidPlacement` or `InvalidTile` if `raw` has unbalanced parentheses, no letters,
    ///   or characters that are not letters.
    pub fn from_placement(
        row: usize,
        col: usize,
        direction: Direction,
        raw: &str,
        board: Option<&Board>,
    ) -> Result<Move, Error> {
        if row >= N || col >= N {
            return Err(Error::OutOfBounds { row, col });
        }
        let mut word = String::new();
        let mut tiles = Letters::new();
        let mut fixed = false;
        for ch in raw.chars() {
            match ch {
                '(' if !fixed => fixed = true,
                ')' if fixed => fixed = false,
                '(' | ')' => return Err(Error::InvalidPlacement(String::from(raw))),
                ch if ch.is_ascii_alphabetic() => {
                    word.push(ch);
                    if !fixed {
                        tiles.try_push(Tile::try_from(ch)?.to_letter())?;
                    }
                }
                ch => return Err(Error::InvalidTile(ch)),
            }
        }
        if fixed || word.is_empty() {
            return Err(Error::InvalidPlacement(String::from(raw)));
        }
        tiles.sort();
        let mut mv = Move {
            direction,
            row,
            col,
            word,
            raw: String::from(raw),
            tiles,
            words: 1,
            score: 0,
            bonuses: Vec::new(),
            is_trade: false,
        };
        if let Some(board) = board {
            mv.assign_score(board);
        }
        Ok(mv)
    }

    /// Create a move from the squares of a word found on `board`, and score it.
    /// Each square is the tile and whether it is placed from the rack.
    pub(crate) fn from_cells(
        row: usize,
        col: usize,
        direction: Direction,
        cells: &[(Tile, bool)],
        board: &Board,
    ) -> Move {
        let mut word = String::with_capacity(cells.len());
        let mut raw = String::with_capacity(cells.len() + 4);
        let mut fixed = false;
        for &(tile, placed) in cells {
            if placed == fixed {
                raw.push(if placed { ')' } else { '(' });
                fixed = !placed;
            }
            word.push(tile.to_char());
            raw.push(tile.to_char());
        }
        if fixed {
            raw.push(')');
        }
        let mut tiles: Letters = cells
            .iter()
            .filter(|(_, placed)| *placed)
            .map(|(tile, _)| tile.to_letter())
            .collect();
        tiles.sort();
        let mut mv = Move {
            direction,
            row,
            col,
            word,
            raw,
            tiles,
            words: 1,
            score: 0,
            bonuses: Vec::new(),
            is_trade: false,
        };
        mv.assign_score(board);
        mv
    }

    /// Create a move that trades `tiles`. An empty string is a pass.
    /// ## Errors
    /// If `tiles` has characters that are not letters or `?`.
    pub fn from_trade(tiles: &str) -> Result<Move, Error> {
        let mut tiles = Letters::try_from(tiles)?;
        tiles.sort();
        Ok(Move::trade(tiles))
    }

    fn trade(tiles: Letters) -> Move {
        Move {
            direction: Direction::Across,
            row: 0,
            col: 0,
            word: String::new(),
            raw: String::new(),
            tiles,
            words: 0,
            score: 0,
            bonuses: Vec::new(),
            is_trade: true,
        }
    }

    /// A move that trades no tiles
    pub fn pass() -> Move {
        Move::trade(Letters::new())
    }

    /// All distinct trades for `rack`, starting with the pass.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Letters, Move, Error};
    /// let rack: Letters = "AAB".parse()?;
    /// let trades: Vec<String> = Move::trades(&rack).iter().map(Move::to_string).collect();
    /// assert_eq!(trades, vec!["--", "B --", "A --", "AB --", "AA --", "AAB --"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn trades(rack: &[Letter]) -> Vec<Move> {
        let mut sorted = rack.to_vec();
        sorted.sort_unstable();
        let mut trades: Vec<Vec<Letter>> = vec![Vec::new()];
        let mut i = 0;
        while i < sorted.len() {
            let letter = sorted[i];
            let count = sorted[i..].iter().take_while(|&&l| l == letter).count();
            trades = trades
                .into_iter()
                .flat_map(|trade| {
                    (0..=count).map(move |n| {
                        let mut trade = trade.clone();
                        trade.extend(std::iter::repeat(letter).take(n));
                        trade
                    })
                })
                .collect();
            i += count;
        }
        trades
            .into_iter()
            .map(|tiles| Move::trade(tiles.into_iter().collect()))
            .collect()
    }

    /// Parse a move from its text form, and score it against `board` if given.
    /// ## Errors
    /// If the position can not be parsed, or the word or tiles are invalid.
    pub fn parse(s: &str, board: Option<&Board>) -> Result<Move, Error> {
        if s.contains("--") {
            return Move::from_trade(s.trim_matches(|c: char| c == ' ' || c == '-'));
        }
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(Error::InvalidPlacement(String::from(s)));
        }
        let (row, col, direction) = parse_position(parts[1])?;
        Move::from_placement(row, col, direction, parts[0], board)
    }

    /// Score the move against `board`.
    ///
    /// A letter on a square that is already occupied counts its base points.
    /// A newly placed letter counts its points times the letter bonus of its square,
    /// and a word bonus on its square multiplies the whole word.
    /// Each newly placed letter that forms a word in the crossing direction
    /// also scores that word, multiplied by the word bonus of the square.
    /// Using all tiles of a full rack adds a bingo bonus.
    pub fn assign_score(&mut self, board: &Board) {
        self.score = 0;
        self.bonuses.clear();
        if self.is_trade {
            return;
        }
        self.words = 1;
        let mut word_score = 0;
        let mut multiplier = 1;
        for (i, ch) in self.word.chars().enumerate() {
            let (row, col) = self.direction.advance(self.row, self.col, i);
            if let Some(tile) = board.tile_at(row, col) {
                word_score += tile.points();
                continue;
            }
            let points = letter_score(ch);
            let bonus = board.bonus_at(row, col);
            let mut cross = match board.cross_score(row, col, self.direction) {
                Some(score) => {
                    self.words += 1;
                    score + points
                }
                None => 0,
            };
            cross *= bonus.word_multiplier();
            multiplier *= bonus.word_multiplier();
            word_score += points * bonus.letter_multiplier();
            if bonus != Bonus::None {
                self.bonuses.push(bonus);
            }
            self.score += cross;
        }
        if self.tiles.len() == RACK_SIZE {
            self.score += BINGO_BONUS;
        }
        self.bonuses.sort();
        self.score += word_score * multiplier;
    }

    /// The position in text form, `None` for a trade.
    pub fn position(&self) -> Option<String> {
        if self.is_trade {
            return None;
        }
        let row = self.row + 1;
        let col = (b'A' + self.col as u8) as char;
        Some(match self.direction {
            Direction::Across => format!("{}{}", row, col),
            Direction::Down => format!("{}{}", col, row),
        })
    }

    /// The squares covered by the move with the letter played on each.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.word.chars().enumerate().map(move |(i, ch)| {
            let (row, col) = self.direction.advance(self.row, self.col, i);
            (row, col, ch)
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The word formed, with blanks in lowercase
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word in text form, with parentheses around letters already on the board
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The rack tiles used (or traded), sorted, with `?` for a blank
    pub fn tiles(&self) -> &Letters {
        &self.tiles
    }

    /// The number of rack tiles used
    pub fn used(&self) -> usize {
        self.tiles.len()
    }

    /// The number of letters in the word
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// The number of words formed: the main word and each crossing word
    pub fn words(&self) -> u32 {
        self.words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Bonus squares covered by newly placed letters, sorted
    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    pub fn is_trade(&self) -> bool {
        self.is_trade
    }

    /// Check if the move is a trade of no tiles
    pub fn is_pass(&self) -> bool {
        self.is_trade && self.tiles.is_empty()
    }
}

/// Parse `<row><col>` (across) or `<col><row>` (down).
fn parse_position(pos: &str) -> Result<(usize, usize, Direction), Error> {
    let invalid = || Error::InvalidPlacement(String::from(pos));
    let bytes = pos.as_bytes();
    if bytes.len() < 2 {
        return Err(invalid());
    }
    let (direction, letter, digits) = if bytes[0].is_ascii_uppercase() {
        (Direction::Down, bytes[0], &pos[1..])
    } else if bytes[bytes.len() - 1].is_ascii_uppercase() {
        (Direction::Across, bytes[bytes.len() - 1], &pos[..pos.len() - 1])
    } else {
        return Err(invalid());
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row == 0 || row > N || letter >= b'A' + N as u8 {
        return Err(invalid());
    }
    Ok((row - 1, (letter - b'A') as usize, direction))
}

impl FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s, None)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.position() {
            Some(position) => write!(f, "{} {}", self.raw, position),
            None if self.tiles.is_empty() => write!(f, "--"),
            None => write!(f, "{} --", self.tiles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bonus::{DoubleLetter, DoubleWord, TripleLetter, TripleWord};

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_from_placement() -> Result<()> {
        let mv = Move::from_placement(1, 2, Direction::Across, "(CA)T", None)?;
        assert_eq!((mv.row(), mv.col()), (1, 2));
        assert_eq!(mv.direction(), Direction::Across);
        assert_eq!(mv.word(), "CAT");
        assert_eq!(mv.raw(), "(CA)T");
        assert_eq!(mv.words(), 1);
        assert_eq!(mv.word_len(), 3);
        assert_eq!(mv.used(), 1);
        assert_eq!(mv.tiles().to_string(), "T");
        assert_eq!(mv.score(), 0);
        assert!(mv.bonuses().is_empty());
        Ok(())
    }

    #[test]
    fn test_position() -> Result<()> {
        let mv = Move::from_placement(1, 2, Direction::Across, "ABC", None)?;
        assert_eq!(mv.position(), Some(String::from("2C")));
        let mv = Move::from_placement(1, 2, Direction::Down, "ABC", None)?;
        assert_eq!(mv.position(), Some(String::from("C2")));
        let mv = Move::from_placement(14, 14, Direction::Across, "ABC", None)?;
        assert_eq!(mv.position(), Some(String::from("15O")));
        let mv = Move::from_placement(14, 14, Direction::Down, "ABC", None)?;
        assert_eq!(mv.position(), Some(String::from("O15")));
        assert_eq!(Move::from_trade("ABCDE")?.position(), None);
        Ok(())
    }

    #[test]
    fn test_to_string() -> Result<()> {
        let mv = Move::from_placement(1, 2, Direction::Across, "ABC", None)?;
        assert_eq!(mv.to_string(), "ABC 2C");
        let mv = Move::from_placement(1, 2, Direction::Down, "C(a)NDY", None)?;
        assert_eq!(mv.to_string(), "C(a)NDY C2");
        assert_eq!(mv.tiles().to_string(), "CDNY");
        assert_eq!(Move::from_trade("NCH?")?.to_string(), "?CHN --");
        assert_eq!(Move::from_trade("")?.to_string(), "--");
        assert!(Move::pass().is_pass());
        Ok(())
    }

    #[test]
    fn test_from_str() -> Result<()> {
        for s in &["ABC 2C", "C(a)NDY C2", "?CHN --", "--"] {
            assert_eq!(s.parse::<Move>()?.to_string(), *s);
        }
        let mv: Move = "OREs 10K".parse()?;
        assert_eq!(mv.tiles().to_string(), "?EOR");
        assert_eq!((mv.row(), mv.col()), (9, 10));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidPlacement(\"CC\")")]
    fn test_invalid_position() {
        "C(a)NDY CC".parse::<Move>().unwrap();
    }

    #[test]
    fn test_invalid_moves() {
        assert!(matches!("CAT".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("CAT 0A".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("C(AT 2B".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("CA)T 2B".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("C4T 2B".parse::<Move>(), Err(Error::InvalidTile('4'))));
        assert!(matches!("() 2B".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("CAT 16A".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        assert!(matches!("CAT P1".parse::<Move>(), Err(Error::InvalidPlacement(_))));
        let board = Board::new();
        assert!(matches!(
            Move::parse("ABC A18446744073709551615", Some(&board)),
            Err(Error::InvalidPlacement(_))
        ));
        assert!(matches!(
            Move::parse("ABC A99999999999999999999", Some(&board)),
            Err(Error::InvalidPlacement(_))
        ));
    }

    #[test]
    fn test_placement_off_board() {
        let off_board = |row, col| Move::from_placement(row, col, Direction::Across, "ABC", None);
        assert!(matches!(off_board(15, 0), Err(Error::OutOfBounds { row: 15, col: 0 })));
        assert!(matches!(off_board(0, 200), Err(Error::OutOfBounds { row: 0, col: 200 })));
        assert!(matches!(off_board(usize::MAX, 0), Err(Error::OutOfBounds { .. })));
        assert!(off_board(14, 14).is_ok());
    }

    #[test]
    fn test_assign_score() -> Result<()> {
        let mut board = Board::new();

        let mv = Move::from_placement(7, 7, Direction::Down, "COMRADE", Some(&board))?;
        assert_eq!(mv.words(), 1);
        assert_eq!(mv.used(), 7);
        assert_eq!(mv.tiles().to_string(), "ACDEMOR");
        assert_eq!(mv.score(), 76);
        assert_eq!(mv.bonuses(), &[DoubleLetter, DoubleWord]);
        board.play(&mv)?;

        let mv = Move::from_placement(8, 6, Direction::Across, "L(O)BSTER", Some(&board))?;
        assert_eq!(mv.word(), "LOBSTER");
        assert_eq!(mv.words(), 1);
        assert_eq!(mv.used(), 6);
        assert_eq!(mv.tiles().to_string(), "BELRST");
        assert_eq!(mv.score(), 14);
        assert_eq!(mv.bonuses(), &[DoubleLetter, DoubleLetter, DoubleLetter]);
        board.play(&mv)?;

        let mv = Move::from_placement(9, 10, Direction::Across, "OREs", Some(&board))?;
        assert_eq!(mv.word(), "OREs");
        assert_eq!(mv.words(), 4);
        assert_eq!(mv.used(), 4);
        assert_eq!(mv.tiles().to_string(), "?EOR");
        assert_eq!(mv.score(), 9);
        assert_eq!(mv.bonuses(), &[TripleLetter]);
        board.play(&mv)?;

        let mv = Move::from_placement(14, 7, Direction::Across, "SPLENDID", Some(&board))?;
        assert_eq!(mv.words(), 2);
        assert_eq!(mv.used(), 8);
        assert_eq!(mv.tiles().to_string(), "DDEILNPS");
        assert_eq!(mv.score(), 156);
        assert_eq!(mv.bonuses(), &[DoubleLetter, TripleWord, TripleWord]);
        board.play(&mv)?;
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let board = Board::new();
        let mv = Move::from_placement(7, 7, Direction::Across, "COMRADE", Some(&board))?;
        let short = Move::from_placement(7, 7, Direction::Across, "COMRAD", Some(&board))?;
        assert_eq!(mv.score(), 76);
        assert_eq!(short.score(), 24);
        assert_eq!(mv.score() - BINGO_BONUS, 2 * 13);
        Ok(())
    }

    #[test]
    fn test_score_is_deterministic() -> Result<()> {
        let board = Board::new().with_moves(&["DoGGED H7", "BoSS 8G"])?;
        let mut mv = Move::parse("GOB 10H", Some(&board))?;
        let score = mv.score();
        mv.assign_score(&board);
        assert_eq!(mv.score(), score);
        Ok(())
    }

    #[test]
    fn test_trades() -> Result<()> {
        let rack: Letters = "AB?".parse()?;
        let trades = Move::trades(&rack);
        assert_eq!(trades.len(), 8);
        assert!(trades[0].is_pass());
        assert!(trades.iter().all(Move::is_trade));
        assert_eq!(trades[7].to_string(), "?AB --");
        let rack: Letters = "EEEE".parse()?;
        assert_eq!(Move::trades(&rack).len(), 5);
        Ok(())
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::Across.flip(), Direction::Down);
        assert_eq!(Direction::Down.advance(3, 4, 2), (5, 4));
        assert_eq!(Direction::Across.advance(3, 4, 2), (3, 6));
        assert_eq!(Direction::Down.coords(3, 4), (4, 3));
        assert_eq!(Direction::Down.lane_pos(4, 3), (3, 4));
    }
}
