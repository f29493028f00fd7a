use crate::grid::{Bonus, Grid, CENTER, N};
use crate::letterset::{Label, LetterSet};
use crate::lexicon::{Lexicon, NodeId, ROOT};
use crate::moves::{Direction, Move};
use crate::tilebag::TileBag;
use crate::tiles::{self, Letter, Letters, Tile};
use crate::Error;
use log::debug;
use std::convert::TryFrom;
use std::fmt;
use std::sync::OnceLock;

/// The content of a square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    /// An empty square, with its bonus
    Empty(Bonus),
    /// A square with a tile
    Tile(Tile),
}

/// The letters that can be placed on an anchor square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CrossCheck {
    /// There is no crossing word, any letter can be placed.
    Unconstrained,
    /// Only these letters complete the crossing word to a word in the lexicon.
    Allowed(LetterSet),
}

impl CrossCheck {
    /// Check if the letter with `label` can be placed.
    #[inline]
    pub fn allows(&self, label: Label) -> bool {
        match self {
            CrossCheck::Unconstrained => true,
            CrossCheck::Allowed(letters) => letters.contains(label),
        }
    }
}

type Tiles = [[Option<Tile>; N]; N];
type Anchors = [[bool; N]; N];
/// Cross-checks per direction of play, computed on first use,
/// with the id of the lexicon they are computed for.
type CrossChecks = [[[OnceLock<(usize, CrossCheck)>; N]; N]; 2];

/// Represents the state of a scrabble board.
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The tiles played on the board,
/// * The anchors: the empty squares next to a tile, where new words must connect,
/// * A cache of the cross-checks for the anchors.
///
/// The board is only changed by [`play`](Board::play) and [`transpose`](Board::transpose).
/// Both recompute the anchors where needed and clear the cross-check cache.
/// The cache holds the cross-checks for the first lexicon used; cross-checks for any
/// other lexicon are computed without caching.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    tiles: Tiles,
    anchors: Anchors,
    cross_checks: CrossChecks,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Create a new empty board with the standard layout.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use scrabble_solver::Board;
    ///
    /// let board = Board::new();
    /// assert!(board.is_anchor(7, 7));
    ///```
    /// Additional builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_grid`](Board::with_grid)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_moves`](Board::with_moves)
    #[must_use]
    pub fn new() -> Board {
        Board::with_grid(Grid::default())
    }

    /// Create a new empty board with bonus layout `grid`.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Board {
        let mut board = Board {
            grid,
            tiles: [[None; N]; N],
            anchors: [[false; N]; N],
            cross_checks: Default::default(),
        };
        board.recompute_anchors();
        board
    }

    /// Create a new empty board with a bonus layout parsed from strings.
    /// See [`Grid::from_strings`].
    /// ## Errors
    /// If the grid can not be parsed.
    pub fn with_grid_from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Board, Error> {
        Ok(Board::with_grid(Grid::from_strings(grid)?))
    }

    /// Play `moves`, given in text form, on the board.
    /// The moves are not checked against a lexicon or rack.
    /// ## Errors
    /// If a move can not be parsed or played.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Error};
    /// let board = Board::new().with_moves(&["PACT E2", "TR(A)CE 3C"])?;
    /// assert_eq!(board.word_at(2, 2, scrabble_solver::Direction::Across, None).as_deref(), Some("TRACE"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_moves(mut self, moves: &[&str]) -> Result<Board, Error> {
        for &text in moves {
            let mv = Move::parse(text, None)?;
            self.play(&mv)?;
        }
        Ok(self)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Check if (`row`, `col`) holds a tile. False outside the board.
    #[inline]
    pub fn is_used(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    /// The tile at (`row`, `col`), `None` if the square is empty or outside the board.
    #[inline]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if row < N && col < N {
            self.tiles[row][col]
        } else {
            None
        }
    }

    /// The bonus of the square at (`row`, `col`)
    #[inline]
    pub fn bonus_at(&self, row: usize, col: usize) -> Bonus {
        self.grid.bonus_at(row, col)
    }

    /// The content of the square at (`row`, `col`), `None` outside the board.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Square> {
        if row >= N || col >= N {
            return None;
        }
        Some(match self.tiles[row][col] {
            Some(tile) => Square::Tile(tile),
            None => Square::Empty(self.grid[row][col]),
        })
    }

    /// Check if (`row`, `col`) is an anchor. False outside the board.
    #[inline]
    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        row < N && col < N && self.anchors[row][col]
    }

    /// All anchors, row by row
    pub fn anchors(&self) -> Vec<(usize, usize)> {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .filter(|&(row, col)| self.anchors[row][col])
            .collect()
    }

    /// Check if there are no tiles on the board
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().flatten().all(Option::is_none)
    }

    /// Swap rows and columns of the board, so words across become words down.
    /// Clears the cross-check cache.
    pub fn transpose(&mut self) {
        for row in 0..N {
            for col in row + 1..N {
                let tile = self.tiles[row][col];
                self.tiles[row][col] = self.tiles[col][row];
                self.tiles[col][row] = tile;
                let anchor = self.anchors[row][col];
                self.anchors[row][col] = self.anchors[col][row];
                self.anchors[col][row] = anchor;
            }
        }
        self.grid = self.grid.transposed();
        self.cross_checks = Default::default();
    }

    /// Mark the empty squares next to a tile as anchors.
    /// On an empty board, the center square is the only anchor.
    /// Clears the cross-check cache.
    pub fn recompute_anchors(&mut self) {
        self.anchors = [[false; N]; N];
        let mut has_tiles = false;
        for row in 0..N {
            for col in 0..N {
                if !self.is_used(row, col) {
                    continue;
                }
                has_tiles = true;
                let neighbours = [
                    row.checked_sub(1).map(|r| (r, col)),
                    Some((row + 1, col)),
                    col.checked_sub(1).map(|c| (row, c)),
                    Some((row, col + 1)),
                ];
                for &(r, c) in neighbours.iter().flatten() {
                    if r < N && c < N && !self.is_used(r, c) {
                        self.anchors[r][c] = true;
                    }
                }
            }
        }
        if !has_tiles {
            self.anchors[CENTER.0][CENTER.1] = true;
        }
        self.cross_checks = Default::default();
    }

    /// The runs of tiles directly before and after (`row`, `col`) in `direction`.
    fn adjacent_runs(&self, row: usize, col: usize, direction: Direction) -> (Vec<Tile>, Vec<Tile>) {
        let (lane, pos) = direction.lane_pos(row, col);
        let tile = |p: usize| {
            let (r, c) = direction.coords(lane, p);
            self.tile_at(r, c)
        };
        let mut before: Vec<Tile> = (0..pos).rev().map(tile).take_while(Option::is_some).flatten().collect();
        before.reverse();
        let after: Vec<Tile> = (pos + 1..N).map(tile).take_while(Option::is_some).flatten().collect();
        (before, after)
    }

    /// The letters that can be placed on anchor (`row`, `col`) for a word played in `direction`.
    ///
    /// Only the word crossing `direction` is checked. Returns `None` if the square is not an anchor.
    /// The result is cached until the board changes.
    pub fn cross_check(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        lexicon: &Lexicon,
    ) -> Option<CrossCheck> {
        if !self.is_anchor(row, col) {
            return None;
        }
        let &(id, check) = self.cross_checks[direction.index()][row][col]
            .get_or_init(|| (lexicon.id(), self.calc_cross_check(row, col, direction, lexicon)));
        if id == lexicon.id() {
            Some(check)
        } else {
            Some(self.calc_cross_check(row, col, direction, lexicon))
        }
    }

    fn calc_cross_check(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        lexicon: &Lexicon,
    ) -> CrossCheck {
        let (before, after) = self.adjacent_runs(row, col, direction.flip());
        if before.is_empty() && after.is_empty() {
            return CrossCheck::Unconstrained;
        }
        let follow = |node: NodeId, tiles: &[Tile]| {
            tiles
                .iter()
                .try_fold(node, |node, tile| lexicon.child(node, tile.label()))
        };
        let mut allowed = LetterSet::new();
        if let Some(prefix) = follow(ROOT, &before) {
            for (label, child) in lexicon.children(prefix) {
                if follow(child, &after).map_or(false, |node| lexicon.is_final(node)) {
                    allowed.insert(label);
                }
            }
        }
        CrossCheck::Allowed(allowed)
    }

    /// The word in `direction` through (`row`, `col`).
    ///
    /// If `tile` is given it takes the place of the square's content.
    /// Returns `None` if the word would be a single letter, or if the square is empty and
    /// no `tile` is given.
    pub fn word_at(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        tile: Option<Tile>,
    ) -> Option<String> {
        if row >= N || col >= N {
            return None;
        }
        let center = tile.or(self.tiles[row][col])?;
        let (before, after) = self.adjacent_runs(row, col, direction);
        if before.is_empty() && after.is_empty() {
            return None;
        }
        let word = before
            .iter()
            .chain(std::iter::once(&center))
            .chain(after.iter())
            .map(Tile::to_char)
            .collect();
        Some(word)
    }

    /// The points for `letter`: uppercase letters only, a blank (lowercase or `?`) scores 0.
    pub fn letter_score(letter: char) -> u32 {
        tiles::letter_score(letter)
    }

    /// The points of the tiles crossing empty square (`row`, `col`) for a word played in `direction`.
    /// `None` if the square is used, or no tile is next to it in the crossing direction.
    pub fn cross_score(&self, row: usize, col: usize, direction: Direction) -> Option<u32> {
        if row >= N || col >= N || self.is_used(row, col) {
            return None;
        }
        let (before, after) = self.adjacent_runs(row, col, direction.flip());
        if before.is_empty() && after.is_empty() {
            return None;
        }
        Some(before.iter().chain(after.iter()).map(Tile::points).sum())
    }

    /// Place the tiles of `mv` on the board, and return the tiles taken from the rack,
    /// with `?` for a blank.
    ///
    /// All squares are checked before the board is changed, so a failed play leaves
    /// the board as it was. A trade does not change the board and returns the traded tiles.
    /// ## Errors
    /// - `OutOfBounds` if the word does not fit on the board,
    /// - `PlacementConflict` if a square holds a different letter.
    pub fn play(&mut self, mv: &Move) -> Result<Letters, Error> {
        if mv.is_trade() {
            debug!("trade {}", mv);
            return Ok(mv.tiles().clone());
        }
        let mut placed: Vec<(usize, usize, Tile)> = Vec::new();
        for (row, col, ch) in mv.squares() {
            if row >= N || col >= N {
                return Err(Error::OutOfBounds { row, col });
            }
            let want = Tile::try_from(ch)?;
            match self.tiles[row][col] {
                Some(have) if have.letter() != want.letter() => {
                    return Err(Error::PlacementConflict {
                        row,
                        col,
                        have: have.to_char(),
                        want: ch,
                    });
                }
                Some(_) => {}
                None => placed.push((row, col, want)),
            }
        }
        let mut drawn: Letters = placed.iter().map(|(_, _, tile)| tile.to_letter()).collect();
        drawn.sort();
        for (row, col, tile) in placed {
            self.tiles[row][col] = Some(tile);
        }
        self.recompute_anchors();
        debug!("played {}, used {}", mv, drawn);
        Ok(drawn)
    }

    /// Play `mv` with tiles from `pool`, and return the pool without the tiles used.
    /// ## Errors
    /// See [`play`](Board::play).
    pub fn play_from(&mut self, mv: &Move, pool: &TileBag) -> Result<TileBag, Error> {
        let drawn = self.play(mv)?;
        Ok(pool.without(&drawn))
    }

    /// Check if `mv` can be played with `rack`.
    ///
    /// The checks run in order, and the first failure is returned:
    /// 1. every tile of the move is in the rack (a trade is valid once this holds),
    /// 2. the word is in the lexicon,
    /// 3. each square is on the board, and each word formed in the crossing direction
    ///    is in the lexicon,
    /// 4. the move covers an anchor.
    /// ## Errors
    /// `TileUnavailable`, `NotInLexicon`, `OutOfBounds` or `NoAnchor`.
    pub fn is_valid_move(&self, mv: &Move, lexicon: &Lexicon, rack: &[Letter]) -> Result<(), Error> {
        let tiles = mv.tiles();
        for &letter in tiles.iter() {
            let available = rack.iter().filter(|&&l| l == letter).count();
            if available < tiles.count_of(letter) {
                return Err(Error::TileUnavailable(letter.to_char()));
            }
        }
        if mv.is_trade() {
            return Ok(());
        }
        if !lexicon.is_word(mv.word()) {
            return Err(Error::NotInLexicon(String::from(mv.word())));
        }
        let mut has_anchor = false;
        for (row, col, ch) in mv.squares() {
            if row >= N || col >= N {
                return Err(Error::OutOfBounds { row, col });
            }
            if !self.is_used(row, col) {
                let tile = Tile::try_from(ch)?;
                if let Some(word) = self.word_at(row, col, mv.direction().flip(), Some(tile)) {
                    if !lexicon.is_word(&word) {
                        return Err(Error::NotInLexicon(word));
                    }
                }
            }
            has_anchor |= self.is_anchor(row, col);
        }
        if !has_anchor {
            return Err(Error::NoAnchor);
        }
        Ok(())
    }

    fn render(&self, show_all: bool) -> String {
        let mut out = String::from("    ");
        for col in 0..N {
            out.push_str(&format!("_ {} _", (b'A' + col as u8) as char));
        }
        out.push('\n');
        for row in 0..N {
            out.push_str(&format!("{:<2}: ", row + 1));
            for col in 0..N {
                let cell = match self.tiles[row][col] {
                    Some(tile) => format!(" {} ", tile),
                    None if show_all => {
                        let marker = if self.anchors[row][col] { '^' } else { ' ' };
                        format!("{:<2}{}", self.grid[row][col].code(), marker)
                    }
                    None => String::from("   "),
                };
                out.push('[');
                out.push_str(&cell);
                out.push(']');
            }
            out.push('\n');
        }
        out
    }

    /// The board without bonuses and anchors
    pub fn to_string_hidden(&self) -> String {
        self.render(false)
    }
}

/// Display the board state as a header with column letters, and 15 rows of squares.
/// A square shows its tile, or its bonus code followed by `^` for an anchor.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn letters(s: &str) -> Letters {
        s.parse().unwrap()
    }

    #[test]
    fn test_new() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.anchors(), vec![(7, 7)]);
        assert_eq!(board.get_at(7, 7), Some(Square::Empty(Bonus::DoubleWord)));
        assert_eq!(board.get_at(15, 0), None);
        assert!(!board.is_used(99, 99));
        assert!(!board.is_anchor(7, 15));
    }

    #[test]
    fn test_anchors() -> Result<()> {
        let board = Board::new().with_moves(&["DOG H7"])?;
        assert_eq!(
            board.anchors(),
            vec![(5, 7), (6, 6), (6, 8), (7, 6), (7, 8), (8, 6), (8, 8), (9, 7)]
        );
        let mut again = board.clone();
        again.recompute_anchors();
        assert_eq!(again.anchors(), board.anchors());
        Ok(())
    }

    #[test]
    fn test_anchors_at_edge() -> Result<()> {
        let board = Board::new().with_moves(&["AB 1A"])?;
        assert_eq!(board.anchors(), vec![(0, 2), (1, 0), (1, 1)]);
        Ok(())
    }

    #[test]
    fn test_transpose() -> Result<()> {
        let mut board = Board::new().with_moves(&["DOG H7"])?;
        let original = board.to_string();
        board.transpose();
        assert_eq!(board.tile_at(7, 6).map(|t| t.to_char()), Some('D'));
        assert_eq!(board.tile_at(7, 8).map(|t| t.to_char()), Some('G'));
        assert!(board.is_anchor(7, 5));
        assert!(board.is_anchor(6, 7));
        board.transpose();
        assert_eq!(board.to_string(), original);
        Ok(())
    }

    #[test]
    fn test_cross_checks() -> Result<()> {
        let lexicon = Lexicon::from_word_list(&["BAG", "GAB"]);
        let board = Board::new().with_moves(&["GAB 8H", "BAG 10H"])?;
        let check = board.cross_check(8, 7, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0]))));
        assert!(check.unwrap().allows(0));
        let check = board.cross_check(8, 8, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::new())));
        let check = board.cross_check(8, 9, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0]))));
        // cached
        let check = board.cross_check(8, 8, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::new())));
        assert_eq!(board.cross_check(0, 0, Direction::Across, &lexicon), None);
        // the word down has no crossing word across
        assert_eq!(
            board.cross_check(8, 7, Direction::Down, &lexicon),
            Some(CrossCheck::Unconstrained)
        );
        Ok(())
    }

    #[test]
    fn test_cross_checks_per_lexicon() -> Result<()> {
        let gab = Lexicon::from_word_list(&["BAG", "GAB"]);
        let mut big = Lexicon::from_word_list(&["BAG", "GAB", "BIG", "GIB"]);
        let board = Board::new().with_moves(&["GAB 8H", "BAG 10H"])?;
        let check = board.cross_check(8, 7, Direction::Across, &gab);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0]))));
        let check = board.cross_check(8, 7, Direction::Across, &big);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0, 8]))));
        let check = board.cross_check(8, 7, Direction::Across, &gab);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0]))));
        // a changed lexicon is a different lexicon
        let check = board.cross_check(8, 9, Direction::Across, &big);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0, 8]))));
        big.add_word("GOB");
        big.add_word("BOG");
        let check = board.cross_check(8, 9, Direction::Across, &big);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0, 8, 14]))));
        let check = board.cross_check(8, 8, Direction::Across, &big);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::new())));
        let check = board.cross_check(8, 7, Direction::Across, &big);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0, 8, 14]))));
        Ok(())
    }

    #[test]
    fn test_cross_check_cleared_on_play() -> Result<()> {
        let lexicon = Lexicon::from_word_list(&["AT", "ATE", "TA"]);
        let mut board = Board::new().with_moves(&["AT 8H"])?;
        let check = board.cross_check(8, 7, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![19]))));
        board.play(&"A 10H".parse()?)?;
        let check = board.cross_check(8, 7, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::new())));
        let check = board.cross_check(8, 8, Direction::Across, &lexicon);
        assert_eq!(check, Some(CrossCheck::Allowed(LetterSet::from(vec![0]))));
        Ok(())
    }

    #[test]
    fn test_word_at() -> Result<()> {
        let board = Board::new().with_moves(&["GAB 8H", "BAG 10H"])?;
        let a = Tile::try_from('A')?;
        assert_eq!(board.word_at(7, 8, Direction::Across, None).as_deref(), Some("GAB"));
        assert_eq!(board.word_at(8, 7, Direction::Down, Some(a)).as_deref(), Some("GAB"));
        assert_eq!(board.word_at(8, 7, Direction::Across, Some(a)), None);
        assert_eq!(board.word_at(8, 7, Direction::Down, None), None);
        assert_eq!(board.word_at(7, 7, Direction::Down, None), None);
        Ok(())
    }

    #[test]
    fn test_letter_score() {
        assert_eq!(Board::letter_score('?'), 0);
        assert_eq!(Board::letter_score('Z'), 10);
        assert_eq!(Board::letter_score('>'), 0);
    }

    #[test]
    fn test_cross_score() -> Result<()> {
        let board = Board::new().with_moves(&["ZIG 8H", "BAg 10H"])?;
        assert_eq!(board.cross_score(8, 7, Direction::Across), Some(13));
        assert_eq!(board.cross_score(8, 8, Direction::Across), Some(2));
        assert_eq!(board.cross_score(8, 9, Direction::Across), Some(2));
        assert_eq!(board.cross_score(7, 7, Direction::Across), None);
        assert_eq!(board.cross_score(7, 6, Direction::Across), None);
        assert_eq!(board.cross_score(7, 6, Direction::Down), Some(13));
        Ok(())
    }

    #[test]
    fn test_cross_score_first_row() -> Result<()> {
        let board = Board::new().with_moves(&["QI A1"])?;
        assert_eq!(board.cross_score(0, 1, Direction::Down), Some(10));
        assert_eq!(board.cross_score(2, 0, Direction::Across), Some(11));
        Ok(())
    }

    #[test]
    fn test_play() -> Result<()> {
        let mut board = Board::new();
        let drawn = board.play(&"PACT E2".parse()?)?;
        assert_eq!(drawn, letters("ACPT"));
        assert_eq!(board.tile_at(1, 4).map(|t| t.to_char()), Some('P'));
        assert_eq!(board.tile_at(4, 4).map(|t| t.to_char()), Some('T'));

        let drawn = board.play(&"TR(A)CE 3C".parse()?)?;
        assert_eq!(drawn, letters("CERT"));
        assert_eq!(board.tile_at(2, 2).map(|t| t.to_char()), Some('T'));
        assert_eq!(board.tile_at(2, 6).map(|t| t.to_char()), Some('E'));

        let drawn = board.play(&"(T)oP C3".parse()?)?;
        assert_eq!(drawn, letters("?P"));
        assert_eq!(board.tile_at(3, 2).map(|t| t.to_char()), Some('o'));

        let result = board.play(&"(K)ITE C2".parse()?);
        assert!(matches!(
            result,
            Err(Error::PlacementConflict { row: 2, col: 2, have: 'T', want: 'I' })
        ));
        assert!(!board.is_used(1, 2));
        Ok(())
    }

    #[test]
    fn test_play_out_of_bounds() -> Result<()> {
        let mut board = Board::new();
        let result = board.play(&"CAT 15N".parse()?);
        assert!(matches!(result, Err(Error::OutOfBounds { row: 14, col: 15 })));
        assert!(board.is_empty());
        Ok(())
    }

    #[test]
    fn test_play_from() -> Result<()> {
        let mut board = Board::new();
        let pool = TileBag::from(&letters("CAT?E")[..]);
        let pool = board.play_from(&"CAt H8".parse()?, &pool)?;
        assert_eq!(pool.len(), 2);
        assert!(pool.contains(Letter::try_from('T')?));
        assert!(pool.contains(Letter::try_from('E')?));
        Ok(())
    }

    #[test]
    fn test_trade_leaves_board() -> Result<()> {
        let mut board = Board::new();
        let drawn = board.play(&"QZ --".parse()?)?;
        assert_eq!(drawn, letters("QZ"));
        assert!(board.is_empty());
        Ok(())
    }

    #[test]
    fn test_is_valid_move() -> Result<()> {
        let lexicon = Lexicon::from_word_list(&["CAT", "CATS", "AT", "TA", "ACT"]);
        let board = Board::new();
        let rack = letters("CATSXYZ");
        let valid = |text: &str, rack: &Letters| -> Result<()> {
            board.is_valid_move(&Move::parse(text, Some(&board))?, &lexicon, rack)
        };
        valid("CAT H7", &rack)?;
        valid("CAT 8F", &rack)?;
        valid("ZZ --", &letters("ZZA"))?;
        assert!(matches!(valid("CAT H7", &letters("CAXSXYZ")), Err(Error::TileUnavailable('T'))));
        assert!(matches!(valid("ZZ --", &rack), Err(Error::TileUnavailable('Z'))));
        assert!(matches!(valid("ACTS 8H", &rack), Err(Error::NotInLexicon(w)) if w == "ACTS"));
        assert!(matches!(valid("CAT H1", &rack), Err(Error::NoAnchor)));
        assert!(matches!(valid("CAT O14", &rack), Err(Error::OutOfBounds { row: 15, col: 14 })));
        Ok(())
    }

    #[test]
    fn test_is_valid_move_crossing_words() -> Result<()> {
        let lexicon = Lexicon::from_word_list(&["CAT", "AT", "TA", "AA"]);
        let board = Board::new().with_moves(&["CAT 8H"])?;
        let rack = letters("ATA");
        let mv = Move::parse("TA 9I", Some(&board))?;
        board.is_valid_move(&mv, &lexicon, &rack)?;
        let mv = Move::parse("TA 9H", Some(&board))?;
        assert!(matches!(
            board.is_valid_move(&mv, &lexicon, &rack),
            Err(Error::NotInLexicon(w)) if w == "CT"
        ));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let board = Board::new().with_moves(&["DOG H7"])?;
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("    _ A __ B _"));
        assert_eq!(
            lines[1],
            "1 : [3W ][   ][   ][2L ][   ][   ][   ][3W ][   ][   ][   ][2L ][   ][   ][3W ]"
        );
        assert!(lines[6].contains("[  ^]"));
        assert!(lines[7].contains("[2L^][ D ][2L^]"));
        assert!(lines[8].starts_with("8 : "));
        assert!(lines[15].starts_with("15: "));
        let hidden = board.to_string_hidden();
        assert!(!hidden.contains("3W"));
        assert!(!hidden.contains('^'));
        assert!(hidden.contains("[ O ]"));
        Ok(())
    }
}
