use crate::tiles::Letter;
use multiset::HashMultiSet;
use std::convert::{From, TryFrom};
use std::ops::Deref;
use std::ops::Sub;

/// Number of tiles for `?` (blank) and `A` .. `Z` in a standard game
const DISTRIBUTION: [(char, usize); 27] = [
    ('?', 2),
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Keeps track of the tiles in a pool: the bag, or a rack.
///
/// The pool is never changed in place by a play;
/// [`Board::play_from`](crate::Board::play_from) returns the pool without the tiles used.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        TileBag::new()
    }
}

impl TileBag {
    /// An empty pool
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// The 100 tiles of a standard game, including two blanks.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Letter, TileBag};
    /// let bag = TileBag::standard();
    /// assert_eq!(bag.len(), 100);
    /// assert_eq!(bag.count_of(Letter::BLANK), 2);
    /// ```
    pub fn standard() -> Self {
        let mut bag = HashMultiSet::new();
        for &(ch, count) in DISTRIBUTION.iter() {
            if let Ok(letter) = Letter::try_from(ch) {
                bag.insert_times(letter, count);
            }
        }
        Self(bag)
    }

    /// The number of tiles of kind `letter`
    pub fn count_of(&self, letter: Letter) -> usize {
        self.0.count_of(&letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// The pool with one tile removed for each letter in `letters`.
    /// Letters that are not in the pool are ignored.
    #[must_use]
    pub fn without(&self, letters: &[Letter]) -> TileBag {
        let mut bag = self.0.clone();
        for letter in letters {
            bag.remove(letter);
        }
        Self(bag)
    }

    /// The tiles as a sorted list
    pub fn to_vec(&self) -> Vec<Letter> {
        let mut tiles: Vec<Letter> = self.0.iter().copied().collect();
        tiles.sort_unstable();
        tiles
    }
}

impl From<&[Letter]> for TileBag {
    fn from(tiles: &[Letter]) -> Self {
        let mut bag = HashMultiSet::new();
        for &tile in tiles {
            bag.insert(tile);
        }
        Self(bag)
    }
}
