use super::{letter_score, Letter};
use crate::error::Error;
use crate::letterset::Label;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A tile on the board, either a regular letter or a blank used as a letter.
///
/// Written as an uppercase letter, or as a lowercase letter for a blank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile(u8);

impl Tile {
    /// Create a tile for letter `label` (0 for `A` .. 25 for `Z`), played from a blank if `blank`.
    /// ## Example
    /// ```
    /// use scrabble_solver::Tile;
    /// let tile = Tile::new(1, true);
    /// assert_eq!(tile.to_char(), 'b');
    /// assert_eq!(tile.label(), 1);
    /// ```
    pub fn new(label: Label, blank: bool) -> Tile {
        debug_assert!(label < 26);
        let ch = b'A' + label;
        if blank {
            Tile(ch.to_ascii_lowercase())
        } else {
            Tile(ch)
        }
    }

    /// Get label for tile, ignoring the blank attribute.
    pub fn label(&self) -> Label {
        self.0.to_ascii_uppercase() - b'A'
    }

    /// Check if the tile is a blank
    pub fn is_blank(&self) -> bool {
        self.0.is_ascii_lowercase()
    }

    /// The tile as written: uppercase, or lowercase for a blank
    pub fn to_char(&self) -> char {
        self.0 as char
    }

    /// The letter shown on the tile, always uppercase
    pub fn letter(&self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// Points for the tile, 0 for a blank
    pub fn points(&self) -> u32 {
        letter_score(self.to_char())
    }

    /// The rack tile that was used to play this tile
    pub fn to_letter(&self) -> Letter {
        if self.is_blank() {
            Letter::BLANK
        } else {
            Letter::from_label(self.label())
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            Ok(Tile(ch as u8))
        } else {
            Err(Error::InvalidTile(ch))
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() -> Result<(), Error> {
        let tile = Tile::try_from('s')?;
        assert!(tile.is_blank());
        assert_eq!(tile.letter(), 'S');
        assert_eq!(tile.points(), 0);
        assert_eq!(tile.to_letter(), Letter::BLANK);
        assert_eq!(tile, Tile::new(18, true));
        Ok(())
    }

    #[test]
    fn test_letter() -> Result<(), Error> {
        let tile = Tile::try_from('Q')?;
        assert!(!tile.is_blank());
        assert_eq!(tile.label(), 16);
        assert_eq!(tile.points(), 10);
        assert_eq!(tile.to_letter().to_char(), 'Q');
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidTile('?')")]
    fn test_invalid_tile() {
        Tile::try_from('?').unwrap();
    }
}
