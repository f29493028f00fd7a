use super::{letter_score, BLANK};
use crate::error::Error;
use crate::letterset::Label;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A tile in a rack or bag.
///
/// Either a regular letter (`A` .. `Z`) or a blank (`?`) that can be played as any letter.
/// Letters sort in ascii order, so the blank sorts first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Default for Letter {
    fn default() -> Self {
        Letter::BLANK
    }
}

impl Letter {
    /// The blank tile
    pub const BLANK: Letter = Letter(BLANK as u8);

    /// Create `Letter` from label 0 (`A`) .. 25 (`Z`)
    pub fn from_label(label: Label) -> Letter {
        debug_assert!(label < 26);
        Letter(b'A' + label)
    }

    /// Check if letter is a blank
    pub fn is_blank(&self) -> bool {
        *self == Letter::BLANK
    }

    /// Get label for letter, or `None` for a blank.
    pub fn label(&self) -> Option<Label> {
        if self.is_blank() {
            None
        } else {
            Some(self.0 - b'A')
        }
    }

    pub fn to_char(&self) -> char {
        self.0 as char
    }

    /// Points for the letter, 0 for a blank
    pub fn points(&self) -> u32 {
        letter_score(self.to_char())
    }
}

/// Accepts `?` for a blank and a letter in either case.
impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            BLANK => Ok(Letter::BLANK),
            'A'..='Z' | 'a'..='z' => Ok(Letter(ch.to_ascii_uppercase() as u8)),
            _ => Err(Error::InvalidTile(ch)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
