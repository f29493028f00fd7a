use super::{Letter, DIM};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// A short list of [`Letter`](crate::Letter)s: a rack, or the tiles used by a move.
///
/// ## Examples
/// ```
/// use scrabble_solver::{Letters, Error};
/// let rack: Letters = "ssubwa?".parse()?;
/// assert_eq!(rack.len(), 7);
/// assert_eq!(rack.to_string(), "SSUBWA?");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letters(ArrayVec<[Letter; DIM]>);

impl Letters {
    pub fn new() -> Letters {
        Letters(ArrayVec::new())
    }

    /// Append `letter`.
    /// ## Errors
    /// If the list is full.
    pub fn try_push(&mut self, letter: Letter) -> Result<(), Error> {
        if self.0.len() == DIM {
            return Err(Error::TooManyTiles(DIM + 1));
        }
        self.0.push(letter);
        Ok(())
    }

    /// Sort the letters, blanks first.
    pub fn sort(&mut self) {
        self.0.sort_unstable();
    }

    /// Number of times `letter` occurs.
    pub fn count_of(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }
}

impl Deref for Letters {
    type Target = [Letter];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Collect letters. Panics if there are more than 16.
impl FromIterator<Letter> for Letters {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Letters(iter.into_iter().collect())
    }
}

impl TryFrom<&[Letter]> for Letters {
    type Error = Error;
    fn try_from(letters: &[Letter]) -> Result<Self, Self::Error> {
        if letters.len() > DIM {
            return Err(Error::TooManyTiles(letters.len()));
        }
        Ok(letters.iter().copied().collect())
    }
}

impl TryFrom<&str> for Letters {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let letters = s
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, Error>>()?;
        Letters::try_from(letters.as_slice())
    }
}

impl FromStr for Letters {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letters::try_from(s)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Letter::to_char).collect();
        write!(f, "{}", s)
    }
}
