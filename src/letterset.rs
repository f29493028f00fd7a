#[cfg(feature = "bitintr")]
use bitintr::Popcnt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Index of a letter: 0 for `A` .. 25 for `Z`
pub type Label = u8;

/// Number of letters in the alphabet
pub const NLETTERS: usize = 26;

const ALL: u32 = (1 << NLETTERS) - 1;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

/// A bitset of letters.
///
/// Used for the outgoing edges of a lexicon node and for the letters allowed by a cross-check.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// The set with all 26 letters
    pub fn all() -> LetterSet {
        LetterSet(ALL)
    }

    pub fn contains(&self, label: Label) -> bool {
        (label as usize) < NLETTERS && self.0 & (1 << label) != 0
    }

    /// Check if the set contains letter `ch`, ignoring case.
    pub fn contains_letter(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() && self.contains(ch.to_ascii_uppercase() as u8 - b'A')
    }

    /// Insert `label`, returns `true` if it was not yet present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!((label as usize) < NLETTERS);
        let present = self.contains(label);
        self.0 |= 1 << label;
        !present
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }
}

/// Shows the letters as a string, e.g. `AEIOU`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(|label| (b'A' + label) as char).collect();
        write!(f, "{}", s)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

pub struct IteratorLetterSet {
    value: u32,
}

impl IteratorLetterSet {
    pub fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let i = self.value.trailing_zeros();
        self.value &= self.value - 1;
        Some(i as Label)
    }
}

impl FromIterator<Label> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl From<Vec<Label>> for LetterSet {
    fn from(v: Vec<Label>) -> Self {
        v.into_iter().collect()
    }
}

impl From<LetterSet> for Vec<Label> {
    fn from(set: LetterSet) -> Self {
        set.iter().collect()
    }
}
