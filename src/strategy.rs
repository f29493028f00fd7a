use crate::moves::Move;
use crate::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a player picks a move from the candidates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// The move with the highest score
    HighestScore,
    /// The move with the lowest score
    LowestScore,
    /// The move that forms the most words
    MostWords,
    /// The move that uses the most tiles
    MostLetters,
    /// The move that uses the fewest tiles
    LeastLetters,
    /// The move with the longest word
    LongestWord,
    /// The move with the shortest word
    ShortestWord,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::HighestScore
    }
}

const STRATEGIES: [(Strategy, &str); 7] = [
    (Strategy::HighestScore, "HighestScore"),
    (Strategy::LowestScore, "LowestScore"),
    (Strategy::MostWords, "MostWords"),
    (Strategy::MostLetters, "MostLetters"),
    (Strategy::LeastLetters, "LeastLetters"),
    (Strategy::LongestWord, "LongestWord"),
    (Strategy::ShortestWord, "ShortestWord"),
];

impl Strategy {
    /// Compare two moves; `Greater` means `a` is preferred.
    fn compare(self, a: &Move, b: &Move) -> Ordering {
        match self {
            Strategy::HighestScore => a.score().cmp(&b.score()),
            Strategy::LowestScore => b.score().cmp(&a.score()),
            Strategy::MostWords => a.words().cmp(&b.words()),
            Strategy::MostLetters => a.used().cmp(&b.used()),
            Strategy::LeastLetters => b.used().cmp(&a.used()),
            Strategy::LongestWord => a.word_len().cmp(&b.word_len()),
            Strategy::ShortestWord => b.word_len().cmp(&a.word_len()),
        }
    }

    /// Pick a move from `moves`. Of equally good moves the first is kept.
    /// Returns a pass if there are no moves.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Move, Strategy};
    /// assert!(Strategy::HighestScore.choose(&[]).is_pass());
    /// ```
    pub fn choose(self, moves: &[Move]) -> Move {
        let mut iter = moves.iter();
        let first = match iter.next() {
            Some(first) => first,
            None => return Move::pass(),
        };
        iter.fold(first, |best, mv| {
            if self.compare(mv, best) == Ordering::Greater {
                mv
            } else {
                best
            }
        })
        .clone()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = STRATEGIES
            .iter()
            .find(|(strategy, _)| strategy == self)
            .map_or("", |&(_, name)| name);
        write!(f, "{}", name)
    }
}

/// Parse a strategy by name, ignoring case.
impl FromStr for Strategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STRATEGIES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|&(strategy, _)| strategy)
            .ok_or_else(|| Error::UnknownStrategy(String::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Direction};

    type Result<T> = std::result::Result<T, Error>;

    fn candidates() -> Result<Vec<Move>> {
        let board = Board::new();
        ["CAT 8H", "CATS 8G", "AT 8H", "ZA 8H", "ZAX H7"]
            .iter()
            .map(|s| Move::parse(s, Some(&board)))
            .collect()
    }

    #[test]
    fn test_choose() -> Result<()> {
        let moves = candidates()?;
        let chosen = |strategy: Strategy| strategy.choose(&moves).to_string();
        assert_eq!(chosen(Strategy::HighestScore), "ZAX H7");
        assert_eq!(chosen(Strategy::LowestScore), "AT 8H");
        assert_eq!(chosen(Strategy::MostLetters), "CATS 8G");
        assert_eq!(chosen(Strategy::LeastLetters), "AT 8H");
        assert_eq!(chosen(Strategy::LongestWord), "CATS 8G");
        assert_eq!(chosen(Strategy::ShortestWord), "AT 8H");
        assert_eq!(chosen(Strategy::MostWords), "CAT 8H");
        Ok(())
    }

    #[test]
    fn test_choose_keeps_first() -> Result<()> {
        let board = Board::new();
        let a = Move::from_placement(7, 7, Direction::Across, "AT", Some(&board))?;
        let b = Move::from_placement(7, 7, Direction::Down, "AT", Some(&board))?;
        assert_eq!(a.score(), b.score());
        let chosen = Strategy::default().choose(&[a.clone(), b]);
        assert_eq!(chosen, a);
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<()> {
        assert_eq!("mostwords".parse::<Strategy>()?, Strategy::MostWords);
        assert_eq!(Strategy::ShortestWord.to_string(), "ShortestWord");
        for &(strategy, name) in STRATEGIES.iter() {
            assert_eq!(name.parse::<Strategy>()?, strategy);
        }
        assert!(matches!("Training".parse::<Strategy>(), Err(Error::UnknownStrategy(_))));
        Ok(())
    }
}
