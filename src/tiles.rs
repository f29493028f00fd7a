//! Basic types for working with scrabble tiles.
mod letter;
mod letters;
mod tile;

pub use letter::Letter;
pub use letters::Letters;
pub use tile::Tile;

/// Maximum number of tiles in a [`Letters`](crate::Letters) list
pub(crate) const DIM: usize = 16;

/// The symbol used for an unassigned blank tile
pub const BLANK: char = '?';

/// Points for `A` .. `Z`
const POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Return the points for an uppercase letter.
/// Lowercase letters (blanks on the board), the blank symbol and anything else score 0.
/// ## Examples
/// ```
/// use scrabble_solver::letter_score;
/// assert_eq!(letter_score('Z'), 10);
/// assert_eq!(letter_score('z'), 0);
/// assert_eq!(letter_score('?'), 0);
/// ```
pub fn letter_score(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        POINTS[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}
