use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// A letter in the move disagrees with the letter already on the board
    #[error("Letter is incorrect at ({row}, {col}), have: {have} want: {want}")]
    PlacementConflict {
        row: usize,
        col: usize,
        have: char,
        want: char,
    },

    /// Attempt to place (part of) a word outside the board
    #[error("Move extends outside board limits ({row},{col})")]
    OutOfBounds { row: usize, col: usize },

    /// The main word, or a word formed in the crossing direction, is unknown
    #[error("'{0}' is not a word in the lexicon")]
    NotInLexicon(String),

    /// The move uses a tile that is not in the rack
    #[error("'{0}' used in move but not in rack")]
    TileUnavailable(char),

    /// The move does not touch an anchor (on an empty board: the center square)
    #[error("Move was not placed on an anchor")]
    NoAnchor,

    /// The position token of a move can not be parsed
    #[error("Invalid placement \"{0}\"")]
    InvalidPlacement(String),

    /// Character is not a letter or a blank
    #[error("Invalid tile '{0}'")]
    InvalidTile(char),

    /// A list of tiles does not fit in a rack
    #[error("Too many tiles: {0}")]
    TooManyTiles(usize),

    /// Unknown name for a move selection strategy
    #[error("Unknown strategy \"{0}\"")]
    UnknownStrategy(String),

    /// Error reading word list
    #[error("Word list \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error parsing a bonus grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row of the bonus grid needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Error deserializing a prebuilt lexicon
    #[cfg(feature = "bincode")]
    #[error("Lexicon {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// Error serializing a lexicon
    #[cfg(feature = "bincode")]
    #[error("Lexicon {0} could not be serialized")]
    LexiconSerializeError(String),
}
