//! A scrabble solver library for Rust.
//! <br>
//! This crate finds all legal plays for a rack of tiles on a scrabble board, scores them,
//! and picks one with a strategy. It can be used to study strategies in the game, or to
//! play a full game between computer players.
//! It can use the `rayon` crate to search the rows and columns of the board in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by creating a lexicon from a word list, and a board.
//! By default the standard 15x15 layout is used, but you can specify your own grid.
//! The word list must contain one word per line; words are converted to uppercase.
//! A lexicon can also be saved and loaded in `bincode` format (feature `bincode`).
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{Board, Letters, Lexicon, Strategy};
//!
//! let lexicon = Lexicon::from_word_list(&["rust", "rest", "trust"]);
//! let mut board = Board::new();
//! let rack: Letters = "RUSTA?E".parse()?;
//! let moves = lexicon.find_words(&board, &rack);
//! for mv in &moves {
//!     println!("{} {}", mv, mv.score());
//! }
//! let best = Strategy::HighestScore.choose(&moves);
//! board.is_valid_move(&best, &lexicon, &rack)?;
//! let used = board.play(&best)?;
//! assert_eq!(used.len(), best.word_len());
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Moves
//! A move is written as a word followed by its position, like `"COMRADE H8"`.
//! The position is the column letter and row number for a word down (`H8`),
//! or the row number and column letter for a word across (`8H`).
//! Letters already on the board are put in parentheses, blanks are written in lowercase:
//! `"(S)U(B)WaY J8"`. A trade is written as the traded tiles followed by `--`.
//!
//! # About implementation
//! The lexicon is a trie stored in an arena of nodes. Each node keeps the set of letters
//! of its outgoing edges in a [`LetterSet`], a 32 bit bitmap.
//! The move generator uses the anchor based algorithm of Appel and Jacobson:
//! every square next to a tile on the board is an anchor, and each new word must cover one.
//! For each anchor a cross-check set is computed: the letters that form a valid word with the tiles
//! above and below (or left and right of) the square. Cross-checks are cached per board, and cleared
//! when the board changes.
//!
//! Rows and columns are searched with the same code: a [`Direction`] maps a lane and a position in the lane
//! to a square, so the board is never transposed during the search.
//!
//! # Benchmarks
//! Benchmarks for the lexicon and the move generator are in `benches`, and can be run with `cargo bench`.
mod board;
mod error;
mod generator;
mod grid;
mod letterset;
mod lexicon;
mod moves;
mod strategy;
mod tilebag;
mod tiles;

pub use board::{Board, CrossCheck, Square};
pub use error::Error;
pub use grid::{Bonus, Grid, CENTER, N};
pub use letterset::{Label, LetterSet};
pub use lexicon::{Lexicon, NodeId, ROOT};
pub use moves::{Direction, Move, BINGO_BONUS, RACK_SIZE};
pub use strategy::Strategy;
pub use tilebag::TileBag;
pub use tiles::{letter_score, Letter, Letters, Tile, BLANK};
