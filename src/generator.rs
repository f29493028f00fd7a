//! Find all moves for a rack with the anchor-based search of Appel and Jacobson.
//!
//! Every lane (a row for words across, a column for words down) is searched
//! separately. For each anchor in the lane, a word is built from a left part
//! and a right part:
//! - If the square before the anchor holds a tile, the tiles before the anchor are
//!   the left part, and only the right part is searched.
//! - Otherwise the left part is placed from the rack on the free squares before the
//!   anchor. These squares are no anchors, so each word is found from one anchor only.
//!
//! The right part is extended square by square, following the trie. Tiles already on
//! the board must match a trie edge; on an empty square a rack tile is placed if the
//! cross-check of the square allows it.
use crate::board::{Board, CrossCheck};
use crate::grid::N;
use crate::letterset::{Label, NLETTERS};
use crate::lexicon::{Lexicon, NodeId, ROOT};
use crate::moves::{Direction, Move, RACK_SIZE};
use crate::tiles::{Letter, Tile};
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

const BLANK_INDEX: usize = NLETTERS;

/// The number of tiles in the rack per label, with the blanks at `BLANK_INDEX`.
#[derive(Debug, Clone)]
struct Tally([u8; NLETTERS + 1]);

impl Tally {
    fn new(rack: &[Letter]) -> Tally {
        let mut counts = [0u8; NLETTERS + 1];
        for letter in rack {
            let i = letter.label().map_or(BLANK_INDEX, usize::from);
            counts[i] = counts[i].saturating_add(1);
        }
        Tally(counts)
    }
}

/// Search state for one lane.
struct LaneSearch<'a> {
    lexicon: &'a Lexicon,
    board: &'a Board,
    direction: Direction,
    lane: usize,
    anchor: usize,
    tally: Tally,
    /// The word built so far: each tile, and whether it is placed from the rack
    cells: Vec<(Tile, bool)>,
    placed: usize,
    moves: Vec<Move>,
}

impl<'a> LaneSearch<'a> {
    fn new(
        lexicon: &'a Lexicon,
        board: &'a Board,
        direction: Direction,
        lane: usize,
        rack: &[Letter],
    ) -> LaneSearch<'a> {
        LaneSearch {
            lexicon,
            board,
            direction,
            lane,
            anchor: 0,
            tally: Tally::new(rack),
            cells: Vec::with_capacity(N),
            placed: 0,
            moves: Vec::new(),
        }
    }

    #[inline]
    fn tile(&self, pos: usize) -> Option<Tile> {
        let (row, col) = self.direction.coords(self.lane, pos);
        self.board.tile_at(row, col)
    }

    #[inline]
    fn is_anchor(&self, pos: usize) -> bool {
        let (row, col) = self.direction.coords(self.lane, pos);
        self.board.is_anchor(row, col)
    }

    fn cross_check(&self, pos: usize) -> CrossCheck {
        let (row, col) = self.direction.coords(self.lane, pos);
        self.board
            .cross_check(row, col, self.direction, self.lexicon)
            .unwrap_or(CrossCheck::Unconstrained)
    }

    fn run(mut self) -> Vec<Move> {
        for anchor in 0..N {
            if !self.is_anchor(anchor) {
                continue;
            }
            self.anchor = anchor;
            self.cells.clear();
            if anchor > 0 && self.tile(anchor - 1).is_some() {
                let mut start = anchor - 1;
                while start > 0 && self.tile(start - 1).is_some() {
                    start -= 1;
                }
                let prefix: Vec<Tile> = (start..anchor).filter_map(|pos| self.tile(pos)).collect();
                let lexicon = self.lexicon;
                let node = prefix
                    .iter()
                    .try_fold(ROOT, |node, tile| lexicon.child(node, tile.label()));
                match node {
                    Some(node) => {
                        self.cells.extend(prefix.into_iter().map(|tile| (tile, false)));
                        self.extend_right(node, anchor);
                    }
                    None => {
                        let (row, col) = self.direction.coords(self.lane, anchor);
                        trace!(
                            "skip anchor ({}, {}) {}: no word starts with {:?}",
                            row,
                            col,
                            self.direction,
                            prefix.iter().map(Tile::to_char).collect::<String>()
                        );
                    }
                }
            } else {
                let limit = (1..=anchor)
                    .map(|k| anchor - k)
                    .take_while(|&pos| self.tile(pos).is_none() && !self.is_anchor(pos))
                    .take(RACK_SIZE - 1)
                    .count();
                self.extend_left(ROOT, limit);
            }
        }
        self.moves
    }

    /// Take a tile for `label` from the rack (a blank if `blank`), add it to the word,
    /// run `next`, and put the tile back.
    #[inline]
    fn with_tile(&mut self, label: Label, blank: bool, next: impl FnOnce(&mut Self)) {
        let index = if blank { BLANK_INDEX } else { label as usize };
        if self.tally.0[index] == 0 {
            return;
        }
        self.tally.0[index] -= 1;
        self.cells.push((Tile::new(label, blank), true));
        self.placed += 1;
        next(self);
        self.placed -= 1;
        self.cells.pop();
        self.tally.0[index] += 1;
    }

    fn extend_left(&mut self, node: NodeId, limit: usize) {
        self.extend_right(node, self.anchor);
        if limit == 0 {
            return;
        }
        let lexicon = self.lexicon;
        for (label, child) in lexicon.children(node) {
            self.with_tile(label, false, |s| s.extend_left(child, limit - 1));
            self.with_tile(label, true, |s| s.extend_left(child, limit - 1));
        }
    }

    fn extend_right(&mut self, node: NodeId, pos: usize) {
        let lexicon = self.lexicon;
        if pos == N {
            self.emit(node, pos);
            return;
        }
        match self.tile(pos) {
            Some(tile) => {
                if let Some(child) = lexicon.child(node, tile.label()) {
                    self.cells.push((tile, false));
                    self.extend_right(child, pos + 1);
                    self.cells.pop();
                }
            }
            None => {
                self.emit(node, pos);
                let check = self.cross_check(pos);
                for (label, child) in lexicon.children(node) {
                    if !check.allows(label) {
                        continue;
                    }
                    self.with_tile(label, true, |s| s.extend_right(child, pos + 1));
                    self.with_tile(label, false, |s| s.extend_right(child, pos + 1));
                }
            }
        }
    }

    /// Add the word ending before `end` as a move, if it is a word that covers the anchor
    /// and uses at least one tile from the rack.
    fn emit(&mut self, node: NodeId, end: usize) {
        if end <= self.anchor || self.placed == 0 || !self.lexicon.is_final(node) {
            return;
        }
        let start = end - self.cells.len();
        let (row, col) = self.direction.coords(self.lane, start);
        let mv = Move::from_cells(row, col, self.direction, &self.cells, self.board);
        self.moves.push(mv);
    }
}

impl Lexicon {
    /// Find all moves that can be played with `rack` on `board`.
    ///
    /// Each move is valid (see [`Board::is_valid_move`]) and scored.
    /// Moves down are listed first, by column, then moves across, by row.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Letters, Lexicon, Error};
    /// let lexicon = Lexicon::from_word_list(&["the", "quick", "brown", "fox"]);
    /// let board = Board::new();
    /// let rack: Letters = "befnrowx".parse()?;
    /// let moves = lexicon.find_words(&board, &rack);
    /// assert_eq!(moves.len(), 16);
    /// # Ok::<(), Error>(())
    /// ```
    /// In this example 16 moves are returned: "BROWN" and "FOX" at each position
    /// through the center square, in both directions.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_words(&self, board: &Board, rack: &[Letter]) -> Vec<Move> {
        let lanes: Vec<(Direction, usize)> = [Direction::Down, Direction::Across]
            .iter()
            .flat_map(|&direction| (0..N).map(move |lane| (direction, lane)))
            .collect();
        let lane_moves =
            |&(direction, lane): &(Direction, usize)| LaneSearch::new(self, board, direction, lane, rack).run();
        let mut moves: Vec<Move> = Vec::new();
        #[cfg(feature = "rayon")]
        {
            moves.par_extend(lanes.par_iter().map(lane_moves).flatten());
        }
        #[cfg(not(feature = "rayon"))]
        {
            moves.extend(lanes.iter().map(lane_moves).flatten());
        }
        debug!(
            "found {} moves for rack {}",
            moves.len(),
            rack.iter().map(Letter::to_char).collect::<String>()
        );
        moves
    }
}
