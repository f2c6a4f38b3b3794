//! Board adapter over the [`chess`] crate's move/position engine.
//!
//! The search modules never talk to the engine directly; everything they need
//! (legal move enumeration, move application and reversion, position hashing,
//! side-to-move and bitboard queries) goes through this wrapper. The `chess`
//! crate is copy-make, so reverting a move is restoring the snapshot taken
//! before it was applied - which makes the "every apply is matched by exactly
//! one revert" discipline enforceable with a scope guard instead of a
//! convention.

use chess::{BitBoard, Board as RawBoard, BoardStatus, ChessMove, Color, Error, MoveGen, Piece};
use smallvec::SmallVec;
use std::str::FromStr;

/// Legal moves for one position. Sized so typical positions never spill to
/// the heap (the legal-move count rarely exceeds 40).
pub type MoveList = SmallVec<[ChessMove; 64]>;

/// Full board state plus side to move, mutated in place by [`Board::push`]
/// and restored when the returned [`AppliedMove`] guard is dropped.
pub struct Board {
    current: RawBoard,
    /// Number of currently applied (not yet reverted) moves.
    ply: usize,
}

impl Board {
    /// Standard chess starting position.
    pub fn new() -> Self {
        Self {
            current: RawBoard::default(),
            ply: 0,
        }
    }

    /// Build a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, Error> {
        Ok(Self {
            current: RawBoard::from_str(fen)?,
            ply: 0,
        })
    }

    /// All legal moves in the engine's enumeration order. The order is
    /// deterministic for a given position, and ties between equally scored
    /// moves are broken by it, so it is part of the observable contract.
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.current).collect()
    }

    /// Apply `mv` and return a guard that reverts it when dropped. The revert
    /// runs on every exit path, including unwinding, so the position can
    /// never be left with a half-applied move.
    pub fn push(&mut self, mv: ChessMove) -> AppliedMove<'_> {
        let prev = self.current;
        self.current = self.current.make_move_new(mv);
        self.ply += 1;
        AppliedMove { board: self, prev }
    }

    /// Play `mv` permanently, with no revert. For advancing the game between
    /// turns; searches use [`Board::push`] instead.
    pub fn commit(&mut self, mv: ChessMove) {
        self.current = self.current.make_move_new(mv);
    }

    /// 64-bit Zobrist fingerprint of the current position. Probabilistically
    /// unique; collisions are possible and not detected here.
    pub fn hash(&self) -> u64 {
        self.current.get_hash()
    }

    pub fn is_white_to_move(&self) -> bool {
        self.current.side_to_move() == Color::White
    }

    /// Number of pieces of one kind for one side, via bitboard popcount.
    pub fn piece_count(&self, piece: Piece, white: bool) -> u32 {
        let color = if white { Color::White } else { Color::Black };
        let bitboard: BitBoard = *self.current.pieces(piece) & *self.current.color_combined(color);
        bitboard.popcnt()
    }

    /// Terminal-state classification of the current position.
    pub fn status(&self) -> BoardStatus {
        self.current.status()
    }

    /// Depth of applied-but-unreverted moves. Zero whenever no search is in
    /// flight; used to assert apply/revert balance.
    pub fn ply(&self) -> usize {
        self.ply
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for an applied move. Holds the pre-move snapshot and writes it
/// back on drop.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    prev: RawBoard,
}

impl AppliedMove<'_> {
    /// The board with the move applied, for recursing into the child.
    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.current = self.prev;
        self.board.ply -= 1;
    }
}
