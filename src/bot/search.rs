// Baseline fixed-depth negamax search.
//
// Negamax is a variant of the minimax algorithm that exploits the zero-sum
// property of chess: max(a, b) = -min(-a, -b). One function serves both
// players by negating the child's score at each level.
//
// This variant walks the full tree with no pruning, no memoization and no
// time awareness; it is the reference semantics the memoized search in
// `memoized.rs` must match on first traversal.

use crate::board::Board;
use crate::bot::evaluation::evaluate;
use chess::ChessMove;

/// Score for leaving the opponent without a legal move. Exceeds any reachable
/// material total (even eight promoted queens stay well under 200), so a
/// branch that ends the game always outranks a material gain.
pub const TERMINAL_SCORE: i32 = 1_000;

/// Result of one search call, from the perspective of the side to move at
/// the searched position.
///
/// `NoLegalMoves` replaces the "default move, minimal score" sentinel:
/// checkmate and stalemate surface as a distinct case the caller must handle
/// instead of a meaningless move that must never be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Depth exhausted: static evaluation only, no move attached.
    Leaf(i32),
    /// Best move found, with its negamax score.
    Decisive { mv: ChessMove, score: i32 },
    /// The side to move has no legal move (checkmate or stalemate).
    NoLegalMoves,
}

impl SearchOutcome {
    /// Score of this node for the side that moves at it. A node with no
    /// legal moves is a lost game for its mover.
    pub fn mover_score(&self) -> i32 {
        match *self {
            SearchOutcome::Leaf(score) | SearchOutcome::Decisive { score, .. } => score,
            SearchOutcome::NoLegalMoves => -TERMINAL_SCORE,
        }
    }

    /// Negamax candidate score the parent derives from this child outcome.
    pub fn score_for_parent(&self) -> i32 {
        -self.mover_score()
    }

    /// The chosen move, if this outcome carries one.
    pub fn best_move(&self) -> Option<ChessMove> {
        match *self {
            SearchOutcome::Decisive { mv, .. } => Some(mv),
            _ => None,
        }
    }
}

/// Exhaustive negamax walk to a fixed depth, scoring leaves with the static
/// material evaluation.
///
/// Every legal move is applied, searched one ply shallower, negated and
/// reverted; the strictly greatest score wins, so ties keep the first move
/// in enumeration order. The board is bit-for-bit unchanged when this
/// returns: the apply/revert pairs are balanced by the [`Board::push`]
/// guard on every path.
pub fn search(board: &mut Board, depth: u32) -> SearchOutcome {
    if depth == 0 {
        return SearchOutcome::Leaf(evaluate(board));
    }

    let mut best: Option<(ChessMove, i32)> = None;

    for mv in board.legal_moves() {
        let mut applied = board.push(mv);
        let score = search(applied.board(), depth - 1).score_for_parent();
        drop(applied);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => SearchOutcome::Decisive { mv, score },
        None => SearchOutcome::NoLegalMoves,
    }
}
