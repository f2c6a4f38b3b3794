//! Turn entry point: one call per turn, one move back.
//!
//! The orchestrator hands over the current position and a thinking-time
//! budget; the bot rebuilds its per-turn search state, runs the memoized
//! search to its fixed depth and reports the outcome. The time budget is
//! accepted but deliberately never consulted - the search has no early
//! abort, so depth, not time, bounds the work (callers picking a depth pick
//! their own worst case).

use std::time::Duration;

use log::{debug, info};

use crate::board::Board;
use crate::bot::memoized::{search_memo, SearchContext};
use crate::bot::search::SearchOutcome;

/// Default search depth in plies, matching the memoized search's original
/// tuning.
pub const DEFAULT_DEPTH: u32 = 6;

/// Fixed-depth move chooser.
pub struct Bot {
    depth: u32,
}

impl Bot {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Bot searching `depth` plies. Clamped to at least 1 so a turn always
    /// produces a move when one exists.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Select a move for the side to move. Returns
    /// [`SearchOutcome::NoLegalMoves`] on checkmate or stalemate; for any
    /// position with at least one legal move the outcome is `Decisive` and
    /// the move is drawn from the position's legal-move set. Two calls on an
    /// unmodified board return the same move and score, and the board is
    /// unchanged afterwards.
    pub fn choose_move(&self, board: &mut Board, _time_budget: Duration) -> SearchOutcome {
        // All transient state lives for exactly one turn.
        let mut ctx = SearchContext::new();

        let outcome = search_memo(board, self.depth, &mut ctx);

        match outcome {
            SearchOutcome::Decisive { mv, score } => {
                info!("making move {mv} w/ evaluation {score}");
            }
            SearchOutcome::NoLegalMoves => {
                info!("no legal moves: checkmate or stalemate");
            }
            SearchOutcome::Leaf(score) => {
                // Unreachable with the depth clamp; logged for completeness.
                info!("depth 0 leaf, static evaluation {score}");
            }
        }

        let unique = ctx.seen.len();
        if ctx.leaf_nodes > 0 {
            info!(
                "seen {} leaf nodes, {} ({:.2}%) were unique",
                ctx.leaf_nodes,
                unique,
                100.0 * unique as f64 / ctx.leaf_nodes as f64
            );
        }
        debug!(
            "transposition table: {} entries, hit rate {:.2}%",
            ctx.table.len(),
            100.0 * ctx.table.hit_rate()
        );

        outcome
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}
