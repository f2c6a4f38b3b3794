// Memoized negamax search.
//
// Same tree walk as `search.rs` with one difference: after applying a move,
// the child position's hash is looked up in the transposition table first.
// A hit short-circuits the whole branch; a miss recurses and stores the
// computed score under the child's hash. With an empty table the first
// traversal of any position is identical to the baseline search.

use std::collections::HashSet;

use crate::board::Board;
use crate::bot::evaluation::evaluate;
use crate::bot::search::SearchOutcome;
use crate::bot::transposition_table::TranspositionTable;

/// Mutable state for one turn of memoized search: the transposition table
/// plus traversal counters. Owned by a single entry-point invocation and
/// passed down the recursion, which makes the cache's lifetime and exclusive
/// ownership explicit; it is rebuilt empty every turn.
pub struct SearchContext {
    pub table: TranspositionTable,
    /// Distinct child positions encountered, for the uniqueness diagnostic.
    pub seen: HashSet<u64>,
    /// Children applied at the last ply before the leaves.
    pub leaf_nodes: u64,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            table: TranspositionTable::new(),
            seen: HashSet::new(),
            leaf_nodes: 0,
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-depth negamax walk that consults and populates the transposition
/// table in `ctx`.
///
/// Cached scores are stored from the perspective of the side to move at the
/// hashed position, so a hit is negated exactly like a recursion result.
/// Selection and tie-breaking match [`crate::bot::search::search`]; the
/// board is restored bit-for-bit before returning.
pub fn search_memo(board: &mut Board, depth: u32, ctx: &mut SearchContext) -> SearchOutcome {
    if depth == 0 {
        return SearchOutcome::Leaf(evaluate(board));
    }

    let mut best: Option<(chess::ChessMove, i32)> = None;

    for mv in board.legal_moves() {
        let mut applied = board.push(mv);
        let child = applied.board();
        let hash = child.hash();

        ctx.seen.insert(hash);
        if depth == 1 {
            ctx.leaf_nodes += 1;
        }

        let score = match ctx.table.probe(hash, depth - 1) {
            Some(cached) => -cached,
            None => {
                let child_score = search_memo(child, depth - 1, ctx).mover_score();
                ctx.table.store(hash, depth - 1, child_score);
                -child_score
            }
        };
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::search::{search, TERMINAL_SCORE};
    use chess::{ChessMove, Square};

    /// Depths up to 3 from a common root cannot revisit a position at a
    /// different remaining depth (that needs a null two-move cycle by one
    /// side), so the memoized walk must be score-identical to the baseline.
    #[test]
    fn test_matches_baseline_with_empty_table() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "4k3/8/8/3q4/2P5/8/8/1N4KR w - - 0 1",
        ] {
            for depth in 0..=3 {
                let mut board = Board::from_fen(fen).unwrap();
                let baseline = search(&mut board, depth);

                let mut ctx = SearchContext::new();
                let memoized = search_memo(&mut board, depth, &mut ctx);

                assert_eq!(
                    memoized.mover_score(),
                    baseline.mover_score(),
                    "depth {depth} score diverged on {fen}"
                );
                assert_eq!(memoized.best_move(), baseline.best_move());
            }
        }
    }

    #[test]
    fn test_populates_table() {
        let mut board = Board::new();
        let mut ctx = SearchContext::new();
        search_memo(&mut board, 2, &mut ctx);

        assert!(!ctx.table.is_empty());
        // 20 root children plus their children, all distinct positions.
        assert!(ctx.seen.len() > 20);
        assert!(ctx.leaf_nodes > 0);
    }

    #[test]
    fn test_warm_table_short_circuits() {
        let mut board = Board::new();
        let mut ctx = SearchContext::new();
        let cold = search_memo(&mut board, 3, &mut ctx);

        let hits_before = ctx.table.hits;
        let warm = search_memo(&mut board, 3, &mut ctx);

        assert!(ctx.table.hits > hits_before, "second pass should hit the cache");
        assert_eq!(warm, cold, "cache hits must not change the result");
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let mut board = Board::new();
        let mut ctx = SearchContext::new();
        assert_eq!(search_memo(&mut board, 0, &mut ctx), SearchOutcome::Leaf(0));
        assert!(ctx.table.is_empty());
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut board =
            Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
                .unwrap();
        let hash_before = board.hash();

        let mut ctx = SearchContext::new();
        search_memo(&mut board, 3, &mut ctx);

        assert_eq!(board.hash(), hash_before);
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_checkmate_and_stalemate_surface_as_no_legal_moves() {
        let mut mate =
            Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
                .unwrap();
        let mut stalemate = Board::from_fen("7k/8/5KQ1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        assert_eq!(search_memo(&mut mate, 2, &mut ctx), SearchOutcome::NoLegalMoves);
        assert_eq!(search_memo(&mut stalemate, 2, &mut ctx), SearchOutcome::NoLegalMoves);
    }

    #[test]
    fn test_terminal_children_are_cached_as_losses() {
        // Re8 mates; the mated child position must be cached as a loss for
        // its mover so a later encounter reproduces the terminal score.
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        let outcome = search_memo(&mut board, 2, &mut ctx);
        assert_eq!(outcome.best_move(), Some(ChessMove::new(Square::E1, Square::E8, None)));
        assert_eq!(outcome.mover_score(), TERMINAL_SCORE);

        let mated_hash = {
            let mut applied = board.push(ChessMove::new(Square::E1, Square::E8, None));
            applied.board().hash()
        };
        assert_eq!(ctx.table.probe(mated_hash, 1), Some(-TERMINAL_SCORE));
    }
}
