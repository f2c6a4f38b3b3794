// Fixed-depth negamax move chooser.
//
// The search core of the bot, leaves first:
// - evaluation: static material count, mover-relative
// - search: unmemoized fixed-depth negamax (reference semantics)
// - transposition_table: per-turn position-hash -> score cache
// - memoized: negamax walk that consults and fills the table
// - bot: the per-turn entry point the orchestrator calls
//
// Deliberately no pruning, no iterative deepening, no quiescence and no
// positional evaluation terms: the tree walk is exhaustive to a fixed depth
// and leaves are scored by material alone.

mod evaluation;
mod memoized;
mod player;
mod search;
mod transposition_table;

pub use player::{Bot, DEFAULT_DEPTH};
pub use evaluation::{evaluate, PIECE_VALUES};
pub use memoized::{search_memo, SearchContext};
pub use search::{search, SearchOutcome, TERMINAL_SCORE};
pub use transposition_table::{TranspositionTable, TtEntry};
