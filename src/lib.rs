//! A chess bot that picks one move per turn by exhaustively searching a
//! fixed-depth game tree with negamax and scoring leaves by material count.
//!
//! Move generation, move application and position hashing come from the
//! [`chess`] crate behind the [`board::Board`] adapter; [`bot`] holds the
//! evaluator, both search variants and the per-turn entry point.

pub mod board;
pub mod bot;
