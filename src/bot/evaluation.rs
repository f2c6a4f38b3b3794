// Static material evaluation.
// Returns score in pawn units, always from the perspective of the side to move.

use crate::board::Board;
use chess::Piece;

/// Material value per piece kind, in pawn units. The king is excluded: it is
/// never off the board, so it contributes nothing to the balance.
pub const PIECE_VALUES: [(Piece, i32); 5] = [
    (Piece::Pawn, 1),
    (Piece::Knight, 3),
    (Piece::Bishop, 3),
    (Piece::Rook, 5),
    (Piece::Queen, 9),
];

/// Weighted material sum for one side: popcount of each kind's bitboard times
/// its value.
fn weighted_piece_sum(board: &Board, white: bool) -> i32 {
    PIECE_VALUES
        .iter()
        .map(|&(piece, value)| board.piece_count(piece, white) as i32 * value)
        .sum()
}

/// Material difference from the mover's perspective: positive means the side
/// to move is ahead. The sign flip on side to move is what makes a plain
/// negation at each ply (the negamax convention) correct.
///
/// Pure function of the position; no side effects.
pub fn evaluate(board: &Board) -> i32 {
    let white = weighted_piece_sum(board, true);
    let black = weighted_piece_sum(board, false);

    if board.is_white_to_move() {
        white - black
    } else {
        black - white
    }
}
