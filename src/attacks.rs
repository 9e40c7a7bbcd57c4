// This file is part of the arcade-chess library.
// Copyright (C) 2026 The arcade-chess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Movement offsets and attack detection.
//!
//! # Example
//!
//! ```
//! use arcade_chess::{attacks, Board, Color, Square};
//!
//! let board = Board::new();
//! assert!(attacks::is_square_under_attack(&board, Square::F3, Color::White));
//! assert!(!attacks::is_square_under_attack(&board, Square::E4, Color::White));
//! assert!(attacks::is_square_under_attack(&board, Square::F6, Color::Black));
//! ```

use crate::{Board, Color, Role, Square};

/// `(row, col)` steps of the knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// `(row, col)` steps of the king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal sliding directions of rooks and queens.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal sliding directions of bishops and queens.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Tests if a piece of color `by` attacks `sq`.
///
/// Attacks are pseudo-legal: a pinned piece still attacks, and whether the
/// attacker would expose its own king does not matter. This is the leaf
/// primitive below check detection and must not call into move generation.
pub fn is_square_under_attack(board: &Board, sq: Square, by: Color) -> bool {
    pawn_attacks_to(board, sq, by)
        || stepper_attacks_to(board, sq, by, Role::Knight, &KNIGHT_OFFSETS)
        || slider_attacks_to(board, sq, by, Role::Rook, &ROOK_DIRECTIONS)
        || slider_attacks_to(board, sq, by, Role::Bishop, &BISHOP_DIRECTIONS)
        || stepper_attacks_to(board, sq, by, Role::King, &KING_OFFSETS)
}

fn pawn_attacks_to(board: &Board, sq: Square, by: Color) -> bool {
    // An attacking pawn stands one step behind the target, seen from its
    // direction of advance.
    [-1, 1].into_iter().any(|dcol| {
        sq.offset(-by.forward(), dcol)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|piece| piece.is(by, Role::Pawn))
    })
}

fn stepper_attacks_to(
    board: &Board,
    sq: Square,
    by: Color,
    role: Role,
    offsets: &[(i8, i8)],
) -> bool {
    offsets.iter().any(|&(drow, dcol)| {
        sq.offset(drow, dcol)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|piece| piece.is(by, role))
    })
}

/// `role` is the pure slider for these directions. Queens attack along
/// every direction.
fn slider_attacks_to(
    board: &Board,
    sq: Square,
    by: Color,
    role: Role,
    directions: &[(i8, i8)],
) -> bool {
    directions.iter().any(|&(drow, dcol)| {
        first_piece_on_ray(board, sq, drow, dcol).is_some_and(|(_, piece)| {
            piece.color == by && (piece.role == role || piece.role == Role::Queen)
        })
    })
}

/// Walks from `from` (exclusive) in the given direction and returns the
/// first occupied square.
fn first_piece_on_ray(
    board: &Board,
    from: Square,
    drow: i8,
    dcol: i8,
) -> Option<(Square, crate::Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(drow, dcol) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        sq = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().expect("valid board fen")
    }

    #[test]
    fn test_pawn_attacks() {
        let board = board("4k3/8/8/3p4/8/8/4P3/4K3");
        // White pawn on e2 attacks d3 and f3.
        assert!(is_square_under_attack(&board, Square::D3, Color::White));
        assert!(is_square_under_attack(&board, Square::F3, Color::White));
        assert!(!is_square_under_attack(&board, Square::E3, Color::White));
        // Black pawn on d5 attacks c4 and e4, not c6.
        assert!(is_square_under_attack(&board, Square::C4, Color::Black));
        assert!(is_square_under_attack(&board, Square::E4, Color::Black));
        assert!(!is_square_under_attack(&board, Square::C6, Color::Black));
    }

    #[test]
    fn test_slider_blocking() {
        let board = board("4k3/8/8/8/R2n3q/8/8/4K3");
        // Rook a4 is blocked by the knight on d4.
        assert!(is_square_under_attack(&board, Square::C4, Color::White));
        assert!(is_square_under_attack(&board, Square::D4, Color::White));
        assert!(!is_square_under_attack(&board, Square::E4, Color::White));
        // Queen h4 attacks along the rank and diagonals.
        assert!(is_square_under_attack(&board, Square::E4, Color::Black));
        assert!(is_square_under_attack(&board, Square::E1, Color::Black));
        assert!(!is_square_under_attack(&board, Square::B4, Color::Black));
    }

    #[test]
    fn test_knight_and_king() {
        let board = board("4k3/8/8/8/3N4/8/8/4K3");
        assert!(is_square_under_attack(&board, Square::E6, Color::White));
        assert!(is_square_under_attack(&board, Square::B3, Color::White));
        assert!(is_square_under_attack(&board, Square::F2, Color::White));
        assert!(is_square_under_attack(&board, Square::D7, Color::Black));
        assert!(!is_square_under_attack(&board, Square::D6, Color::Black));
    }

    #[test]
    fn test_rook_does_not_attack_diagonally() {
        let board = board("4k3/8/8/8/3r4/8/8/7K");
        assert!(!is_square_under_attack(&board, Square::E5, Color::Black));
        assert!(is_square_under_attack(&board, Square::D1, Color::Black));
    }
}
