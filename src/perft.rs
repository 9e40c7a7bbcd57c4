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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use arcade_chess::{perft, Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(perft(&board, Color::White, 1), 20);
//! assert_eq!(perft(&board, Color::White, 2), 400);
//! ```

use crate::{legal_moves_for, make_move, Board, Color};

/// Counts legal move paths of a given length, starting with `turn` and
/// alternating colors.
///
/// Paths ending in mate or stalemate are not counted unless it occurs in
/// the final position. Useful for comparing, testing and debugging move
/// generation correctness and performance.
pub fn perft(board: &Board, turn: Color, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = legal_moves_for(board, turn);

    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .iter()
            .filter_map(|m| make_move(board, m).board)
            .map(|child| perft(&child, !turn, depth - 1))
            .sum()
    }
}
