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

//! Pseudo-legal move generation.
//!
//! The generators here obey piece movement patterns and never capture
//! friendly pieces, but do not check whether the mover's own king is left in
//! check. King steps are the exception: each destination is tested with
//! [`is_square_under_attack()`] on the unchanged board, and castling
//! carries its full set of conditions. The complete legality filter lives in
//! [`Rules::get_valid_moves()`](crate::Rules::get_valid_moves).

use crate::{
    attacks::{
        is_square_under_attack, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
    },
    Board, CastlingSide, Color, Move, MoveFlags, MoveList, Piece, Role, Square,
};

/// Appends the pseudo-legal moves of the piece on `from`.
///
/// Pawn moves onto the far row carry `promotion`. Nothing is appended for
/// an empty square.
pub fn pseudo_legal_moves(board: &Board, from: Square, promotion: Role, moves: &mut MoveList) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    match piece.role {
        Role::Pawn => gen_pawn_moves(board, from, piece.color, promotion, moves),
        Role::Knight => KnightTag::gen_moves(board, from, piece.color, moves),
        Role::Bishop => BishopTag::gen_moves(board, from, piece.color, moves),
        Role::Rook => RookTag::gen_moves(board, from, piece.color, moves),
        Role::Queen => QueenTag::gen_moves(board, from, piece.color, moves),
        Role::King => {
            gen_king_steps(board, from, piece.color, moves);
            gen_castling_moves(board, from, piece, moves);
        }
    }
}

/// Destination is empty or holds an enemy piece. `None` for friendly
/// pieces.
fn target_flags(board: &Board, to: Square, us: Color) -> Option<MoveFlags> {
    match board.color_at(to) {
        None => Some(MoveFlags::empty()),
        Some(color) if color != us => Some(MoveFlags::CAPTURE),
        Some(_) => None,
    }
}

trait Stepper {
    const ROLE: Role;
    const OFFSETS: &'static [(i8, i8)];

    fn gen_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
        debug_assert_eq!(board.role_at(from), Some(Self::ROLE));
        for &(drow, dcol) in Self::OFFSETS {
            let Some(to) = from.offset(drow, dcol) else {
                continue;
            };
            if let Some(flags) = target_flags(board, to, us) {
                moves.push(Move::new(from, to).with_flags(flags));
            }
        }
    }
}

trait Slider {
    const ROLE: Role;
    const DIRECTIONS: &'static [(i8, i8)];

    fn gen_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
        debug_assert_eq!(board.role_at(from), Some(Self::ROLE));
        for &(drow, dcol) in Self::DIRECTIONS {
            let mut sq = from;
            while let Some(to) = sq.offset(drow, dcol) {
                match board.color_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(color) => {
                        if color != us {
                            moves.push(Move::new(from, to).with_flags(MoveFlags::CAPTURE));
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
    }
}

struct KingTag;
struct KnightTag;
struct BishopTag;
struct RookTag;
struct QueenTag;

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

impl Stepper for KingTag {
    const ROLE: Role = Role::King;
    const OFFSETS: &'static [(i8, i8)] = &KING_OFFSETS;
}

impl Stepper for KnightTag {
    const ROLE: Role = Role::Knight;
    const OFFSETS: &'static [(i8, i8)] = &KNIGHT_OFFSETS;
}

impl Slider for BishopTag {
    const ROLE: Role = Role::Bishop;
    const DIRECTIONS: &'static [(i8, i8)] = &BISHOP_DIRECTIONS;
}

impl Slider for RookTag {
    const ROLE: Role = Role::Rook;
    const DIRECTIONS: &'static [(i8, i8)] = &ROOK_DIRECTIONS;
}

impl Slider for QueenTag {
    const ROLE: Role = Role::Queen;
    const DIRECTIONS: &'static [(i8, i8)] = &QUEEN_DIRECTIONS;
}

fn push_pawn_move(m: Move, us: Color, promotion: Role, moves: &mut MoveList) {
    if m.to.row() == us.promotion_row() {
        moves.push(m.with_promotion(promotion));
    } else {
        moves.push(m);
    }
}

fn gen_pawn_moves(board: &Board, from: Square, us: Color, promotion: Role, moves: &mut MoveList) {
    let forward = us.forward();

    if let Some(single) = from.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
        push_pawn_move(Move::new(from, single), us, promotion, moves);

        if from.row() == us.pawn_row() {
            if let Some(double) = single.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
                moves.push(Move::new(from, double));
            }
        }
    }

    for dcol in [-1, 1] {
        let Some(to) = from.offset(forward, dcol) else {
            continue;
        };
        if board.color_at(to).is_some_and(|color| color != us) {
            push_pawn_move(
                Move::new(from, to).with_flags(MoveFlags::CAPTURE),
                us,
                promotion,
                moves,
            );
        }
    }
}

fn gen_king_steps(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    let mut steps = MoveList::new();
    KingTag::gen_moves(board, from, us, &mut steps);
    moves.extend(
        steps
            .into_iter()
            .filter(|m| !is_square_under_attack(board, m.to, !us)),
    );
}

fn gen_castling_moves(board: &Board, from: Square, king: Piece, moves: &mut MoveList) {
    let us = king.color;
    let home = Square::new_unchecked(us.backrank(), 4);

    if king.moved || from != home || is_square_under_attack(board, from, !us) {
        return;
    }

    for side in CastlingSide::ALL {
        let rook_from = side.rook_from(us);
        let king_to = side.king_to(us);

        let rook_ready = board
            .piece_at(rook_from)
            .is_some_and(|rook| rook.is(us, RookTag::ROLE) && !rook.moved);
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if rook_from.col() < from.col() {
            (rook_from.col() + 1, from.col())
        } else {
            (from.col() + 1, rook_from.col())
        };
        let path_clear = (lo..hi)
            .filter_map(|col| Square::new(us.backrank(), col))
            .all(|sq| !board.is_occupied(sq));
        if !path_clear {
            continue;
        }

        let mut transit = from;
        let mut safe = true;
        while transit != king_to {
            let Some(next) = transit.offset(0, side.direction()) else {
                safe = false;
                break;
            };
            if is_square_under_attack(board, next, !us) {
                safe = false;
                break;
            }
            transit = next;
        }

        if safe {
            moves.push(Move::castle(from, king_to, side));
        }
    }
}
