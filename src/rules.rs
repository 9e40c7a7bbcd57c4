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

//! Legal moves, move application and game-ending conditions.
//!
//! Every operation takes the board by reference and works on a clone. The
//! free functions use [`Rules::STANDARD`].
//!
//! # Examples
//!
//! ```
//! use arcade_chess::{get_valid_moves, make_move, Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = get_valid_moves(&board, Square::E2);
//! assert_eq!(moves.len(), 2);
//!
//! let result = make_move(&board, &moves[0]);
//! assert!(result.valid);
//! assert_eq!(result.check, None);
//!
//! // The caller's board is untouched.
//! assert_eq!(board, Board::new());
//! ```

use core::fmt;
use std::error::Error;

use tracing::{debug, trace};

use crate::{
    attacks::is_square_under_attack, material::is_insufficient_material, movegen, BishopDraw,
    Board, Color, Move, MoveFlags, MoveList, Piece, Role, Square,
};

/// Configuration of the rules engine.
///
/// The engine itself keeps no state: a `Rules` value is a plain `Copy`
/// configuration that can be shared freely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Role given to pawns reaching the far row in generated moves. Also
    /// substituted for pawn or king promotions in applied moves.
    pub promotion: Role,
    /// Classification of king and bishop against king and bishop.
    pub bishops: BishopDraw,
}

impl Rules {
    /// Queen promotion, unconditional bishop draw.
    pub const STANDARD: Rules = Rules {
        promotion: Role::Queen,
        bishops: BishopDraw::Unconditional,
    };

    fn promotion_role(&self, requested: Role) -> Role {
        if requested.is_promotable() {
            requested
        } else {
            self.promotion
        }
    }

    /// Role a pawn turns into when `m` is applied, if any. Pawns reaching
    /// the far row without a requested role take the default.
    fn resolve_promotion(&self, m: &Move, piece: Piece) -> Option<Role> {
        match m.promotion {
            Some(role) => Some(self.promotion_role(role)),
            None if piece.role == Role::Pawn && m.to.row() == piece.color.promotion_row() => {
                Some(self.promotion)
            }
            None => None,
        }
    }

    /// Gets the legal moves of the piece on `from`.
    ///
    /// Returns an empty list for an empty square.
    pub fn get_valid_moves(&self, board: &Board, from: Square) -> MoveList {
        let Some(piece) = board.piece_at(from) else {
            return MoveList::new();
        };

        let mut moves = MoveList::new();
        movegen::pseudo_legal_moves(board, from, self.promotion, &mut moves);
        moves.retain(|m| {
            let unsafe_for_king = would_leave_in_check(board, m, piece.color);
            if unsafe_for_king {
                trace!(%from, to = %m.to, "move leaves own king in check");
            }
            !unsafe_for_king
        });
        moves
    }

    /// Gets the legal moves of every piece of `color`.
    ///
    /// Unlike the moves of a single piece, these are collected on the heap.
    /// Boards with many promoted pieces can exceed a [`MoveList`].
    pub fn legal_moves_for(&self, board: &Board, color: Color) -> Vec<Move> {
        board
            .squares_of(color)
            .flat_map(|from| self.get_valid_moves(board, from))
            .collect()
    }

    /// Tests if any piece of `color` has a legal move.
    pub fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        board
            .squares_of(color)
            .any(|from| !self.get_valid_moves(board, from).is_empty())
    }

    /// `color` is in check and has no legal moves.
    pub fn is_checkmate(&self, board: &Board, color: Color) -> bool {
        is_in_check(board, color) && !self.has_legal_moves(board, color)
    }

    /// `color` is not in check but has no legal moves.
    pub fn is_stalemate(&self, board: &Board, color: Color) -> bool {
        !is_in_check(board, color) && !self.has_legal_moves(board, color)
    }

    pub fn is_draw_by_insufficient_material(&self, board: &Board) -> bool {
        is_insufficient_material(board, self.bishops)
    }

    /// Applies a move without checking its legality.
    ///
    /// The only precondition is a piece on the source square. A move with
    /// an empty source is reported as invalid. Otherwise the move is
    /// applied to a clone of `board`, and the result reports the new board,
    /// the move with its `CAPTURE`, `CHECK` and `CHECKMATE` flags filled in,
    /// and the status of the opponent.
    ///
    /// Use [`Rules::play()`] to reject illegal moves.
    pub fn make_move(&self, board: &Board, m: &Move) -> MoveResult {
        let Some(piece) = board.piece_at(m.from) else {
            let err = MoveError::NoPieceAtSource { square: m.from };
            debug!(%m, %err, "rejected move");
            return MoveResult::rejected(err);
        };

        let (after, captured) = apply(board, m, piece, self);
        let them = !piece.color;

        let check = is_in_check(&after, them);
        let can_move = self.has_legal_moves(&after, them);
        let checkmate = check && !can_move;
        let stalemate = !check && !can_move;
        let draw = self.is_draw_by_insufficient_material(&after);

        let mut flags = m.flags - (MoveFlags::CHECK | MoveFlags::CHECKMATE);
        flags.set(MoveFlags::CAPTURE, captured);
        flags.set(MoveFlags::CHECK, check);
        flags.set(MoveFlags::CHECKMATE, checkmate);

        let m = Move {
            promotion: self.resolve_promotion(m, piece),
            flags,
            ..*m
        };

        debug!(%m, color = %piece.color, checkmate, stalemate, draw, "applied move");

        MoveResult {
            valid: true,
            error: None,
            m: Some(m),
            board: Some(after),
            check: check.then_some(them),
            checkmate,
            stalemate,
            draw,
        }
    }

    /// Applies a move after checking that it is legal.
    ///
    /// The move is matched against [`Rules::get_valid_moves()`] by
    /// relocation, so check annotations on `m` are ignored. A pawn move onto
    /// the far row may request any promotable role, or none for the default.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the source square is empty or the move is
    /// not legal.
    pub fn play(&self, board: &Board, m: &Move) -> Result<Played, PlayError> {
        let legal = self
            .get_valid_moves(board, m.from)
            .into_iter()
            .find(|legal| legal.accepts(m));

        let Some(legal) = legal else {
            let err = if board.is_occupied(m.from) {
                MoveError::Illegal { m: *m }
            } else {
                MoveError::NoPieceAtSource { square: m.from }
            };
            debug!(%m, %err, "rejected move");
            return Err(PlayError { board: board.clone(), err });
        };

        let legal = match m.promotion {
            Some(role) if legal.is_promotion() => legal.with_promotion(self.promotion_role(role)),
            _ => legal,
        };

        let result = self.make_move(board, &legal);
        result.into_result().map_err(|err| PlayError {
            board: board.clone(),
            err,
        })
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules::STANDARD
    }
}

/// Relocates the moving piece on a clone of `board`, including the rook of
/// a castle, en passant removal and promotion. Also reports whether an enemy
/// piece was captured.
fn apply(board: &Board, m: &Move, piece: Piece, rules: &Rules) -> (Board, bool) {
    let mut after = board.clone();
    after.remove_piece_at(m.from);

    let mut captured = after
        .remove_piece_at(m.to)
        .is_some_and(|victim| victim.color != piece.color);

    if let Some(side) = m.castle {
        if let Some(rook) = after.remove_piece_at(side.rook_from(piece.color)) {
            after.set_piece_at(side.rook_to(piece.color), rook.into_moved());
        }
    }

    if m.is_en_passant() {
        if let Some(victim) = Square::new(m.from.row(), m.to.col()) {
            captured |= after
                .remove_piece_at(victim)
                .is_some_and(|victim| victim.color != piece.color);
        }
    }

    let moved = match rules.resolve_promotion(m, piece) {
        Some(role) => Piece { role, ..piece },
        None => piece,
    };
    after.set_piece_at(m.to, moved.into_moved());

    (after, captured)
}

/// Tests if the king of `color` is attacked.
///
/// A board without a king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_of(color) {
        Some(king) => is_square_under_attack(board, king, !color),
        None => {
            trace!(%color, "no king on board, not in check");
            false
        }
    }
}

/// Tests if applying `m` would leave the king of `color` in check.
///
/// The move is applied to a clone with all its side effects (castling rook,
/// en passant capture). An empty source square leaves the board as is.
pub fn would_leave_in_check(board: &Board, m: &Move, color: Color) -> bool {
    match board.piece_at(m.from) {
        Some(piece) => {
            let (after, _) = apply(board, m, piece, &Rules::STANDARD);
            is_in_check(&after, color)
        }
        None => is_in_check(board, color),
    }
}

/// Gets the legal moves of the piece on `from` under [`Rules::STANDARD`].
pub fn get_valid_moves(board: &Board, from: Square) -> MoveList {
    Rules::STANDARD.get_valid_moves(board, from)
}

/// Gets the legal moves of every piece of `color` under
/// [`Rules::STANDARD`].
pub fn legal_moves_for(board: &Board, color: Color) -> Vec<Move> {
    Rules::STANDARD.legal_moves_for(board, color)
}

pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    Rules::STANDARD.has_legal_moves(board, color)
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    Rules::STANDARD.is_checkmate(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    Rules::STANDARD.is_stalemate(board, color)
}

/// Tests for king against king, king and minor piece against king, or
/// king and bishop against king and bishop (regardless of bishop square
/// colors).
pub fn is_draw_by_insufficient_material(board: &Board) -> bool {
    Rules::STANDARD.is_draw_by_insufficient_material(board)
}

/// Applies a move under [`Rules::STANDARD`]. See [`Rules::make_move()`].
pub fn make_move(board: &Board, m: &Move) -> MoveResult {
    Rules::STANDARD.make_move(board, m)
}

/// Applies a legal move under [`Rules::STANDARD`]. See [`Rules::play()`].
///
/// # Errors
///
/// Returns [`PlayError`] if the move is not legal.
pub fn play(board: &Board, m: &Move) -> Result<Played, PlayError> {
    Rules::STANDARD.play(board, m)
}

/// Reason a move was not applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("no piece at source square")]
    NoPieceAtSource { square: Square },
    #[error("illegal move {m}")]
    Illegal { m: Move },
    /// A hand-built [`MoveResult`] that is neither valid nor carries an
    /// error.
    #[error("incomplete move result")]
    Incomplete,
}

/// The outcome of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        })
    }
}

/// The result of [`make_move()`].
///
/// Other fields are only meaningful if `valid` is set. Prefer
/// [`MoveResult::into_result()`] to branch on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub valid: bool,
    pub error: Option<MoveError>,
    /// The applied move with its flags filled in.
    pub m: Option<Move>,
    /// The board after the move.
    pub board: Option<Board>,
    /// The color in check after the move, if any.
    pub check: Option<Color>,
    pub checkmate: bool,
    pub stalemate: bool,
    /// Insufficient material.
    pub draw: bool,
}

impl MoveResult {
    fn rejected(err: MoveError) -> MoveResult {
        MoveResult {
            valid: false,
            error: Some(err),
            m: None,
            board: None,
            check: None,
            checkmate: false,
            stalemate: false,
            draw: false,
        }
    }

    /// The game outcome after the move, if it ended the game.
    ///
    /// Checkmate wins for the side that moved. Stalemate and insufficient
    /// material are draws.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.valid {
            None
        } else if self.checkmate {
            self.check.map(|loser| Outcome::Decisive { winner: !loser })
        } else if self.stalemate || self.draw {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Converts to a [`Result`] for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] of an invalid result.
    pub fn into_result(self) -> Result<Played, MoveError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        match (self.valid, self.m, self.board) {
            (true, Some(m), Some(board)) => Ok(Played { board, m }),
            _ => Err(MoveError::Incomplete),
        }
    }
}

/// A board together with the legal move that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Played {
    pub board: Board,
    /// The move with its check annotations filled in.
    pub m: Move,
}

/// Error when trying to play an illegal move.
#[derive(Clone)]
pub struct PlayError {
    board: Board,
    err: MoveError,
}

impl PlayError {
    /// Returns the unchanged board.
    pub fn into_inner(self) -> Board {
        self.board
    }

    pub fn error(&self) -> MoveError {
        self.err
    }
}

impl fmt::Debug for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayError")
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().expect("valid board fen")
    }

    fn uci_move(board: &Board, from: Square, to: Square) -> Move {
        get_valid_moves(board, from)
            .into_iter()
            .find(|m| m.to == to)
            .expect("legal move")
    }

    #[test]
    fn test_in_check() {
        let board = board("4k3/8/8/8/8/8/8/4K2r");
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = board("8/8/8/8/8/8/8/R6r");
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_pinned_piece() {
        // The knight on e2 is pinned by the rook on e8.
        let board = board("4r1k1/8/8/8/8/8/4N3/4K3");
        assert!(get_valid_moves(&board, Square::E2).is_empty());
        assert!(would_leave_in_check(
            &board,
            &Move::new(Square::E2, Square::C3),
            Color::White
        ));
    }

    #[test]
    fn test_king_cannot_step_along_checking_ray() {
        // Stepping from e1 to f1 stays on the rook's rank. The destination
        // looks safe on the unchanged board, since the king itself blocks
        // the ray.
        let board = board("4k3/8/8/8/8/8/8/r3K3");
        let targets: Vec<Square> = get_valid_moves(&board, Square::E1)
            .iter()
            .map(|m| m.to)
            .collect();
        assert!(!targets.contains(&Square::F1));
        assert!(targets.contains(&Square::E2));
    }

    #[test]
    fn test_make_move_empty_source() {
        let result = make_move(&Board::new(), &Move::new(Square::E4, Square::E5));
        assert!(!result.valid);
        assert_eq!(
            result.error,
            Some(MoveError::NoPieceAtSource {
                square: Square::E4
            })
        );
        assert_eq!(
            result.error.map(|err| err.to_string()).as_deref(),
            Some("no piece at source square")
        );
        assert!(result.board.is_none());
        assert_eq!(result.outcome(), None);
    }

    #[test]
    fn test_make_move_sets_moved_and_capture() {
        let board = board("4k3/8/8/3p4/4P3/8/8/4K3");
        let m = uci_move(&board, Square::E4, Square::D5);
        assert!(m.is_capture());

        let result = make_move(&board, &m);
        let after = result.board.expect("valid");
        assert!(after.piece_at(Square::E4).is_none());
        assert_eq!(
            after.piece_at(Square::D5),
            Some(Piece {
                color: Color::White,
                role: Role::Pawn,
                moved: true
            })
        );
        assert!(result.m.expect("valid").is_capture());
    }

    #[test]
    fn test_promotion() {
        let board = board("4k3/P7/8/8/8/8/8/4K3");
        let moves = get_valid_moves(&board, Square::A7);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].promotion, Some(Role::Queen));

        let result = make_move(&board, &moves[0]);
        let after = result.board.expect("valid");
        assert_eq!(after.role_at(Square::A8), Some(Role::Queen));
        // Queen on a8 gives check along the back rank.
        assert_eq!(result.check, Some(Color::Black));
        assert_eq!(result.m.map(|m| m.to_string()).as_deref(), Some("a7a8=Q+"));
    }

    #[test]
    fn test_promotion_role_substitution() {
        let board = board("4k3/P7/8/8/8/8/8/4K3");

        let knight = Move::new(Square::A7, Square::A8).with_promotion(Role::Knight);
        let after = make_move(&board, &knight).board.expect("valid");
        assert_eq!(after.role_at(Square::A8), Some(Role::Knight));

        let king = Move::new(Square::A7, Square::A8).with_promotion(Role::King);
        let result = make_move(&board, &king);
        assert_eq!(result.m.and_then(|m| m.promotion), Some(Role::Queen));
        assert_eq!(
            result.board.and_then(|b| b.role_at(Square::A8)),
            Some(Role::Queen)
        );
    }

    #[test]
    fn test_promotion_without_role() {
        let board = board("4k3/8/8/8/8/8/p7/4K3");
        let result = make_move(&board, &Move::new(Square::A2, Square::A1));
        assert_eq!(result.m.and_then(|m| m.promotion), Some(Role::Queen));
        let after = result.board.expect("valid");
        assert_eq!(after.role_at(Square::A1), Some(Role::Queen));
        assert_eq!(after.validate(), Ok(()));

        // Only pawns promote.
        let board = self::board("4k3/R7/8/8/8/8/8/4K3");
        let result = make_move(&board, &Move::new(Square::A7, Square::A8));
        assert_eq!(result.m.and_then(|m| m.promotion), None);
        assert_eq!(
            result.board.and_then(|b| b.role_at(Square::A8)),
            Some(Role::Rook)
        );
    }

    #[test]
    fn test_configured_promotion() {
        let rules = Rules {
            promotion: Role::Knight,
            ..Rules::default()
        };
        let board = board("4k3/P7/8/8/8/8/8/4K3");
        let moves = rules.get_valid_moves(&board, Square::A7);
        assert_eq!(moves[0].promotion, Some(Role::Knight));
    }

    #[test]
    fn test_en_passant_supplied_by_caller() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3");

        // Never generated.
        assert!(get_valid_moves(&board, Square::E5)
            .iter()
            .all(|m| !m.is_en_passant()));

        let m = Move::en_passant(Square::E5, Square::D6);
        let result = make_move(&board, &m);
        let after = result.board.expect("valid");
        assert!(after.piece_at(Square::D5).is_none());
        assert_eq!(after.role_at(Square::D6), Some(Role::Pawn));
        assert!(result.m.expect("valid").is_capture());
    }

    #[test]
    fn test_en_passant_discovered_check() {
        // Removing both pawns from the fifth rank exposes the king.
        let board = board("4k3/8/8/K2pP2r/8/8/8/8");
        let m = Move::en_passant(Square::E5, Square::D6);
        assert!(would_leave_in_check(&board, &m, Color::White));
        assert!(!would_leave_in_check(
            &board,
            &Move::new(Square::E5, Square::E6),
            Color::White
        ));
    }

    #[test]
    fn test_outcome() {
        let result = make_move(
            &board("6k1/5ppp/8/8/8/8/8/R5K1"),
            &Move::new(Square::A1, Square::A8),
        );
        assert!(result.checkmate);
        assert_eq!(result.check, Some(Color::Black));
        assert_eq!(
            result.outcome(),
            Some(Outcome::Decisive {
                winner: Color::White
            })
        );
        assert_eq!(result.outcome().and_then(Outcome::winner), Some(Color::White));
        assert_eq!(result.outcome().map(|o| o.to_string()).as_deref(), Some("1-0"));
        assert_eq!(result.m.map(|m| m.to_string()).as_deref(), Some("a1a8#"));
    }

    #[test]
    fn test_draw_after_capture() {
        let board = board("4k3/8/8/8/8/8/4q3/4KB2");
        let m = uci_move(&board, Square::E1, Square::E2);
        let result = make_move(&board, &m);
        assert!(result.draw);
        assert!(!result.checkmate);
        assert_eq!(result.outcome(), Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
    }

    #[test]
    fn test_play() {
        let board = Board::new();
        let played = play(&board, &Move::new(Square::G1, Square::F3)).expect("legal");
        assert_eq!(played.board.role_at(Square::F3), Some(Role::Knight));

        let err = play(&board, &Move::new(Square::G1, Square::G3)).expect_err("illegal");
        assert_eq!(
            err.error(),
            MoveError::Illegal {
                m: Move::new(Square::G1, Square::G3)
            }
        );
        assert_eq!(err.to_string(), "illegal move g1g3");
        assert_eq!(err.into_inner(), board);

        let err = play(&board, &Move::new(Square::E4, Square::E5)).expect_err("empty");
        assert_eq!(
            err.error(),
            MoveError::NoPieceAtSource {
                square: Square::E4
            }
        );
    }
}
