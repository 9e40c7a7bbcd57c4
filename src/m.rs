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

use core::fmt::{self, Display, Write as _};

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{CastlingSide, Role, Square};

bitflags! {
    /// Annotations carried by a [`Move`].
    ///
    /// `CAPTURE` is set by move generation. `CHECK` and `CHECKMATE` are
    /// filled in when the move is applied. `EN_PASSANT` is only ever set by
    /// callers (see [`Move::en_passant`]).
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 1 << 0;
        const CHECK = 1 << 1;
        const CHECKMATE = 1 << 2;
        const EN_PASSANT = 1 << 3;
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for MoveFlags {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<MoveFlags> {
        Ok(MoveFlags::from_bits_truncate(u.arbitrary()?))
    }
}

/// Information about a move.
///
/// A move only describes a relocation. It carries no legality guarantee of
/// its own: moves obtained from [`get_valid_moves()`](crate::get_valid_moves)
/// are legal, hand-built ones are whatever the caller made them.
///
/// # Display
///
/// `Move` implements [`Display`] using simplified coordinate notation, see
/// [`move_to_notation()`](crate::move_to_notation).
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[cfg_attr(feature = "serde", serde(default))]
    pub promotion: Option<Role>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub castle: Option<CastlingSide>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: MoveFlags,
}

impl Move {
    /// A plain relocation without annotations.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            castle: None,
            flags: MoveFlags::empty(),
        }
    }

    /// The king move of a castle. The rook follows when the move is applied.
    pub const fn castle(from: Square, to: Square, side: CastlingSide) -> Move {
        Move {
            castle: Some(side),
            ..Move::new(from, to)
        }
    }

    /// An en passant capture. `to` is the empty square the capturing pawn
    /// lands on. The captured pawn stands on the row of `from` and the
    /// column of `to`.
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move {
            flags: MoveFlags::CAPTURE.union(MoveFlags::EN_PASSANT),
            ..Move::new(from, to)
        }
    }

    #[must_use]
    pub const fn with_promotion(self, role: Role) -> Move {
        Move {
            promotion: Some(role),
            ..self
        }
    }

    #[must_use]
    pub const fn with_flags(self, flags: MoveFlags) -> Move {
        Move {
            flags: self.flags.union(flags),
            ..self
        }
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    /// Checks if the move gives check. Only known after the move has been
    /// applied.
    pub const fn is_check(&self) -> bool {
        self.flags.contains(MoveFlags::CHECK)
    }

    /// Checks if the move gives checkmate. Only known after the move has
    /// been applied.
    pub const fn is_checkmate(&self) -> bool {
        self.flags.contains(MoveFlags::CHECKMATE)
    }

    /// Checks if the move is en passant.
    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    /// Checks if the move is a castling move.
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    /// Checks if the move is a promotion.
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Tests if two moves describe the same relocation, ignoring the
    /// check annotations filled in on application.
    pub fn same_relocation(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion == other.promotion
            && self.castle == other.castle
            && self.is_en_passant() == other.is_en_passant()
    }

    /// Tests if `candidate` selects this move. Same as
    /// [`Move::same_relocation()`], except that a promotion accepts any
    /// requested role, or none.
    pub fn accepts(&self, candidate: &Move) -> bool {
        if self.is_promotion() {
            self.same_relocation(&Move {
                promotion: self.promotion,
                ..*candidate
            })
        } else {
            self.same_relocation(candidate)
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castle {
            f.write_str(side.notation())?;
        } else {
            write!(f, "{}{}", self.from, self.to)?;

            if let Some(role) = self.promotion {
                write!(f, "={}", role.upper_char())?;
            }
        }

        if self.is_checkmate() {
            f.write_char('#')
        } else if self.is_check() {
            f.write_char('+')
        } else {
            Ok(())
        }
    }
}

/// Renders a move in simplified coordinate notation.
///
/// Castles are `O-O` and `O-O-O`. Everything else is the origin and target
/// square (`e2e4`), followed by `=Q` style promotion suffixes. A trailing
/// `#` marks checkmate, otherwise `+` marks check. There are no piece
/// letters, no capture marks and no disambiguation.
///
/// # Examples
///
/// ```
/// use arcade_chess::{move_to_notation, Move, MoveFlags, Role, Square};
///
/// assert_eq!(move_to_notation(&Move::new(Square::E2, Square::E4)), "e2e4");
///
/// let promotion = Move::new(Square::B7, Square::B8)
///     .with_promotion(Role::Queen)
///     .with_flags(MoveFlags::CHECK);
/// assert_eq!(move_to_notation(&promotion), "b7b8=Q+");
/// ```
pub fn move_to_notation(m: &Move) -> String {
    m.to_string()
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is more than enough to hold the moves of a single piece.
pub type MoveList = ArrayVec<Move, 256>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation() {
        assert_eq!(Move::new(Square::G1, Square::F3).to_string(), "g1f3");
        assert_eq!(
            Move::castle(Square::E1, Square::G1, CastlingSide::KingSide).to_string(),
            "O-O"
        );
        assert_eq!(
            Move::castle(Square::E8, Square::C8, CastlingSide::QueenSide)
                .with_flags(MoveFlags::CHECK)
                .to_string(),
            "O-O-O+"
        );
        assert_eq!(
            Move::new(Square::H5, Square::F7)
                .with_flags(MoveFlags::CAPTURE | MoveFlags::CHECK | MoveFlags::CHECKMATE)
                .to_string(),
            "h5f7#"
        );
        assert_eq!(
            Move::new(Square::A2, Square::A1)
                .with_promotion(Role::Knight)
                .to_string(),
            "a2a1=N"
        );
    }

    #[test]
    fn test_en_passant_flags() {
        let m = Move::en_passant(Square::E5, Square::D6);
        assert!(m.is_en_passant());
        assert!(m.is_capture());
        assert!(!m.is_castle());
        assert_eq!(m.to_string(), "e5d6");
    }

    #[test]
    fn test_same_relocation() {
        let m = Move::new(Square::D1, Square::H5);
        assert!(m.same_relocation(&m.with_flags(MoveFlags::CHECK)));
        assert!(!m.same_relocation(&m.with_promotion(Role::Queen)));
    }

    #[test]
    fn test_accepts() {
        let push = Move::new(Square::B7, Square::B8);
        let promotion = push.with_promotion(Role::Queen);
        assert!(promotion.accepts(&push));
        assert!(promotion.accepts(&push.with_promotion(Role::Knight)));
        assert!(!push.accepts(&promotion));
        assert!(!promotion.accepts(&Move::new(Square::B7, Square::A8)));
    }
}
