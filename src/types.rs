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

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`], and whether it has moved.
///
/// The `moved` flag only gates castling. Two pieces of the same color and
/// role compare unequal if one of them has moved.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    #[cfg_attr(feature = "serde", serde(default))]
    pub moved: bool,
}

impl Piece {
    /// Gets the FEN letter: uppercase for white, lowercase for black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Parses an unmoved piece from its FEN letter.
    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(ch.is_ascii_uppercase())))
    }

    #[must_use]
    #[inline]
    pub const fn into_moved(self) -> Piece {
        Piece {
            moved: true,
            ..self
        }
    }

    /// Same color and role, ignoring the `moved` flag.
    #[inline]
    pub fn is(self, color: Color, role: Role) -> bool {
        self.color == color && self.role == role
    }
}

/// How a bishop against bishop ending is classified.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum BishopDraw {
    /// King and bishop against king and bishop is always a draw, regardless
    /// of the squares the bishops travel on.
    #[default]
    Unconditional,
    /// King and bishop against king and bishop is only a draw when both
    /// bishops stand on squares of the same color.
    SameSquareColor,
}

impl BishopDraw {
    pub const fn is_unconditional(self) -> bool {
        matches!(self, BishopDraw::Unconditional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Color::White.queen().char(), 'Q');
        assert_eq!(Color::Black.knight().char(), 'n');
        assert_eq!(Piece::from_char('K'), Some(Color::White.king()));
        assert_eq!(Piece::from_char('p'), Some(Color::Black.pawn()));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_moved_flag() {
        let rook = Color::White.rook();
        assert!(!rook.moved);
        assert!(rook.into_moved().moved);
        assert_ne!(rook, rook.into_moved());
        assert!(rook.into_moved().is(Color::White, Role::Rook));
    }
}
