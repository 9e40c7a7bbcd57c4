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

use crate::{Color, Square};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    #[cfg_attr(feature = "serde", serde(rename = "kingside"))]
    KingSide,
    #[cfg_attr(feature = "serde", serde(rename = "queenside"))]
    QueenSide,
}

impl CastlingSide {
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    /// Column of the rook before castling.
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Column step of the king toward the rook.
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::KingSide => 1,
            CastlingSide::QueenSide => -1,
        }
    }

    pub const fn king_to(self, color: Color) -> Square {
        Square::new_unchecked(color.backrank(), self.king_to_col())
    }

    pub const fn rook_from(self, color: Color) -> Square {
        Square::new_unchecked(color.backrank(), self.rook_from_col())
    }

    pub const fn rook_to(self, color: Color) -> Square {
        Square::new_unchecked(color.backrank(), self.rook_to_col())
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastlingSide::KingSide => "O-O",
            CastlingSide::QueenSide => "O-O-O",
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), Square::G1);
        assert_eq!(CastlingSide::KingSide.rook_from(Color::White), Square::H1);
        assert_eq!(CastlingSide::KingSide.rook_to(Color::White), Square::F1);
        assert_eq!(CastlingSide::QueenSide.king_to(Color::Black), Square::C8);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::Black), Square::A8);
        assert_eq!(CastlingSide::QueenSide.rook_to(Color::Black), Square::D8);
    }
}
