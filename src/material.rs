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

use core::iter::FromIterator;

use crate::{BishopDraw, Board, ByColor, ByRole, Color, Piece, Role};

/// Piece counts of one side.
pub type MaterialSide = ByRole<u8>;

/// Piece counts of both sides.
pub type Material = ByColor<MaterialSide>;

impl Extend<Piece> for Material {
    fn extend<T: IntoIterator<Item = Piece>>(&mut self, iter: T) {
        for piece in iter {
            let count = self.get_mut(piece.color).get_mut(piece.role);
            *count = count.saturating_add(1);
        }
    }
}

impl FromIterator<Piece> for Material {
    fn from_iter<T>(iter: T) -> Material
    where
        T: IntoIterator<Item = Piece>,
    {
        let mut result = Material::default();
        result.extend(iter);
        result
    }
}

impl MaterialSide {
    /// Only the king is left.
    fn is_lone_king(&self) -> bool {
        self.king == 1 && self.count() == 1
    }

    /// The king and exactly one other piece of the given role.
    fn is_king_and(&self, role: Role) -> bool {
        self.king == 1 && *self.get(role) == 1 && self.count() == 2
    }

    fn is_king_and_minor(&self) -> bool {
        Role::ALL
            .into_iter()
            .filter(|role| role.is_minor())
            .any(|role| self.is_king_and(role))
    }
}

/// Tests for one of the recognised dead-drawn material configurations.
///
/// The recognised configurations are king against king, king and a single
/// minor piece against a lone king, and king and bishop against king and
/// bishop. Under [`BishopDraw::Unconditional`] the last one is a draw no
/// matter which squares the bishops travel on. Every other configuration,
/// including king and knight against king and knight, is not a draw.
pub fn is_insufficient_material(board: &Board, bishops: BishopDraw) -> bool {
    let material = board.material();

    if material.all(MaterialSide::is_lone_king) {
        return true;
    }

    for color in Color::ALL {
        let lone = &material[!color];
        let strong = &material[color];
        if lone.is_lone_king() && strong.is_king_and_minor() {
            return true;
        }
    }

    if material.all(|side| side.is_king_and(Role::Bishop)) {
        return bishops.is_unconditional() || bishops_on_same_square_color(board);
    }

    false
}

fn bishops_on_same_square_color(board: &Board) -> bool {
    let mut shades = board
        .pieces()
        .filter(|(_, piece)| piece.role == Role::Bishop)
        .map(|(sq, _)| sq.is_light());

    match (shades.next(), shades.next()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().expect("valid board fen")
    }

    #[test]
    fn test_material_counts() {
        let material = Board::new().material();
        assert_eq!(material.white.pawn, 8);
        assert_eq!(material.black.knight, 2);
        assert_eq!(material[Color::White].count(), 16);
        assert!(material.is_symmetric());
    }

    #[test]
    fn test_insufficient_material() {
        let unconditional = BishopDraw::Unconditional;

        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/4K3"), unconditional));
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/4KB2"), unconditional));
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/4KN2"), unconditional));
        assert!(is_insufficient_material(&board("4kn2/8/8/8/8/8/8/4K3"), unconditional));
        assert!(is_insufficient_material(&board("4kb2/8/8/8/8/8/8/4KB2"), unconditional));

        assert!(!is_insufficient_material(&Board::new(), unconditional));
        assert!(!is_insufficient_material(&board("4kn2/8/8/8/8/8/8/4KN2"), unconditional));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/4KNN1"), unconditional));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/4KR2"), unconditional));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/4P3/4K3"), unconditional));
        assert!(!is_insufficient_material(&board("4kb2/8/8/8/8/8/8/4KN2"), unconditional));
    }

    #[test]
    fn test_bishops_on_opposite_colors() {
        // f8 is dark, f1 is light.
        let opposite = board("4kb2/8/8/8/8/8/8/4KB2");
        assert!(is_insufficient_material(&opposite, BishopDraw::Unconditional));
        assert!(!is_insufficient_material(&opposite, BishopDraw::SameSquareColor));

        // c8 is light, f1 is light.
        let same = board("2b1k3/8/8/8/8/8/8/4KB2");
        assert!(is_insufficient_material(&same, BishopDraw::SameSquareColor));
    }
}
