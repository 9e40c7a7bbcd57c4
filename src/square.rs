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

use core::{fmt, str::FromStr};

/// A square of the 8×8 grid, addressed as `(row, col)`.
///
/// Row 0 is black's back rank (rank 8) and row 7 is white's back rank
/// (rank 1). Column 0 is the a-file.
///
/// # Examples
///
/// ```
/// use arcade_chess::Square;
///
/// let sq = Square::new(6, 4).expect("on the board");
/// assert_eq!(sq, Square::E2);
/// assert_eq!(sq.to_string(), "e2");
/// assert_eq!("e2".parse::<Square>(), Ok(Square::E2));
///
/// assert_eq!(Square::new(8, 0), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Gets the square at `(row, col)`, or `None` if either coordinate is
    /// outside `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Gets the square `drow` rows and `dcol` columns away, if it is on the
    /// board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if 0 <= row && row < 8 && 0 <= col && col < 8 {
            Some(Square::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The file letter, `a` to `h`.
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The rank digit, `8` for row 0 down to `1` for row 7.
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Tests if the square is light (like h1 and a8).
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square::new_unchecked(b'8' - rank, file - b'a'))
            }
            _ => Err(ParseSquareError),
        }
    }

    /// Iterates over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square::new_unchecked(i / 8, i % 8))
    }
}

macro_rules! named_squares {
    ($($name:ident = ($row:expr, $col:expr)),+ $(,)?) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square::new_unchecked($row, $col);)+
        }
    };
}

named_squares! {
    A8 = (0, 0), B8 = (0, 1), C8 = (0, 2), D8 = (0, 3), E8 = (0, 4), F8 = (0, 5), G8 = (0, 6), H8 = (0, 7),
    A7 = (1, 0), B7 = (1, 1), C7 = (1, 2), D7 = (1, 3), E7 = (1, 4), F7 = (1, 5), G7 = (1, 6), H7 = (1, 7),
    A6 = (2, 0), B6 = (2, 1), C6 = (2, 2), D6 = (2, 3), E6 = (2, 4), F6 = (2, 5), G6 = (2, 6), H6 = (2, 7),
    A5 = (3, 0), B5 = (3, 1), C5 = (3, 2), D5 = (3, 3), E5 = (3, 4), F5 = (3, 5), G5 = (3, 6), H5 = (3, 7),
    A4 = (4, 0), B4 = (4, 1), C4 = (4, 2), D4 = (4, 3), E4 = (4, 4), F4 = (4, 5), G4 = (4, 6), H4 = (4, 7),
    A3 = (5, 0), B3 = (5, 1), C3 = (5, 2), D3 = (5, 3), E3 = (5, 4), F3 = (5, 5), G3 = (5, 6), H3 = (5, 7),
    A2 = (6, 0), B2 = (6, 1), C2 = (6, 2), D2 = (6, 3), E2 = (6, 4), F2 = (6, 5), G2 = (6, 6), H2 = (6, 7),
    A1 = (7, 0), B1 = (7, 1), C1 = (7, 2), D1 = (7, 3), E1 = (7, 4), F1 = (7, 5), G1 = (7, 6), H1 = (7, 7),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid square name")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        Ok(Square::new_unchecked(
            u.int_in_range(0..=7)?,
            u.int_in_range(0..=7)?,
        ))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (2, Some(2))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}
