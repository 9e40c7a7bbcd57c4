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

//! [`Board`] representation, board FEN and validation.

use core::{fmt, fmt::Write as _, str::FromStr};

use bitflags::bitflags;

use crate::{material::Material, Color, Piece, Role, Square};

/// Piece positions on an 8×8 grid.
///
/// A board is a plain value. The rule functions never mutate a board they
/// are given: every applied move yields a new one.
///
/// # Examples
///
/// ```
/// use arcade_chess::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Square::E4), None);
///
/// assert_eq!(
///     board.to_string(),
///     "r n b q k b n r\n\
///      p p p p p p p p\n\
///      . . . . . . . .\n\
///      . . . . . . . .\n\
///      . . . . . . . .\n\
///      . . . . . . . .\n\
///      P P P P P P P P\n\
///      R N B Q K B N R\n"
/// );
/// ```
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, role) in (0..8).zip(BACKRANK) {
                board.grid[usize::from(color.backrank())][col] = Some(role.of(color));
                board.grid[usize::from(color.pawn_row())][col] = Some(color.pawn());
            }
        }
        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[usize::from(sq.row())][usize::from(sq.col())]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.grid[usize::from(sq.row())][usize::from(sq.col())] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.grid[usize::from(sq.row())][usize::from(sq.col())].take()
    }

    /// Iterates over occupied squares, row by row from a8 to h1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Squares occupied by pieces of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Finds the king of the given color with a linear scan.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, Role::King))
            .map(|(sq, _)| sq)
    }

    /// Counts pieces by color and role.
    pub fn material(&self) -> Material {
        self.pieces().map(|(_, piece)| piece).collect()
    }

    /// Renders the piece placement part of a FEN, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(15);

        for row in 0..8 {
            let mut empty = 0;

            for col in 0..8 {
                match self.grid[row][col] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if row < 7 {
                fen.push('/');
            }
        }

        fen
    }

    /// Parses the piece placement part of a FEN.
    ///
    /// FEN does not record which pieces have moved. Pawns on their starting
    /// row, kings on their home square and rooks in their corners are
    /// considered unmoved, every other piece is marked as moved.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFenError`] if the text is not a board FEN with exactly
    /// eight rows of eight squares.
    pub fn from_board_fen(fen: &str) -> Result<Board, ParseFenError> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (row, part) in fen.split('/').enumerate() {
            if row >= 8 {
                return Err(ParseFenError::TooManyRows);
            }
            rows += 1;

            let mut col = 0u8;
            for ch in part.chars() {
                if let Some(empty) = ch.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    col += empty as u8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(ParseFenError::InvalidPiece(ch))?;
                    let sq = Square::new(row as u8, col).ok_or(ParseFenError::RowTooLong)?;
                    board.set_piece_at(
                        sq,
                        if is_home_square(sq, piece) {
                            piece
                        } else {
                            piece.into_moved()
                        },
                    );
                    col += 1;
                }

                if col > 8 {
                    return Err(ParseFenError::RowTooLong);
                }
            }

            if col < 8 {
                return Err(ParseFenError::RowTooShort);
            }
        }

        if rows < 8 {
            return Err(ParseFenError::TooFewRows);
        }

        Ok(board)
    }

    /// Checks the board for defects the rule functions silently tolerate.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] listing every defect found.
    pub fn validate(&self) -> Result<(), BoardError> {
        let material = self.material();
        let mut kinds = BoardErrorKinds::empty();

        for color in Color::ALL {
            match material[color].king {
                0 => kinds |= BoardErrorKinds::MISSING_KING,
                1 => (),
                _ => kinds |= BoardErrorKinds::TOO_MANY_KINGS,
            }
            if material[color].count() > 16 {
                kinds |= BoardErrorKinds::TOO_MANY_PIECES;
            }
        }

        if self
            .pieces()
            .any(|(sq, piece)| piece.role == Role::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            kinds |= BoardErrorKinds::PAWNS_ON_BACKRANK;
        }

        if kinds.is_empty() {
            Ok(())
        } else {
            Err(BoardError { kinds })
        }
    }
}

fn is_home_square(sq: Square, piece: Piece) -> bool {
    let color = piece.color;
    match piece.role {
        Role::Pawn => sq.row() == color.pawn_row(),
        Role::King => sq.row() == color.backrank() && sq.col() == 4,
        Role::Rook => sq.row() == color.backrank() && (sq.col() == 0 || sq.col() == 7),
        _ => false,
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Board, ParseFenError> {
        Board::from_board_fen(fen)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (col, square) in row.iter().enumerate() {
                f.write_char(square.map_or('.', Piece::char))?;
                f.write_char(if col < 7 { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.board_fen()).finish()
    }
}

/// Errors that can occur when parsing a board FEN.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseFenError {
    #[error("invalid piece letter {0:?} in board fen")]
    InvalidPiece(char),
    #[error("board fen has a row with more than 8 squares")]
    RowTooLong,
    #[error("board fen has a row with fewer than 8 squares")]
    RowTooShort,
    #[error("board fen has more than 8 rows")]
    TooManyRows,
    #[error("board fen has fewer than 8 rows")]
    TooFewRows,
}

bitflags! {
    /// Reasons for a [`Board`] to fail [`Board::validate()`].
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct BoardErrorKinds: u8 {
        /// At least one side has no king.
        const MISSING_KING = 1 << 0;
        /// At least one side has more than one king.
        const TOO_MANY_KINGS = 1 << 1;
        /// There are pawns on the first or last row.
        const PAWNS_ON_BACKRANK = 1 << 2;
        /// At least one side has more than 16 pieces.
        const TOO_MANY_PIECES = 1 << 3;
    }
}

/// Error when a board fails validation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("illegal board: {kinds:?}")]
pub struct BoardError {
    kinds: BoardErrorKinds,
}

impl BoardError {
    pub const fn kinds(&self) -> BoardErrorKinds {
        self.kinds
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.pieces())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> serde::de::Visitor<'de> for BoardVisitor {
            type Value = Board;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("map from square names to pieces")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Board, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut board = Board::empty();
                while let Some((sq, piece)) = map.next_entry::<Square, Piece>()? {
                    if board.is_occupied(sq) {
                        return Err(serde::de::Error::custom(format_args!(
                            "duplicate square {sq}"
                        )));
                    }
                    board.set_piece_at(sq, piece);
                }
                Ok(board)
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}
