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

//! Parse and write moves in coordinate notation.
//!
//! Accepts the UCI forms `e2e4` and `e7e8q`, as well as `O-O` and `O-O-O`
//! for castles. Trailing `+` and `#` annotations are ignored.
//!
//! # Examples
//!
//! Parsing:
//!
//! ```
//! use arcade_chess::{uci::Uci, Square};
//!
//! let uci: Uci = "g1f3".parse()?;
//! assert_eq!(uci, Uci::Normal {
//!     from: Square::G1,
//!     to: Square::F3,
//!     promotion: None,
//! });
//! # Ok::<_, arcade_chess::uci::ParseUciError>(())
//! ```
//!
//! Converting to a legal move on a board:
//!
//! ```
//! use arcade_chess::{make_move, uci::Uci, Board, Color, Role, Square};
//!
//! let board = Board::new();
//! let uci: Uci = "g1f3".parse()?;
//! let m = uci.to_move(&board, Color::White)?;
//!
//! let after = make_move(&board, &m).board.expect("valid");
//! assert_eq!(after.role_at(Square::F3), Some(Role::Knight));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{get_valid_moves, Board, CastlingSide, Color, Move, Role, Square};

/// Error when parsing an invalid move string.
#[derive(Clone, Debug, thiserror::Error)]
#[error("invalid uci")]
pub struct ParseUciError;

/// Error when a parsed move is not legal on the given board.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("illegal uci")]
pub struct IllegalUciError;

/// A move as written in coordinate notation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Uci {
    Normal {
        from: Square,
        to: Square,
        promotion: Option<Role>,
    },
    Castle(CastlingSide),
}

impl FromStr for Uci {
    type Err = ParseUciError;

    fn from_str(uci: &str) -> Result<Uci, ParseUciError> {
        Uci::from_ascii(uci.as_bytes())
    }
}

impl fmt::Display for Uci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Uci::Normal {
                from,
                to,
                promotion: None,
            } => write!(f, "{from}{to}"),
            Uci::Normal {
                from,
                to,
                promotion: Some(promotion),
            } => write!(f, "{}{}{}", from, to, promotion.char()),
            Uci::Castle(side) => f.write_str(side.notation()),
        }
    }
}

impl From<&Move> for Uci {
    fn from(m: &Move) -> Uci {
        match m.castle {
            Some(side) => Uci::Castle(side),
            None => Uci::Normal {
                from: m.from,
                to: m.to,
                promotion: m.promotion,
            },
        }
    }
}

impl From<Move> for Uci {
    fn from(m: Move) -> Uci {
        Uci::from(&m)
    }
}

impl Uci {
    /// Parses a move from ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUciError`] if the input is not `<from><to>`, optionally
    /// followed by a promotion letter, or a castle in `O-O` / `O-O-O` form.
    pub fn from_ascii(uci: &[u8]) -> Result<Uci, ParseUciError> {
        let uci = strip_annotations(uci);

        match uci {
            b"O-O" | b"0-0" => return Ok(Uci::Castle(CastlingSide::KingSide)),
            b"O-O-O" | b"0-0-0" => return Ok(Uci::Castle(CastlingSide::QueenSide)),
            _ => (),
        }

        if uci.len() != 4 && uci.len() != 5 {
            return Err(ParseUciError);
        }

        let from = Square::from_ascii(&uci[0..2]).map_err(|_| ParseUciError)?;
        let to = Square::from_ascii(&uci[2..4]).map_err(|_| ParseUciError)?;

        let promotion = match uci.get(4) {
            Some(&ch) => Some(
                Role::from_char(char::from(ch.to_ascii_lowercase()))
                    .filter(|role| role.is_promotable())
                    .ok_or(ParseUciError)?,
            ),
            None => None,
        };

        Ok(Uci::Normal {
            from,
            to,
            promotion,
        })
    }

    /// Resolves the move against the legal moves of `turn`.
    ///
    /// A pawn reaching the far row without a promotion letter promotes to a
    /// queen. A king moving two files along its back rank is a castle.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalUciError`] if no matching legal move exists.
    pub fn to_move(&self, board: &Board, turn: Color) -> Result<Move, IllegalUciError> {
        let (from, to, promotion) = match *self {
            Uci::Normal {
                from,
                to,
                promotion,
            } => (from, to, promotion),
            Uci::Castle(side) => {
                let from = board.king_of(turn).ok_or(IllegalUciError)?;
                (from, side.king_to(turn), None)
            }
        };

        if board.color_at(from) != Some(turn) {
            return Err(IllegalUciError);
        }

        let candidate = get_valid_moves(board, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(IllegalUciError)?;

        if let Uci::Castle(side) = *self {
            if candidate.castle != Some(side) {
                return Err(IllegalUciError);
            }
        }

        match (candidate.promotion, promotion) {
            (Some(_), Some(role)) => Ok(candidate.with_promotion(role)),
            (Some(_), None) => Ok(candidate.with_promotion(Role::Queen)),
            (None, Some(_)) => Err(IllegalUciError),
            (None, None) => Ok(candidate),
        }
    }
}

fn strip_annotations(mut uci: &[u8]) -> &[u8] {
    while let [rest @ .., b'+' | b'#'] = uci {
        uci = rest;
    }
    uci
}
