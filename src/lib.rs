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

//! A chess rules engine on a plain 8×8 board.
//!
//! The engine keeps no state. Every operation takes a [`Board`] by
//! reference, works on a clone and returns its findings: legal moves,
//! check, checkmate, stalemate and insufficient material.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use arcade_chess::{get_valid_moves, legal_moves_for, Board, Color, Square};
//!
//! let board = Board::new();
//! assert_eq!(get_valid_moves(&board, Square::G1).len(), 2);
//! assert_eq!(legal_moves_for(&board, Color::White).len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use arcade_chess::{play, Board, Move, Square};
//!
//! let board = Board::new();
//!
//! // 1. e4
//! let played = play(&board, &Move::new(Square::E2, Square::E4))?;
//! assert_eq!(played.board.board_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
//! # Ok::<_, arcade_chess::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use arcade_chess::{make_move, Board, Color, Move, Outcome, Square};
//!
//! let board: Board = "6k1/5ppp/8/8/8/8/8/R5K1".parse()?;
//! let result = make_move(&board, &Move::new(Square::A1, Square::A8));
//!
//! assert!(result.checkmate);
//! assert_eq!(result.outcome(), Some(Outcome::Decisive { winner: Color::White }));
//! assert_eq!(result.m.map(|m| m.to_string()).as_deref(), Some("a1a8#"));
//! # Ok::<_, arcade_chess::ParseFenError>(())
//! ```
//!
//! Also supports a [coordinate notation](uci) for parsing moves.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   vocabulary types. A [`Board`] is represented as a sparse map from
//!   square names to pieces.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types and boards.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![doc(html_root_url = "https://docs.rs/arcade-chess/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod m;
mod material;
mod movegen;
mod perft;
mod role;
mod rules;
mod square;
mod types;

pub mod attacks;
pub mod board;
pub mod uci;

pub use attacks::is_square_under_attack;
pub use board::{Board, BoardError, BoardErrorKinds, ParseFenError};
pub use castling_side::CastlingSide;
pub use color::{ByColor, Color, ParseColorError};
pub use m::{move_to_notation, Move, MoveFlags, MoveList};
pub use material::{is_insufficient_material, Material, MaterialSide};
pub use perft::perft;
pub use role::{ByRole, Role};
pub use rules::{
    get_valid_moves, has_legal_moves, is_checkmate, is_draw_by_insufficient_material,
    is_in_check, is_stalemate, legal_moves_for, make_move, play, would_leave_in_check,
    MoveError, MoveResult, Outcome, PlayError, Played, Rules,
};
pub use square::{ParseSquareError, Square};
pub use types::{BishopDraw, Piece};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
