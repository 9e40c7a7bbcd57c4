#![cfg(feature = "serde")]

use arcade_chess::{Board, CastlingSide, Color, Move, MoveFlags, Piece, Role, Square};
use serde_json::json;

#[test]
fn test_board_as_sparse_map() {
    let board: Board = "4k3/8/8/8/8/8/4P3/4K3".parse().expect("valid board fen");

    let value = serde_json::to_value(&board).expect("serialize");
    assert_eq!(
        value,
        json!({
            "e8": { "color": "black", "role": "king", "moved": false },
            "e2": { "color": "white", "role": "pawn", "moved": false },
            "e1": { "color": "white", "role": "king", "moved": false },
        })
    );

    let roundtripped: Board = serde_json::from_value(value).expect("deserialize");
    assert_eq!(roundtripped, board);
}

#[test]
fn test_board_deserialize() {
    let board: Board = serde_json::from_str(
        r#"{ "d4": { "color": "white", "role": "queen" }, "h8": { "color": "black", "role": "king", "moved": true } }"#,
    )
    .expect("deserialize");

    assert_eq!(
        board.piece_at(Square::D4),
        Some(Piece {
            color: Color::White,
            role: Role::Queen,
            moved: false,
        })
    );
    assert!(board.piece_at(Square::H8).expect("king").moved);
    assert_eq!(board.pieces().count(), 2);

    assert!(serde_json::from_str::<Board>(r#"{ "z9": { "color": "white", "role": "king" } }"#).is_err());
    assert!(serde_json::from_str::<Board>(r#"{ "a1": { "color": "red", "role": "king" } }"#).is_err());
}

#[test]
fn test_move() {
    let m = Move::castle(Square::E1, Square::G1, CastlingSide::KingSide).with_flags(MoveFlags::CHECK);
    let json = serde_json::to_string(&m).expect("serialize");
    let back: Move = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, m);

    let plain: Move = serde_json::from_str(r#"{ "from": "e2", "to": "e4" }"#).expect("deserialize");
    assert_eq!(plain, Move::new(Square::E2, Square::E4));
}
