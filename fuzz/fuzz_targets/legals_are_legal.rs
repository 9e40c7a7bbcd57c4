#![no_main]

use arbitrary::Arbitrary;
use arcade_chess::{is_in_check, legal_moves_for, make_move, play, Board, Color, Move};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    candidate: Move,
    board: Board,
    turn: Color,
}

fuzz_target!(|data: Data| {
    let legals = legal_moves_for(&data.board, data.turn);

    for m in &legals {
        let result = make_move(&data.board, m);
        let after = result.board.expect("valid move");
        assert!(!is_in_check(&after, data.turn));
    }

    if data.board.color_at(data.candidate.from) == Some(data.turn) {
        assert_eq!(
            legals.iter().any(|m| m.accepts(&data.candidate)),
            play(&data.board, &data.candidate).is_ok()
        );
    }

    let before = data.board.clone();
    let _ = make_move(&data.board, &data.candidate);
    assert_eq!(data.board, before);
});
