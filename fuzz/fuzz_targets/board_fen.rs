#![no_main]

use arcade_chess::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(fen) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::from_board_fen(fen) else {
        return;
    };
    let roundtripped = Board::from_board_fen(&board.board_fen()).expect("roundtrip");
    assert_eq!(board, roundtripped);
});
