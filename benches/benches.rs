use arcade_chess::{
    get_valid_moves, legal_moves_for, make_move, perft, uci::Uci, Board, Color, Move, MoveResult,
    Square,
};
use iai::black_box;

fn bench_shallow_perft() {
    let board = Board::new();
    assert_eq!(black_box(perft(black_box(&board), Color::White, 3)), 8_902);
}

fn bench_deep_perft() {
    let board = Board::new();
    assert_eq!(perft(black_box(&board), Color::White, 4), 197_281);
}

fn bench_middlegame_perft() {
    let board: Board = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1"
        .parse()
        .expect("valid board fen");
    assert_eq!(perft(black_box(&board), Color::White, 2), 2_079);
}

fn bench_generate_moves() {
    let board: Board = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1"
        .parse()
        .expect("valid board fen");

    assert_eq!(legal_moves_for(black_box(&board), Color::Black).len(), 39);
}

fn bench_valid_moves_king() {
    let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"
        .parse()
        .expect("valid board fen");

    assert_eq!(get_valid_moves(black_box(&board), Square::E1).len(), 4);
}

fn bench_make_move() -> MoveResult {
    let board: Board = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1"
        .parse()
        .expect("valid board fen");

    make_move(black_box(&board), &Move::new(Square::F8, Square::E7))
}

fn bench_play_ucis() -> Board {
    let line = [
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "f3g5", "d7d5", "e4d5", "c6a5", "c4b5",
        "c7c6", "d5c6", "b7c6", "b5a4",
    ];

    let mut board = black_box(Board::new());
    let mut turn = Color::White;
    for uci in black_box(line) {
        let m = uci
            .parse::<Uci>()
            .expect("valid uci")
            .to_move(&board, turn)
            .expect("legal move");

        board = make_move(&board, &m).board.expect("valid move");
        turn = !turn;
    }
    board
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_middlegame_perft,
    bench_generate_moves,
    bench_valid_moves_king,
    bench_make_move,
    bench_play_ucis,
);
