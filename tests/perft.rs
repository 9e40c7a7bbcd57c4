use std::{
    fs::File,
    io::{prelude::*, BufReader},
};

use arcade_chess::{perft, Board, Color};

fn test_perft_file(path: &str, node_limit: u64) {
    let file = File::open(path).expect("failed to open test suite");
    let reader = BufReader::new(file);

    let mut board = Board::new();
    let mut turn = Color::White;

    for line in reader.lines().map(|l| l.expect("readable line")) {
        println!("{line}");

        let trimmed = line.trim();
        let mut slices = trimmed.splitn(2, ' ');

        match slices.next() {
            Some("epd") => {
                let mut epd = slices.next().expect("missing epd").split(' ');
                board = epd
                    .next()
                    .expect("missing board")
                    .parse()
                    .expect("invalid board fen");
                turn = epd
                    .next()
                    .expect("missing turn")
                    .parse()
                    .expect("invalid turn");
            }
            Some("perft") => {
                let mut params = slices.next().expect("missing perft params").splitn(2, ' ');

                let depth = params
                    .next()
                    .expect("missing perft depth")
                    .parse()
                    .expect("depth not an integer");

                let nodes = params
                    .next()
                    .expect("missing perft nodes")
                    .parse()
                    .expect("nodes not an integer");

                if nodes <= node_limit {
                    assert_eq!(perft(&board, turn, depth), nodes);
                }
            }
            _ => {}
        }
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_standard() {
    test_perft_file("tests/standard.perft", 10_000);
}

#[test]
fn test_stalemate_has_no_paths() {
    let board: Board = "7k/5Q2/6K1/8/8/8/8/8".parse().expect("valid board fen");
    assert_eq!(perft(&board, Color::Black, 1), 0);
    assert_eq!(perft(&board, Color::Black, 3), 0);
}

#[test]
fn test_checkmate_has_no_paths() {
    // Fool's mate.
    let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR"
        .parse()
        .expect("valid board fen");
    assert_eq!(perft(&board, Color::White, 1), 0);
    assert!(perft(&board, Color::Black, 1) > 0);
}
