#![no_main]

use arcade_chess::uci::Uci;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(uci) = Uci::from_ascii(data) else {
        return;
    };
    let roundtripped = Uci::from_ascii(uci.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(uci, roundtripped);
});
