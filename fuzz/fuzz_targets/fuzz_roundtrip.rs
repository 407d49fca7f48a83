#![no_main]

use libfuzzer_sys::fuzz_target;
use lzgold::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First two bytes pick the window and length limits
    let window_size = data[0] as usize + 1;
    let max_length = data[1] as usize + 1;
    let input = &data[2..];

    let tokens = compress(input, window_size, max_length);
    for t in &tokens {
        assert_eq!(t.distance == 0, t.length == 0);
        assert!(t.distance as usize <= window_size);
        assert!(t.length as usize <= max_length);
    }

    let decoded = decompress(&tokens, window_size).expect("encoder output must decode");
    assert_eq!(decoded, input);
});
