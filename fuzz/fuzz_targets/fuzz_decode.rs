#![no_main]

use libfuzzer_sys::fuzz_target;
use lzgold::{GoldenDecoder, Token};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte is the window size, then 3 bytes per token
    let window_size = data[0] as usize;
    let tokens: Vec<Token> = data[1..]
        .chunks_exact(3)
        .map(|c| Token::copy(c[0] as u32, c[1] as u32, c[2]))
        .collect();

    // Invalid back-references are errors, never panics
    let mut decoder = GoldenDecoder::new(window_size);
    for token in &tokens {
        let before = decoder.output().len();
        if decoder.step(token).is_err() {
            assert_eq!(decoder.output().len(), before);
            break;
        }
        assert!(decoder.history().len() <= window_size);
    }
});
