//! Greedy single-pass LZ77 encoder.
//!
//! For every position the encoder scans the window oldest to newest and keeps
//! the first strictly-longest match, so on equal lengths the candidate found
//! first (the farthest one) is kept. A match is only taken if at least one
//! byte follows it, since every token must end with a literal.

use memchr::memchr_iter;

use super::token::Token;
use crate::LzConfig;

/// Encoder bound to the window and length limits of a configuration
#[derive(Clone, Copy, Debug)]
pub struct Encoder {
    window_size: usize,
    max_length: usize,
}

impl Encoder {
    pub fn new(config: &LzConfig) -> Self {
        Self { window_size: config.window_size, max_length: config.max_length }
    }

    /// Encode `data` into a token stream
    pub fn encode(&self, data: &[u8]) -> Vec<Token> {
        compress(data, self.window_size, self.max_length)
    }
}

/// Compress `data` into tokens using at most `window_size` bytes of lookback
/// and matches of at most `max_length` bytes.
pub fn compress(data: &[u8], window_size: usize, max_length: usize) -> Vec<Token> {
    // Token fields are u32
    let window_size = window_size.min(u32::MAX as usize);
    let max_length = max_length.min(u32::MAX as usize);

    let n = data.len();
    let mut tokens = Vec::with_capacity(n / 2 + 1);
    let mut i = 0;

    while i < n {
        let (best_dist, best_len) = longest_match(data, i, window_size, max_length);

        if best_len > 0 {
            tokens.push(Token::copy(best_dist as u32, best_len as u32, data[i + best_len]));
            i += best_len + 1;
        } else {
            tokens.push(Token::literal(data[i]));
            i += 1;
        }
    }

    tokens
}

/// Compress using the limits from `config`
pub fn compress_with(data: &[u8], config: &LzConfig) -> Vec<Token> {
    Encoder::new(config).encode(data)
}

/// Best `(distance, length)` for position `i`, or `(0, 0)` if nothing usable.
///
/// Candidates that do not start with `data[i]` would match zero bytes and can
/// never be accepted, so only positions holding `data[i]` are visited. They
/// are still visited in increasing order.
fn longest_match(data: &[u8], i: usize, window_size: usize, max_length: usize) -> (usize, usize) {
    let n = data.len();
    let start = i.saturating_sub(window_size);
    let mut best_len = 0;
    let mut best_dist = 0;

    for j in memchr_iter(data[i], &data[start..i]).map(|offset| start + offset) {
        let dist = i - j;
        if dist == 0 || dist > window_size {
            continue;
        }

        let match_len = match_length(data, j, i, max_length);

        // Need at least one byte after the match for the literal
        if match_len > best_len && i + match_len < n {
            best_len = match_len;
            best_dist = dist;
        }
    }

    (best_dist, best_len)
}

/// Length of the match between `data[j..]` and `data[i..]`.
///
/// The source never runs into position `i`.
#[inline]
fn match_length(data: &[u8], j: usize, i: usize, max_length: usize) -> usize {
    let n = data.len();
    let mut len = 0;
    while i + len < n && j + len < i && len < max_length && data[j + len] == data[i + len] {
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain candidate scan without the memchr skip
    fn compress_naive(data: &[u8], window_size: usize, max_length: usize) -> Vec<Token> {
        let n = data.len();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < n {
            let mut best_len = 0;
            let mut best_dist = 0;
            for j in i.saturating_sub(window_size)..i {
                let dist = i - j;
                let match_len = match_length(data, j, i, max_length);
                if match_len > best_len && i + match_len < n {
                    best_len = match_len;
                    best_dist = dist;
                }
            }
            if best_len > 0 {
                tokens.push(Token::copy(best_dist as u32, best_len as u32, data[i + best_len]));
                i += best_len + 1;
            } else {
                tokens.push(Token::literal(data[i]));
                i += 1;
            }
        }
        tokens
    }

    fn generate_data(size: usize, seed: u64, alphabet: u8) -> Vec<u8> {
        let mut state = seed;
        (0..size)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                b'A' + (state % alphabet as u64) as u8
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(compress(b"", 16, 15).is_empty());
    }

    #[test]
    fn test_single_byte_is_literal() {
        assert_eq!(compress(b"Q", 16, 15), vec![Token::literal(b'Q')]);
    }

    #[test]
    fn test_sample_vector() {
        let tokens = compress(b"1010ABABX", 16, 15);
        assert_eq!(
            tokens,
            vec![
                Token::literal(b'1'),
                Token::literal(b'0'),
                Token::copy(2, 2, b'A'),
                Token::literal(b'B'),
                Token::copy(2, 2, b'X'),
            ]
        );
    }

    #[test]
    fn test_equal_lengths_keep_first_candidate() {
        // At position 3 every earlier 'A' matches one byte; the oldest wins.
        let tokens = compress(b"AAAAB", 16, 15);
        assert_eq!(
            tokens,
            vec![Token::literal(b'A'), Token::copy(1, 1, b'A'), Token::copy(3, 1, b'B')]
        );
    }

    #[test]
    fn test_match_never_overlaps_current_position() {
        let tokens = compress(b"AAAAAAAA", 16, 15);
        for t in &tokens {
            assert!(t.length <= t.distance, "overlapping token {:?}", t);
        }
    }

    #[test]
    fn test_match_reaching_end_is_rejected_not_shortened() {
        // At position 2 the 2-byte match "AB" would consume the final byte,
        // so it is dropped entirely rather than cut to one byte.
        let tokens = compress(b"ABAB", 16, 15);
        assert!(tokens.iter().all(Token::is_literal));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_last_byte_is_always_literal() {
        for data in [&b"ZZ"[..], b"abcabcabc", b"xyxyxyxyxyxy"] {
            let tokens = compress(data, 16, 15);
            assert_eq!(tokens.last().map(|t| t.literal), data.last().copied());
        }
    }

    #[test]
    fn test_window_limits_distance() {
        let tokens = compress(b"ABCDEFGHABCDEFGH!", 4, 15);
        assert!(tokens.iter().all(|t| t.distance <= 4));
        // Nothing repeats within 4 bytes, so everything is a literal
        assert!(tokens.iter().all(Token::is_literal));
    }

    #[test]
    fn test_max_length_caps_match() {
        let data = b"ABCDEFGHABCDEFGH!";
        let tokens = compress(data, 16, 3);
        assert!(tokens.iter().all(|t| t.length <= 3));
        assert!(tokens.iter().any(|t| t.length == 3));
    }

    #[test]
    fn test_matches_naive_scan() {
        for (seed, alphabet) in [(1u64, 2u8), (7, 3), (42, 4), (99, 26)] {
            let data = generate_data(2000, seed, alphabet);
            for (window, max_len) in [(1, 1), (4, 3), (16, 15), (255, 15), (64, 200)] {
                assert_eq!(
                    compress(&data, window, max_len),
                    compress_naive(&data, window, max_len),
                    "seed={} window={} max_len={}",
                    seed,
                    window,
                    max_len
                );
            }
        }
    }

    #[test]
    fn test_encoder_uses_config_limits() {
        let config = LzConfig { window_size: 2, max_length: 1, ..Default::default() };
        let tokens = Encoder::new(&config).encode(b"ABCABCABC");
        assert!(tokens.iter().all(|t| t.distance <= 2 && t.length <= 1));
        assert_eq!(tokens, compress_with(b"ABCABCABC", &config));
    }
}
