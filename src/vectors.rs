//! Test vector generation: encode, self-check through the golden decoder,
//! pack, and write the artifact set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::codec::{MemWriter, TokenLayout};
use crate::error::{Error, Result};
use crate::lz77::{Encoder, GoldenDecoder, Token};
use crate::LzConfig;

/// Packed token words
pub const TOKENS_FILE: &str = "tokens.mem";
/// Reconstructed output bytes
pub const EXPECTED_FILE: &str = "expected.mem";
/// Token count and output length
pub const META_FILE: &str = "meta.mem";

/// Summary of a generated vector
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VectorStats {
    pub input_bytes: usize,
    pub tokens: usize,
    pub match_tokens: usize,
    pub literal_tokens: usize,
    pub longest_match: u32,
    /// Total packed size of the token stream in bits
    pub packed_bits: u64,
}

/// A verified set of test vectors for one input
#[derive(Clone, Debug)]
pub struct TestVectors {
    config: LzConfig,
    layout: TokenLayout,
    tokens: Vec<Token>,
    words: Vec<u64>,
    expected: Vec<u8>,
}

impl TestVectors {
    /// Encode `data`, decode it back through the golden model, and pack the
    /// tokens. Fails without producing anything if the decoded bytes differ
    /// from the input or any token does not fit the packed layout.
    pub fn generate(data: &[u8], config: &LzConfig) -> Result<Self> {
        config.validate()?;
        let layout = config.token_layout()?;
        if !config.fields_fit() {
            warn!(
                window_size = config.window_size,
                max_length = config.max_length,
                dist_width = config.dist_width,
                len_width = config.len_width,
                "encoder limits exceed packed field widths; large tokens will overflow"
            );
        }

        let tokens = Encoder::new(config).encode(data);

        let mut decoder = GoldenDecoder::from_config(config);
        decoder.decode_all(&tokens)?;
        let expected = decoder.finish();
        verify_round_trip(data, &expected)?;

        let words = tokens.iter().map(|t| layout.pack(t)).collect::<Result<Vec<_>>>()?;

        debug!(
            input_bytes = data.len(),
            tokens = tokens.len(),
            token_width = layout.token_width(),
            "generated test vectors"
        );

        Ok(Self { config: *config, layout, tokens, words, expected })
    }

    pub fn config(&self) -> &LzConfig {
        &self.config
    }

    pub fn layout(&self) -> &TokenLayout {
        &self.layout
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Packed token words, one per token
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Bytes the hardware decoder must produce
    pub fn expected(&self) -> &[u8] {
        &self.expected
    }

    pub fn stats(&self) -> VectorStats {
        let match_tokens = self.tokens.iter().filter(|t| !t.is_literal()).count();
        VectorStats {
            input_bytes: self.expected.len(),
            tokens: self.tokens.len(),
            match_tokens,
            literal_tokens: self.tokens.len() - match_tokens,
            longest_match: self.tokens.iter().map(|t| t.length).max().unwrap_or(0),
            packed_bits: self.tokens.len() as u64 * self.layout.token_width() as u64,
        }
    }

    /// Write the three artifacts to separate writers
    pub fn write_to<T: Write, E: Write, M: Write>(
        &self,
        tokens: T,
        expected: E,
        meta: M,
    ) -> Result<()> {
        let mut writer = MemWriter::new(tokens);
        writer.write_words(&self.words, &self.layout)?;
        writer.finish()?;

        let mut writer = MemWriter::new(expected);
        writer.write_expected(&self.expected)?;
        writer.finish()?;

        let mut writer = MemWriter::new(meta);
        writer.write_meta(self.tokens.len(), self.expected.len())?;
        writer.finish()?;

        Ok(())
    }

    /// Write `tokens.mem`, `expected.mem` and `meta.mem` into `dir`
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        let tokens = BufWriter::new(File::create(dir.join(TOKENS_FILE))?);
        let expected = BufWriter::new(File::create(dir.join(EXPECTED_FILE))?);
        let meta = BufWriter::new(File::create(dir.join(META_FILE))?);
        self.write_to(tokens, expected, meta)?;
        debug!(dir = %dir.display(), "wrote test vector files");
        Ok(())
    }
}

/// Confirm the decoded bytes equal the original input
pub fn verify_round_trip(original: &[u8], decoded: &[u8]) -> Result<()> {
    if original == decoded {
        return Ok(());
    }
    let first_difference = original
        .iter()
        .zip(decoded)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| original.len().min(decoded.len()));
    Err(Error::RoundTripMismatch {
        expected_len: original.len(),
        found_len: decoded.len(),
        first_difference,
    })
}
