//! Golden-model decoder.
//!
//! Keeps two containers: the full reconstructed output, which only ever
//! grows, and a [`HistoryWindow`] bounded to `window_size` bytes that is the
//! sole source for back-references. Only the history is truncated.

use tracing::trace;

use super::history::HistoryWindow;
use super::token::Token;
use crate::error::{BackRefFault, Error, Result};
use crate::LzConfig;

pub struct GoldenDecoder {
    output: Vec<u8>,
    history: HistoryWindow,
    /// Decode-time bound on token length, if known
    max_length: Option<usize>,
    tokens_decoded: usize,
}

impl GoldenDecoder {
    /// Decoder that validates back-references against a `window_size` history
    pub fn new(window_size: usize) -> Self {
        Self {
            output: Vec::new(),
            history: HistoryWindow::new(window_size),
            max_length: None,
            tokens_decoded: 0,
        }
    }

    /// Decoder that also rejects tokens longer than `config.max_length`
    pub fn from_config(config: &LzConfig) -> Self {
        Self { max_length: Some(config.max_length), ..Self::new(config.window_size) }
    }

    /// Decode a single token, appending its bytes to the output.
    ///
    /// Invalid tokens are rejected before anything is appended.
    pub fn step(&mut self, token: &Token) -> Result<()> {
        let index = self.tokens_decoded;

        if token.length > 0 {
            if token.distance == 0 {
                return Err(Error::InvalidBackReference {
                    index,
                    fault: BackRefFault::ZeroDistance { length: token.length },
                });
            }
            let available = self.history.len();
            if token.distance as usize > available {
                return Err(Error::InvalidBackReference {
                    index,
                    fault: BackRefFault::ExceedsHistory { distance: token.distance, available },
                });
            }
            if let Some(max) = self.max_length {
                if token.length as usize > max {
                    return Err(Error::LengthExceedsMax { index, length: token.length, max });
                }
            }

            let distance = token.distance as usize;
            for _ in 0..token.length {
                // The source stays `distance` bytes behind the write head. When
                // distance < length this re-reads bytes copied by this loop.
                let byte = self.history.back(distance);
                self.emit(byte);
            }
        }

        self.emit(token.literal);
        self.tokens_decoded += 1;

        trace!(
            index,
            distance = token.distance,
            length = token.length,
            literal = token.literal,
            output_len = self.output.len(),
            history_len = self.history.len(),
            "decoded token"
        );

        Ok(())
    }

    /// Decode every token in order, stopping at the first invalid one
    pub fn decode_all(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            self.step(token)?;
        }
        Ok(())
    }

    /// Append one byte to both the output and the history
    #[inline]
    fn emit(&mut self, byte: u8) {
        self.output.push(byte);
        self.history.push(byte);
    }

    /// Everything reconstructed so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn history(&self) -> &HistoryWindow {
        &self.history
    }

    pub fn tokens_decoded(&self) -> usize {
        self.tokens_decoded
    }

    /// Consume the decoder and return the full output
    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}

/// Reconstruct the byte stream for `tokens` using a `window_size` history
pub fn decompress(tokens: &[Token], window_size: usize) -> Result<Vec<u8>> {
    let mut decoder = GoldenDecoder::new(window_size);
    decoder.decode_all(tokens)?;
    Ok(decoder.finish())
}
