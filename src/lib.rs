//! Golden-model LZ77 compressor and test vector generator.
//!
//! The model targets a hardware decoder with a small sliding window and a
//! fixed token format: every token is `(distance, length, literal)`, where a
//! back-reference is always followed by exactly one literal byte. The
//! decoder reproduces the hardware's behaviour exactly: the reconstructed
//! output is kept in full while only the history used for back-references
//! is bounded to the window.

pub mod codec;
pub mod error;
pub mod lz77;
pub mod vectors;

pub use codec::{pack, unpack, MemWriter, TokenLayout};
pub use error::{BackRefFault, Error, Result, TokenField};
pub use lz77::{compress, decompress, Encoder, GoldenDecoder, HistoryWindow, Token};
pub use vectors::{verify_round_trip, TestVectors, VectorStats};

/// Default back-reference window in bytes
pub const DEFAULT_WINDOW_SIZE: usize = 16;
/// Default maximum match length
pub const DEFAULT_MAX_LENGTH: usize = 15;
/// Default distance field width in bits
pub const DEFAULT_DIST_WIDTH: u8 = 4;
/// Default length field width in bits
pub const DEFAULT_LEN_WIDTH: u8 = 4;

/// Settings shared by the encoder, decoder and codec.
///
/// All three must agree for a generated vector to be valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LzConfig {
    /// Back-reference lookback limit in bytes
    pub window_size: usize,
    /// Maximum match length
    pub max_length: usize,
    /// Bits for the packed distance field
    pub dist_width: u8,
    /// Bits for the packed length field
    pub len_width: u8,
}

impl LzConfig {
    /// Check the settings are usable together
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfig("window_size must be at least 1".to_string()));
        }
        if self.max_length == 0 {
            return Err(Error::InvalidConfig("max_length must be at least 1".to_string()));
        }
        if self.window_size > u32::MAX as usize || self.max_length > u32::MAX as usize {
            return Err(Error::InvalidConfig(
                "window_size and max_length must fit in 32 bits".to_string(),
            ));
        }
        self.token_layout()?;
        Ok(())
    }

    /// Packed token width: dist_width + len_width + 8
    pub fn token_width(&self) -> u32 {
        self.dist_width as u32 + self.len_width as u32 + 8
    }

    /// Field layout for packing tokens
    pub fn token_layout(&self) -> Result<TokenLayout> {
        TokenLayout::new(self.dist_width, self.len_width)
    }

    /// Whether every distance and length the encoder may emit fits the
    /// packed fields
    pub fn fields_fit(&self) -> bool {
        let dist_max = 1u64.checked_shl(self.dist_width as u32).unwrap_or(u64::MAX);
        let len_max = 1u64.checked_shl(self.len_width as u32).unwrap_or(u64::MAX);
        (self.window_size as u64) < dist_max && (self.max_length as u64) < len_max
    }
}

impl Default for LzConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_length: DEFAULT_MAX_LENGTH,
            dist_width: DEFAULT_DIST_WIDTH,
            len_width: DEFAULT_LEN_WIDTH,
        }
    }
}
