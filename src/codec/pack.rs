//! Fixed-width token words.
//!
//! Layout, MSB to LSB: `[distance : dist_width][length : len_width][literal : 8]`

use crate::error::{Error, Result, TokenField};
use crate::lz77::Token;

/// Width of the literal field
pub const LITERAL_WIDTH: u8 = 8;

/// Bit widths of the packed token fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenLayout {
    dist_width: u8,
    len_width: u8,
}

impl TokenLayout {
    /// Create a layout. Each field must be 1-32 bits wide and the whole token
    /// must fit in 64 bits.
    pub fn new(dist_width: u8, len_width: u8) -> Result<Self> {
        if !(1..=32).contains(&dist_width) || !(1..=32).contains(&len_width) {
            return Err(Error::InvalidConfig(format!(
                "field widths must be 1-32 bits (dist_width={}, len_width={})",
                dist_width, len_width
            )));
        }
        let layout = Self { dist_width, len_width };
        if layout.token_width() > 64 {
            return Err(Error::InvalidConfig(format!(
                "token width {} exceeds 64 bits",
                layout.token_width()
            )));
        }
        Ok(layout)
    }

    pub fn dist_width(&self) -> u8 {
        self.dist_width
    }

    pub fn len_width(&self) -> u8 {
        self.len_width
    }

    /// Total packed width: dist_width + len_width + 8
    pub fn token_width(&self) -> u32 {
        self.dist_width as u32 + self.len_width as u32 + LITERAL_WIDTH as u32
    }

    /// Hex digits needed per packed word
    pub fn hex_digits(&self) -> usize {
        (self.token_width() as usize + 3) / 4
    }

    /// Largest distance that fits the distance field
    pub fn max_distance(&self) -> u32 {
        field_mask(self.dist_width as u32) as u32
    }

    /// Largest length that fits the length field
    pub fn max_length(&self) -> u32 {
        field_mask(self.len_width as u32) as u32
    }

    /// Pack a token
    pub fn pack(&self, token: &Token) -> Result<u64> {
        self.pack_fields(token.distance, token.length, u32::from(token.literal))
    }

    /// Pack raw field values, rejecting any that overflow their field
    pub fn pack_fields(&self, distance: u32, length: u32, literal: u32) -> Result<u64> {
        check_field(TokenField::Distance, distance, self.dist_width)?;
        check_field(TokenField::Length, length, self.len_width)?;
        check_field(TokenField::Literal, literal, LITERAL_WIDTH)?;

        let word = ((distance as u64) << (self.len_width as u32 + 8))
            | ((length as u64) << 8)
            | literal as u64;

        Ok(word & field_mask(self.token_width()))
    }

    /// Split a packed word back into a token. Bits above the token width are
    /// ignored.
    pub fn unpack(&self, word: u64) -> Token {
        let literal = (word & 0xFF) as u8;
        let length = ((word >> 8) & field_mask(self.len_width as u32)) as u32;
        let distance =
            ((word >> (self.len_width as u32 + 8)) & field_mask(self.dist_width as u32)) as u32;
        Token { distance, length, literal }
    }

    /// Unpack a sequence of words
    pub fn unpack_all(&self, words: &[u64]) -> Vec<Token> {
        words.iter().map(|&w| self.unpack(w)).collect()
    }
}

/// Pack `(distance, length, literal)` with the given field widths.
///
/// Each width must be 1-32 bits; a zero-width field is rejected with
/// [`Error::InvalidConfig`] even when the value packed into it is 0.
pub fn pack(distance: u32, length: u32, literal: u32, dist_width: u8, len_width: u8) -> Result<u64> {
    TokenLayout::new(dist_width, len_width)?.pack_fields(distance, length, literal)
}

/// Unpack a word produced by [`pack`] with the same widths
pub fn unpack(word: u64, dist_width: u8, len_width: u8) -> Result<Token> {
    Ok(TokenLayout::new(dist_width, len_width)?.unpack(word))
}

/// Mask of the low `width` bits (width 0-64)
#[inline]
fn field_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[inline]
fn check_field(field: TokenField, value: u32, width: u8) -> Result<()> {
    if u64::from(value) > field_mask(width as u32) {
        return Err(Error::FieldOverflow { field, value, width });
    }
    Ok(())
}
