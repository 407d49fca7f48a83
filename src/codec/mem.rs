//! Hex-per-line text artifacts (`$readmemh` style).
//!
//! Every line holds one uppercase, zero-padded hex value. Three artifacts are
//! produced per test vector:
//! - tokens: one packed token word per line, `ceil(token_width / 4)` digits
//! - expected: one reconstructed output byte per line, 2 digits
//! - meta: token count, then expected byte count, 8 digits each

use std::io::{BufRead, Write};

use super::pack::TokenLayout;
use crate::error::{Error, Result};
use crate::lz77::Token;

/// Hex digits per metadata line
pub const META_DIGITS: usize = 8;

/// Writes hex-per-line artifacts to any writer
pub struct MemWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> MemWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines_written: 0 }
    }

    /// Write one value zero-padded to `digits` hex digits
    pub fn write_value(&mut self, value: u64, digits: usize) -> Result<()> {
        writeln!(self.writer, "{:0width$X}", value, width = digits)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write already-packed token words
    pub fn write_words(&mut self, words: &[u64], layout: &TokenLayout) -> Result<()> {
        let digits = layout.hex_digits();
        for &word in words {
            self.write_value(word, digits)?;
        }
        Ok(())
    }

    /// Pack and write tokens, stopping at the first field overflow
    pub fn write_tokens(&mut self, tokens: &[Token], layout: &TokenLayout) -> Result<()> {
        let digits = layout.hex_digits();
        for token in tokens {
            let word = layout.pack(token)?;
            self.write_value(word, digits)?;
        }
        Ok(())
    }

    /// Write expected output bytes, two digits each
    pub fn write_expected(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.write_value(b as u64, 2)?;
        }
        Ok(())
    }

    /// Write the two metadata lines
    pub fn write_meta(&mut self, token_count: usize, expected_len: usize) -> Result<()> {
        let token_count = meta_word(token_count)?;
        let expected_len = meta_word(expected_len)?;
        self.write_value(token_count, META_DIGITS)?;
        self.write_value(expected_len, META_DIGITS)?;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and finish writing
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn meta_word(value: usize) -> Result<u64> {
    u32::try_from(value).map(u64::from).map_err(|_| Error::MetadataOverflow(value))
}

/// Token artifact text
pub fn format_tokens(tokens: &[Token], layout: &TokenLayout) -> Result<String> {
    let mut writer = MemWriter::new(Vec::new());
    writer.write_tokens(tokens, layout)?;
    into_text(writer)
}

/// Expected-output artifact text
pub fn format_expected(bytes: &[u8]) -> Result<String> {
    let mut writer = MemWriter::new(Vec::new());
    writer.write_expected(bytes)?;
    into_text(writer)
}

/// Metadata artifact text
pub fn format_meta(token_count: usize, expected_len: usize) -> Result<String> {
    let mut writer = MemWriter::new(Vec::new());
    writer.write_meta(token_count, expected_len)?;
    into_text(writer)
}

fn into_text(writer: MemWriter<Vec<u8>>) -> Result<String> {
    let bytes = writer.finish()?;
    // Only hex digits and newlines are ever written
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse a hex-per-line artifact back into values.
///
/// Blank lines and `//` comment lines are skipped.
pub fn read_mem_words<R: BufRead>(reader: R) -> Result<Vec<u64>> {
    let mut words = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let word = u64::from_str_radix(trimmed, 16)
            .map_err(|_| Error::MalformedMem { line: idx + 1, content: line.clone() })?;
        words.push(word);
    }
    Ok(words)
}
