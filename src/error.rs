use std::fmt;

use thiserror::Error;

/// Which packed field a [`Error::FieldOverflow`] refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenField {
    Distance,
    Length,
    Literal,
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenField::Distance => "distance",
            TokenField::Length => "length",
            TokenField::Literal => "literal",
        };
        f.write_str(name)
    }
}

/// Why a back-reference token was rejected by the decoder
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackRefFault {
    #[error("distance=0 with length={length}")]
    ZeroDistance { length: u32 },

    #[error("distance {distance} exceeds available history {available}")]
    ExceedsHistory { distance: u32, available: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Decoder errors
    #[error("Invalid back-reference at token {index}: {fault}")]
    InvalidBackReference { index: usize, fault: BackRefFault },

    #[error("Token {index} length {length} exceeds maximum match length {max}")]
    LengthExceedsMax { index: usize, length: u32, max: usize },

    // Codec errors
    #[error("Field overflow: {field}={value} does not fit in {width} bits")]
    FieldOverflow { field: TokenField, value: u32, width: u8 },

    #[error("Metadata value {0} does not fit in 32 bits")]
    MetadataOverflow(usize),

    #[error("Malformed mem line {line}: {content:?}")]
    MalformedMem { line: usize, content: String },

    // Self-check errors
    #[error(
        "Round-trip mismatch: expected {expected_len} bytes, decoded {found_len}, first difference at {first_difference}"
    )]
    RoundTripMismatch { expected_len: usize, found_len: usize, first_difference: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
