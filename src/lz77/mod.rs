pub mod decoder;
pub mod encoder;
pub mod history;
pub mod token;

pub use decoder::{decompress, GoldenDecoder};
pub use encoder::{compress, compress_with, Encoder};
pub use history::HistoryWindow;
pub use token::{decoded_len, Token};
