pub mod mem;
pub mod pack;

pub use mem::{format_expected, format_meta, format_tokens, read_mem_words, MemWriter};
pub use pack::{pack, unpack, TokenLayout};
