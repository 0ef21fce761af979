//! Huffman coding over arbitrary symbol alphabets.
//!
//! [`compress`] counts the symbols of a text, builds a Huffman tree from the
//! counts, and returns the encoded text as a string of `'0'`/`'1'` together
//! with the [`CodeTable`] it was encoded with. [`decompress`] reverses it.
//!
//! ```
//! let c = huffman::compress("abracadabra").unwrap();
//! assert_eq!(huffman::decompress(&c.encoded_text, &c.code_table).unwrap(), "abracadabra");
//! ```

mod bits;
mod codec;
mod config;
mod decoder;
mod encoder;
mod error;
mod freq;
mod table;
mod tree;

pub use codec::{compress, decompress, Codec, Compressed};
pub use config::{CodecConfig, TrailingBits};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::CodecError;
pub use freq::FrequencyMap;
pub use table::CodeTable;
pub use tree::{HuffmanTree, Node};
