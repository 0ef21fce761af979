use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{CodeTable, CodecConfig, CodecError, Decoder, Encoder, FrequencyMap, HuffmanTree};

/// The encoded text can only be read back with its own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "Symbol: Serialize",
    deserialize = "Symbol: Deserialize<'de> + Ord"
))]
pub struct Compressed<Symbol> {
    pub encoded_text: String,
    pub code_table: CodeTable<Symbol>,
}

#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn compress(&self, text: &str) -> Result<Compressed<char>, CodecError> {
        let symbols: Vec<char> = text.chars().collect();
        self.compress_symbols(&symbols)
    }

    pub fn compress_symbols<Symbol>(&self, symbols: &[Symbol]) -> Result<Compressed<Symbol>, CodecError>
    where
        Symbol: Ord + Clone + Debug,
    {
        let freq = FrequencyMap::from_symbols(symbols.iter().cloned());
        let alphabet = freq.len();
        let total = freq.total();

        let Some(tree) = HuffmanTree::build(freq) else {
            return Ok(Compressed {
                encoded_text: String::new(),
                code_table: CodeTable::new(),
            });
        };

        let paths = tree.code_paths();
        let code_table = CodeTable::from_paths(&paths);
        let encoded_text = Encoder::from_paths(paths).encode(symbols.iter().cloned())?;

        tracing::debug!(
            symbols = total,
            alphabet,
            bits = encoded_text.len(),
            "compressed"
        );

        Ok(Compressed {
            encoded_text,
            code_table,
        })
    }

    pub fn decompress(&self, encoded_text: &str, code_table: &CodeTable<char>) -> Result<String, CodecError> {
        self.decompress_symbols(encoded_text, code_table)
            .map(String::from_iter)
    }

    pub fn decompress_symbols<Symbol>(
        &self,
        encoded_text: &str,
        code_table: &CodeTable<Symbol>,
    ) -> Result<Vec<Symbol>, CodecError>
    where
        Symbol: Clone,
    {
        if encoded_text.is_empty() || code_table.is_empty() {
            return Ok(Vec::new());
        }

        let out = Decoder::new(code_table)?
            .with_trailing_bits(self.config.trailing_bits)
            .decode(encoded_text)?;

        tracing::debug!(
            bits = encoded_text.len(),
            alphabet = code_table.len(),
            symbols = out.len(),
            "decompressed"
        );

        Ok(out)
    }
}

/// Compresses `text` with the default configuration.
pub fn compress(text: &str) -> Result<Compressed<char>, CodecError> {
    Codec::default().compress(text)
}

/// Decompresses `encoded_text` with the default, lenient configuration.
pub fn decompress(encoded_text: &str, code_table: &CodeTable<char>) -> Result<String, CodecError> {
    Codec::default().decompress(encoded_text, code_table)
}
