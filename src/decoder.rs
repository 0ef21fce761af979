use bitvec::prelude::*;
use std::collections::HashMap;

use crate::{bits, CodeTable, CodecError, TrailingBits};

#[derive(Debug, Clone)]
pub struct Decoder<Symbol> {
    decode_table: HashMap<BitVec, Symbol>,
    trailing_bits: TrailingBits,
}

impl<Symbol: Clone> Decoder<Symbol> {
    /// When two symbols share a code the greater symbol wins. Empty codes
    /// never match and are dropped.
    pub fn new(table: &CodeTable<Symbol>) -> Result<Self, CodecError> {
        let mut decode_table = HashMap::with_capacity(table.len());
        for (symbol, code) in table.iter() {
            if code.is_empty() {
                tracing::warn!("ignoring empty code in table");
                continue;
            }

            if decode_table.insert(bits::parse(code)?, symbol.clone()).is_some() {
                tracing::warn!(code, "duplicate code in table, keeping the last symbol");
            }
        }

        Ok(Self {
            decode_table,
            trailing_bits: TrailingBits::default(),
        })
    }

    pub fn with_trailing_bits(mut self, trailing_bits: TrailingBits) -> Self {
        self.trailing_bits = trailing_bits;
        self
    }

    pub fn decode_bits(&self, input: &BitSlice) -> Result<Vec<Symbol>, CodecError> {
        let (out, leftover) = self.scan(input);
        self.finish(out, leftover)
    }

    /// Everything from the first character other than `0` or `1` on is
    /// treated as trailing input.
    pub fn decode(&self, text: &str) -> Result<Vec<Symbol>, CodecError> {
        let end = text
            .find(|c: char| c != '0' && c != '1')
            .unwrap_or(text.len());
        let (body, rest) = text.split_at(end);

        let input: BitVec = body.chars().map(|c| c == '1').collect();
        let (out, leftover) = self.scan(&input);
        self.finish(out, leftover + rest.chars().count())
    }

    // shortest match first, no backtracking
    fn scan(&self, input: &BitSlice) -> (Vec<Symbol>, usize) {
        let mut out = Vec::new();
        let mut cursor = BitVec::new();
        for b in input.iter().by_vals() {
            cursor.push(b);
            if let Some(sym) = self.decode_table.get(&cursor) {
                cursor.clear();
                out.push(sym.clone());
            }
        }

        (out, cursor.len())
    }

    fn finish(&self, out: Vec<Symbol>, count: usize) -> Result<Vec<Symbol>, CodecError> {
        if count > 0 {
            match self.trailing_bits {
                TrailingBits::Discard => tracing::debug!(count, "discarding trailing bits"),
                TrailingBits::Reject => return Err(CodecError::TrailingBits { count }),
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn decoder() -> Decoder<char> {
        Decoder::new(&CodeTable::from_iter([('a', "10"), ('b', "11"), ('c', "0")])).unwrap()
    }

    fn decode(d: &Decoder<char>, text: &str) -> Result<String, CodecError> {
        d.decode(text).map(String::from_iter)
    }

    #[test_case("101100010", "abcca" ; "full input")]
    #[test_case("", "" ; "empty input")]
    #[test_case("0001", "ccc" ; "one trailing bit")]
    #[test_case("1", "" ; "only trailing bits")]
    #[test_case("0110\n", "cbc" ; "trailing newline")]
    #[test_case("10 110", "a" ; "stray space")]
    fn lenient(input: &str, expected: &str) {
        assert_eq!(decode(&decoder(), input).unwrap(), expected);
    }

    #[test]
    fn strict_rejects_trailing_bits() {
        let d = decoder().with_trailing_bits(TrailingBits::Reject);
        assert_eq!(decode(&d, "0101"), Err(CodecError::TrailingBits { count: 1 }));
        assert_eq!(decode(&d, "0110").unwrap(), "cbc");
    }

    #[test]
    fn empty_table_decodes_nothing() {
        let d = Decoder::<char>::new(&CodeTable::new()).unwrap();
        assert_eq!(decode(&d, "101010").unwrap(), "");
        assert_eq!(d.decode_bits(bits![1, 0, 1]).unwrap(), Vec::<char>::new());
    }

    #[test]
    fn strict_counts_stray_chars_as_trailing() {
        let d = decoder().with_trailing_bits(TrailingBits::Reject);
        assert_eq!(decode(&d, "10\r\n"), Err(CodecError::TrailingBits { count: 2 }));
        assert_eq!(decode(&d, "01x"), Err(CodecError::TrailingBits { count: 2 }));
    }

    #[test]
    fn strict_with_only_empty_codes() {
        let d = Decoder::new(&CodeTable::from_iter([('a', "")]))
            .unwrap()
            .with_trailing_bits(TrailingBits::Reject);
        assert_eq!(decode(&d, "1"), Err(CodecError::TrailingBits { count: 1 }));
        assert_eq!(decode(&d, "").unwrap(), "");
    }

    #[test]
    fn bad_code_in_table() {
        assert_eq!(
            Decoder::new(&CodeTable::from_iter([('a', "0"), ('b', "1?")])).unwrap_err(),
            CodecError::InvalidBit {
                index: 1,
                found: '?'
            }
        );
    }

    #[test]
    fn duplicate_code_last_symbol_wins() {
        let d = Decoder::new(&CodeTable::from_iter([('x', "0"), ('y', "0"), ('z', "1")])).unwrap();
        assert_eq!(decode(&d, "010").unwrap(), "yzy");
    }

    #[test]
    fn shortest_match_on_non_prefix_free_table() {
        // "01" can never be read, "0" always matches first
        let d = Decoder::new(&CodeTable::from_iter([('a', "0"), ('b', "01"), ('c', "1")])).unwrap();
        assert_eq!(decode(&d, "01").unwrap(), "ac");
    }

    #[test]
    fn empty_code_is_ignored() {
        let d = Decoder::new(&CodeTable::from_iter([('a', ""), ('b', "1")])).unwrap();
        assert_eq!(decode(&d, "11").unwrap(), "bb");
    }
}
