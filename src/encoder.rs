use bitvec::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::{bits, CodeTable, CodecError};

#[derive(Debug, Clone)]
pub struct Encoder<Symbol> {
    encode_table: BTreeMap<Symbol, BitBox>,
}

impl<Symbol> Encoder<Symbol>
where
    Symbol: Ord + Clone + Debug,
{
    pub fn new(table: &CodeTable<Symbol>) -> Result<Self, CodecError> {
        let encode_table: BTreeMap<_, _> = table
            .iter()
            .map(|(s, code)| Ok((s.clone(), bits::parse(code)?.into_boxed_bitslice())))
            .collect::<Result<_, CodecError>>()?;

        Ok(Self { encode_table })
    }

    pub(crate) fn from_paths(paths: BTreeMap<Symbol, BitVec>) -> Self {
        Self {
            encode_table: paths
                .into_iter()
                .map(|(s, path)| (s, path.into_boxed_bitslice()))
                .collect(),
        }
    }

    /// A symbol without a code is a caller bug and fails the whole encode.
    pub fn encode_bits(&self, stream: impl IntoIterator<Item = Symbol>) -> Result<BitVec, CodecError> {
        let mut out = BitVec::new();
        for s in stream {
            let code = self
                .encode_table
                .get(&s)
                .ok_or_else(|| CodecError::UnknownSymbol(format!("{s:?}")))?;
            out.extend_from_bitslice(code.as_bitslice());
        }

        Ok(out)
    }

    pub fn encode(&self, stream: impl IntoIterator<Item = Symbol>) -> Result<String, CodecError> {
        self.encode_bits(stream).map(|bv| bits::render(&bv))
    }
}
