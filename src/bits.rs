//! Conversion between the textual `'0'`/`'1'` form of a bit string and
//! packed [`BitVec`]s.

use bitvec::prelude::*;

use crate::CodecError;

pub fn parse(text: &str) -> Result<BitVec, CodecError> {
    let mut out = BitVec::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '0' => out.push(false),
            '1' => out.push(true),
            found => return Err(CodecError::InvalidBit { index, found }),
        }
    }

    Ok(out)
}

pub fn render(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}
