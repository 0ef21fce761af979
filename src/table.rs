use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

use crate::bits;
use crate::tree::HuffmanTree;
use crate::FrequencyMap;

/// Symbol to code, written as a string of `'0'` and `'1'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "Symbol: Serialize",
    deserialize = "Symbol: Deserialize<'de> + Ord"
))]
pub struct CodeTable<Symbol> {
    codes: BTreeMap<Symbol, String>,
}

impl<Symbol: Ord + Clone> CodeTable<Symbol> {
    pub fn from_tree(tree: &HuffmanTree<Symbol>) -> Self {
        Self::from_paths(&tree.code_paths())
    }

    pub(crate) fn from_paths(paths: &BTreeMap<Symbol, BitVec>) -> Self {
        Self {
            codes: paths
                .iter()
                .map(|(s, path)| (s.clone(), bits::render(path)))
                .collect(),
        }
    }
}

impl<Symbol: Ord> CodeTable<Symbol> {
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, symbol: Symbol, code: impl Into<String>) -> Option<String> {
        self.codes.insert(symbol, code.into())
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// `None` if a counted symbol has no code.
    pub fn encoded_len(&self, freq: &FrequencyMap<Symbol>) -> Option<u64> {
        freq.iter()
            .map(|(s, n)| self.get(s).map(|code| n * code.len() as u64))
            .sum()
    }
}

impl<Symbol> CodeTable<Symbol> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &str)> {
        self.codes.iter().map(|(s, c)| (s, c.as_str()))
    }

    /// Whether no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // after sorting, a code's extensions directly follow it
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

impl<Symbol: Ord> Default for CodeTable<Symbol> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Symbol: Ord, C: Into<String>> FromIterator<(Symbol, C)> for CodeTable<Symbol> {
    fn from_iter<I: IntoIterator<Item = (Symbol, C)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(|(s, c)| (s, c.into())).collect(),
        }
    }
}

impl<Symbol> IntoIterator for CodeTable<Symbol> {
    type Item = (Symbol, String);
    type IntoIter = btree_map::IntoIter<Symbol, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}
