use std::collections::{btree_map, BTreeMap};

/// Occurrence counts, kept in symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<Symbol> {
    counts: BTreeMap<Symbol, u64>,
}

impl<Symbol: Ord> FrequencyMap<Symbol> {
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut counts = BTreeMap::new();
        for s in symbols {
            *counts.entry(s).or_default() += 1;
        }

        Self { counts }
    }

    pub fn get(&self, symbol: &Symbol) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }
}

impl<Symbol> FrequencyMap<Symbol> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.counts.iter().map(|(s, &n)| (s, n))
    }
}

impl<Symbol: Ord> FromIterator<Symbol> for FrequencyMap<Symbol> {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

impl<Symbol> IntoIterator for FrequencyMap<Symbol> {
    type Item = (Symbol, u64);
    type IntoIter = btree_map::IntoIter<Symbol, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
