use bitvec::prelude::*;
use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<Symbol>>,
        right: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    fn new(symbol: Symbol, weight: u64) -> Self {
        Self::Leaf { symbol, weight }
    }

    fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }
}

/// A one symbol alphabet is a root with the lone leaf as its only child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree<Symbol> {
    Singleton(Box<Node<Symbol>>),
    Branching(Node<Symbol>),
}

// ordered by weight, then by push order
#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending<Symbol> {
    weight: u64,
    seq: u64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

impl<Symbol: Ord> HuffmanTree<Symbol> {
    /// Leaves are pushed in symbol order and the first node popped becomes
    /// the left child. `None` for an empty map.
    pub fn build(freq: FrequencyMap<Symbol>) -> Option<Self> {
        if freq.len() == 1 {
            let (symbol, weight) = freq.into_iter().next()?;
            return Some(Self::Singleton(Box::new(Node::new(symbol, weight))));
        }

        let mut seq = 0;
        let mut pending = |node: Node<Symbol>| {
            let entry = Pending {
                weight: node.weight(),
                seq,
                node,
            };
            seq += 1;
            Reverse(entry)
        };

        let mut pq: BinaryHeap<_> = freq
            .into_iter()
            .map(|(s, count)| pending(Node::new(s, count)))
            .collect();

        loop {
            let Reverse(left) = pq.pop()?;
            let Some(Reverse(right)) = pq.pop() else {
                return Some(Self::Branching(left.node));
            };

            let parent = Node::from_children(left.node, right.node);
            tracing::trace!(
                left = left.seq,
                right = right.seq,
                weight = parent.weight(),
                "merged nodes"
            );
            pq.push(pending(parent));
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Self::Singleton(leaf) => leaf.weight(),
            Self::Branching(root) => root.weight(),
        }
    }
}

impl<Symbol: Ord + Clone> HuffmanTree<Symbol> {
    /// Path to every leaf, `false` for left and `true` for right.
    pub fn code_paths(&self) -> BTreeMap<Symbol, BitVec> {
        let mut paths = BTreeMap::new();
        // the singleton's leaf hangs off the left of the root
        let mut stack: Vec<(&Node<Symbol>, BitVec)> = match self {
            Self::Singleton(child) => vec![(child.as_ref(), bitvec![0])],
            Self::Branching(root) => vec![(root, BitVec::new())],
        };

        while let Some((node, mut path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    // an empty code could never be matched by the decoder
                    if path.is_empty() {
                        path.push(false);
                    }
                    paths.insert(symbol.clone(), path);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    path.push(false);

                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), path));
                }
            }
        }

        paths
    }
}
