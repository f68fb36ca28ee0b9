use std::fmt;

use crate::analysis::Analysis;
use crate::doc::{Doc, Token};

/// A candidate referent: a root token, optionally together with the
/// dependent siblings coordinated under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mention {
    root_index: usize,
    token_indexes: Vec<usize>,
}

impl Mention {
    pub fn new(analysis: &Analysis<'_>, root: &Token, include_dependent_siblings: bool) -> Self {
        let mut token_indexes = vec![root.i()];
        if include_dependent_siblings {
            token_indexes.extend_from_slice(analysis.dependent_sibling_indexes(root));
        }
        Mention {
            root_index: root.i(),
            token_indexes,
        }
    }

    /// A mention made of the root token alone.
    pub fn single(root: &Token) -> Self {
        Mention {
            root_index: root.i(),
            token_indexes: vec![root.i()],
        }
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    /// The root first, then any included siblings in document order.
    pub fn token_indexes(&self) -> &[usize] {
        &self.token_indexes
    }

    pub fn contains(&self, index: usize) -> bool {
        self.token_indexes.contains(&index)
    }

    pub fn tokens<'m, 'd: 'm>(&'m self, doc: &'d Doc) -> impl Iterator<Item = &'d Token> + 'm {
        self.token_indexes.iter().map(move |&i| &doc[i])
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.token_indexes)
    }
}
