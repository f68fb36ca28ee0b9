//! Per-document side table of coordination facts.
//!
//! Tokens stay immutable; everything the rules derive about coordination is
//! written here once by [`RulesAnalyzer::initialize`](crate::RulesAnalyzer::initialize)
//! and then only read.

use tracing::trace;

use crate::doc::{Doc, DocDisplay, Token};

/// Siblings reached from one token, as computed by a language's rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordination {
    /// Document indexes, ascending.
    pub siblings: Vec<usize>,
    /// At least one member was joined by a disjunction ("or").
    pub has_or_coordination: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SiblingState {
    dependent_siblings: Vec<usize>,
    governing_sibling: Option<usize>,
    has_or_coordination: bool,
}

#[derive(Debug, Clone)]
pub struct Analysis<'d> {
    doc: &'d Doc,
    state: Vec<SiblingState>,
}

impl<'d> Analysis<'d> {
    pub(crate) fn new(doc: &'d Doc) -> Self {
        Analysis {
            doc,
            state: vec![SiblingState::default(); doc.len()],
        }
    }

    pub fn doc(&self) -> &'d Doc {
        self.doc
    }

    /// Stores the coordination found for `token`. Each sibling keeps the first
    /// governor recorded for it.
    pub(crate) fn record(&mut self, token: usize, coordination: Coordination) {
        if !coordination.siblings.is_empty() || coordination.has_or_coordination {
            trace!(
                token,
                siblings = ?coordination.siblings,
                or = coordination.has_or_coordination,
                "coordination"
            );
        }
        for &sibling in &coordination.siblings {
            let governed = &mut self.state[sibling];
            if sibling != token && governed.governing_sibling.is_none() {
                governed.governing_sibling = Some(token);
            }
        }
        let state = &mut self.state[token];
        state.dependent_siblings = coordination.siblings;
        state.has_or_coordination = coordination.has_or_coordination;
    }

    pub fn dependent_sibling_indexes(&self, token: &Token) -> &[usize] {
        &self.state[token.i()].dependent_siblings
    }

    pub fn dependent_siblings(&self, token: &Token) -> impl Iterator<Item = &'d Token> + '_ {
        let doc = self.doc;
        self.state[token.i()]
            .dependent_siblings
            .iter()
            .map(move |&i| &doc[i])
    }

    pub fn governing_sibling(&self, token: &Token) -> Option<&'d Token> {
        self.state[token.i()]
            .governing_sibling
            .map(|i| &self.doc[i])
    }

    pub fn has_or_coordination(&self, token: &Token) -> bool {
        self.state[token.i()].has_or_coordination
    }

    /// Whether `token` is part of a coordination that is not disjunctive,
    /// either as its governor or as one of the governed siblings.
    pub fn is_involved_in_non_or_conjunction(&self, token: &Token) -> bool {
        let state = &self.state[token.i()];
        if !state.dependent_siblings.is_empty() {
            !state.has_or_coordination
        } else if let Some(governor) = state.governing_sibling {
            !self.state[governor].has_or_coordination
        } else {
            false
        }
    }

    /// Number of tokens that govern at least one sibling.
    pub fn coordination_count(&self) -> usize {
        self.state
            .iter()
            .filter(|state| !state.dependent_siblings.is_empty())
            .count()
    }

    /// Draws the coordination facts of one sentence.
    pub fn coordination_display(&self, sentence: usize) -> DocDisplay<'d> {
        let mut display = DocDisplay::new(self.doc, sentence);
        for token in self.doc.sentence(sentence) {
            let state = &self.state[token.i()];
            if !state.dependent_siblings.is_empty() || state.has_or_coordination {
                let names: Vec<&str> = state
                    .dependent_siblings
                    .iter()
                    .map(|&i| self.doc[i].text())
                    .collect();
                let or = if state.has_or_coordination { " (or)" } else { "" };
                display.include(token.i(), format!("Siblings [{}]{}", names.join(", "), or));
            }
            if let Some(governor) = state.governing_sibling {
                display.include_with_link(
                    token.i(),
                    "DependentSibling",
                    "governor",
                    Some("^"),
                    governor,
                );
            }
        }
        display
    }
}
