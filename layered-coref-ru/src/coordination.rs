//! Coordinated siblings.
//!
//! Russian marks coordination both with conjunctions ("Дмитрий и Кристина")
//! and with the comitative instrumental ("Дмитрий с Кристиной"). Starting
//! from a token, the walk follows `conj`, `cc` and `punct` dependents, and
//! instrumental nouns hanging off nouns, off anaphoric verbs, or off the
//! head of a noun.

use std::collections::BTreeSet;

use layered_coref::{Analysis, Coordination, Token};

use crate::closed_class::{is_clause_root, is_conjunction_dep, is_noun, is_sibling_dep};
use crate::RussianRules;

impl RussianRules {
    pub(crate) fn coordination(&self, analysis: &Analysis<'_>, token: &Token) -> Coordination {
        if is_conjunction_dep(token) || is_sibling_dep(token) {
            return Coordination::default();
        }

        let mut walk = SiblingWalk {
            rules: self,
            analysis,
            root: token,
            visited: vec![false; analysis.doc().len()],
            has_or_coordination: false,
        };
        let siblings = walk.visit(token);

        Coordination {
            siblings: siblings.into_iter().collect(),
            has_or_coordination: walk.has_or_coordination,
        }
    }
}

struct SiblingWalk<'a> {
    rules: &'a RussianRules,
    analysis: &'a Analysis<'a>,
    root: &'a Token,
    visited: Vec<bool>,
    has_or_coordination: bool,
}

impl<'a> SiblingWalk<'a> {
    fn visit(&mut self, token: &'a Token) -> BTreeSet<usize> {
        let doc = self.analysis.doc();
        self.visited[token.i()] = true;
        let mut siblings = BTreeSet::new();
        let is_root = token.i() == self.root.i();

        if self.rules.lexicon().is_or_lemma(token.lemma()) {
            self.has_or_coordination = true;
        }
        // Two coordinated singular verb anaphors do not make a plural subject.
        if !is_root
            && is_clause_root(self.root)
            && is_clause_root(token)
            && self.rules.anaphor(self.analysis, token)
            && self.rules.anaphor(self.analysis, self.root)
        {
            self.has_or_coordination = true;
        }

        if (is_sibling_dep(token) || is_instrumental(token)) && !is_root {
            siblings.insert(token.i());
        }

        for child in doc.children(token) {
            if !self.visited[child.i()] && (is_sibling_dep(child) || is_conjunction_dep(child)) {
                siblings.extend(self.visit(child));
            }
        }

        if is_noun(token) {
            for child in doc.children(token) {
                if is_noun(child) && is_instrumental(child) && !self.visited[child.i()] {
                    siblings.extend(self.visit(child));
                }
            }
        }

        if is_clause_root(token) && self.rules.anaphor(self.analysis, token) {
            for child in doc.children(token) {
                if is_noun(child) && is_instrumental(child) && !self.visited[child.i()] {
                    siblings.extend(self.visit(child));
                }
            }
        }

        if !token.is_root() && is_noun(token) {
            for child in doc.children(doc.head(token)) {
                if is_noun(child) && is_instrumental(child) && !self.visited[child.i()] {
                    siblings.extend(self.visit(child));
                }
            }
        }

        siblings
    }
}

fn is_instrumental(token: &Token) -> bool {
    token.has_morph("Case", "Ins")
}
