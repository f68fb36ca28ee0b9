use layered_coref::{Analysis, Doc, Pos, Token};

use crate::closed_class::{is_clause_root, is_noun, is_reflexive_possessive};
use crate::RussianRules;

const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

impl RussianRules {
    /// Pronoun- and determiner-tagged tokens and the reflexives. Finite verbs
    /// standing in for an elided subject only when configured.
    pub(crate) fn anaphor(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        if token.tag_is(Pos::Pron) || token.tag_is(Pos::Det) {
            return true;
        }
        if is_reflexive_possessive(token) {
            return true;
        }
        self.is_elided_subject(analysis, token)
    }

    fn is_elided_subject(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        if !self.config().elided_subject_anaphors || !is_clause_root(token) {
            return false;
        }
        let doc = analysis.doc();
        // A coordinated verb shares the subject of its governor.
        if let Some(governor) = analysis.governing_sibling(token) {
            if has_subject(doc, governor) {
                return false;
            }
        }
        if token.pos() == Pos::Aux && !token.is_root() && has_subject(doc, doc.head(token)) {
            return false;
        }
        token.morph().contains_key("Person") && !has_subject(doc, token)
    }

    pub(crate) fn independent_noun(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        is_noun(token)
            && !PUNCTUATION.contains(token.text())
            && !self
                .lexicon()
                .is_in_blacklisted_phrase(analysis.doc(), token)
    }
}

fn has_subject(doc: &Doc, token: &Token) -> bool {
    doc.children(token).any(|child| child.dep_starts_with("nsubj"))
}
