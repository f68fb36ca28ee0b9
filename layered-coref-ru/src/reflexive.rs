//! Clause-local binding.
//!
//! "себя" and "свой" must find their antecedent inside their own clause,
//! while ordinary personal pronouns must not ("Кошка увидела себя" /
//! "Кошка увидела её").

use std::iter;

use layered_coref::{Analysis, Mention, Pos, Reflexivity, Token};

use crate::closed_class::{is_clause_root, is_reflexive_possessive, RELATIVE_STEM};
use crate::RussianRules;

pub(crate) fn reflexivity(token: &Token) -> Reflexivity {
    if is_reflexive_possessive(token) {
        return Reflexivity::Reflexive;
    }
    if token.tag_is(Pos::Pron) {
        if token.dep() == "nmod" && token.has_morph("Case", "Acc") {
            return Reflexivity::Ambiguous;
        }
        // "нами", "вами"
        if token.dep() == "obl"
            && token.has_morph("Case", "Ins")
            && !token.has_morph("Person", "Third")
        {
            return Reflexivity::Ambiguous;
        }
    }
    Reflexivity::NotReflexive
}

impl RussianRules {
    pub(crate) fn reflexive_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
    ) -> bool {
        if referring.pos() != Pos::Pron && !is_reflexive_possessive(referring) {
            return false;
        }
        if referring.lemma().starts_with(RELATIVE_STEM) {
            return false;
        }

        let doc = analysis.doc();
        let referred_root = &doc[referred.root_index()];
        let referred_root = analysis.governing_sibling(referred_root).unwrap_or(referred_root);
        let referring = analysis.governing_sibling(referring).unwrap_or(referring);

        if referred_root.dep_starts_with("nsubj")
            || (is_clause_root(referred_root) && self.anaphor(analysis, referred_root))
        {
            for ancestor in iter::once(referring).chain(doc.ancestors(referring)) {
                if ancestor.i() == referred_root.i()
                    || ancestor.child_indexes().contains(&referred_root.i())
                {
                    return true;
                }

                // Relative clauses
                if is_clause_root(ancestor)
                    && ancestor.dep_starts_with("acl")
                    && (ancestor.head_index() == referred_root.i()
                        || referred.contains(ancestor.head_index()))
                {
                    return true;
                }

                // The ancestor has its own subject, so stop here
                if doc
                    .children(ancestor)
                    .any(|child| child.dep_starts_with("nsubj") && child.i() != referred_root.i())
                {
                    return false;
                }

                if analysis.governing_sibling(ancestor).map(Token::i) == Some(referred_root.i()) {
                    return false;
                }
            }
        }

        !referring.is_root()
            && !referred_root.is_root()
            && (referring.head_index() == referred_root.head_index()
                || referred.contains(referring.head_index()))
            && referring.i() > referred_root.i()
    }
}
