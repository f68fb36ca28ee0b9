//! Whether a noun reads as introducing a referent or picking one up again.
//!
//! Russian has no articles; the determiners and pronominal adjectives
//! attached to the noun carry the signal.

use layered_coref::{Doc, Pos, Token};

use crate::closed_class::{
    is_term_operator, DEMONSTRATIVES, INDEFINITE_HYPHEN, INDEFINITE_PARTICLE,
    INTERROGATIVE_DETERMINER, INTERROGATIVE_STEM,
};

/// Common nouns without a demonstrative or possessive determiner.
pub(crate) fn is_potentially_indefinite(doc: &Doc, token: &Token) -> bool {
    if token.pos() != Pos::Noun {
        return false;
    }
    for child in term_operators(doc, token) {
        let lemma = child.lemma().to_lowercase();
        if DEMONSTRATIVES.contains(&lemma.as_str()) {
            return false;
        }
        // какой-то
        if child.lemma() == INDEFINITE_HYPHEN
            && doc
                .nbor(child, 1)
                .map_or(false, |next| next.lemma() == INDEFINITE_PARTICLE)
        {
            return true;
        }
        if child.pos() == Pos::Det
            && child.tag_is(Pos::Adj)
            && child.dep_starts_with("det")
            && child.has_morph("Poss", "Yes")
        {
            return false;
        }
        if child.pos() == Pos::Det && child.tag_is(Pos::Det) && lemma != INTERROGATIVE_DETERMINER {
            return false;
        }
    }
    true
}

/// Proper nouns, and common nouns with a determiner that is not interrogative.
pub(crate) fn is_potentially_definite(doc: &Doc, token: &Token) -> bool {
    match token.pos() {
        Pos::Propn => return true,
        Pos::Noun => {}
        _ => return false,
    }
    if term_operators(doc, token)
        .any(|child| child.lemma().to_lowercase().starts_with(INTERROGATIVE_STEM))
    {
        return false;
    }
    term_operators(doc, token).any(|child| child.tag_is(Pos::Adj) || child.tag_is(Pos::Det))
}

fn term_operators<'d>(doc: &'d Doc, token: &Token) -> impl Iterator<Item = &'d Token> + 'd {
    doc.children(token).filter(|child| is_term_operator(child))
}
