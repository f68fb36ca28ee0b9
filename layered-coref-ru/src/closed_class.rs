//! Function words and label groups the Russian rules test against.

use layered_coref::{Pos, Token};

pub(crate) const REFLEXIVE_POSSESSIVE: &str = "свой";
pub(crate) const REFLEXIVE_PRONOUN: &str = "себя";
pub(crate) const DEMONSTRATIVES: &[&str] = &["тот", "этот", "такой"];
pub(crate) const INTERROGATIVE_DETERMINER: &str = "какой";
/// Stem shared by "какой", "каков", "как-то" and friends.
pub(crate) const INTERROGATIVE_STEM: &str = "как";
/// Stem of the relative pronoun "который".
pub(crate) const RELATIVE_STEM: &str = "котор";
pub(crate) const POSSESSIVE_INTERROGATIVE: &str = "чей";
pub(crate) const FIRST_PLURAL_POSSESSIVE: &str = "наш";
pub(crate) const FIRST_PLURAL_PRONOUN: &str = "мы";
pub(crate) const SECOND_PLURAL_POSSESSIVE: &str = "ваш";
pub(crate) const SECOND_PLURAL_PRONOUN: &str = "вы";
pub(crate) const UNIVERSAL_DETERMINER: &str = "весь";
pub(crate) const CONTRASTIVE_CONJUNCTION: &str = "но";
pub(crate) const COMITATIVE_PREPOSITION: &str = "с";
/// "какой-то" is split into "какой", "-" and "то".
pub(crate) const INDEFINITE_HYPHEN: &str = "-";
pub(crate) const INDEFINITE_PARTICLE: &str = "то";
pub(crate) const ROLE_NOUN: &str = "роль";
pub(crate) const ROLE_VERB: &str = "играть";

pub(crate) const PERSON_ENTITY: &str = "persName";
pub(crate) const FLAT_NAME_DEP: &str = "flat:name";

pub(crate) const SIBLING_DEP: &str = "conj";
pub(crate) const CONJUNCTION_DEPS: &[&str] = &["cc", "punct"];

pub(crate) const NOUN_POS: &[Pos] = &[Pos::Noun, Pos::Propn];
pub(crate) const CLAUSE_ROOT_POS: &[Pos] = &[Pos::Verb, Pos::Aux];
pub(crate) const TERM_OPERATOR_POS: &[Pos] = &[Pos::Det, Pos::Adp];

pub(crate) fn is_noun(token: &Token) -> bool {
    NOUN_POS.contains(&token.pos())
}

pub(crate) fn has_noun_tag(token: &Token) -> bool {
    NOUN_POS.iter().any(|&pos| token.tag_is(pos))
}

pub(crate) fn is_clause_root(token: &Token) -> bool {
    CLAUSE_ROOT_POS.contains(&token.pos())
}

pub(crate) fn is_term_operator(token: &Token) -> bool {
    TERM_OPERATOR_POS.contains(&token.pos())
}

pub(crate) fn is_sibling_dep(token: &Token) -> bool {
    token.dep() == SIBLING_DEP
}

pub(crate) fn is_conjunction_dep(token: &Token) -> bool {
    CONJUNCTION_DEPS.contains(&token.dep())
}

/// "свой" as a determiner or "себя" as a pronoun.
pub(crate) fn is_reflexive_possessive(token: &Token) -> bool {
    (token.pos() == Pos::Det && token.tag_is(Pos::Det) && token.lemma() == REFLEXIVE_POSSESSIVE)
        || (token.pos() == Pos::Pron
            && token.tag_is(Pos::Pron)
            && token.lemma() == REFLEXIVE_PRONOUN)
}

/// First letter upper-cased, the rest lower-cased, the way names are listed.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
