//! Structural configurations in which a referent is not picked up.

use layered_coref::{Pos, Verdict};
use unicode_segmentation::UnicodeSegmentation;

use super::{Pair, PairRule};
use crate::closed_class::{
    capitalize, has_noun_tag, is_reflexive_possessive, is_sibling_dep, CONTRASTIVE_CONJUNCTION,
    FIRST_PLURAL_POSSESSIVE, FIRST_PLURAL_PRONOUN, INTERROGATIVE_DETERMINER, RELATIVE_STEM,
    ROLE_NOUN, ROLE_VERB, SECOND_PLURAL_POSSESSIVE, SECOND_PLURAL_PRONOUN, UNIVERSAL_DETERMINER,
};

fn reject_if(condition: bool) -> Option<Verdict> {
    condition.then(|| Verdict::Reject)
}

/// The parser tags some female given names as masculine proper nouns. In
/// "видел Петра и Анну" a masculine singular pronoun must not take the
/// object when its conjunct is such a name.
pub(crate) struct FemaleNameTaggedMasculine;

impl PairRule for FemaleNameTaggedMasculine {
    fn name(&self) -> &'static str {
        "female_name_tagged_masculine"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !pair.rules.config().quirks.masculine_female_name_guard || root.dep() != "obj" {
            return None;
        }
        let root_profile = pair.profile(root);
        let same_gender_conjunct = pair
            .children(root)
            .any(|child| is_sibling_dep(child) && pair.profile(child) == root_profile);
        if !same_gender_conjunct || !pair.referring.has_morph("Number", "Sing") {
            return None;
        }
        let lexicon = pair.rules.lexicon();
        let mistagged_name = pair.children(root).any(|child| {
            lexicon.is_female_name(&capitalize(child.lemma())) && child.has_morph("Gender", "Masc")
        });
        reject_if(mistagged_name && pair.referring.has_morph("Gender", "Masc"))
    }
}

/// Referents modified by a contrastive "но" or by an adverb inside a
/// coordination.
pub(crate) struct ContrastiveModifier;

impl PairRule for ContrastiveModifier {
    fn name(&self) -> &'static str {
        "contrastive_modifier"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !pair.children(root).any(|child| child.dep() == "advmod") {
            return None;
        }
        reject_if(
            pair.children(root)
                .any(|child| child.lemma() == CONTRASTIVE_CONJUNCTION || is_sibling_dep(child)),
        )
    }
}

/// The subject of a main clause, when "который" more plausibly attaches to a
/// matching object, or when the subject has a nominal modifier after it.
pub(crate) struct MainClauseSubject;

impl PairRule for MainClauseSubject {
    fn name(&self) -> &'static str {
        "main_clause_subject"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        let referring = pair.referring;
        if root.dep() != "nsubj" || !pair.head(root).is_root() {
            return None;
        }

        if referring.lemma().starts_with(RELATIVE_STEM) && !referring.has_morph("Case", "Gen") {
            let root_profile = pair.profile(root);
            let closer_candidate = pair.children(pair.head(root)).any(|child| {
                matches!(child.dep(), "obj" | "obl")
                    && pair.profile(child) == root_profile
                    && child.i() < referring.i()
            });
            if closer_candidate {
                return Some(Verdict::Reject);
            }
        }

        let trailing_modifier = pair
            .children(root)
            .any(|child| child.dep() == "nmod" && child.i() > root.i());
        reject_if(trailing_modifier && !pair.referring_is_reflexive)
    }
}

/// "который" in the locative when the referent has a locative modifier, and
/// "который" before its referent.
pub(crate) struct RelativePronounPlacement;

impl PairRule for RelativePronounPlacement {
    fn name(&self) -> &'static str {
        "relative_pronoun_placement"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        let referring = pair.referring;
        if !referring.lemma().starts_with(RELATIVE_STEM) {
            return None;
        }
        if referring.has_morph("Case", "Loc")
            && pair
                .children(root)
                .any(|child| child.dep() == "nmod" && child.has_morph("Case", "Loc"))
        {
            return Some(Verdict::Reject);
        }
        reject_if(root.i() > referring.i())
    }
}

/// A referent heading its sentence: one with its own subject, one with
/// nothing but punctuation under it, or a prepositional fragment with a
/// trailing modifier.
pub(crate) struct BareSentenceRoot;

impl PairRule for BareSentenceRoot {
    fn name(&self) -> &'static str {
        "bare_sentence_root"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !root.is_root() {
            return None;
        }
        if pair.children(root).any(|child| child.dep() == "nsubj") {
            return Some(Verdict::Reject);
        }
        if pair.children(root).all(|child| child.dep() == "punct") {
            return Some(Verdict::Reject);
        }
        let has_case = pair.children(root).any(|child| child.dep() == "case");
        let trailing_modifier = pair
            .children(root)
            .any(|child| child.dep() == "nmod" && child.i() > root.i());
        reject_if(has_case && trailing_modifier)
    }
}

/// An inanimate referent next to an animate dependent of the same head: a
/// third person anaphor prefers the animate one.
pub(crate) struct InanimateBesideAnimate;

impl PairRule for InanimateBesideAnimate {
    fn name(&self) -> &'static str {
        "inanimate_beside_animate"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !root.has_morph("Animacy", "Inan") || !pair.referring.has_morph("Person", "Third") {
            return None;
        }
        let head = pair.head(root);
        let animate_neighbour = pair.children(head).any(|child| {
            child.has_morph("Animacy", "Anim") && child.i() != pair.referring.i()
        });
        reject_if(animate_neighbour && !pair.rules.lexicon().has_personal_subject(head.lemma()))
    }
}

/// Nominal modifiers of a noun ("здание КГБ") rarely get picked up.
pub(crate) struct NominalModifier;

impl PairRule for NominalModifier {
    fn name(&self) -> &'static str {
        "nominal_modifier"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        let head = pair.head(root);
        if head.pos() != Pos::Noun || root.dep() != "nmod" {
            return None;
        }
        if root.has_morph("Animacy", "Anim") && head.has_morph("Animacy", "Inan") {
            return None;
        }
        if root.pos() == Pos::Propn {
            return Some(Verdict::Reject);
        }
        if pair.children(root).any(|child| child.tag_is(Pos::Adp)) {
            return None;
        }
        if !root.has_morph("Case", "Nom") {
            return Some(Verdict::Reject);
        }
        reject_if(root.has_morph("Animacy", "Anim") && root.morph() == head.morph())
    }
}

/// An animate apposition agreeing fully with its head noun.
pub(crate) struct AnimateApposition;

impl PairRule for AnimateApposition {
    fn name(&self) -> &'static str {
        "animate_apposition"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        let head = pair.head(root);
        reject_if(
            head.pos() == Pos::Noun
                && root.dep() == "appos"
                && root.has_morph("Animacy", "Anim")
                && root.morph() == head.morph(),
        )
    }
}

/// An object pronoun skips a noun that has a (animate) nominal modifier.
pub(crate) struct ObjectWithModifier;

impl PairRule for ObjectWithModifier {
    fn name(&self) -> &'static str {
        "object_with_modifier"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if root.pos() != Pos::Noun || pair.referring.dep() != "obj" || pair.referring_is_reflexive
        {
            return None;
        }
        let animate_root = root.has_morph("Animacy", "Anim");
        reject_if(pair.children(root).any(|child| {
            child.dep() == "nmod" && (animate_root || child.has_morph("Animacy", "Anim"))
        }))
    }
}

/// "играть роль" is an idiom, not a referent.
pub(crate) struct PlayRoleIdiom;

impl PairRule for PlayRoleIdiom {
    fn name(&self) -> &'static str {
        "play_role_idiom"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        reject_if(root.lemma() == ROLE_NOUN && pair.head(root).lemma() == ROLE_VERB)
    }
}

pub(crate) struct InterrogativeDeterminer;

impl PairRule for InterrogativeDeterminer {
    fn name(&self) -> &'static str {
        "interrogative_determiner"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        reject_if(pair.referring.lemma().starts_with(INTERROGATIVE_DETERMINER))
    }
}

/// Initials such as "А." are never referents.
pub(crate) struct AbbreviatedName;

impl PairRule for AbbreviatedName {
    fn name(&self) -> &'static str {
        "abbreviated_name"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        reject_if(
            root.lemma().ends_with('.')
                && root.pos() == Pos::Propn
                && root.has_morph("Animacy", "Anim"),
        )
    }
}

pub(crate) struct SingleLetter;

impl PairRule for SingleLetter {
    fn name(&self) -> &'static str {
        "single_letter"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        reject_if(root.lemma().graphemes(true).count() == 1 && root.pos() != Pos::Pron)
    }
}

/// Determiner anaphors: "наш"/"ваш" need a matching first/second person
/// plural referent, a bare nominative "весь" is not anaphoric, and a
/// possessive inside a noun phrase must be nominative or reflexive.
pub(crate) struct PossessiveDeterminer;

impl PairRule for PossessiveDeterminer {
    fn name(&self) -> &'static str {
        "possessive_determiner"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let referring = pair.referring;
        if referring.pos() != Pos::Det {
            return None;
        }
        let referred_lemma = pair.referred_root.lemma();
        let lemma = referring.lemma();

        if lemma.starts_with(FIRST_PLURAL_POSSESSIVE)
            && !(referred_lemma.starts_with(FIRST_PLURAL_POSSESSIVE)
                || referred_lemma.starts_with(FIRST_PLURAL_PRONOUN))
        {
            return Some(Verdict::Reject);
        }
        if lemma.starts_with(SECOND_PLURAL_POSSESSIVE)
            && !(referred_lemma.starts_with(SECOND_PLURAL_POSSESSIVE)
                || referred_lemma.starts_with(SECOND_PLURAL_PRONOUN))
        {
            return Some(Verdict::Reject);
        }
        if lemma.starts_with(UNIVERSAL_DETERMINER)
            && referring.has_morph("Case", "Nom")
            && pair.children(referring).all(|child| child.dep() == "cc")
            && (referring.is_root() || is_sibling_dep(referring))
        {
            return Some(Verdict::Reject);
        }

        let head = pair.head(referring);
        if head.pos() == Pos::Noun {
            if !pair.referring_is_reflexive && !referring.has_morph("Case", "Nom") {
                return Some(Verdict::Reject);
            }
            if is_sibling_dep(head) {
                return Some(Verdict::Reject);
            }
        }
        None
    }
}

/// Outside reflexives, first and second person must match exactly.
pub(crate) struct PersonMismatch;

impl PairRule for PersonMismatch {
    fn name(&self) -> &'static str {
        "person_mismatch"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        if pair.referring_is_reflexive {
            return None;
        }
        let root = pair.referred_root;
        let referring = pair.referring;
        reject_if(["First", "Second"].iter().any(|person| {
            referring.has_morph("Person", person) != root.has_morph("Person", person)
        }))
    }
}

/// A reflexive as the referent: inside an accusative object, or a locative
/// reflexive whose head agrees with the anaphor.
pub(crate) struct ReflexiveReferent;

impl PairRule for ReflexiveReferent {
    fn name(&self) -> &'static str {
        "reflexive_referent"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !is_reflexive_possessive(root) {
            return None;
        }
        let head = pair.head(root);
        if head.pos() == Pos::Noun && head.dep() == "obj" && head.has_morph("Case", "Acc") {
            return Some(Verdict::Reject);
        }
        reject_if(root.has_morph("Case", "Loc") && pair.profile(head) == pair.referring_profile)
    }
}

/// The nominative subject of a verb wanting a personal subject, when a noun
/// sits under that verb.
pub(crate) struct PersonalSubjectVerb;

impl PairRule for PersonalSubjectVerb {
    fn name(&self) -> &'static str {
        "personal_subject_verb"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !root.has_morph("Case", "Nom") {
            return None;
        }
        let head = pair.head(root);
        reject_if(
            pair.rules.lexicon().has_personal_subject(head.lemma())
                && pair.children(head).any(has_noun_tag),
        )
    }
}

/// An animate referent with an animate adjectival modifier.
pub(crate) struct AnimateModifier;

impl PairRule for AnimateModifier {
    fn name(&self) -> &'static str {
        "animate_modifier"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        reject_if(
            root.has_morph("Animacy", "Anim")
                && pair
                    .children(root)
                    .any(|child| child.dep() == "amod" && child.has_morph("Animacy", "Anim")),
        )
    }
}

/// A coordinated referent against a singular anaphor whose head is plural.
pub(crate) struct SingularAgainstPluralHead;

impl PairRule for SingularAgainstPluralHead {
    fn name(&self) -> &'static str {
        "singular_against_plural_head"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let referring = pair.referring;
        reject_if(
            pair.children(pair.referred_root).any(is_sibling_dep)
                && referring.has_morph("Number", "Sing")
                && pair.head(referring).has_morph("Number", "Plur"),
        )
    }
}

/// An anaphor never refers to its own head.
pub(crate) struct HeadOfReferring;

impl PairRule for HeadOfReferring {
    fn name(&self) -> &'static str {
        "head_of_referring"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        reject_if(pair.referring.head_index() == pair.referred_root.i())
    }
}
