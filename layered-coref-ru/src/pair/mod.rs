//! Scoring a referring token against a referred mention.
//!
//! The score is decided by an ordered chain of named rules. Each rule looks
//! at the pair and either decides it (`Reject`, or `Accept` which becomes 2,
//! or 1 when the pair was flagged uncertain) or passes. A pair nothing
//! objects to is accepted.

use std::iter;

use layered_coref::{Analysis, Compatibility, Doc, Mention, Pos, Token, Verdict};
use tracing::trace;

use crate::closed_class::{is_clause_root, is_reflexive_possessive, PERSON_ENTITY};
use crate::gender::GenderProfile;
use crate::RussianRules;

mod agreement;
mod distance;
mod vetoes;

pub(crate) trait PairRule: Sync {
    fn name(&self) -> &'static str;

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict>;
}

static PAIR_RULES: &[&dyn PairRule] = &[
    &agreement::ReflexiveBinding,
    &agreement::GenitivePossessor,
    &agreement::ComitativePlural,
    &agreement::FirstSecondPerson,
    &agreement::CollectiveCoordination,
    &agreement::GenderAgreement,
    &agreement::NumberMismatch,
    &vetoes::FemaleNameTaggedMasculine,
    &vetoes::ContrastiveModifier,
    &vetoes::MainClauseSubject,
    &vetoes::RelativePronounPlacement,
    &vetoes::BareSentenceRoot,
    &vetoes::InanimateBesideAnimate,
    &vetoes::NominalModifier,
    &vetoes::AnimateApposition,
    &vetoes::ObjectWithModifier,
    &vetoes::PlayRoleIdiom,
    &vetoes::InterrogativeDeterminer,
    &vetoes::AbbreviatedName,
    &vetoes::SingleLetter,
    &vetoes::PossessiveDeterminer,
    &vetoes::PersonMismatch,
    &vetoes::ReflexiveReferent,
    &vetoes::PersonalSubjectVerb,
    &vetoes::AnimateModifier,
    &vetoes::SingularAgainstPluralHead,
    &vetoes::HeadOfReferring,
    &distance::InterveningSentence,
];

/// Names of the pair rules in the order they are consulted.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    PAIR_RULES.iter().map(|rule| rule.name())
}

/// Everything the rules need to know about one pair, computed up front.
pub(crate) struct Pair<'a> {
    pub rules: &'a RussianRules,
    pub analysis: &'a Analysis<'a>,
    pub doc: &'a Doc,
    pub referred: &'a Mention,
    pub referred_root: &'a Token,
    pub referring: &'a Token,
    pub directly: bool,
    /// The referring token is the subject of a verb that wants a person, and
    /// nothing in the referred mention is known to be one.
    pub uncertain: bool,
    pub referring_is_reflexive: bool,
    pub referring_profile: GenderProfile,
    /// Union over the mention's tokens, plus the root's own profile when the
    /// root takes part in a larger coordination.
    pub referred_profile: GenderProfile,
    /// The whole coordination the referred root belongs to, plus any
    /// comitative siblings of the referring verb.
    pub all_involved: Vec<&'a Token>,
    /// Siblings of a plural referring verb: "Муж с женой... Они пришли".
    pub comitative_siblings: Vec<&'a Token>,
}

impl<'a> Pair<'a> {
    fn new(
        rules: &'a RussianRules,
        analysis: &'a Analysis<'a>,
        referred: &'a Mention,
        referring: &'a Token,
        directly: bool,
    ) -> Self {
        let doc = analysis.doc();
        let referred_root = &doc[referred.root_index()];
        let lexicon = rules.lexicon();

        let referring_governor = analysis.governing_sibling(referring).unwrap_or(referring);
        let has_personal_subject = (referring_governor.dep_starts_with("nsubj")
            && lexicon.has_personal_subject(doc.head(referring_governor).lemma()))
            || lexicon.has_personal_subject(referring.lemma());
        let uncertain = has_personal_subject
            && !referred.tokens(doc).any(|token| {
                token.pos() == Pos::Propn || token.ent_type() == Some(PERSON_ENTITY)
            });

        let mut all_involved: Vec<&Token> =
            if analysis.is_involved_in_non_or_conjunction(referred_root) {
                let governor = analysis
                    .governing_sibling(referred_root)
                    .unwrap_or(referred_root);
                iter::once(governor)
                    .chain(analysis.dependent_siblings(governor))
                    .collect()
            } else {
                vec![referred_root]
            };

        let comitative_siblings: Vec<&Token> =
            if is_clause_root(referring) && referring.has_morph("Number", "Plur") {
                analysis.dependent_siblings(referring).collect()
            } else {
                Vec::new()
            };
        all_involved.extend(comitative_siblings.iter().copied());

        let mut referred_profile = if all_involved.len() > 1 {
            rules.gender_profile(referred_root, directly)
        } else {
            GenderProfile::NONE
        };
        for token in referred.tokens(doc) {
            referred_profile = referred_profile.union(rules.gender_profile(token, directly));
        }

        Pair {
            rules,
            analysis,
            doc,
            referred,
            referred_root,
            referring,
            directly,
            uncertain,
            referring_is_reflexive: is_reflexive_possessive(referring),
            referring_profile: rules.gender_profile(referring, directly),
            referred_profile,
            all_involved,
            comitative_siblings,
        }
    }

    pub fn profile(&self, token: &Token) -> GenderProfile {
        self.rules.gender_profile(token, self.directly)
    }

    pub fn head(&self, token: &Token) -> &'a Token {
        self.doc.head(token)
    }

    pub fn children(&self, token: &Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.doc.children(token)
    }

    /// Number of tokens the referred mention covers, plus comitative siblings.
    pub fn included_count(&self) -> usize {
        self.referred.token_indexes().len() + self.comitative_siblings.len()
    }
}

impl RussianRules {
    pub(crate) fn score_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
        directly: bool,
    ) -> Compatibility {
        let pair = Pair::new(self, analysis, referred, referring, directly);
        for rule in PAIR_RULES {
            if let Some(verdict) = rule.check(&pair) {
                trace!(
                    rule = rule.name(),
                    referred = %referred,
                    referring = referring.i(),
                    directly,
                    ?verdict,
                    "pair decided"
                );
                return verdict.resolve(pair.uncertain);
            }
        }
        Compatibility::positive(pair.uncertain)
    }
}
