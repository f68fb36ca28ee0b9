//! Binding, person, coordination and gender/number agreement.

use layered_coref::{Pos, Reflexivity, Verdict};

use super::{Pair, PairRule};
use crate::closed_class::{
    is_clause_root, is_reflexive_possessive, is_sibling_dep, COMITATIVE_PREPOSITION,
    POSSESSIVE_INTERROGATIVE,
};
use crate::reflexive::reflexivity;

/// A pronoun that must be reflexive needs a clause-mate antecedent, and one
/// that cannot be reflexive must not have one.
pub(crate) struct ReflexiveBinding;

impl PairRule for ReflexiveBinding {
    fn name(&self) -> &'static str {
        "reflexive_binding"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        if !pair.directly {
            return None;
        }
        let reflexive_pair = pair
            .rules
            .reflexive_pair(pair.analysis, pair.referred, pair.referring);
        match reflexivity(pair.referring) {
            Reflexivity::NotReflexive if reflexive_pair => Some(Verdict::Reject),
            Reflexivity::Reflexive if !reflexive_pair => Some(Verdict::Reject),
            _ => None,
        }
    }
}

/// A possessive cannot point at the head of its own genitive phrase.
pub(crate) struct GenitivePossessor;

impl PairRule for GenitivePossessor {
    fn name(&self) -> &'static str {
        "genitive_possessor"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        if !pair.directly {
            return None;
        }
        let mut working = pair.referring;
        while !working.is_root() {
            let genitive = working.has_morph("Case", "Gen");
            if pair.referred.contains(working.head_index()) && !is_sibling_dep(working) && genitive {
                return Some(Verdict::Reject);
            }
            if !is_sibling_dep(working)
                && (working.dep() != "nmod" || !genitive)
                && !is_reflexive_possessive(working)
            {
                break;
            }
            working = pair.head(working);
        }
        None
    }
}

/// "Муж с женой пришли": a plural verb already linked through a chain may
/// pick up its comitative siblings.
pub(crate) struct ComitativePlural;

impl PairRule for ComitativePlural {
    fn name(&self) -> &'static str {
        "comitative_plural"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        (!pair.directly && !pair.comitative_siblings.is_empty()).then(|| Verdict::Accept)
    }
}

/// "Я и ты... Мы...": a first or second person referent takes first person
/// anaphors and reflexives; second person must match on both sides.
pub(crate) struct FirstSecondPerson;

impl PairRule for FirstSecondPerson {
    fn name(&self) -> &'static str {
        "first_second_person"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if !root.has_morph("Person", "First") && !root.has_morph("Person", "Second") {
            return None;
        }
        if pair.referring.has_morph("Person", "First") || pair.referring_is_reflexive {
            return Some(Verdict::Accept);
        }
        if root.has_morph("Person", "Second") != pair.referring.has_morph("Person", "Second") {
            return Some(Verdict::Reject);
        }
        None
    }
}

/// A mention covering its whole coordination is picked up by a plural
/// anaphor regardless of the members' genders.
pub(crate) struct CollectiveCoordination;

impl PairRule for CollectiveCoordination {
    fn name(&self) -> &'static str {
        "collective_coordination"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        if pair.all_involved.len() <= 1 {
            return None;
        }
        if pair.included_count() == pair.all_involved.len()
            && !pair.referring.has_morph("Gender", "Fem")
        {
            return Some(Verdict::Accept);
        }

        let referring = pair.referring;
        let plural_third_person = referring.has_morph("Number", "Plur")
            && !(referring.has_morph("Person", "First") || referring.has_morph("Person", "Second"));
        let has_referred_comitative_sibling = is_clause_root(pair.referred_root)
            && plural_third_person
            && pair
                .analysis
                .dependent_siblings(pair.referred_root)
                .any(|sibling| sibling.i() != referring.i());
        (!pair.directly && has_referred_comitative_sibling).then(|| Verdict::Accept)
    }
}

/// The referring token must share at least one gender with the referent.
pub(crate) struct GenderAgreement;

impl PairRule for GenderAgreement {
    fn name(&self) -> &'static str {
        "gender_agreement"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        if pair.referring.lemma() == POSSESSIVE_INTERROGATIVE {
            return None;
        }
        (!pair.referred_profile.overlaps(pair.referring_profile) && !pair.referring_is_reflexive)
            .then(|| Verdict::Reject)
    }
}

/// A plural anaphor cannot take a single uncoordinated referent, and a
/// singular one cannot take a plural referent.
pub(crate) struct NumberMismatch;

impl PairRule for NumberMismatch {
    fn name(&self) -> &'static str {
        "number_mismatch"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        if pair.referred_profile.count() == pair.referring_profile.count() || is_sibling_dep(root) {
            return None;
        }
        let reflexive = pair.referring_is_reflexive;

        if pair.referring_profile.count() > 2 || reflexive {
            let head = pair.head(root);
            let comitative = pair.rules.config().quirks.comitative_number_exemption
                && pair
                    .children(root)
                    .any(|child| child.dep() == "case" && child.lemma() == COMITATIVE_PREPOSITION);
            if !root.has_morph("Case", "Ins")
                && (root.has_morph("Animacy", "Anim") || !head.has_morph("Animacy", "Anim"))
                && !comitative
                && !reflexive
            {
                return Some(Verdict::Reject);
            }
        }

        let coordinated = pair.children(root).any(is_sibling_dep);
        if !coordinated && !reflexive {
            if root.pos() != Pos::Pron {
                return Some(Verdict::Reject);
            }
            let head = pair.head(root);
            let has_object = pair.children(head).any(|child| child.dep() == "obj");
            let has_oblique = pair.children(head).any(|child| child.dep() == "obl");
            if !has_object || !has_oblique {
                return Some(Verdict::Reject);
            }
        }
        None
    }
}
