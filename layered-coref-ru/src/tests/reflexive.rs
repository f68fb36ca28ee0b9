use layered_coref::{Mention, Reflexivity, RulesAnalyzer};

use super::fixtures::*;
use crate::RussianRules;

fn reflexive(conllu: &str, referred: usize, referring: usize) -> (bool, Reflexivity) {
    let rules = RussianRules::new();
    let doc = parse(conllu);
    let analysis = rules.initialize(&doc);
    let mention = Mention::new(&analysis, &doc[referred], false);
    (
        rules.is_potential_reflexive_pair(&analysis, &mention, &doc[referring]),
        rules.is_reflexive_anaphor(&analysis, &doc[referring]),
    )
}

#[test]
fn reflexive_pronoun_in_clause() {
    assert_eq!(reflexive(CAT_SAW_ITSELF, 0, 2), (true, Reflexivity::Reflexive));
    assert_eq!(reflexive(I_SAW_MYSELF, 0, 2), (true, Reflexivity::Reflexive));
    assert_eq!(reflexive(THEY_SAW_THEMSELVES, 0, 2), (true, Reflexivity::Reflexive));
}

#[test]
fn third_person_pronoun_is_not_reflexive() {
    assert_eq!(reflexive(CAT_SAW_HER, 0, 2), (true, Reflexivity::NotReflexive));
}

#[test]
fn reflexive_possessive() {
    assert_eq!(reflexive(LOOK_AT_HER_CAR, 0, 4), (true, Reflexivity::Reflexive));
}

#[test]
fn participle_clause_binds_to_modified_noun() {
    assert_eq!(reflexive(DOG_BITING_ITSELF, 0, 3), (true, Reflexivity::Reflexive));
}

#[test]
fn first_person_pronoun_is_ambiguous() {
    assert_eq!(reflexive(WE_ARE_PLEASED, 0, 2), (true, Reflexivity::Ambiguous));
}

#[test]
fn subordinate_clause_boundary() {
    assert_eq!(reflexive(SAID_SHE_SAW_HIM, 0, 6), (false, Reflexivity::NotReflexive));
    assert_eq!(reflexive(SAID_SHE_SAW_HIM, 4, 6), (true, Reflexivity::NotReflexive));
}

#[test]
fn coordinated_subject() {
    assert_eq!(
        reflexive(CAT_AND_DOG_CHASED_THEMSELVES, 2, 4),
        (true, Reflexivity::Reflexive)
    );
}

#[test]
fn relative_clause_subject() {
    assert_eq!(
        reflexive(COMPANY_FRIGHTENED_EVERYONE, 1, 4),
        (true, Reflexivity::Reflexive)
    );
    assert_eq!(
        reflexive(READ_BOOK_WHICH_CAME_OUT, 0, 4),
        (false, Reflexivity::NotReflexive)
    );
}

#[test]
fn relative_pronoun_in_instrumental() {
    assert_eq!(reflexive(HUSBANDS_FRIEND, 3, 6), (false, Reflexivity::Ambiguous));
}
