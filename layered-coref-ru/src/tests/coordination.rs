use layered_coref::{Doc, RulesAnalyzer};

use super::fixtures::*;
use crate::{Quirks, RulesConfig, RussianRules};

fn siblings(rules: &RussianRules, doc: &Doc) -> Vec<(usize, Vec<usize>, Option<usize>, bool)> {
    let analysis = rules.initialize(doc);
    doc.tokens()
        .iter()
        .filter_map(|token| {
            let dependents = analysis.dependent_sibling_indexes(token).to_vec();
            let governor = analysis.governing_sibling(token).map(|t| t.i());
            let or = analysis.has_or_coordination(token);
            (!dependents.is_empty() || governor.is_some() || or)
                .then(|| (token.i(), dependents, governor, or))
        })
        .collect()
}

fn coordination_display(conllu: &str, sentence: usize, rules: &RussianRules) -> String {
    let doc = parse(conllu);
    let analysis = rules.initialize(&doc);
    analysis.coordination_display(sentence).to_string()
}

fn elided() -> RussianRules {
    RussianRules::new().with_config(RulesConfig {
        elided_subject_anaphors: true,
        quirks: Quirks::default(),
    })
}

#[test]
fn uncoordinated_subject() {
    let doc = parse(DIMA_CAME_HOME);
    assert!(siblings(&RussianRules::new(), &doc).is_empty());
}

#[test]
fn conjunction_with_and() {
    let doc = parse(DMITRY_AND_KRISTINA);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![(0, vec![2], None, false), (2, vec![], Some(0), false)]
    );
}

#[test]
fn disjunction_marks_governor_only() {
    let doc = parse(DMITRY_OR_KRISTINA);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![(0, vec![2], None, true), (2, vec![], Some(0), false)]
    );

    let analysis = RussianRules::new().initialize(&doc);
    assert!(!analysis.is_involved_in_non_or_conjunction(&doc[0]));
    assert!(!analysis.is_involved_in_non_or_conjunction(&doc[2]));
}

#[test]
fn comitative_sibling() {
    let doc = parse(DMITRY_WITH_KRISTINA);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![(0, vec![2], None, false), (2, vec![], Some(0), false)]
    );
    let analysis = RussianRules::new().initialize(&doc);
    assert!(analysis.is_involved_in_non_or_conjunction(&doc[2]));
}

#[test]
fn three_conjuncts_share_one_governor() {
    let doc = parse(THREE_NAMES_AND);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![
            (0, vec![2, 4], None, false),
            (2, vec![], Some(0), false),
            (4, vec![], Some(0), false),
        ]
    );
}

#[test]
fn comitative_on_subject_of_other_sentence_is_ignored() {
    let doc = parse(LEFT_WITH_ANNA);
    assert!(siblings(&RussianRules::new(), &doc).is_empty());
}

#[test]
fn comitative_list_keeps_first_governor() {
    let doc = parse(MEETING_WITH_THREE);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![
            (0, vec![2, 4, 6], None, false),
            (2, vec![4, 6], Some(0), false),
            (4, vec![], Some(0), false),
            (6, vec![], Some(0), false),
        ]
    );
}

#[test]
fn demonstrative_object_is_not_coordinated() {
    let doc = parse(DISCUSSED_THE_BOOK);
    assert!(siblings(&RussianRules::new(), &doc).is_empty());
}

#[test]
fn comitative_on_same_lemma() {
    let doc = parse(PATH_WITH_OUR_PATH);
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![(1, vec![6], None, false), (6, vec![], Some(1), false)]
    );
}

#[test]
fn comitative_object_and_agent() {
    let rules = RussianRules::new();

    let doc = parse(MAN_WITH_BRIEFCASE);
    let analysis = rules.initialize(&doc);
    assert_eq!(analysis.dependent_sibling_indexes(&doc[0]), &[2]);

    let doc = parse(STORY_BY_MY_FRIEND);
    let analysis = rules.initialize(&doc);
    assert_eq!(analysis.dependent_sibling_indexes(&doc[0]), &[4]);

    let doc = parse(NOT_STORIES_BUT_BOOKS);
    let analysis = rules.initialize(&doc);
    assert_eq!(analysis.dependent_sibling_indexes(&doc[1]), &[4]);
}

#[test]
fn elided_subject_verb_takes_comitative() {
    let doc = parse(WALKS_WITH_ANNA);
    assert!(siblings(&RussianRules::new(), &doc).is_empty());
    assert_eq!(
        siblings(&elided(), &doc),
        vec![(4, vec![6], None, false), (6, vec![], Some(4), false)]
    );
}

#[test]
fn coordinated_elided_subject_verbs_are_not_plural() {
    let doc = parse(GOES_AND_SINGS);
    assert_eq!(
        siblings(&elided(), &doc),
        vec![(0, vec![2], None, true), (2, vec![], Some(0), false)]
    );
    assert_eq!(
        siblings(&RussianRules::new(), &doc),
        vec![(0, vec![2], None, false), (2, vec![], Some(0), false)]
    );
    let doc = parse(PETR_GOES_AND_SINGS);
    assert_eq!(
        siblings(&elided(), &doc),
        vec![(1, vec![3], None, false), (3, vec![], Some(1), false)]
    );
}

#[test]
fn display_and() {
    insta::assert_snapshot!(coordination_display(DMITRY_AND_KRISTINA, 0, &RussianRules::new()), @r###"
    Дмитрий  и  Кристина  пришли  домой
    ╰─────╯[A] Siblings [Кристина]
                ╰──────╯DependentSibling
                  └─^governor─>[A]
    "###);
}

#[test]
fn display_or() {
    insta::assert_snapshot!(coordination_display(THREE_NAMES_OR, 0, &RussianRules::new()), @r###"
    Василий  ,  Петр  или  Сергей  провели  совещание
    ╰─────╯[A] Siblings [Петр, Сергей] (or)
                ╰──╯DependentSibling
                  └─^governor─>[A]
                           ╰────╯DependentSibling
                             └─^governor─>[A]
    "###);
}

#[test]
fn display_comitative() {
    insta::assert_snapshot!(coordination_display(DMITRY_WITH_KRISTINA, 0, &RussianRules::new()), @r###"
    Дмитрий  с  Кристиной  пришли  домой
    ╰─────╯[A] Siblings [Кристиной]
                ╰───────╯DependentSibling
                  └─^governor─>[A]
    "###);
}

#[test]
fn display_nested_comitative_list() {
    insta::assert_snapshot!(coordination_display(MEETING_WITH_THREE, 0, &RussianRules::new()), @r###"
    Встреча  с  Василием  ,  Петром  и  Сергеем  состоялась  вчера  .
    ╰─────╯[A] Siblings [Василием, Петром, Сергеем]
                ╰──────╯Siblings [Петром, Сергеем]
                ╰──────╯DependentSibling
                  └─^governor─>[A]
                             ╰────╯DependentSibling
                               └─^governor─>[A]
                                        ╰─────╯DependentSibling
                                          └─^governor─>[A]
    "###);
}

#[test]
fn display_second_sentence() {
    insta::assert_snapshot!(coordination_display(WALKS_WITH_ANNA, 1, &elided()), @r###"
    Теперь  гуляют  с  Анной  .
            ╰────╯[A] Siblings [Анной]
                       ╰───╯DependentSibling
                         └─^governor─>[A]
    "###);
}
