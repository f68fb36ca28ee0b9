use crate::{
    Analysis, Compatibility, Coordination, Doc, DocDisplay, Mention, Reflexivity, RulesAnalyzer,
    Token,
};

/// Coordinates a token with every `conj` below it, nested conjuncts included.
struct ConjOnly;

fn conjuncts(doc: &Doc, token: &Token, into: &mut Vec<usize>) {
    for child in doc.children(token).filter(|child| child.dep() == "conj") {
        into.push(child.i());
        conjuncts(doc, child, into);
    }
}

impl RulesAnalyzer for ConjOnly {
    fn dependent_siblings(&self, analysis: &Analysis<'_>, token: &Token) -> Coordination {
        let doc = analysis.doc();
        let mut siblings = Vec::new();
        conjuncts(doc, token, &mut siblings);
        siblings.sort_unstable();
        let has_or_coordination = siblings
            .iter()
            .any(|&i| doc.children(&doc[i]).any(|child| child.lemma() == "или"));
        Coordination {
            siblings,
            has_or_coordination,
        }
    }

    fn is_independent_noun(&self, _analysis: &Analysis<'_>, token: &Token) -> bool {
        token.dep() == "nsubj" || token.dep() == "conj"
    }

    fn is_potential_anaphor(&self, _analysis: &Analysis<'_>, _token: &Token) -> bool {
        false
    }

    fn is_potentially_indefinite(&self, _analysis: &Analysis<'_>, token: &Token) -> bool {
        token.dep() == "conj"
    }

    fn is_potentially_definite(&self, _analysis: &Analysis<'_>, token: &Token) -> bool {
        token.dep() != "conj"
    }

    fn is_reflexive_anaphor(&self, _analysis: &Analysis<'_>, _token: &Token) -> Reflexivity {
        Reflexivity::NotReflexive
    }

    fn is_potential_reflexive_pair(
        &self,
        _analysis: &Analysis<'_>,
        _referred: &Mention,
        _referring: &Token,
    ) -> bool {
        false
    }

    fn is_potential_anaphoric_pair(
        &self,
        _analysis: &Analysis<'_>,
        _referred: &Mention,
        _referring: &Token,
        _directly: bool,
    ) -> Compatibility {
        Compatibility::Incompatible
    }
}

const ANIMALS: &str = "
1  Кошки   кошка   NOUN   _  _  6  nsubj  _  SpaceAfter=No
2  ,       ,       PUNCT  _  _  3  punct  _  _
3  собаки  собака  NOUN   _  _  1  conj   _  _
4  и       и       CCONJ  _  _  5  cc     _  _
5  птицы   птица   NOUN   _  _  3  conj   _  _
6  спят    спать   VERB   _  _  0  root   _  _
";

const ANIMALS_OR: &str = "
1  Кошки   кошка   NOUN   _  _  4  nsubj  _  _
2  или     или     CCONJ  _  _  3  cc     _  _
3  собаки  собака  NOUN   _  _  1  conj   _  _
4  спят    спать   VERB   _  _  0  root   _  _
";

const ANIMALS_WITH_RELATIVE: &str = "
1  Кошки     кошка    NOUN  _  _  3  nsubj  _  _
2  спящие    спать    VERB  _  _  1  acl    _  _
3  мурлычут  мурлыкать  VERB  _  _  0  root   _  _
";

#[test]
fn first_governor_wins() {
    let doc = Doc::from_conllu(ANIMALS).unwrap();
    let analysis = ConjOnly.initialize(&doc);

    assert_eq!(analysis.dependent_sibling_indexes(&doc[0]), &[2, 4]);
    assert_eq!(analysis.dependent_sibling_indexes(&doc[2]), &[4]);
    assert_eq!(analysis.governing_sibling(&doc[2]).map(Token::i), Some(0));
    assert_eq!(analysis.governing_sibling(&doc[4]).map(Token::i), Some(0));
    assert_eq!(analysis.governing_sibling(&doc[0]), None);
    assert_eq!(analysis.coordination_count(), 2);

    let names: Vec<&str> = analysis.dependent_siblings(&doc[0]).map(Token::text).collect();
    assert_eq!(names, vec!["собаки", "птицы"]);
}

#[test]
fn conjunction_involvement() {
    let doc = Doc::from_conllu(ANIMALS).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    assert!(analysis.is_involved_in_non_or_conjunction(&doc[0]));
    assert!(analysis.is_involved_in_non_or_conjunction(&doc[4]));
    assert!(!analysis.is_involved_in_non_or_conjunction(&doc[5]));

    let doc = Doc::from_conllu(ANIMALS_OR).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    assert!(analysis.has_or_coordination(&doc[0]));
    assert!(!analysis.has_or_coordination(&doc[2]));
    assert!(!analysis.is_involved_in_non_or_conjunction(&doc[0]));
    assert!(!analysis.is_involved_in_non_or_conjunction(&doc[2]));
}

#[test]
fn mentions() {
    let doc = Doc::from_conllu(ANIMALS).unwrap();
    let analysis = ConjOnly.initialize(&doc);

    let alone = Mention::new(&analysis, &doc[0], false);
    assert_eq!(alone, Mention::single(&doc[0]));
    assert_eq!(alone.token_indexes(), &[0]);

    let all = Mention::new(&analysis, &doc[0], true);
    assert_eq!(all.root_index(), 0);
    assert_eq!(all.token_indexes(), &[0, 2, 4]);
    assert!(all.contains(4));
    assert!(!all.contains(1));
    assert_eq!(all.to_string(), "[0, 2, 4]");
    let texts: Vec<&str> = all.tokens(&doc).map(Token::text).collect();
    assert_eq!(texts, vec!["Кошки", "собаки", "птицы"]);
}

#[test]
fn introducing_and_referring_back() {
    let doc = Doc::from_conllu(ANIMALS).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    assert!(ConjOnly.is_potentially_introducing_noun(&analysis, &doc[2]));
    assert!(!ConjOnly.is_potentially_referring_back_noun(&analysis, &doc[2]));
    assert!(!ConjOnly.is_potentially_introducing_noun(&analysis, &doc[0]));
    assert!(ConjOnly.is_potentially_referring_back_noun(&analysis, &doc[0]));
    assert!(!ConjOnly.is_potentially_introducing_noun(&analysis, &doc[5]));

    // A definite noun with a relative clause introduces instead.
    let doc = Doc::from_conllu(ANIMALS_WITH_RELATIVE).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    assert!(ConjOnly.is_potentially_introducing_noun(&analysis, &doc[0]));
    assert!(!ConjOnly.is_potentially_referring_back_noun(&analysis, &doc[0]));
}

#[test]
fn display_coordination() {
    let doc = Doc::from_conllu(ANIMALS).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    insta::assert_snapshot!(analysis.coordination_display(0).to_string(), @r###"
    Кошки  ,  собаки  и  птицы  спят
    ╰───╯[A] Siblings [собаки, птицы]
              ╰────╯Siblings [птицы]
              ╰────╯DependentSibling
                └─^governor─>[A]
                         ╰───╯DependentSibling
                           └─^governor─>[A]
    "###);
}

#[test]
fn display_or_and_unlabelled_targets() {
    let doc = Doc::from_conllu(ANIMALS_OR).unwrap();
    let analysis = ConjOnly.initialize(&doc);
    insta::assert_snapshot!(analysis.coordination_display(0).to_string(), @r###"
    Кошки  или  собаки  спят
    ╰───╯[A] Siblings [собаки] (or)
                ╰────╯DependentSibling
                  └─^governor─>[A]
    "###);

    let mut display = DocDisplay::new(&doc, 0).with(1, "cc");
    display.include_with_link(3, "Verb", "subject", None, 0);
    display.include(7, "outside the sentence");
    insta::assert_snapshot!(display.to_string(), @r###"
    Кошки  или  собаки  спят
           ╰─╯cc
                        ╰──╯Verb
                          └─subject─>[0]
    "###);
}
