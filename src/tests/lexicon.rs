use std::io::Write;

use crate::{ConfigError, Doc, Lexicon};

const LEXICON: &str = r#"
or_lemmas = ["или", "либо"]
verbs_with_personal_subject = ["думать", "сказать"]
blacklisted_phrases = ["друг друга", "  в   общем "]
quote_pairs = [["«", "»"]]

[names]
female = ["Анна"]
male = ["Петр"]

[entity_nouns]
persName = ["человек", "женщина"]
"#;

const RECIPROCAL: &str = "
1  Они    они    PRON  _  _  2  nsubj  _  _
2  видят  видеть VERB  _  _  0  root   _  _
3  Друг   друг   NOUN  _  _  2  obj    _  _
4  друга  друг   NOUN  _  _  3  fixed  _  _
5  друг   друг   NOUN  _  _  2  obl    _  _
";

#[test]
fn word_lists() {
    let lexicon = Lexicon::from_toml_str(LEXICON).unwrap();
    assert!(lexicon.is_female_name("Анна"));
    assert!(!lexicon.is_female_name("анна"));
    assert!(lexicon.is_male_name("Петр"));
    assert!(lexicon.is_or_lemma("либо"));
    assert!(!lexicon.is_or_lemma("и"));
    assert!(lexicon.has_personal_subject("думать"));
    assert_eq!(lexicon.entity_nouns("persName"), ["человек", "женщина"]);
    assert!(lexicon.entity_nouns("orgName").is_empty());
    assert!(lexicon.is_quote_pair("«", "»"));
    assert!(!lexicon.is_quote_pair("»", "«"));
    assert_eq!(lexicon.quote_pairs().len(), 1);
}

#[test]
fn blacklisted_phrases_ignore_case() {
    let lexicon = Lexicon::from_toml_str(LEXICON).unwrap();
    let doc = Doc::from_conllu(RECIPROCAL).unwrap();
    let matched: Vec<usize> = doc
        .tokens()
        .iter()
        .filter(|token| lexicon.is_in_blacklisted_phrase(&doc, token))
        .map(|token| token.i())
        .collect();
    assert_eq!(matched, vec![2, 3]);
}

#[test]
fn empty_source_is_empty_lexicon() {
    let lexicon = Lexicon::from_toml_str("").unwrap();
    assert_eq!(lexicon, Lexicon::default());
}

#[test]
fn unknown_sections_are_rejected() {
    let error = Lexicon::from_toml_str("[names]\nneutral = [\"Саша\"]").unwrap_err();
    match error {
        ConfigError::Parse { source_name, .. } => assert_eq!(source_name, "lexicon"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LEXICON.as_bytes()).unwrap();
    let lexicon = Lexicon::load(file.path()).unwrap();
    assert_eq!(lexicon, Lexicon::from_toml_str(LEXICON).unwrap());

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        Lexicon::load(&missing),
        Err(ConfigError::Read { .. })
    ));
}
