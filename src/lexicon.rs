//! Word lists a language's rules consult.
//!
//! A lexicon is plain TOML data so it can be corrected without touching the
//! rules:
//!
//! ```toml
//! or_lemmas = ["или", "либо"]
//! verbs_with_personal_subject = ["думать"]
//! blacklisted_phrases = ["друг друга"]
//! quote_pairs = [["«", "»"]]
//!
//! [names]
//! female = ["Анна"]
//! male = ["Петр"]
//!
//! [entity_nouns]
//! persName = ["человек"]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::doc::{Doc, Token};
use crate::error::{ConfigError, ConfigResult};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    names: NamesSection,
    #[serde(default)]
    verbs_with_personal_subject: Vec<String>,
    #[serde(default)]
    blacklisted_phrases: Vec<String>,
    #[serde(default)]
    or_lemmas: Vec<String>,
    #[serde(default)]
    entity_nouns: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    quote_pairs: Vec<(String, String)>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamesSection {
    #[serde(default)]
    female: Vec<String>,
    #[serde(default)]
    male: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    female_names: HashSet<String>,
    male_names: HashSet<String>,
    verbs_with_personal_subject: HashSet<String>,
    /// Each phrase split into lower-cased words.
    blacklisted_phrases: Vec<Vec<String>>,
    or_lemmas: HashSet<String>,
    entity_nouns: BTreeMap<String, Vec<String>>,
    quote_pairs: Vec<(String, String)>,
}

impl Lexicon {
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Self::parse("lexicon", source)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&path.display().to_string(), &source)
    }

    fn parse(source_name: &str, source: &str) -> ConfigResult<Self> {
        let file: LexiconFile = toml::from_str(source).map_err(|e| ConfigError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let lexicon = Lexicon {
            female_names: file.names.female.into_iter().collect(),
            male_names: file.names.male.into_iter().collect(),
            verbs_with_personal_subject: file.verbs_with_personal_subject.into_iter().collect(),
            blacklisted_phrases: file
                .blacklisted_phrases
                .iter()
                .map(|phrase| phrase.split_whitespace().map(str::to_lowercase).collect())
                .filter(|words: &Vec<String>| !words.is_empty())
                .collect(),
            or_lemmas: file.or_lemmas.into_iter().collect(),
            entity_nouns: file.entity_nouns,
            quote_pairs: file.quote_pairs,
        };
        debug!(
            source = source_name,
            female_names = lexicon.female_names.len(),
            male_names = lexicon.male_names.len(),
            verbs_with_personal_subject = lexicon.verbs_with_personal_subject.len(),
            blacklisted_phrases = lexicon.blacklisted_phrases.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Names are stored capitalized, the way they are written.
    pub fn is_female_name(&self, name: &str) -> bool {
        self.female_names.contains(name)
    }

    pub fn is_male_name(&self, name: &str) -> bool {
        self.male_names.contains(name)
    }

    pub fn has_personal_subject(&self, verb_lemma: &str) -> bool {
        self.verbs_with_personal_subject.contains(verb_lemma)
    }

    pub fn is_or_lemma(&self, lemma: &str) -> bool {
        self.or_lemmas.contains(lemma)
    }

    /// Generic nouns that may paraphrase an entity of the given type.
    pub fn entity_nouns(&self, entity_type: &str) -> &[String] {
        self.entity_nouns
            .get(entity_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn quote_pairs(&self) -> &[(String, String)] {
        &self.quote_pairs
    }

    pub fn is_quote_pair(&self, opening: &str, closing: &str) -> bool {
        self.quote_pairs
            .iter()
            .any(|(open, close)| open == opening && close == closing)
    }

    /// Whether `token` sits anywhere inside one of the blacklisted phrases.
    /// Matching ignores case.
    pub fn is_in_blacklisted_phrase(&self, doc: &Doc, token: &Token) -> bool {
        let word = token.text().to_lowercase();
        self.blacklisted_phrases.iter().any(|phrase| {
            phrase
                .iter()
                .enumerate()
                .filter(|(_, phrase_word)| **phrase_word == word)
                .any(|(position, _)| phrase_matches_at(doc, phrase, token.i(), position))
        })
    }
}

fn phrase_matches_at(doc: &Doc, phrase: &[String], token: usize, position: usize) -> bool {
    let start = match token.checked_sub(position) {
        Some(start) => start,
        None => return false,
    };
    let end = start + phrase.len();
    end <= doc.len()
        && doc.tokens()[start..end]
            .iter()
            .zip(phrase)
            .all(|(t, phrase_word)| t.text().to_lowercase() == *phrase_word)
}
