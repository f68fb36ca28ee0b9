#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Russian coreference rules for layered-coref.
//!
//! [`RussianRules`] answers the questions of
//! [`RulesAnalyzer`](layered_coref::RulesAnalyzer) for documents parsed with
//! Universal Dependencies labels by a Russian pipeline:
//!
//! - which tokens are coordinated with which ("Дмитрий и Кристина",
//!   "Дмитрий с Кристиной"),
//! - which tokens can refer back (pronouns, "свой", "себя"),
//! - which nouns read as definite or indefinite,
//! - how plausible a pronoun–antecedent pair is (0, 1 or 2),
//! - whether a pair has to be bound within one clause.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_coref::{Doc, Mention, RulesAnalyzer};
//! use layered_coref_ru::RussianRules;
//!
//! let doc = Doc::from_conllu(CONLLU)?;
//! let rules = RussianRules::new();
//! let analysis = rules.initialize(&doc);
//! let man = Mention::new(&analysis, &doc[2], false);
//! assert!(rules.is_potential_anaphoric_pair(&analysis, &man, &doc[4], true).is_possible());
//! ```

use std::borrow::Cow;

use layered_coref::{
    Analysis, Compatibility, Coordination, Lexicon, Mention, Reflexivity, RulesAnalyzer, Token,
};

mod anaphor;
mod closed_class;
mod config;
mod coordination;
mod definiteness;
mod gender;
mod lexicon;
mod pair;
mod reflexive;

pub use config::{Quirks, RulesConfig};
pub use gender::GenderProfile;
pub use lexicon::default_lexicon;
pub use pair::rule_names;

#[derive(Debug, Clone)]
pub struct RussianRules {
    lexicon: Cow<'static, Lexicon>,
    config: RulesConfig,
}

impl RussianRules {
    /// Rules over the bundled lexicon with the default configuration.
    pub fn new() -> Self {
        RussianRules {
            lexicon: Cow::Borrowed(default_lexicon()),
            config: RulesConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Cow::Owned(lexicon);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl Default for RussianRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesAnalyzer for RussianRules {
    fn dependent_siblings(&self, analysis: &Analysis<'_>, token: &Token) -> Coordination {
        self.coordination(analysis, token)
    }

    fn is_independent_noun(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        self.independent_noun(analysis, token)
    }

    fn is_potential_anaphor(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        self.anaphor(analysis, token)
    }

    fn is_potentially_indefinite(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        definiteness::is_potentially_indefinite(analysis.doc(), token)
    }

    fn is_potentially_definite(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        definiteness::is_potentially_definite(analysis.doc(), token)
    }

    fn is_reflexive_anaphor(&self, _analysis: &Analysis<'_>, token: &Token) -> Reflexivity {
        reflexive::reflexivity(token)
    }

    fn is_potential_reflexive_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
    ) -> bool {
        self.reflexive_pair(analysis, referred, referring)
    }

    fn is_potential_anaphoric_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
        directly: bool,
    ) -> Compatibility {
        self.score_pair(analysis, referred, referring, directly)
    }
}
