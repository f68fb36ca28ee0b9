#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Rule-based coreference over dependency-parsed documents.
//!
//! This crate holds everything that does not depend on a particular
//! language:
//!
//! - the annotated document ([`Doc`], [`Token`], [`Morph`]) with readers for
//!   CoNLL-U and JSON,
//! - the coordination side table ([`Analysis`]) derived once per document,
//! - [`Mention`], the scores rules return ([`Compatibility`], [`Reflexivity`]),
//! - the [`RulesAnalyzer`] trait a language implements,
//! - [`Lexicon`], the word lists a language loads from TOML.
//!
//! Language crates such as `layered-coref-ru` implement [`RulesAnalyzer`].
//!
//! ```ignore
//! use layered_coref::{Doc, Mention, RulesAnalyzer};
//! use layered_coref_ru::RussianRules;
//!
//! let doc = Doc::from_conllu(CONLLU)?;
//! let rules = RussianRules::new();
//! let analysis = rules.initialize(&doc);
//! let referred = Mention::new(&analysis, &doc[2], false);
//! let score = rules.is_potential_anaphoric_pair(&analysis, &referred, &doc[4], true);
//! ```

mod analysis;
mod compatibility;
mod doc;
mod error;
mod lexicon;
mod mention;
mod rules;

pub use analysis::{Analysis, Coordination};
pub use compatibility::{Compatibility, Reflexivity, Verdict};
pub use doc::{Ancestors, Doc, DocDisplay, DocSpec, Morph, Pos, Token, TokenSpec, ROOT_DEP};
pub use error::{AnnotationError, AnnotationResult, ConfigError, ConfigResult};
pub use lexicon::Lexicon;
pub use mention::Mention;
pub use rules::RulesAnalyzer;

#[cfg(test)]
mod tests {
    mod analysis;
    mod doc;
    mod lexicon;
}
