use tracing::debug;

use crate::analysis::{Analysis, Coordination};
use crate::compatibility::{Compatibility, Reflexivity};
use crate::doc::{Doc, Token};
use crate::mention::Mention;

/// The decisions a chain builder asks of a language.
///
/// Implementors answer each question from the dependency tree and the
/// coordination side table. Provided methods combine those answers the same
/// way for every language.
pub trait RulesAnalyzer {
    /// Tokens coordinated under `token`, plus whether any of them was joined
    /// disjunctively.
    fn dependent_siblings(&self, analysis: &Analysis<'_>, token: &Token) -> Coordination;

    /// A noun that can head a mention on its own.
    fn is_independent_noun(&self, analysis: &Analysis<'_>, token: &Token) -> bool;

    fn is_potential_anaphor(&self, analysis: &Analysis<'_>, token: &Token) -> bool;

    fn is_potentially_indefinite(&self, analysis: &Analysis<'_>, token: &Token) -> bool;

    fn is_potentially_definite(&self, analysis: &Analysis<'_>, token: &Token) -> bool;

    fn is_reflexive_anaphor(&self, analysis: &Analysis<'_>, token: &Token) -> Reflexivity;

    /// Whether `referred` sits where `referring` would have to be bound reflexively.
    fn is_potential_reflexive_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
    ) -> bool;

    /// `directly` is false when the pair is only being checked through a
    /// chain that already links them.
    fn is_potential_anaphoric_pair(
        &self,
        analysis: &Analysis<'_>,
        referred: &Mention,
        referring: &Token,
        directly: bool,
    ) -> Compatibility;

    /// Computes the coordination side table for a document, token by token in
    /// document order.
    fn initialize<'d>(&self, doc: &'d Doc) -> Analysis<'d> {
        let mut analysis = Analysis::new(doc);
        for token in doc.tokens() {
            let coordination = self.dependent_siblings(&analysis, token);
            analysis.record(token.i(), coordination);
        }
        debug!(
            tokens = doc.len(),
            coordinations = analysis.coordination_count(),
            "coordination analysis complete"
        );
        analysis
    }

    /// An independent noun that can bring a new referent into the discourse.
    fn is_potentially_introducing_noun(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        self.is_independent_noun(analysis, token)
            && (self.is_potentially_indefinite(analysis, token)
                || (self.is_potentially_definite(analysis, token)
                    && has_relative_clause(analysis.doc(), token)))
    }

    /// An independent noun that may repeat a referent introduced earlier.
    fn is_potentially_referring_back_noun(&self, analysis: &Analysis<'_>, token: &Token) -> bool {
        self.is_independent_noun(analysis, token)
            && self.is_potentially_definite(analysis, token)
            && !has_relative_clause(analysis.doc(), token)
    }
}

fn has_relative_clause(doc: &Doc, token: &Token) -> bool {
    doc.children(token).any(|child| child.dep_starts_with("acl"))
}
