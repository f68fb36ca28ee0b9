use layered_coref::{Mention, Verdict};

use super::{Pair, PairRule};

/// When whole sentences separate the referent from the anaphor, any noun in
/// between that the anaphor could also take is the closer antecedent.
pub(crate) struct InterveningSentence;

impl PairRule for InterveningSentence {
    fn name(&self) -> &'static str {
        "intervening_sentence"
    }

    fn check(&self, pair: &Pair<'_>) -> Option<Verdict> {
        let root = pair.referred_root;
        let referring = pair.referring;
        let doc = pair.doc;
        if root.sent_index() == referring.sent_index() || root.i() >= referring.i() {
            return None;
        }
        let adjacent = format!(
            "{} {}",
            doc.sentence_text(root.sent_index()),
            doc.sentence_text(referring.sent_index())
        );
        if doc.text().contains(&adjacent) {
            return None;
        }

        let closer_antecedent = (root.i() + 1..referring.i()).rev().any(|index| {
            let candidate = &doc[index];
            candidate.sent_index() != referring.sent_index()
                && pair.rules.independent_noun(pair.analysis, candidate)
                && pair
                    .rules
                    .score_pair(
                        pair.analysis,
                        &Mention::single(candidate),
                        referring,
                        pair.directly,
                    )
                    .is_possible()
        });
        closer_antecedent.then(|| Verdict::Reject)
    }
}
