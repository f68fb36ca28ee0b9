use layered_coref::{Pos, Token};

use crate::closed_class::{capitalize, FLAT_NAME_DEP};
use crate::RussianRules;

/// Genders a token is compatible with. Plurals carry no gender and are
/// compatible with all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GenderProfile {
    pub masculine: bool,
    pub feminine: bool,
    pub neuter: bool,
}

impl GenderProfile {
    pub const NONE: GenderProfile = GenderProfile {
        masculine: false,
        feminine: false,
        neuter: false,
    };
    pub const ANY: GenderProfile = GenderProfile {
        masculine: true,
        feminine: true,
        neuter: true,
    };
    pub const MASCULINE: GenderProfile = GenderProfile {
        masculine: true,
        ..GenderProfile::NONE
    };
    pub const FEMININE: GenderProfile = GenderProfile {
        feminine: true,
        ..GenderProfile::NONE
    };
    pub const NEUTER: GenderProfile = GenderProfile {
        neuter: true,
        ..GenderProfile::NONE
    };

    pub fn overlaps(self, other: GenderProfile) -> bool {
        (self.masculine && other.masculine)
            || (self.feminine && other.feminine)
            || (self.neuter && other.neuter)
    }

    pub fn count(self) -> usize {
        self.masculine as usize + self.feminine as usize + self.neuter as usize
    }

    pub fn union(self, other: GenderProfile) -> GenderProfile {
        GenderProfile {
            masculine: self.masculine || other.masculine,
            feminine: self.feminine || other.feminine,
            neuter: self.neuter || other.neuter,
        }
    }
}

impl RussianRules {
    /// Given names decide first; otherwise singular gender morphology does.
    /// A proper noun checked through an existing chain (`directly == false`)
    /// may have been paraphrased by a noun of any gender.
    pub fn gender_profile(&self, token: &Token, directly: bool) -> GenderProfile {
        let lexicon = self.lexicon();
        let name = capitalize(token.lemma());
        if lexicon.is_female_name(&name) {
            return GenderProfile::FEMININE;
        }
        if lexicon.is_male_name(&name) {
            return GenderProfile::MASCULINE;
        }
        if let Some(repaired) = self.repaired_flat_name(token) {
            return if lexicon.is_female_name(&repaired) {
                GenderProfile::FEMININE
            } else {
                GenderProfile::NONE
            };
        }

        if token.pos() == Pos::Propn && !directly {
            return GenderProfile::ANY;
        }
        if !token.has_morph("Number", "Sing") {
            return GenderProfile::ANY;
        }
        if token.has_morph("Gender", "Masc") {
            GenderProfile::MASCULINE
        } else if token.has_morph("Gender", "Fem") {
            GenderProfile::FEMININE
        } else if token.has_morph("Gender", "Neut") {
            GenderProfile::NEUTER
        } else {
            GenderProfile::NONE
        }
    }

    /// "анну" → "Анна" for name parts the lemmatizer left in the accusative.
    fn repaired_flat_name(&self, token: &Token) -> Option<String> {
        if !self.config().quirks.flat_name_lemma_repair || token.dep() != FLAT_NAME_DEP {
            return None;
        }
        token
            .lemma()
            .strip_suffix('у')
            .map(|stem| capitalize(&format!("{}а", stem)))
    }
}
