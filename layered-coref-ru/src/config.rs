//! Switches for the Russian rules.

use std::fs;
use std::path::Path;

use layered_coref::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// ```toml
/// elided_subject_anaphors = false
///
/// [quirks]
/// flat_name_lemma_repair = true
/// masculine_female_name_guard = true
/// comitative_number_exemption = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Treat a finite verb without an overt subject as an anaphor standing in
    /// for the missing subject.
    pub elided_subject_anaphors: bool,
    pub quirks: Quirks,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            elided_subject_anaphors: false,
            quirks: Quirks::default(),
        }
    }
}

/// Workarounds for known mistakes of the upstream Russian pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Quirks {
    /// A `flat:name` token lemmatized with a trailing "у" is looked up as a
    /// female name ending in "а" ("Анну" lemmatized as "анну").
    pub flat_name_lemma_repair: bool,
    /// Reject masculine singular pronouns for a coordinated object whose
    /// conjunct is a female given name tagged masculine.
    pub masculine_female_name_guard: bool,
    /// Let a singular referent governing the Cyrillic preposition "с" stand
    /// for a group named by a plural pronoun ("с Петей ... Они").
    pub comitative_number_exemption: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            flat_name_lemma_repair: true,
            masculine_female_name_guard: true,
            comitative_number_exemption: true,
        }
    }
}

impl RulesConfig {
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            source_name: "rules config".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&source).map_err(|e| ConfigError::Parse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
