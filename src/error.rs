//! Error types for building annotated documents and loading rule resources.
//!
//! Rule evaluation never fails: a rule that does not apply answers "no".
//! Errors are only raised while the upstream annotation is turned into a
//! [`Doc`](crate::Doc), or while lexicon and configuration files are read.

use thiserror::Error;

/// Errors raised while validating or parsing upstream annotation.
///
/// Token positions are reported the way CoNLL-U numbers them: 1-based
/// within their sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("sentence {sentence} has no tokens")]
    EmptySentence { sentence: usize },

    #[error("sentence {sentence} has no root token")]
    MissingRoot { sentence: usize },

    #[error("sentence {sentence} has more than one root: tokens {first} and {second}")]
    MultipleRoots {
        sentence: usize,
        first: usize,
        second: usize,
    },

    #[error("token {token} in sentence {sentence} points at head {head} outside the sentence")]
    HeadOutOfRange {
        sentence: usize,
        token: usize,
        head: usize,
    },

    #[error("token {token} in sentence {sentence} is part of a head cycle")]
    HeadCycle { sentence: usize, token: usize },

    #[error("token {token} in sentence {sentence} carries the root label but has a head")]
    MisplacedRoot { sentence: usize, token: usize },

    #[error("invalid morphological feature `{feature}`")]
    InvalidMorph { feature: String },

    #[error("unknown part-of-speech tag `{0}`")]
    UnknownPos(String),

    /// Malformed CoNLL-U input.
    #[error("CoNLL-U line {line}: {message}")]
    Conllu { line: usize, message: String },

    /// Malformed JSON input.
    #[error("invalid JSON annotation: {0}")]
    Json(String),
}

/// Result type for annotation construction.
pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// Errors raised while loading lexicons or rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
