//! Scores the rules hand back to a chain builder.

use std::fmt;

/// How plausible it is that a referring token points at a referred mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compatibility {
    Incompatible = 0,
    /// Possible, but weaker than other candidates.
    Uncertain = 1,
    Compatible = 2,
}

impl Compatibility {
    /// `Compatible`, downgraded to `Uncertain` when the pair was flagged as doubtful.
    pub fn positive(uncertain: bool) -> Self {
        if uncertain {
            Compatibility::Uncertain
        } else {
            Compatibility::Compatible
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_possible(self) -> bool {
        self != Compatibility::Incompatible
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Whether a token has to, may, or cannot be bound within its own clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reflexivity {
    NotReflexive = 0,
    Ambiguous = 1,
    Reflexive = 2,
}

impl Reflexivity {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Outcome of a single rule in a scoring chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reject,
    Accept,
}

impl Verdict {
    pub fn resolve(self, uncertain: bool) -> Compatibility {
        match self {
            Verdict::Reject => Compatibility::Incompatible,
            Verdict::Accept => Compatibility::positive(uncertain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_is_capped_by_uncertainty() {
        assert_eq!(Verdict::Accept.resolve(false), Compatibility::Compatible);
        assert_eq!(Verdict::Accept.resolve(true), Compatibility::Uncertain);
        assert_eq!(Verdict::Reject.resolve(true), Compatibility::Incompatible);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(Compatibility::Incompatible.as_u8(), 0);
        assert_eq!(Compatibility::Uncertain.as_u8(), 1);
        assert_eq!(Compatibility::Compatible.as_u8(), 2);
        assert_eq!(Reflexivity::Ambiguous.as_u8(), 1);
        assert!(!Compatibility::Incompatible.is_possible());
        assert!(Compatibility::Uncertain.is_possible());
    }
}
