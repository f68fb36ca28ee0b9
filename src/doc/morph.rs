use std::fmt;
use std::str::FromStr;

use crate::error::AnnotationError;

/// Morphological features of a token, e.g. `Animacy=Anim|Case=Nom|Number=Sing`.
///
/// Keys are kept sorted so that two feature sets compare equal exactly when
/// they carry the same features, whatever order the annotator wrote them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Morph {
    features: Vec<(String, Vec<String>)>,
}

impl Morph {
    /// Values recorded for `key`, empty when the feature is absent.
    pub fn get(&self, key: &str) -> &[String] {
        self.features
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .map(|found| self.features[found].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, key: &str, value: &str) -> bool {
        self.get(key).iter().any(|v| v == value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromStr for Morph {
    type Err = AnnotationError;

    /// Parses the CoNLL-U `FEATS` notation. `_` and the empty string are the
    /// empty feature set; multiple values for one key are comma separated.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() || input == "_" {
            return Ok(Morph::default());
        }

        let mut features: Vec<(String, Vec<String>)> = Vec::new();
        for feature in input.split('|') {
            let (key, values) = feature
                .split_once('=')
                .filter(|(key, values)| !key.is_empty() && !values.is_empty())
                .ok_or_else(|| AnnotationError::InvalidMorph {
                    feature: feature.to_string(),
                })?;
            let values = values.split(',').map(str::to_string);
            match features.iter().position(|(k, _)| k == key) {
                Some(found) => features[found].1.extend(values),
                None => features.push((key.to_string(), values.collect())),
            }
        }
        features.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Morph { features })
    }
}

impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (key, values)) in self.features.iter().enumerate() {
            if position > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}={}", key, values.join(","))?;
        }
        Ok(())
    }
}
