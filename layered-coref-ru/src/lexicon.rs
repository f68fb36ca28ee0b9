use layered_coref::Lexicon;
use once_cell::sync::Lazy;

const BUNDLED_LEXICON: &str = include_str!("../data/lexicon.toml");

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_toml_str(BUNDLED_LEXICON).expect("bundled Russian lexicon is valid TOML")
});

/// The lexicon shipped with the crate, parsed on first use.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}
