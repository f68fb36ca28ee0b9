//! The annotated document the rules read.
//!
//! A [`Doc`] is an arena of [`Token`]s addressed by document index. Heads and
//! children are stored as indexes, so walking the dependency tree never
//! needs shared ownership. Construction validates the tree once; after that
//! every walk (`head`, `children`, `ancestors`) is total.

use std::fmt;
use std::ops::{Index, Range};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnnotationError, AnnotationResult};

mod conllu;
mod display;
mod morph;

pub use display::DocDisplay;
pub use morph::Morph;

/// Dependency label carried by the head of every sentence.
pub const ROOT_DEP: &str = "ROOT";

/// Universal Dependencies coarse part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Space,
    Sym,
    Verb,
    X,
}

impl Pos {
    pub const ALL: [Pos; 18] = [
        Pos::Adj,
        Pos::Adp,
        Pos::Adv,
        Pos::Aux,
        Pos::Cconj,
        Pos::Det,
        Pos::Intj,
        Pos::Noun,
        Pos::Num,
        Pos::Part,
        Pos::Pron,
        Pos::Propn,
        Pos::Punct,
        Pos::Sconj,
        Pos::Space,
        Pos::Sym,
        Pos::Verb,
        Pos::X,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Space => "SPACE",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }
}

impl FromStr for Pos {
    type Err = AnnotationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Pos::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str() == tag)
            .ok_or_else(|| AnnotationError::UnknownPos(tag.to_string()))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token as an upstream annotator hands it over.
///
/// `head` follows the CoNLL-U convention: the 1-based position of the head
/// within the same sentence, `0` for the sentence root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSpec {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    /// Fine-grained tag. Falls back to the coarse category when absent.
    #[serde(default)]
    pub tag: Option<String>,
    /// Features in `Key=Value|Key=Value` notation.
    #[serde(default)]
    pub morph: String,
    pub dep: String,
    pub head: usize,
    #[serde(default = "default_space_after")]
    pub space_after: bool,
    #[serde(default)]
    pub ent_type: Option<String>,
}

fn default_space_after() -> bool {
    true
}

/// Serialized form of a whole document: sentences of tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocSpec {
    pub sentences: Vec<Vec<TokenSpec>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    i: usize,
    text: String,
    lemma: String,
    pos: Pos,
    tag: String,
    morph: Morph,
    dep: String,
    head: usize,
    children: Vec<usize>,
    sent: usize,
    ent_type: Option<String>,
    /// Byte offset of the token in the document text.
    idx: usize,
}

impl Token {
    /// Index of the token in its document.
    pub fn i(&self) -> usize {
        self.i
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the fine-grained tag spells the given coarse category.
    pub fn tag_is(&self, pos: Pos) -> bool {
        self.tag == pos.as_str()
    }

    pub fn morph(&self) -> &Morph {
        &self.morph
    }

    pub fn has_morph(&self, key: &str, value: &str) -> bool {
        self.morph.has(key, value)
    }

    pub fn dep(&self) -> &str {
        &self.dep
    }

    pub fn dep_starts_with(&self, prefix: &str) -> bool {
        self.dep.starts_with(prefix)
    }

    pub fn is_root(&self) -> bool {
        self.dep == ROOT_DEP
    }

    /// Document index of the head. The root is its own head.
    pub fn head_index(&self) -> usize {
        self.head
    }

    /// Document indexes of the dependents, in document order.
    pub fn child_indexes(&self) -> &[usize] {
        &self.children
    }

    pub fn sent_index(&self) -> usize {
        self.sent
    }

    pub fn ent_type(&self) -> Option<&str> {
        self.ent_type.as_deref()
    }

    pub fn idx(&self) -> usize {
        self.idx
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    sents: Vec<Range<usize>>,
}

impl Doc {
    /// Builds a document from annotated sentences, validating each dependency
    /// tree. The text is rebuilt from the token texts and their `space_after`
    /// flags; consecutive sentences are separated by one space.
    pub fn from_sentences(sentences: Vec<Vec<TokenSpec>>) -> AnnotationResult<Self> {
        let mut text = String::new();
        let mut tokens: Vec<Token> = Vec::new();
        let mut sents = Vec::with_capacity(sentences.len());

        for (sent, specs) in sentences.into_iter().enumerate() {
            validate_heads(sent, &specs)?;

            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
            }

            let offset = tokens.len();
            let len = specs.len();
            for (position, spec) in specs.into_iter().enumerate() {
                let i = offset + position;
                let (head, dep) = if spec.head == 0 {
                    (i, ROOT_DEP.to_string())
                } else {
                    (offset + spec.head - 1, spec.dep)
                };
                let morph = spec.morph.parse::<Morph>()?;
                let tag = spec.tag.unwrap_or_else(|| spec.pos.as_str().to_string());

                let idx = text.len();
                text.push_str(&spec.text);
                if spec.space_after {
                    text.push(' ');
                }

                tokens.push(Token {
                    i,
                    text: spec.text,
                    lemma: spec.lemma,
                    pos: spec.pos,
                    tag,
                    morph,
                    dep,
                    head,
                    children: Vec::new(),
                    sent,
                    ent_type: spec.ent_type,
                    idx,
                });
            }
            sents.push(offset..offset + len);
        }

        text.truncate(text.trim_end().len());

        for i in 0..tokens.len() {
            let head = tokens[i].head;
            if head != i {
                tokens[head].children.push(i);
            }
        }

        Ok(Doc {
            text,
            tokens,
            sents,
        })
    }

    /// Reads a document serialized as a [`DocSpec`].
    pub fn from_json(json: &str) -> AnnotationResult<Self> {
        let spec: DocSpec =
            serde_json::from_str(json).map_err(|e| AnnotationError::Json(e.to_string()))?;
        Self::from_sentences(spec.sentences)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    pub fn head(&self, token: &Token) -> &Token {
        &self.tokens[self.tokens[token.i].head]
    }

    pub fn children(&self, token: &Token) -> impl Iterator<Item = &Token> + '_ {
        self.tokens[token.i]
            .children
            .iter()
            .map(move |&child| &self.tokens[child])
    }

    /// The head chain above `token`, nearest first, ending at the sentence root.
    pub fn ancestors(&self, token: &Token) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: token.i,
        }
    }

    /// The token `offset` positions away, if the document has one there.
    pub fn nbor(&self, token: &Token, offset: isize) -> Option<&Token> {
        token
            .i
            .checked_add_signed(offset)
            .and_then(|i| self.tokens.get(i))
    }

    pub fn sentence_count(&self) -> usize {
        self.sents.len()
    }

    pub fn sentence(&self, sent: usize) -> &[Token] {
        &self.tokens[self.sents[sent].clone()]
    }

    pub fn sentence_text(&self, sent: usize) -> &str {
        let tokens = self.sentence(sent);
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.text[first.idx..last.idx + last.text.len()],
            _ => "",
        }
    }
}

impl Index<usize> for Doc {
    type Output = Token;

    fn index(&self, i: usize) -> &Token {
        &self.tokens[i]
    }
}

/// Iterator over the heads above a token. See [`Doc::ancestors`].
pub struct Ancestors<'d> {
    doc: &'d Doc,
    current: usize,
}

impl<'d> Iterator for Ancestors<'d> {
    type Item = &'d Token;

    fn next(&mut self) -> Option<&'d Token> {
        let token = &self.doc.tokens[self.current];
        if token.head == token.i {
            return None;
        }
        self.current = token.head;
        Some(&self.doc.tokens[self.current])
    }
}

fn validate_heads(sentence: usize, specs: &[TokenSpec]) -> AnnotationResult<()> {
    if specs.is_empty() {
        return Err(AnnotationError::EmptySentence { sentence });
    }

    let mut root = None;
    for (position, spec) in specs.iter().enumerate() {
        let token = position + 1;
        if spec.head > specs.len() {
            return Err(AnnotationError::HeadOutOfRange {
                sentence,
                token,
                head: spec.head,
            });
        }
        if spec.head == token {
            return Err(AnnotationError::HeadCycle { sentence, token });
        }
        if spec.head == 0 {
            if let Some(first) = root {
                return Err(AnnotationError::MultipleRoots {
                    sentence,
                    first,
                    second: token,
                });
            }
            root = Some(token);
        } else if spec.dep.eq_ignore_ascii_case(ROOT_DEP) {
            return Err(AnnotationError::MisplacedRoot { sentence, token });
        }
    }
    if root.is_none() {
        return Err(AnnotationError::MissingRoot { sentence });
    }

    // With a single root and no self loops, any walk longer than the
    // sentence has entered a cycle.
    for start in 1..=specs.len() {
        let mut current = start;
        let mut steps = 0;
        while current != 0 {
            current = specs[current - 1].head;
            steps += 1;
            if steps > specs.len() {
                return Err(AnnotationError::HeadCycle {
                    sentence,
                    token: start,
                });
            }
        }
    }

    Ok(())
}
