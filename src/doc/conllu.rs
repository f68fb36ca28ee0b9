//! CoNLL-U reader.
//!
//! Columns: ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC. Lines are
//! split on tabs; a line without any tab is split on runs of whitespace so
//! that hand-aligned fixtures read the same way. Multi-word token ranges
//! (`3-4`) and empty nodes (`5.1`) are skipped.

use super::{Doc, TokenSpec};
use crate::error::{AnnotationError, AnnotationResult};

const COLUMNS: usize = 10;

impl Doc {
    pub fn from_conllu(input: &str) -> AnnotationResult<Self> {
        let mut sentences = Vec::new();
        let mut current: Vec<TokenSpec> = Vec::new();

        for (line_index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(spec) = parse_token_line(line_index + 1, line, current.len() + 1)? {
                current.push(spec);
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }

        Doc::from_sentences(sentences)
    }
}

fn parse_token_line(
    line: usize,
    text: &str,
    expected_id: usize,
) -> AnnotationResult<Option<TokenSpec>> {
    let columns: Vec<&str> = if text.contains('\t') {
        text.split('\t').collect()
    } else {
        text.split_whitespace().collect()
    };
    if columns.len() != COLUMNS {
        return Err(conllu_error(
            line,
            format!(
                "expected {} columns, found {}",
                COLUMNS,
                columns.len()
            ),
        ));
    }

    let id = columns[0];
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }
    let id: usize = id
        .parse()
        .map_err(|_| conllu_error(line, format!("invalid token id `{}`", id)))?;
    if id != expected_id {
        return Err(conllu_error(
            line,
            format!("expected token id {}, found {}", expected_id, id),
        ));
    }

    let head: usize = columns[6]
        .parse()
        .map_err(|_| conllu_error(line, format!("invalid head `{}`", columns[6])))?;

    let mut space_after = true;
    let mut ent_type = None;
    for item in columns[9].split('|') {
        match item.split_once('=') {
            Some(("SpaceAfter", "No")) => space_after = false,
            Some(("Ent", label)) => ent_type = Some(label.to_string()),
            _ => {}
        }
    }

    Ok(Some(TokenSpec {
        text: columns[1].to_string(),
        lemma: columns[2].to_string(),
        pos: columns[3].parse()?,
        tag: Some(columns[4])
            .filter(|tag| *tag != "_")
            .map(str::to_string),
        morph: columns[5].to_string(),
        dep: columns[7].to_string(),
        head,
        space_after,
        ent_type,
    }))
}

fn conllu_error(line: usize, message: String) -> AnnotationError {
    AnnotationError::Conllu { line, message }
}
