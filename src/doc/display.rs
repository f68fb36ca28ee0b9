use std::collections::HashMap;
use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::Doc;

/// Letter label for the `n`th link target: A..Z, then AA, AB, and so on.
fn index_to_base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

struct Note {
    token: usize,
    text: String,
    links: Vec<Link>,
}

struct Link {
    label: &'static str,
    glyph: Option<&'static str>,
    target: usize,
}

/// Renders one sentence with notes drawn under individual tokens.
///
/// ```text
/// Дмитрий  и  Кристина  пришли  домой
/// ╰─────╯[A] Siblings [Кристина]
///             ╰──────╯DependentSibling
///               └─^governor─>[A]
/// ```
pub struct DocDisplay<'a> {
    doc: &'a Doc,
    sentence: usize,
    notes: Vec<Note>,
}

impl<'a> fmt::Display for DocDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let tokens = self.doc.sentence(self.sentence);
        let offset = tokens.first().map_or(0, |token| token.i());

        let mut starts = Vec::with_capacity(tokens.len());
        let mut ends = Vec::with_capacity(tokens.len());
        let mut opening_line = String::new();
        for (position, token) in tokens.iter().enumerate() {
            if position > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token.text());
            ends.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        let labels = self.build_token_labels();

        for note in &self.notes {
            f.write_char('\n')?;

            let start = starts[note.token - offset];
            let end = ends[note.token - offset];
            for _ in 0..start {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }

            if let Some(label) = labels.get(&note.token) {
                write!(f, "{} ", label)?;
            }
            f.write_str(&note.text)?;

            for link in &note.links {
                f.write_char('\n')?;
                for _ in 0..start + 2 {
                    f.write_char(' ')?;
                }
                let target = match labels.get(&link.target) {
                    Some(label) => label.clone(),
                    None => format!("[{}]", link.target),
                };
                write!(
                    f,
                    "└─{}{}─>{}",
                    link.glyph.unwrap_or(""),
                    link.label,
                    target
                )?;
            }
        }

        Ok(())
    }
}

impl<'a> DocDisplay<'a> {
    pub fn new(doc: &'a Doc, sentence: usize) -> Self {
        DocDisplay {
            doc,
            sentence,
            notes: Vec::new(),
        }
    }

    /// Only link targets that carry a note of their own get a letter label.
    fn build_token_labels(&self) -> HashMap<usize, String> {
        let noted: Vec<usize> = self.notes.iter().map(|note| note.token).collect();
        let mut targets: Vec<usize> = self
            .notes
            .iter()
            .flat_map(|note| &note.links)
            .map(|link| link.target)
            .filter(|target| noted.contains(target))
            .collect();
        targets.sort_unstable();
        targets.dedup();

        targets
            .into_iter()
            .enumerate()
            .map(|(i, token)| (token, format!("[{}]", index_to_base26_label(i))))
            .collect()
    }

    fn in_sentence(&self, token: usize) -> bool {
        self.doc
            .get(token)
            .map_or(false, |t| t.sent_index() == self.sentence)
    }

    /// Adds a note under `token`. Tokens outside the displayed sentence are ignored.
    pub fn include(&mut self, token: usize, text: impl Into<String>) {
        if self.in_sentence(token) {
            self.notes.push(Note {
                token,
                text: text.into(),
                links: Vec::new(),
            });
        }
    }

    /// Adds a note under `token` with an arrow pointing at `target`.
    pub fn include_with_link(
        &mut self,
        token: usize,
        text: impl Into<String>,
        label: &'static str,
        glyph: Option<&'static str>,
        target: usize,
    ) {
        if self.in_sentence(token) {
            self.notes.push(Note {
                token,
                text: text.into(),
                links: vec![Link {
                    label,
                    glyph,
                    target,
                }],
            });
        }
    }

    /// Builder form of [`include`](Self::include).
    pub fn with(mut self, token: usize, text: impl Into<String>) -> Self {
        self.include(token, text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_continue_past_z() {
        assert_eq!(index_to_base26_label(0), "A");
        assert_eq!(index_to_base26_label(25), "Z");
        assert_eq!(index_to_base26_label(26), "AA");
        assert_eq!(index_to_base26_label(51), "AZ");
        assert_eq!(index_to_base26_label(52), "BA");
        assert_eq!(index_to_base26_label(701), "ZZ");
        assert_eq!(index_to_base26_label(702), "AAA");
    }
}
