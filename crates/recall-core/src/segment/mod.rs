//! Punctuation-based unit boundaries (word, clause, sentence).
//!
//! The segmenter holds no text. Every query takes the passage text and a byte
//! index and answers with another byte index:
//!
//! * [`Segmenter::next_boundary`] is the exclusive end of the next unit that
//!   starts at or after `from`. Add operations reveal up to it.
//! * [`Segmenter::previous_boundary`] is the start of the unit that ends at
//!   `edge` (or the start of the unit `edge` sits inside). Remove operations
//!   retract to it. The result is always a word start or 0.
//!
//! Both clamp to the text instead of failing.

mod text_utils;

use alloc::vec::Vec;

pub(crate) use text_utils::count_words;
use text_utils::{
    floor_char_boundary, next_word_end, previous_word_start, skip_whitespace, trim_end_at,
};

pub const MIN_CLAUSE_WORDS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Granularity {
    Word,
    Clause,
    Sentence,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarkKind {
    /// `,` `;` `:` run with no sentence terminal.
    Clause,
    /// Run containing `.` `!` or `?`.
    Sentence,
}

/// End of a punctuation run that is followed by whitespace or end of text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mark {
    pub end: usize,
    pub kind: MarkKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segmenter {
    min_clause_words: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(MIN_CLAUSE_WORDS)
    }
}

impl Segmenter {
    pub const fn new(min_clause_words: usize) -> Self {
        Self {
            min_clause_words: if min_clause_words == 0 {
                1
            } else {
                min_clause_words
            },
        }
    }

    pub const fn min_clause_words(&self) -> usize {
        self.min_clause_words
    }

    /// All clause and sentence marks in text order.
    pub fn marks(&self, text: &str) -> Vec<Mark> {
        let mut marks = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((_, ch)) = chars.next() {
            if !is_clause_mark(ch) {
                continue;
            }

            let mut kind = if is_sentence_terminal(ch) {
                MarkKind::Sentence
            } else {
                MarkKind::Clause
            };
            let mut end = text.len();
            let mut followed_by_space = true;

            while let Some(&(idx, next)) = chars.peek() {
                if is_sentence_terminal(next) {
                    kind = MarkKind::Sentence;
                } else if !is_clause_mark(next) && !is_closing_quote(next) {
                    end = idx;
                    followed_by_space = next.is_ascii_whitespace();
                    break;
                }
                chars.next();
            }

            if followed_by_space {
                marks.push(Mark { end, kind });
            }
        }

        marks
    }

    pub fn next_boundary(&self, text: &str, from: usize, granularity: Granularity) -> usize {
        let from = floor_char_boundary(text, from);
        match granularity {
            Granularity::Word => next_word_end(text, from).unwrap_or(text.len()),
            Granularity::Sentence => self
                .marks(text)
                .into_iter()
                .find(|mark| mark.kind == MarkKind::Sentence && mark.end > from)
                .map(|mark| mark.end)
                .unwrap_or(text.len()),
            Granularity::Clause => self.next_clause_end(text, from),
        }
    }

    pub fn previous_boundary(&self, text: &str, edge: usize, granularity: Granularity) -> usize {
        let edge = trim_end_at(text, floor_char_boundary(text, edge));
        match granularity {
            Granularity::Word => previous_word_start(text, edge),
            Granularity::Sentence => {
                let start = self
                    .marks(text)
                    .into_iter()
                    .filter(|mark| mark.kind == MarkKind::Sentence && mark.end < edge)
                    .map(|mark| mark.end)
                    .last()
                    .unwrap_or(0);
                skip_whitespace(text, start)
            }
            Granularity::Clause => self.previous_clause_start(text, edge),
        }
    }

    /// Byte offsets where units of `granularity` start, beginning with 0.
    /// Whitespace between units belongs to the unit before it.
    pub fn unit_starts(&self, text: &str, granularity: Granularity) -> Vec<usize> {
        let mut starts = Vec::new();
        starts.push(0);

        let mut cursor = 0usize;
        loop {
            let next = skip_whitespace(text, self.next_boundary(text, cursor, granularity));
            if next <= cursor || next >= text.len() {
                break;
            }
            starts.push(next);
            cursor = next;
        }

        starts
    }

    // The run being extended starts after the last mark at or before `from`,
    // so a partially revealed clause is always completed.
    fn next_clause_end(&self, text: &str, from: usize) -> usize {
        let marks = self.marks(text);
        let run_start = marks
            .iter()
            .filter(|mark| mark.end <= from)
            .map(|mark| mark.end)
            .last()
            .unwrap_or(0);

        marks
            .iter()
            .filter(|mark| mark.end > from)
            .find(|mark| {
                mark.kind == MarkKind::Sentence
                    || count_words(&text[run_start..mark.end]) >= self.min_clause_words
            })
            .map(|mark| mark.end)
            .unwrap_or(text.len())
    }

    fn previous_clause_start(&self, text: &str, edge: usize) -> usize {
        let marks = self.marks(text);
        let on_boundary = marks.iter().any(|mark| mark.end == edge);
        let mut earlier = marks.iter().rev().filter(|mark| mark.end < edge);

        let start = if on_boundary {
            earlier
                .find(|mark| {
                    mark.kind == MarkKind::Sentence
                        || count_words(&text[mark.end..edge]) >= self.min_clause_words
                })
                .map(|mark| mark.end)
        } else {
            earlier.next().map(|mark| mark.end)
        };

        skip_whitespace(text, start.unwrap_or(0))
    }
}

pub fn is_sentence_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

pub fn is_clause_mark(ch: char) -> bool {
    is_sentence_terminal(ch) || matches!(ch, ',' | ';' | ':')
}

fn is_closing_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201D}')
}
