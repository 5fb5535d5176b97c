//! Byte-level word scanning. ASCII whitespace never occurs inside a multi-byte
//! UTF-8 sequence, so every index returned here is a character boundary.

pub(crate) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some(next_cursor) = next_word_end(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// End of the next word at or after `cursor`. Scanning is byte-wise, so a
/// cursor inside a multi-byte character is fine.
pub(crate) fn next_word_end(text: &str, mut cursor: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if cursor >= len {
        return None;
    }

    while cursor < len && !bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    Some(cursor)
}

/// Largest character boundary at or before `index`, clamped to the text.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Start of the last word that ends at or before `cursor`, or 0.
pub(crate) fn previous_word_start(text: &str, cursor: usize) -> usize {
    let bytes = text.as_bytes();
    let mut cursor = trim_end_at(text, cursor);

    while cursor > 0 && !bytes[cursor - 1].is_ascii_whitespace() {
        cursor -= 1;
    }

    cursor
}

pub(crate) fn skip_whitespace(text: &str, mut cursor: usize) -> usize {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    cursor.min(len)
}

pub(crate) fn trim_end_at(text: &str, cursor: usize) -> usize {
    let bytes = text.as_bytes();
    let mut cursor = cursor.min(bytes.len());

    while cursor > 0 && bytes[cursor - 1].is_ascii_whitespace() {
        cursor -= 1;
    }

    cursor
}
