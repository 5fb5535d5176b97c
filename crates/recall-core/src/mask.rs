//! Display string for a reveal state.
//!
//! Masking only ever replaces letters and digits. Whitespace and punctuation
//! are copied verbatim, and every replaced character becomes exactly one
//! glyph, so the masked text keeps the passage's shape and word lengths.

use alloc::string::String;

use crate::{
    bricks::BrickSequence,
    reveal::{BrickMode, RevealState},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaskStyle {
    /// Replaces every letter of a hidden brick.
    pub hidden: char,
    /// Replaces every letter after the first in first-letter bricks.
    pub first_letter: char,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self {
            hidden: '_',
            first_letter: '_',
        }
    }
}

pub fn render(text: &str, bricks: &BrickSequence, state: &RevealState) -> String {
    render_with(text, bricks, state, &MaskStyle::default())
}

pub fn render_with(
    text: &str,
    bricks: &BrickSequence,
    state: &RevealState,
    style: &MaskStyle,
) -> String {
    let mut out = String::new();
    render_into(&mut out, text, bricks, state, style);
    out
}

/// Like [`render_with`], reusing `out`'s allocation.
pub fn render_into(
    out: &mut String,
    text: &str,
    bricks: &BrickSequence,
    state: &RevealState,
    style: &MaskStyle,
) {
    out.clear();
    if state.text_hidden() {
        return;
    }

    out.reserve(text.len());
    for rank in 0..bricks.count() {
        let Some(slice) = text.get(bricks.span(rank)) else {
            continue;
        };
        match state.mode_of(rank) {
            BrickMode::Revealed => out.push_str(slice),
            BrickMode::FirstLetters => push_first_letters(out, slice, style.first_letter),
            BrickMode::Hidden => push_hidden(out, slice, style.hidden),
        }
    }
}

/// The reference pane shows the whole passage unless it is toggled off.
pub fn render_reference<'a>(text: &'a str, state: &RevealState) -> &'a str {
    if state.reference_hidden() { "" } else { text }
}

fn push_first_letters(out: &mut String, slice: &str, glyph: char) {
    let mut at_word_start = true;
    for ch in slice.chars() {
        if ch.is_ascii_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if ch.is_alphanumeric() {
            out.push(if at_word_start { ch } else { glyph });
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
}

fn push_hidden(out: &mut String, slice: &str, glyph: char) {
    out.extend(
        slice
            .chars()
            .map(|ch| if ch.is_alphanumeric() { glyph } else { ch }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bricks::PartitionPolicy,
        reveal::{RankWindow, RevealContext, Snapshot},
        segment::Segmenter,
    };

    const GENESIS: &str = "In the beginning, God created the heavens and the earth.";

    fn bricks(text: &str) -> BrickSequence {
        BrickSequence::segment(text, PartitionPolicy::Word, &Segmenter::default()).unwrap()
    }

    fn state_with(revealed: Option<RankWindow>, first_letters: Option<RankWindow>) -> RevealState {
        let mut state = RevealState::new();
        state.restore(
            Snapshot {
                revealed,
                first_letters,
            },
            usize::MAX,
        );
        state
    }

    #[test]
    fn nothing_revealed_hides_letters_only() {
        let bricks = bricks(GENESIS);
        let out = render(GENESIS, &bricks, &RevealState::new());
        assert_eq!(
            out,
            "__ ___ _________, ___ _______ ___ _______ ___ ___ _____."
        );
        assert_eq!(out.chars().count(), GENESIS.chars().count());
    }

    #[test]
    fn layers_render_in_rank_order() {
        let bricks = bricks(GENESIS);
        let state = state_with(Some(RankWindow::new(0, 2)), Some(RankWindow::new(3, 5)));
        assert_eq!(
            render(GENESIS, &bricks, &state),
            "In the beginning, G__ c______ t__ _______ ___ ___ _____."
        );
    }

    #[test]
    fn revealed_wins_where_windows_overlap() {
        let bricks = bricks(GENESIS);
        let state = state_with(Some(RankWindow::new(0, 3)), Some(RankWindow::new(0, 4)));
        assert!(render(GENESIS, &bricks, &state).starts_with("In the beginning, God c______ "));
    }

    #[test]
    fn first_letters_skip_leading_punctuation_and_restart_per_word() {
        let text = "\"Fear not,\" said he; 2nd-born.";
        let bricks = BrickSequence::from_starts(text, alloc::vec![0]).unwrap();
        let state = state_with(None, Some(RankWindow::new(0, 0)));
        let style = MaskStyle {
            hidden: '_',
            first_letter: '*',
        };
        assert_eq!(
            render_with(text, &bricks, &state, &style),
            "\"F*** n**,\" s*** h*; 2**-****."
        );
    }

    #[test]
    fn first_letters_follow_the_segmenter_word_split() {
        let text = "Jesus\u{a0}wept.";
        let bricks = bricks(text);
        assert_eq!(bricks.count(), 1);

        let state = state_with(None, Some(RankWindow::new(0, 0)));
        assert_eq!(render(text, &bricks, &state), "J____\u{a0}____.");
    }

    #[test]
    fn hidden_text_renders_empty_and_toggles_back_exactly() {
        let bricks = bricks(GENESIS);
        let mut state = RevealState::new();
        let ctx = RevealContext::new(GENESIS, &bricks, Segmenter::default());
        state.add_clause(&ctx);
        let before = render(GENESIS, &bricks, &state);

        state.hide_or_show_text();
        assert_eq!(render(GENESIS, &bricks, &state), "");
        state.hide_or_show_text();
        assert_eq!(render(GENESIS, &bricks, &state), before);
    }

    #[test]
    fn reference_pane_is_independent_of_working_text() {
        let mut state = RevealState::new();
        assert_eq!(render_reference(GENESIS, &state), GENESIS);
        state.hide_or_show_reference_text();
        assert_eq!(render_reference(GENESIS, &state), "");
        state.hide_or_show_text();
        state.hide_or_show_reference_text();
        assert_eq!(render_reference(GENESIS, &state), GENESIS);
    }
}
