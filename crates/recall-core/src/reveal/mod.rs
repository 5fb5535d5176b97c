//! Reveal state machine.
//!
//! Two rank windows are tracked: `revealed` (bricks shown in full) and
//! `first_letters` (bricks reduced to first letters). Add operations extend a
//! window's end to the next unit boundary, remove operations retract it, and
//! nothing ever fails: requests outside the brick domain leave the state as
//! it is and report `false`.

use log::debug;

use crate::{
    bricks::BrickSequence,
    segment::{Granularity, Segmenter},
};

/// Inclusive range of brick ranks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RankWindow {
    pub start: usize,
    pub end: usize,
}

impl RankWindow {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn contains(&self, rank: usize) -> bool {
        self.start <= rank && rank <= self.end
    }

    /// Clamps the window into `[0, count - 1]`, dropping it when nothing of it
    /// survives.
    pub fn clamped(self, count: usize) -> Option<Self> {
        let last = count.checked_sub(1)?;
        if self.start > self.end || self.start > last {
            return None;
        }
        Some(Self::new(self.start, self.end.min(last)))
    }
}

/// Which window a granularity operation acts on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layer {
    Full,
    FirstLetters,
}

/// How the masker shows one brick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BrickMode {
    Revealed,
    FirstLetters,
    Hidden,
}

/// Both windows as they were before a bulk removal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub revealed: Option<RankWindow>,
    pub first_letters: Option<RankWindow>,
}

/// Borrowed passage data every transition navigates over.
#[derive(Clone, Copy, Debug)]
pub struct RevealContext<'a> {
    pub text: &'a str,
    pub bricks: &'a BrickSequence,
    pub segmenter: Segmenter,
}

impl<'a> RevealContext<'a> {
    pub fn new(text: &'a str, bricks: &'a BrickSequence, segmenter: Segmenter) -> Self {
        Self {
            text,
            bricks,
            segmenter,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RevealState {
    revealed: Option<RankWindow>,
    first_letters: Option<RankWindow>,
    text_hidden: bool,
    reference_hidden: bool,
    text_undo: Option<Snapshot>,
    first_letter_undo: Option<Snapshot>,
}

impl RevealState {
    pub const fn new() -> Self {
        Self {
            revealed: None,
            first_letters: None,
            text_hidden: false,
            reference_hidden: false,
            text_undo: None,
            first_letter_undo: None,
        }
    }

    pub const fn revealed(&self) -> Option<RankWindow> {
        self.revealed
    }

    pub const fn first_letters(&self) -> Option<RankWindow> {
        self.first_letters
    }

    pub const fn text_hidden(&self) -> bool {
        self.text_hidden
    }

    pub const fn reference_hidden(&self) -> bool {
        self.reference_hidden
    }

    pub const fn can_undo_remove_all_text(&self) -> bool {
        self.text_undo.is_some()
    }

    pub const fn can_undo_remove_all_first_letters(&self) -> bool {
        self.first_letter_undo.is_some()
    }

    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            revealed: self.revealed,
            first_letters: self.first_letters,
        }
    }

    /// Full reveal wins over first letters for overlapping ranks.
    pub fn mode_of(&self, rank: usize) -> BrickMode {
        if self.revealed.is_some_and(|window| window.contains(rank)) {
            BrickMode::Revealed
        } else if self.first_letters.is_some_and(|window| window.contains(rank)) {
            BrickMode::FirstLetters
        } else {
            BrickMode::Hidden
        }
    }

    /// Restores both windows, e.g. from saved progress, clamped to `count`
    /// bricks. Undo history is cleared.
    pub fn restore(&mut self, snapshot: Snapshot, count: usize) {
        self.revealed = snapshot.revealed.and_then(|window| window.clamped(count));
        self.first_letters = snapshot
            .first_letters
            .and_then(|window| window.clamped(count));
        self.text_undo = None;
        self.first_letter_undo = None;
    }

    pub fn add_word(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::Full, Granularity::Word, ctx)
    }

    pub fn remove_word(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::Full, Granularity::Word, ctx)
    }

    pub fn add_clause(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::Full, Granularity::Clause, ctx)
    }

    pub fn remove_clause(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::Full, Granularity::Clause, ctx)
    }

    pub fn add_sentence(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::Full, Granularity::Sentence, ctx)
    }

    pub fn remove_sentence(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::Full, Granularity::Sentence, ctx)
    }

    pub fn add_first_letter_word(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::FirstLetters, Granularity::Word, ctx)
    }

    pub fn add_first_letter_clause(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::FirstLetters, Granularity::Clause, ctx)
    }

    pub fn add_first_letter_sentence(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.add(Layer::FirstLetters, Granularity::Sentence, ctx)
    }

    pub fn remove_first_letter_word(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::FirstLetters, Granularity::Word, ctx)
    }

    pub fn remove_first_letter_clause(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::FirstLetters, Granularity::Clause, ctx)
    }

    pub fn remove_first_letter_sentence(&mut self, ctx: &RevealContext<'_>) -> bool {
        self.remove(Layer::FirstLetters, Granularity::Sentence, ctx)
    }

    /// Extends a window to the next `granularity` boundary.
    ///
    /// An absent full window starts at rank 0. An absent first-letter window
    /// starts right after the full window, and a first-letter window always
    /// grows from whichever window reaches further, so every step changes
    /// what is displayed.
    pub fn add(&mut self, layer: Layer, granularity: Granularity, ctx: &RevealContext<'_>) -> bool {
        let bricks = ctx.bricks;
        let count = bricks.count();
        let current = self.window(layer);

        let start = match (layer, current) {
            (_, Some(window)) => window.start,
            (Layer::Full, None) => 0,
            (Layer::FirstLetters, None) => self.revealed.map_or(0, |window| window.end + 1),
        };
        if start >= count {
            return false;
        }

        let mut from = current.map_or(bricks.start_of(start), |window| bricks.end_of(window.end));
        if layer == Layer::FirstLetters {
            if let Some(revealed) = self.revealed {
                from = from.max(bricks.end_of(revealed.end));
            }
        }

        let boundary = ctx.segmenter.next_boundary(ctx.text, from, granularity);
        if boundary <= from {
            return false;
        }

        let next = RankWindow::new(start, bricks.rank_reaching(boundary).max(start));
        self.set_window(layer, Some(next), current, granularity)
    }

    /// Retracts a window's end to the previous `granularity` boundary,
    /// snapping to the start of a unit when the edge sits inside one. The
    /// window disappears once nothing of it would remain.
    pub fn remove(
        &mut self,
        layer: Layer,
        granularity: Granularity,
        ctx: &RevealContext<'_>,
    ) -> bool {
        let Some(current) = self.window(layer) else {
            return false;
        };
        let bricks = ctx.bricks;

        let floor = bricks.start_of(current.start);
        let edge = bricks.end_of(current.end);
        let target = ctx.segmenter.previous_boundary(ctx.text, edge, granularity);

        let next = if target <= floor {
            None
        } else {
            bricks
                .last_rank_within(target)
                .filter(|&end| end >= current.start)
                .and_then(|end| {
                    let end = end.min(current.end.checked_sub(1)?);
                    (end >= current.start).then_some(RankWindow::new(current.start, end))
                })
        };

        self.set_window(layer, next, Some(current), granularity)
    }

    /// Hides all fully revealed text. The previous windows stay recoverable
    /// through [`Self::undo_remove_all_text`] until the next removal.
    pub fn remove_all_text(&mut self) -> bool {
        self.text_undo = Some(self.snapshot());
        debug!("reveal: remove all text, snapshot={:?}", self.text_undo);
        let changed = self.revealed.is_some();
        self.revealed = None;
        changed
    }

    /// Returns `true` whenever a snapshot was consumed, even one equal to the
    /// current windows.
    pub fn undo_remove_all_text(&mut self) -> bool {
        let Some(snapshot) = self.text_undo.take() else {
            return false;
        };
        debug!("reveal: undo remove all text, restoring {:?}", snapshot);
        self.revealed = snapshot.revealed;
        self.first_letters = snapshot.first_letters;
        true
    }

    pub fn remove_all_first_letters(&mut self) -> bool {
        self.first_letter_undo = Some(self.snapshot());
        debug!(
            "reveal: remove all first letters, snapshot={:?}",
            self.first_letter_undo
        );
        let changed = self.first_letters.is_some();
        self.first_letters = None;
        changed
    }

    pub fn undo_remove_all_first_letters(&mut self) -> bool {
        let Some(snapshot) = self.first_letter_undo.take() else {
            return false;
        };
        debug!("reveal: undo remove all first letters, restoring {:?}", snapshot);
        self.first_letters = snapshot.first_letters;
        true
    }

    /// Windows are untouched, so toggling twice shows exactly what was shown.
    pub fn hide_or_show_text(&mut self) -> bool {
        self.text_hidden = !self.text_hidden;
        true
    }

    pub fn hide_or_show_reference_text(&mut self) -> bool {
        self.reference_hidden = !self.reference_hidden;
        true
    }

    /// Back to the initial empty state, as after regenerating bricks.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn window(&self, layer: Layer) -> Option<RankWindow> {
        match layer {
            Layer::Full => self.revealed,
            Layer::FirstLetters => self.first_letters,
        }
    }

    fn set_window(
        &mut self,
        layer: Layer,
        next: Option<RankWindow>,
        current: Option<RankWindow>,
        granularity: Granularity,
    ) -> bool {
        if next == current {
            return false;
        }

        debug!(
            "reveal: {:?} {:?} window {:?} -> {:?}",
            layer, granularity, current, next
        );
        match layer {
            Layer::Full => self.revealed = next,
            Layer::FirstLetters => self.first_letters = next,
        }
        true
    }
}
