//! Learning session: one passage, its bricks, its reveal state, and the input
//! loop that drives them.

use alloc::{boxed::Box, string::String, vec::Vec};

use log::{debug, warn};

use crate::{
    bricks::{BrickSequence, PartitionPolicy},
    error::PassageError,
    input::{Action, Direction, InputEvent, InputProvider},
    mask::{MaskStyle, render_into, render_reference},
    passage::Passage,
    repeat::{RepeatConfig, RepeatController},
    reveal::{RevealContext, RevealState, Snapshot},
    segment::{MIN_CLAUSE_WORDS, Segmenter},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Which controls the embedding UI exposes. Actions of a disabled control are
/// ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnabledControls {
    pub word: bool,
    pub clause: bool,
    pub sentence: bool,
    pub first_letters: bool,
}

impl Default for EnabledControls {
    fn default() -> Self {
        Self {
            word: true,
            clause: true,
            sentence: true,
            first_letters: true,
        }
    }
}

impl EnabledControls {
    pub const fn allows(self, action: Action) -> bool {
        use crate::{reveal::Layer, segment::Granularity};

        if let Some((layer, granularity, _)) = action.step() {
            let granularity_enabled = match granularity {
                Granularity::Word => self.word,
                Granularity::Clause => self.clause,
                Granularity::Sentence => self.sentence,
            };
            return granularity_enabled
                && (matches!(layer, Layer::Full) || self.first_letters);
        }

        match action {
            Action::RemoveAllFirstLetters | Action::UndoRemoveAllFirstLetters => {
                self.first_letters
            }
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LearnConfig {
    /// Partition used when no saved one exists and on brick reset.
    pub partition: PartitionPolicy,
    pub min_clause_words: usize,
    pub controls: EnabledControls,
    pub mask: MaskStyle,
    pub repeat: RepeatConfig,
}

impl Default for LearnConfig {
    fn default() -> Self {
        Self {
            partition: PartitionPolicy::Word,
            min_clause_words: MIN_CLAUSE_WORDS,
            controls: EnabledControls::default(),
            mask: MaskStyle::default(),
            repeat: RepeatConfig::default(),
        }
    }
}

impl LearnConfig {
    /// Clamps values that would stall the segmenter or the repeat clock.
    pub fn sanitized(mut self) -> Self {
        self.min_clause_words = self.min_clause_words.max(1);
        self.repeat.interval_ms = self.repeat.interval_ms.max(1);
        self
    }
}

/// Called with the fresh view after every state change.
pub type ChangeListener = Box<dyn FnMut(&SessionView<'_>)>;

pub struct LearnSession<IN>
where
    IN: InputProvider,
{
    passage: Passage,
    bricks: BrickSequence,
    segmenter: Segmenter,
    state: RevealState,
    config: LearnConfig,
    input: IN,
    repeat: RepeatController<Action>,
    working: String,
    pending_redraw: bool,
    listener: Option<ChangeListener>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

fn apply_to_state(state: &mut RevealState, action: Action, ctx: &RevealContext<'_>) -> bool {
    if let Some((layer, granularity, direction)) = action.step() {
        return match direction {
            Direction::Add => state.add(layer, granularity, ctx),
            Direction::Remove => state.remove(layer, granularity, ctx),
        };
    }

    match action {
        Action::RemoveAllText => state.remove_all_text(),
        Action::UndoRemoveAllText => state.undo_remove_all_text(),
        Action::RemoveAllFirstLetters => state.remove_all_first_letters(),
        Action::UndoRemoveAllFirstLetters => state.undo_remove_all_first_letters(),
        Action::HideOrShowText => state.hide_or_show_text(),
        Action::HideOrShowReferenceText => state.hide_or_show_reference_text(),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
