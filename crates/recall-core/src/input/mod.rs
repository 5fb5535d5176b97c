//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

use crate::{reveal::Layer, segment::Granularity};

/// Learning-view controls. Every variant maps to exactly one reveal-state
/// transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    AddWord,
    RemoveWord,
    AddClause,
    RemoveClause,
    AddSentence,
    RemoveSentence,
    AddFirstLetterWord,
    RemoveFirstLetterWord,
    AddFirstLetterClause,
    RemoveFirstLetterClause,
    AddFirstLetterSentence,
    RemoveFirstLetterSentence,
    RemoveAllText,
    UndoRemoveAllText,
    RemoveAllFirstLetters,
    UndoRemoveAllFirstLetters,
    HideOrShowText,
    HideOrShowReferenceText,
    ResetBricks,
}

/// Whether a step action grows or shrinks its window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Add,
    Remove,
}

impl Action {
    pub const COUNT: usize = 19;

    pub const ALL: [Action; Self::COUNT] = [
        Action::AddWord,
        Action::RemoveWord,
        Action::AddClause,
        Action::RemoveClause,
        Action::AddSentence,
        Action::RemoveSentence,
        Action::AddFirstLetterWord,
        Action::RemoveFirstLetterWord,
        Action::AddFirstLetterClause,
        Action::RemoveFirstLetterClause,
        Action::AddFirstLetterSentence,
        Action::RemoveFirstLetterSentence,
        Action::RemoveAllText,
        Action::UndoRemoveAllText,
        Action::RemoveAllFirstLetters,
        Action::UndoRemoveAllFirstLetters,
        Action::HideOrShowText,
        Action::HideOrShowReferenceText,
        Action::ResetBricks,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Granularity step actions, as `(layer, granularity, direction)`.
    pub const fn step(self) -> Option<(Layer, Granularity, Direction)> {
        use Direction::{Add, Remove};
        use Granularity::{Clause, Sentence, Word};
        use Layer::{FirstLetters, Full};

        Some(match self {
            Action::AddWord => (Full, Word, Add),
            Action::RemoveWord => (Full, Word, Remove),
            Action::AddClause => (Full, Clause, Add),
            Action::RemoveClause => (Full, Clause, Remove),
            Action::AddSentence => (Full, Sentence, Add),
            Action::RemoveSentence => (Full, Sentence, Remove),
            Action::AddFirstLetterWord => (FirstLetters, Word, Add),
            Action::RemoveFirstLetterWord => (FirstLetters, Word, Remove),
            Action::AddFirstLetterClause => (FirstLetters, Clause, Add),
            Action::RemoveFirstLetterClause => (FirstLetters, Clause, Remove),
            Action::AddFirstLetterSentence => (FirstLetters, Sentence, Add),
            Action::RemoveFirstLetterSentence => (FirstLetters, Sentence, Remove),
            _ => return None,
        })
    }

    /// Step actions repeat while held; bulk actions and toggles fire once.
    pub const fn is_repeatable(self) -> bool {
        self.step().is_some()
    }
}

/// Logical input events consumed by a learning session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Press(Action),
    Release,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
