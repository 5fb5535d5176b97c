use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::*;
use crate::{
    error::PartitionFault,
    input::MockInput,
    reveal::RankWindow,
};

const THESSALONIANS: &str = "Jesus wept. Rejoice evermore. Pray without ceasing.";

#[derive(Default)]
struct QueuedInput {
    events: VecDeque<InputEvent>,
    fail_next: bool,
}

impl QueuedInput {
    fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl InputProvider for QueuedInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(());
        }
        Ok(self.events.pop_front())
    }
}

fn passage() -> Passage {
    Passage::new("1 Thessalonians", THESSALONIANS)
}

fn open<IN: InputProvider>(input: IN, config: LearnConfig) -> LearnSession<IN> {
    LearnSession::new(passage(), None, config, input).unwrap()
}

fn window(start: usize, end: usize) -> Option<RankWindow> {
    Some(RankWindow::new(start, end))
}

#[test]
fn opening_masks_every_brick() {
    let session = open(MockInput::new(), LearnConfig::default());

    assert_eq!(session.bricks().count(), 7);
    assert_eq!(
        session.working_text(),
        "_____ ____. _______ ________. ____ _______ _______."
    );
    assert_eq!(session.reference_text(), THESSALONIANS);
}

#[test]
fn empty_passage_is_rejected() {
    let result = LearnSession::new(
        Passage::new("Blank", ""),
        None,
        LearnConfig::default(),
        MockInput::new(),
    );

    assert!(matches!(result, Err(PassageError::EmptyPassage)));
}

#[test]
fn saved_partition_is_used_verbatim_or_rejected() {
    let session = LearnSession::new(
        passage(),
        Some(vec![0, 12, 30]),
        LearnConfig::default(),
        MockInput::new(),
    )
    .unwrap();
    assert_eq!(session.brick_starts(), &[0, 12, 30]);

    let corrupted = LearnSession::new(
        passage(),
        Some(vec![0, 30, 12]),
        LearnConfig::default(),
        MockInput::new(),
    );
    assert!(matches!(
        corrupted,
        Err(PassageError::InvalidPartition(PartitionFault::OutOfOrder { rank: 2, start: 12 }))
    ));
}

#[test]
fn apply_renders_the_revealed_prefix() {
    let mut session = open(MockInput::new(), LearnConfig::default());

    assert!(session.apply(Action::AddSentence));
    assert_eq!(
        session.working_text(),
        "Jesus wept. _______ ________. ____ _______ _______."
    );

    assert!(session.apply(Action::AddFirstLetterWord));
    assert_eq!(
        session.working_text(),
        "Jesus wept. R______ ________. ____ _______ _______."
    );
}

#[test]
fn holding_a_step_repeats_until_release() {
    let mut session = open(QueuedInput::default(), LearnConfig::default());

    session.input_mut().push(InputEvent::Press(Action::AddWord));
    assert_eq!(session.tick(0), TickResult::RenderRequested);
    assert_eq!(session.state().revealed(), window(0, 0));

    assert_eq!(session.tick(499), TickResult::NoRender);
    assert_eq!(session.state().revealed(), window(0, 0));

    assert_eq!(session.tick(650), TickResult::RenderRequested);
    assert_eq!(session.state().revealed(), window(0, 2));

    session.input_mut().push(InputEvent::Release);
    assert_eq!(session.tick(660), TickResult::NoRender);
    assert_eq!(session.tick(2_000), TickResult::NoRender);
    assert_eq!(session.state().revealed(), window(0, 2));
}

#[test]
fn bulk_actions_fire_once_and_cancel_a_hold() {
    let mut session = open(QueuedInput::default(), LearnConfig::default());

    session.input_mut().push(InputEvent::Press(Action::AddWord));
    let _ = session.tick(0);
    session.input_mut().push(InputEvent::Press(Action::RemoveAllText));
    let _ = session.tick(100);

    assert_eq!(session.state().revealed(), None);
    assert_eq!(session.tick(5_000), TickResult::NoRender);
    assert_eq!(session.state().revealed(), None);
}

#[test]
fn input_failure_releases_the_held_control() {
    let mut session = open(QueuedInput::default(), LearnConfig::default());

    session.input_mut().push(InputEvent::Press(Action::AddWord));
    let _ = session.tick(0);
    session.input_mut().fail_next = true;
    let _ = session.tick(10);

    assert_eq!(session.tick(1_000), TickResult::NoRender);
    assert_eq!(session.state().revealed(), window(0, 0));
}

#[test]
fn disabled_controls_are_ignored() {
    let config = LearnConfig {
        controls: EnabledControls {
            clause: false,
            first_letters: false,
            ..EnabledControls::default()
        },
        ..LearnConfig::default()
    };
    let mut session = open(MockInput::new(), config);

    assert!(!session.apply(Action::AddClause));
    assert!(!session.apply(Action::AddFirstLetterSentence));
    assert!(!session.press(Action::RemoveAllFirstLetters, 0));
    assert_eq!(session.state().revealed(), None);

    let availability = session.availability();
    assert!(!availability.is_enabled(Action::AddClause));
    assert!(availability.is_enabled(Action::AddWord));
}

#[test]
fn availability_tracks_what_would_change() {
    let mut session = open(MockInput::new(), LearnConfig::default());

    let availability = session.availability();
    assert!(availability.is_enabled(Action::AddWord));
    assert!(!availability.is_enabled(Action::RemoveWord));
    assert!(!availability.is_enabled(Action::RemoveAllText));
    assert!(!availability.is_enabled(Action::UndoRemoveAllText));
    assert!(availability.is_enabled(Action::HideOrShowText));
    assert!(availability.is_enabled(Action::ResetBricks));

    assert!(session.apply(Action::AddSentence));
    assert!(session.apply(Action::RemoveAllText));
    let availability = session.availability();
    assert!(availability.is_enabled(Action::UndoRemoveAllText));
    assert!(!availability.is_enabled(Action::RemoveAllText));

    assert!(session.apply(Action::UndoRemoveAllText));
    assert_eq!(session.state().revealed(), window(0, 1));
    assert!(!session.availability().is_enabled(Action::UndoRemoveAllText));
}

#[test]
fn hiding_text_and_reference_are_independent() {
    let mut session = open(MockInput::new(), LearnConfig::default());
    assert!(session.apply(Action::AddWord));

    assert!(session.apply(Action::HideOrShowText));
    assert_eq!(session.working_text(), "");
    assert_eq!(session.reference_text(), THESSALONIANS);

    assert!(session.apply(Action::HideOrShowReferenceText));
    assert_eq!(session.reference_text(), "");

    assert!(session.apply(Action::HideOrShowText));
    assert!(session.working_text().starts_with("Jesus ____."));
    assert_eq!(session.state().revealed(), window(0, 0));
}

#[test]
fn listener_sees_every_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = open(MockInput::new(), LearnConfig::default());
    let sink = Rc::clone(&seen);
    session.set_listener(move |view| sink.borrow_mut().push(view.working.to_string()));

    assert!(session.apply(Action::AddWord));
    assert!(!session.apply(Action::RemoveFirstLetterWord));
    assert!(session.apply(Action::AddWord));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].starts_with("Jesus ____."));
    assert!(seen[1].starts_with("Jesus wept. _______"));
}

#[test]
fn listener_hears_when_an_undo_is_used_up() {
    let undo_available = Rc::new(RefCell::new(Vec::new()));
    let mut session = open(MockInput::new(), LearnConfig::default());
    let sink = Rc::clone(&undo_available);
    session.set_listener(move |view| {
        sink.borrow_mut()
            .push(view.availability.is_enabled(Action::UndoRemoveAllText));
    });

    assert!(!session.apply(Action::RemoveAllText));
    assert!(session.availability().is_enabled(Action::UndoRemoveAllText));
    assert!(session.apply(Action::UndoRemoveAllText));

    assert_eq!(*undo_available.borrow(), [false]);
    assert!(!session.availability().is_enabled(Action::UndoRemoveAllText));
}

#[test]
fn reset_bricks_resegments_and_clears_state() {
    let config = LearnConfig {
        partition: PartitionPolicy::Sentence,
        ..LearnConfig::default()
    };
    let mut session = LearnSession::new(passage(), Some(vec![0, 6]), config, MockInput::new())
        .unwrap();
    assert!(session.apply(Action::AddWord));
    assert!(session.apply(Action::HideOrShowText));

    assert_eq!(session.reset_bricks(), &[0, 12, 30]);
    assert_eq!(session.state(), &RevealState::new());
    assert_eq!(
        session.working_text(),
        "_____ ____. _______ ________. ____ _______ _______."
    );
}

#[test]
fn progress_round_trips_through_restore() {
    let mut session = open(MockInput::new(), LearnConfig::default());
    assert!(session.apply(Action::AddSentence));
    assert!(session.apply(Action::AddFirstLetterWord));
    let progress = session.progress();

    let mut reopened = open(MockInput::new(), LearnConfig::default());
    reopened.restore_progress(progress);

    assert_eq!(reopened.state().revealed(), window(0, 1));
    assert_eq!(reopened.state().first_letters(), window(2, 2));
    assert_eq!(reopened.working_text(), session.working_text());
}

#[test]
fn with_view_reports_the_held_action() {
    let mut session = open(MockInput::new(), LearnConfig::default());
    assert!(session.press(Action::AddClause, 0));

    let mut repeating = None;
    let mut title = String::new();
    session.with_view(|view| {
        repeating = view.repeating;
        title.push_str(view.title);
    });

    assert_eq!(repeating, Some(Action::AddClause));
    assert_eq!(title, "1 Thessalonians");
    assert!(session.release());
    assert!(!session.release());
}

#[test]
fn config_sanitizes_degenerate_values() {
    let config = LearnConfig {
        min_clause_words: 0,
        repeat: RepeatConfig {
            initial_delay_ms: 0,
            interval_ms: 0,
        },
        ..LearnConfig::default()
    }
    .sanitized();

    assert_eq!(config.min_clause_words, 1);
    assert_eq!(config.repeat.interval_ms, 1);
}
