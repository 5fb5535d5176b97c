/// Which actions would change the state right now. Drives enabling and
/// disabling of buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlAvailability {
    enabled: [bool; Action::COUNT],
}

impl ControlAvailability {
    pub const fn is_enabled(&self, action: Action) -> bool {
        self.enabled[action.index()]
    }

    pub fn enabled(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_enabled(*action))
    }
}

/// Everything the UI layer needs to draw the learning view.
#[derive(Clone, Copy, Debug)]
pub struct SessionView<'a> {
    pub title: &'a str,
    /// Masked working text; empty while the text is hidden.
    pub working: &'a str,
    /// Full reference text; empty while the reference is hidden.
    pub reference: &'a str,
    pub availability: ControlAvailability,
    pub repeating: Option<Action>,
}

impl<IN> LearnSession<IN>
where
    IN: InputProvider,
{
    /// Opens a session. A saved partition is validated and used as is;
    /// without one the text is segmented with `config.partition`.
    pub fn new(
        passage: Passage,
        saved_starts: Option<Vec<usize>>,
        config: LearnConfig,
        input: IN,
    ) -> Result<Self, PassageError> {
        let config = config.sanitized();
        let segmenter = Segmenter::new(config.min_clause_words);
        let bricks = match saved_starts {
            Some(starts) => BrickSequence::from_starts(passage.text(), starts)?,
            None => BrickSequence::segment(passage.text(), config.partition, &segmenter)?,
        };
        debug!(
            "session: opened {:?} with {} bricks",
            passage.title(),
            bricks.count()
        );

        let mut session = Self {
            passage,
            bricks,
            segmenter,
            state: RevealState::new(),
            config,
            input,
            repeat: RepeatController::new(config.repeat),
            working: String::new(),
            pending_redraw: false,
            listener: None,
        };
        session.refresh();
        Ok(session)
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn bricks(&self) -> &BrickSequence {
        &self.bricks
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn config(&self) -> &LearnConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Current masked working text.
    pub fn working_text(&self) -> &str {
        &self.working
    }

    pub fn reference_text(&self) -> &str {
        render_reference(self.passage.text(), &self.state)
    }

    /// Current partition, for persisting after a reset.
    pub fn brick_starts(&self) -> &[usize] {
        self.bricks.starts()
    }

    pub fn progress(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Restores saved windows, clamped to the current bricks.
    pub fn restore_progress(&mut self, progress: Snapshot) {
        self.state.restore(progress, self.bricks.count());
        self.refresh();
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionView<'_>) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn availability(&self) -> ControlAvailability {
        let ctx = RevealContext::new(self.passage.text(), &self.bricks, self.segmenter);
        let mut enabled = [false; Action::COUNT];

        for action in Action::ALL {
            enabled[action.index()] = self.config.controls.allows(action)
                && match action {
                    Action::ResetBricks
                    | Action::HideOrShowText
                    | Action::HideOrShowReferenceText => true,
                    Action::UndoRemoveAllText => self.state.can_undo_remove_all_text(),
                    Action::UndoRemoveAllFirstLetters => {
                        self.state.can_undo_remove_all_first_letters()
                    }
                    _ => {
                        let mut probe = self.state;
                        apply_to_state(&mut probe, action, &ctx)
                    }
                };
        }

        ControlAvailability { enabled }
    }

    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(SessionView<'_>),
    {
        f(SessionView {
            title: self.passage.title(),
            working: &self.working,
            reference: self.reference_text(),
            availability: self.availability(),
            repeating: self.repeat.active_action(),
        });
    }

    fn refresh(&mut self) {
        render_into(
            &mut self.working,
            self.passage.text(),
            &self.bricks,
            &self.state,
            &self.config.mask,
        );
        self.pending_redraw = true;

        if self.listener.is_none() {
            return;
        }
        let availability = self.availability();
        let repeating = self.repeat.active_action();
        if let Some(listener) = self.listener.as_mut() {
            let view = SessionView {
                title: self.passage.title(),
                working: &self.working,
                reference: render_reference(self.passage.text(), &self.state),
                availability,
                repeating,
            };
            listener(&view);
        }
    }
}
