impl<IN> LearnSession<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("session: input provider failed, releasing held control");
                    self.repeat.stop();
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Press(action) => {
                self.press(action, now_ms);
            }
            InputEvent::Release => {
                self.release();
            }
        }
    }

    /// Fires `action` now. Step actions keep repeating while held, until
    /// [`Self::release`] or another press.
    pub fn press(&mut self, action: Action, now_ms: u64) -> bool {
        if !self.config.controls.allows(action) {
            debug!("session: ignored disabled control {:?}", action);
            return false;
        }

        if action.is_repeatable() {
            let action = self.repeat.press(action, now_ms);
            self.apply(action)
        } else {
            self.repeat.stop();
            self.apply(action)
        }
    }

    pub fn release(&mut self) -> bool {
        self.repeat.stop()
    }

    /// Applies one action synchronously. Returns whether the display state
    /// changed.
    pub fn apply(&mut self, action: Action) -> bool {
        if !self.config.controls.allows(action) {
            debug!("session: ignored disabled control {:?}", action);
            return false;
        }

        let changed = if action == Action::ResetBricks {
            self.reset_bricks_in_place();
            true
        } else {
            let ctx = RevealContext::new(self.passage.text(), &self.bricks, self.segmenter);
            apply_to_state(&mut self.state, action, &ctx)
        };

        if changed {
            self.refresh();
        }
        changed
    }
}
