impl<IN> LearnSession<IN>
where
    IN: InputProvider,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        while let Some(action) = self.repeat.poll(now_ms) {
            self.apply(action);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Regenerates the partition with the configured policy and clears the
    /// reveal state. Returns the new partition for the storage layer.
    pub fn reset_bricks(&mut self) -> &[usize] {
        self.apply(Action::ResetBricks);
        self.bricks.starts()
    }

    fn reset_bricks_in_place(&mut self) {
        self.repeat.stop();
        match BrickSequence::segment(self.passage.text(), self.config.partition, &self.segmenter) {
            Ok(bricks) => {
                debug!(
                    "session: reset bricks {} -> {}",
                    self.bricks.count(),
                    bricks.count()
                );
                self.bricks = bricks;
            }
            Err(err) => warn!("session: brick reset failed: {}", err),
        }
        self.state.reset();
    }
}
