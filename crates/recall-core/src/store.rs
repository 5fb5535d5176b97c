//! Persisted partitions and reveal progress, keyed by passage title.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use log::{debug, warn};

use crate::{
    error::PassageError,
    input::InputProvider,
    passage::Passage,
    session::{LearnConfig, LearnSession},
};

/// Reveal windows worth keeping across restarts.
pub use crate::reveal::Snapshot as SavedProgress;

/// Abstract passage persistence backend.
pub trait PassageStore {
    type Error;

    fn load_partition(&mut self, title: &str) -> Result<Option<Vec<usize>>, Self::Error>;
    fn save_partition(&mut self, title: &str, starts: &[usize]) -> Result<(), Self::Error>;
    fn load_progress(&mut self, title: &str) -> Result<Option<SavedProgress>, Self::Error>;
    fn save_progress(&mut self, title: &str, progress: &SavedProgress) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError<E> {
    #[error("passage store failed: {0:?}")]
    Store(E),
    #[error(transparent)]
    Passage(#[from] PassageError),
}

#[derive(Clone, Debug, Default)]
struct StoredPassage {
    starts: Option<Vec<usize>>,
    progress: Option<SavedProgress>,
}

/// Store that lives as long as the process does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, StoredPassage>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, title: &str) -> &mut StoredPassage {
        self.entries.entry(String::from(title)).or_default()
    }
}

impl PassageStore for MemoryStore {
    type Error = core::convert::Infallible;

    fn load_partition(&mut self, title: &str) -> Result<Option<Vec<usize>>, Self::Error> {
        Ok(self
            .entries
            .get(title)
            .and_then(|stored| stored.starts.clone()))
    }

    fn save_partition(&mut self, title: &str, starts: &[usize]) -> Result<(), Self::Error> {
        self.entry(title).starts = Some(starts.to_vec());
        Ok(())
    }

    fn load_progress(&mut self, title: &str) -> Result<Option<SavedProgress>, Self::Error> {
        Ok(self.entries.get(title).and_then(|stored| stored.progress))
    }

    fn save_progress(&mut self, title: &str, progress: &SavedProgress) -> Result<(), Self::Error> {
        self.entry(title).progress = Some(*progress);
        Ok(())
    }
}

/// Opens `passage` with its stored partition and progress. A passage seen for
/// the first time is segmented and its partition stored right away, so later
/// sessions practise the same bricks.
pub fn load_session<S, IN>(
    store: &mut S,
    passage: Passage,
    config: LearnConfig,
    input: IN,
) -> Result<LearnSession<IN>, LoadError<S::Error>>
where
    S: PassageStore,
    IN: InputProvider,
{
    let title = String::from(passage.title());
    let saved = store.load_partition(&title).map_err(LoadError::Store)?;
    let fresh = saved.is_none();

    let mut session = LearnSession::new(passage, saved, config, input).inspect_err(|err| {
        warn!("session: stored passage {:?} unusable: {}", title, err);
    })?;

    if fresh {
        debug!("session: storing new partition for {:?}", title);
        store
            .save_partition(&title, session.brick_starts())
            .map_err(LoadError::Store)?;
    }
    if let Some(progress) = store.load_progress(&title).map_err(LoadError::Store)? {
        session.restore_progress(progress);
    }

    Ok(session)
}

pub fn save_session<S, IN>(store: &mut S, session: &LearnSession<IN>) -> Result<(), S::Error>
where
    S: PassageStore,
    IN: InputProvider,
{
    let title = session.passage().title();
    store.save_partition(title, session.brick_starts())?;
    store.save_progress(title, &session.progress())
}
