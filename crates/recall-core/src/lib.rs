//! Passage segmentation and reveal-state engine for memorizing text.
//!
//! A passage is partitioned into bricks (minimal learning units). A
//! [`reveal::RevealState`] tracks which bricks are shown in full and which are
//! reduced to first letters; [`mask::render`] turns that state into the string
//! to display. [`session::LearnSession`] ties everything to an input loop.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bricks;
pub mod error;
pub mod input;
pub mod mask;
pub mod passage;
pub mod repeat;
pub mod reveal;
pub mod segment;
pub mod session;
pub mod store;

pub use bricks::{Brick, BrickSequence, PartitionPolicy};
pub use error::{PartitionFault, PassageError};
pub use input::{Action, InputEvent, InputProvider};
pub use passage::Passage;
pub use reveal::{RankWindow, RevealState};
pub use session::{LearnConfig, LearnSession, TickResult};
pub use store::{MemoryStore, PassageStore, SavedProgress};
