//! Brick partition of a passage.
//!
//! A brick stores only its starting index. Its end is the next brick's start
//! (or the end of the text), so a [`BrickSequence`] is a sorted list of starts
//! that tiles the whole text with no gaps and no overlaps.

use core::ops::Range;

use alloc::vec::Vec;
use log::{debug, warn};

use crate::{
    error::{PartitionFault, PassageError},
    segment::{Granularity, Segmenter},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Brick {
    pub starting_index: usize,
}

/// How a passage without a saved partition is split into bricks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PartitionPolicy {
    /// One brick per word, trailing whitespace included.
    #[default]
    Word,
    Clause,
    Sentence,
    /// The whole passage is a single brick.
    Whole,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BrickSequence {
    starts: Vec<usize>,
    text_len: usize,
}

impl BrickSequence {
    /// Validates a partition, typically one loaded from storage. Nothing is
    /// repaired: a bad partition means corrupted persisted state.
    pub fn from_starts(text: &str, starts: Vec<usize>) -> Result<Self, PassageError> {
        if text.is_empty() {
            return Err(PassageError::EmptyPassage);
        }

        if let Err(fault) = validate_starts(text, &starts) {
            warn!("bricks: rejected partition of {} bricks: {}", starts.len(), fault);
            return Err(fault.into());
        }

        Ok(Self {
            starts,
            text_len: text.len(),
        })
    }

    pub fn segment(
        text: &str,
        policy: PartitionPolicy,
        segmenter: &Segmenter,
    ) -> Result<Self, PassageError> {
        if text.is_empty() {
            return Err(PassageError::EmptyPassage);
        }

        let starts = match policy {
            PartitionPolicy::Word => segmenter.unit_starts(text, Granularity::Word),
            PartitionPolicy::Clause => segmenter.unit_starts(text, Granularity::Clause),
            PartitionPolicy::Sentence => segmenter.unit_starts(text, Granularity::Sentence),
            PartitionPolicy::Whole => alloc::vec![0],
        };
        debug!(
            "bricks: segmented {} bytes into {} bricks policy={:?}",
            text.len(),
            starts.len(),
            policy
        );

        Ok(Self {
            starts,
            text_len: text.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.starts.len()
    }

    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Starting indices in rank order, the form the storage layer persists.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn brick_at(&self, rank: usize) -> Option<Brick> {
        self.starts
            .get(rank)
            .map(|&starting_index| Brick { starting_index })
    }

    pub fn rank_of(&self, brick: Brick) -> Option<usize> {
        self.starts.binary_search(&brick.starting_index).ok()
    }

    /// Index of the brick's last byte.
    pub fn ending_index_of(&self, brick: Brick) -> Option<usize> {
        self.rank_of(brick).map(|rank| self.end_of(rank) - 1)
    }

    pub fn length_of(&self, brick: Brick) -> Option<usize> {
        self.rank_of(brick)
            .map(|rank| self.end_of(rank) - brick.starting_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = Brick> + '_ {
        self.starts
            .iter()
            .map(|&starting_index| Brick { starting_index })
    }

    pub(crate) fn start_of(&self, rank: usize) -> usize {
        self.starts.get(rank).copied().unwrap_or(self.text_len)
    }

    /// Exclusive end of the brick at `rank`.
    pub(crate) fn end_of(&self, rank: usize) -> usize {
        self.starts.get(rank + 1).copied().unwrap_or(self.text_len)
    }

    pub fn span(&self, rank: usize) -> Range<usize> {
        self.start_of(rank)..self.end_of(rank)
    }

    /// Rank of the brick holding byte `index`, clamped to the last brick.
    pub fn rank_containing(&self, index: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= index)
            .saturating_sub(1)
    }

    /// Smallest rank whose brick ends at or after `boundary`.
    pub(crate) fn rank_reaching(&self, boundary: usize) -> usize {
        let following = self.starts.partition_point(|&start| start < boundary);
        following.saturating_sub(1).min(self.count() - 1)
    }

    /// Largest rank whose brick ends at or before `boundary`.
    pub(crate) fn last_rank_within(&self, boundary: usize) -> Option<usize> {
        if boundary >= self.text_len {
            return Some(self.count() - 1);
        }
        self.starts
            .partition_point(|&start| start <= boundary)
            .checked_sub(2)
    }
}

fn validate_starts(text: &str, starts: &[usize]) -> Result<(), PartitionFault> {
    let Some(&first) = starts.first() else {
        return Err(PartitionFault::NoBricks);
    };
    if first != 0 {
        return Err(PartitionFault::FirstNotAtZero { start: first });
    }

    for (rank, &start) in starts.iter().enumerate().skip(1) {
        if start <= starts[rank - 1] {
            return Err(PartitionFault::OutOfOrder { rank, start });
        }
        if start >= text.len() {
            return Err(PartitionFault::PastEnd {
                rank,
                start,
                text_len: text.len(),
            });
        }
        if !text.is_char_boundary(start) {
            return Err(PartitionFault::NotCharBoundary { rank, start });
        }
    }

    Ok(())
}
