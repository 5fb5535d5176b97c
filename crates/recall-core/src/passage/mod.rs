//! Passages: the text being memorized and its title.

mod defaults;

pub use defaults::{DEFAULT_PASSAGES, INSTRUCTIONS_TITLE, default_passages, instructions};

use alloc::string::String;
use heapless::String as TitleString;
use log::debug;

pub const PASSAGE_TITLE_BYTES: usize = 48;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Passage {
    title: TitleString<PASSAGE_TITLE_BYTES>,
    text: String,
}

impl Passage {
    /// Titles longer than [`PASSAGE_TITLE_BYTES`] are cut on a character
    /// boundary. Empty text is accepted here and refused when a session opens.
    pub fn new(title: &str, text: impl Into<String>) -> Self {
        let mut bounded = TitleString::new();
        let mut truncated = false;
        for ch in title.trim().chars() {
            if bounded.push(ch).is_err() {
                truncated = true;
                break;
            }
        }
        if truncated {
            debug!("passage: title truncated to {:?}", bounded.as_str());
        }

        Self {
            title: bounded,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
