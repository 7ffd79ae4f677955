//! Heuristic classification of entry text
//!
//! Derives the display metadata of an entry (title, emoji, tags) from its
//! free-text fields. Every function here is pure: the same text always
//! yields the same result, and no input string makes it fail.
//!
//! Which field feeds which derivation:
//!
//! - title: `location`
//! - emoji: `thoughts`
//! - tags: `location`, `circumstances`, `trigger`, `thoughts`,
//!   `body_feelings` and `actions`, joined by newlines

pub mod mood;
pub mod tags;
pub mod title;

pub use mood::{derive_mood, Mood};
pub use tags::{derive_tags, Tag};
pub use title::{derive_title, MAX_TITLE_CHARS};

use crate::domain::{DraftEntry, Locale};

/// Derived display fields of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub title: String,
    pub emoji: String,
    pub tags: Vec<String>,
}

/// Classifier bound to a display locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    locale: Locale,
}

impl Classifier {
    pub fn new(locale: Locale) -> Self {
        Classifier { locale }
    }

    pub fn title(&self, text: &str) -> String {
        derive_title(text, self.locale.default_title())
    }

    pub fn emoji(&self, text: &str) -> String {
        derive_mood(text).emoji().to_string()
    }

    pub fn tags(&self, text: &str) -> Vec<String> {
        derive_tags(text)
            .iter()
            .map(|tag| tag.label(self.locale).to_string())
            .collect()
    }

    /// Classify a draft using the fixed field-to-derivation mapping
    pub fn classify(&self, draft: &DraftEntry) -> Classification {
        Classification {
            title: self.title(&draft.location),
            emoji: self.emoji(&draft.thoughts),
            tags: self.tags(&draft.tag_source()),
        }
    }
}
