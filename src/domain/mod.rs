//! Domain layer - Entry model and text classification

pub mod classifier;
pub mod collection;
pub mod entry;
pub mod locale;
pub mod timestamp;

pub use classifier::{Classification, Classifier, Mood, Tag};
pub use entry::{DraftEntry, Entry, EntryPatch, MAX_TAGS};
pub use locale::Locale;
