//! Journal entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of tags on an entry
pub const MAX_TAGS: usize = 3;

/// One persisted self-observation record.
///
/// `id` and `created_at` never change after creation. `emoji`, `title` and
/// `tags` are derived from the free-text fields, never entered directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub witnesses: String,
    #[serde(default)]
    pub circumstances: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub thoughts: String,
    #[serde(default)]
    pub body_feelings: String,
    #[serde(default)]
    pub actions: String,
    pub emoji: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "crate::domain::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::domain::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Text that tag derivation runs over
    pub fn tag_source(&self) -> String {
        join_tag_source([
            self.location.as_str(),
            self.circumstances.as_str(),
            self.trigger.as_str(),
            self.thoughts.as_str(),
            self.body_feelings.as_str(),
            self.actions.as_str(),
        ])
    }
}

/// An entry being filled in, not yet persisted.
///
/// `DraftEntry::default()` is the only "nothing entered yet" value: every
/// field is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub location: String,
    pub witnesses: String,
    pub circumstances: String,
    pub trigger: String,
    pub thoughts: String,
    pub body_feelings: String,
    pub actions: String,
}

impl DraftEntry {
    /// Text that tag derivation runs over
    pub fn tag_source(&self) -> String {
        join_tag_source([
            self.location.as_str(),
            self.circumstances.as_str(),
            self.trigger.as_str(),
            self.thoughts.as_str(),
            self.body_feelings.as_str(),
            self.actions.as_str(),
        ])
    }
}

/// Partial update of an entry's free-text fields.
///
/// `None` leaves a field untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub location: Option<String>,
    pub witnesses: Option<String>,
    pub circumstances: Option<String>,
    pub trigger: Option<String>,
    pub thoughts: Option<String>,
    pub body_feelings: Option<String>,
    pub actions: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }

    /// Whether the title source (`location`) is part of this patch
    pub fn touches_title_source(&self) -> bool {
        self.location.is_some()
    }

    /// Whether the emoji source (`thoughts`) is part of this patch
    pub fn touches_emoji_source(&self) -> bool {
        self.thoughts.is_some()
    }

    /// Whether any field feeding tag derivation is part of this patch
    pub fn touches_tag_source(&self) -> bool {
        self.location.is_some()
            || self.circumstances.is_some()
            || self.trigger.is_some()
            || self.thoughts.is_some()
            || self.body_feelings.is_some()
            || self.actions.is_some()
    }

    /// Merge the present fields over `entry`. Identity, timestamps and
    /// derived fields are left to the caller.
    pub fn apply_to(&self, entry: &mut Entry) {
        fn merge(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        merge(&mut entry.location, &self.location);
        merge(&mut entry.witnesses, &self.witnesses);
        merge(&mut entry.circumstances, &self.circumstances);
        merge(&mut entry.trigger, &self.trigger);
        merge(&mut entry.thoughts, &self.thoughts);
        merge(&mut entry.body_feelings, &self.body_feelings);
        merge(&mut entry.actions, &self.actions);
    }
}

fn join_tag_source(fields: [&str; 6]) -> String {
    fields
        .iter()
        .filter(|field| !field.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join("\n")
}
