//! Entry repository: create, list, update and delete journal entries
//!
//! The journal is one serialized collection under a single storage key, so
//! every mutation reads the whole collection, changes it in memory and
//! writes it back. Mutations are serialized through an in-process mutex so
//! two overlapping calls cannot both start from the same old collection.
//!
//! Failure policy:
//!
//! - listing never fails: a missing, unreadable or malformed collection is
//!   an empty journal (logged at `warn`)
//! - a mutation that cannot read the stored collection aborts without
//!   writing, so stored entries are never replaced by an empty journal
//! - writes always report failure as [`UrgelogError::StorageWrite`] and are
//!   never retried
//! - updating a missing id is `Ok(None)`, deleting one is `Ok(false)`

use crate::domain::collection::{self, ENTRIES_KEY};
use crate::domain::{timestamp, Classifier, DraftEntry, Entry, EntryPatch};
use crate::error::{Result, UrgelogError};
use crate::infrastructure::storage::{BackendKind, FallbackStore, PrimaryStore, StorageBackend};
use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Key an unreadable collection is copied to before it gets overwritten
pub const UNREADABLE_KEY: &str = "journal_entries_unreadable";

const ID_SUFFIX_LEN: usize = 7;

pub struct EntryRepository<P, F> {
    backend: StorageBackend<P, F>,
    classifier: Classifier,
    write_lock: Mutex<()>,
}

impl<P: PrimaryStore, F: FallbackStore> EntryRepository<P, F> {
    pub fn new(backend: StorageBackend<P, F>, classifier: Classifier) -> Self {
        EntryRepository {
            backend,
            classifier,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &StorageBackend<P, F> {
        &self.backend
    }

    /// Backend currently serving the journal
    pub fn active_backend(&self) -> BackendKind {
        self.backend.active()
    }

    /// Re-check primary availability. Waits for in-flight mutations so none
    /// of them switches backend halfway.
    pub async fn refresh_backend(&self) -> BackendKind {
        let _guard = self.write_lock.lock().await;
        self.backend.refresh()
    }

    /// All entries, newest first
    pub async fn list_entries(&self) -> Vec<Entry> {
        let kind = self.backend.active();
        match self.read_collection(kind).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(backend = %kind, error = %err, "Treating unreadable journal as empty");
                Vec::new()
            }
        }
    }

    /// Entry with the given id, if present
    pub async fn get_entry(&self, id: &str) -> Option<Entry> {
        self.list_entries()
            .await
            .into_iter()
            .find(|entry| entry.id == id)
    }

    /// Promote a draft to a persisted entry and put it at the head of the
    /// journal.
    pub async fn create_entry(&self, draft: &DraftEntry) -> Result<Entry> {
        let _guard = self.write_lock.lock().await;
        let kind = self.backend.active();
        let mut entries = self.load_for_update(kind).await?;

        let mut created_at = timestamp::now();
        if let Some(newest) = entries.first() {
            if created_at <= newest.created_at {
                created_at = newest.created_at + timestamp::tick();
            }
        }

        let mut id = generate_id(created_at);
        while entries.iter().any(|entry| entry.id == id) {
            id = generate_id(created_at);
        }

        let classification = self.classifier.classify(draft);
        let entry = Entry {
            id,
            location: draft.location.clone(),
            witnesses: draft.witnesses.clone(),
            circumstances: draft.circumstances.clone(),
            trigger: draft.trigger.clone(),
            thoughts: draft.thoughts.clone(),
            body_feelings: draft.body_feelings.clone(),
            actions: draft.actions.clone(),
            emoji: classification.emoji,
            title: classification.title,
            tags: classification.tags,
            created_at,
            updated_at: created_at,
        };

        entries.insert(0, entry.clone());
        self.save(kind, &entries).await?;

        info!(backend = %kind, id = %entry.id, "Created entry");
        Ok(entry)
    }

    /// Merge `patch` over the entry with `id`.
    ///
    /// Returns `Ok(None)` without writing when no such entry exists. Derived
    /// fields are recomputed only for the sources the patch touches.
    pub async fn update_entry(&self, id: &str, patch: &EntryPatch) -> Result<Option<Entry>> {
        let _guard = self.write_lock.lock().await;
        let kind = self.backend.active();
        let mut entries = self.load_for_update(kind).await?;

        let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
            debug!(backend = %kind, id, "Update skipped, entry not found");
            return Ok(None);
        };

        patch.apply_to(entry);

        if patch.touches_title_source() {
            entry.title = self.classifier.title(&entry.location);
        }
        if patch.touches_emoji_source() {
            entry.emoji = self.classifier.emoji(&entry.thoughts);
        }
        if patch.touches_tag_source() {
            entry.tags = self.classifier.tags(&entry.tag_source());
        }

        entry.updated_at = timestamp::now().max(entry.updated_at);

        let updated = entry.clone();
        self.save(kind, &entries).await?;

        info!(backend = %kind, id, "Updated entry");
        Ok(Some(updated))
    }

    /// Remove the entry with `id`. Returns whether anything was removed;
    /// deleting a missing id writes nothing.
    pub async fn delete_entry(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let kind = self.backend.active();
        let mut entries = self.load_for_update(kind).await?;

        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            debug!(backend = %kind, id, "Delete skipped, entry not found");
            return Ok(false);
        }

        self.save(kind, &entries).await?;

        info!(backend = %kind, id, "Deleted entry");
        Ok(true)
    }

    async fn read_collection(&self, kind: BackendKind) -> Result<Vec<Entry>> {
        match self.backend.read(kind, ENTRIES_KEY).await? {
            Some(raw) => collection::decode(&raw).map_err(|err| UrgelogError::StorageRead {
                backend: kind,
                reason: err.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Read the collection for a mutation.
    ///
    /// A failed read aborts the mutation as a [`UrgelogError::StorageWrite`]:
    /// nothing was read, so nothing may be written back. A stored blob that
    /// cannot be decoded is copied to [`UNREADABLE_KEY`] and the mutation
    /// starts from an empty collection.
    async fn load_for_update(&self, kind: BackendKind) -> Result<Vec<Entry>> {
        let raw = match self.backend.read(kind, ENTRIES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => {
                warn!(backend = %kind, error = %err, "Journal unreadable, change not saved");
                return Err(UrgelogError::StorageWrite {
                    backend: kind,
                    reason: format!("current entries could not be read: {}", err),
                });
            }
        };

        match collection::decode(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!(
                    backend = %kind,
                    error = %err,
                    key = UNREADABLE_KEY,
                    "Journal could not be decoded, preserving it and starting empty"
                );
                if let Err(err) = self.backend.write(kind, UNREADABLE_KEY, &raw).await {
                    warn!(backend = %kind, error = %err, "Could not preserve unreadable journal");
                }
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, kind: BackendKind, entries: &[Entry]) -> Result<()> {
        let raw = collection::encode(entries)?;
        self.backend.write(kind, ENTRIES_KEY, &raw).await
    }
}

/// `<unix millis>-<7 random base36 chars>`
fn generate_id(at: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let digit = rng.gen_range(0..36u32);
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect();
    format!("{}-{}", at.timestamp_millis(), suffix)
}
