//! NoteStore — concurrent in-memory map from note id to note record.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored note. `note_id` doubles as the map key and never changes after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: i64,
    pub title: String,
    pub content: String,
}

/// Domain errors for store operations. Handlers resolve these locally into
/// response envelopes; neither variant is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreError {
    NotFound,
    AlreadyExists,
}

impl fmt::Display for NoteStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteStoreError::NotFound => write!(f, "Note not found"),
            NoteStoreError::AlreadyExists => write!(f, "note_id already exists"),
        }
    }
}

impl std::error::Error for NoteStoreError {}

/// In-memory note storage backed by a DashMap.
pub struct NoteStore {
    notes: DashMap<i64, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: DashMap::new(),
        }
    }

    /// Insert a new note. Refuses to overwrite: if the id is already taken
    /// the existing record is left untouched.
    pub fn create(&self, note: Note) -> Result<Note, NoteStoreError> {
        match self.notes.entry(note.note_id) {
            Entry::Occupied(_) => Err(NoteStoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(note.clone());
                Ok(note)
            }
        }
    }

    /// Fetch a copy of the stored note.
    pub fn get(&self, note_id: i64) -> Result<Note, NoteStoreError> {
        self.notes
            .get(&note_id)
            .map(|entry| entry.value().clone())
            .ok_or(NoteStoreError::NotFound)
    }

    /// Partial update: `None` means "leave the field as is", `Some("")` is a
    /// deliberate set-to-empty. Returns the note as stored afterwards.
    /// The note id itself is immutable.
    pub fn update(
        &self,
        note_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, NoteStoreError> {
        let mut entry = self
            .notes
            .get_mut(&note_id)
            .ok_or(NoteStoreError::NotFound)?;

        if let Some(title) = title {
            entry.title = title;
        }
        if let Some(content) = content {
            entry.content = content;
        }

        Ok(entry.value().clone())
    }

    /// Remove a note from the store.
    pub fn delete(&self, note_id: i64) -> Result<(), NoteStoreError> {
        self.notes
            .remove(&note_id)
            .map(|_| ())
            .ok_or(NoteStoreError::NotFound)
    }

    /// Number of notes currently stored.
    pub fn count(&self) -> usize {
        self.notes.len()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(note_id: i64, title: &str, content: &str) -> Note {
        Note {
            note_id,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_read_absent_id_is_not_found() {
        let store = NoteStore::new();
        assert_eq!(store.get(42), Err(NoteStoreError::NotFound));
    }

    #[test]
    fn test_create_then_get_returns_stored_note() {
        let store = NoteStore::new();
        store.create(note(1, "Shopping", "Milk, eggs")).unwrap();

        assert_eq!(store.get(1), Ok(note(1, "Shopping", "Milk, eggs")));
    }

    #[test]
    fn test_create_duplicate_reports_conflict_and_keeps_original() {
        let store = NoteStore::new();
        store.create(note(1, "first", "a")).unwrap();

        let result = store.create(note(1, "second", "b"));
        assert_eq!(result, Err(NoteStoreError::AlreadyExists));

        // Original record untouched
        assert_eq!(store.get(1), Ok(note(1, "first", "a")));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_update_only_touches_supplied_fields() {
        let store = NoteStore::new();
        store.create(note(7, "Title", "Body")).unwrap();

        let updated = store.update(7, Some("New title".to_string()), None).unwrap();
        assert_eq!(updated, note(7, "New title", "Body"));
        assert_eq!(store.get(7), Ok(note(7, "New title", "Body")));
    }

    #[test]
    fn test_update_empty_string_is_a_real_change() {
        let store = NoteStore::new();
        store.create(note(7, "Title", "Body")).unwrap();

        let updated = store.update(7, None, Some(String::new())).unwrap();
        assert_eq!(updated, note(7, "Title", ""));
    }

    #[test]
    fn test_update_absent_id_does_not_insert() {
        let store = NoteStore::new();

        let result = store.update(9, Some("x".to_string()), None);
        assert_eq!(result, Err(NoteStoreError::NotFound));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_delete_removes_and_subsequent_get_is_not_found() {
        let store = NoteStore::new();
        store.create(note(3, "t", "c")).unwrap();

        store.delete(3).unwrap();
        assert_eq!(store.get(3), Err(NoteStoreError::NotFound));
        assert_eq!(store.delete(3), Err(NoteStoreError::NotFound));
    }

    #[test]
    fn test_full_note_lifecycle() {
        let store = NoteStore::new();

        store.create(note(1, "Shopping", "Milk, eggs")).unwrap();
        assert_eq!(store.get(1), Ok(note(1, "Shopping", "Milk, eggs")));

        store
            .update(1, None, Some("Milk, eggs, bread".to_string()))
            .unwrap();
        assert_eq!(store.get(1), Ok(note(1, "Shopping", "Milk, eggs, bread")));

        store.delete(1).unwrap();
        assert_eq!(store.get(1), Err(NoteStoreError::NotFound));
    }
}
