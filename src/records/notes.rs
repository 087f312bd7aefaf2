use crate::records::{load_collection, new_id, save_collection, today, RecordError};
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const NOTES_KEY: &str = "omni_notes";
const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub is_todo: bool,
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    pub fn kind(&self) -> NoteKind {
        if self.is_todo {
            NoteKind::Todo
        } else {
            NoteKind::Note
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Note,
    Todo,
}

/// Edited fields of a note; `id` is set when editing an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub completed: bool,
}

/// Notes and to-do items, newest first
pub struct NoteBook<S: Storage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: Storage> NoteBook<S> {
    pub fn open(storage: S) -> Result<Self, RecordError> {
        let notes = load_collection(&storage, NOTES_KEY)?;
        Ok(Self { storage, notes })
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn list(&self, kind: NoteKind) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.kind() == kind).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Create or replace a note. A draft with neither title nor content is
    /// rejected; an empty title becomes "Untitled".
    pub fn save(&mut self, draft: NoteDraft, kind: NoteKind) -> Result<Note, RecordError> {
        if draft.title.trim().is_empty() && draft.content.trim().is_empty() {
            return Err(RecordError::Invalid(
                "a note needs a title or content".to_string(),
            ));
        }

        let title = if draft.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            draft.title
        };

        let note = Note {
            id: draft.id.clone().unwrap_or_else(new_id),
            title,
            content: draft.content,
            date: today(),
            is_todo: kind == NoteKind::Todo,
            completed: draft.completed,
        };

        let mut notes = self.notes.clone();
        match draft.id {
            Some(id) => {
                let slot = notes
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or(RecordError::NotFound(id))?;
                *slot = note.clone();
            }
            None => notes.insert(0, note.clone()),
        }

        self.commit(notes)?;
        info!(id = %note.id, todo = note.is_todo, "saved note");
        Ok(note)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), RecordError> {
        let notes: Vec<Note> = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        if notes.len() == self.notes.len() {
            return Err(RecordError::NotFound(id.to_string()));
        }
        self.commit(notes)?;
        info!(id, "deleted note");
        Ok(())
    }

    /// Flip the completed flag, returning the new state
    pub fn toggle(&mut self, id: &str) -> Result<bool, RecordError> {
        let mut notes = self.notes.clone();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))?;
        note.completed = !note.completed;
        let completed = note.completed;
        self.commit(notes)?;
        Ok(completed)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // Held notes only change once storage has accepted the new list
    fn commit(&mut self, notes: Vec<Note>) -> Result<(), RecordError> {
        save_collection(&mut self.storage, NOTES_KEY, &notes)?;
        self.notes = notes;
        Ok(())
    }
}
