//! Note model and the ordered in-memory store.
//!
//! `NoteStore` keeps notes in insertion order, which is also paint order:
//! the last note added is drawn on top. There is no separate z-index.

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::palette::Color;

/// Unique identifier for a note, derived from its creation time in milliseconds.
pub type NoteId = u64;

/// A single sticky note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,
    /// Free-form note body.
    pub text: String,
    /// Left edge of the card in board coordinates.
    pub x: f64,
    /// Top edge of the card in board coordinates.
    pub y: f64,
    /// Palette entry used to paint the card.
    pub color: Color,
}

impl Note {
    /// Top-left corner of the card.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the card's top-left corner.
    pub fn set_position(&mut self, pos: Point) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

/// Ordered store of notes.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a note so it paints above every existing note. A note with the
    /// same id is replaced in place instead.
    pub fn push(&mut self, note: Note) {
        if let Some(existing) = self.get_mut(note.id) {
            *existing = note;
        } else {
            self.notes.push(note);
        }
    }

    /// Remove a note by id, returning it if it was present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// All notes in paint order.
    #[must_use]
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Note> {
        self.notes.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
