//! Input model: per-note state and the gesture context the engine tracks.
//!
//! The board holds at most one [`DragState`] and at most one [`EditState`].
//! They may target different notes at the same time (a note can be dragged
//! while another one has its editor open) but never the same note.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::note::NoteId;

/// Browser pointer identifier (`PointerEvent.pointerId`).
pub type PointerId = i32;

/// Externally visible state of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteState {
    #[default]
    Idle,
    /// Bound to pointer-move updates.
    Dragging,
    /// Showing the text editor.
    Editing,
}

/// The drag target and the context needed to follow its pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Note bound to pointer-move updates.
    pub id: NoteId,
    /// Pointer that grabbed the note; moves from other pointers are ignored.
    pub pointer: PointerId,
    /// Pointer offset inside the card at grab time.
    pub grab_offset: Point,
}

/// An open text editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Note whose text the buffer will replace on commit.
    pub id: NoteId,
    /// Uncommitted text.
    pub buffer: String,
}

/// Resolve a note's state from the board's current gestures.
#[must_use]
pub fn note_state(id: NoteId, drag: Option<&DragState>, edit: Option<&EditState>) -> NoteState {
    if edit.is_some_and(|e| e.id == id) {
        NoteState::Editing
    } else if drag.is_some_and(|d| d.id == id) {
        NoteState::Dragging
    } else {
        NoteState::Idle
    }
}
