use rand::Rng;

use crate::consts::{
    CARD_HEIGHT, CARD_WIDTH, NEW_NOTE_TEXT, SPAWN_MIN_X, SPAWN_MIN_Y, SPAWN_RANGE_X, SPAWN_RANGE_Y, WELCOME_NOTES,
};
use crate::geometry::{Point, Size, clamp_to_bounds};
use crate::input::{DragState, EditState, NoteState, PointerId, note_state};
use crate::note::{Note, NoteId, NoteStore};
use crate::palette::Color;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from board operations for the host to log and re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    NoteCreated(Note),
    NoteMoved { id: NoteId, x: f64, y: f64 },
    NoteTextChanged { id: NoteId, text: String },
    NoteColorChanged { id: NoteId, color: Color },
    NoteDeleted { id: NoteId },
    DragStarted { id: NoteId },
    DragEnded { id: NoteId },
    EditStarted { id: NoteId },
    EditCancelled { id: NoteId },
}

/// Board state and every operation the UI can perform on it.
///
/// All operations are total: an id that is not on the board produces
/// [`Action::None`] and leaves the state untouched.
#[derive(Debug, Clone)]
pub struct BoardCore {
    store: NoteStore,
    /// Container size; `None` until the host has measured the board.
    board_size: Option<Size>,
    card_size: Size,
    drag: Option<DragState>,
    edit: Option<EditState>,
    last_id: Option<NoteId>,
}

impl Default for BoardCore {
    fn default() -> Self {
        Self {
            store: NoteStore::new(),
            board_size: None,
            card_size: Size::new(CARD_WIDTH, CARD_HEIGHT),
            drag: None,
            edit: None,
            last_id: None,
        }
    }
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with a known container size.
    #[must_use]
    pub fn with_board_size(board_size: Size) -> Self {
        Self { board_size: Some(board_size), ..Self::default() }
    }

    // --- Layout ---

    /// Record the container size and pull any note that now sticks out back
    /// inside. Returns one `NoteMoved` per note that had to move.
    pub fn set_board_size(&mut self, size: Size) -> Vec<Action> {
        self.board_size = Some(size);
        let card = self.card_size;
        let mut actions = Vec::new();
        for note in self.store.iter_mut() {
            let clamped = clamp_to_bounds(note.position(), card, size);
            if clamped != note.position() {
                note.set_position(clamped);
                actions.push(Action::NoteMoved { id: note.id, x: clamped.x, y: clamped.y });
            }
        }
        actions
    }

    // --- Creation ---

    /// Append a note with a random position and palette color.
    pub fn add_note<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: u64) -> Action {
        let pos = Point::new(
            rng.random_range(SPAWN_MIN_X..SPAWN_MIN_X + SPAWN_RANGE_X),
            rng.random_range(SPAWN_MIN_Y..SPAWN_MIN_Y + SPAWN_RANGE_Y),
        );
        let color = Color::random(rng);
        let note = self.create(NEW_NOTE_TEXT.to_owned(), pos, color, now_ms);
        Action::NoteCreated(note)
    }

    /// Place the starter notes on an empty board. Does nothing when the board
    /// already has notes.
    pub fn seed_welcome_notes(&mut self, now_ms: u64) -> Vec<Action> {
        if !self.store.is_empty() {
            return Vec::new();
        }
        WELCOME_NOTES
            .iter()
            .zip(Color::ALL)
            .map(|(&(text, x, y), color)| {
                Action::NoteCreated(self.create(text.to_owned(), Point::new(x, y), color, now_ms))
            })
            .collect()
    }

    fn create(&mut self, text: String, pos: Point, color: Color, now_ms: u64) -> Note {
        let pos = self.clamp(pos);
        let note = Note { id: self.next_id(now_ms), text, x: pos.x, y: pos.y, color };
        self.store.push(note.clone());
        note
    }

    /// Timestamp-derived id, bumped past the last issued id when the clock
    /// has not advanced. The bump wraps at `u64::MAX`.
    fn next_id(&mut self, now_ms: u64) -> NoteId {
        let id = match self.last_id {
            Some(last) if now_ms <= last => last.wrapping_add(1),
            _ => now_ms,
        };
        self.last_id = Some(id);
        id
    }

    // --- Drag ---

    /// Grab a note. `grab_offset` is the pointer position inside the card.
    ///
    /// Ignored while the note is being edited or while another pointer
    /// already holds a drag.
    pub fn on_pointer_down(&mut self, id: NoteId, pointer: PointerId, grab_offset: Point) -> Action {
        if self.store.get(id).is_none() || self.drag.is_some() {
            return Action::None;
        }
        if self.edit.as_ref().is_some_and(|e| e.id == id) {
            return Action::None;
        }
        self.drag = Some(DragState { id, pointer, grab_offset });
        Action::DragStarted { id }
    }

    /// Follow the grabbing pointer. `board_point` is the pointer position
    /// relative to the board's top-left corner.
    pub fn on_pointer_move(&mut self, pointer: PointerId, board_point: Point) -> Action {
        let Some(drag) = self.drag else {
            return Action::None;
        };
        if drag.pointer != pointer {
            return Action::None;
        }
        let pos = self.clamp(board_point - drag.grab_offset);
        let Some(note) = self.store.get_mut(drag.id) else {
            self.drag = None;
            return Action::None;
        };
        if note.position() == pos {
            return Action::None;
        }
        note.set_position(pos);
        Action::NoteMoved { id: drag.id, x: pos.x, y: pos.y }
    }

    /// Release the drag target if `pointer` holds it.
    pub fn on_pointer_up(&mut self, pointer: PointerId) -> Action {
        match self.drag {
            Some(drag) if drag.pointer == pointer => self.release(),
            _ => Action::None,
        }
    }

    /// The pointer left the board: release whatever is grabbed.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.release()
    }

    fn release(&mut self) -> Action {
        match self.drag.take() {
            Some(drag) => Action::DragEnded { id: drag.id },
            None => Action::None,
        }
    }

    // --- Edit ---

    /// Open the editor on a note, seeding the buffer with its text.
    ///
    /// Ends a drag on the same note. An editor open on a different note is
    /// discarded without touching that note's text.
    pub fn enter_edit(&mut self, id: NoteId) -> Action {
        let Some(note) = self.store.get(id) else {
            return Action::None;
        };
        let buffer = note.text.clone();
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        self.edit = Some(EditState { id, buffer });
        Action::EditStarted { id }
    }

    /// Replace the edit buffer with the text input's current value.
    pub fn set_edit_buffer(&mut self, text: String) {
        if let Some(edit) = self.edit.as_mut() {
            edit.buffer = text;
        }
    }

    /// Write the buffer back to the note verbatim and close the editor.
    pub fn commit_edit(&mut self) -> Action {
        let Some(edit) = self.edit.take() else {
            return Action::None;
        };
        let Some(note) = self.store.get_mut(edit.id) else {
            return Action::None;
        };
        note.text.clone_from(&edit.buffer);
        Action::NoteTextChanged { id: edit.id, text: edit.buffer }
    }

    /// Close the editor without changing the note.
    pub fn cancel_edit(&mut self) -> Action {
        match self.edit.take() {
            Some(edit) => Action::EditCancelled { id: edit.id },
            None => Action::None,
        }
    }

    // --- Color / delete ---

    /// Advance a note to the next palette entry.
    pub fn cycle_color(&mut self, id: NoteId) -> Action {
        let Some(note) = self.store.get_mut(id) else {
            return Action::None;
        };
        note.color = note.color.next();
        Action::NoteColorChanged { id, color: note.color }
    }

    /// Remove a note, dropping any drag or edit that targeted it.
    pub fn delete(&mut self, id: NoteId) -> Action {
        if self.store.remove(id).is_none() {
            return Action::None;
        }
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        if self.edit.as_ref().is_some_and(|e| e.id == id) {
            self.edit = None;
        }
        Action::NoteDeleted { id }
    }

    // --- Queries ---

    /// All notes in paint order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.store.as_slice()
    }

    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.store.get(id)
    }

    #[must_use]
    pub fn note_state(&self, id: NoteId) -> NoteState {
        note_state(id, self.drag.as_ref(), self.edit.as_ref())
    }

    /// The note currently bound to pointer-move updates.
    #[must_use]
    pub fn drag_target(&self) -> Option<NoteId> {
        self.drag.map(|d| d.id)
    }

    /// The note whose editor is open and its uncommitted text.
    #[must_use]
    pub fn editing(&self) -> Option<(NoteId, &str)> {
        self.edit.as_ref().map(|e| (e.id, e.buffer.as_str()))
    }

    #[must_use]
    pub fn board_size(&self) -> Option<Size> {
        self.board_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn clamp(&self, pos: Point) -> Point {
        match self.board_size {
            Some(board) => clamp_to_bounds(pos, self.card_size, board),
            None => pos,
        }
    }
}
