#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

fn board_800x600() -> BoardCore {
    BoardCore::with_board_size(Size::new(800.0, 600.0))
}

/// Board holding a single note at `(x, y)`; returns the board and the note id.
fn board_with_note_at(x: f64, y: f64) -> (BoardCore, NoteId) {
    let mut core = board_800x600();
    let Action::NoteCreated(note) = core.add_note(&mut rng(), 1) else {
        panic!("add_note should create a note");
    };
    core.store.get_mut(note.id).unwrap().set_position(Point::new(x, y));
    (core, note.id)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn core_new_is_empty_and_unmeasured() {
    let core = BoardCore::new();
    assert!(core.is_empty());
    assert!(core.board_size().is_none());
    assert!(core.drag_target().is_none());
    assert!(core.editing().is_none());
}

// =============================================================
// add_note
// =============================================================

#[test]
fn add_note_grows_collection_by_one() {
    let mut core = board_800x600();
    let mut rng = rng();
    for expected in 1..=5 {
        core.add_note(&mut rng, 1_000 + expected as u64);
        assert_eq!(core.len(), expected);
    }
}

#[test]
fn add_note_uses_default_text_and_timestamp_id() {
    let mut core = board_800x600();
    let action = core.add_note(&mut rng(), 1_700_000_000_000);
    let Action::NoteCreated(note) = action else {
        panic!("expected NoteCreated, got {action:?}");
    };
    assert_eq!(note.id, 1_700_000_000_000);
    assert_eq!(note.text, NEW_NOTE_TEXT);
    assert_eq!(core.notes().last(), Some(&note));
}

#[test]
fn add_note_ids_unique_with_stalled_clock() {
    let mut core = board_800x600();
    let mut rng = rng();
    for _ in 0..50 {
        core.add_note(&mut rng, 500);
    }
    let ids: HashSet<NoteId> = core.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn add_note_ids_unique_when_clock_goes_backwards() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 900);
    core.add_note(&mut rng, 100);
    let ids: Vec<NoteId> = core.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![900, 901]);
}

#[test]
fn add_note_at_clock_ceiling_does_not_overflow() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, u64::MAX);
    core.add_note(&mut rng, u64::MAX);
    let ids: Vec<NoteId> = core.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![u64::MAX, 0]);
}

#[test]
fn add_note_spawns_inside_spawn_area() {
    let mut core = BoardCore::with_board_size(Size::new(2000.0, 2000.0));
    let mut rng = rng();
    for i in 0..200 {
        core.add_note(&mut rng, i);
    }
    for note in core.notes() {
        assert!((SPAWN_MIN_X..SPAWN_MIN_X + SPAWN_RANGE_X).contains(&note.x));
        assert!((SPAWN_MIN_Y..SPAWN_MIN_Y + SPAWN_RANGE_Y).contains(&note.y));
    }
}

#[test]
fn add_note_on_small_board_is_clamped() {
    let mut core = BoardCore::with_board_size(Size::new(300.0, 250.0));
    let mut rng = rng();
    for i in 0..100 {
        core.add_note(&mut rng, i);
    }
    for note in core.notes() {
        assert!(note.x >= 0.0 && note.x <= 100.0, "x out of bounds: {}", note.x);
        assert!(note.y >= 0.0 && note.y <= 50.0, "y out of bounds: {}", note.y);
    }
}

// =============================================================
// seed_welcome_notes
// =============================================================

#[test]
fn seed_places_three_starter_notes() {
    let mut core = board_800x600();
    let actions = core.seed_welcome_notes(10);
    assert_eq!(actions.len(), 3);
    assert_eq!(core.len(), 3);
    let first = &core.notes()[0];
    assert_eq!((first.x, first.y, first.color), (50.0, 50.0, Color::Yellow));
    assert_eq!(core.notes()[1].color, Color::Pink);
    assert_eq!(core.notes()[2].color, Color::Blue);
}

#[test]
fn seed_is_noop_on_non_empty_board() {
    let mut core = board_800x600();
    core.add_note(&mut rng(), 1);
    assert!(core.seed_welcome_notes(2).is_empty());
    assert_eq!(core.len(), 1);
}

// =============================================================
// set_board_size
// =============================================================

#[test]
fn shrinking_board_reclamps_notes() {
    let (mut core, id) = board_with_note_at(500.0, 350.0);
    let actions = core.set_board_size(Size::new(400.0, 300.0));
    assert_eq!(actions, vec![Action::NoteMoved { id, x: 200.0, y: 100.0 }]);
    assert_eq!(core.note(id).unwrap().position(), pt(200.0, 100.0));
}

#[test]
fn growing_board_moves_nothing() {
    let (mut core, _) = board_with_note_at(500.0, 350.0);
    assert!(core.set_board_size(Size::new(1600.0, 1200.0)).is_empty());
}

#[test]
fn unmeasured_board_does_not_clamp() {
    let mut core = BoardCore::new();
    core.seed_welcome_notes(1);
    assert_eq!(core.notes()[1].position(), pt(300.0, 100.0));
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_far_corner_clamps_to_bounds() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(0.0, 0.0));
    let action = core.on_pointer_move(1, pt(10_000.0, 10_000.0));
    assert_eq!(action, Action::NoteMoved { id, x: 600.0, y: 400.0 });
    assert_eq!(core.note(id).unwrap().position(), pt(600.0, 400.0));
}

#[test]
fn drag_applies_grab_offset() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(20.0, 30.0));
    core.on_pointer_move(1, pt(220.0, 180.0));
    assert_eq!(core.note(id).unwrap().position(), pt(200.0, 150.0));
}

#[test]
fn drag_negative_clamps_to_zero() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(100.0, 100.0));
    core.on_pointer_move(1, pt(10.0, -40.0));
    assert_eq!(core.note(id).unwrap().position(), pt(0.0, 0.0));
}

#[test]
fn drag_never_leaves_bounds() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(15.0, 15.0));
    let path = [(-500.0, 30.0), (900.0, 900.0), (400.0, -3.0), (805.0, 250.0), (-1.0, 601.0)];
    for (x, y) in path {
        core.on_pointer_move(1, pt(x, y));
        let note = core.note(id).unwrap();
        assert!((0.0..=600.0).contains(&note.x), "x out of bounds: {}", note.x);
        assert!((0.0..=400.0).contains(&note.y), "y out of bounds: {}", note.y);
    }
}

#[test]
fn last_move_wins() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(0.0, 0.0));
    core.on_pointer_move(1, pt(100.0, 100.0));
    core.on_pointer_move(1, pt(300.0, 120.0));
    assert_eq!(core.note(id).unwrap().position(), pt(300.0, 120.0));
}

#[test]
fn move_without_drag_is_noop() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.on_pointer_move(1, pt(300.0, 300.0)), Action::None);
    assert_eq!(core.note(id).unwrap().position(), pt(50.0, 50.0));
}

#[test]
fn move_to_same_position_reports_nothing() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(0.0, 0.0));
    assert_eq!(core.on_pointer_move(1, pt(50.0, 50.0)), Action::None);
}

#[test]
fn pointer_up_releases_only_drag() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(0.0, 0.0));
    assert_eq!(core.note_state(id), NoteState::Dragging);
    assert_eq!(core.on_pointer_up(1), Action::DragEnded { id });
    assert_eq!(core.note_state(id), NoteState::Idle);
    assert_eq!(core.on_pointer_move(1, pt(300.0, 300.0)), Action::None);
    assert_eq!(core.note(id).unwrap().position(), pt(50.0, 50.0));
}

#[test]
fn pointer_up_without_drag_is_noop() {
    let (mut core, _) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.on_pointer_up(1), Action::None);
}

#[test]
fn pointer_leave_releases_drag() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 3, pt(0.0, 0.0));
    assert_eq!(core.on_pointer_leave(), Action::DragEnded { id });
    assert!(core.drag_target().is_none());
}

#[test]
fn pointer_down_unknown_note_is_noop() {
    let (mut core, _) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.on_pointer_down(999, 1, pt(0.0, 0.0)), Action::None);
    assert!(core.drag_target().is_none());
}

#[test]
fn second_pointer_cannot_steal_drag() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 1);
    core.add_note(&mut rng, 2);
    core.on_pointer_down(1, 10, pt(0.0, 0.0));
    assert_eq!(core.on_pointer_down(2, 11, pt(0.0, 0.0)), Action::None);
    assert_eq!(core.drag_target(), Some(1));
}

#[test]
fn moves_and_ups_from_other_pointer_are_ignored() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 10, pt(0.0, 0.0));
    assert_eq!(core.on_pointer_move(11, pt(400.0, 400.0)), Action::None);
    assert_eq!(core.on_pointer_up(11), Action::None);
    assert_eq!(core.drag_target(), Some(id));
    assert_eq!(core.note(id).unwrap().position(), pt(50.0, 50.0));
}

#[test]
fn pointer_down_while_editing_does_not_drag() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.enter_edit(id);
    assert_eq!(core.on_pointer_down(id, 1, pt(0.0, 0.0)), Action::None);
    assert_eq!(core.note_state(id), NoteState::Editing);
}

#[test]
fn can_drag_one_note_while_editing_another() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 1);
    core.add_note(&mut rng, 2);
    core.enter_edit(1);
    assert_eq!(core.on_pointer_down(2, 1, pt(0.0, 0.0)), Action::DragStarted { id: 2 });
    assert_eq!(core.note_state(1), NoteState::Editing);
    assert_eq!(core.note_state(2), NoteState::Dragging);
}

// =============================================================
// Edit
// =============================================================

#[test]
fn enter_edit_seeds_buffer_with_text() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.enter_edit(id), Action::EditStarted { id });
    assert_eq!(core.editing(), Some((id, NEW_NOTE_TEXT)));
}

#[test]
fn cancel_leaves_text_unchanged() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.enter_edit(id);
    core.set_edit_buffer("something else".into());
    assert_eq!(core.cancel_edit(), Action::EditCancelled { id });
    assert_eq!(core.note(id).unwrap().text, NEW_NOTE_TEXT);
    assert_eq!(core.note_state(id), NoteState::Idle);
}

#[test]
fn commit_replaces_text_exactly() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.enter_edit(id);
    let text = "  line one\nline two  \n".to_owned();
    core.set_edit_buffer(text.clone());
    assert_eq!(core.commit_edit(), Action::NoteTextChanged { id, text: text.clone() });
    assert_eq!(core.note(id).unwrap().text, text);
    assert!(core.editing().is_none());
}

#[test]
fn commit_empty_buffer_clears_text() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.enter_edit(id);
    core.set_edit_buffer(String::new());
    core.commit_edit();
    assert_eq!(core.note(id).unwrap().text, "");
}

#[test]
fn commit_and_cancel_without_editor_are_noops() {
    let (mut core, _) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.commit_edit(), Action::None);
    assert_eq!(core.cancel_edit(), Action::None);
}

#[test]
fn buffer_updates_without_editor_are_dropped() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.set_edit_buffer("ghost".into());
    assert!(core.editing().is_none());
    assert_eq!(core.note(id).unwrap().text, NEW_NOTE_TEXT);
}

#[test]
fn enter_edit_ends_drag_on_same_note() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    core.on_pointer_down(id, 1, pt(0.0, 0.0));
    core.enter_edit(id);
    assert!(core.drag_target().is_none());
    assert_eq!(core.note_state(id), NoteState::Editing);
}

#[test]
fn editing_another_note_discards_previous_buffer() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 1);
    core.add_note(&mut rng, 2);
    core.enter_edit(1);
    core.set_edit_buffer("unsaved".into());
    core.enter_edit(2);
    assert_eq!(core.editing(), Some((2, NEW_NOTE_TEXT)));
    assert_eq!(core.note(1).unwrap().text, NEW_NOTE_TEXT);
    assert_eq!(core.note_state(1), NoteState::Idle);
}

#[test]
fn enter_edit_unknown_note_is_noop() {
    let mut core = board_800x600();
    assert_eq!(core.enter_edit(7), Action::None);
    assert!(core.editing().is_none());
}

// =============================================================
// Color
// =============================================================

#[test]
fn cycle_color_advances_palette() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    let before = core.note(id).unwrap().color;
    assert_eq!(core.cycle_color(id), Action::NoteColorChanged { id, color: before.next() });
}

#[test]
fn cycle_color_palette_length_times_restores_color() {
    let (mut core, id) = board_with_note_at(50.0, 50.0);
    let before = core.note(id).unwrap().color;
    for _ in 0..Color::ALL.len() {
        core.cycle_color(id);
    }
    assert_eq!(core.note(id).unwrap().color, before);
}

#[test]
fn cycle_color_unknown_note_is_noop() {
    let mut core = board_800x600();
    assert_eq!(core.cycle_color(3), Action::None);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_exactly_that_note() {
    let mut core = board_800x600();
    let mut rng = rng();
    for t in 1..=4 {
        core.add_note(&mut rng, t);
    }
    assert_eq!(core.delete(2), Action::NoteDeleted { id: 2 });
    let ids: Vec<NoteId> = core.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn delete_unknown_note_is_noop() {
    let (mut core, _) = board_with_note_at(50.0, 50.0);
    assert_eq!(core.delete(12_345), Action::None);
    assert_eq!(core.len(), 1);
}

#[test]
fn delete_clears_drag_and_edit_on_that_note() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 1);
    core.add_note(&mut rng, 2);
    core.enter_edit(1);
    core.on_pointer_down(2, 1, pt(0.0, 0.0));
    core.delete(1);
    assert!(core.editing().is_none());
    assert_eq!(core.drag_target(), Some(2));
    core.delete(2);
    assert!(core.drag_target().is_none());
}

#[test]
fn deleted_ids_are_not_reissued() {
    let mut core = board_800x600();
    let mut rng = rng();
    core.add_note(&mut rng, 5);
    core.delete(5);
    let Action::NoteCreated(note) = core.add_note(&mut rng, 5) else {
        panic!("add_note should create a note");
    };
    assert_eq!(note.id, 6);
}
