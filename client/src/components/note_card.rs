//! A single sticky-note card.
//!
//! The card shows the note text, or an editor while the note is being
//! edited. Pointer-down on the card body starts a drag; double-click opens
//! the editor. The swatch, delete button and editor controls carry
//! `CONTROL_SELECTOR` so they never start a drag or reopen the editor.

#[cfg(test)]
#[path = "note_card_test.rs"]
mod note_card_test;

use leptos::prelude::*;
use notes::consts::{CARD_HEIGHT, CARD_WIDTH};
use notes::input::NoteState;
use notes::note::{Note, NoteId};

use crate::state::board::BoardState;
use crate::util::pointer::{CONTROL_SELECTOR, event_hits};

/// Absolute-positioned note card bound to one note id.
#[component]
pub fn NoteCard(id: NoteId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let card_ref = NodeRef::<leptos::html::Div>::new();

    let note = Memo::new(move |_| board.with(|b| b.core().note(id).cloned()));
    let state = Memo::new(move |_| board.with(|b| b.core().note_state(id)));
    let buffer = Memo::new(move |_| {
        board.with(|b| {
            b.core()
                .editing()
                .filter(|(editing, _)| *editing == id)
                .map(|(_, text)| text.to_owned())
                .unwrap_or_default()
        })
    });

    let style = move || note.get().as_ref().map(card_style).unwrap_or_default();
    let text = move || note.get().map(|n| n.text).unwrap_or_default();
    let color = move || note.get().as_ref().map_or("", color_name);
    let next_color = move || note.get().as_ref().map_or("", next_color_name);
    let is_dragging = move || state.get() == NoteState::Dragging;
    let is_editing = move || state.get() == NoteState::Editing;

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 || event_hits(&ev, CONTROL_SELECTOR) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = card_ref.get_untracked() else {
                return;
            };
            let grab = crate::util::pointer::point_in(&ev, &el);
            let pointer = ev.pointer_id();
            board.update(|b| {
                b.dispatch(|core| core.on_pointer_down(id, pointer, grab));
            });
        }
    };

    let on_double_click = move |ev: leptos::ev::MouseEvent| {
        if event_hits(&ev, CONTROL_SELECTOR) {
            return;
        }
        board.update(|b| {
            b.dispatch(|core| core.enter_edit(id));
        });
    };

    let on_cycle_color = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        board.update(|b| {
            b.dispatch(|core| core.cycle_color(id));
        });
    };

    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        board.update(|b| {
            b.dispatch(|core| core.delete(id));
        });
    };

    let on_save = move |_| {
        board.update(|b| {
            b.dispatch(notes::engine::BoardCore::commit_edit);
        });
    };

    let on_cancel = move |_| {
        board.update(|b| {
            b.dispatch(notes::engine::BoardCore::cancel_edit);
        });
    };

    view! {
        <div
            class="note-card"
            class:note-card--dragging=is_dragging
            class:note-card--editing=is_editing
            style=style
            data-color=color
            node_ref=card_ref
            on:pointerdown=on_pointer_down
            on:dblclick=on_double_click
        >
            <div class="note-card__header">
                <button
                    class="note-card__swatch note-card__control"
                    data-color=next_color
                    on:click=on_cycle_color
                    title="Change color"
                    aria-label="Change color"
                ></button>
                <button
                    class="note-card__delete note-card__control"
                    on:click=on_delete
                    title="Delete note"
                    aria-label="Delete note"
                >
                    "✕"
                </button>
            </div>
            <Show
                when=is_editing
                fallback=move || view! { <p class="note-card__text">{text}</p> }
            >
                <div class="note-card__editor">
                    <textarea
                        class="note-card__textarea note-card__control"
                        prop:value=move || buffer.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            board.update(|b| b.set_edit_buffer(value));
                        }
                        autofocus=true
                    ></textarea>
                    <div class="note-card__actions">
                        <button class="btn btn--save note-card__control" on:click=on_save>
                            "Save"
                        </button>
                        <button class="btn btn--cancel note-card__control" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn card_style(note: &Note) -> String {
    format!(
        "left: {}px; top: {}px; width: {CARD_WIDTH}px; height: {CARD_HEIGHT}px; background: {}; border-color: {};",
        note.x,
        note.y,
        note.color.fill(),
        note.color.border(),
    )
}

fn color_name(note: &Note) -> &'static str {
    note.color.name()
}

/// Color the swatch previews: the one a click switches to.
fn next_color_name(note: &Note) -> &'static str {
    note.color.next().name()
}
