//! The board surface that hosts every note card.
//!
//! ARCHITECTURE
//! ============
//! Cards only start drags. Pointer move, up, cancel and leave are handled
//! here on the container so a fast pointer that outruns its card keeps
//! driving the drag, and leaving the board releases it.
//!
//! The board measures itself after mount and on every window resize so the
//! engine can clamp notes to the visible area.

use leptos::prelude::*;
use notes::note::NoteId;

use crate::components::note_card::NoteCard;
use crate::state::board::BoardState;

/// Free-form surface that renders notes in paint order.
#[component]
pub fn BoardView() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let board_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(el) = board_ref.get_untracked() else {
                return;
            };
            let size = crate::util::pointer::element_size(&el);
            board.update(|b| {
                b.resize(size);
            });
        };

        Effect::new(move || {
            if board_ref.get().is_some() {
                measure();
            }
        });

        let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || resize_handle.remove());
    }

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if board.with_untracked(|b| b.core().drag_target().is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = board_ref.get_untracked() else {
                return;
            };
            let at = crate::util::pointer::point_in(&ev, &el);
            let pointer = ev.pointer_id();
            board.update(|b| {
                b.dispatch(|core| core.on_pointer_move(pointer, at));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let pointer = ev.pointer_id();
        board.update(|b| {
            b.dispatch(|core| core.on_pointer_up(pointer));
        });
    };

    let on_pointer_leave = move |_: leptos::ev::PointerEvent| {
        board.update(|b| {
            b.dispatch(notes::engine::BoardCore::on_pointer_leave);
        });
    };

    let note_ids = move || board.with(|b| b.core().notes().iter().map(|n| n.id).collect::<Vec<NoteId>>());

    view! {
        <div
            class="board"
            node_ref=board_ref
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            <For
                each=note_ids
                key=|id| *id
                children=move |id| view! { <NoteCard id=id/> }
            />
        </div>
    }
}
