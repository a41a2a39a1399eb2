//! Top bar with the board title, usage hint, note count and add button.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::util::clock;

/// Header bar above the board.
#[component]
pub fn Header() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let count_label = move || note_count_label(board.with(|b| b.core().len()));

    let on_add = move |_| {
        board.update(|b| {
            b.add_note(clock::now_ms());
        });
    };

    view! {
        <header class="header">
            <div class="header__titles">
                <h1 class="header__title">"📌 Sticky Notes"</h1>
                <p class="header__hint">"Double-click to edit • Drag and drop to move"</p>
            </div>
            <span class="header__spacer"></span>
            <span class="header__count">{count_label}</span>
            <button class="btn btn--primary header__add" on:click=on_add title="Add a sticky note">
                "+ New sticky note"
            </button>
        </header>
    }
}

fn note_count_label(count: usize) -> String {
    match count {
        0 => "No notes".to_owned(),
        1 => "1 note".to_owned(),
        n => format!("{n} notes"),
    }
}
