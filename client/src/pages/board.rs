//! Board page: header bar above the note surface.

use leptos::prelude::*;

use crate::components::board_view::BoardView;
use crate::components::header::Header;

/// The only route: header plus the full-height board.
#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <div class="board-page">
            <Header/>
            <BoardView/>
        </div>
    }
}
