//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<BoardState>` from Leptos
//! context; none of them hold note data of their own.

pub mod board_view;
pub mod header;
pub mod note_card;
