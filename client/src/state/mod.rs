//! Shared client-side state.

pub mod board;
