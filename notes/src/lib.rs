//! Board model and input engine for the sticky-notes board.
//!
//! This crate has no browser dependencies. The Leptos host in `client`
//! forwards DOM pointer events into [`engine::BoardCore`] and re-renders from
//! the resulting note list; everything that decides where a note goes, which
//! note is grabbed, and what an edit commits lives here so it can be tested
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Board engine and the [`engine::Action`]s it reports |
//! | [`note`] | Note type, ids, and the ordered note store |
//! | [`palette`] | The fixed six-color palette |
//! | [`geometry`] | Points, sizes, and bounds clamping |
//! | [`input`] | Per-note state and the interaction state machine |
//! | [`consts`] | Card size, spawn area, and default texts |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod note;
pub mod palette;
