//! Shared numeric and text constants for the notes crate.

// ── Card ────────────────────────────────────────────────────────

/// Card width in CSS pixels, used for bounds clamping.
pub const CARD_WIDTH: f64 = 200.0;

/// Card height in CSS pixels, used for bounds clamping.
pub const CARD_HEIGHT: f64 = 200.0;

// ── Spawn area ──────────────────────────────────────────────────

/// Smallest x offset a freshly added note can spawn at.
pub const SPAWN_MIN_X: f64 = 50.0;

/// Width of the horizontal spawn range, starting at [`SPAWN_MIN_X`].
pub const SPAWN_RANGE_X: f64 = 400.0;

/// Smallest y offset a freshly added note can spawn at.
pub const SPAWN_MIN_Y: f64 = 50.0;

/// Height of the vertical spawn range, starting at [`SPAWN_MIN_Y`].
pub const SPAWN_RANGE_Y: f64 = 300.0;

// ── Text ────────────────────────────────────────────────────────

/// Text given to notes created with the add button.
pub const NEW_NOTE_TEXT: &str = "New sticky note";

/// Starter notes placed on an empty board: `(text, x, y)`.
pub const WELCOME_NOTES: [(&str, f64, f64); 3] = [
    ("Welcome! 👋", 50.0, 50.0),
    ("Double-click to edit", 300.0, 100.0),
    ("Drag and drop to move", 150.0, 250.0),
];
