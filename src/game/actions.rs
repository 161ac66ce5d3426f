//! Semantic action IDs for Jungle Adventure click targets.

// ── D-pad ──────────────────────────────────────────────────────
pub const MOVE_NORTH: u16 = 10;
pub const MOVE_SOUTH: u16 = 11;
pub const MOVE_WEST: u16 = 12;
pub const MOVE_EAST: u16 = 13;

// ── Combat ─────────────────────────────────────────────────────
pub const ATTACK: u16 = 20;
pub const DEFEND: u16 = 21;
pub const FLEE: u16 = 22;

// ── Audio toggle ───────────────────────────────────────────────
pub const AUDIO_ON: u16 = 30;
pub const AUDIO_OFF: u16 = 31;

// ── Game over ──────────────────────────────────────────────────
pub const RESTART: u16 = 40;
