//! Jungle Adventure game state — all data structures, no resolution logic.
//!
//! One in-memory session per page. Everything the presentation layer reads
//! lives here; all mutation goes through `logic::apply_intent`.

// ── Grid ──────────────────────────────────────────────────────

/// The world is a fixed 3×3 grid; both axes run 0..=GRID_MAX.
pub const GRID_MAX: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn dx(self) -> i32 {
        match self {
            Direction::West => -1,
            Direction::East => 1,
            _ => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            Direction::North => -1,
            Direction::South => 1,
            _ => 0,
        }
    }
}

// ── Player intents ────────────────────────────────────────────

/// A single player action. The shell maps each input event to at most one
/// intent, so "one intent per interaction cycle" holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Attack,
    Defend,
    Flee,
    ToggleAudio(bool),
    Reset,
}

/// Transient presentation hint for the cycle that produced it. Returned by
/// `apply_intent`, never stored in the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimCue {
    Attack,
    Defend,
    Win,
}

// ── Mode ──────────────────────────────────────────────────────

/// Top-level game phase. `GameOver` is absorbing: entered whenever hp ≤ 0
/// and left only through a full reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Exploring,
    InCombat,
    GameOver,
}

// ── Skills ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skill {
    Combat,
    Survival,
    Explore,
}

pub const ALL_SKILLS: [Skill; 3] = [Skill::Combat, Skill::Survival, Skill::Explore];

// ── Enemies ───────────────────────────────────────────────────

/// Fixed label set an encounter picks from, uniformly.
pub const ENEMY_NAMES: [&str; 3] = ["Venomous Snake", "Wild Boar", "Giant Spider"];

/// Enemy hp at spawn is uniform in [ENEMY_HP_MIN, ENEMY_HP_MAX].
pub const ENEMY_HP_MIN: i32 = 40;
pub const ENEMY_HP_MAX: i32 = 70;

/// Spawned on the combat encounter roll, discarded when combat ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub name: &'static str,
    pub hp: i32,
    pub max_hp: i32,
}

// ── Event log ─────────────────────────────────────────────────

/// Stored entries are capped; the read model surfaces the newest LOG_VISIBLE.
const LOG_CAP: usize = 30;
pub const LOG_VISIBLE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub day: u32,
    pub message: String,
}

// ── Session state ─────────────────────────────────────────────

pub struct GameState {
    pub hp: i32,
    pub max_hp: i32,
    /// Food and water may go negative; depletion has no direct penalty.
    pub food: i32,
    pub water: i32,
    pub gold: u32,
    pub day: u32,
    pub level: u32,
    pub exp: u32,
    pub skill_combat: u32,
    pub skill_survival: u32,
    pub skill_explore: u32,
    pub x: i32,
    pub y: i32,
    pub mode: Mode,
    pub enemy: Option<Enemy>,
    pub music_on: bool,
    /// Newest entry first.
    pub log: Vec<LogEntry>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            hp: 100,
            max_hp: 100,
            food: 60,
            water: 60,
            gold: 0,
            day: 1,
            level: 1,
            exp: 0,
            skill_combat: 0,
            skill_survival: 0,
            skill_explore: 0,
            x: 1,
            y: 1,
            mode: Mode::Exploring,
            enemy: None,
            music_on: false,
            log: Vec::new(),
        }
    }

    /// Reinitialize to session defaults. Music stays as the player set it.
    pub fn reset(&mut self) {
        let music_on = self.music_on;
        *self = GameState::new();
        self.music_on = music_on;
    }

    pub fn is_game_over(&self) -> bool {
        self.hp <= 0
    }

    /// Prepend a day-stamped entry (newest first) and trim storage.
    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.insert(
            0,
            LogEntry {
                day: self.day,
                message: message.into(),
            },
        );
        self.log.truncate(LOG_CAP);
    }

    /// The read model for the log panel: newest LOG_VISIBLE entries.
    pub fn recent_log(&self) -> &[LogEntry] {
        &self.log[..self.log.len().min(LOG_VISIBLE)]
    }

    /// Level up once exp crosses level×100. This is the only place hp may
    /// be raised to max_hp, which keeps hp ≤ max_hp everywhere.
    pub fn apply_level_up_if_eligible(&mut self) {
        if self.exp >= self.level * 100 {
            self.exp = 0;
            self.level += 1;
            self.max_hp += 20;
            self.hp = self.max_hp;
            self.add_log("LEVEL UP!");
        }
    }

    pub fn skill(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Combat => self.skill_combat,
            Skill::Survival => self.skill_survival,
            Skill::Explore => self.skill_explore,
        }
    }

    pub fn skill_mut(&mut self, skill: Skill) -> &mut u32 {
        match skill {
            Skill::Combat => &mut self.skill_combat,
            Skill::Survival => &mut self.skill_survival,
            Skill::Explore => &mut self.skill_explore,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────
