//! Jungle Adventure — grid survival on a single reactive screen.
//!
//! The shell feeds each normalized input event here; it becomes at most one
//! [`Intent`](state::Intent), which `logic::apply_intent` runs to completion
//! before the next render reads the state snapshot.

pub mod actions;
pub mod logic;
pub mod render;
pub mod rng;
pub mod state;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use actions::*;
use rng::GameDice;
use state::{AnimCue, Direction, GameState, Intent, Mode};

pub struct JungleGame {
    state: GameState,
    dice: GameDice,
    /// One-shot animation cue: set when an intent produces one, consumed
    /// (taken) by the next render.
    anim: Cell<Option<AnimCue>>,
}

impl JungleGame {
    pub fn new(dice: GameDice) -> Self {
        Self {
            state: GameState::new(),
            dice,
            anim: Cell::new(None),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handle one input event. Returns true if it was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let intent = match event {
            InputEvent::Key(ch) => intent_for_key(&self.state, *ch),
            InputEvent::Click(id) => intent_for_click(&self.state, *id),
        };
        match intent {
            Some(intent) => {
                let cue = logic::apply_intent(&mut self.state, intent, &mut self.dice);
                if cue.is_some() {
                    self.anim.set(cue);
                }
                true
            }
            None => false,
        }
    }

    /// Surface a shell-level warning (e.g. a failed audio load) in the
    /// journal so the player actually sees it.
    pub fn log_warning(&mut self, message: &str) {
        self.state.add_log(message.to_string());
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, self.anim.take(), f, area, click_state);
    }
}

// ── Input → intent mapping ──────────────────────────────────

fn intent_for_key(state: &GameState, ch: char) -> Option<Intent> {
    if state.mode == Mode::GameOver {
        return match ch {
            'r' | 'R' => Some(Intent::Reset),
            _ => None,
        };
    }
    match state.mode {
        Mode::InCombat => match ch {
            '1' => Some(Intent::Attack),
            '2' => Some(Intent::Defend),
            '3' => Some(Intent::Flee),
            _ => audio_key(state, ch),
        },
        _ => match ch {
            'w' | 'W' | 'k' => Some(Intent::Move(Direction::North)),
            's' | 'S' | 'j' => Some(Intent::Move(Direction::South)),
            'a' | 'A' | 'h' => Some(Intent::Move(Direction::West)),
            'd' | 'D' | 'l' => Some(Intent::Move(Direction::East)),
            _ => audio_key(state, ch),
        },
    }
}

fn audio_key(state: &GameState, ch: char) -> Option<Intent> {
    match ch {
        'm' | 'M' => Some(Intent::ToggleAudio(!state.music_on)),
        _ => None,
    }
}

fn intent_for_click(state: &GameState, id: u16) -> Option<Intent> {
    if state.mode == Mode::GameOver {
        return (id == RESTART).then_some(Intent::Reset);
    }
    match id {
        MOVE_NORTH => Some(Intent::Move(Direction::North)),
        MOVE_SOUTH => Some(Intent::Move(Direction::South)),
        MOVE_WEST => Some(Intent::Move(Direction::West)),
        MOVE_EAST => Some(Intent::Move(Direction::East)),
        ATTACK => Some(Intent::Attack),
        DEFEND => Some(Intent::Defend),
        FLEE => Some(Intent::Flee),
        AUDIO_ON => Some(Intent::ToggleAudio(true)),
        AUDIO_OFF => Some(Intent::ToggleAudio(false)),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────
