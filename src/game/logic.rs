//! Jungle Adventure — pure game logic (no rendering / IO).
//!
//! `apply_intent` is the single transition function: the shell hands it one
//! player intent per interaction cycle and it runs fully to completion,
//! including chained effects (enemy counterattack, level-up, game-over).
//! All randomness goes through the injected [`Dice`].

use super::rng::Dice;
use super::state::{
    AnimCue, Direction, Enemy, GameState, Intent, Mode, ALL_SKILLS, ENEMY_HP_MAX, ENEMY_HP_MIN,
    ENEMY_NAMES, GRID_MAX,
};

// ── Intent dispatch ──────────────────────────────────────────

/// Apply one player intent. Returns the one-shot animation cue for the
/// presentation layer, if the action produced one.
///
/// `GameOver` absorbs everything except `Reset`; intents that do not fit
/// the current mode are silent no-ops.
pub fn apply_intent(state: &mut GameState, intent: Intent, dice: &mut impl Dice) -> Option<AnimCue> {
    if state.mode == Mode::GameOver && intent != Intent::Reset {
        return None;
    }

    let cue = match intent {
        Intent::Reset => {
            state.reset();
            None
        }
        Intent::ToggleAudio(on) => {
            state.music_on = on;
            None
        }
        Intent::Move(dir) => {
            try_move(state, dir, dice);
            None
        }
        Intent::Attack | Intent::Defend | Intent::Flee => {
            resolve_combat_action(state, intent, dice)
        }
    };

    state.apply_level_up_if_eligible();
    if state.is_game_over() {
        state.mode = Mode::GameOver;
    }
    cue
}

// ── Movement & day advancement ───────────────────────────────

fn in_bounds(v: i32) -> bool {
    (0..=GRID_MAX).contains(&v)
}

/// Move one cell. Out-of-bounds moves and moves outside exploration are
/// rejected silently: no log entry, no resource cost.
fn try_move(state: &mut GameState, dir: Direction, dice: &mut impl Dice) {
    if state.mode != Mode::Exploring {
        return;
    }
    let nx = state.x + dir.dx();
    let ny = state.y + dir.dy();
    if !in_bounds(nx) || !in_bounds(ny) {
        return;
    }
    state.x = nx;
    state.y = ny;
    advance_day(state);
    explore(state, dice);
}

/// Each travelled cell costs a day and rations. Food and water may go
/// negative; running out carries no penalty of its own.
fn advance_day(state: &mut GameState) {
    state.day += 1;
    state.food -= 5;
    state.water -= 5;
}

// ── Encounter engine ─────────────────────────────────────────

/// One exploration event per successful move. The roll bands are contract
/// values: 1-30 combat, 31-55 gold, 56-70 skill, 71-100 nothing.
fn explore(state: &mut GameState, dice: &mut impl Dice) {
    let r = dice.roll(1, 100);
    if r <= 30 {
        start_combat(state, dice);
    } else if r <= 55 {
        let g = dice.roll(15, 40);
        state.gold += g as u32;
        state.add_log(format!("Found {g} gold"));
    } else if r <= 70 {
        let skill = ALL_SKILLS[dice.pick(ALL_SKILLS.len())];
        *state.skill_mut(skill) += 1;
        state.add_log("Learned a new skill");
    } else {
        state.add_log("The forest is quiet");
    }
}

fn start_combat(state: &mut GameState, dice: &mut impl Dice) {
    let name = ENEMY_NAMES[dice.pick(ENEMY_NAMES.len())];
    let max_hp = dice.roll(ENEMY_HP_MIN, ENEMY_HP_MAX);
    state.enemy = Some(Enemy {
        name,
        hp: max_hp,
        max_hp,
    });
    state.mode = Mode::InCombat;
    state.add_log(format!("You run into a {name}!"));
}

// ── Combat resolver ──────────────────────────────────────────

/// Resolve one combat turn: the player's action, then — unless the player
/// already slipped away — the enemy's counterattack, then the victory check.
fn resolve_combat_action(
    state: &mut GameState,
    intent: Intent,
    dice: &mut impl Dice,
) -> Option<AnimCue> {
    if state.mode != Mode::InCombat {
        return None;
    }
    let name = match &state.enemy {
        Some(e) => e.name,
        None => return None,
    };

    let mut cue = None;
    let mut fled = false;
    match intent {
        Intent::Attack => {
            let dmg = dice.roll(15, 30) + state.skill_combat as i32 * 4;
            if let Some(e) = state.enemy.as_mut() {
                e.hp -= dmg;
            }
            cue = Some(AnimCue::Attack);
            state.add_log(format!("You hit the {name} (-{dmg})"));
        }
        Intent::Defend => {
            // Bracing costs a little hp; it is not enemy damage.
            let dmg = dice.roll(5, 10);
            state.hp -= dmg;
            cue = Some(AnimCue::Defend);
            state.add_log("You defend");
        }
        Intent::Flee => {
            if dice.roll(1, 100) <= 50 {
                state.mode = Mode::Exploring;
                state.enemy = None;
                state.add_log("You got away!");
                fled = true;
            } else {
                let dmg = dice.roll(10, 15);
                state.hp -= dmg;
                state.add_log("Couldn't get away!");
            }
        }
        Intent::Move(_) | Intent::ToggleAudio(_) | Intent::Reset => return None,
    }

    // A successful flee skips the counterattack entirely.
    if !fled && state.enemy.as_ref().is_some_and(|e| e.hp > 0) {
        let dmg = dice.roll(8, 18);
        state.hp -= dmg;
        state.add_log(format!("The {name} counterattacks (-{dmg})"));
    }

    if state.enemy.as_ref().is_some_and(|e| e.hp <= 0) {
        state.gold += 30;
        state.exp += 25;
        state.enemy = None;
        state.mode = Mode::Exploring;
        state.add_log("Victory!");
        cue = Some(AnimCue::Win);
    }
    cue
}

// ── Tests ────────────────────────────────────────────────────
