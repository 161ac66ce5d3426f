//! Jungle Adventure rendering — one screen that changes with the mode.
//!
//! Layout: title + status card + mode content (map/combat/death screen) +
//! log + help bar. Every `[X]` button line registers a click target.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::state::{AnimCue, GameState, Mode, GRID_MAX};

pub fn render(
    state: &GameState,
    anim: Option<AnimCue>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let main_chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(state, f, main_chunks[0]);

    if is_narrow_layout(area.width) {
        render_narrow(state, anim, f, main_chunks[1], click_state);
    } else {
        render_wide(state, anim, f, main_chunks[1], click_state);
    }

    render_help(state, f, main_chunks[2], click_state);
}

// ── Layout variants ─────────────────────────────────────────

/// Wide: left column (status + mode content) | right column (log).
fn render_wide(
    state: &GameState,
    anim: Option<AnimCue>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let cols = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(cols[0]);

    render_status(state, f, left[0]);
    render_mode_content(state, anim, f, left[1], click_state);
    render_log(state, f, cols[1]);
}

/// Narrow: status, mode content, log stacked vertically.
fn render_narrow(
    state: &GameState,
    anim: Option<AnimCue>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    render_status(state, f, chunks[0]);
    render_mode_content(state, anim, f, chunks[1], click_state);
    render_log(state, f, chunks[2]);
}

fn render_mode_content(
    state: &GameState,
    anim: Option<AnimCue>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.mode {
        Mode::GameOver => render_game_over(state, f, area, click_state),
        Mode::InCombat => render_combat(state, anim, f, area, click_state),
        Mode::Exploring => render_explore(state, f, area, click_state),
    }
}

// ── Pieces ──────────────────────────────────────────────────

fn render_title(state: &GameState, f: &mut Frame, area: Rect) {
    let (title, color) = if state.mode == Mode::GameOver {
        ("You died in the Amazon jungle", Color::Red)
    } else {
        ("Amazon Jungle Adventure", Color::Green)
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(ratzilla::ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}

fn hp_bar(current: i32, max: i32, width: usize) -> (String, Color) {
    let ratio = if max > 0 {
        (current.max(0) as f64 / max as f64).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    let bar = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(empty);
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    (bar, color)
}

fn render_status(state: &GameState, f: &mut Frame, area: Rect) {
    let (bar, bar_color) = hp_bar(state.hp, state.max_hp, 10);
    let lines = vec![
        Line::from(vec![
            Span::styled(" HP ", Style::default().fg(Color::Gray)),
            Span::styled(bar, Style::default().fg(bar_color)),
            Span::styled(
                format!(" {}/{}", state.hp.max(0), state.max_hp),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  Lv.{}", state.level),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" EXP {}", state.exp),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" Food {}  Water {}", state.food, state.water),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("  Gold {}", state.gold),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  Day {}", state.day),
                Style::default().fg(Color::White),
            ),
        ]),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Status "),
    );
    f.render_widget(widget, area);
}

/// The 3×3 map plus the movement pad.
fn render_explore(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    for y in 0..=GRID_MAX {
        let mut spans = vec![Span::raw("   ")];
        for x in 0..=GRID_MAX {
            if (x, y) == (state.x, state.y) {
                spans.push(Span::styled(
                    " @ ",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(" ^ ", Style::default().fg(Color::Green)));
            }
        }
        cl.push(Line::from(spans));
    }

    cl.push(Line::from(""));
    push_choice(&mut cl, 'W', "North", MOVE_NORTH);
    push_choice(&mut cl, 'A', "West", MOVE_WEST);
    push_choice(&mut cl, 'D', "East", MOVE_EAST);
    push_choice(&mut cl, 'S', "South", MOVE_SOUTH);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Jungle ");

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_combat(
    state: &GameState,
    anim: Option<AnimCue>,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let border_color = match anim {
        Some(AnimCue::Attack) => Color::Red,
        Some(AnimCue::Defend) => Color::Green,
        Some(AnimCue::Win) => Color::Yellow,
        None => Color::DarkGray,
    };

    let mut cl = ClickableList::new();

    if let Some(enemy) = &state.enemy {
        let (ebar, ecolor) = hp_bar(enemy.hp, enemy.max_hp, 12);
        cl.push(Line::from(vec![
            Span::styled(
                format!(" {} ", enemy.name),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(ebar, Style::default().fg(ecolor)),
            Span::styled(
                format!(" {}/{}", enemy.hp.max(0), enemy.max_hp),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let (pbar, pcolor) = hp_bar(state.hp, state.max_hp, 12);
    cl.push(Line::from(vec![
        Span::styled(" You ", Style::default().fg(Color::Cyan)),
        Span::styled(pbar, Style::default().fg(pcolor)),
        Span::styled(
            format!(" {}/{}", state.hp.max(0), state.max_hp),
            Style::default().fg(Color::White),
        ),
    ]));

    cl.push(Line::from(""));
    push_choice(&mut cl, '1', "Attack", ATTACK);
    push_choice(&mut cl, '2', "Defend", DEFEND);
    push_choice(&mut cl, '3', "Flee", FLEE);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Combat! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_game_over(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" You survived {} days.", state.day),
        Style::default().fg(Color::White),
    )));
    cl.push(Line::from(Span::styled(
        format!(" Level {}  Gold {}", state.level, state.gold),
        Style::default().fg(Color::Yellow),
    )));
    cl.push(Line::from(""));
    push_choice(&mut cl, 'R', "Play again", RESTART);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" The jungle claims you ");

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_log(state: &GameState, f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = state
        .recent_log()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!(" Day {}: ", entry.day),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Journal "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Audio toggle lives in the help bar so it is reachable in every mode
/// except game over, where only restart is offered.
fn render_help(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    if state.mode == Mode::GameOver {
        push_choice(&mut cl, 'R', "Play again", RESTART);
    } else if state.music_on {
        push_choice(&mut cl, 'M', "Music off", AUDIO_OFF);
    } else {
        push_choice(&mut cl, 'M', "Music on", AUDIO_ON);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

/// A clickable `[K] Label` choice line.
fn push_choice(cl: &mut ClickableList<'_>, key: char, label: &str, action_id: u16) {
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                format!(" [{key}] "),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), Style::default().fg(Color::White)),
        ]),
        action_id,
    );
}
