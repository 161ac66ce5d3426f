mod audio;
mod game;
mod input;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use audio::AudioPlayer;
use game::{rng::GameDice, JungleGame};
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(JungleGame::new(GameDice::from_clock())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let audio = Rc::new(RefCell::new(AudioPlayer::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        let audio = audio.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let action_id = cs.hit_test(mouse_event.col, mouse_event.row);
            drop(cs);

            if let Some(id) = action_id {
                let mut g = game.borrow_mut();
                if g.handle_input(&InputEvent::Click(id)) {
                    if let Some(warning) = audio.borrow_mut().sync(g.state().music_on) {
                        g.log_warning(warning);
                    }
                }
            }
        }
    })?;

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        let audio = audio.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                let mut g = game.borrow_mut();
                if g.handle_input(&InputEvent::Key(c)) {
                    if let Some(warning) = audio.borrow_mut().sync(g.state().music_on) {
                        g.log_warning(warning);
                    }
                }
            }
        }
    })?;

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();

            // Update terminal dimensions and clear click targets; render
            // re-registers targets for whatever is on screen this frame.
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            game.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
