//! Background music through a DOM `<audio>` element.
//!
//! The element is created lazily on the first toggle so a page load never
//! fetches the track for players who leave the music off. A missing or
//! unplayable `jungle.mp3` is not fatal: the game keeps running, a warning
//! goes to the browser console, and the first failure is handed back to the
//! caller so it can be shown on the page.

use web_sys::{console, HtmlAudioElement};

const TRACK: &str = "jungle.mp3";
const WARNING: &str = "Music unavailable, the jungle stays silent";

pub struct AudioPlayer {
    element: Option<HtmlAudioElement>,
    warned: bool,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            element: None,
            warned: false,
        }
    }

    /// Bring playback in line with the game's music flag. Returns a warning
    /// message the first time the track turns out to be unplayable; the
    /// caller is expected to surface it to the player.
    pub fn sync(&mut self, music_on: bool) -> Option<&'static str> {
        if music_on {
            self.play()
        } else {
            self.pause();
            None
        }
    }

    fn play(&mut self) -> Option<&'static str> {
        if self.element.is_none() {
            match HtmlAudioElement::new_with_src(TRACK) {
                Ok(el) => {
                    el.set_loop(true);
                    self.element = Some(el);
                }
                Err(_) => return self.warn_once(),
            }
        }
        if let Some(el) = &self.element {
            // play() yields a promise; a rejected load surfaces on the
            // element's error slot rather than here.
            if el.play().is_err() || el.error().is_some() {
                return self.warn_once();
            }
        }
        None
    }

    fn pause(&mut self) {
        if let Some(el) = &self.element {
            let _ = el.pause();
        }
    }

    fn warn_once(&mut self) -> Option<&'static str> {
        let warning = self.first_failure();
        if warning.is_some() {
            console::warn_1(&format!("{TRACK} unavailable, continuing without music").into());
        }
        warning
    }

    /// First failure returns the player-facing warning; repeats are silent.
    fn first_failure(&mut self) -> Option<&'static str> {
        if self.warned {
            return None;
        }
        self.warned = true;
        Some(WARNING)
    }
}
