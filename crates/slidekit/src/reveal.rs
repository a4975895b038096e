//! Typewriter-style text reveal.
//!
//! [`TextReveal`] types a message into a [`TextDisplay`] one character at
//! a time. It is usually paired with
//! [`TransitionController::show_with_message`](crate::TransitionController::show_with_message)
//! but has no dependency on it.

use crate::sequence::{TextDisplay, TimedSequence};
use crate::signal::{ListenerId, Signal};

#[derive(Debug, Clone)]
struct Reveal {
    chars: Vec<char>,
    typed: usize,
    timer: f32,
}

/// Reveals text into `D` at a fixed delay per character.
pub struct TextReveal<D: TextDisplay> {
    display: D,
    delay_per_character: f32,
    clear_on_start: bool,
    active: Option<Reveal>,
    on_start: Signal<()>,
    on_character: Signal<char>,
    on_complete: Signal<()>,
}

impl<D: TextDisplay> TextReveal<D> {
    /// Wrap `display`. A delay of zero or less reveals everything at once.
    #[must_use]
    pub fn new(display: D, delay_per_character: f32) -> Self {
        Self {
            display,
            delay_per_character,
            clear_on_start: true,
            active: None,
            on_start: Signal::new("on_reveal_start"),
            on_character: Signal::new("on_reveal_character"),
            on_complete: Signal::new("on_reveal_complete"),
        }
    }

    /// Whether [`start`](Self::start) clears the display first (default true)
    #[must_use]
    pub fn with_clear_on_start(mut self, clear: bool) -> Self {
        self.clear_on_start = clear;
        self
    }

    /// The display being written to
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Release the display
    pub fn into_display(self) -> D {
        self.display
    }

    /// Whether a reveal is in progress
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.active.is_some()
    }

    /// Listen for reveal start
    pub fn on_start(&mut self, listener: impl FnMut(&()) + 'static) -> ListenerId {
        self.on_start.subscribe(listener)
    }

    /// Listen for each typed character
    pub fn on_character(&mut self, listener: impl FnMut(&char) + 'static) -> ListenerId {
        self.on_character.subscribe(listener)
    }

    /// Listen for reveal completion
    pub fn on_complete(&mut self, listener: impl FnMut(&()) + 'static) -> ListenerId {
        self.on_complete.subscribe(listener)
    }

    /// Begin revealing `text`, abandoning any reveal already running.
    ///
    /// The first character appears immediately.
    pub fn start(&mut self, text: &str) {
        if let Some(previous) = self.active.take() {
            tracing::debug!(typed = previous.typed, "reveal restarted");
        }
        if self.clear_on_start {
            self.display.set_text("");
        }
        self.active = Some(Reveal {
            chars: text.chars().collect(),
            typed: 0,
            timer: 0.0,
        });
        self.on_start.emit(&());

        if text.is_empty() {
            self.complete();
            return;
        }
        self.type_next();
        self.tick(0.0);
    }

    /// Show the rest of the text now. No-op when nothing is revealing.
    pub fn skip_to_end(&mut self) {
        let Some(reveal) = self.active.as_ref() else {
            return;
        };
        let rest: String = reveal.chars[reveal.typed..].iter().collect();
        let mut text = self.display.text().to_string();
        text.push_str(&rest);
        self.display.set_text(&text);
        self.complete();
    }

    /// Advance the reveal by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let delay = self.delay_per_character;
        let Some(reveal) = self.active.as_mut() else {
            return;
        };
        reveal.timer += dt.max(0.0);

        while let Some(reveal) = self.active.as_mut() {
            if delay > 0.0 && reveal.timer < delay {
                break;
            }
            reveal.timer = if delay > 0.0 { reveal.timer - delay } else { 0.0 };
            if reveal.typed < reveal.chars.len() {
                self.type_next();
            } else {
                self.complete();
            }
        }
    }

    fn type_next(&mut self) {
        let Some(reveal) = self.active.as_mut() else {
            return;
        };
        let Some(&ch) = reveal.chars.get(reveal.typed) else {
            return;
        };
        reveal.typed += 1;
        let mut text = self.display.text().to_string();
        text.push(ch);
        self.display.set_text(&text);
        self.on_character.emit(&ch);
    }

    fn complete(&mut self) {
        if self.active.take().is_some() {
            self.on_complete.emit(&());
        }
    }
}

impl<D: TextDisplay> TimedSequence for TextReveal<D> {
    /// Replays the text currently on the display.
    fn play(&mut self) {
        let text = self.display.text().to_string();
        self.start(&text);
    }

    fn stop(&mut self) {
        self.skip_to_end();
    }

    fn is_playing(&self) -> bool {
        self.is_revealing()
    }

    fn advance(&mut self, dt: f32) {
        self.tick(dt);
    }
}

impl<D: TextDisplay + std::fmt::Debug> std::fmt::Debug for TextReveal<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextReveal")
            .field("display", &self.display)
            .field("delay_per_character", &self.delay_per_character)
            .field("clear_on_start", &self.clear_on_start)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
