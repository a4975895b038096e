//! Seams shared by every tick-driven visual element.

/// A visual sequence advanced by the host's tick loop.
///
/// Hosts can keep heterogeneous animated elements in one
/// `Vec<Box<dyn TimedSequence>>` and drive them with the same `dt`.
pub trait TimedSequence {
    /// Start (or restart) the sequence
    fn play(&mut self);

    /// End the sequence early
    fn stop(&mut self);

    /// Whether the sequence still has work to do
    fn is_playing(&self) -> bool;

    /// Advance by `dt` seconds
    fn advance(&mut self, dt: f32);
}

/// Something that displays a string.
pub trait TextDisplay {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Currently displayed text
    fn text(&self) -> &str;
}

impl TextDisplay for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn text(&self) -> &str {
        self
    }
}

/// Drive every sequence in `sequences` by `dt`.
///
/// Returns how many are still playing afterwards.
pub fn advance_all(sequences: &mut [Box<dyn TimedSequence>], dt: f32) -> usize {
    sequences
        .iter_mut()
        .map(|sequence| {
            sequence.advance(dt);
            sequence.is_playing()
        })
        .filter(|playing| *playing)
        .count()
}
