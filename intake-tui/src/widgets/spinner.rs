//! Spinner widget for the busy state.

/// Frames for the busy indicator, advanced on every animation tick.
const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A minimal text spinner shown while a submission is in flight.
#[derive(Debug, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Create a new spinner on its first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next frame.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Get the current frame glyph.
    pub fn current(&self) -> &'static str {
        FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps_around() {
        let mut spinner = Spinner::new();
        let first = spinner.current();

        for _ in 0..FRAMES.len() {
            spinner.advance();
        }
        assert_eq!(spinner.current(), first);
    }
}
