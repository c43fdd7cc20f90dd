//! Frame clock.

use serde::{Deserialize, Serialize};

/// Monotonic frame counter, advanced once per tick and never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn tick(&mut self) -> u64 {
        self.frame = self.frame.saturating_add(1);
        self.frame
    }

    /// Jump `frames` ahead without visiting the frames in between.
    #[inline]
    pub fn skip(&mut self, frames: u64) -> u64 {
        self.frame = self.frame.saturating_add(frames);
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_monotonic() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.current(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.current(), 2);
        assert_eq!(clock.skip(1500), 1502);
        clock.skip(u64::MAX);
        assert_eq!(clock.tick(), u64::MAX);
    }
}
