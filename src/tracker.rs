use crate::{HeightDirection, HeightState};

/// Converts raw probe height samples into tracked min/max/direction state.
///
/// `update` compares each sample against the *previous* height, not against
/// the running extrema. A sequence that oscillates without settling can
/// therefore widen `min`/`max` on every direction flip, not just at global
/// extrema ("ratchet" growth). This keeps updates O(1) and branch-only, and
/// matches how address bars actually transition: monotonic per gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeightTracker {
    state: HeightState,
}

impl HeightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current tracker state.
    pub fn state(&self) -> HeightState {
        self.state
    }

    /// Feeds one height sample and reports whether the height changed.
    ///
    /// On the very first sample, `min` and `max` bootstrap to the sample
    /// value. A first sample of `0` still reports `changed = false` (the
    /// prior height defaults to zero), so no notification fires for it.
    pub fn update(&mut self, sample: u32) -> bool {
        let first = !self.state.initialized;
        let changed = sample != self.state.height;

        if changed {
            self.state.dir = Some(if sample > self.state.height {
                HeightDirection::Up
            } else {
                HeightDirection::Down
            });
        }

        if first || sample <= self.state.height {
            self.state.min = sample;
        }
        if first || sample > self.state.height {
            self.state.max = sample;
        }

        self.state.height = sample;
        self.state.offset = self.state.max.saturating_sub(self.state.min);
        self.state.initialized = true;

        changed
    }

    /// Resets the tracker to its never-measured state.
    pub fn reset(&mut self) {
        self.state = HeightState::default();
    }
}
