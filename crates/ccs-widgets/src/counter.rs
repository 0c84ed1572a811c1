//! Count-up animation for statistics.

pub const COUNTER_DURATION_MS: u32 = 2000;
/// One animation frame at roughly 60fps.
pub const FRAME_INTERVAL_MS: u32 = 16;
pub const COUNTER_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(&self) -> u64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Done(v) => *v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CounterFrame::Done(_))
    }
}

/// Accumulates a fixed increment per frame and lands exactly on the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, FRAME_INTERVAL_MS)
    }

    pub fn with_timing(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Advance one frame.
    pub fn step(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            return CounterFrame::Running(self.current.floor() as u64);
        }
        self.done = true;
        CounterFrame::Done(self.target)
    }
}

/// Leading decimal digits of a `data-target` attribute, like `parseInt`.
pub fn parse_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
