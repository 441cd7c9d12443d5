//! Stopwatch State
//!
//! Everything the stopwatch needs between transitions lives in this one
//! snapshot: the start reference and the time accumulated across
//! pause/resume cycles are part of the mode, the lap list is part of the
//! state. Views read `time_ms` and redraw at their own cadence.

/// Finite mode set of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchMode {
    /// Time is frozen at `accumulated_ms`.
    /// `started_at_ms` keeps the last start reference (0 after a reset).
    Stopped {
        started_at_ms: u64,
        accumulated_ms: u64,
    },
    /// Time advances as `accumulated_ms + (now - started_at_ms)`
    Running {
        started_at_ms: u64,
        accumulated_ms: u64,
    },
}

impl Default for StopwatchMode {
    fn default() -> Self {
        Self::Stopped {
            started_at_ms: 0,
            accumulated_ms: 0,
        }
    }
}

/// Stopwatch state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    pub mode: StopwatchMode,
    /// Elapsed milliseconds as of the last transition
    pub time_ms: u64,
    /// Recorded lap times, oldest first
    pub lap_times: Vec<u64>,
}

impl StopwatchState {
    pub fn is_running(&self) -> bool {
        matches!(self.mode, StopwatchMode::Running { .. })
    }

    /// Time carried over from earlier running periods
    pub fn accumulated_ms(&self) -> u64 {
        match self.mode {
            StopwatchMode::Stopped { accumulated_ms, .. }
            | StopwatchMode::Running { accumulated_ms, .. } => accumulated_ms,
        }
    }

    /// Clock reading of the most recent start or resume
    pub fn start_time_ms(&self) -> u64 {
        match self.mode {
            StopwatchMode::Stopped { started_at_ms, .. }
            | StopwatchMode::Running { started_at_ms, .. } => started_at_ms,
        }
    }
}
