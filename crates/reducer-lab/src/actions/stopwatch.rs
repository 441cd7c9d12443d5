//! Stopwatch actions
//!
//! Time-dependent actions carry the clock reading taken when they were
//! created, so the reducer never reads a clock itself.

/// Actions for the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    /// Start from zero (no-op while running)
    Start { now_ms: u64 },
    /// Pause while running; resumes when stopped
    Pause { now_ms: u64 },
    /// Back to the initial state
    Reset,
    /// Recompute the elapsed time (frame tick)
    UpdateTime { now_ms: u64 },
    /// Record the current time as a lap
    AddLap,
    /// Drop the most recent lap
    RemoveLap,
}
