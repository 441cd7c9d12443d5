//! Stopwatch View Model

use crate::state::StopwatchState;

/// View model for the stopwatch screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchViewModel {
    /// "Time: 1.25"
    pub time_text: String,
    pub is_running: bool,
    pub status_text: &'static str,
    /// "lap 0: 0.5", oldest first
    pub laps: Vec<String>,
}

impl StopwatchViewModel {
    pub fn from_state(stopwatch: &StopwatchState) -> Self {
        let is_running = stopwatch.is_running();

        Self {
            time_text: format!("Time: {}", format_seconds(stopwatch.time_ms)),
            is_running,
            status_text: if is_running { "running" } else { "stopped" },
            laps: stopwatch
                .lap_times
                .iter()
                .enumerate()
                .map(|(index, lap)| format!("lap {}: {}", index, format_seconds(*lap)))
                .collect(),
        }
    }
}

/// Milliseconds as seconds, without trailing zeros ("0", "0.5", "12.034")
pub fn format_seconds(ms: u64) -> String {
    let whole = ms / 1000;
    let frac = ms % 1000;

    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{:03}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
