//! Stopwatch Reducer
//!
//! | Action      | From    | To      |
//! |-------------|---------|---------|
//! | Start       | Stopped | Running |
//! | Pause       | Running | Stopped |
//! | Pause       | Stopped | Running |
//! | Reset       | any     | Stopped |
//! | UpdateTime  | Running | Running |
//! | AddLap      | any     | same    |
//! | RemoveLap   | any     | same    |

use crate::actions::StopwatchAction;
use crate::state::{StopwatchMode, StopwatchState};

/// Reducer for stopwatch state.
///
/// Accepts only StopwatchAction. Clock readings arrive inside the actions.
pub fn reduce_stopwatch(mut state: StopwatchState, action: &StopwatchAction) -> StopwatchState {
    match *action {
        StopwatchAction::Start { now_ms } => {
            if state.is_running() {
                return state;
            }
            state.mode = StopwatchMode::Running {
                started_at_ms: now_ms,
                accumulated_ms: 0,
            };
            state.time_ms = 0;
        }
        StopwatchAction::Pause { now_ms } => {
            state.mode = if state.is_running() {
                StopwatchMode::Stopped {
                    started_at_ms: state.start_time_ms(),
                    accumulated_ms: state.time_ms,
                }
            } else {
                // Pausing a stopped watch resumes it
                log::debug!("Stopwatch: pause while stopped, resuming");
                StopwatchMode::Running {
                    started_at_ms: now_ms,
                    accumulated_ms: state.accumulated_ms(),
                }
            };
        }
        StopwatchAction::Reset => {
            state = StopwatchState::default();
        }
        StopwatchAction::UpdateTime { now_ms } => {
            if let StopwatchMode::Running {
                started_at_ms,
                accumulated_ms,
            } = state.mode
            {
                // Stamps taken before the current start are stale
                if now_ms >= started_at_ms {
                    state.time_ms = accumulated_ms + (now_ms - started_at_ms);
                }
            }
        }
        StopwatchAction::AddLap => {
            state.lap_times.push(state.time_ms);
        }
        StopwatchAction::RemoveLap => {
            state.lap_times.pop();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce_all(state: StopwatchState, actions: &[StopwatchAction]) -> StopwatchState {
        actions.iter().fold(state, reduce_stopwatch)
    }

    fn running_at(started_at_ms: u64, accumulated_ms: u64, time_ms: u64) -> StopwatchState {
        StopwatchState {
            mode: StopwatchMode::Running {
                started_at_ms,
                accumulated_ms,
            },
            time_ms,
            lap_times: vec![120, 450],
        }
    }

    fn sample_states() -> Vec<StopwatchState> {
        vec![
            StopwatchState::default(),
            running_at(1_000, 0, 300),
            running_at(5_000, 2_000, 2_700),
            StopwatchState {
                mode: StopwatchMode::Stopped {
                    started_at_ms: 9_000,
                    accumulated_ms: 3_000,
                },
                time_ms: 3_000,
                lap_times: vec![1_000, 2_000, 3_000],
            },
        ]
    }

    #[test]
    fn test_start_update_lap_reset_scenario() {
        let initial = StopwatchState::default();

        let state = reduce_stopwatch(initial.clone(), &StopwatchAction::Start { now_ms: 10_000 });
        assert!(state.is_running());
        assert_eq!(state.time_ms, 0);
        assert_eq!(state.start_time_ms(), 10_000);

        let state = reduce_stopwatch(state, &StopwatchAction::UpdateTime { now_ms: 10_500 });
        assert_eq!(state.time_ms, 500);

        let state = reduce_stopwatch(state, &StopwatchAction::AddLap);
        assert_eq!(state.lap_times, vec![500]);

        let state = reduce_stopwatch(state, &StopwatchAction::Reset);
        assert_eq!(state, initial);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let state = running_at(1_000, 0, 300);
        let after = reduce_stopwatch(state.clone(), &StopwatchAction::Start { now_ms: 9_999 });
        assert_eq!(after, state);
    }

    #[test]
    fn test_start_keeps_laps() {
        let state = StopwatchState {
            lap_times: vec![10, 20],
            ..StopwatchState::default()
        };
        let state = reduce_stopwatch(state, &StopwatchAction::Start { now_ms: 50 });
        assert_eq!(state.lap_times, vec![10, 20]);
        assert_eq!(state.accumulated_ms(), 0);
    }

    #[test]
    fn test_pause_freezes_time() {
        let state = reduce_all(
            StopwatchState::default(),
            &[
                StopwatchAction::Start { now_ms: 0 },
                StopwatchAction::UpdateTime { now_ms: 700 },
                StopwatchAction::Pause { now_ms: 800 },
            ],
        );
        assert!(!state.is_running());
        // Frozen at the last computed time, not at the pause stamp
        assert_eq!(state.time_ms, 700);
        assert_eq!(state.accumulated_ms(), 700);

        let later = reduce_stopwatch(state.clone(), &StopwatchAction::UpdateTime { now_ms: 5_000 });
        assert_eq!(later, state);
    }

    #[test]
    fn test_pause_while_stopped_resumes_with_accumulated_time() {
        let state = reduce_all(
            StopwatchState::default(),
            &[
                StopwatchAction::Start { now_ms: 0 },
                StopwatchAction::UpdateTime { now_ms: 700 },
                StopwatchAction::Pause { now_ms: 700 },
                StopwatchAction::Pause { now_ms: 2_000 },
            ],
        );
        assert!(state.is_running());
        assert_eq!(state.start_time_ms(), 2_000);
        assert_eq!(state.accumulated_ms(), 700);

        let state = reduce_stopwatch(state, &StopwatchAction::UpdateTime { now_ms: 2_300 });
        assert_eq!(state.time_ms, 1_000);
    }

    #[test]
    fn test_stopped_keeps_start_reference_until_reset() {
        let paused = reduce_all(
            StopwatchState::default(),
            &[
                StopwatchAction::Start { now_ms: 3_000 },
                StopwatchAction::UpdateTime { now_ms: 3_400 },
                StopwatchAction::Pause { now_ms: 3_400 },
            ],
        );
        assert_eq!(
            paused.mode,
            StopwatchMode::Stopped {
                started_at_ms: 3_000,
                accumulated_ms: 400,
            }
        );

        let reset = reduce_stopwatch(paused, &StopwatchAction::Reset);
        assert_eq!(reset.mode, StopwatchMode::default());
        assert_eq!(reset.start_time_ms(), 0);
    }

    #[test]
    fn test_pause_from_initial_state_runs_from_zero() {
        let state = reduce_stopwatch(StopwatchState::default(), &StopwatchAction::Pause { now_ms: 40 });
        assert!(state.is_running());
        let state = reduce_stopwatch(state, &StopwatchAction::UpdateTime { now_ms: 140 });
        assert_eq!(state.time_ms, 100);
    }

    #[test]
    fn test_time_strictly_increases_while_running() {
        let mut state = reduce_stopwatch(StopwatchState::default(), &StopwatchAction::Start { now_ms: 100 });
        let mut previous = state.time_ms;
        for now_ms in (116..2_000).step_by(16) {
            state = reduce_stopwatch(state, &StopwatchAction::UpdateTime { now_ms });
            assert!(state.time_ms > previous);
            previous = state.time_ms;
        }
    }

    #[test]
    fn test_stale_update_is_ignored() {
        let state = running_at(1_000, 200, 450);
        let after = reduce_stopwatch(state.clone(), &StopwatchAction::UpdateTime { now_ms: 900 });
        assert_eq!(after, state);
    }

    #[test]
    fn test_update_time_while_stopped_is_noop() {
        for state in sample_states().into_iter().filter(|s| !s.is_running()) {
            let after = reduce_stopwatch(state.clone(), &StopwatchAction::UpdateTime { now_ms: 123_456 });
            assert_eq!(after, state);
        }
    }

    #[test]
    fn test_reset_from_any_state() {
        for state in sample_states() {
            let state = reduce_stopwatch(state, &StopwatchAction::Reset);
            assert_eq!(state.time_ms, 0);
            assert!(!state.is_running());
            assert!(state.lap_times.is_empty());
            assert_eq!(state.start_time_ms(), 0);
            assert_eq!(state.accumulated_ms(), 0);
        }
    }

    #[test]
    fn test_add_then_remove_lap_is_inverse() {
        for state in sample_states() {
            let after = reduce_all(
                state.clone(),
                &[StopwatchAction::AddLap, StopwatchAction::RemoveLap],
            );
            assert_eq!(after.lap_times, state.lap_times);
        }
    }

    #[test]
    fn test_remove_lap_on_empty_is_noop() {
        let state = StopwatchState::default();
        let after = reduce_stopwatch(state.clone(), &StopwatchAction::RemoveLap);
        assert_eq!(after, state);
    }

    #[test]
    fn test_add_lap_records_current_time() {
        let state = running_at(0, 0, 1_234);
        let state = reduce_stopwatch(state, &StopwatchAction::AddLap);
        assert_eq!(state.lap_times, vec![120, 450, 1_234]);
    }
}
