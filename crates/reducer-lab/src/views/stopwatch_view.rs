//! Stopwatch View
//!
//! Shows the elapsed time and the recorded laps. Redraws happen at the
//! event loop's cadence, independent of how often `UpdateTime` arrives.

use crate::actions::{Action, StopwatchAction};
use crate::state::AppState;
use crate::view_models::StopwatchViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Stopwatch screen view
#[derive(Debug, Clone)]
pub struct StopwatchView;

impl StopwatchView {
    pub fn new() -> Self {
        Self
    }
}

impl View for StopwatchView {
    fn view_id(&self) -> ViewId {
        ViewId::Stopwatch
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = StopwatchViewModel::from_state(&state.stopwatch);
        let theme = &state.theme;

        let [time_area, laps_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let time_style = if vm.is_running {
            theme.success()
        } else {
            theme.warning()
        };
        let time = Paragraph::new(vec![
            Line::styled(vm.time_text, time_style),
            Line::styled(vm.status_text, theme.muted()),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title(Span::styled(" Stopwatch ", theme.panel_title())),
        );
        f.render_widget(time, time_area);

        let laps: Vec<ListItem> = vm
            .laps
            .into_iter()
            .map(|lap| ListItem::new(Line::styled(lap, theme.text())))
            .collect();
        let laps = List::new(laps).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title(Span::styled(" LAP ", theme.panel_title())),
        );
        f.render_widget(laps, laps_area);
    }

    fn translate_key(&self, key: &KeyEvent, _state: &AppState, now_ms: u64) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('s') => StopwatchAction::Start { now_ms },
            KeyCode::Char('p') => StopwatchAction::Pause { now_ms },
            KeyCode::Char('r') => StopwatchAction::Reset,
            KeyCode::Char('l') => StopwatchAction::AddLap,
            KeyCode::Char('L') | KeyCode::Backspace => StopwatchAction::RemoveLap,
            _ => return None,
        };
        Some(Action::Stopwatch(action))
    }

    fn key_hints(&self, _state: &AppState) -> Vec<(&'static str, &'static str)> {
        vec![
            ("s", "start"),
            ("p", "pause"),
            ("r", "reset"),
            ("l", "lap"),
            ("L", "remove lap"),
        ]
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
