//! Users View

use crate::actions::{Action, UserListAction};
use crate::state::AppState;
use crate::view_models::RemoteListViewModel;
use crate::views::remote_list::render_remote_list;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    Frame,
};

/// User list view
#[derive(Debug, Clone)]
pub struct UserListView;

impl UserListView {
    pub fn new() -> Self {
        Self
    }
}

impl View for UserListView {
    fn view_id(&self) -> ViewId {
        ViewId::Users
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = RemoteListViewModel::from_users(&state.users);
        render_remote_list(&vm, "Users", &state.theme, area, f);
    }

    fn translate_key(&self, key: &KeyEvent, _state: &AppState, _now_ms: u64) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::UserList(UserListAction::Next)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::UserList(UserListAction::Previous)),
            _ => None,
        }
    }

    fn key_hints(&self, _state: &AppState) -> Vec<(&'static str, &'static str)> {
        vec![("j/k", "scroll")]
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
