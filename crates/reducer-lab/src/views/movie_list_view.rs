//! Movies View
//!
//! Lists the movie catalog fetched when the view is mounted.

use crate::actions::{Action, MovieListAction};
use crate::state::AppState;
use crate::view_models::RemoteListViewModel;
use crate::views::remote_list::render_remote_list;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    Frame,
};

/// Movie catalog view
#[derive(Debug, Clone)]
pub struct MovieListView;

impl MovieListView {
    pub fn new() -> Self {
        Self
    }
}

impl View for MovieListView {
    fn view_id(&self) -> ViewId {
        ViewId::Movies
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = RemoteListViewModel::from_movies(&state.movies);
        render_remote_list(&vm, "Movies", &state.theme, area, f);
    }

    fn translate_key(&self, key: &KeyEvent, _state: &AppState, _now_ms: u64) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MovieList(MovieListAction::Next)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MovieList(MovieListAction::Previous)),
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
