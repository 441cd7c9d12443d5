//! Remote List Reducers

use crate::actions::{MovieListAction, UserListAction};
use crate::state::{LoadStatus, RemoteList};
use lab_client::{Movie, User};

/// Reducer for the movie list
pub fn reduce_movie_list(state: RemoteList<Movie>, action: &MovieListAction) -> RemoteList<Movie> {
    match action {
        MovieListAction::Loaded { generation, movies } => {
            apply_loaded(state, *generation, movies, "movies")
        }
        MovieListAction::Next => move_cursor(state, 1),
        MovieListAction::Previous => move_cursor(state, -1),
    }
}

/// Reducer for the user list
pub fn reduce_user_list(state: RemoteList<User>, action: &UserListAction) -> RemoteList<User> {
    match action {
        UserListAction::Loaded { generation, users } => {
            apply_loaded(state, *generation, users, "users")
        }
        UserListAction::Next => move_cursor(state, 1),
        UserListAction::Previous => move_cursor(state, -1),
    }
}

/// Accept a payload only for the current mount while it is still loading
fn apply_loaded<T: Clone>(
    mut state: RemoteList<T>,
    generation: u64,
    items: &[T],
    what: &str,
) -> RemoteList<T> {
    if generation != state.generation || !state.is_loading() {
        log::debug!(
            "Dropping late {} response (generation {}, current {})",
            what,
            generation,
            state.generation
        );
        return state;
    }

    log::info!("Loaded {} {}", items.len(), what);
    state.items = items.to_vec();
    state.status = LoadStatus::Loaded;
    state.cursor = 0;
    state
}

fn move_cursor<T>(mut state: RemoteList<T>, delta: isize) -> RemoteList<T> {
    let max = state.items.len().saturating_sub(1);
    state.cursor = state.cursor.saturating_add_signed(delta).min(max);
    state
}
