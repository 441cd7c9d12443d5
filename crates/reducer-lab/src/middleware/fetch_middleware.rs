//! Fetch Middleware
//!
//! Issues the one-shot fetch for a remote list each time its view is
//! mounted. Responses are dispatched tagged with the mount generation;
//! failures are logged once and swallowed, leaving the list loading.

use crate::actions::{Action, MovieListAction, UserListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::ViewId;
use lab_client::CatalogClient;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for the movie catalog and user list fetches
pub struct FetchMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn CatalogClient>,
    /// Generation of the last mount a fetch was issued for
    movies_requested: Option<u64>,
    users_requested: Option<u64>,
}

impl FetchMiddleware {
    pub fn new(client: Arc<dyn CatalogClient>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client,
            movies_requested: None,
            users_requested: None,
        })
    }

    fn fetch_movies(&self, generation: u64, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_movies().await {
                Ok(movies) => {
                    dispatcher.dispatch(Action::MovieList(MovieListAction::Loaded {
                        generation,
                        movies,
                    }));
                }
                Err(e) => {
                    log::warn!("FetchMiddleware: movie catalog unavailable: {}", e);
                }
            }
        });
    }

    fn fetch_users(&self, generation: u64, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_users().await {
                Ok(users) => {
                    dispatcher.dispatch(Action::UserList(UserListAction::Loaded {
                        generation,
                        users,
                    }));
                }
                Err(e) => {
                    log::warn!("FetchMiddleware: user list unavailable: {}", e);
                }
            }
        });
    }
}

impl Middleware for FetchMiddleware {
    fn handle(&mut self, _action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        true
    }

    fn after_reduce(&mut self, _action: &Action, state: &AppState, dispatcher: &Dispatcher) {
        match state.active_view.view_id() {
            ViewId::Movies
                if state.movies.is_loading()
                    && self.movies_requested != Some(state.movies.generation) =>
            {
                let generation = state.movies.generation;
                log::debug!("FetchMiddleware: fetching movies for mount {}", generation);
                self.movies_requested = Some(generation);
                self.fetch_movies(generation, dispatcher);
            }
            ViewId::Users
                if state.users.is_loading()
                    && self.users_requested != Some(state.users.generation) =>
            {
                let generation = state.users.generation;
                log::debug!("FetchMiddleware: fetching users for mount {}", generation);
                self.users_requested = Some(generation);
                self.fetch_users(generation, dispatcher);
            }
            _ => {}
        }
    }
}
