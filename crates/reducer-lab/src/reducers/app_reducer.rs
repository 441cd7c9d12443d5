use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    remote_list_reducer::{reduce_movie_list, reduce_user_list},
    shop_reducer::{reduce_cart_slice, reduce_shop},
    stopwatch_reducer::reduce_stopwatch,
};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => {
            state = reduce_global(state, global);
        }
        Action::Shop(shop_action) => {
            state.shop = reduce_shop(state.shop, shop_action);
        }
        Action::Cart(cart_action) => {
            state.shop = reduce_cart_slice(state.shop, cart_action);
        }
        Action::Stopwatch(stopwatch_action) => {
            state.stopwatch = reduce_stopwatch(state.stopwatch, stopwatch_action);
        }
        Action::MovieList(movie_action) => {
            state.movies = reduce_movie_list(state.movies, movie_action);
        }
        Action::UserList(user_action) => {
            state.users = reduce_user_list(state.users, user_action);
        }
    }

    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::ReplaceView(new_view) => {
            let new_id = new_view.view_id();
            if new_id == state.active_view.view_id() {
                log::debug!("View {:?} already mounted", new_id);
                return state;
            }

            log::debug!(
                "Replacing view {:?} with {:?}",
                state.active_view.view_id(),
                new_id
            );
            state.active_view = new_view.clone();

            // Remote lists start over on every mount
            match new_id {
                ViewId::Movies => state.movies = state.movies.remounted(),
                ViewId::Users => state.users = state.users.remounted(),
                ViewId::Shop | ViewId::Stopwatch => {}
            }
        }
        GlobalAction::SecondElapsed => {
            state.uptime_secs += 1;
        }
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::Start | GlobalAction::KeyPressed(_) => {
            // Handled by middleware - no state change
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, StopwatchAction};
    use crate::views::{MovieListView, ShopView, StopwatchView};

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_second_elapsed_counts_up() {
        let state = (0..3).fold(AppState::default(), |state, _| {
            reduce(state, &Action::Global(GlobalAction::SecondElapsed))
        });
        assert_eq!(state.uptime_secs, 3);
    }

    #[test]
    fn test_replace_view_remounts_remote_list() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::ReplaceView(Box::new(MovieListView::new()))),
        );
        assert_eq!(state.active_view.view_id(), ViewId::Movies);
        assert_eq!(state.movies.generation, 1);
        assert!(state.movies.is_loading());

        // Replacing with the same view does not remount
        let state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(MovieListView::new()))),
        );
        assert_eq!(state.movies.generation, 1);

        let state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(ShopView::new()))),
        );
        let state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(MovieListView::new()))),
        );
        assert_eq!(state.movies.generation, 2);
    }

    #[test]
    fn test_domain_state_survives_view_switch() {
        let mut state = AppState::default();
        let product = state.shop.catalog[0].clone();
        state = reduce(state, &Action::Cart(CartAction::Add(product)));
        state = reduce(
            state,
            &Action::Stopwatch(StopwatchAction::Start { now_ms: 5 }),
        );
        state = reduce(
            state,
            &Action::Global(GlobalAction::ReplaceView(Box::new(StopwatchView::new()))),
        );

        assert_eq!(state.shop.cart.total_quantity(), 1);
        assert!(state.stopwatch.is_running());
    }

    #[test]
    fn test_key_pressed_leaves_state_unchanged() {
        use ratatui::crossterm::event::{KeyCode, KeyEvent};

        let before = AppState::default();
        let after = reduce(
            before.clone(),
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::from(KeyCode::Char('z')))),
        );
        assert_eq!(after.shop, before.shop);
        assert_eq!(after.stopwatch, before.stopwatch);
        assert_eq!(after.uptime_secs, before.uptime_secs);
    }
}
