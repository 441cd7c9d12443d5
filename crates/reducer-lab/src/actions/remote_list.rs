//! Remote list actions
//!
//! Actions for the Movies and Users screens. Loaded payloads are tagged with
//! the mount generation that requested them.

use lab_client::{Movie, User};

/// Actions for the Movies screen
#[derive(Debug, Clone)]
pub enum MovieListAction {
    Loaded { generation: u64, movies: Vec<Movie> },
    Next,
    Previous,
}

/// Actions for the Users screen
#[derive(Debug, Clone)]
pub enum UserListAction {
    Loaded { generation: u64, users: Vec<User> },
    Next,
    Previous,
}
