//! Remote List View Models
//!
//! Rows for the movie catalog and the user list. Records are not
//! validated, so missing fields render as placeholders.

use super::ListRow;
use crate::state::RemoteList;
use lab_client::{Movie, User};

const PLACEHOLDER: &str = "?";

/// View model for a fetched list
#[derive(Debug, Clone)]
pub struct RemoteListViewModel {
    pub is_loading: bool,
    pub rows: Vec<ListRow>,
    /// "20 movies"
    pub count_text: String,
    pub cursor: usize,
}

impl RemoteListViewModel {
    pub fn from_movies(list: &RemoteList<Movie>) -> Self {
        Self::build(list, "movies", movie_text)
    }

    pub fn from_users(list: &RemoteList<User>) -> Self {
        Self::build(list, "users", user_text)
    }

    fn build<T>(list: &RemoteList<T>, noun: &str, text: fn(&T) -> String) -> Self {
        let rows = list
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ListRow {
                text: text(item),
                is_cursor: index == list.cursor,
            })
            .collect();

        Self {
            is_loading: list.is_loading(),
            rows,
            count_text: format!("{} {}", list.items.len(), noun),
            cursor: list.cursor,
        }
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

fn movie_text(movie: &Movie) -> String {
    let genres = if movie.genres.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        movie.genres.join(", ")
    };

    format!(
        "{} ({})  ★ {:.1}  {}",
        or_placeholder(&movie.title),
        movie.year,
        movie.rating,
        genres
    )
}

fn user_text(user: &User) -> String {
    format!("#{:<3} {}", user.id, or_placeholder(&user.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadStatus;

    fn loaded<T>(items: Vec<T>) -> RemoteList<T> {
        RemoteList {
            status: LoadStatus::Loaded,
            items,
            ..RemoteList::default()
        }
    }

    #[test]
    fn test_loading_list_has_no_rows() {
        let vm = RemoteListViewModel::from_movies(&RemoteList::default());
        assert!(vm.is_loading);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.count_text, "0 movies");
    }

    #[test]
    fn test_movie_rows() {
        let list = loaded(vec![Movie {
            id: 1,
            title: "Spirited Away".to_string(),
            year: 2001,
            rating: 8.6,
            genres: vec!["Animation".to_string(), "Fantasy".to_string()],
            medium_cover_image: String::new(),
        }]);

        let vm = RemoteListViewModel::from_movies(&list);
        assert!(!vm.is_loading);
        assert_eq!(vm.rows[0].text, "Spirited Away (2001)  ★ 8.6  Animation, Fantasy");
        assert!(vm.rows[0].is_cursor);
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let vm = RemoteListViewModel::from_movies(&loaded(vec![Movie::default()]));
        assert_eq!(vm.rows[0].text, "? (0)  ★ 0.0  ?");

        let vm = RemoteListViewModel::from_users(&loaded(vec![User::default()]));
        assert_eq!(vm.rows[0].text, "#0   ?");
    }

    #[test]
    fn test_user_rows_follow_cursor() {
        let mut list = loaded(vec![
            User {
                id: 1,
                name: "Leanne Graham".to_string(),
            },
            User {
                id: 2,
                name: "Ervin Howell".to_string(),
            },
        ]);
        list.cursor = 1;

        let vm = RemoteListViewModel::from_users(&list);
        assert_eq!(vm.count_text, "2 users");
        assert_eq!(vm.rows[1].text, "#2   Ervin Howell");
        assert!(vm.rows[1].is_cursor);
        assert!(!vm.rows[0].is_cursor);
    }
}
