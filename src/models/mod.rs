use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A movie as listed by the popular and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
}

// Identity follows the upstream id so lists can be diffed cheaply.
impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full record from the detail endpoint. The detail-only fields are
/// optional or defaulted: TMDB nulls `runtime` for unreleased titles, and
/// a cache-fallback record (built from a plain [`Movie`]) has none of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
}

impl From<Movie> for MovieDetail {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_path: movie.poster_path,
            release_date: None,
            runtime: None,
            genres: Vec::new(),
            vote_average: 0.0,
        }
    }
}

/// TMDB list envelope. Paging metadata is ignored, both list endpoints are
/// pinned to page 1.
#[derive(Debug, Deserialize)]
pub struct MoviePage {
    pub results: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_page_decodes_with_null_poster() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "One", "overview": "A", "poster_path": "/p1.jpg"},
                {"id": 2, "title": "Two", "overview": "B", "poster_path": null}
            ],
            "total_pages": 10
        }"#;

        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].poster_path.as_deref(), Some("/p1.jpg"));
        assert_eq!(page.results[1].poster_path, None);
    }

    #[test]
    fn movie_detail_decodes_genres() {
        let json = r#"{
            "id": 21,
            "title": "Blackjack",
            "overview": "O",
            "poster_path": null,
            "release_date": "2020-01-01",
            "runtime": 100,
            "genres": [{"id": 1, "name": "Action"}],
            "vote_average": 7.2
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 21);
        assert_eq!(detail.genres[0].name, "Action");
        assert_eq!(detail.runtime, Some(100));
        assert_eq!(detail.vote_average, 7.2);
    }

    #[test]
    fn detail_from_cached_movie_has_no_detail_fields() {
        let movie = Movie {
            id: 5,
            title: "Five".to_string(),
            overview: "V".to_string(),
            poster_path: Some("/p5.jpg".to_string()),
        };

        let detail = MovieDetail::from(movie);
        assert_eq!(detail.id, 5);
        assert_eq!(detail.poster_path.as_deref(), Some("/p5.jpg"));
        assert_eq!(detail.release_date, None);
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn movie_equality_is_by_id() {
        let a = Movie {
            id: 1,
            title: "Cut A".to_string(),
            overview: String::new(),
            poster_path: None,
        };
        let b = Movie {
            id: 1,
            title: "Cut B".to_string(),
            overview: "different".to_string(),
            poster_path: Some("/x.jpg".to_string()),
        };
        assert_eq!(a, b);
    }
}
