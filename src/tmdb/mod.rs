use crate::config::TmdbConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Movie, MovieDetail, MoviePage};
use async_trait::async_trait;
use tracing::{info, instrument};

/// The remote side of the repository seam. Stateless and safe to call
/// concurrently; implementations must not touch the local cache.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn popular_movies(&self) -> Result<Vec<Movie>, ApiError>;
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, ApiError>;
    async fn movie_detail(&self, id: i64) -> Result<MovieDetail, ApiError>;
}

pub struct TmdbClient {
    http: HttpClient,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(http: HttpClient, config: TmdbConfig) -> Self {
        Self { http, config }
    }

    fn popular_url(&self) -> String {
        format!(
            "{}/movie/popular?api_key={}&language={}&page=1",
            self.config.base_url, self.config.api_key, self.config.language
        )
    }

    // The query is percent-encoded; an empty query is passed through as-is
    // and the remote API decides what that means.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/movie?api_key={}&language={}&query={}&page=1&include_adult=false",
            self.config.base_url,
            self.config.api_key,
            self.config.language,
            urlencoding::encode(query)
        )
    }

    fn detail_url(&self, id: i64) -> String {
        format!(
            "{}/movie/{}?api_key={}&language={}",
            self.config.base_url, id, self.config.api_key, self.config.language
        )
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    #[instrument(skip(self))]
    async fn popular_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let page: MoviePage = self.http.get_json(&self.popular_url()).await?;
        info!("Fetched {} popular movies", page.results.len());
        Ok(page.results)
    }

    #[instrument(skip(self))]
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        let page: MoviePage = self.http.get_json(&self.search_url(query)).await?;
        info!("Search '{}' returned {} movies", query, page.results.len());
        Ok(page.results)
    }

    #[instrument(skip(self))]
    async fn movie_detail(&self, id: i64) -> Result<MovieDetail, ApiError> {
        self.http.get_json(&self.detail_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new(
            HttpClient::new(),
            TmdbConfig {
                api_key: "key".to_string(),
                base_url: "https://api.themoviedb.org/3".to_string(),
                language: "en-US".to_string(),
            },
        )
    }

    #[test]
    fn popular_url_is_pinned_to_page_one() {
        assert_eq!(
            client().popular_url(),
            "https://api.themoviedb.org/3/movie/popular?api_key=key&language=en-US&page=1"
        );
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = client().search_url("bat man");
        assert!(url.contains("query=bat%20man"));
        assert!(url.contains("include_adult=false"));
        assert!(url.contains("page=1"));
    }

    #[test]
    fn search_url_passes_empty_query_through() {
        assert!(client().search_url("").contains("query=&page=1"));
    }

    #[test]
    fn detail_url_embeds_the_id() {
        assert_eq!(
            client().detail_url(21),
            "https://api.themoviedb.org/3/movie/21?api_key=key&language=en-US"
        );
    }
}
