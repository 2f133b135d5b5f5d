use crate::error::ApiError;
use crate::models::{Movie, MovieDetail};
use crate::store::MovieStore;
use crate::tmdb::MovieApi;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Fetch/fallback policy engine over a remote [`MovieApi`] and the local
/// [`MovieStore`]. The remote is always tried first; the cache is consulted
/// only after a remote failure, never raced or merged, and cached data is
/// served without any freshness check.
pub struct MovieRepository<A: MovieApi> {
    api: A,
    store: Arc<MovieStore>,
}

impl<A: MovieApi> MovieRepository<A> {
    pub fn new(api: A, store: Arc<MovieStore>) -> Self {
        Self { api, store }
    }

    /// Popular movies, remote-first with write-through caching. A cache
    /// write failure is logged and ignored: it must never fail a fetch that
    /// succeeded. On a remote failure a non-empty cache masks the error;
    /// an empty cache re-surfaces it unchanged.
    #[instrument(skip(self))]
    pub async fn get_movies(&self) -> Result<Vec<Movie>, ApiError> {
        match self.api.popular_movies().await {
            Ok(movies) => {
                if let Err(e) = self.store.replace_all(&movies) {
                    warn!("Failed to cache popular movies: {}", e);
                }
                Ok(movies)
            }
            Err(err) => {
                let cached = self.store.list_all().unwrap_or_else(|e| {
                    warn!("Cache read failed: {}", e);
                    Vec::new()
                });

                if cached.is_empty() {
                    Err(err)
                } else {
                    info!(
                        "Remote fetch failed ({}), serving {} cached movies",
                        err,
                        cached.len()
                    );
                    Ok(cached)
                }
            }
        }
    }

    /// Pure passthrough. Search results are never cached and never fall
    /// back to the cache.
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        self.api.search_movies(query).await
    }

    /// Detail fetch with a degraded fallback: if the remote call fails and
    /// the id is in the last popular snapshot, the cached row is promoted
    /// to a [`MovieDetail`] without the detail-only fields.
    #[instrument(skip(self))]
    pub async fn get_movie_detail(&self, id: i64) -> Result<MovieDetail, ApiError> {
        match self.api.movie_detail(id).await {
            Ok(detail) => Ok(detail),
            Err(err) => match self.store.find_by_id(id) {
                Ok(Some(movie)) => {
                    info!("Remote detail fetch failed ({}), serving cached movie {}", err, id);
                    Ok(MovieDetail::from(movie))
                }
                Ok(None) => Err(err),
                Err(e) => {
                    warn!("Cache lookup failed: {}", e);
                    Err(err)
                }
            },
        }
    }
}
