use crate::models::Movie;
use rusqlite::{params, Connection, OptionalExtension, Result as SqlResult};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Durable cache of the most recent popular-movies snapshot.
///
/// Full-replace semantics: `replace_all` always discards prior contents, it
/// never merges. All operations surface `rusqlite::Result` so the caller
/// decides whether a cache failure matters; the repository swallows them.
pub struct MovieStore {
    conn: Mutex<Connection>,
}

impl MovieStore {
    pub fn open(path: &Path) -> SqlResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// In-memory store, used by tests and throwaway runs.
    pub fn open_in_memory() -> SqlResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> SqlResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS movies (
                id              INTEGER PRIMARY KEY,
                title           TEXT NOT NULL,
                overview        TEXT NOT NULL,
                poster_path     TEXT
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Replaces the stored snapshot with `movies`. Delete and insert run in
    /// one transaction: concurrent readers see either the old snapshot or
    /// the new one, never an empty or partial table.
    pub fn replace_all(&self, movies: &[Movie]) -> SqlResult<()> {
        let mut conn = self.conn.lock().expect("movie store mutex poisoned");
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM movies", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO movies (id, title, overview, poster_path) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for movie in movies {
                stmt.execute(params![
                    movie.id,
                    movie.title,
                    movie.overview,
                    movie.poster_path
                ])?;
            }
        }

        tx.commit()?;
        debug!("Cached snapshot of {} movies", movies.len());
        Ok(())
    }

    pub fn list_all(&self) -> SqlResult<Vec<Movie>> {
        let conn = self.conn.lock().expect("movie store mutex poisoned");
        let mut stmt = conn.prepare("SELECT id, title, overview, poster_path FROM movies")?;

        let movies = stmt
            .query_map([], |row| {
                Ok(Movie {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    overview: row.get(2)?,
                    poster_path: row.get(3)?,
                })
            })?
            .collect::<SqlResult<Vec<_>>>()?;

        Ok(movies)
    }

    pub fn find_by_id(&self, id: i64) -> SqlResult<Option<Movie>> {
        let conn = self.conn.lock().expect("movie store mutex poisoned");
        conn.query_row(
            "SELECT id, title, overview, poster_path FROM movies WHERE id = ?1",
            params![id],
            |row| {
                Ok(Movie {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    overview: row.get(2)?,
                    poster_path: row.get(3)?,
                })
            },
        )
        .optional()
    }
}
