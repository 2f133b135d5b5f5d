mod config;
mod error;
mod http;
mod models;
mod repository;
mod store;
mod tmdb;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Configuration;
use http::HttpClient;
use models::{Movie, MovieDetail};
use repository::MovieRepository;
use std::sync::Arc;
use store::MovieStore;
use tmdb::TmdbClient;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the popular movies list (cached copy when offline)
    Popular,
    /// Search movies by title
    Search { query: String },
    /// Show the detail page for one movie
    Detail { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .init();

    let config = Configuration::from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Composition root: the store is constructed here and injected, its
    // lifetime spans the whole run.
    let store = Arc::new(MovieStore::open(&config.cache_path())?);
    let client = TmdbClient::new(HttpClient::new(), config.tmdb.clone());
    let repository = MovieRepository::new(client, store);

    match cli.command {
        Commands::Popular => {
            let movies = repository.get_movies().await?;
            print_movies(&movies);
        }
        Commands::Search { query } => {
            let movies = repository.search_movies(&query).await?;
            print_movies(&movies);
        }
        Commands::Detail { id } => {
            let detail = repository.get_movie_detail(id).await?;
            print_detail(&detail);
        }
    }

    Ok(())
}

fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found");
        return;
    }
    for movie in movies {
        println!("{:>8}  {}", movie.id, movie.title);
    }
}

fn print_detail(detail: &MovieDetail) {
    println!("{} (#{})", detail.title, detail.id);
    if let Some(ref date) = detail.release_date {
        println!("Released: {}", date);
    }
    if let Some(runtime) = detail.runtime {
        println!("Runtime: {} min", runtime);
    }
    if !detail.genres.is_empty() {
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        println!("Genres: {}", names.join(", "));
    }
    if detail.vote_average > 0.0 {
        println!("Rating: {:.1}/10", detail.vote_average);
    }
    if !detail.overview.is_empty() {
        println!("\n{}", detail.overview);
    }
}
