//! # marquee
//!
//! Terminal front end for the Marquee movie browser.
//!
//! Wires the layers together and drives them from stdin:
//! - the home list loads on startup (cache first, remote on a cold start)
//! - `<enter>` / `n` paginates, appending the next remote page
//! - a number opens that entry's detail view plus its similar movies
//! - `q` quits

use std::io::Write as _;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use marquee_api::{ApiConfig, MovieCatalog, TmdbClient};
use marquee_app::mapper::genre_ids_from_row;
use marquee_app::{
    CachedMovieRepository, DetailsController, HomeController, MovieListEvent, MovieListRepository,
    MovieListState, SimilarMoviesController, SimilarMoviesEvent, TmdbSimilarMovies,
};
use marquee_shared::constants::DEFAULT_PERSON_ID;
use marquee_store::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("marquee=info,marquee_app=info,marquee_api=info,marquee_store=info,warn")
        }))
        .init();

    info!("Starting Marquee v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let api_config = ApiConfig::from_env();
    let person_id = person_id_from_env();

    // -----------------------------------------------------------------------
    // 3. Open the local cache
    // -----------------------------------------------------------------------
    let database = match std::env::var("MARQUEE_DB_PATH") {
        Ok(path) if !path.is_empty() => Database::open_at(Path::new(&path))?,
        _ => Database::new()?,
    };
    if let Some(refreshed) = database.cache_refreshed_at()? {
        info!(%refreshed, "movie cache last refreshed");
    }
    let database = Arc::new(Mutex::new(database));

    // -----------------------------------------------------------------------
    // 4. Wire the repositories and state holders
    // -----------------------------------------------------------------------
    let catalog: Arc<dyn MovieCatalog> = Arc::new(TmdbClient::new(api_config));
    let movie_repository: Arc<dyn MovieListRepository> = Arc::new(CachedMovieRepository::new(
        Arc::clone(&catalog),
        Arc::clone(&database),
    ));
    let mut home = HomeController::with_person(Arc::clone(&movie_repository), person_id);
    let mut similar = SimilarMoviesController::new(Arc::new(TmdbSimilarMovies::new(catalog)));

    // -----------------------------------------------------------------------
    // 5. Initial load, then the input loop
    // -----------------------------------------------------------------------
    home.on_event(MovieListEvent::LoadMovieList);
    home.idle().await;
    render_home(&home.state());

    println!("commands: <enter>/n = next page, <number> = movie details, q = quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "q" | "quit" => break,
            "" | "n" | "next" => {
                home.on_event(MovieListEvent::Paginate);
                home.idle().await;
                render_home(&home.state());
            }
            input => match input.parse::<usize>() {
                Ok(number) => {
                    show_details(
                        number,
                        &home.state(),
                        &movie_repository,
                        &database,
                        &mut similar,
                    )
                    .await?;
                }
                Err(_) => println!("unrecognised command: {input}"),
            },
        }
    }

    Ok(())
}

/// Read the person id override, falling back to the embedded default.
/// Env: `MARQUEE_PERSON_ID`
fn person_id_from_env() -> i64 {
    match std::env::var("MARQUEE_PERSON_ID") {
        Ok(val) => match val.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                warn!(value = %val, "Invalid MARQUEE_PERSON_ID, using default");
                DEFAULT_PERSON_ID
            }
        },
        Err(_) => DEFAULT_PERSON_ID,
    }
}


fn render_home(state: &MovieListState) {
    if state.movie_list.is_empty() {
        println!("no movies loaded");
        return;
    }

    println!();
    for (index, movie) in state.movie_list.iter().enumerate() {
        println!("{:3}. {}", index + 1, movie.title);
    }
    println!("  -- {} movies, next page {}", state.movie_list.len(), state.page);
}

/// Show the detail view for the `number`-th listed movie, then its
/// similar-movies list.
async fn show_details(
    number: usize,
    state: &MovieListState,
    movie_repository: &Arc<dyn MovieListRepository>,
    database: &Arc<Mutex<Database>>,
    similar: &mut SimilarMoviesController,
) -> anyhow::Result<()> {
    let Some(selected) = number.checked_sub(1).and_then(|i| state.movie_list.get(i)) else {
        println!("no movie #{number}");
        return Ok(());
    };

    // The detail screen is recreated fresh per selection.
    let mut details = DetailsController::new(Arc::clone(movie_repository), selected.id);
    details.load();
    details.idle().await;

    match details.state().movie {
        Some(movie) => {
            println!();
            println!("{}", movie.title);
            if movie.original_title != movie.title {
                println!("original title: {}", movie.original_title);
            }
            if !movie.overview.is_empty() {
                println!("{}", movie.overview);
            }
            if let Some(url) = movie.poster_url() {
                println!("poster: {url}");
            }

            let genres = {
                let db = database
                    .lock()
                    .map_err(|e| anyhow!("lock poisoned: {e}"))?;
                db.get_movie_by_id(movie.id)
                    .map(|row| genre_ids_from_row(&row))
                    .unwrap_or_default()
            };
            if !genres.is_empty() {
                let joined = genres
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("genre ids: {joined}");
            }
        }
        None => println!("movie details unavailable"),
    }

    similar.on_event(SimilarMoviesEvent::FetchSimilarMovies(selected.id));
    similar.idle().await;

    let similar_state = similar.state();
    if similar_state.movie_list.is_empty() {
        println!("no similar movies");
    } else {
        println!("similar:");
        for movie in similar_state.movie_list.iter().take(10) {
            println!("  - {}", movie.title);
        }
    }

    Ok(())
}
