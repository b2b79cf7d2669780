/// Base URL of the TMDB v3 REST API.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Base URL for poster / backdrop images (w500 rendition).
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// TMDB person id the home list is built around (Benedict Cumberbatch).
pub const DEFAULT_PERSON_ID: i64 = 71580;

/// TMDB API key. Normally this would live outside the repository; it is
/// embedded here so the application runs without any setup.
pub const TMDB_API_KEY: &str = "fde80ec0240b6d85418e79eb66a01117";

/// User-facing message when the movie list cannot be loaded.
pub const MSG_CANT_LOAD_MOVIES: &str = "Can't load movies";

/// User-facing message when a single movie lookup fails.
pub const MSG_CANT_LOAD_MOVIE: &str = "Error on loading movie";
