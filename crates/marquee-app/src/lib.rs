//! # marquee-app
//!
//! Application core of Marquee: the mapping functions between transfer,
//! cache, and domain shapes; the repositories that orchestrate
//! fetch-or-cache reads; and the per-screen state holders that fold
//! repository emissions into observable UI state.

pub mod mapper;
pub mod repository;
pub mod screen;

pub use repository::{
    CachedMovieRepository, MovieListRepository, SimilarMoviesRepository, TmdbSimilarMovies,
};
pub use screen::{
    DetailsController, DetailsState, HomeController, MovieListEvent, MovieListState,
    SimilarMoviesController, SimilarMoviesEvent,
};
