//! Repositories orchestrating the fetch-or-cache data flow.
//!
//! Every repository call hands back the receiving half of a bounded channel
//! over which a short sequence of [`Resource`] states is emitted:
//! `Loading(true)`, then success or error, then `Loading(false)`. The work
//! itself runs in a spawned task; dropping the receiver abandons it.
//!
//! [`Resource`]: marquee_shared::Resource

mod movie_list;
mod similar;

pub use movie_list::{CachedMovieRepository, MovieListRepository};
pub use similar::{SimilarMoviesRepository, TmdbSimilarMovies};

/// Capacity of the per-call emission channel. A call emits at most three
/// states, so emitters never block even if the receiver is slow.
pub(crate) const EMISSION_BUFFER: usize = 8;
