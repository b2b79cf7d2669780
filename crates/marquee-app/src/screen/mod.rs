//! Per-screen state holders.
//!
//! Each holder owns the state for one screen, publishes an immutable
//! snapshot per update through a `tokio::sync::watch` channel, and folds the
//! `Resource` emissions of a repository call in a single spawned task. A new
//! event aborts the task still in flight, so only the latest call's
//! emissions ever reach the state (latest-wins).

mod details;
mod home;
mod similar;

#[cfg(test)]
pub(crate) mod test_support;

pub use details::{DetailsController, DetailsState};
pub use home::{HomeController, MovieListEvent, MovieListState};
pub use similar::{SimilarMoviesController, SimilarMoviesEvent};
