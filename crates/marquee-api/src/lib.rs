//! # marquee-api
//!
//! Remote client for the TMDB movie catalog.
//!
//! Exposes the raw transfer objects ([`MovieDto`], [`MovieListDto`]), the
//! [`MovieCatalog`] trait that the repository layer programs against, and
//! the reqwest-backed [`TmdbClient`] implementation.

pub mod client;
pub mod config;
pub mod model;

mod error;

pub use client::{MovieCatalog, TmdbClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use model::{MovieDto, MovieListDto};
