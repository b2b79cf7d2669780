//! # marquee-shared
//!
//! Types shared by every layer of the Marquee application: the domain
//! [`Movie`] model, the [`Resource`] progress envelope, and the fixed
//! constants for the TMDB catalog.

pub mod constants;
pub mod movie;
pub mod resource;

pub use movie::Movie;
pub use resource::Resource;
