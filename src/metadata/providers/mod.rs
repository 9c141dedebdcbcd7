//! Concrete metadata provider implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`MetadataProvider`](super::MetadataProvider) trait.

mod http;
pub mod tmdb;
pub mod tvdb;

pub use tmdb::TmdbProvider;
pub use tvdb::TvdbProvider;
