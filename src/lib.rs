//! plexname - rename media releases for the Plex Media Server
//!
//! This library crate exposes the renamer and its collaborators for the
//! binary and for integration testing. Release name parsing and path
//! synthesis live in the `plexname-parser` crate.

pub mod config;
pub mod fs;
pub mod metadata;
pub mod prompt;
pub mod renamer;
