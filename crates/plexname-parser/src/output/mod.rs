//! Output naming for media servers.
//!
//! The parser describes a release; a metadata lookup supplies the canonical
//! title. [`PlexNamer`] combines the two into the directory and file name Plex
//! expects.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use plexname_parser::{parse, output::{plex_path, LookupResult}};
//!
//! let release = parse("Some.Title.S04E01.720p.HDTV.mkv");
//! let path = plex_path(&release, &LookupResult::new("Some Title", 2010), "mkv", "/tv").unwrap();
//!
//! assert_eq!(path.directory, PathBuf::from("/tv/Some Title (2010)/Season 04"));
//! assert_eq!(path.file_name, "Some Title (2010) - S04E01 - 720p.HDTV.mkv");
//! ```

mod plex;

pub use plex::{plex_name, plex_path, LookupResult, NamingError, PlexNamer, PlexPath};
