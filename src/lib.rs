//! Add movies and TV shows listed in a text file to a TMDB list.
//!
//! - `cli` - argument parsing and the top-level run
//! - `config` - credentials from the `[tmdb]` table of the config file
//! - `tmdb` - blocking client for the TMDB v3 endpoints used here
//! - `lists` - picking or creating the target list
//! - `titles` - reading the title file
//! - `resolver` - turning a title into a movie or TV candidate
//! - `sync` - idempotent add to a list
//! - `workflow` - the per-title loop tying it all together

pub mod cli;
pub mod config;
pub mod error;
pub mod lists;
pub mod models;
pub mod prompt;
pub mod resolver;
pub mod sync;
pub mod titles;
pub mod tmdb;
pub mod workflow;

pub use error::SyncError;
pub use tmdb::TmdbClient;
