//! Chord Core
//!
//! Platform-agnostic domain types and document parsing for Chord.
//!
//! This crate provides the foundational building blocks shared by the
//! playback layer and any host integration:
//! - **Domain Types**: `Track`, `Playlist`, `Channel` and their ID newtypes
//! - **Document Parsing**: the JSON library/playlist documents delivered by
//!   the data loader
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chord_core::types::{Playlist, PlaylistId, Track};
//!
//! // Create a track
//! let track = Track::new("t1", "First Light", "Mara Voss");
//!
//! // Create a playlist and add the track
//! let mut playlist = Playlist::new(PlaylistId::new("p1"), "Evening Drive");
//! playlist.songs.push(track);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod documents;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{Channel, Playlist, PlaylistId, Track, TrackId};
