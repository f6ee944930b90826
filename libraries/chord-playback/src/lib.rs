//! Chord - Playback Sequencing
//!
//! Host-agnostic playback sequencing for Chord.
//!
//! This crate provides:
//! - The playback sequencer (library/playlist modes, sequential, shuffle
//!   and repeat traversal, per-mode shuffle trajectories)
//! - Sorted collection views (title order, ascending/descending,
//!   identity-stable re-sorts)
//! - Volume state (clamped level, mute/unmute)
//! - The `MediaTransport` and `PlaybackRenderer` adapter boundaries
//! - The `Player` facade wiring the three together
//!
//! # Architecture
//!
//! `chord-playback` never touches the host directly:
//! - No DOM or audio-element access
//! - No network I/O (documents arrive as text, fetched by the host)
//!
//! The host supplies both adapters; a fake transport is all a test needs.
//!
//! # Example: Sequencing
//!
//! ```rust
//! use chord_playback::{PlaybackSequencer, Track};
//!
//! let mut sequencer = PlaybackSequencer::default();
//! sequencer.load_library(vec![
//!     Track::new("t1", "First Light", "Mara Voss"),
//!     Track::new("t2", "Glass Harbor", "Mara Voss"),
//! ]);
//!
//! assert_eq!(sequencer.current_track().unwrap().id.as_str(), "t1");
//! sequencer.advance().ok();
//! assert_eq!(sequencer.current_track().unwrap().id.as_str(), "t2");
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use chord_playback::PlaybackSequencer;
//!
//! let mut sequencer = PlaybackSequencer::default();
//!
//! // Shuffle restarts the trajectory from the current track
//! sequencer.toggle_shuffle();
//!
//! // Repeat pins `advance` to the current track
//! sequencer.toggle_repeat();
//! ```

mod collection;
mod error;
mod history;
mod player;
mod render;
mod sequencer;
mod shuffle;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use player::Player;
pub use render::PlaybackRenderer;
pub use sequencer::PlaybackSequencer;
pub use transport::MediaTransport;
pub use types::{ActiveCollection, PlaybackConfig, SortDirection};
pub use volume::Volume;

// Domain types come from chord-core; re-exported for convenience
pub use chord_core::types::{Channel, Playlist, PlaylistId, Track, TrackId};
