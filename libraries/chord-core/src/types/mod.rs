//! Domain types for Chord

mod channel;
mod ids;
mod playlist;
mod track;

pub use channel::Channel;
pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::Track;
