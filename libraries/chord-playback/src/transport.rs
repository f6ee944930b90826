//! Media transport boundary
//!
//! Abstracts the host environment's playable-media handle (an audio
//! element in a browser host). The sequencer never touches media state;
//! the `Player` calls through this trait.

use chord_core::types::Track;

use crate::error::Result;

/// Abstract playable-media handle
///
/// Implementors wrap whatever the host plays audio with. Transport-side
/// events (`loaded`, `time-advanced`, `ended`) flow the other way: the
/// host forwards them to the `Player`, `ended` in particular to
/// [`Player::handle_ended`](crate::Player::handle_ended).
pub trait MediaTransport: Send {
    /// Point the transport at a track's media URL
    fn load_track(&mut self, track: &Track) -> Result<()>;

    /// Begin or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping position
    fn pause(&mut self);

    /// Seek to an absolute position in seconds
    fn seek(&mut self, seconds: f64) -> Result<()>;

    /// Set the output volume (0.0..=1.0)
    fn set_volume(&mut self, volume: f32);
}
