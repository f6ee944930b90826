//! Render adapter boundary
//!
//! The view layer receives state-change notifications and updates
//! presentation; the sequencer never reads rendered state back.

use chord_core::types::Track;

/// Presentation-side notifications
///
/// Implementors update the now-playing card, control indicators, and the
/// displayed track list. Calls arrive synchronously from `Player`
/// operations.
pub trait PlaybackRenderer: Send {
    /// A different track became current
    fn song_changed(&mut self, track: &Track);

    /// Playback started or paused
    fn play_state_changed(&mut self, playing: bool);

    /// Shuffle was toggled
    fn shuffle_state_changed(&mut self, shuffle: bool);

    /// Repeat was toggled
    fn repeat_state_changed(&mut self, repeat: bool);

    /// The displayed collection changed (switch, load, or re-sort)
    fn collection_displayed(&mut self, tracks: &[Track], is_library: bool);
}
