//! Player facade - wires the sequencer to transport and renderer
//!
//! Owns the sequencer plus the injected transport and render adapters
//! and implements the event wiring between them: user intent flows in,
//! media commands and presentation notifications flow out.

use chord_core::types::{Track, TrackId};
use chord_core::{documents, CoreError};
use tracing::warn;

use crate::error::{PlaybackError, Result};
use crate::render::PlaybackRenderer;
use crate::sequencer::PlaybackSequencer;
use crate::transport::MediaTransport;
use crate::types::{ActiveCollection, PlaybackConfig, SortDirection};
use crate::volume::Volume;

/// Playback session facade
///
/// One instance per application. The transport and renderer are injected
/// at construction so hosts (and tests) decide what actually plays and
/// what actually renders.
pub struct Player {
    sequencer: PlaybackSequencer,
    transport: Box<dyn MediaTransport>,
    renderer: Box<dyn PlaybackRenderer>,

    volume: Volume,
    playing: bool,

    // Whether the transport has a track loaded
    loaded: bool,

    // Which channel of the library document is the library collection
    library_channel: usize,
}

impl Player {
    /// Create a player around the given adapters
    pub fn new(
        config: PlaybackConfig,
        transport: Box<dyn MediaTransport>,
        renderer: Box<dyn PlaybackRenderer>,
    ) -> Self {
        let mut player = Self {
            sequencer: PlaybackSequencer::new(&config),
            transport,
            renderer,
            volume: Volume::new(config.volume),
            playing: false,
            loaded: false,
            library_channel: config.library_channel,
        };
        let initial = player.volume.effective();
        player.transport.set_volume(initial);
        player
    }

    // ===== Loading =====

    /// Load the library collection from its JSON document
    ///
    /// Parse failures and a missing configured channel surface as
    /// `Data` errors; navigation stays unusable until a load succeeds.
    pub fn load_library_json(&mut self, document: &str) -> Result<()> {
        let channels = documents::parse_library(document)?;
        let channel_count = channels.len();
        let channel = channels
            .into_iter()
            .nth(self.library_channel)
            .ok_or_else(|| {
                PlaybackError::Data(CoreError::invalid_document(format!(
                    "library channel {} not present in document of {} channels",
                    self.library_channel, channel_count
                )))
            })?;

        self.sequencer.load_library(channel.songs);
        self.loaded = false;
        self.notify_collection();
        Ok(())
    }

    /// Load the playlist list from its JSON document
    pub fn load_playlists_json(&mut self, document: &str) -> Result<()> {
        let playlists = documents::parse_playlists(document)?;
        self.sequencer.load_playlists(playlists);
        self.notify_collection();
        Ok(())
    }

    // ===== Playback control =====

    /// Toggle between playing and paused
    ///
    /// The first play cues the current track into the transport.
    pub fn play_pause(&mut self) -> Result<()> {
        if self.playing {
            self.transport.pause();
            self.playing = false;
        } else {
            let track = self
                .sequencer
                .current_track()
                .cloned()
                .ok_or(PlaybackError::EmptyCollection)?;

            if !self.loaded {
                self.transport.load_track(&track)?;
                self.loaded = true;
                self.renderer.song_changed(&track);
            }
            self.transport.play()?;
            self.playing = true;
        }

        self.renderer.play_state_changed(self.playing);
        Ok(())
    }

    /// Skip to the next track and play it
    pub fn next(&mut self) -> Result<()> {
        let track = self.sequencer.advance()?.clone();
        self.start_track(&track)
    }

    /// Go to the previous track and play it
    pub fn previous(&mut self) -> Result<()> {
        let track = self.sequencer.retreat()?.clone();
        self.start_track(&track)
    }

    /// Transport reached the end of the current track
    ///
    /// Advances the sequencer and plays the result, which is what keeps
    /// the session rolling after each track.
    pub fn handle_ended(&mut self) -> Result<()> {
        let track = self.sequencer.advance()?.clone();
        self.start_track(&track)
    }

    /// User clicked a track in the displayed list
    pub fn select_track(&mut self, id: &TrackId) -> Result<()> {
        if let Err(err) = self.sequencer.select_track(id) {
            warn!(%id, "track selection rejected: {err}");
            return Err(err);
        }

        let track = self
            .sequencer
            .current_track()
            .cloned()
            .ok_or(PlaybackError::EmptyCollection)?;
        self.start_track(&track)
    }

    /// Switch the displayed collection
    pub fn show_collection(&mut self, selector: ActiveCollection) -> Result<()> {
        if let Err(err) = self.sequencer.set_active_collection(selector) {
            warn!("collection switch rejected: {err}");
            return Err(err);
        }
        self.notify_collection();
        Ok(())
    }

    // ===== Mode toggles =====

    /// Toggle shuffle and notify the view
    pub fn toggle_shuffle(&mut self) -> bool {
        let shuffle = self.sequencer.toggle_shuffle();
        self.renderer.shuffle_state_changed(shuffle);
        shuffle
    }

    /// Toggle repeat and notify the view
    pub fn toggle_repeat(&mut self) -> bool {
        let repeat = self.sequencer.toggle_repeat();
        self.renderer.repeat_state_changed(repeat);
        repeat
    }

    /// Toggle the active collection's sort direction and redisplay it
    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        let direction = self.sequencer.toggle_sort_direction();
        self.notify_collection();
        direction
    }

    // ===== Transport passthrough =====

    /// Seek within the current track
    pub fn seek(&mut self, seconds: f64) -> Result<()> {
        self.transport.seek(seconds)
    }

    /// Set the volume level (clamped to 0.0..=1.0)
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        let effective = self.volume.effective();
        self.transport.set_volume(effective);
    }

    /// Toggle mute, returning the new mute state
    pub fn toggle_mute(&mut self) -> bool {
        self.volume.toggle_mute();
        let effective = self.volume.effective();
        self.transport.set_volume(effective);
        self.volume.is_muted()
    }

    // ===== State queries =====

    /// The current track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.sequencer.current_track()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The stored volume level (mute does not change it)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Read-only access to the sequencer for richer queries
    pub fn sequencer(&self) -> &PlaybackSequencer {
        &self.sequencer
    }

    // ===== Internal =====

    fn start_track(&mut self, track: &Track) -> Result<()> {
        self.transport.load_track(track)?;
        self.loaded = true;
        self.transport.play()?;
        self.playing = true;
        self.renderer.song_changed(track);
        self.renderer.play_state_changed(true);
        Ok(())
    }

    fn notify_collection(&mut self) {
        let is_library = self.sequencer.is_library_mode();
        self.renderer
            .collection_displayed(self.sequencer.active_tracks(), is_library);
    }
}
