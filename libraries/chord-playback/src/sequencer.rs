//! Playback sequencer - core navigation state machine
//!
//! Decides which track is current and which plays next given the active
//! collection, the traversal policy (sequential, shuffle, repeat), and
//! user intent, while keeping the per-mode shuffle trajectories
//! consistent.

use chord_core::types::{Playlist, Track, TrackId};
use rand::thread_rng;
use tracing::debug;

use crate::collection::Descriptor;
use crate::error::{PlaybackError, Result};
use crate::shuffle;
use crate::types::{ActiveCollection, PlaybackConfig, SortDirection};

/// Playback navigation state machine
///
/// Owns the library and playlist collection views and answers "what track
/// is current" and "what plays next/previous". One instance serves the
/// whole application; operations are synchronous and run to completion,
/// so `&mut self` is the only concurrency guard needed in a
/// single-threaded callback host.
#[derive(Debug)]
pub struct PlaybackSequencer {
    // One descriptor per collection mode; histories never merge
    library: Descriptor,
    playlist: Descriptor,

    // Raw playlist data; the playlist descriptor shows one of these
    playlists: Vec<Playlist>,

    mode: ActiveCollection,
    shuffle: bool,
    repeat: bool,
}

impl PlaybackSequencer {
    /// Create a sequencer with empty collections
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            library: Descriptor::new(config.sort_direction),
            playlist: Descriptor::new(config.sort_direction),
            playlists: Vec::new(),
            mode: ActiveCollection::Library,
            shuffle: config.shuffle,
            repeat: config.repeat,
        }
    }

    fn descriptor(&self) -> &Descriptor {
        match self.mode {
            ActiveCollection::Library => &self.library,
            ActiveCollection::Playlist(_) => &self.playlist,
        }
    }

    fn descriptor_mut(&mut self) -> &mut Descriptor {
        match self.mode {
            ActiveCollection::Library => &mut self.library,
            ActiveCollection::Playlist(_) => &mut self.playlist,
        }
    }

    // ===== Loading =====

    /// Replace the library collection
    pub fn load_library(&mut self, tracks: Vec<Track>) {
        debug!(tracks = tracks.len(), "loading library collection");
        self.library.replace_tracks(tracks);
    }

    /// Replace the playlist list
    ///
    /// When a playlist is active its view is rebuilt from the new data;
    /// if its index no longer exists the sequencer falls back to the
    /// library collection.
    pub fn load_playlists(&mut self, playlists: Vec<Playlist>) {
        debug!(playlists = playlists.len(), "loading playlists");
        self.playlists = playlists;

        if let ActiveCollection::Playlist(index) = self.mode {
            match self.playlists.get(index) {
                Some(playlist) => {
                    let songs = playlist.songs.clone();
                    self.playlist.replace_tracks(songs);
                }
                None => self.mode = ActiveCollection::Library,
            }
        }
    }

    // ===== Selection & Mode =====

    /// Switch the active collection
    ///
    /// A playlist switch rebuilds that view from the top; switching back
    /// to the library keeps the library cursor so playback resumes where
    /// it left off. An out-of-range playlist index fails without touching
    /// any state.
    pub fn set_active_collection(&mut self, selector: ActiveCollection) -> Result<()> {
        match selector {
            ActiveCollection::Library => {
                self.mode = ActiveCollection::Library;
            }
            ActiveCollection::Playlist(index) => {
                let playlist = self
                    .playlists
                    .get(index)
                    .ok_or(PlaybackError::PlaylistIndexOutOfBounds(index))?;
                let songs = playlist.songs.clone();
                self.playlist.replace_tracks(songs);
                self.mode = ActiveCollection::Playlist(index);
            }
        }
        debug!(?selector, "active collection switched");
        Ok(())
    }

    /// Select a specific track in the active collection
    ///
    /// Fails without touching any state when the id is not a member.
    /// Under shuffle the trajectory restarts from the chosen track.
    pub fn select_track(&mut self, id: &TrackId) -> Result<()> {
        let shuffle = self.shuffle;
        let descriptor = self.descriptor_mut();
        let index = descriptor
            .position_of(id)
            .ok_or_else(|| PlaybackError::TrackNotFound(id.clone()))?;

        descriptor.set_cursor(index);
        if shuffle {
            descriptor.history_mut().reset_to(index);
        }
        Ok(())
    }

    // ===== Navigation =====

    /// Move to the next track
    ///
    /// Repeat pins the current track; shuffle draws from the unvisited
    /// remainder of the round; otherwise the cursor advances by one,
    /// wrapping at the end.
    pub fn advance(&mut self) -> Result<&Track> {
        if self.descriptor().is_empty() {
            return Err(PlaybackError::EmptyCollection);
        }

        if self.repeat {
            // Repeat wins over shuffle; nothing moves
        } else if self.shuffle {
            let descriptor = self.descriptor_mut();
            let len = descriptor.len();
            let cursor = descriptor.cursor();

            // Round exhausted: restart the trajectory at the current track
            if descriptor.history().len() >= len {
                descriptor.history_mut().reset_to(cursor);
            }

            let next = shuffle::draw_next(&mut thread_rng(), descriptor.history(), len, cursor);
            descriptor.set_cursor(next);
            descriptor.history_mut().record(next);
        } else {
            let descriptor = self.descriptor_mut();
            let next = (descriptor.cursor() + 1) % descriptor.len();
            descriptor.set_cursor(next);
        }

        let descriptor = self.descriptor();
        Ok(&descriptor.tracks()[descriptor.cursor()])
    }

    /// Move to the previous track
    ///
    /// Under shuffle this steps back one hop along the trajectory,
    /// stopping at its start. Otherwise the cursor moves back by one,
    /// wrapping at the front; repeat deliberately does not pin manual
    /// rewind.
    pub fn retreat(&mut self) -> Result<&Track> {
        if self.descriptor().is_empty() {
            return Err(PlaybackError::EmptyCollection);
        }

        if self.shuffle {
            let descriptor = self.descriptor_mut();
            if let Some(previous) = descriptor.history_mut().step_back() {
                descriptor.set_cursor(previous);
            }
        } else {
            let descriptor = self.descriptor_mut();
            let len = descriptor.len();
            let previous = (descriptor.cursor() + len - 1) % len;
            descriptor.set_cursor(previous);
        }

        let descriptor = self.descriptor();
        Ok(&descriptor.tracks()[descriptor.cursor()])
    }

    // ===== Mode toggles =====

    /// Flip shuffle
    ///
    /// Either transition restarts the active mode's trajectory at the
    /// current track, so no stale order leaks across the change.
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;

        let descriptor = self.descriptor_mut();
        if descriptor.is_empty() {
            descriptor.history_mut().clear();
        } else {
            let cursor = descriptor.cursor();
            descriptor.history_mut().reset_to(cursor);
        }

        debug!(shuffle = self.shuffle, "shuffle toggled");
        self.shuffle
    }

    /// Flip repeat
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        debug!(repeat = self.repeat, "repeat toggled");
        self.repeat
    }

    /// Flip the active collection's sort direction
    ///
    /// The cursor follows the current track's identity into the new
    /// order. The trajectory restarts there: its indices referred to the
    /// superseded order.
    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        let descriptor = self.descriptor_mut();
        let direction = descriptor.toggle_direction();

        if descriptor.is_empty() {
            descriptor.history_mut().clear();
        } else {
            let cursor = descriptor.cursor();
            descriptor.history_mut().reset_to(cursor);
        }

        debug!(?direction, "sort direction toggled");
        direction
    }

    // ===== State queries =====

    /// The track at the cursor, if the active collection is non-empty
    pub fn current_track(&self) -> Option<&Track> {
        self.descriptor().current()
    }

    /// The cursor position, if the active collection is non-empty
    pub fn current_index(&self) -> Option<usize> {
        if self.descriptor().is_empty() {
            None
        } else {
            Some(self.descriptor().cursor())
        }
    }

    /// The active collection's presented (sorted) tracks
    pub fn active_tracks(&self) -> &[Track] {
        self.descriptor().tracks()
    }

    /// Which collection is active
    pub fn active_collection(&self) -> ActiveCollection {
        self.mode
    }

    /// Whether the library collection is active
    pub fn is_library_mode(&self) -> bool {
        matches!(self.mode, ActiveCollection::Library)
    }

    /// The loaded playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Current shuffle state
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Current repeat state
    pub fn repeat_enabled(&self) -> bool {
        self.repeat
    }

    /// The active collection's sort direction
    pub fn sort_direction(&self) -> SortDirection {
        self.descriptor().direction()
    }
}

impl Default for PlaybackSequencer {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
