//! Sorted collection views
//!
//! Each collection mode (library / playlist) owns one `Descriptor`: the
//! sorted presentation of its raw track list plus the cursor and shuffle
//! trajectory that navigate it.

use std::cmp::Ordering;

use chord_core::types::{Track, TrackId};

use crate::history::ShuffleHistory;
use crate::types::SortDirection;

/// Compare tracks by title, case-insensitively
///
/// Lowercasing stands in for locale collation; the comparison is total so
/// the stable sort keeps equal titles in document order.
fn title_cmp(a: &Track, b: &Track) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Stable-sort tracks by title in the given direction
pub(crate) fn sort_tracks(tracks: &mut [Track], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => tracks.sort_by(title_cmp),
        SortDirection::Descending => tracks.sort_by(|a, b| title_cmp(b, a)),
    }
}

/// Find a track's position by identity
pub(crate) fn position_of(tracks: &[Track], id: &TrackId) -> Option<usize> {
    tracks.iter().position(|track| &track.id == id)
}

/// Per-mode navigable view of a collection
///
/// Holds the sorted track list, the playback cursor, and the shuffle
/// trajectory for one collection mode. The cursor is always in
/// `0..tracks.len()` while the collection is non-empty.
#[derive(Debug, Clone)]
pub(crate) struct Descriptor {
    tracks: Vec<Track>,
    direction: SortDirection,
    cursor: usize,
    history: ShuffleHistory,
}

impl Descriptor {
    pub(crate) fn new(direction: SortDirection) -> Self {
        Self {
            tracks: Vec::new(),
            direction,
            cursor: 0,
            history: ShuffleHistory::new(),
        }
    }

    /// Replace the raw track list
    ///
    /// Re-sorts in the current direction, rewinds the cursor to the top,
    /// and restarts the shuffle trajectory there.
    pub(crate) fn replace_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        sort_tracks(&mut self.tracks, self.direction);
        self.cursor = 0;
        if self.tracks.is_empty() {
            self.history.clear();
        } else {
            self.history.reset_to(0);
        }
    }

    /// Flip the sort direction and re-sort
    ///
    /// The cursor follows the current track's identity into the new
    /// order; if the id is no longer present the cursor falls back to 0.
    pub(crate) fn toggle_direction(&mut self) -> SortDirection {
        let current_id = self.current().map(|track| track.id.clone());
        self.direction = self.direction.toggled();
        sort_tracks(&mut self.tracks, self.direction);
        self.cursor = current_id
            .and_then(|id| position_of(&self.tracks, &id))
            .unwrap_or(0);
        self.direction
    }

    pub(crate) fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, index: usize) {
        debug_assert!(index < self.tracks.len());
        self.cursor = index;
    }

    pub(crate) fn position_of(&self, id: &TrackId) -> Option<usize> {
        position_of(&self.tracks, id)
    }

    pub(crate) fn direction(&self) -> SortDirection {
        self.direction
    }

    pub(crate) fn history(&self) -> &ShuffleHistory {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut ShuffleHistory {
        &mut self.history
    }
}
