/// Library channel domain type
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// One channel of the library document
///
/// The library document is an array of channels; the `songs` array of a
/// configured channel becomes the library collection. Additional channel
/// metadata in the document is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Tracks carried by this channel
    pub songs: Vec<Track>,
}
