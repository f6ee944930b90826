//! Library and playlist document parsing
//!
//! The data loader collaborator fetches these documents; turning the
//! fetched text into domain types happens here. Parse failures surface
//! to the caller as errors - no retries.

use crate::error::Result;
use crate::types::{Channel, Playlist};

/// Parse a library document
///
/// The document is a JSON array of channel objects, each carrying a
/// `songs` array.
pub fn parse_library(document: &str) -> Result<Vec<Channel>> {
    Ok(serde_json::from_str(document)?)
}

/// Parse a playlist document
///
/// The document is a JSON array of playlist objects
/// (`{id, title, cover, songs}`).
pub fn parse_playlists(document: &str) -> Result<Vec<Playlist>> {
    Ok(serde_json::from_str(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const LIBRARY_DOC: &str = r#"[
        {
            "songs": [
                {"id": "t1", "title": "First Light", "author": "Mara Voss", "cover": "c1.jpg", "url": "t1.mp3"},
                {"id": "t2", "title": "Glass Harbor", "author": "Mara Voss", "cover": "c2.jpg", "url": "t2.mp3"}
            ]
        },
        {
            "songs": []
        }
    ]"#;

    const PLAYLIST_DOC: &str = r#"[
        {
            "id": "p1",
            "title": "Evening Drive",
            "cover": "p1.jpg",
            "songs": [
                {"id": "t3", "title": "Slow Signal", "author": "Eno Park", "cover": "c3.jpg", "url": "t3.mp3"}
            ]
        }
    ]"#;

    #[test]
    fn parse_library_document() {
        let channels = parse_library(LIBRARY_DOC).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].songs.len(), 2);
        assert_eq!(channels[0].songs[1].title, "Glass Harbor");
        assert!(channels[1].songs.is_empty());
    }

    #[test]
    fn parse_playlist_document() {
        let playlists = parse_playlists(PLAYLIST_DOC).unwrap();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].title, "Evening Drive");
        assert_eq!(playlists[0].songs[0].author, "Eno Park");
    }

    #[test]
    fn parse_truncated_document_fails() {
        let err = parse_library("[{\"songs\": [").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn parse_wrong_shape_fails() {
        // An object where an array is expected
        assert!(parse_playlists("{\"id\": \"p1\"}").is_err());
    }
}
