//! Integration tests for the player facade
//!
//! Drives the full wiring: documents in, transport commands and render
//! notifications out, with recording mocks standing in for the host.

use std::sync::{Arc, Mutex};

use chord_playback::{
    ActiveCollection, MediaTransport, PlaybackConfig, PlaybackError, PlaybackRenderer, Player,
    Result, Track, TrackId,
};

// ===== Test Helpers =====

#[derive(Default)]
struct TransportLog {
    loaded: Vec<String>,
    plays: usize,
    pauses: usize,
    seeks: Vec<f64>,
    volumes: Vec<f32>,
}

#[derive(Clone, Default)]
struct MockTransport {
    log: Arc<Mutex<TransportLog>>,
}

impl MediaTransport for MockTransport {
    fn load_track(&mut self, track: &Track) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .loaded
            .push(track.id.as_str().to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.log.lock().unwrap().plays += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().pauses += 1;
    }

    fn seek(&mut self, seconds: f64) -> Result<()> {
        self.log.lock().unwrap().seeks.push(seconds);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.lock().unwrap().volumes.push(volume);
    }
}

#[derive(Default)]
struct RenderLog {
    songs: Vec<String>,
    play_states: Vec<bool>,
    shuffle_states: Vec<bool>,
    repeat_states: Vec<bool>,
    /// (track count, is_library) per notification
    collections: Vec<(usize, bool)>,
}

#[derive(Clone, Default)]
struct MockRenderer {
    log: Arc<Mutex<RenderLog>>,
}

impl PlaybackRenderer for MockRenderer {
    fn song_changed(&mut self, track: &Track) {
        self.log
            .lock()
            .unwrap()
            .songs
            .push(track.id.as_str().to_string());
    }

    fn play_state_changed(&mut self, playing: bool) {
        self.log.lock().unwrap().play_states.push(playing);
    }

    fn shuffle_state_changed(&mut self, shuffle: bool) {
        self.log.lock().unwrap().shuffle_states.push(shuffle);
    }

    fn repeat_state_changed(&mut self, repeat: bool) {
        self.log.lock().unwrap().repeat_states.push(repeat);
    }

    fn collection_displayed(&mut self, tracks: &[Track], is_library: bool) {
        self.log
            .lock()
            .unwrap()
            .collections
            .push((tracks.len(), is_library));
    }
}

const LIBRARY_DOC: &str = r#"[
    {
        "songs": [
            {"id": "a", "title": "Alpha", "author": "Mara Voss", "cover": "a.jpg", "url": "a.mp3"},
            {"id": "b", "title": "Beta", "author": "Mara Voss", "cover": "b.jpg", "url": "b.mp3"},
            {"id": "c", "title": "Gamma", "author": "Eno Park", "cover": "c.jpg", "url": "c.mp3"}
        ]
    },
    {
        "songs": [
            {"id": "d", "title": "Delta", "author": "Eno Park", "cover": "d.jpg", "url": "d.mp3"}
        ]
    }
]"#;

const PLAYLIST_DOC: &str = r#"[
    {
        "id": "p1",
        "title": "Evening Drive",
        "cover": "p1.jpg",
        "songs": [
            {"id": "x", "title": "Xenon", "author": "Juno Reyes", "cover": "x.jpg", "url": "x.mp3"},
            {"id": "y", "title": "Yarrow", "author": "Juno Reyes", "cover": "y.jpg", "url": "y.mp3"}
        ]
    }
]"#;

fn wired_player(config: PlaybackConfig) -> (Player, Arc<Mutex<TransportLog>>, Arc<Mutex<RenderLog>>) {
    let transport = MockTransport::default();
    let renderer = MockRenderer::default();
    let transport_log = transport.log.clone();
    let render_log = renderer.log.clone();
    let player = Player::new(config, Box::new(transport), Box::new(renderer));
    (player, transport_log, render_log)
}

fn player_with_docs() -> (Player, Arc<Mutex<TransportLog>>, Arc<Mutex<RenderLog>>) {
    let (mut player, transport_log, render_log) = wired_player(PlaybackConfig::default());
    player.load_library_json(LIBRARY_DOC).unwrap();
    player.load_playlists_json(PLAYLIST_DOC).unwrap();
    (player, transport_log, render_log)
}

// ===== Integration Tests =====

#[test]
fn construction_pushes_initial_volume_to_transport() {
    let (_player, transport_log, _render_log) = wired_player(PlaybackConfig::default());
    assert_eq!(transport_log.lock().unwrap().volumes, [0.5]);
}

#[test]
fn loading_documents_displays_the_active_collection() {
    let (_player, _transport_log, render_log) = player_with_docs();

    let log = render_log.lock().unwrap();
    // One notification per load; the library stays active throughout
    assert_eq!(log.collections, [(3, true), (3, true)]);
}

#[test]
fn ended_event_chains_to_the_next_track() {
    let (mut player, transport_log, render_log) = player_with_docs();

    player.handle_ended().unwrap();
    player.handle_ended().unwrap();

    let transport = transport_log.lock().unwrap();
    assert_eq!(transport.loaded, ["b", "c"]);
    assert_eq!(transport.plays, 2);

    let render = render_log.lock().unwrap();
    assert_eq!(render.songs, ["b", "c"]);
    assert_eq!(render.play_states, [true, true]);
}

#[test]
fn next_and_previous_start_the_neighbouring_track() {
    let (mut player, transport_log, render_log) = player_with_docs();

    player.next().unwrap();
    player.next().unwrap();
    player.previous().unwrap();

    {
        let transport = transport_log.lock().unwrap();
        assert_eq!(transport.loaded, ["b", "c", "b"]);
        assert_eq!(transport.plays, 3);
    }
    assert!(player.is_playing());
    assert_eq!(render_log.lock().unwrap().songs, ["b", "c", "b"]);
}

#[test]
fn play_pause_cues_then_toggles() {
    let (mut player, transport_log, render_log) = player_with_docs();

    // First play cues the current track
    player.play_pause().unwrap();
    assert!(player.is_playing());
    {
        let transport = transport_log.lock().unwrap();
        assert_eq!(transport.loaded, ["a"]);
        assert_eq!(transport.plays, 1);
    }

    // Pause
    player.play_pause().unwrap();
    assert!(!player.is_playing());
    assert_eq!(transport_log.lock().unwrap().pauses, 1);

    // Resume does not reload the track
    player.play_pause().unwrap();
    {
        let transport = transport_log.lock().unwrap();
        assert_eq!(transport.loaded, ["a"]);
        assert_eq!(transport.plays, 2);
    }

    let render = render_log.lock().unwrap();
    assert_eq!(render.play_states, [true, false, true]);
    assert_eq!(render.songs, ["a"]);
}

#[test]
fn play_before_any_load_fails() {
    let (mut player, transport_log, _render_log) = wired_player(PlaybackConfig::default());

    assert!(matches!(
        player.play_pause(),
        Err(PlaybackError::EmptyCollection)
    ));
    assert_eq!(transport_log.lock().unwrap().plays, 0);
}

#[test]
fn selecting_a_track_starts_it() {
    let (mut player, transport_log, render_log) = player_with_docs();

    player.select_track(&TrackId::new("c")).unwrap();
    assert_eq!(transport_log.lock().unwrap().loaded, ["c"]);
    assert_eq!(render_log.lock().unwrap().songs, ["c"]);
    assert!(player.is_playing());
}

#[test]
fn selecting_an_unknown_track_changes_nothing() {
    let (mut player, transport_log, _render_log) = player_with_docs();
    player.select_track(&TrackId::new("c")).unwrap();

    let err = player.select_track(&TrackId::new("nope")).unwrap_err();
    assert!(matches!(err, PlaybackError::TrackNotFound(_)));
    assert_eq!(player.current_track().unwrap().id.as_str(), "c");
    assert_eq!(transport_log.lock().unwrap().loaded, ["c"]);
}

#[test]
fn switching_collections_redisplays_and_validates() {
    let (mut player, _transport_log, render_log) = player_with_docs();

    player
        .show_collection(ActiveCollection::Playlist(0))
        .unwrap();
    assert_eq!(
        render_log.lock().unwrap().collections.last(),
        Some(&(2, false))
    );

    player.show_collection(ActiveCollection::Library).unwrap();
    assert_eq!(
        render_log.lock().unwrap().collections.last(),
        Some(&(3, true))
    );

    let notifications = render_log.lock().unwrap().collections.len();
    let err = player
        .show_collection(ActiveCollection::Playlist(9))
        .unwrap_err();
    assert!(matches!(err, PlaybackError::PlaylistIndexOutOfBounds(9)));
    assert_eq!(render_log.lock().unwrap().collections.len(), notifications);
}

#[test]
fn configured_library_channel_selects_collection() {
    let config = PlaybackConfig {
        library_channel: 1,
        ..Default::default()
    };
    let (mut player, _transport_log, _render_log) = wired_player(config);
    player.load_library_json(LIBRARY_DOC).unwrap();

    assert_eq!(player.current_track().unwrap().id.as_str(), "d");
}

#[test]
fn missing_library_channel_is_a_data_error() {
    let config = PlaybackConfig {
        library_channel: 7,
        ..Default::default()
    };
    let (mut player, _transport_log, _render_log) = wired_player(config);

    let err = player.load_library_json(LIBRARY_DOC).unwrap_err();
    assert!(matches!(err, PlaybackError::Data(_)));
}

#[test]
fn parse_failure_leaves_navigation_disabled() {
    let (mut player, transport_log, _render_log) = wired_player(PlaybackConfig::default());

    let err = player.load_library_json("[{\"songs\": [").unwrap_err();
    assert!(matches!(err, PlaybackError::Data(_)));

    assert!(matches!(player.next(), Err(PlaybackError::EmptyCollection)));
    assert!(transport_log.lock().unwrap().loaded.is_empty());
}

#[test]
fn repeat_replays_the_same_track_on_ended() {
    let (mut player, transport_log, _render_log) = player_with_docs();
    player.toggle_repeat();

    player.handle_ended().unwrap();
    player.handle_ended().unwrap();

    let transport = transport_log.lock().unwrap();
    assert_eq!(transport.loaded, ["a", "a"]);
    assert_eq!(transport.plays, 2);
}

#[test]
fn mode_toggles_notify_the_renderer() {
    let (mut player, _transport_log, render_log) = player_with_docs();

    assert!(player.toggle_shuffle());
    assert!(player.toggle_repeat());
    assert!(!player.toggle_shuffle());

    let log = render_log.lock().unwrap();
    assert_eq!(log.shuffle_states, [true, false]);
    assert_eq!(log.repeat_states, [true]);
}

#[test]
fn sort_toggle_redisplays_the_collection() {
    let (mut player, _transport_log, render_log) = player_with_docs();

    let before = render_log.lock().unwrap().collections.len();
    player.toggle_sort_direction();
    assert_eq!(render_log.lock().unwrap().collections.len(), before + 1);
}

#[test]
fn volume_is_clamped_and_mute_round_trips() {
    let (mut player, transport_log, _render_log) = player_with_docs();

    player.set_volume(1.5);
    assert_eq!(player.volume(), 1.0);
    assert_eq!(transport_log.lock().unwrap().volumes.last(), Some(&1.0));

    assert!(player.toggle_mute());
    assert_eq!(transport_log.lock().unwrap().volumes.last(), Some(&0.0));

    assert!(!player.toggle_mute());
    assert_eq!(transport_log.lock().unwrap().volumes.last(), Some(&1.0));
}

#[test]
fn seek_passes_through_to_transport() {
    let (mut player, transport_log, _render_log) = player_with_docs();

    player.seek(42.5).unwrap();
    assert_eq!(transport_log.lock().unwrap().seeks, [42.5]);
}
