#![allow(clippy::unwrap_used)]
// Integration tests for `Player`: refresh and change detection, actions,
// browse, and the background probe / polling task, all driven by a scripted
// in-process dispatcher. One end-to-end test runs over HTTP with wiremock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::sync::{Barrier, broadcast};
use tokio::sync::broadcast::error::TryRecvError;
use vlcwatch_api::{Dispatch, Error, Request, Scope};
use vlcwatch_core::{CoreError, Level, Player, PlayerConfig, PlayerEvent, ProbeRetry};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Scripted dispatcher ─────────────────────────────────────────────

/// Reply for a request, given the 1-based number of calls made so far to
/// the same scope.
type Reply = Box<dyn Fn(&Request, usize) -> Result<Value, Error> + Send + Sync>;

struct Scripted {
    calls: Mutex<Vec<Request>>,
    reply: Reply,
}

impl Scripted {
    fn new(reply: impl Fn(&Request, usize) -> Result<Value, Error> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    /// A player that always answers with the same status and playlist.
    fn steady() -> Arc<Self> {
        Self::new(|req, _| Ok(body_for(req.scope, 256)))
    }

    fn requests(&self) -> Vec<Request> {
        self.calls.lock().unwrap().clone()
    }

    fn count(&self, scope: Scope) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.scope == scope)
            .count()
    }
}

impl Dispatch for Scripted {
    async fn dispatch(&self, request: &Request) -> Result<Value, Error> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(request.clone());
            calls.iter().filter(|r| r.scope == request.scope).count()
        };
        (self.reply)(request, n)
    }
}

/// A player whose playlist answers slowly, counting how many playlist
/// fetches are outstanding at once.
struct SlowPlaylist {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Dispatch for SlowPlaylist {
    async fn dispatch(&self, request: &Request) -> Result<Value, Error> {
        if request.scope == Scope::Playlist {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(body_for(request.scope, 256))
    }
}

/// A player that holds every answer until two requests are waiting.
struct Gated {
    barrier: Barrier,
}

impl Dispatch for Gated {
    async fn dispatch(&self, request: &Request) -> Result<Value, Error> {
        self.barrier.wait().await;
        Ok(body_for(request.scope, 256))
    }
}

fn unavailable(scope: Scope) -> Error {
    Error::HttpStatus {
        status: 503,
        url: format!("http://vlc/{}", scope.path()),
    }
}

// ── Fixtures ────────────────────────────────────────────────────────

fn status_json(volume: i64) -> Value {
    json!({
        "state": "playing",
        "volume": volume,
        "time": 12,
        "length": 200,
        "position": 0.06,
        "aspectratio": "16:9",
        "audiofilters": { "filter_0": "" },
        "videoeffects": { "hue": 0, "saturation": 1, "contrast": 1, "brightness": 1, "gamma": 1 },
        "information": {
            "chapter": 0,
            "chapters": [],
            "category": { "meta": { "title": "Song", "artist": "Band" } }
        },
        "stats": { "decodedvideo": 0, "playedabuffers": 500 },
        "apiversion": 3,
        "version": "3.0.18 Vetinari",
        "currentplid": 4
    })
}

fn playlist_json() -> Value {
    json!({
        "type": "node", "id": "1", "name": "", "ro": "ro",
        "children": [
            { "type": "node", "id": "2", "name": "Playlist", "ro": "ro", "children": [
                { "type": "leaf", "id": "4", "name": "Song", "ro": "rw",
                  "uri": "file:///music/song.flac", "duration": 200, "current": "current" }
            ]},
            { "type": "node", "id": "3", "name": "Media Library", "ro": "ro", "children": [] }
        ]
    })
}

fn body_for(scope: Scope, volume: i64) -> Value {
    match scope {
        Scope::Status => status_json(volume),
        Scope::Playlist => playlist_json(),
        Scope::Browse => json!({ "element": [] }),
    }
}

fn manual_config() -> PlayerConfig {
    PlayerConfig {
        auto_update: false,
        ..PlayerConfig::default()
    }
}

fn drain(rx: &mut broadcast::Receiver<PlayerEvent>) -> Vec<PlayerEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => return events,
        }
    }
}

fn names(events: &[PlayerEvent]) -> Vec<&'static str> {
    events.iter().map(PlayerEvent::name).collect()
}

// ── Change detection ────────────────────────────────────────────────

#[tokio::test]
async fn first_refresh_reports_change_without_previous() {
    let player = Player::with_dispatcher(manual_config(), Scripted::steady());
    let mut rx = player.subscribe();

    let status = player.update_status().await.unwrap();

    let events = drain(&mut rx);
    assert_eq!(names(&events), vec!["statuschange"]);
    let PlayerEvent::StatusChanged { previous, current } = &events[0] else {
        panic!("expected StatusChanged");
    };
    assert!(previous.is_none());
    assert_eq!(**current, *status);
    assert_eq!(player.status().as_deref(), Some(&*status));
}

#[tokio::test]
async fn unchanged_status_publishes_nothing() {
    let player = Player::with_dispatcher(manual_config(), Scripted::steady());
    player.update_status().await.unwrap();

    let mut rx = player.subscribe();
    player.update_status().await.unwrap();

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn map_key_order_does_not_count_as_a_change() {
    let bodies = [
        r#"{"state":"paused","audiofilters":{"a":"1","b":"2"},
            "information":{"category":{"meta":{"title":"T","artist":"X"}}}}"#,
        r#"{"information":{"category":{"meta":{"artist":"X","title":"T"}}},
            "audiofilters":{"b":"2","a":"1"},"state":"paused"}"#,
    ];
    let dispatcher = Scripted::new(move |_, n| Ok(serde_json::from_str(bodies[(n - 1) % 2]).unwrap()));
    let player = Player::with_dispatcher(manual_config(), dispatcher);

    player.update_status().await.unwrap();
    let mut rx = player.subscribe();
    player.update_status().await.unwrap();

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn changed_status_reports_previous_and_current() {
    let dispatcher = Scripted::new(|_, n| Ok(status_json(if n == 1 { 256 } else { 300 })));
    let player = Player::with_dispatcher(manual_config(), dispatcher);
    player.update_status().await.unwrap();

    let mut rx = player.subscribe();
    player.update_status().await.unwrap();

    let events = drain(&mut rx);
    assert_eq!(names(&events), vec!["statuschange"]);
    let PlayerEvent::StatusChanged { previous, current } = &events[0] else {
        panic!("expected StatusChanged");
    };
    assert_eq!(previous.as_ref().unwrap().volume, 256);
    assert_eq!(current.volume, 300);
    assert_eq!(player.status().unwrap().volume, 300);
}

#[tokio::test]
async fn playlist_changes_are_detected() {
    let dispatcher = Scripted::new(|_, n| {
        let mut body = playlist_json();
        if n > 1 {
            body["children"][0]["children"][0]["current"] = Value::Null;
        }
        Ok(body)
    });
    let player = Player::with_dispatcher(manual_config(), dispatcher);
    let mut rx = player.subscribe();

    let first = player.update_playlist().await.unwrap();
    let second = player.update_playlist().await.unwrap();
    player.update_playlist().await.unwrap();

    assert!(first.current().is_some());
    assert!(second.current().is_none());
    assert_eq!(names(&drain(&mut rx)), vec!["playlistchange", "playlistchange"]);
}

#[tokio::test]
async fn change_events_can_be_disabled() {
    let config = PlayerConfig {
        change_events: false,
        ..manual_config()
    };
    let dispatcher = Scripted::new(|req, n| Ok(body_for(req.scope, 100 + i64::try_from(n).unwrap())));
    let player = Player::with_dispatcher(config, dispatcher);
    let mut rx = player.subscribe();

    player.update_status().await.unwrap();
    player.update_status().await.unwrap();
    player.update_playlist().await.unwrap();

    assert!(drain(&mut rx).is_empty());
    assert_eq!(player.status().unwrap().volume, 102);
}

// ── Combined refresh ────────────────────────────────────────────────

#[tokio::test]
async fn update_all_matches_update_status_and_emits_one_update() {
    let player = Player::with_dispatcher(manual_config(), Scripted::steady());
    let independent = player.update_status().await.unwrap();

    let mut rx = player.subscribe();
    let (status, playlist) = player.update_all().await.unwrap();

    assert_eq!(*status, *independent);
    assert_eq!(playlist.leaves().len(), 1);

    let events = drain(&mut rx);
    // The status was already cached, so only the playlist is new.
    assert_eq!(names(&events), vec!["playlistchange", "update"]);
}

#[tokio::test]
async fn update_all_fetches_status_and_playlist_together() {
    let gated = Arc::new(Gated {
        barrier: Barrier::new(2),
    });
    let player = Player::with_dispatcher(manual_config(), gated);

    // Neither fetch is answered until the other one has been sent.
    let (status, playlist) = tokio::time::timeout(Duration::from_secs(2), player.update_all())
        .await
        .expect("fetches were issued one after the other")
        .unwrap();
    assert_eq!(status.volume, 256);
    assert_eq!(playlist.leaves().len(), 1);
}

#[tokio::test]
async fn update_all_failure_publishes_no_update() {
    let dispatcher = Scripted::new(|req, _| match req.scope {
        Scope::Playlist => Err(unavailable(Scope::Playlist)),
        scope => Ok(body_for(scope, 256)),
    });
    let player = Player::with_dispatcher(manual_config(), dispatcher);
    let mut rx = player.subscribe();

    let err = player.update_all().await.unwrap_err();

    assert!(err.is_transport());
    let events = drain(&mut rx);
    assert!(!names(&events).contains(&"update"));
    assert!(!names(&events).contains(&"error"));
    assert!(player.playlist().is_none());
}

#[tokio::test]
async fn undecodable_status_is_an_error_and_keeps_the_cache() {
    let dispatcher = Scripted::new(|_, n| {
        if n == 1 {
            Ok(status_json(256))
        } else {
            Ok(json!({ "state": "exploded" }))
        }
    });
    let player = Player::with_dispatcher(manual_config(), dispatcher);
    player.update_status().await.unwrap();
    let mut rx = player.subscribe();

    let err = player.update_status().await.unwrap_err();

    assert!(err.is_decode());
    assert!(drain(&mut rx).is_empty());
    assert_eq!(player.status().unwrap().volume, 256);
}

// ── Actions ─────────────────────────────────────────────────────────

#[tokio::test]
async fn action_returns_status_without_touching_cache_or_events() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    let status = player.play(Some(4)).await.unwrap();

    assert!(status.is_playing());
    assert!(player.status().is_none());
    assert!(drain(&mut rx).is_empty());

    let sent = dispatcher.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].scope, Scope::Status);
    assert_eq!(sent[0].query_string().as_deref(), Some("command=pl_play&id=4"));
}

#[tokio::test]
async fn failed_action_returns_err_and_publishes_nothing() {
    let dispatcher = Scripted::new(|req, _| Err(unavailable(req.scope)));
    let player = Player::with_dispatcher(manual_config(), dispatcher);
    let mut rx = player.subscribe();

    let err = player.pause(None).await.unwrap_err();

    assert!(err.is_transport());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn stop_and_force_pause_send_the_same_command() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));

    player.stop().await.unwrap();
    player.force_pause().await.unwrap();

    let sent = dispatcher.requests();
    assert_eq!(sent[0], sent[1]);
    assert_eq!(sent[0].command, Some("pl_forcepause"));
}

#[tokio::test]
async fn sort_playlist_sends_mode_as_id_and_order_as_val() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));

    player.sort_playlist(1, 5).await.unwrap();

    let sent = dispatcher.requests();
    assert_eq!(sent[0].params.get("id"), Some("5"));
    assert_eq!(sent[0].params.get("val"), Some("1"));
}

#[tokio::test]
async fn wrappers_map_to_wire_commands() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));

    player.set_volume(Level::Relative(-20)).await.unwrap();
    player.seek(Level::Percent(25.0)).await.unwrap();
    player.add_to_queue("file:///a.mp3").await.unwrap();
    player.set_equalizer(2, 1.5).await.unwrap();
    player.toggle_random().await.unwrap();

    let queries: Vec<String> = dispatcher
        .requests()
        .iter()
        .map(|r| r.query_string().unwrap())
        .collect();
    assert_eq!(
        queries,
        vec![
            "command=volume&val=-20",
            "command=seek&val=25%25",
            "command=in_enqueue&input=file%3A%2F%2F%2Fa.mp3",
            "command=equalizer&band=2&val=1.5",
            "command=pl_random",
        ]
    );
}

// ── Browse ──────────────────────────────────────────────────────────

#[tokio::test]
async fn browse_lists_entries_in_order() {
    let dispatcher = Scripted::new(|req, _| {
        assert_eq!(req.params.get("dir"), Some("/music"));
        Ok(json!({ "element": [
            { "type": "dir", "name": "..", "path": "/", "uri": "file:///",
              "size": 0, "mode": 16877, "uid": 0, "gid": 0,
              "access_time": 0, "creation_time": 0, "modification_time": 0 },
            { "type": "file", "name": "song.flac", "path": "/music/song.flac",
              "uri": "file:///music/song.flac", "size": 1024, "mode": 33188,
              "uid": 1000, "gid": 1000, "access_time": 1_700_000_000,
              "creation_time": 1_700_000_000, "modification_time": 1_700_000_000 }
        ]}))
    });
    let player = Player::with_dispatcher(manual_config(), dispatcher);

    let entries = player.browse("/music").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_dir());
    assert_eq!(entries[1].name, "song.flac");
    assert_eq!(entries[1].size, 1024);
    assert!(entries[1].modified.is_some());
    assert!(player.status().is_none());
}

// ── Background task ─────────────────────────────────────────────────

async fn next_event(rx: &mut broadcast::Receiver<PlayerEvent>) -> PlayerEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .unwrap()
}

#[tokio::test]
async fn successful_start_only_connects() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;

    assert_eq!(next_event(&mut rx).await.name(), "connect");
    assert!(player.status().is_none());

    // auto_update is off: nothing else happens.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(drain(&mut rx).is_empty());
    assert_eq!(dispatcher.count(Scope::Status), 1);
    assert_eq!(dispatcher.count(Scope::Playlist), 0);

    player.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn failed_probe_retries_then_reports_one_error() {
    let config = PlayerConfig {
        auto_update: true,
        probe: ProbeRetry {
            max_attempts: 3,
            interval: Duration::from_secs(1),
        },
        ..PlayerConfig::default()
    };
    let dispatcher = Scripted::new(|req, _| Err(unavailable(req.scope)));
    let player = Player::with_dispatcher(config, Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;

    let PlayerEvent::Error(err) = next_event(&mut rx).await else {
        panic!("expected Error");
    };
    assert!(err.is_transport());
    assert_eq!(dispatcher.count(Scope::Status), 3);

    // The polling loop was never armed.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(drain(&mut rx).is_empty());
    assert_eq!(dispatcher.count(Scope::Status), 3);

    player.shutdown().await;
}

#[tokio::test]
async fn probe_recovers_on_a_later_attempt() {
    let config = PlayerConfig {
        probe: ProbeRetry {
            max_attempts: 3,
            interval: Duration::from_millis(10),
        },
        ..manual_config()
    };
    let dispatcher = Scripted::new(|req, n| {
        if n < 3 {
            Err(unavailable(req.scope))
        } else {
            Ok(body_for(req.scope, 256))
        }
    });
    let player = Player::with_dispatcher(config, Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;

    assert_eq!(next_event(&mut rx).await.name(), "connect");
    assert_eq!(dispatcher.count(Scope::Status), 3);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(drain(&mut rx).is_empty());

    player.shutdown().await;
}

#[tokio::test]
async fn polling_ticks_refresh_and_stops_on_shutdown() {
    let config = PlayerConfig {
        auto_update: true,
        tick_length: Duration::from_millis(20),
        ..PlayerConfig::default()
    };
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(config, Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    player.shutdown().await;

    let events = drain(&mut rx);
    let ticks = events.iter().filter(|e| e.name() == "tick").count();
    let updates = events.iter().filter(|e| e.name() == "update").count();
    assert_eq!(events.first().map(PlayerEvent::name), Some("connect"));
    assert!(names(&events).contains(&"statuschange"));
    assert!(ticks >= 3, "only {ticks} ticks in 300ms");
    assert!(updates >= 1);
    assert!(dispatcher.count(Scope::Playlist) >= 1);

    // Refreshes already in flight may still land, but no new ticks.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!names(&drain(&mut rx)).contains(&"tick"));
    assert!(player.is_shut_down());
}

#[tokio::test]
async fn tick_delta_is_close_to_the_period() {
    let config = PlayerConfig {
        auto_update: true,
        tick_length: Duration::from_millis(25),
        ..PlayerConfig::default()
    };
    let player = Player::with_dispatcher(config, Scripted::steady());
    let mut rx = player.subscribe();

    player.start().await;
    let mut deltas = Vec::new();
    while deltas.len() < 4 {
        if let PlayerEvent::Tick { delta } = next_event(&mut rx).await {
            deltas.push(delta);
        }
    }
    player.shutdown().await;

    // The first delta includes the probe; later ones track the period.
    for delta in &deltas[1..] {
        assert!(*delta >= Duration::from_millis(5), "{delta:?}");
        assert!(*delta < Duration::from_millis(200), "{delta:?}");
    }
}

#[tokio::test]
async fn failed_scheduled_refresh_publishes_exactly_one_error() {
    let config = PlayerConfig {
        auto_update: true,
        tick_length: Duration::from_millis(20),
        ..PlayerConfig::default()
    };
    // Only the very first playlist fetch fails.
    let dispatcher = Scripted::new(|req, n| match req.scope {
        Scope::Playlist if n == 1 => Err(unavailable(Scope::Playlist)),
        scope => Ok(body_for(scope, 256)),
    });
    let player = Player::with_dispatcher(config, Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    player.shutdown().await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let events = drain(&mut rx);
    let errors = events.iter().filter(|e| e.name() == "error").count();
    assert_eq!(errors, 1);
    assert!(names(&events).contains(&"update"));
}

#[tokio::test]
async fn sub_threshold_tick_length_is_raised() {
    let config = PlayerConfig {
        auto_update: true,
        tick_length: Duration::from_millis(1),
        ..PlayerConfig::default()
    };
    let player = Player::with_dispatcher(config, Scripted::steady());
    let mut rx = player.subscribe();

    player.start().await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    player.shutdown().await;

    // A 1ms period would give ~200 ticks; the 16ms floor gives ~12.
    let ticks = drain(&mut rx).iter().filter(|e| e.name() == "tick").count();
    assert!(ticks <= 20, "{ticks} ticks in 200ms");
}

#[tokio::test]
async fn start_twice_spawns_one_task() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;
    player.start().await;
    assert_eq!(next_event(&mut rx).await.name(), "connect");
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(drain(&mut rx).is_empty());
    assert_eq!(dispatcher.count(Scope::Status), 1);
    player.shutdown().await;
}

#[tokio::test]
async fn start_after_shutdown_does_nothing() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;
    assert_eq!(next_event(&mut rx).await.name(), "connect");
    player.shutdown().await;

    player.start().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(drain(&mut rx).is_empty());
    assert_eq!(dispatcher.count(Scope::Status), 1);
    assert!(player.is_shut_down());
}

#[tokio::test]
async fn shutdown_before_start_sends_nothing() {
    let dispatcher = Scripted::steady();
    let player = Player::with_dispatcher(manual_config(), Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.shutdown().await;
    player.start().await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(drain(&mut rx).is_empty());
    assert_eq!(dispatcher.count(Scope::Status), 0);
}

#[tokio::test]
async fn ticks_do_not_wait_for_slow_refreshes() {
    let config = PlayerConfig {
        auto_update: true,
        tick_length: Duration::from_millis(20),
        ..PlayerConfig::default()
    };
    let dispatcher = Arc::new(SlowPlaylist {
        delay: Duration::from_millis(100),
        in_flight: AtomicUsize::new(0),
        max_in_flight: AtomicUsize::new(0),
    });
    let player = Player::with_dispatcher(config, Arc::clone(&dispatcher));
    let mut rx = player.subscribe();

    player.start().await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    player.shutdown().await;

    // Each playlist fetch outlasts several periods, yet ticks keep coming.
    let ticks = drain(&mut rx).iter().filter(|e| e.name() == "tick").count();
    assert!(ticks >= 5, "only {ticks} ticks in 300ms");
    let overlap = dispatcher.max_in_flight.load(Ordering::SeqCst);
    assert!(overlap > 1, "refreshes never overlapped (max {overlap})");
}

// ── Over HTTP ───────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_and_action_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(header("authorization", "Basic OnNlY3JldA=="))
        .and(query_param("command", "pl_sort"))
        .and(query_param("id", "5"))
        .and(query_param("val", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(256)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(128)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/playlist.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_json()))
        .mount(&server)
        .await;

    let addr = server.address();
    let config = PlayerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        password: "secret".to_string().into(),
        ..manual_config()
    };
    let player = Player::new(config).unwrap();

    let (status, playlist) = player.update_all().await.unwrap();
    assert_eq!(status.volume, 128);
    assert_eq!(status.title(), Some("Song"));
    assert_eq!(playlist.current().map(|l| l.id.as_str()), Some("4"));

    let answered = player.sort_playlist(1, 5).await.unwrap();
    assert_eq!(answered.volume, 256);
    assert_eq!(player.status().unwrap().volume, 128);
}

#[tokio::test]
async fn timeout_reports_the_configured_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(status_json(256))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let addr = server.address();
    let config = PlayerConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        timeout: Duration::from_millis(300),
        ..manual_config()
    };
    let player = Player::new(config).unwrap();

    let err = player.update_status().await.unwrap_err();
    assert!(
        matches!(err, CoreError::Timeout { timeout: Some(t) } if t == Duration::from_millis(300)),
        "{err:?}"
    );
    assert_eq!(err.to_string(), "Player request timed out after 300ms");
}

#[tokio::test]
async fn unreachable_player_is_a_connection_error() {
    let config = PlayerConfig {
        host: "127.0.0.1".into(),
        port: 1,
        timeout: Duration::from_secs(2),
        ..manual_config()
    };
    let player = Player::new(config).unwrap();

    let err = player.update_status().await.unwrap_err();
    assert!(err.is_transport());
}
