//! Progress clock driving a session under paused tokio time

use std::time::Duration;
use tokio::time;
use xl_core::{Source, SourcePlatform, Track, TrackId};
use xl_playback::{PlaybackManager, PlaybackSession, DEFAULT_TICK};

fn track(id: &str, duration: u32, embeddable: bool) -> Track {
    Track {
        id: TrackId::new(id),
        title: format!("Track {id}"),
        artist: "XL Beats".to_string(),
        album: "Single".to_string(),
        album_art_url: String::new(),
        duration,
        sources: vec![Source::new(SourcePlatform::YouTube, "https://youtu.be/x", embeddable)],
    }
}

fn session() -> PlaybackSession {
    PlaybackSession::new(PlaybackManager::default(), DEFAULT_TICK)
}

#[tokio::test(start_paused = true)]
async fn clock_advances_to_next_track() {
    let mut s = session();
    let context = vec![track("a", 3, true), track("b", 10, true)];
    s.play_track(context[0].clone(), Some(context)).await;

    time::sleep(Duration::from_millis(3500)).await;
    let snap = s.snapshot().await;
    assert_eq!(snap.current_track_id, Some(TrackId::new("b")));
    assert_eq!(snap.progress_secs, 0);
    assert!(snap.is_playing);

    time::sleep(Duration::from_secs(2)).await;
    assert_eq!(s.snapshot().await.progress_secs, 2);
}

#[tokio::test(start_paused = true)]
async fn clock_stops_at_end_of_queue() {
    let mut s = session();
    s.play_track(track("a", 2, true), None).await;

    time::sleep(Duration::from_millis(2500)).await;
    let snap = s.snapshot().await;
    assert!(!snap.is_playing);
    assert_eq!(snap.current_track_id, Some(TrackId::new("a")));

    // Let the task observe the stop and exit
    time::sleep(Duration::from_secs(1)).await;
    assert!(!s.is_clock_running());
}

#[tokio::test(start_paused = true)]
async fn clock_stops_on_linked_next_track() {
    let mut s = session();
    let context = vec![track("a", 2, true), track("b", 60, false)];
    s.play_track(context[0].clone(), Some(context)).await;

    time::sleep(Duration::from_secs(10)).await;
    let snap = s.snapshot().await;
    assert_eq!(snap.current_track_id, Some(TrackId::new("b")));
    assert!(snap.is_playing);
    assert_eq!(snap.progress_secs, 0);
    assert!(!s.is_clock_running());
}

#[tokio::test(start_paused = true)]
async fn manual_next_restarts_clock_without_doubling() {
    let mut s = session();
    let context = vec![track("a", 60, true), track("b", 60, true)];
    s.play_track(context[0].clone(), Some(context)).await;

    time::sleep(Duration::from_millis(1500)).await;
    s.next().await;
    time::sleep(Duration::from_millis(3500)).await;

    let snap = s.snapshot().await;
    assert_eq!(snap.current_track_id, Some(TrackId::new("b")));
    assert_eq!(snap.progress_secs, 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_stops_ticks() {
    let mut s = session();
    s.play_track(track("a", 60, true), None).await;
    let manager = s.manager();

    time::sleep(Duration::from_millis(2500)).await;
    drop(s);
    time::sleep(Duration::from_secs(10)).await;

    assert_eq!(manager.lock().await.progress(), 2);
}

#[tokio::test(start_paused = true)]
async fn selecting_embeddable_source_starts_clock() {
    let mut s = session();
    let mut t = track("a", 60, false);
    t.sources.push(Source::new(SourcePlatform::YouTube, "https://youtu.be/y", true));
    s.play_track(t, None).await;

    // Active source is the first embeddable one
    assert!(s.is_clock_running());

    s.select_source(0).await.unwrap();
    assert!(!s.is_clock_running());

    s.select_source(1).await.unwrap();
    time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(s.snapshot().await.progress_secs, 1);
}
