//! Scenario tests for queue transitions and the achievements they unlock

use std::sync::Arc;
use xl_core::storage::keys;
use xl_core::traits::MockNotificationSink;
use xl_core::{
    BadgeId, Catalog, KeyValueStore, LogNotifier, MemoryStore, Source, SourcePlatform, Track,
    TrackId,
};
use xl_playback::{
    BadgeBook, Favorites, PlaybackConfig, PlaybackEvent, PlaybackManager, RepeatMode, TickOutcome,
};

fn track(id: &str, duration: u32) -> Track {
    Track {
        id: TrackId::new(id),
        title: format!("Track {id}"),
        artist: "XL Beats".to_string(),
        album: "Single".to_string(),
        album_art_url: String::new(),
        duration,
        sources: vec![Source::new(SourcePlatform::YouTube, "https://youtu.be/x", true)],
    }
}

fn catalog_manager(store: Arc<dyn KeyValueStore>, badges: BadgeBook) -> PlaybackManager {
    PlaybackManager::new(
        PlaybackConfig::default(),
        Catalog::default_catalog().albums,
        store,
        badges,
    )
}

mod queue_end {
    use super::*;

    #[test]
    fn two_track_queue_stops_on_last_track() {
        let mut manager = PlaybackManager::default();
        let a = track("A", 30);
        let b = track("B", 30);
        manager.play_track(a.clone(), Some(vec![a, b]));

        // Progress reaching 30 hands off to next
        for _ in 0..29 {
            manager.tick();
        }
        assert_eq!(manager.tick(), TickOutcome::TrackEnded);
        assert_eq!(manager.current_track().unwrap().id.as_str(), "B");
        assert!(manager.is_playing());

        manager.next();
        assert!(!manager.is_playing());
        assert_eq!(manager.current_track().unwrap().id.as_str(), "B");
        assert_eq!(manager.current_index(), Some(1));
    }

    #[test]
    fn previous_on_first_track_restarts_it() {
        let mut manager = PlaybackManager::default();
        let context = vec![track("A", 30), track("B", 30)];
        manager.play_track(context[0].clone(), Some(context));
        for _ in 0..12 {
            manager.tick();
        }
        assert_eq!(manager.progress(), 12);

        manager.previous();
        assert_eq!(manager.progress(), 0);
        assert_eq!(manager.current_track().unwrap().id.as_str(), "A");
        assert_eq!(manager.current_index(), Some(0));

        manager.cycle_repeat_mode();
        manager.cycle_repeat_mode();
        assert_eq!(manager.repeat_mode(), RepeatMode::One);
        manager.previous();
        assert_eq!(manager.current_track().unwrap().id.as_str(), "A");
    }
}

mod album_completion {
    use super::*;

    #[test]
    fn concrete_dreams_unlocks_once_each() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|msg| msg == "Achievement Unlocked: Album Completer!")
            .times(1)
            .return_const(());
        sink.expect_notify()
            .withf(|msg| msg == "Achievement Unlocked: Day One!")
            .times(1)
            .return_const(());

        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(sink));
        let mut manager = catalog_manager(store.clone(), badges.clone());

        let album = Catalog::default_catalog()
            .find_album("Concrete Dreams")
            .unwrap()
            .clone();
        manager.play_track(album.tracks[0].clone(), Some(album.tracks.clone()));
        manager.next();
        manager.next();
        assert!(!badges.is_earned(BadgeId::AlbumCompleter));

        // Transition away from the last track
        manager.next();
        assert!(badges.is_earned(BadgeId::AlbumCompleter));
        assert!(badges.is_earned(BadgeId::DayOne));
        assert!(!badges.is_earned(BadgeId::RetroFuturist));
        assert!(!manager.is_playing());

        // Crossing the boundary again re-evaluates but does not re-notify
        manager.next();

        let unlocked: Vec<BadgeId> = manager
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                PlaybackEvent::BadgeUnlocked { badge_id, .. } => Some(badge_id),
                _ => None,
            })
            .collect();
        assert_eq!(unlocked, vec![BadgeId::AlbumCompleter, BadgeId::DayOne]);

        let persisted = store.get(keys::EARNED_BADGES).unwrap();
        assert_eq!(persisted, r#"["album-completer","day-one"]"#);
    }

    #[test]
    fn completion_fires_with_repeat_all_wrap() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
        let mut manager = catalog_manager(store, badges.clone());
        manager.cycle_repeat_mode();

        let album = Catalog::default_catalog()
            .find_album("Vaporwave Nights")
            .unwrap()
            .clone();
        manager.play_track(album.tracks[1].clone(), Some(album.tracks.clone()));
        manager.next();

        assert!(badges.is_earned(BadgeId::RetroFuturist));
        assert!(badges.is_earned(BadgeId::AlbumCompleter));
        assert_eq!(manager.current_index(), Some(0));
        assert!(manager.is_playing());
    }

    #[test]
    fn shuffled_album_still_completes() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
        let mut manager = catalog_manager(store, badges.clone());
        manager.toggle_shuffle();

        let album = Catalog::default_catalog()
            .find_album("Concrete Dreams")
            .unwrap()
            .clone();
        manager.play_track(album.tracks[2].clone(), Some(album.tracks.clone()));
        manager.next();
        manager.next();
        manager.next();

        assert!(badges.is_earned(BadgeId::DayOne));
    }

    #[test]
    fn single_track_context_is_not_an_album() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
        let mut manager = catalog_manager(store, badges.clone());

        let catalog = Catalog::default_catalog();
        manager.play_track(catalog.singles[0].clone(), None);
        manager.next();

        assert!(badges.earned_ids().is_empty());
    }
}

mod favorites {
    use super::*;

    #[test]
    fn fifth_and_sixth_favorite_notify_once() {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|msg| msg == "Achievement Unlocked: Collector!")
            .times(1)
            .return_const(());

        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(sink));
        let mut favorites = Favorites::load(store.clone(), badges.clone());

        for id in ["xlb001", "xlb002", "xlb003", "xlb004", "xlb005", "xls01"] {
            assert!(favorites.toggle(&TrackId::new(id)));
        }
        assert_eq!(favorites.len(), 6);
        assert_eq!(badges.earned_ids(), vec![BadgeId::Collector]);
    }

    #[test]
    fn badges_and_favorites_survive_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
            let mut favorites = Favorites::load(store.clone(), badges);
            for id in ["xlb001", "xlb002", "xlb003", "xlb004", "xlb005"] {
                favorites.toggle(&TrackId::new(id));
            }
        }

        let mut sink = MockNotificationSink::new();
        sink.expect_notify().times(0);
        let badges = BadgeBook::load(store.clone(), Arc::new(sink));
        let mut favorites = Favorites::load(store, badges.clone());

        assert!(badges.is_earned(BadgeId::Collector));
        favorites.toggle(&TrackId::new("xls01"));
        assert_eq!(favorites.len(), 6);
    }
}

mod played_tracks {
    use super::*;

    #[test]
    fn replaying_does_not_count_twice() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
        let mut manager = catalog_manager(store.clone(), badges.clone());

        let tracks = Catalog::default_catalog().all_tracks();
        for t in &tracks {
            manager.play_track(t.clone(), None);
            manager.play_track(t.clone(), None);
        }
        assert_eq!(manager.played_count(), 6);
        assert!(!badges.is_earned(BadgeId::FlintAmbassador));

        // Played ids persist, so a later session picks up the count
        let mut later = catalog_manager(store, badges.clone());
        assert_eq!(later.played_count(), 6);
        later.play_track(track("new-1", 30), None);
        later.play_track(track("new-2", 30), None);
        assert!(badges.is_earned(BadgeId::FlintAmbassador));
    }
}
