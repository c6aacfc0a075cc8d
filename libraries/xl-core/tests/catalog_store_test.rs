//! Catalog persistence against the JSON-file store
//!
//! Exercises the startup path: first run falls back to the built-in catalog,
//! admin imports persist, and the next run reads them back.

use xl_core::storage::{self, keys};
use xl_core::{Catalog, JsonFileStore, KeyValueStore, Source, SourcePlatform, Track, TrackId};

fn imported_single(title: &str) -> Track {
    Track {
        id: TrackId::generate(),
        title: title.to_string(),
        artist: "XL Beats".to_string(),
        album: "Single".to_string(),
        album_art_url: String::new(),
        duration: 180,
        sources: vec![Source::new(
            SourcePlatform::YouTube,
            "https://youtube.com/watch?v=abc",
            true,
        )],
    }
}

#[test]
fn first_run_uses_default_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json"));

    assert_eq!(Catalog::load(&store), Catalog::default_catalog());
    assert!(store.get(keys::ALBUMS).is_none());
}

#[test]
fn imported_singles_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let store = JsonFileStore::open(&path);
        let mut catalog = Catalog::load(&store);
        let added = catalog.add_singles(&store, vec![imported_single("Buick City Blues")]);
        assert_eq!(added, 1);
    }

    let store = JsonFileStore::open(&path);
    let catalog = Catalog::load(&store);
    assert_eq!(catalog.singles.len(), 2);
    assert!(catalog.singles.iter().any(|t| t.title == "Buick City Blues"));
    assert_eq!(catalog.albums.len(), 2);
}

#[test]
fn persisted_catalog_uses_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("state.json"));
    Catalog::default_catalog().save(&store);

    let raw = store.get(keys::SINGLES).unwrap();
    assert!(raw.contains("\"albumArtUrl\""));
    assert!(raw.contains("\"isEmbeddable\""));

    let singles: Vec<Track> = storage::load_json(&store, keys::SINGLES).unwrap();
    assert_eq!(singles[0].id.as_str(), "xls01");
}
