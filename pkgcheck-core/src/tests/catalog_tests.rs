use std::io::Write;

use super::*;

#[test]
fn parses_games_and_default_engine() {
    let json = r#"{
        "games": [
            {
                "game_name": "Quake",
                "app_id": "2310",
                "engine_link": "https://example.com",
                "download": [
                    {
                        "name": "quakespasm",
                        "url": "https://github.com/owner/repo/releases/download/v1.0/",
                        "file": "quakespasm.tar.xz"
                    }
                ]
            }
        ],
        "default_engine": {
            "game_name": "Default",
            "app_id": "default",
            "download": [
                { "name": "engine", "url": "https://host.example/", "file": "e.zip", "ignore_updates": true }
            ]
        }
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    assert_eq!(catalog.games.len(), 1);
    assert_eq!(catalog.games[0].game_name.as_deref(), Some("Quake"));
    assert_eq!(catalog.games[0].app_id, serde_json::json!("2310"));

    let entry = &catalog.games[0].download[0];
    assert_eq!(entry.display_name(), "quakespasm");
    assert_eq!(entry.file.as_deref(), Some("quakespasm.tar.xz"));
    assert!(!entry.ignore_all_checks);
    assert!(!entry.ignore_updates);

    let engine = catalog.default_engine.as_ref().unwrap();
    assert!(engine.download[0].ignore_updates);
}

#[test]
fn missing_sections_are_empty() {
    let catalog: Catalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.games.is_empty());
    assert!(catalog.default_engine.is_none());
    assert_eq!(catalog.downloads().count(), 0);
}

#[test]
fn null_fields_are_treated_as_missing() {
    let json = r#"{
        "games": null,
        "default_engine": {
            "game_name": null,
            "download": [
                { "name": null, "url": null, "file": null, "ignore_all_checks": null }
            ]
        }
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    assert!(catalog.games.is_empty());
    let engine = catalog.default_engine.unwrap();
    let entry = &engine.download[0];
    assert_eq!(entry.url, "");
    assert_eq!(entry.display_name(), "");
    assert!(entry.file.is_none());
    assert!(!entry.ignore_all_checks);
}

#[test]
fn numeric_app_id_is_kept_verbatim() {
    let json = r#"{ "games": [ { "game_name": "Doom", "app_id": 2280 } ] }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    assert_eq!(catalog.games[0].app_id, serde_json::json!(2280));
    assert!(catalog.games[0].download.is_empty());
}

#[test]
fn downloads_visit_games_then_default_engine() {
    let entry = |name: &str| DownloadEntry {
        name: Some(name.to_string()),
        ..Default::default()
    };
    let catalog = Catalog {
        games: vec![
            Game {
                game_name: Some("first".into()),
                download: vec![entry("a"), entry("b")],
                ..Default::default()
            },
            Game {
                game_name: Some("second".into()),
                download: vec![entry("c")],
                ..Default::default()
            },
        ],
        default_engine: Some(Game {
            game_name: Some("engine".into()),
            download: vec![entry("d")],
            ..Default::default()
        }),
    };

    let order: Vec<(&str, &str)> = catalog
        .downloads()
        .map(|(game, entry)| (game.game_name.as_deref().unwrap(), entry.display_name()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("first", "a"),
            ("first", "b"),
            ("second", "c"),
            ("engine", "d"),
        ]
    );
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"games":[{{"game_name":"X","download":[]}}]}}"#).unwrap();
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.games.len(), 1);
}

#[test]
fn load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata").join("packagessniper_v2.json");
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn load_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse catalog"));
}
