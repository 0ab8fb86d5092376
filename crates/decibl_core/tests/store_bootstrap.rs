use decibl_core::db::migrations::latest_version;
use decibl_core::db::{open_db, open_db_in_memory, DbError};
use decibl_core::fixture::{reading_session_fixtures, voice_note_fixtures};
use decibl_core::{
    AppConfig, DeciblApp, LatencyProfile, NewVoiceNote, Settings, Theme, VoiceId,
};
use rusqlite::Connection;

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn in_memory_store_is_fully_migrated() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_store_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decibl.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unopenable_store_path_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("store.sqlite3");

    match open_db(&path).unwrap_err() {
        DbError::Open { location, .. } => {
            assert_eq!(location, path.display().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bundled_fixtures_parse_with_unique_ids() {
    let notes = voice_note_fixtures().unwrap();
    let sessions = reading_session_fixtures().unwrap();
    assert_eq!(notes.iter().map(|note| note.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(
        sessions.iter().map(|session| session.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(sessions
        .iter()
        .all(|session| (0.0..=100.0).contains(&session.progress)));
}

#[test]
fn voice_note_wire_shape_is_camel_case() {
    let note = voice_note_fixtures().unwrap().remove(0);
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["audioUrl"], "demo-audio-1.mp3");
    assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
    assert!(json["formattedVersions"]["social"].is_string());
}

#[tokio::test]
async fn apps_bootstrap_with_isolated_working_sets() {
    let config = AppConfig {
        latency: LatencyProfile::zero(),
        ..AppConfig::default()
    };
    let first = DeciblApp::bootstrap(&config).unwrap();
    let second = DeciblApp::bootstrap(&config).unwrap();

    first.voice_notes.create(NewVoiceNote::default()).await;
    first.reading_sessions.delete(1).await.unwrap();

    assert_eq!(first.voice_notes.get_all().await.len(), 4);
    assert_eq!(second.voice_notes.get_all().await.len(), 3);
    assert_eq!(second.reading_sessions.get_all().await.len(), 3);
    assert_eq!(second.settings.get().await.unwrap(), Settings::default());
}

#[tokio::test]
async fn app_settings_use_configured_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        db_path: Some(dir.path().join("app.sqlite3")),
        latency: LatencyProfile::zero(),
        ..AppConfig::default()
    };

    {
        let app = DeciblApp::bootstrap(&config).unwrap();
        let mut settings = app.settings.get().await.unwrap();
        settings.theme = Theme::Dark;
        settings.default_voice = VoiceId::James;
        app.settings.update(&settings).await.unwrap();
    }

    let app = DeciblApp::bootstrap(&config).unwrap();
    let settings = app.settings.get().await.unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.default_voice, VoiceId::James);
}
