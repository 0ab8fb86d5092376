//! Core services for Decibl voice notes and text reading.
//! This crate owns every data contract the UI layer consumes.

pub mod app;
pub mod config;
pub mod db;
pub mod fixture;
pub mod latency;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::{AppError, DeciblApp};
pub use config::{AppConfig, ConfigError};
pub use latency::{delay, LatencyProfile, Operation};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::{
    InvalidSpeed, LanguageOption, PlaybackSpeed, VoiceId, VoiceProfile, LANGUAGE_CATALOG,
    VOICE_CATALOG,
};
pub use model::entity::{Entity, EntityId, EntityKind, IntoEntityId};
pub use model::reading_session::{
    clamp_progress, NewReadingSession, ReadingSession, ReadingSessionPatch,
};
pub use model::settings::{Hotkeys, Settings, Theme};
pub use model::voice_note::{NewVoiceNote, NoteFormat, VoiceNote, VoiceNotePatch};
pub use repo::kv_repo::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use repo::working_set::{EntityRepository, RepoError, RepoResult, WorkingSet, MAX_SEED_ID};
pub use service::dashboard_service::{
    ActivityItem, ActivityKind, DashboardService, DashboardStats, DashboardSummary,
};
pub use service::entity_service::{
    EntityService, ReadingSessionService, ServiceError, ServiceResult, VoiceNoteService,
};
pub use service::playback::{PlaybackSimulator, PlaybackState};
pub use service::reading_service::{clean_text, estimate_reading_minutes};
pub use service::settings_service::{SettingsError, SettingsService, SETTINGS_STORAGE_KEY};
pub use service::voice_note_service::{format_duration, live_transcription_preview};

/// Minimal health-check API for consumer wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
