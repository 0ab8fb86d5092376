//! Application context: every service built once and handed to consumers.
//!
//! # Invariants
//! - Each `DeciblApp` owns fresh working sets seeded from fixtures, so two
//!   apps never share records.
//! - Settings storage is migrated before the context is returned.

use crate::config::AppConfig;
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::fixture::{seed_reading_sessions, seed_voice_notes, FixtureError};
use crate::repo::kv_repo::SqliteKeyValueStore;
use crate::service::dashboard_service::DashboardService;
use crate::service::entity_service::{ReadingSessionService, VoiceNoteService};
use crate::service::settings_service::SettingsService;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AppError {
    Db(DbError),
    Fixture(FixtureError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Fixture(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Fixture(err) => Some(err),
        }
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<FixtureError> for AppError {
    fn from(value: FixtureError) -> Self {
        Self::Fixture(value)
    }
}

/// Services shared by every consumer of the core.
pub struct DeciblApp {
    pub voice_notes: VoiceNoteService,
    pub reading_sessions: ReadingSessionService,
    pub settings: SettingsService<SqliteKeyValueStore>,
    pub dashboard: DashboardService,
}

impl DeciblApp {
    /// Seeds the working sets, opens settings storage and wires services.
    ///
    /// Logging is not initialized here; call `init_logging` first when file
    /// logs are wanted.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, AppError> {
        let conn = match &config.db_path {
            Some(path) => open_db(path)?,
            None => open_db_in_memory()?,
        };

        let notes = seed_voice_notes()?;
        let sessions = seed_reading_sessions()?;
        info!(
            "event=app_bootstrap module=app status=ok voice_notes={} reading_sessions={}",
            notes.len(),
            sessions.len()
        );

        let voice_notes = VoiceNoteService::new(notes, config.latency);
        let reading_sessions = ReadingSessionService::new(sessions, config.latency);
        let dashboard = DashboardService::new(voice_notes.clone(), reading_sessions.clone());

        Ok(Self {
            voice_notes,
            reading_sessions,
            settings: SettingsService::new(SqliteKeyValueStore::new(conn), config.latency),
            dashboard,
        })
    }
}
