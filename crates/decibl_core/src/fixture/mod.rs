//! Bundled seed data for the working sets.
//!
//! # Invariants
//! - Fixtures are compiled into the binary and parsed once per bootstrap.
//! - Seed ids are positive and unique per fixture.

use crate::model::entity::Entity;
use crate::model::reading_session::ReadingSession;
use crate::model::voice_note::VoiceNote;
use crate::repo::working_set::{RepoError, WorkingSet};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const VOICE_NOTES_FIXTURE: &str = include_str!("../../fixtures/voice_notes.json");
const READING_SESSIONS_FIXTURE: &str = include_str!("../../fixtures/reading_sessions.json");

#[derive(Debug)]
pub enum FixtureError {
    Parse {
        fixture: &'static str,
        source: serde_json::Error,
    },
    Invalid {
        fixture: &'static str,
        source: RepoError,
    },
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { fixture, source } => {
                write!(f, "fixture `{fixture}` is not valid JSON: {source}")
            }
            Self::Invalid { fixture, source } => {
                write!(f, "fixture `{fixture}` is inconsistent: {source}")
            }
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

/// Parsed bundled voice notes.
pub fn voice_note_fixtures() -> Result<Vec<VoiceNote>, FixtureError> {
    parse("voice_notes.json", VOICE_NOTES_FIXTURE)
}

/// Parsed bundled reading sessions.
pub fn reading_session_fixtures() -> Result<Vec<ReadingSession>, FixtureError> {
    parse("reading_sessions.json", READING_SESSIONS_FIXTURE)
}

/// Fresh working set seeded with the bundled voice notes.
pub fn seed_voice_notes() -> Result<WorkingSet<VoiceNote>, FixtureError> {
    seed("voice_notes.json", voice_note_fixtures()?)
}

/// Fresh working set seeded with the bundled reading sessions.
pub fn seed_reading_sessions() -> Result<WorkingSet<ReadingSession>, FixtureError> {
    seed("reading_sessions.json", reading_session_fixtures()?)
}

fn parse<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse { fixture, source })
}

fn seed<E: Entity>(
    fixture: &'static str,
    records: Vec<E>,
) -> Result<WorkingSet<E>, FixtureError> {
    WorkingSet::seeded(records).map_err(|source| FixtureError::Invalid { fixture, source })
}
