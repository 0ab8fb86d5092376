//! Voice note record and its formatting targets.
//!
//! # Invariants
//! - `formatted_versions` defaults to an empty map.
//! - `duration` is whole seconds.

use crate::model::entity::{Entity, EntityId, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded voice note with its simulated transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceNote {
    pub id: EntityId,
    pub transcription: String,
    /// Recording length in seconds.
    pub duration: u32,
    /// Opaque audio reference; never dereferenced by the core.
    pub audio_url: String,
    /// Generated text keyed by format name (`social`, `blog`, ...).
    #[serde(default)]
    pub formatted_versions: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a voice note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NewVoiceNote {
    pub transcription: String,
    pub duration: u32,
    pub audio_url: String,
    pub formatted_versions: BTreeMap<String, String>,
}

/// Partial update for a voice note. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct VoiceNotePatch {
    pub transcription: Option<String>,
    pub duration: Option<u32>,
    pub audio_url: Option<String>,
    /// Replaces the whole map when set.
    pub formatted_versions: Option<BTreeMap<String, String>>,
}

impl Entity for VoiceNote {
    type Draft = NewVoiceNote;
    type Patch = VoiceNotePatch;

    const KIND: EntityKind = EntityKind::VoiceNote;

    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: NewVoiceNote) -> Self {
        Self {
            id,
            transcription: draft.transcription,
            duration: draft.duration,
            audio_url: draft.audio_url,
            formatted_versions: draft.formatted_versions,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: VoiceNotePatch) {
        if let Some(transcription) = patch.transcription {
            self.transcription = transcription;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(audio_url) = patch.audio_url {
            self.audio_url = audio_url;
        }
        if let Some(formatted_versions) = patch.formatted_versions {
            self.formatted_versions = formatted_versions;
        }
    }
}

/// Output style offered by the simulated formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    Social,
    Blog,
    Pr,
    Article,
}

impl NoteFormat {
    pub const ALL: [NoteFormat; 4] = [Self::Social, Self::Blog, Self::Pr, Self::Article];

    /// Key used in `VoiceNote::formatted_versions`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Blog => "blog",
            Self::Pr => "pr",
            Self::Article => "article",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Social => "Social Post",
            Self::Blog => "Blog Article",
            Self::Pr => "Press Release",
            Self::Article => "Article",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == value.trim().to_ascii_lowercase())
    }
}
