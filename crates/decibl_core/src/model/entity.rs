//! Entity contract shared by all working-set records.
//!
//! # Responsibility
//! - Describe how a record is built from a draft and merged with a patch.
//! - Coerce caller-supplied identifiers into `EntityId`.
//!
//! # Invariants
//! - `from_draft` is the only constructor used by working sets.
//! - `apply_patch` never touches `id` or `created_at`.

use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// Positive integer identifier allocated by a working set.
pub type EntityId = u64;

/// Record family handled by an entity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    VoiceNote,
    ReadingSession,
}

impl EntityKind {
    /// Stable snake_case tag used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VoiceNote => "voice_note",
            Self::ReadingSession => "reading_session",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VoiceNote => write!(f, "voice note"),
            Self::ReadingSession => write!(f, "reading session"),
        }
    }
}

/// Record stored in a working set.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Caller-provided fields for `create`.
    type Draft: Send;
    /// Partial-field update for `update`.
    type Patch: Send;

    const KIND: EntityKind;

    fn id(&self) -> EntityId;
    fn created_at(&self) -> DateTime<Utc>;

    /// Builds the stored record from an allocated id and timestamp.
    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merges every field set in `patch` onto `self`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Identifier input accepted by entity services.
///
/// Integers map directly; text is parsed from its leading digits, so `"12"`
/// and `"12abc"` both address id 12. Input without a leading digit run never
/// matches any record.
pub trait IntoEntityId: Display {
    fn to_entity_id(&self) -> Option<EntityId>;
}

impl IntoEntityId for u64 {
    fn to_entity_id(&self) -> Option<EntityId> {
        Some(*self)
    }
}

impl IntoEntityId for u32 {
    fn to_entity_id(&self) -> Option<EntityId> {
        Some(EntityId::from(*self))
    }
}

impl IntoEntityId for usize {
    fn to_entity_id(&self) -> Option<EntityId> {
        EntityId::try_from(*self).ok()
    }
}

impl IntoEntityId for i32 {
    fn to_entity_id(&self) -> Option<EntityId> {
        EntityId::try_from(*self).ok()
    }
}

impl IntoEntityId for i64 {
    fn to_entity_id(&self) -> Option<EntityId> {
        EntityId::try_from(*self).ok()
    }
}

impl IntoEntityId for str {
    fn to_entity_id(&self) -> Option<EntityId> {
        parse_leading_id(self)
    }
}

impl IntoEntityId for String {
    fn to_entity_id(&self) -> Option<EntityId> {
        parse_leading_id(self)
    }
}

impl<T: IntoEntityId + ?Sized> IntoEntityId for &T {
    fn to_entity_id(&self) -> Option<EntityId> {
        (**self).to_entity_id()
    }
}

fn parse_leading_id(raw: &str) -> Option<EntityId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(unsigned.len(), |(index, _)| index);
    if digits_end == 0 {
        return None;
    }
    unsigned[..digits_end].parse().ok()
}
