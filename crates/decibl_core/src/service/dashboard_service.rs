//! Dashboard projection over voice notes and reading sessions.

use crate::model::entity::EntityId;
use crate::model::reading_session::ReadingSession;
use crate::model::voice_note::VoiceNote;
use crate::service::entity_service::{ReadingSessionService, VoiceNoteService};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// Listening minutes credited per reading session.
pub const MINUTES_PER_READING_SESSION: f64 = 15.0;
/// Entries shown in the recent-activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_notes: usize,
    pub total_sessions: usize,
    /// Rounded to one decimal place.
    pub hours_listened: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Voice,
    Reading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub id: EntityId,
    pub title: &'static str,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityItem>,
}

/// Read-only view combining both entity services.
#[derive(Clone)]
pub struct DashboardService {
    voice_notes: VoiceNoteService,
    reading_sessions: ReadingSessionService,
}

impl DashboardService {
    pub fn new(voice_notes: VoiceNoteService, reading_sessions: ReadingSessionService) -> Self {
        Self {
            voice_notes,
            reading_sessions,
        }
    }

    /// Loads both collections concurrently and builds the summary.
    pub async fn summary(&self) -> DashboardSummary {
        let (notes, sessions) =
            tokio::join!(self.voice_notes.get_all(), self.reading_sessions.get_all());
        DashboardSummary {
            stats: compute_stats(&notes, &sessions),
            recent_activity: recent_activity(&notes, &sessions, RECENT_ACTIVITY_LIMIT),
        }
    }
}

pub fn compute_stats(notes: &[VoiceNote], sessions: &[ReadingSession]) -> DashboardStats {
    let note_minutes = notes
        .iter()
        .map(|note| f64::from(note.duration))
        .sum::<f64>()
        / 60.0;
    let reading_minutes = sessions.len() as f64 * MINUTES_PER_READING_SESSION;
    let hours = (note_minutes + reading_minutes) / 60.0;

    DashboardStats {
        total_notes: notes.len(),
        total_sessions: sessions.len(),
        hours_listened: (hours * 10.0).round() / 10.0,
    }
}

/// Newest-first feed of notes and sessions, capped at `limit` entries.
pub fn recent_activity(
    notes: &[VoiceNote],
    sessions: &[ReadingSession],
    limit: usize,
) -> Vec<ActivityItem> {
    let note_items = notes.iter().map(|note| ActivityItem {
        kind: ActivityKind::Voice,
        id: note.id,
        title: "Voice Note Recorded",
        description: preview(&note.transcription, "Voice recording"),
        timestamp: note.created_at,
    });
    let session_items = sessions.iter().map(|session| ActivityItem {
        kind: ActivityKind::Reading,
        id: session.id,
        title: "Text Reading Session",
        description: preview(&session.text, "Reading session"),
        timestamp: session.created_at,
    });

    let mut items = note_items.chain(session_items).collect::<Vec<_>>();
    items.sort_by_key(|item| Reverse(item.timestamp));
    items.truncate(limit);
    items
}

fn preview(text: &str, fallback: &str) -> String {
    if text.trim().is_empty() {
        return fallback.to_string();
    }
    let mut preview = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect::<String>();
    preview.push_str("...");
    preview
}
