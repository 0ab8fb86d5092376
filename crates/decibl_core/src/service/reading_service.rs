//! Reader use-cases: text cleanup, reading-time estimate, session tracking.
//!
//! # Invariants
//! - `clean_text` is deterministic and idempotent on its own output.
//! - Stored progress is always clamped to `[0, 100]`.

use crate::model::catalog::{PlaybackSpeed, VoiceId};
use crate::model::entity::IntoEntityId;
use crate::model::reading_session::{NewReadingSession, ReadingSession, ReadingSessionPatch};
use crate::repo::working_set::EntityRepository;
use crate::service::entity_service::{EntityService, ServiceError, ServiceResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Base narration rate at 1.0x.
pub const WORDS_PER_MINUTE: f64 = 150.0;

static MARKDOWN_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#*_`]").expect("valid markdown marker regex"));
static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("valid citation regex"));
static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

/// Prepares pasted text for narration.
///
/// Rules, applied in order:
/// - drop the markdown markers `#`, `*`, `_` and backtick;
/// - drop bracketed runs such as `[1]` or `[citation needed]`;
/// - replace each newline/whitespace/newline run with exactly `"\n\n"`;
/// - trim leading and trailing whitespace.
///
/// Spaces around removed tokens are kept, so `"a [1] b"` becomes `"a  b"`.
pub fn clean_text(input: &str) -> String {
    let without_markers = MARKDOWN_MARKER_RE.replace_all(input, "");
    let without_citations = CITATION_RE.replace_all(&without_markers, "");
    let collapsed = BLANK_LINES_RE.replace_all(&without_citations, "\n\n");
    collapsed.trim().to_string()
}

/// Estimated listening time in whole minutes, rounded up.
///
/// Words are counted by splitting on single spaces.
pub fn estimate_reading_minutes(cleaned_text: &str, speed: PlaybackSpeed) -> u32 {
    let word_count = cleaned_text.split(' ').count() as f64;
    let minutes = (word_count / (WORDS_PER_MINUTE * speed.as_f64())).ceil();
    minutes as u32
}

impl<R: EntityRepository<ReadingSession>> EntityService<ReadingSession, R> {
    /// Cleans `text` and stores a new session at 0 % progress.
    ///
    /// # Errors
    /// - `ServiceError::EmptyText` when nothing is left after cleanup.
    pub async fn start_reading(
        &self,
        text: impl Into<String>,
        voice: VoiceId,
        speed: PlaybackSpeed,
    ) -> ServiceResult<ReadingSession> {
        let text = text.into();
        let cleaned_text = clean_text(&text);
        if cleaned_text.is_empty() {
            return Err(ServiceError::EmptyText);
        }

        Ok(self
            .create(NewReadingSession {
                text,
                cleaned_text,
                voice,
                speed,
                progress: 0.0,
            })
            .await)
    }

    /// Saves playback progress; the record clamps it to `[0, 100]`.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no session has that id.
    pub async fn save_progress(
        &self,
        id: impl IntoEntityId,
        progress: f64,
    ) -> ServiceResult<ReadingSession> {
        self.update(
            id,
            ReadingSessionPatch {
                progress: Some(progress),
                ..ReadingSessionPatch::default()
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_text, estimate_reading_minutes};
    use crate::model::catalog::PlaybackSpeed;

    #[test]
    fn cleanup_strips_markers_and_citations() {
        assert_eq!(
            clean_text("# Title\n\n*bold* [1] text"),
            "Title\n\nbold  text"
        );
    }

    #[test]
    fn cleanup_collapses_blank_line_runs() {
        assert_eq!(clean_text("one\n\n\n\ntwo"), "one\n\ntwo");
        assert_eq!(clean_text("one\n   \n\t\ntwo"), "one\n\ntwo");
        assert_eq!(clean_text("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn cleanup_keeps_inner_spacing_and_trims_edges() {
        assert_eq!(clean_text("  _a_ `b` [x][y] c  "), "a b  c");
        assert_eq!(clean_text("###"), "");
    }

    #[test]
    fn cleanup_is_idempotent() {
        let once = clean_text("## Head\n\n\n**x** [2] y");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn reading_estimate_scales_with_speed() {
        let text = vec!["word"; 300].join(" ");
        assert_eq!(estimate_reading_minutes(&text, PlaybackSpeed::Normal), 2);
        assert_eq!(estimate_reading_minutes(&text, PlaybackSpeed::Double), 1);
        assert_eq!(estimate_reading_minutes(&text, PlaybackSpeed::Half), 4);
        assert_eq!(estimate_reading_minutes("short", PlaybackSpeed::Normal), 1);
    }
}
