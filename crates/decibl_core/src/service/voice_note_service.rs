//! Voice note use-cases on top of the generic entity service.
//!
//! # Responsibility
//! - Simulate transcription of a finished recording.
//! - Simulate AI formatting of a transcription into fixed output styles.
//!
//! # Invariants
//! - Simulated outputs are fixed strings; no audio or model is involved.
//! - `format_note` adds or replaces exactly one `formatted_versions` key.

use crate::latency::Operation;
use crate::model::entity::{Entity, IntoEntityId};
use crate::model::voice_note::{NewVoiceNote, NoteFormat, VoiceNote};
use crate::repo::working_set::EntityRepository;
use crate::service::entity_service::{EntityService, ServiceError, ServiceResult};
use log::info;

/// Audio reference stored for simulated recordings.
pub const DEMO_AUDIO_URL: &str = "demo-audio.mp3";

const LIVE_TRANSCRIPTION_PREVIEW: &str = "Welcome to Decibl, your AI voice assistant. This is a demo transcription that appears in real-time as you speak...";

const FINAL_TRANSCRIPTION: &str = "Welcome to Decibl, your AI voice assistant. This is a demo transcription that shows how your speech is converted to text with high accuracy and then formatted for different use cases.";

/// Partial text shown while a recording is still running.
pub fn live_transcription_preview() -> &'static str {
    LIVE_TRANSCRIPTION_PREVIEW
}

/// Fixed output of the simulated formatter for `format`.
pub fn formatted_text(format: NoteFormat) -> &'static str {
    match format {
        NoteFormat::Social => "🎙️ Just discovered Decibl - an amazing AI voice assistant that transforms how we capture thoughts! Perfect for quick voice notes and content creation. #AI #Productivity",
        NoteFormat::Blog => "# Introducing Decibl: The Future of Voice Technology\n\nDecibl represents a revolutionary approach to voice assistance, combining cutting-edge AI with intuitive design to create an unparalleled user experience...",
        NoteFormat::Pr => "FOR IMMEDIATE RELEASE\n\nDecibl Launches Revolutionary AI Voice Assistant\n\nNew platform transforms speech-to-text technology with advanced formatting capabilities...",
        NoteFormat::Article => "The Evolution of Voice Technology: How Decibl is Changing the Game\n\nIn today's fast-paced digital world, voice technology has become increasingly important...",
    }
}

/// Formats a recording length as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl<R: EntityRepository<VoiceNote>> EntityService<VoiceNote, R> {
    /// Waits for the transcription latency and returns the demo transcript.
    pub async fn simulate_transcription(&self) -> String {
        self.latency().pause(Operation::Transcribe).await;
        FINAL_TRANSCRIPTION.to_string()
    }

    /// Finishes a simulated recording: transcribes it and stores the note.
    pub async fn record_note(&self, duration_secs: u32) -> VoiceNote {
        let transcription = self.simulate_transcription().await;
        self.create(NewVoiceNote {
            transcription,
            duration: duration_secs,
            audio_url: DEMO_AUDIO_URL.to_string(),
            ..NewVoiceNote::default()
        })
        .await
    }

    /// Generates `format` for a stored note and saves it in
    /// `formatted_versions`, keeping the other formats.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no note has that id.
    pub async fn format_note(
        &self,
        id: impl IntoEntityId,
        format: NoteFormat,
    ) -> ServiceResult<VoiceNote> {
        self.latency().pause(Operation::Format).await;

        let not_found = || ServiceError::NotFound {
            entity: VoiceNote::KIND,
            id: id.to_string(),
        };
        let note_id = id.to_entity_id().ok_or_else(not_found)?;
        let updated = self
            .repo()
            .modify(note_id, |note| {
                note.formatted_versions.insert(
                    format.as_str().to_string(),
                    formatted_text(format).to_string(),
                );
            })
            .ok_or_else(not_found)?;
        info!(
            "event=note_format module=service status=ok id={} format={}",
            note_id,
            format.as_str()
        );
        Ok(updated)
    }
}
