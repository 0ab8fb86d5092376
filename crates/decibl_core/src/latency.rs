//! Simulated backend latency.
//!
//! # Responsibility
//! - Provide the delay primitive awaited by every service call.
//! - Hold per-operation durations as an injectable profile.
//!
//! # Invariants
//! - `delay` always completes; it has no error path and no cancellation.
//! - A zero duration completes without registering a timer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Service operation class used to pick a latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    SettingsRead,
    SettingsWrite,
    Transcribe,
    Format,
}

/// Per-operation latencies in milliseconds.
///
/// Reads are cheaper than writes. The simulated transcription and formatting
/// steps are the slowest operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub settings_read_ms: u64,
    pub settings_write_ms: u64,
    pub transcribe_ms: u64,
    pub format_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_ms: 300,
            get_ms: 200,
            create_ms: 400,
            update_ms: 300,
            delete_ms: 250,
            settings_read_ms: 200,
            settings_write_ms: 300,
            transcribe_ms: 1500,
            format_ms: 1000,
        }
    }
}

impl LatencyProfile {
    /// Profile with no latency at all, for tests and batch tools.
    pub const fn zero() -> Self {
        Self {
            list_ms: 0,
            get_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            settings_read_ms: 0,
            settings_write_ms: 0,
            transcribe_ms: 0,
            format_ms: 0,
        }
    }

    pub fn duration_for(&self, operation: Operation) -> Duration {
        let millis = match operation {
            Operation::List => self.list_ms,
            Operation::Get => self.get_ms,
            Operation::Create => self.create_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
            Operation::SettingsRead => self.settings_read_ms,
            Operation::SettingsWrite => self.settings_write_ms,
            Operation::Transcribe => self.transcribe_ms,
            Operation::Format => self.format_ms,
        };
        Duration::from_millis(millis)
    }

    /// Waits for the latency configured for `operation`.
    pub async fn pause(&self, operation: Operation) {
        delay(self.duration_for(operation)).await;
    }
}

/// Resolves after at least `duration` has elapsed.
pub async fn delay(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    tokio::time::sleep(duration).await;
}
