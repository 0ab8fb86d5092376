//! Core use-case services.
//!
//! # Responsibility
//! - Wrap working sets and the settings store in async, latency-bearing APIs.
//! - Host the simulated recorder, formatter and reader features.
//!
//! # Invariants
//! - Consumers only ever receive owned copies of stored data.
//! - The only entity failure is `NotFound` (plus `EmptyText` for reader
//!   input).

pub mod dashboard_service;
pub mod entity_service;
pub mod playback;
pub mod reading_service;
pub mod settings_service;
pub mod voice_note_service;
