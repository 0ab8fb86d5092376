//! Domain model for voice notes, reading sessions and settings.
//!
//! # Responsibility
//! - Define the records handed to every consumer of the core.
//! - Keep the camelCase wire shape shared by fixtures and settings storage.
//!
//! # Invariants
//! - Every working-set record is identified by a positive `EntityId`.
//! - `created_at` is assigned by the working set and never patched.
//! - Patch types carry no `id`/`created_at` fields, so updates cannot
//!   rewrite identity.

pub mod catalog;
pub mod entity;
pub mod reading_session;
pub mod settings;
pub mod voice_note;
