//! Generic CRUD service over a working set.
//!
//! # Responsibility
//! - Expose get_all/get_by_id/create/update/delete to consumers.
//! - Await the configured latency before touching the working set.
//! - Translate missing records into `ServiceError::NotFound`.
//!
//! # Invariants
//! - Every result is an owned clone; callers never alias stored records.
//! - A failing call leaves the working set untouched.

use crate::latency::{LatencyProfile, Operation};
use crate::model::entity::{Entity, EntityKind, IntoEntityId};
use crate::model::reading_session::ReadingSession;
use crate::model::voice_note::VoiceNote;
use crate::repo::working_set::{EntityRepository, WorkingSet};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure returned by entity services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No record with this id exists at call time.
    NotFound { entity: EntityKind, id: String },
    /// Reader input is blank after cleanup.
    EmptyText,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::EmptyText => write!(f, "text is empty after cleanup"),
        }
    }
}

impl Error for ServiceError {}

/// Voice note CRUD plus recording/formatting helpers.
pub type VoiceNoteService = EntityService<VoiceNote>;
/// Reading session CRUD plus reader helpers.
pub type ReadingSessionService = EntityService<ReadingSession>;

/// Async CRUD facade over one entity repository.
pub struct EntityService<E: Entity, R: EntityRepository<E> = WorkingSet<E>> {
    repo: R,
    latency: LatencyProfile,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: EntityRepository<E> + Clone> Clone for EntityService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            latency: self.latency,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, R: EntityRepository<E>> EntityService<E, R> {
    pub fn new(repo: R, latency: LatencyProfile) -> Self {
        Self {
            repo,
            latency,
            _entity: PhantomData,
        }
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    /// Returns all records, newest first. Never fails.
    pub async fn get_all(&self) -> Vec<E> {
        self.latency.pause(Operation::List).await;
        self.repo.list()
    }

    /// Returns one record by id.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no record has that id.
    pub async fn get_by_id(&self, id: impl IntoEntityId) -> ServiceResult<E> {
        self.latency.pause(Operation::Get).await;
        id.to_entity_id()
            .and_then(|entity_id| self.repo.get(entity_id))
            .ok_or_else(|| not_found::<E>(&id))
    }

    /// Stores a new record with a service-assigned id and `created_at`.
    pub async fn create(&self, draft: E::Draft) -> E {
        self.latency.pause(Operation::Create).await;
        let created = self.repo.insert(draft);
        info!(
            "event=entity_create module=service status=ok entity={} id={}",
            E::KIND.as_str(),
            created.id()
        );
        created
    }

    /// Merges `patch` onto an existing record.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no record has that id.
    pub async fn update(&self, id: impl IntoEntityId, patch: E::Patch) -> ServiceResult<E> {
        self.latency.pause(Operation::Update).await;
        let updated = id
            .to_entity_id()
            .and_then(|entity_id| self.repo.update(entity_id, patch))
            .ok_or_else(|| not_found::<E>(&id))?;
        debug!(
            "event=entity_update module=service status=ok entity={} id={}",
            E::KIND.as_str(),
            updated.id()
        );
        Ok(updated)
    }

    /// Removes a record permanently.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no record has that id.
    pub async fn delete(&self, id: impl IntoEntityId) -> ServiceResult<()> {
        self.latency.pause(Operation::Delete).await;
        let removed = id
            .to_entity_id()
            .and_then(|entity_id| self.repo.remove(entity_id))
            .ok_or_else(|| not_found::<E>(&id))?;
        info!(
            "event=entity_delete module=service status=ok entity={} id={}",
            E::KIND.as_str(),
            removed.id()
        );
        Ok(())
    }

    pub(crate) fn repo(&self) -> &R {
        &self.repo
    }
}

fn not_found<E: Entity>(id: &dyn Display) -> ServiceError {
    debug!(
        "event=entity_lookup module=service status=not_found entity={} id={}",
        E::KIND.as_str(),
        id
    );
    ServiceError::NotFound {
        entity: E::KIND,
        id: id.to_string(),
    }
}
