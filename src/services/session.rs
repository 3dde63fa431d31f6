// SPDX-License-Identifier: MIT

//! Session store: the owning collection of workouts.
//!
//! Handles the core lifecycle:
//! 1. Restore the persisted snapshot at startup
//! 2. Append newly created workouts
//! 3. Remove or edit entries on request
//! 4. Persist the whole collection after every mutation
//!
//! The store is the sole owner of workout lifetime. The presentation layer
//! holds only transient references obtained through `all`/`find_by_id`.

use crate::error::{Error, Result};
use crate::models::{Workout, WorkoutUpdate};
use crate::storage::{slots, Storage};

/// Ordered collection of workouts for the current session, backed by a
/// single durable-storage slot.
///
/// In-memory state is the source of truth while the session runs: a failed
/// snapshot write is surfaced as [`Error::PersistenceUnavailable`] but never
/// rolls back the mutation that triggered it.
pub struct SessionStore<S: Storage> {
    storage: S,
    workouts: Vec<Workout>,
}

impl<S: Storage> SessionStore<S> {
    /// Create an empty store. Call [`restore`](Self::restore) to load any
    /// prior session before rendering.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            workouts: Vec::new(),
        }
    }

    /// Load the collection from the persisted snapshot.
    ///
    /// An absent, unreadable, or malformed snapshot degrades to an empty
    /// collection; startup must never fail because of a corrupt snapshot.
    /// Individual entries that fail to deserialize (missing `type`, unknown
    /// `type`, missing variant fields) are skipped, keeping the rest.
    ///
    /// Idempotent: in-memory state is replaced wholesale from the snapshot.
    pub fn restore(&mut self) {
        let raw = match self.storage.read(slots::WORKOUTS) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No persisted snapshot, starting empty");
                self.workouts.clear();
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot read failed, starting empty");
                self.workouts.clear();
                return;
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed snapshot, starting empty");
                self.workouts.clear();
                return;
            }
        };

        let mut restored = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<Workout>(entry) {
                Ok(workout) => {
                    // A snapshot produced by `persist` never has duplicate
                    // ids, but a hand-edited one might.
                    if restored.iter().any(|w: &Workout| w.id() == workout.id()) {
                        tracing::warn!(id = workout.id(), "Skipping duplicate snapshot entry");
                        continue;
                    }
                    restored.push(workout);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed snapshot entry");
                }
            }
        }

        tracing::info!(count = restored.len(), "Restored workouts from snapshot");
        self.workouts = restored;
    }

    /// Append a workout to the end of the collection and persist.
    ///
    /// Fails with [`Error::DuplicateId`] before any mutation if the id is
    /// already present. A [`Error::PersistenceUnavailable`] return means the
    /// workout *was* added but the snapshot write failed.
    pub fn add(&mut self, workout: Workout) -> Result<()> {
        if self.workouts.iter().any(|w| w.id() == workout.id()) {
            return Err(Error::DuplicateId(workout.id().to_string()));
        }

        tracing::debug!(id = workout.id(), kind = workout.type_name(), "Adding workout");
        self.workouts.push(workout);
        self.persist()
    }

    /// Linear lookup by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Mutable lookup by id, so the caller can `activate` a workout it is
    /// holding. Structural mutation stays behind `add`/`remove_by_id`.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    /// Remove the workout with the given id and persist. Returns the removed
    /// workout, for callers running the remove-then-recreate edit flow.
    ///
    /// Fails with [`Error::NotFound`] (collection untouched) if no entry
    /// matches.
    pub fn remove_by_id(&mut self, id: &str) -> Result<Workout> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let removed = self.workouts.remove(index);
        tracing::debug!(id, "Removed workout");
        self.persist()?;
        Ok(removed)
    }

    /// Edit a workout's metrics in place and persist.
    ///
    /// Safer alternative to remove-then-recreate: the entry is only touched
    /// once the replacement metrics validate, so a rejected edit cannot lose
    /// the workout. Id, coordinates, type, and description are immutable.
    pub fn update(&mut self, id: &str, update: WorkoutUpdate) -> Result<()> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        workout.apply_update(update)?;
        tracing::debug!(id, "Updated workout metrics");
        self.persist()
    }

    /// The collection in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Serialize the whole collection to the snapshot slot, overwriting any
    /// prior snapshot. A failed write is retried once before being surfaced.
    pub fn persist(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.workouts)
            .map_err(|e| Error::PersistenceUnavailable(e.into()))?;

        if let Err(first) = self.storage.write(slots::WORKOUTS, &snapshot) {
            tracing::warn!(error = %first, "Snapshot write failed, retrying");
            self.storage
                .write(slots::WORKOUTS, &snapshot)
                .map_err(Error::PersistenceUnavailable)?;
        }
        Ok(())
    }

    /// Empty the collection and delete the persisted snapshot. The caller is
    /// expected to rebuild its view afterwards.
    pub fn clear(&mut self) -> Result<()> {
        self.workouts.clear();
        tracing::info!("Cleared session");

        if let Err(first) = self.storage.remove(slots::WORKOUTS) {
            tracing::warn!(error = %first, "Snapshot delete failed, retrying");
            self.storage
                .remove(slots::WORKOUTS)
                .map_err(Error::PersistenceUnavailable)?;
        }
        Ok(())
    }

    /// Direct access to the storage backend, mainly for tests.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
