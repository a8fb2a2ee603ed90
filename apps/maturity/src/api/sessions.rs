//! # Session Store
//!
//! One `NavigationController` per client session, all sharing one catalog.
//!
//! - Ids are handed out in increasing order and never reused
//! - `BTreeMap` keeps listing order deterministic
//! - The store is capped; creation past the cap fails with `SessionLimit`

use crate::error::AppError;
use maturity_core::{NavigationController, StageCatalog};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Session identifier.
pub type SessionId = u64;

/// Live navigation sessions.
#[derive(Debug)]
pub struct SessionStore {
    catalog: Arc<StageCatalog>,
    sessions: BTreeMap<SessionId, NavigationController>,
    next_id: SessionId,
    max_sessions: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(catalog: Arc<StageCatalog>, max_sessions: usize) -> Self {
        Self {
            catalog,
            sessions: BTreeMap::new(),
            next_id: 1,
            max_sessions,
        }
    }

    /// Start a session at the initial navigation state.
    pub fn create(&mut self) -> Result<(SessionId, &NavigationController), AppError> {
        if self.sessions.len() >= self.max_sessions {
            return Err(AppError::SessionLimit(self.sessions.len()));
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        let controller = self
            .sessions
            .entry(id)
            .or_insert_with(|| NavigationController::new(Arc::clone(&self.catalog)));
        Ok((id, controller))
    }

    pub fn get(&self, id: SessionId) -> Result<&NavigationController, AppError> {
        self.sessions.get(&id).ok_or(AppError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut NavigationController, AppError> {
        self.sessions
            .get_mut(&id)
            .ok_or(AppError::SessionNotFound(id))
    }

    /// Drop a session.
    pub fn remove(&mut self, id: SessionId) -> Result<(), AppError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::SessionNotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
