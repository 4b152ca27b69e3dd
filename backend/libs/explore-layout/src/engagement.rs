//! Optimistic engagement state for explore tiles
//!
//! Likes, stans and poll votes are shown immediately while the backend call is
//! in flight. Each local change is recorded as a pending mutation:
//! - `apply`: validate against the current view and queue the mutation
//! - `confirm`: drop the mutation and adopt the server's snapshot
//! - `rollback`: drop the mutation, the view falls back to confirmed state
//!
//! The visible state is always the confirmed snapshot with the remaining
//! pending mutations replayed in order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngagementError {
    #[error("Post is already liked")]
    AlreadyLiked,

    #[error("Post is not liked")]
    NotLiked,

    #[error("Idol is already stanned")]
    AlreadyStanned,

    #[error("Idol is not stanned")]
    NotStanned,

    #[error("Already voted on this poll")]
    AlreadyVoted,

    #[error("No vote to remove")]
    NotVoted,

    #[error("Unknown mutation: {0}")]
    UnknownMutation(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EngagementAction {
    Like,
    Unlike,
    Stan,
    Unstan,
    Vote { option_id: String },
    Unvote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MutationId(u64);

impl MutationId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Counters and viewer flags for one post, as the backend reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub likes: i64,
    pub stans: i64,
    #[serde(default)]
    pub votes: BTreeMap<String, i64>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub stanned: bool,
    #[serde(default)]
    pub voted_option: Option<String>,
}

impl EngagementSnapshot {
    fn check(&self, action: &EngagementAction) -> Result<(), EngagementError> {
        match action {
            EngagementAction::Like if self.liked => Err(EngagementError::AlreadyLiked),
            EngagementAction::Unlike if !self.liked => Err(EngagementError::NotLiked),
            EngagementAction::Stan if self.stanned => Err(EngagementError::AlreadyStanned),
            EngagementAction::Unstan if !self.stanned => Err(EngagementError::NotStanned),
            EngagementAction::Vote { .. } if self.voted_option.is_some() => {
                Err(EngagementError::AlreadyVoted)
            }
            EngagementAction::Unvote if self.voted_option.is_none() => {
                Err(EngagementError::NotVoted)
            }
            _ => Ok(()),
        }
    }

    fn apply(&mut self, action: &EngagementAction) -> Result<(), EngagementError> {
        self.check(action)?;

        match action {
            EngagementAction::Like => {
                self.liked = true;
                self.likes += 1;
            }
            EngagementAction::Unlike => {
                self.liked = false;
                self.likes = (self.likes - 1).max(0);
            }
            EngagementAction::Stan => {
                self.stanned = true;
                self.stans += 1;
            }
            EngagementAction::Unstan => {
                self.stanned = false;
                self.stans = (self.stans - 1).max(0);
            }
            EngagementAction::Vote { option_id } => {
                *self.votes.entry(option_id.clone()).or_insert(0) += 1;
                self.voted_option = Some(option_id.clone());
            }
            EngagementAction::Unvote => {
                if let Some(option_id) = self.voted_option.take() {
                    if let Some(count) = self.votes.get_mut(&option_id) {
                        *count = (*count - 1).max(0);
                    }
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
struct PendingMutation {
    id: MutationId,
    action: EngagementAction,
}

#[derive(Debug, Clone, Default)]
pub struct EngagementState {
    confirmed: EngagementSnapshot,
    pending: Vec<PendingMutation>,
    next_id: u64,
}

impl EngagementState {
    pub fn new(confirmed: EngagementSnapshot) -> Self {
        Self {
            confirmed,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn confirmed(&self) -> &EngagementSnapshot {
        &self.confirmed
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_pending(&self, id: MutationId) -> bool {
        self.pending.iter().any(|m| m.id == id)
    }

    /// State shown to the viewer: confirmed counters plus pending mutations.
    pub fn view(&self) -> EngagementSnapshot {
        let mut view = self.confirmed.clone();
        for mutation in &self.pending {
            // Server truth may already include the change
            if let Err(err) = view.apply(&mutation.action) {
                debug!(mutation_id = mutation.id.0, error = %err, "Skipping stale pending mutation");
            }
        }
        view
    }

    /// Apply `action` locally and tag it pending.
    pub fn apply(&mut self, action: EngagementAction) -> Result<MutationId, EngagementError> {
        self.view().check(&action)?;

        let id = MutationId(self.next_id);
        self.next_id += 1;
        debug!(mutation_id = id.0, action = ?action, "Optimistic engagement applied");
        self.pending.push(PendingMutation { id, action });
        Ok(id)
    }

    /// The backend accepted the mutation; adopt its snapshot.
    pub fn confirm(
        &mut self,
        id: MutationId,
        server: EngagementSnapshot,
    ) -> Result<(), EngagementError> {
        self.take(id)?;
        self.confirmed = server;
        Ok(())
    }

    /// The backend rejected the mutation; forget it.
    pub fn rollback(&mut self, id: MutationId) -> Result<EngagementAction, EngagementError> {
        let mutation = self.take(id)?;
        warn!(mutation_id = id.0, action = ?mutation.action, "Optimistic engagement rolled back");
        Ok(mutation.action)
    }

    fn take(&mut self, id: MutationId) -> Result<PendingMutation, EngagementError> {
        let idx = self
            .pending
            .iter()
            .position(|m| m.id == id)
            .ok_or(EngagementError::UnknownMutation(id.0))?;
        Ok(self.pending.remove(idx))
    }
}
