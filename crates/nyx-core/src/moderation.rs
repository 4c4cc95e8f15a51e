//! The two-state approval gate applied to every post.
//!
//! A post is either `Pending` or `Visible`. Both transitions are idempotent
//! and are carried out by [`crate::content::ContentStore::set_approval`].
//! Deleting a post removes it from the machine entirely.

use serde::{Deserialize, Serialize};

/// Where a post sits in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationState {
  /// Submitted, awaiting an operator. Hidden from visitors.
  Pending,
  /// Approved and shown to everyone.
  Visible,
}

impl ModerationState {
  pub fn from_approved(approved: bool) -> Self {
    if approved { Self::Visible } else { Self::Pending }
  }

  pub fn is_approved(self) -> bool { matches!(self, Self::Visible) }

  /// Apply `transition`; a transition into the current state is a no-op.
  pub fn apply(self, transition: Transition) -> Self { transition.target() }
}

/// An operator action on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
  Approve,
  Reject,
}

impl Transition {
  pub fn target(self) -> ModerationState {
    match self {
      Self::Approve => ModerationState::Visible,
      Self::Reject => ModerationState::Pending,
    }
  }

  /// The `approved` flag this transition writes.
  pub fn approved(self) -> bool { self.target().is_approved() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn approve_makes_visible_from_either_state() {
    assert_eq!(ModerationState::Pending.apply(Transition::Approve), ModerationState::Visible);
    assert_eq!(ModerationState::Visible.apply(Transition::Approve), ModerationState::Visible);
  }

  #[test]
  fn reject_makes_pending_from_either_state() {
    assert_eq!(ModerationState::Visible.apply(Transition::Reject), ModerationState::Pending);
    assert_eq!(ModerationState::Pending.apply(Transition::Reject), ModerationState::Pending);
  }

  #[test]
  fn flag_round_trip() {
    assert!(Transition::Approve.approved());
    assert!(!Transition::Reject.approved());
    assert_eq!(ModerationState::from_approved(false), ModerationState::Pending);
  }
}
