//! Access control port for gateway events.
//!
//! Every inbound event is checked against this port before it reaches the
//! availability handlers. The handlers themselves assume the user is allowed.
//!
//! # Design
//!
//! The AccessChecker follows a **fail-secure** design: unknown users are
//! denied. The policy is a static allow-set; there are no roles or tiers.
//!
//! # Example
//!
//! ```ignore
//! use weekend_sync::ports::{AccessChecker, AccessResult};
//!
//! async fn gate(checker: &dyn AccessChecker, user: UserId) -> bool {
//!     matches!(checker.check(user).await, AccessResult::Allowed)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::UserId;

/// Port for deciding whether a user may interact with the planner.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Check whether `user` may send events.
    async fn check(&self, user: UserId) -> AccessResult;
}

/// Result of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessResult {
    /// User may proceed.
    Allowed,
    /// User is not on the allow-list.
    Denied,
}

impl AccessResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn access_checker_is_object_safe() {
        fn _accepts_dyn(_checker: &dyn AccessChecker) {}
    }

    #[test]
    fn access_result_is_allowed() {
        assert!(AccessResult::Allowed.is_allowed());
        assert!(!AccessResult::Denied.is_allowed());
    }
}
