//! Static allow-list implementation of AccessChecker.
//!
//! The list is fixed at startup from configuration (`access.allowed_users`).
//!
//! # Usage
//!
//! ```ignore
//! use weekend_sync::adapters::access::StaticAllowList;
//!
//! let checker = StaticAllowList::new([UserId::new(1), UserId::new(2)]);
//! ```

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{AccessChecker, AccessResult};

/// AccessChecker backed by a fixed set of user ids.
#[derive(Debug, Clone, Default)]
pub struct StaticAllowList {
    allowed: HashSet<UserId>,
}

impl StaticAllowList {
    /// Create a list allowing exactly `users`.
    pub fn new(users: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            allowed: users.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[async_trait]
impl AccessChecker for StaticAllowList {
    async fn check(&self, user: UserId) -> AccessResult {
        if self.allowed.contains(&user) {
            AccessResult::Allowed
        } else {
            AccessResult::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listed_user_is_allowed() {
        let list = StaticAllowList::new([UserId::new(1), UserId::new(2)]);
        assert_eq!(list.check(UserId::new(2)).await, AccessResult::Allowed);
    }

    #[tokio::test]
    async fn unlisted_user_is_denied() {
        let list = StaticAllowList::new([UserId::new(1)]);
        assert_eq!(list.check(UserId::new(3)).await, AccessResult::Denied);
    }

    #[tokio::test]
    async fn empty_list_denies_everyone() {
        let list = StaticAllowList::default();
        assert!(list.is_empty());
        assert_eq!(list.check(UserId::new(1)).await, AccessResult::Denied);
    }

    #[test]
    fn duplicates_collapse() {
        let list = StaticAllowList::new([UserId::new(1), UserId::new(1)]);
        assert_eq!(list.len(), 1);
    }
}
