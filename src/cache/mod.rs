//! Explicit per-tab fetch cache.
//!
//! Each tab holds one `FetchCache` keyed by the authenticated user. The cache
//! replaces implicit "loading/error/data" library state with a small state
//! machine whose invalidation rules are spelled out:
//!
//! - no user id -> `Idle` ("disabled"), no request is issued
//! - a response only lands if its ticket is still current, so stale
//!   responses (superseded loads, post-sign-out arrivals) are dropped
//! - user change or explicit refresh starts a fresh load

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FetchStatus<T> {
    Idle,
    Pending,
    Ready { value: T, fetched_ms: i64 },
    Failed { message: String },
}

/// Handle returned by [`FetchCache::begin`]; a resolve/fail with an outdated
/// ticket is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FetchTicket {
    request_id: u64,
}

#[derive(Clone, Debug)]
pub(crate) struct FetchCache<T> {
    status: FetchStatus<T>,
    user_id: Option<String>,
    request_id: u64,
}

impl<T> FetchCache<T> {
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            user_id: None,
            request_id: 0,
        }
    }

    pub fn status(&self) -> &FetchStatus<T> {
        &self.status
    }

    pub fn value(&self) -> Option<&T> {
        match &self.status {
            FetchStatus::Ready { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, FetchStatus::Pending)
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Whether the cache already holds data for `user_id` (used to skip
    /// duplicate loads when a tab re-mounts without a user change).
    pub fn is_loaded_for(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
            && matches!(self.status, FetchStatus::Ready { .. })
    }

    /// Start a load. `None` disables the cache (signed-out state): any
    /// in-flight response is invalidated and no ticket is handed out.
    pub fn begin(&mut self, user_id: Option<&str>) -> Option<FetchTicket> {
        self.request_id += 1;
        self.user_id = user_id.map(|s| s.to_string());

        match user_id {
            None => {
                self.status = FetchStatus::Idle;
                None
            }
            Some(_) => {
                self.status = FetchStatus::Pending;
                Some(FetchTicket {
                    request_id: self.request_id,
                })
            }
        }
    }

    /// Apply a successful response. Returns false (and changes nothing) when
    /// the ticket has been superseded.
    pub fn resolve(&mut self, ticket: FetchTicket, value: T, now_ms: i64) -> bool {
        if ticket.request_id != self.request_id {
            return false;
        }
        self.status = FetchStatus::Ready {
            value,
            fetched_ms: now_ms,
        };
        true
    }

    /// Record a fetch failure for a still-current ticket.
    pub fn fail(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if ticket.request_id != self.request_id {
            return false;
        }
        self.status = FetchStatus::Failed {
            message: message.into(),
        };
        true
    }

    /// Drop any in-flight load and forget cached data (sign-out, user switch).
    pub fn invalidate(&mut self) {
        self.request_id += 1;
        self.user_id = None;
        self.status = FetchStatus::Idle;
    }
}

impl<T> Default for FetchCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_user_means_disabled_not_error() {
        let mut cache: FetchCache<Vec<u32>> = FetchCache::new();
        assert!(cache.begin(None).is_none());
        assert_eq!(*cache.status(), FetchStatus::Idle);
        assert!(cache.value().is_none());
        assert!(cache.error().is_none());
    }

    #[test]
    fn resolve_lands_for_current_ticket() {
        let mut cache = FetchCache::new();
        let ticket = cache.begin(Some("u1")).expect("ticket for a user load");
        assert!(cache.is_pending());
        assert!(cache.resolve(ticket, vec![1, 2, 3], 42));
        assert_eq!(cache.value(), Some(&vec![1, 2, 3]));
        assert!(cache.is_loaded_for("u1"));
        assert!(!cache.is_loaded_for("u2"));
    }

    #[test]
    fn superseded_ticket_is_dropped() {
        let mut cache = FetchCache::new();
        let first = cache.begin(Some("u1")).unwrap();
        let second = cache.begin(Some("u1")).unwrap();

        assert!(!cache.resolve(first, vec![1], 1));
        assert!(cache.is_pending());
        assert!(cache.resolve(second, vec![2], 2));
        assert_eq!(cache.value(), Some(&vec![2]));
    }

    #[test]
    fn sign_out_drops_in_flight_response() {
        // User signs out while a fetch is in the air: the late response must
        // not populate state.
        let mut cache = FetchCache::new();
        let ticket = cache.begin(Some("u1")).unwrap();

        cache.invalidate();
        assert!(!cache.resolve(ticket, vec![9], 5));
        assert_eq!(*cache.status(), FetchStatus::Idle);
        assert!(cache.value().is_none());
    }

    #[test]
    fn user_switch_invalidates_previous_load() {
        let mut cache = FetchCache::new();
        let old = cache.begin(Some("u1")).unwrap();
        let new = cache.begin(Some("u2")).unwrap();

        assert!(!cache.resolve(old, vec![1], 1));
        assert!(cache.resolve(new, vec![2], 2));
        assert!(cache.is_loaded_for("u2"));
    }

    #[test]
    fn failure_keeps_message_until_next_load() {
        let mut cache: FetchCache<Vec<u32>> = FetchCache::new();
        let ticket = cache.begin(Some("u1")).unwrap();
        assert!(cache.fail(ticket, "boom"));
        assert_eq!(cache.error(), Some("boom"));

        // A fresh load clears the failure.
        let _ = cache.begin(Some("u1")).unwrap();
        assert!(cache.is_pending());
        assert!(cache.error().is_none());
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut cache: FetchCache<Vec<u32>> = FetchCache::new();
        let old = cache.begin(Some("u1")).unwrap();
        let fresh = cache.begin(Some("u1")).unwrap();
        assert!(!cache.fail(old, "late error"));
        assert!(cache.resolve(fresh, vec![1], 3));
    }
}
