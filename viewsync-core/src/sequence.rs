// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-widget request sequencing.
//!
//! Fetches for the same widget may complete in any order. Each refresh is stamped
//! with a [`Ticket`] from a monotonically increasing counter, and a completion is
//! applied only if its ticket is higher than every ticket applied before it.
//! A slow, earlier-issued fetch that lands after a newer one is discarded.

use core::cmp::Ordering;
use core::fmt;

/// Sequence number stamped on one fetch-render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tickets and admits completions for a single widget.
///
/// # Example
///
/// ```
/// use viewsync_core::SequenceGuard;
///
/// let mut guard = SequenceGuard::new();
/// let first = guard.issue();
/// let second = guard.issue();
///
/// // The newer request completes first and is applied...
/// assert!(guard.admit(second));
/// // ...so the older one is stale when it finally arrives.
/// assert!(!guard.admit(first));
/// assert_eq!(guard.applied(), Some(second));
/// ```
#[derive(Debug, Default, Clone)]
pub struct SequenceGuard {
    issued: u64,
    applied: Option<Ticket>,
}

impl SequenceGuard {
    /// Create a guard that has issued nothing
    pub const fn new() -> Self {
        Self {
            issued: 0,
            applied: None,
        }
    }

    /// Stamp a new request. Tickets start at 1 and strictly increase.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Decide whether a completion may be applied.
    ///
    /// Returns `true` and records the ticket if it is newer than the last applied
    /// one; returns `false` for stale completions.
    pub fn admit(&mut self, ticket: Ticket) -> bool {
        match self.applied {
            Some(applied) if ticket <= applied => false,
            _ => {
                self.applied = Some(ticket);
                true
            }
        }
    }

    /// Last ticket handed out, if any
    pub const fn latest_issued(&self) -> Option<Ticket> {
        if self.issued == 0 {
            None
        } else {
            Some(Ticket(self.issued))
        }
    }

    /// Last ticket whose completion was applied
    pub const fn applied(&self) -> Option<Ticket> {
        self.applied
    }

    /// Returns `true` if a request newer than the last applied one is outstanding
    pub fn has_pending(&self) -> bool {
        self.latest_issued() > self.applied
    }
}
