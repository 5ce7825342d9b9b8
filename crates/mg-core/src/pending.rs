//! Delayed transitions with cancellation.
//!
//! Some transitions only apply after a display delay (a bridge fall, a
//! battle animation). The engine hands the caller a [`PendingTransition`]
//! stamped with a [`Ticket`] and remembers which ticket it is waiting for.
//! When the delay elapses the caller gives the pending transition back; the
//! engine applies it only if it is still waiting for that exact ticket. Any
//! quit or reset in between clears the wait, so the stale transition is
//! discarded.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one issued pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket(u64);

impl Ticket {
    /// The raw ticket number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing tickets. Never reuses a number.
#[derive(Debug, Clone, Default)]
pub struct TicketIssuer {
    next: u64,
}

impl TicketIssuer {
    /// Create an issuer starting at ticket 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket.
    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next += 1;
        ticket
    }
}

/// A transition the engine wants applied once `delay` has elapsed.
///
/// `K` names the kind of transition so one engine's pending value cannot be
/// handed to another engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition<K> {
    /// The ticket the engine is waiting for.
    pub ticket: Ticket,
    /// What will happen when it is settled.
    pub kind: K,
    /// How long the presentation should wait before settling.
    pub delay: Duration,
}

impl<K> PendingTransition<K> {
    /// Create a pending transition.
    pub fn new(ticket: Ticket, kind: K, delay: Duration) -> Self {
        Self {
            ticket,
            kind,
            delay,
        }
    }

    /// Returns true if this is the transition the engine is waiting for.
    pub fn matches(&self, awaiting: Option<Ticket>) -> bool {
        awaiting == Some(self.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut issuer = TicketIssuer::new();
        let a = issuer.issue();
        let b = issuer.issue();
        let c = issuer.issue();
        assert!(a < b && b < c);
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn matches_only_awaited_ticket() {
        let mut issuer = TicketIssuer::new();
        let first = PendingTransition::new(issuer.issue(), (), Duration::ZERO);
        let second = PendingTransition::new(issuer.issue(), (), Duration::ZERO);

        assert!(second.matches(Some(second.ticket)));
        assert!(!first.matches(Some(second.ticket)));
        assert!(!second.matches(None));
    }

    #[test]
    fn ticket_display() {
        let mut issuer = TicketIssuer::new();
        issuer.issue();
        assert_eq!(issuer.issue().to_string(), "#1");
    }
}
