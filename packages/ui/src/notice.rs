//! Transient notices that clear themselves after a delay.

use std::time::Duration;

use crate::time::sleep;

/// A single-slot notice.
///
/// Every [`show`](Flash::show) hands out a ticket. A delayed clear only takes
/// effect if its ticket is still the latest, so an old timer cannot hide a
/// newer notice early.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    message: Option<String>,
    ticket: u64,
}

impl Flash {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.ticket += 1;
        self.message = Some(message.into());
        self.ticket
    }

    /// Clear the notice if `ticket` is still the latest. Returns whether it did.
    pub fn clear(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Wait out `delay`, then hand `ticket` to `clear`.
///
/// `clear` is typically [`Flash::clear`] behind whatever owns the notice.
/// Returns what it reported.
pub async fn expire_after(delay: Duration, ticket: u64, clear: impl FnOnce(u64) -> bool) -> bool {
    sleep(delay).await;
    clear(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_with_current_ticket() {
        let mut flash = Flash::default();
        let ticket = flash.show("Saved");
        assert_eq!(flash.message(), Some("Saved"));
        assert!(flash.clear(ticket));
        assert_eq!(flash.message(), None);
    }

    #[test]
    fn test_old_ticket_does_not_clear_newer_notice() {
        let mut flash = Flash::default();
        let first = flash.show("One");
        let second = flash.show("Two");

        assert!(!flash.clear(first));
        assert_eq!(flash.message(), Some("Two"));
        assert!(flash.clear(second));
    }
}
