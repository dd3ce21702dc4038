//! License pool snapshot.

use serde::{Deserialize, Serialize};

use super::ActiveSession;

/// Read-mostly view of the firm's concurrent-login pool.
///
/// The authority is the sole writer: the client never increments or
/// decrements `used` locally, it only re-fetches after any action that
/// could change seat occupancy (login, logout, forced logout).
///
/// # Invariants (authority-enforced, client-rendered)
///
/// - `used == active_sessions.len() <= limit` is expected to hold;
///   `is_consistent` reports whether a given snapshot satisfies it.
/// - `used >= limit` means the authority will reject further logins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePool {
    /// Maximum concurrent seats purchased by the firm.
    #[serde(rename = "licenseLimit")]
    pub limit: u32,

    /// Seats currently occupied.
    #[serde(rename = "licenseUsed")]
    pub used: u32,

    /// The sessions occupying those seats.
    #[serde(rename = "activeSessions")]
    pub active_sessions: Vec<ActiveSession>,
}

impl LicensePool {
    /// Seats still available, saturating at zero for over-limit snapshots.
    pub fn seats_available(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    /// Whether the authority will reject the next login.
    pub fn is_full(&self) -> bool {
        self.used >= self.limit
    }

    /// Whether the snapshot satisfies the expected seat-count invariant.
    pub fn is_consistent(&self) -> bool {
        self.used as usize == self.active_sessions.len() && self.used <= self.limit
    }
}
