//! Deadline arithmetic for the escrow lifecycle.
//!
//! Everything here is pure: callers pass the ledger timestamp in, so the
//! same rules can be checked off-chain against any clock.

use crate::entities::EscrowTransaction;

pub const DAY_IN_SECONDS: u64 = 86400;

/// Window the seller has to deliver, counted from creation.
pub const TRANSACTION_TIMEOUT: u64 = 30 * DAY_IN_SECONDS;

/// Window the mediator has to rule before the buyer is refunded by default.
pub const DISPUTE_TIMEOUT: u64 = 7 * DAY_IN_SECONDS;

/// Stellar assets carry 7 decimals.
pub const UNIT: i128 = 10_000_000;

/// 10 whole units of the escrow token, in its smallest denomination.
pub const MAX_TRANSACTION_AMOUNT: i128 = 10 * UNIT;

pub fn expires_at(tx: &EscrowTransaction) -> u64 {
    tx.created_at.saturating_add(TRANSACTION_TIMEOUT)
}

pub fn is_expired(tx: &EscrowTransaction, now: u64) -> bool {
    now > expires_at(tx)
}

pub fn auto_resolvable_at(tx: &EscrowTransaction) -> Option<u64> {
    tx.dispute_initiated_at
        .map(|opened| opened.saturating_add(DISPUTE_TIMEOUT))
}

pub fn is_auto_resolvable(tx: &EscrowTransaction, now: u64) -> bool {
    match auto_resolvable_at(tx) {
        Some(deadline) => now >= deadline,
        None => false,
    }
}

pub fn is_valid_amount(amount: i128) -> bool {
    amount > 0 && amount <= MAX_TRANSACTION_AMOUNT
}
