use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Bytes, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionStatus {
    Created,
    Delivered,
    Disputed,
    Completed,
}

impl TransactionStatus {
    /// The only edges of the escrow lifecycle. Everything else, including
    /// staying in place, is rejected.
    pub fn can_transition_to(&self, next: TransactionStatus) -> bool {
        use TransactionStatus::*;
        matches!(
            (self, next),
            (Created, Delivered)
                | (Delivered, Completed)
                | (Delivered, Disputed)
                | (Disputed, Completed)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowTransaction {
    pub id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub amount: i128,
    pub product_key: Bytes,
    pub delivery_proof: Option<String>,
    pub status: TransactionStatus,
    pub created_at: u64,
    pub dispute_initiated_at: Option<u64>,
    /// Party credited with `amount` when the transaction completed.
    pub resolved_to: Option<Address>,
}

impl EscrowTransaction {
    /// Checks that the transaction currently sits in `expected` and moves it
    /// to `next`.
    pub fn advance(
        &mut self,
        expected: TransactionStatus,
        next: TransactionStatus,
    ) -> Result<(), Error> {
        if self.status != expected || !self.status.can_transition_to(next) {
            return Err(Error::InvalidState);
        }
        self.status = next;
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Transaction(u64),
    TransactionCount,
    Balance(Address),
    Owner,
    Token,
    Paused,
}
