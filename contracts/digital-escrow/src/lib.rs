//! Escrow for digital products.
//!
//! A buyer locks tokens against a product, the seller delivers, and the
//! value settles to one side through buyer confirmation, owner mediation or
//! a dispute timeout. Settled value is credited to a pull-payment ledger and
//! leaves the contract only through `withdraw`.

#![no_std]

mod access;
mod entities;
mod errors;
mod escrow_contract;
mod events;
mod ledger;
mod store;
mod timeout;

pub use entities::{DataKey, EscrowTransaction, TransactionStatus};
pub use errors::Error;
pub use escrow_contract::{DigitalEscrowContract, DigitalEscrowContractClient};
pub use events::{Resolution, TransactionCompleted, TransactionCreated};
pub use timeout::{
    DAY_IN_SECONDS, DISPUTE_TIMEOUT, MAX_TRANSACTION_AMOUNT, TRANSACTION_TIMEOUT, UNIT,
};
