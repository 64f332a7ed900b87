use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Zero, negative or over-limit deposit; withdrawal of an empty balance.
    InvalidAmount = 3,
    /// Seller is not a usable counterparty.
    InvalidAddress = 4,
    UnauthorizedAccess = 5,
    TransactionNotFound = 6,
    /// Delivery attempted after the creation-to-delivery deadline.
    TransactionExpired = 7,
    /// Transaction is not in the status the operation requires.
    InvalidState = 8,
    DisputeTimeoutNotReached = 9,
    ContractPaused = 10,
    NotPaused = 11,
    ArithmeticOverflow = 12,
}
