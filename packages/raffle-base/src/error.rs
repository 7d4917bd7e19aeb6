use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

impl From<StdError> for ContractError {
    fn from(std_error: StdError) -> Self {
        Self::CustomError {
            val: std_error.to_string(),
        }
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    // ------------------------------ migration ----------------------------------------
    #[error("Can't migrate from contract {contract}!")]
    ForeignContract { contract: String },

    #[error("Invalid version {version}!")]
    InvalidVersion { version: String },

    #[error("Migration targets version {expected}, msg has {got}!")]
    MigrationVersionMismatch { expected: String, got: String },

    #[error("Stored version {stored} is newer than {new}!")]
    Downgrade { stored: String, new: String },

    // ------------------------------ vrf coordinator --------------------------------
    #[error("Invalid subscription!")]
    InvalidSubscription,

    #[error("Must be subscription owner: {owner}!")]
    MustBeSubOwner { owner: String },

    #[error("Too many consumers!")]
    TooManyConsumers,

    #[error("Consumer {consumer} is not registered for subscription {sub_id}!")]
    InvalidConsumer { sub_id: u64, consumer: String },

    #[error("Requested {have} words, max is {want}!")]
    NumWordsTooBig { have: u32, want: u32 },

    #[error("Nonexistent request!")]
    NonexistentRequest,

    #[error("Insufficient subscription balance!")]
    InsufficientBalance,

    #[error("Expected {expected} random words, got {got}!")]
    InvalidRandomWords { expected: u32, got: u32 },
}
