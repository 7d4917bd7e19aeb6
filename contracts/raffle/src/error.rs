use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

use raffle_base::raffle::types::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Contract name must be same: {0}")]
    ContractNameErr(String),

    #[error("Not enough funds entered: paid {paid}, entrance fee is {required}")]
    InsufficientFee { paid: Uint128, required: Uint128 },

    #[error("Received invalid randomness")]
    InvalidRandomness {},

    #[error("Coordinator didn't return a request id")]
    MissingRequestId {},

    #[error("Only coordinator {want} can fulfill, got {have}")]
    OnlyCoordinatorCanFulfill { have: String, want: String },

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Raffle is not open")]
    RaffleNotOpen {},

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Prize transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Undefined reply id: {0}")]
    UndefinedReplyId(u64),

    #[error("Unknown randomness request: {0}")]
    UnknownRequest(u64),

    #[error("Upkeep not needed: balance {balance}, players {players}, state {state}")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u64,
        state: RaffleState,
    },

    #[error("New version must be greater than previous one: {0}")]
    VersionErr(String),
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
