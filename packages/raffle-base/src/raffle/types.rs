use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, StdResult, Uint128};
use strum_macros::Display;

pub const ENTERED_EVENT: &str = "raffle_enter";
pub const UPKEEP_PERFORMED_EVENT: &str = "requested_raffle_winner";
pub const WINNER_PICKED_EVENT: &str = "winner_picked";

/// Immutable raffle parameters, set on instantiation
#[cw_serde]
pub struct Config {
    /// the only address allowed to deliver randomness
    pub vrf_coordinator: Addr,
    pub entrance_fee: Coin,
    /// minimal time between settlements in seconds
    pub interval: u64,
    /// key hash selecting the coordinator gas lane
    pub gas_lane: String,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
}

#[cw_serde]
#[derive(Copy, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RaffleState {
    #[default]
    Open,
    Calculating,
}

/// The single active round
#[cw_serde]
#[derive(Default)]
pub struct Round {
    pub state: RaffleState,
    /// entry order, duplicates allowed
    pub players: Vec<Addr>,
    pub pooled_balance: Uint128,
    /// time of instantiation or of the last settlement in seconds
    pub last_timestamp: u64,
    pub pending_request_id: Option<u64>,
}

impl Round {
    pub fn new(now: u64) -> Self {
        Self {
            last_timestamp: now,
            ..Self::default()
        }
    }

    /// Appends an entry and accumulates the paid amount
    pub fn record(&mut self, player: Addr, amount: Uint128) -> StdResult<()> {
        self.pooled_balance = self.pooled_balance.checked_add(amount)?;
        self.players.push(player);

        Ok(())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            players: self.players.clone(),
            pooled_balance: self.pooled_balance,
            last_timestamp: self.last_timestamp,
        }
    }

    /// Starts the next round. The caller must have dispatched the payout already
    pub fn settle(&mut self, now: u64) {
        *self = Self::new(now);
    }
}

/// Read-only view of a round used to evaluate upkeep
#[cw_serde]
pub struct RoundSnapshot {
    pub state: RaffleState,
    pub players: Vec<Addr>,
    pub pooled_balance: Uint128,
    pub last_timestamp: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum UpkeepStatus {
    Eligible,
    NotOpen,
    IntervalNotElapsed,
    NoBalance,
    NoPlayers,
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    /// first condition that blocks the upkeep or `Eligible`
    pub reason: UpkeepStatus,
}
