use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint256};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub vrf_coordinator: String,
    pub entrance_fee: Coin,
    pub interval: Option<u64>,
    pub gas_lane: String,
    pub subscription_id: u64,
    pub callback_gas_limit: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Entrance fee must be attached in the configured denom
    EnterRaffle {},

    /// Permissionless, succeeds only if `CheckUpkeep` reports it's needed
    PerformUpkeep {},

    /// Coordinator callback
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::raffle::types::Config)]
    Config {},

    #[returns(crate::raffle::types::Round)]
    Round {},

    #[returns(crate::raffle::types::CheckUpkeepResponse)]
    CheckUpkeep {},

    #[returns(cosmwasm_std::Coin)]
    EntranceFee {},

    #[returns(u64)]
    Interval {},

    #[returns(crate::raffle::types::RaffleState)]
    RaffleState {},

    #[returns(cosmwasm_std::Addr)]
    Player { index: u64 },

    #[returns(u64)]
    NumberOfPlayers {},

    #[returns(u64)]
    LastTimestamp {},

    #[returns(Option<cosmwasm_std::Addr>)]
    RecentWinner {},

    #[returns(u32)]
    NumWords {},

    #[returns(u16)]
    RequestConfirmations {},
}
