use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Uint128, Uint256};

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub base_fee: Uint128,
    pub gas_price_link: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    // subscription owner
    CreateSubscription {},

    FundSubscription {
        sub_id: u64,
        amount: Uint128,
    },

    AddConsumer {
        sub_id: u64,
        consumer: String,
    },

    RemoveConsumer {
        sub_id: u64,
        consumer: String,
    },

    CancelSubscription {
        sub_id: u64,
    },

    // consumer
    /// Responds with `RequestRandomWordsResponse` as data
    RequestRandomWords {
        key_hash: String,
        sub_id: u64,
        minimum_request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },

    // anyone
    /// Delivers words to the consumer. Words are derived from the request id
    /// unless they are provided explicitly
    FulfillRandomWords {
        request_id: u64,
        consumer: String,
        words: Option<Vec<Uint256>>,
    },
}

/// Callback every consumer contract must accept
#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct RequestRandomWordsResponse {
    pub request_id: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::vrf_coordinator::types::Config)]
    Config {},

    #[returns(crate::vrf_coordinator::types::Subscription)]
    Subscription { sub_id: u64 },

    #[returns(crate::vrf_coordinator::types::RandomWordsRequest)]
    Request { request_id: u64 },

    #[returns(Vec<crate::vrf_coordinator::types::RandomWordsRequest>)]
    RequestList {},
}
