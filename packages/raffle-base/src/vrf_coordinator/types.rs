use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct Config {
    /// flat part of the fulfillment price
    pub base_fee: Uint128,
    /// price per unit of callback gas limit
    pub gas_price_link: Uint128,
}

#[cw_serde]
pub struct Subscription {
    pub owner: Addr,
    pub balance: Uint128,
    pub request_count: u64,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct RandomWordsRequest {
    pub request_id: u64,
    pub sub_id: u64,
    pub consumer: Addr,
    pub key_hash: String,
    pub minimum_request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_at: u64,
}
