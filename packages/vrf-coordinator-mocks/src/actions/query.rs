use cosmwasm_std::{Deps, Env, Order, StdResult};

use raffle_base::vrf_coordinator::{
    state::{CONFIG, REQUESTS, SUBSCRIPTIONS},
    types::{Config, RandomWordsRequest, Subscription},
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_subscription(deps: Deps, _env: Env, sub_id: u64) -> StdResult<Subscription> {
    SUBSCRIPTIONS.load(deps.storage, sub_id)
}

pub fn query_request(deps: Deps, _env: Env, request_id: u64) -> StdResult<RandomWordsRequest> {
    REQUESTS.load(deps.storage, request_id)
}

pub fn query_request_list(deps: Deps, _env: Env) -> StdResult<Vec<RandomWordsRequest>> {
    REQUESTS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|x| x.map(|(_, request)| request))
        .collect()
}
