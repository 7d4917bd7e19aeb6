use cosmwasm_std::{Addr, Coin, Deps, Env, StdError, StdResult};

use crate::{
    config::{NUM_WORDS, REQUEST_CONFIRMATIONS},
    state::{CONFIG, RECENT_WINNER, ROUND},
    upkeep::check_upkeep,
};
use raffle_base::raffle::types::{CheckUpkeepResponse, Config, RaffleState, Round};

/// query config
pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_round(deps: Deps, _env: Env) -> StdResult<Round> {
    ROUND.load(deps.storage)
}

/// Same evaluation `PerformUpkeep` runs, at the current block time
pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<CheckUpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;

    Ok(check_upkeep(&round.snapshot(), &config, env.block.time))
}

pub fn query_entrance_fee(deps: Deps, _env: Env) -> StdResult<Coin> {
    Ok(CONFIG.load(deps.storage)?.entrance_fee)
}

pub fn query_interval(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.interval)
}

pub fn query_raffle_state(deps: Deps, _env: Env) -> StdResult<RaffleState> {
    Ok(ROUND.load(deps.storage)?.state)
}

pub fn query_player(deps: Deps, _env: Env, index: u64) -> StdResult<Addr> {
    let players = ROUND.load(deps.storage)?.players;

    usize::try_from(index)
        .ok()
        .and_then(|x| players.get(x))
        .cloned()
        .ok_or_else(|| StdError::not_found(format!("player {}", index)))
}

pub fn query_number_of_players(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(ROUND.load(deps.storage)?.players.len() as u64)
}

pub fn query_last_timestamp(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(ROUND.load(deps.storage)?.last_timestamp)
}

pub fn query_recent_winner(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    RECENT_WINNER.may_load(deps.storage)
}

pub fn query_num_words(_deps: Deps, _env: Env) -> StdResult<u32> {
    Ok(NUM_WORDS)
}

pub fn query_request_confirmations(_deps: Deps, _env: Env) -> StdResult<u16> {
    Ok(REQUEST_CONFIRMATIONS)
}
