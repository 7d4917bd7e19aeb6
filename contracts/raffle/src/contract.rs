use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};

use crate::{
    config::{PAYOUT_REPLY_ID, REQUEST_RANDOMNESS_REPLY_ID},
    entry::{
        execute::{enter_raffle, fulfill_random_words, perform_upkeep},
        instantiate::try_instantiate,
        migrate::migrate_contract,
        query::{
            query_check_upkeep, query_config, query_entrance_fee, query_interval,
            query_last_timestamp, query_num_words, query_number_of_players, query_player,
            query_raffle_state, query_recent_winner, query_request_confirmations, query_round,
        },
        reply::{confirm_payout, save_request_id},
    },
    error::ContractError,
};
use raffle_base::raffle::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::Round {} => to_json_binary(&query_round(deps, env)?),
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?),
        QueryMsg::EntranceFee {} => to_json_binary(&query_entrance_fee(deps, env)?),
        QueryMsg::Interval {} => to_json_binary(&query_interval(deps, env)?),
        QueryMsg::RaffleState {} => to_json_binary(&query_raffle_state(deps, env)?),
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, env, index)?),
        QueryMsg::NumberOfPlayers {} => to_json_binary(&query_number_of_players(deps, env)?),
        QueryMsg::LastTimestamp {} => to_json_binary(&query_last_timestamp(deps, env)?),
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps, env)?),
        QueryMsg::NumWords {} => to_json_binary(&query_num_words(deps, env)?),
        QueryMsg::RequestConfirmations {} => {
            to_json_binary(&query_request_confirmations(deps, env)?)
        }
    }
}

/// Exposes all reply functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, reply: Reply) -> Result<Response, ContractError> {
    let id = reply.id;

    match id {
        REQUEST_RANDOMNESS_REPLY_ID => save_request_id(deps, env, reply),
        PAYOUT_REPLY_ID => confirm_payout(deps, env, reply.result),
        _ => Err(ContractError::UndefinedReplyId(id)),
    }
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
