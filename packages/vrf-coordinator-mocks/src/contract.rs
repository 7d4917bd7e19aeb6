use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use raffle_base::{
    error::ContractError,
    vrf_coordinator::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

use crate::actions::{
    execute as e, instantiate::try_instantiate, other::migrate_contract, query as q,
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSubscription {} => e::try_create_subscription(deps, env, info),

        ExecuteMsg::FundSubscription { sub_id, amount } => {
            e::try_fund_subscription(deps, env, info, sub_id, amount)
        }

        ExecuteMsg::AddConsumer { sub_id, consumer } => {
            e::try_add_consumer(deps, env, info, sub_id, consumer)
        }

        ExecuteMsg::RemoveConsumer { sub_id, consumer } => {
            e::try_remove_consumer(deps, env, info, sub_id, consumer)
        }

        ExecuteMsg::CancelSubscription { sub_id } => {
            e::try_cancel_subscription(deps, env, info, sub_id)
        }

        ExecuteMsg::RequestRandomWords {
            key_hash,
            sub_id,
            minimum_request_confirmations,
            callback_gas_limit,
            num_words,
        } => e::try_request_random_words(
            deps,
            env,
            info,
            key_hash,
            sub_id,
            minimum_request_confirmations,
            callback_gas_limit,
            num_words,
        ),

        ExecuteMsg::FulfillRandomWords {
            request_id,
            consumer,
            words,
        } => e::try_fulfill_random_words(deps, env, info, request_id, consumer, words),
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::Subscription { sub_id } => {
            to_json_binary(&q::query_subscription(deps, env, sub_id)?)
        }

        QueryMsg::Request { request_id } => {
            to_json_binary(&q::query_request(deps, env, request_id)?)
        }

        QueryMsg::RequestList {} => to_json_binary(&q::query_request_list(deps, env)?),
    }
}

/// Used for contract migration
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
