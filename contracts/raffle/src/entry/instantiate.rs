use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::{
    config::{DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_INTERVAL},
    error::ContractError,
    state::{CONFIG, CONTRACT_NAME, CONTRACT_VERSION, ROUND},
};
use raffle_base::raffle::{
    msg::InstantiateMsg,
    types::{Config, Round},
};

pub fn try_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        entrance_fee: msg.entrance_fee,
        interval: msg.interval.unwrap_or(DEFAULT_INTERVAL),
        gas_lane: msg.gas_lane,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit.unwrap_or(DEFAULT_CALLBACK_GAS_LIMIT),
    };

    CONFIG.save(deps.storage, &config)?;
    ROUND.save(deps.storage, &Round::new(env.block.time.seconds()))?;

    Ok(Response::new()
        .add_attribute("action", "instantiate raffle")
        .add_attribute("vrf_coordinator", config.vrf_coordinator)
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}
