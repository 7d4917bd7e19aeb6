use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use raffle_base::{
    error::ContractError,
    vrf_coordinator::{
        msg::InstantiateMsg,
        state::{CONFIG, CONTRACT_NAME, REQUEST_NONCE, SUBSCRIPTION_NONCE},
        types::Config,
    },
};

pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            base_fee: msg.base_fee,
            gas_price_link: msg.gas_price_link,
        },
    )?;

    SUBSCRIPTION_NONCE.save(deps.storage, &0)?;
    REQUEST_NONCE.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "try_instantiate")
        .add_attribute("base_fee", msg.base_fee)
        .add_attribute("gas_price_link", msg.gas_price_link))
}
