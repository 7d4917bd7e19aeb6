use cosmwasm_std::{from_json, to_json_binary, Reply, StdError, StdResult, SubMsg, WasmMsg};
use cw_utils::parse_reply_execute_data;

use raffle_base::{
    raffle::types::Config,
    vrf_coordinator::msg::{ExecuteMsg as CoordinatorExecuteMsg, RequestRandomWordsResponse},
};

use crate::{
    config::{NUM_WORDS, REQUEST_CONFIRMATIONS, REQUEST_RANDOMNESS_REPLY_ID},
    error::ContractError,
};

/// Randomness request to the coordinator. The request id is delivered to the
/// reply handler, the words arrive later in a separate transaction
pub fn request_randomness(config: &Config) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.gas_lane.to_owned(),
            sub_id: config.subscription_id,
            minimum_request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(SubMsg::reply_on_success(msg, REQUEST_RANDOMNESS_REPLY_ID))
}

pub fn parse_request_id(reply: Reply) -> Result<u64, ContractError> {
    let data = parse_reply_execute_data(reply)
        .map_err(|e| StdError::generic_err(e.to_string()))?
        .data
        .ok_or(ContractError::MissingRequestId {})?;

    let RequestRandomWordsResponse { request_id } = from_json(data)?;

    Ok(request_id)
}
