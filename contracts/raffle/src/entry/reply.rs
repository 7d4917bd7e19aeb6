use cosmwasm_std::{DepsMut, Env, Event, Reply, Response, StdResult, SubMsgResult};

use crate::{
    error::ContractError, oracle::parse_request_id, settlement::check_transfer, state::ROUND,
};
use raffle_base::raffle::types::UPKEEP_PERFORMED_EVENT;

pub fn save_request_id(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    let request_id = parse_request_id(reply)?;

    ROUND.update(deps.storage, |mut round| -> StdResult<_> {
        round.pending_request_id = Some(request_id);
        Ok(round)
    })?;

    Ok(Response::new()
        .add_event(
            Event::new(UPKEEP_PERFORMED_EVENT).add_attribute("request_id", request_id.to_string()),
        )
        .add_attribute("action", "save_request_id"))
}

/// Erroring here reverts the settlement, the round keeps its players and funds
pub fn confirm_payout(
    _deps: DepsMut,
    _env: Env,
    result: SubMsgResult,
) -> Result<Response, ContractError> {
    check_transfer(result)?;

    Ok(Response::new())
}
