use cosmwasm_std::{coin, ensure, ensure_eq, DepsMut, Env, Event, MessageInfo, Response, Uint256};
use cw_utils::{may_pay, nonpayable};

use crate::{
    error::ContractError,
    oracle::request_randomness,
    settlement::{pick_winner, transfer},
    state::{CONFIG, RECENT_WINNER, ROUND},
    upkeep::check_upkeep,
};
use raffle_base::raffle::types::{RaffleState, ENTERED_EVENT, WINNER_PICKED_EVENT};

/// Records the sender as a player. Paying more than the fee is accepted,
/// the whole amount goes to the pool
pub fn enter_raffle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paid = may_pay(&info, &config.entrance_fee.denom)?;

    ensure!(
        paid >= config.entrance_fee.amount,
        ContractError::InsufficientFee {
            paid,
            required: config.entrance_fee.amount,
        }
    );

    let mut round = ROUND.load(deps.storage)?;
    ensure!(
        round.state == RaffleState::Open,
        ContractError::RaffleNotOpen {}
    );

    round.record(info.sender.to_owned(), paid)?;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_event(
            Event::new(ENTERED_EVENT)
                .add_attribute("player", info.sender)
                .add_attribute("amount", paid),
        )
        .add_attribute("action", "enter_raffle"))
}

/// Closes the round and requests randomness. Eligibility is evaluated again
/// here, a positive `CheckUpkeep` query result is not trusted
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;
    let snapshot = round.snapshot();

    ensure!(
        check_upkeep(&snapshot, &config, env.block.time).upkeep_needed,
        ContractError::UpkeepNotNeeded {
            balance: snapshot.pooled_balance,
            players: snapshot.players.len() as u64,
            state: snapshot.state,
        }
    );

    // pending request id is set in the reply
    round.state = RaffleState::Calculating;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_submessage(request_randomness(&config)?)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("players", snapshot.players.len().to_string())
        .add_attribute("pooled_balance", snapshot.pooled_balance))
}

pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_eq!(
        info.sender,
        config.vrf_coordinator,
        ContractError::OnlyCoordinatorCanFulfill {
            have: info.sender.to_string(),
            want: config.vrf_coordinator.to_string(),
        }
    );

    let mut round = ROUND.load(deps.storage)?;

    // stale and redelivered callbacks end up here
    ensure!(
        round.state == RaffleState::Calculating && round.pending_request_id == Some(request_id),
        ContractError::UnknownRequest(request_id)
    );

    let random_word = random_words
        .first()
        .copied()
        .ok_or(ContractError::InvalidRandomness {})?;
    let winner = pick_winner(&round.players, random_word)?;
    let prize = coin(round.pooled_balance.u128(), &config.entrance_fee.denom);

    round.settle(env.block.time.seconds());
    ROUND.save(deps.storage, &round)?;
    RECENT_WINNER.save(deps.storage, &winner)?;

    let mut response = Response::new();
    if !prize.amount.is_zero() {
        response = response.add_submessage(transfer(&winner, prize.to_owned()));
    }

    Ok(response
        .add_event(
            Event::new(WINNER_PICKED_EVENT)
                .add_attribute("winner", winner)
                .add_attribute("amount", prize.amount)
                .add_attribute("request_id", request_id.to_string()),
        )
        .add_attribute("action", "fulfill_random_words"))
}
