use cosmwasm_std::{
    ensure, to_json_binary, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response,
    StdError, StdResult, Storage, Uint128, Uint256, WasmMsg,
};
use cw_utils::nonpayable;

use raffle_base::{
    error::ContractError,
    vrf_coordinator::{
        msg::{ConsumerExecuteMsg, RequestRandomWordsResponse},
        state::{
            CONFIG, MAX_CONSUMERS, MAX_NUM_WORDS, REQUESTS, REQUEST_NONCE, SUBSCRIPTIONS,
            SUBSCRIPTION_NONCE,
        },
        types::{RandomWordsRequest, Subscription},
    },
};

use crate::helpers::derive_words;

pub fn try_create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let sub_id = SUBSCRIPTION_NONCE.update(deps.storage, |x| -> StdResult<u64> { Ok(x + 1) })?;

    SUBSCRIPTIONS.save(
        deps.storage,
        sub_id,
        &Subscription {
            owner: info.sender.to_owned(),
            balance: Uint128::zero(),
            request_count: 0,
            consumers: vec![],
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&sub_id)?)
        .add_event(
            Event::new("subscription_created")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("owner", info.sender),
        )
        .add_attribute("action", "try_create_subscription"))
}

/// Balance is bookkeeping only, no tokens are moved
pub fn try_fund_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut subscription = load_subscription(deps.storage, sub_id)?;
    let old_balance = subscription.balance;
    subscription.balance = old_balance
        .checked_add(amount)
        .map_err(StdError::from)?;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_event(
            Event::new("subscription_funded")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("old_balance", old_balance)
                .add_attribute("new_balance", subscription.balance),
        )
        .add_attribute("action", "try_fund_subscription"))
}

pub fn try_add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut subscription = load_subscription(deps.storage, sub_id)?;
    check_owner(&subscription, &info.sender)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    // adding a registered consumer is a no-op
    if subscription.consumers.contains(&consumer) {
        return Ok(Response::new().add_attribute("action", "try_add_consumer"));
    }

    ensure!(
        subscription.consumers.len() < MAX_CONSUMERS,
        ContractError::TooManyConsumers
    );

    subscription.consumers.push(consumer.to_owned());
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_event(
            Event::new("consumer_added")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("consumer", consumer),
        )
        .add_attribute("action", "try_add_consumer"))
}

pub fn try_remove_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut subscription = load_subscription(deps.storage, sub_id)?;
    check_owner(&subscription, &info.sender)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    ensure!(
        subscription.consumers.contains(&consumer),
        ContractError::InvalidConsumer {
            sub_id,
            consumer: consumer.to_string(),
        }
    );

    subscription.consumers.retain(|x| x != &consumer);
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_event(
            Event::new("consumer_removed")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("consumer", consumer),
        )
        .add_attribute("action", "try_remove_consumer"))
}

pub fn try_cancel_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let subscription = load_subscription(deps.storage, sub_id)?;
    check_owner(&subscription, &info.sender)?;

    SUBSCRIPTIONS.remove(deps.storage, sub_id);

    Ok(Response::new()
        .add_event(
            Event::new("subscription_canceled")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("amount", subscription.balance),
        )
        .add_attribute("action", "try_cancel_subscription"))
}

#[allow(clippy::too_many_arguments)]
pub fn try_request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    key_hash: String,
    sub_id: u64,
    minimum_request_confirmations: u16,
    callback_gas_limit: u32,
    num_words: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut subscription = load_subscription(deps.storage, sub_id)?;

    ensure!(
        subscription.consumers.contains(&info.sender),
        ContractError::InvalidConsumer {
            sub_id,
            consumer: info.sender.to_string(),
        }
    );

    ensure!(
        num_words <= MAX_NUM_WORDS,
        ContractError::NumWordsTooBig {
            have: num_words,
            want: MAX_NUM_WORDS,
        }
    );

    let request_id = REQUEST_NONCE.update(deps.storage, |x| -> StdResult<u64> { Ok(x + 1) })?;

    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomWordsRequest {
            request_id,
            sub_id,
            consumer: info.sender.to_owned(),
            key_hash: key_hash.to_owned(),
            minimum_request_confirmations,
            callback_gas_limit,
            num_words,
            requested_at: env.block.time.seconds(),
        },
    )?;

    subscription.request_count += 1;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestRandomWordsResponse { request_id })?)
        .add_event(
            Event::new("random_words_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("key_hash", key_hash)
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute(
                    "minimum_request_confirmations",
                    minimum_request_confirmations.to_string(),
                )
                .add_attribute("callback_gas_limit", callback_gas_limit.to_string())
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("sender", info.sender),
        )
        .add_attribute("action", "try_request_random_words"))
}

/// A failing consumer reverts the whole fulfillment, the request stays
/// stored and can be delivered again
pub fn try_fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    request_id: u64,
    consumer: String,
    words: Option<Vec<Uint256>>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::NonexistentRequest)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    ensure!(
        consumer == request.consumer,
        ContractError::InvalidConsumer {
            sub_id: request.sub_id,
            consumer: consumer.to_string(),
        }
    );

    let random_words = match words {
        Some(words) => {
            ensure!(
                words.len() == request.num_words as usize,
                ContractError::InvalidRandomWords {
                    expected: request.num_words,
                    got: words.len() as u32,
                }
            );
            words
        }
        None => derive_words(request_id, request.num_words),
    };

    let config = CONFIG.load(deps.storage)?;
    let payment = config
        .gas_price_link
        .checked_mul(Uint128::from(request.callback_gas_limit))
        .and_then(|x| x.checked_add(config.base_fee))
        .map_err(StdError::from)?;

    let mut subscription = load_subscription(deps.storage, request.sub_id)?;
    ensure!(
        subscription.balance >= payment,
        ContractError::InsufficientBalance
    );
    subscription.balance -= payment;
    SUBSCRIPTIONS.save(deps.storage, request.sub_id, &subscription)?;

    REQUESTS.remove(deps.storage, request_id);

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_event(
            Event::new("random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("payment", payment),
        )
        .add_attribute("action", "try_fulfill_random_words"))
}

fn load_subscription(storage: &dyn Storage, sub_id: u64) -> Result<Subscription, ContractError> {
    SUBSCRIPTIONS
        .may_load(storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription)
}

fn check_owner(subscription: &Subscription, sender: &Addr) -> Result<(), ContractError> {
    ensure!(
        &subscription.owner == sender,
        ContractError::MustBeSubOwner {
            owner: subscription.owner.to_string(),
        }
    );

    Ok(())
}
