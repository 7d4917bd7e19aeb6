use cosmwasm_std::{Addr, BankMsg, Coin, StdError, SubMsg, SubMsgResult, Uint128, Uint256};

use crate::{config::PAYOUT_REPLY_ID, error::ContractError};

/// Selects `players[random_word mod players.len()]`
pub fn pick_winner(players: &[Addr], random_word: Uint256) -> Result<Addr, ContractError> {
    let index = random_word
        .checked_rem(Uint256::from(players.len() as u64))
        .map_err(StdError::from)?;
    let index = Uint128::try_from(index).map_err(StdError::from)?.u128() as usize;

    players
        .get(index)
        .cloned()
        .ok_or(ContractError::InvalidRandomness {})
}

/// Sends the prize. A failed send is turned into `TransferFailed` by the reply
/// handler which reverts the settlement together with the transfer
pub fn transfer(recipient: &Addr, amount: Coin) -> SubMsg {
    SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![amount],
        },
        PAYOUT_REPLY_ID,
    )
}

pub fn check_transfer(result: SubMsgResult) -> Result<(), ContractError> {
    match result {
        SubMsgResult::Ok(_) => Ok(()),
        SubMsgResult::Err(reason) => Err(ContractError::TransferFailed { reason }),
    }
}
