use cosmwasm_std::Timestamp;

use raffle_base::raffle::types::{
    CheckUpkeepResponse, Config, RaffleState, RoundSnapshot, UpkeepStatus,
};

/// Upkeep is needed when the round is open, the interval has elapsed since the
/// last settlement and the round holds both funds and players.
/// Conditions are checked in that order, the first failing one is the reason
pub fn check_upkeep(round: &RoundSnapshot, config: &Config, now: Timestamp) -> CheckUpkeepResponse {
    let time_passed = now.seconds().saturating_sub(round.last_timestamp) >= config.interval;

    let reason = if round.state != RaffleState::Open {
        UpkeepStatus::NotOpen
    } else if !time_passed {
        UpkeepStatus::IntervalNotElapsed
    } else if round.pooled_balance.is_zero() {
        UpkeepStatus::NoBalance
    } else if round.players.is_empty() {
        UpkeepStatus::NoPlayers
    } else {
        UpkeepStatus::Eligible
    };

    CheckUpkeepResponse {
        upkeep_needed: reason == UpkeepStatus::Eligible,
        reason,
    }
}
