use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use raffle_base::raffle::types::{Config, Round};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "raffle contract";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
// mutated only by execute and reply handlers
pub const ROUND: Item<Round> = Item::new("round");
pub const RECENT_WINNER: Item<Addr> = Item::new("recent_winner");
