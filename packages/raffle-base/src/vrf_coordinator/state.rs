use cw_storage_plus::{Item, Map};

use crate::vrf_coordinator::types::{Config, RandomWordsRequest, Subscription};

pub const CONTRACT_NAME: &str = "vrf-coordinator-mocks";

pub const MAX_CONSUMERS: usize = 100;
pub const MAX_NUM_WORDS: u32 = 500;

pub const CONFIG: Item<Config> = Item::new("config");
// last issued ids, the first issued id is 1
pub const SUBSCRIPTION_NONCE: Item<u64> = Item::new("subscription nonce");
pub const REQUEST_NONCE: Item<u64> = Item::new("request nonce");

pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
// unfulfilled requests only
pub const REQUESTS: Map<u64, RandomWordsRequest> = Map::new("requests");
