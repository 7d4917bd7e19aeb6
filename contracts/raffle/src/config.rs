pub const DEFAULT_INTERVAL: u64 = 30; // seconds
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;

pub const REQUEST_CONFIRMATIONS: u16 = 3;
pub const NUM_WORDS: u32 = 1;

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;
