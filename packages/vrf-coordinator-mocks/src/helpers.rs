use cosmwasm_std::Uint256;
use sha2::{Digest, Sha256};

/// Deterministic words used when a fulfillment doesn't override them.
/// Word `i` is `sha256(request_id || i)` read as a big-endian integer
pub fn derive_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|position| {
            let hash: [u8; 32] = Sha256::new()
                .chain_update(request_id.to_be_bytes())
                .chain_update(position.to_be_bytes())
                .finalize()
                .into();

            Uint256::from_be_bytes(hash)
        })
        .collect()
}

