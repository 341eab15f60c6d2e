use brl_core::derive_stream_seed;

/// Derives the deterministic seed used to initialize a specific chain.
pub fn chain_seed(master_seed: u64, chain_index: usize) -> u64 {
    derive_stream_seed(master_seed, chain_index as u64)
}

/// Derives the deterministic seed for one proposal within a chain.
pub fn move_seed(master_seed: u64, chain_index: usize, iteration: usize) -> u64 {
    let intermediate = derive_stream_seed(master_seed, (chain_index as u64) << 32 | 0xB0B);
    derive_stream_seed(intermediate, iteration as u64)
}
