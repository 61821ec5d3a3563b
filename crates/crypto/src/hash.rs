//! Incremental hash-chain builders over the two field hashes this workspace
//! needs: Pedersen (`pedersen_on_elements`, used by v0-v2 transaction hashes
//! and contract-address calculation) and Poseidon (used by v3 transaction
//! hashes and SNIP-12 revision 1 message hashing).

use starknet_types_core::felt::Felt;

/// Sequential Pedersen hash-chain: `h(h(h(0, x0), x1), ..., xn)` folded over
/// the updates, with the element count appended as a trailing hash step.
/// This is exactly `pedersen_on_elements` from a fresh accumulator.
#[derive(Debug, Clone)]
pub struct HashChain {
    hash: Felt,
    count: u64,
}

impl Default for HashChain {
    fn default() -> Self {
        Self {
            hash: Felt::ZERO,
            count: 0,
        }
    }
}

impl HashChain {
    pub fn update(&mut self, value: Felt) {
        self.hash = starknet_crypto::pedersen_hash(&self.hash, &value);
        self.count += 1;
    }

    pub fn chain_update(mut self, value: Felt) -> Self {
        self.update(value);
        self
    }

    /// Folds in the running count and returns the final digest. Consumes
    /// `self` since a chain is only ever finalized once.
    pub fn finalize(self) -> Felt {
        starknet_crypto::pedersen_hash(&self.hash, &Felt::from(self.count))
    }
}

/// Hashes a fixed list of elements with [`HashChain`] in one call.
pub fn pedersen_on_elements(elements: &[Felt]) -> Felt {
    elements
        .iter()
        .fold(HashChain::default(), |chain, e| chain.chain_update(*e))
        .finalize()
}

/// Incremental Poseidon sponge builder. `write`/`finish` mirror
/// [`HashChain`]'s `update`/`finalize` naming so the two can be used
/// interchangeably at call sites that fold over a list of elements.
#[derive(Debug, Clone, Default)]
pub struct PoseidonHasher {
    elements: Vec<Felt>,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, value: Felt) {
        self.elements.push(value);
    }

    pub fn finish(self) -> Felt {
        starknet_crypto::poseidon_hash_many(&self.elements)
    }
}

/// Hashes a fixed list of elements with Poseidon's sponge construction.
pub fn poseidon_hash_many(elements: &[Felt]) -> Felt {
    starknet_crypto::poseidon_hash_many(elements)
}

/// Two-element Poseidon hash, used for Merkle-tree internal nodes.
pub fn poseidon_hash(a: &Felt, b: &Felt) -> Felt {
    starknet_crypto::poseidon_hash(a, b)
}

/// Two-element Pedersen hash, used for Merkle-tree internal nodes and the
/// contract-address calculation's inner `pedersen_on_elements` call.
pub fn pedersen_hash(a: &Felt, b: &Felt) -> Felt {
    starknet_crypto::pedersen_hash(a, b)
}
