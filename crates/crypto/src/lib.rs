//! Hash primitives: Pedersen/Poseidon chain builders and the
//! `starknet_keccak`-based selector function.

pub mod hash;
pub mod selector;

pub use hash::{pedersen_hash, pedersen_on_elements, poseidon_hash, poseidon_hash_many, HashChain, PoseidonHasher};
pub use selector::{selector_from_name, starknet_keccak};
