//! Binary Merkle tree root computation over field elements.

pub mod root;

pub use root::{root, HashAlgo, MerkleError};
