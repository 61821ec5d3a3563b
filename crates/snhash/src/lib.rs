//! Facade over the structured-message typed-data hashing and
//! transaction-hashing core: re-exports each component crate's entry
//! points under one name, gluing the workspace together as a library
//! with no CLI surface.

pub use snhash_address::calculate_contract_address;
pub use snhash_common::{
    felt_cmp, felt_from_dec, felt_from_decimal_str, felt_from_hex, felt_from_i128,
    felt_to_short_string, short_string_to_felt, CommonError, Felt, StarknetByteArray, Uint128,
    Uint64,
};
pub use snhash_crypto::{
    pedersen_hash, pedersen_on_elements, poseidon_hash, poseidon_hash_many, selector_from_name,
    starknet_keccak, HashChain, PoseidonHasher,
};
pub use snhash_merkle::{root as merkle_root, HashAlgo, MerkleError};
pub use snhash_tx_hash::{
    compute_transaction_hash, pack_da_modes, DataAvailabilityMode, DeclareTransaction, DeclareV1,
    DeclareV2, DeclareV3, DeployAccountTransaction, DeployAccountV1, DeployAccountV3,
    InvokeTransaction, InvokeV1, InvokeV3, ResourceBound, ResourceBounds, Transaction,
    TxHashError,
};
pub use snhash_typed_data::{FieldDef, Revision, TypeTable, TypedData, TypedDataError};
