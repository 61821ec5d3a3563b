//! Deterministic contract-address calculation:
//! `pedersen_on_elements([prefix, 0, salt, class_hash, pedersen_on_elements(calldata)]) mod 2^251`.

use snhash_common::felt::short_string_to_felt;
use snhash_crypto::pedersen_on_elements;
use starknet_types_core::felt::Felt;

/// `"STARKNET_CONTRACT_ADDRESS"` packed as a short string, the fixed prefix
/// element every address hash starts with.
pub fn contract_address_prefix() -> Felt {
    short_string_to_felt("STARKNET_CONTRACT_ADDRESS")
        .expect("prefix is 25 bytes, fits a short string")
}

/// Masks a felt down to 251 bits by clearing the top five bits of its most
/// significant byte, leaving the low 3 bits of that byte intact.
fn mod_two_pow_251(felt: Felt) -> Felt {
    let mut bytes = felt.to_bytes_be();
    bytes[0] &= 0x07;
    Felt::from_bytes_be(&bytes)
}

/// Computes a contract address the same way account deployment does:
/// `deployer_address` is `0` for `deploy_account`/genesis-style deployment,
/// or the deploying contract's address for calls to the `deploy` syscall.
pub fn calculate_contract_address(
    deployer_address: Felt,
    salt: Felt,
    class_hash: Felt,
    calldata: &[Felt],
) -> Felt {
    let calldata_hash = pedersen_on_elements(calldata);
    let address = pedersen_on_elements(&[
        contract_address_prefix(),
        deployer_address,
        salt,
        class_hash,
        calldata_hash,
    ]);
    mod_two_pow_251(address)
}
