//! The Poseidon-based transaction hash shared by invoke v3, declare v3, and
//! deploy-account v3: a common prefix plus a per-kind tail, folded with one
//! `poseidon_hash_many` call.

use snhash_crypto::{poseidon_hash_many, PoseidonHasher};
use starknet_types_core::felt::Felt;

use crate::da_mode::{pack_da_modes, DataAvailabilityMode};
use crate::resource_bounds::{hash_fee_related_fields, ResourceBounds};

fn hash_elements(elements: &[Felt]) -> Felt {
    elements
        .iter()
        .fold(PoseidonHasher::new(), |mut hh, e| {
            hh.write(*e);
            hh
        })
        .finish()
}

/// Builds the `common` prefix every v3 transaction hash shares, then folds
/// `tail` in and returns `poseidon_hash_many(common ++ tail)`.
#[allow(clippy::too_many_arguments)]
fn compute_v3_txn_hash(
    prefix: &[u8],
    version: Felt,
    sender_address: Felt,
    chain_id: Felt,
    nonce: Felt,
    tip: u64,
    paymaster_data: &[Felt],
    nonce_da_mode: DataAvailabilityMode,
    fee_da_mode: DataAvailabilityMode,
    resource_bounds: &ResourceBounds,
    tail: &[Felt],
) -> Felt {
    let fee_fields_hash = hash_fee_related_fields(tip, resource_bounds);
    let da_modes_packed = Felt::from(pack_da_modes(nonce_da_mode, fee_da_mode));

    let mut common = vec![
        Felt::from_bytes_be_slice(prefix),
        version,
        sender_address,
        fee_fields_hash,
        hash_elements(paymaster_data),
        chain_id,
        nonce,
        da_modes_packed,
    ];
    common.extend_from_slice(tail);

    poseidon_hash_many(&common)
}

/// `invoke_v3`: tail is `[h(accountDeploymentData), h(calldata)]`.
#[allow(clippy::too_many_arguments)]
pub fn invoke_v3_hash(
    version: Felt,
    sender_address: Felt,
    chain_id: Felt,
    nonce: Felt,
    tip: u64,
    paymaster_data: &[Felt],
    nonce_da_mode: DataAvailabilityMode,
    fee_da_mode: DataAvailabilityMode,
    resource_bounds: &ResourceBounds,
    account_deployment_data: &[Felt],
    calldata: &[Felt],
) -> Felt {
    let tail = [
        hash_elements(account_deployment_data),
        hash_elements(calldata),
    ];
    compute_v3_txn_hash(
        b"invoke",
        version,
        sender_address,
        chain_id,
        nonce,
        tip,
        paymaster_data,
        nonce_da_mode,
        fee_da_mode,
        resource_bounds,
        &tail,
    )
}

/// `declare_v3`: tail is `[h(accountDeploymentData), classHash, compiledClassHash]`.
#[allow(clippy::too_many_arguments)]
pub fn declare_v3_hash(
    version: Felt,
    sender_address: Felt,
    chain_id: Felt,
    nonce: Felt,
    tip: u64,
    paymaster_data: &[Felt],
    nonce_da_mode: DataAvailabilityMode,
    fee_da_mode: DataAvailabilityMode,
    resource_bounds: &ResourceBounds,
    account_deployment_data: &[Felt],
    class_hash: Felt,
    compiled_class_hash: Felt,
) -> Felt {
    let tail = [
        hash_elements(account_deployment_data),
        class_hash,
        compiled_class_hash,
    ];
    compute_v3_txn_hash(
        b"declare",
        version,
        sender_address,
        chain_id,
        nonce,
        tip,
        paymaster_data,
        nonce_da_mode,
        fee_da_mode,
        resource_bounds,
        &tail,
    )
}

/// `deploy_account_v3`: `address` is computed fresh via the contract-address
/// calculator (C6); tail is `[h(constructorCalldata), classHash, salt]`.
#[allow(clippy::too_many_arguments)]
pub fn deploy_account_v3_hash(
    version: Felt,
    chain_id: Felt,
    nonce: Felt,
    tip: u64,
    paymaster_data: &[Felt],
    nonce_da_mode: DataAvailabilityMode,
    fee_da_mode: DataAvailabilityMode,
    resource_bounds: &ResourceBounds,
    class_hash: Felt,
    contract_address_salt: Felt,
    constructor_calldata: &[Felt],
) -> Felt {
    let address = snhash_address::calculate_contract_address(
        Felt::ZERO,
        contract_address_salt,
        class_hash,
        constructor_calldata,
    );

    let tail = [
        hash_elements(constructor_calldata),
        class_hash,
        contract_address_salt,
    ];
    compute_v3_txn_hash(
        b"deploy_account",
        version,
        address,
        chain_id,
        nonce,
        tip,
        paymaster_data,
        nonce_da_mode,
        fee_da_mode,
        resource_bounds,
        &tail,
    )
}
