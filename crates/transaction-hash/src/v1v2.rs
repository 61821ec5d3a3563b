//! The Pedersen-based transaction hash shared by invoke v1, declare v1/v2,
//! and deploy-account v1: an 8- or 9-element [`HashChain`] cascade.

use snhash_crypto::{pedersen_on_elements, HashChain};
use starknet_types_core::felt::Felt;

/// `pedersen_on_elements([prefix, version, address, entryPointSelector,
/// pedersen_on_elements(calldata), maxFee, chainId, nonceOrClassHash,
/// compiledClassHash?])`.
///
/// `version` is an opaque felt: callers pass the plain version (1, 2) or a
/// query-mode version (with the chain's query offset bit already folded in)
/// — the cascade never interprets it.
#[allow(clippy::too_many_arguments)]
fn compute_txn_hash(
    prefix: &[u8],
    version: Felt,
    address: Felt,
    entry_point_selector: Option<Felt>,
    list_hash: Felt,
    max_fee: Option<Felt>,
    chain_id: Felt,
    nonce_or_class_hash: Option<Felt>,
    compiled_class_hash: Option<Felt>,
) -> Felt {
    let mut h = HashChain::default();
    h.update(Felt::from_bytes_be_slice(prefix));
    h.update(version);
    h.update(address);
    h.update(entry_point_selector.unwrap_or(Felt::ZERO));
    h.update(list_hash);
    h.update(max_fee.unwrap_or(Felt::ZERO));
    h.update(chain_id);
    if let Some(value) = nonce_or_class_hash {
        h.update(value);
    }
    if let Some(value) = compiled_class_hash {
        h.update(value);
    }
    h.finalize()
}

/// `invoke_v1_tx_hash = h("invoke", version, senderAddress, 0,
/// h(calldata), maxFee, chainId, nonce)`.
pub fn invoke_v1_hash(
    version: Felt,
    sender_address: Felt,
    calldata: &[Felt],
    max_fee: Felt,
    chain_id: Felt,
    nonce: Felt,
) -> Felt {
    compute_txn_hash(
        b"invoke",
        version,
        sender_address,
        None,
        pedersen_on_elements(calldata),
        Some(max_fee),
        chain_id,
        Some(nonce),
        None,
    )
}

/// `declare_v1_tx_hash = h("declare", version, senderAddress, 0,
/// h([classHash]), maxFee, chainId, nonce)`.
pub fn declare_v1_hash(
    version: Felt,
    sender_address: Felt,
    class_hash: Felt,
    max_fee: Felt,
    chain_id: Felt,
    nonce: Felt,
) -> Felt {
    compute_txn_hash(
        b"declare",
        version,
        sender_address,
        None,
        pedersen_on_elements(&[class_hash]),
        Some(max_fee),
        chain_id,
        Some(nonce),
        None,
    )
}

/// As [`declare_v1_hash`], with `compiledClassHash` appended as a ninth
/// cascade element.
#[allow(clippy::too_many_arguments)]
pub fn declare_v2_hash(
    version: Felt,
    sender_address: Felt,
    class_hash: Felt,
    max_fee: Felt,
    chain_id: Felt,
    nonce: Felt,
    compiled_class_hash: Felt,
) -> Felt {
    compute_txn_hash(
        b"declare",
        version,
        sender_address,
        None,
        pedersen_on_elements(&[class_hash]),
        Some(max_fee),
        chain_id,
        Some(nonce),
        Some(compiled_class_hash),
    )
}

/// `deploy_account_v1_tx_hash = h("deploy_account", version, address, 0,
/// h([classHash, salt, *calldata]), maxFee, chainId, nonce)`, where
/// `address` is calculated fresh via the contract-address calculator (C6)
/// rather than taken on trust from the caller.
#[allow(clippy::too_many_arguments)]
pub fn deploy_account_v1_hash(
    version: Felt,
    class_hash: Felt,
    contract_address_salt: Felt,
    constructor_calldata: &[Felt],
    max_fee: Felt,
    chain_id: Felt,
    nonce: Felt,
) -> Felt {
    let address = snhash_address::calculate_contract_address(
        Felt::ZERO,
        contract_address_salt,
        class_hash,
        constructor_calldata,
    );

    let mut elements = vec![class_hash, contract_address_salt];
    elements.extend_from_slice(constructor_calldata);

    compute_txn_hash(
        b"deploy_account",
        version,
        address,
        None,
        pedersen_on_elements(&elements),
        Some(max_fee),
        chain_id,
        Some(nonce),
        None,
    )
}
