//! Transaction envelopes and the version-dispatching entry point.
//!
//! These carry only the fields the hash formulas in `v1v2`/`v3` need —
//! JSON-RPC DTO ergonomics, fee-estimation response shapes, and the rest of
//! a transaction's wire representation are out of scope here.

use starknet_types_core::felt::Felt;

use crate::da_mode::DataAvailabilityMode;
use crate::resource_bounds::ResourceBounds;
use crate::{v1v2, v3};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeV1 {
    pub version: Felt,
    pub sender_address: Felt,
    pub calldata: Vec<Felt>,
    pub max_fee: Felt,
    pub nonce: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeV3 {
    pub version: Felt,
    pub sender_address: Felt,
    pub calldata: Vec<Felt>,
    pub account_deployment_data: Vec<Felt>,
    pub nonce: Felt,
    pub tip: u64,
    pub paymaster_data: Vec<Felt>,
    pub nonce_data_availability_mode: DataAvailabilityMode,
    pub fee_data_availability_mode: DataAvailabilityMode,
    pub resource_bounds: ResourceBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeTransaction {
    V1(InvokeV1),
    V3(InvokeV3),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareV1 {
    pub version: Felt,
    pub sender_address: Felt,
    pub class_hash: Felt,
    pub max_fee: Felt,
    pub nonce: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareV2 {
    pub version: Felt,
    pub sender_address: Felt,
    pub class_hash: Felt,
    pub compiled_class_hash: Felt,
    pub max_fee: Felt,
    pub nonce: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareV3 {
    pub version: Felt,
    pub sender_address: Felt,
    pub class_hash: Felt,
    pub compiled_class_hash: Felt,
    pub account_deployment_data: Vec<Felt>,
    pub nonce: Felt,
    pub tip: u64,
    pub paymaster_data: Vec<Felt>,
    pub nonce_data_availability_mode: DataAvailabilityMode,
    pub fee_data_availability_mode: DataAvailabilityMode,
    pub resource_bounds: ResourceBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclareTransaction {
    V1(DeclareV1),
    V2(DeclareV2),
    V3(DeclareV3),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployAccountV1 {
    pub version: Felt,
    pub class_hash: Felt,
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
    pub max_fee: Felt,
    pub nonce: Felt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployAccountV3 {
    pub version: Felt,
    pub class_hash: Felt,
    pub contract_address_salt: Felt,
    pub constructor_calldata: Vec<Felt>,
    pub nonce: Felt,
    pub tip: u64,
    pub paymaster_data: Vec<Felt>,
    pub nonce_data_availability_mode: DataAvailabilityMode,
    pub fee_data_availability_mode: DataAvailabilityMode,
    pub resource_bounds: ResourceBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployAccountTransaction {
    V1(DeployAccountV1),
    V3(DeployAccountV3),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Invoke(InvokeTransaction),
    Declare(DeclareTransaction),
    DeployAccount(DeployAccountTransaction),
}

/// Computes a transaction hash for whichever kind and version `txn` is.
pub fn compute_transaction_hash(txn: &Transaction, chain_id: Felt) -> Felt {
    tracing::trace!(kind = ?txn, chain_id = ?chain_id, "computing transaction hash");
    match txn {
        Transaction::Invoke(InvokeTransaction::V1(t)) => v1v2::invoke_v1_hash(
            t.version,
            t.sender_address,
            &t.calldata,
            t.max_fee,
            chain_id,
            t.nonce,
        ),
        Transaction::Invoke(InvokeTransaction::V3(t)) => v3::invoke_v3_hash(
            t.version,
            t.sender_address,
            chain_id,
            t.nonce,
            t.tip,
            &t.paymaster_data,
            t.nonce_data_availability_mode,
            t.fee_data_availability_mode,
            &t.resource_bounds,
            &t.account_deployment_data,
            &t.calldata,
        ),
        Transaction::Declare(DeclareTransaction::V1(t)) => v1v2::declare_v1_hash(
            t.version,
            t.sender_address,
            t.class_hash,
            t.max_fee,
            chain_id,
            t.nonce,
        ),
        Transaction::Declare(DeclareTransaction::V2(t)) => v1v2::declare_v2_hash(
            t.version,
            t.sender_address,
            t.class_hash,
            t.max_fee,
            chain_id,
            t.nonce,
            t.compiled_class_hash,
        ),
        Transaction::Declare(DeclareTransaction::V3(t)) => v3::declare_v3_hash(
            t.version,
            t.sender_address,
            chain_id,
            t.nonce,
            t.tip,
            &t.paymaster_data,
            t.nonce_data_availability_mode,
            t.fee_data_availability_mode,
            &t.resource_bounds,
            &t.account_deployment_data,
            t.class_hash,
            t.compiled_class_hash,
        ),
        Transaction::DeployAccount(DeployAccountTransaction::V1(t)) => v1v2::deploy_account_v1_hash(
            t.version,
            t.class_hash,
            t.contract_address_salt,
            &t.constructor_calldata,
            t.max_fee,
            chain_id,
            t.nonce,
        ),
        Transaction::DeployAccount(DeployAccountTransaction::V3(t)) => v3::deploy_account_v3_hash(
            t.version,
            chain_id,
            t.nonce,
            t.tip,
            &t.paymaster_data,
            t.nonce_data_availability_mode,
            t.fee_data_availability_mode,
            &t.resource_bounds,
            t.class_hash,
            t.contract_address_salt,
            &t.constructor_calldata,
        ),
    }
}
