//! Resource-bound packing for the v3 fee-related-fields hash.
//!
//! `R_BOUND = (short_string(R) << (64+128)) | (max_amount << 128) | max_price_per_unit`,
//! laid out here as a 32-byte big-endian array rather than via field-wide
//! shifts.

use snhash_common::{Uint128, Uint64};
use starknet_types_core::felt::Felt;

use crate::error::TxHashError;

/// `(max_amount, max_price_per_unit)` for one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceBound {
    pub max_amount: u64,
    pub max_price_per_unit: u128,
}

impl ResourceBound {
    /// Validates that felt-encoded inputs fit the field widths `R_BOUND`'s
    /// packing assumes (`u64` for the amount, `u128` for the price) before
    /// narrowing them, rather than letting an oversized value wrap silently.
    pub fn try_from_felts(
        max_amount: &Felt,
        max_price_per_unit: &Felt,
    ) -> Result<Self, TxHashError> {
        Ok(Self {
            max_amount: Uint64::try_from_felt(max_amount)?.value(),
            max_price_per_unit: Uint128::try_from_felt(max_price_per_unit)?.value(),
        })
    }
}

/// The chain has shipped both a two-bound (L1 gas + L2 gas) and a
/// three-bound (+ L1 data gas) resource-bounds form for v3 transactions.
/// Callers pick whichever their target revision uses; the hasher never
/// guesses or zero-pads a missing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceBounds {
    L1L2 {
        l1_gas: ResourceBound,
        l2_gas: ResourceBound,
    },
    L1L2L1Data {
        l1_gas: ResourceBound,
        l2_gas: ResourceBound,
        l1_data_gas: ResourceBound,
    },
}

const MAX_AMOUNT_BYTES: usize = 8;
const MAX_PRICE_PER_UNIT_BYTES: usize = 16;
const RESOURCE_VALUE_OFFSET_BYTES: usize = MAX_AMOUNT_BYTES + MAX_PRICE_PER_UNIT_BYTES;

const L1_GAS_RESOURCE_NAME: &[u8] = b"L1_GAS";
const L2_GAS_RESOURCE_NAME: &[u8] = b"L2_GAS";
const L1_DATA_GAS_RESOURCE_NAME: &[u8] = b"L1_DATA";

fn flattened_bounds(resource_name: &[u8], bound: ResourceBound) -> Felt {
    let mut b = [0u8; 32];
    b[(32 - MAX_PRICE_PER_UNIT_BYTES)..].copy_from_slice(&bound.max_price_per_unit.to_be_bytes());
    b[(32 - RESOURCE_VALUE_OFFSET_BYTES)..(32 - MAX_PRICE_PER_UNIT_BYTES)]
        .copy_from_slice(&bound.max_amount.to_be_bytes());

    let padding_length = 8 - resource_name.len();
    b[padding_length..(32 - RESOURCE_VALUE_OFFSET_BYTES)].copy_from_slice(resource_name);

    Felt::from_bytes_be(&b)
}

/// `poseidon_hash_many([tip, L1_GAS_BOUND, L2_GAS_BOUND, L1_DATA_GAS_BOUND?])`.
pub fn hash_fee_related_fields(tip: u64, resource_bounds: &ResourceBounds) -> Felt {
    let mut elements = vec![Felt::from(tip)];
    match resource_bounds {
        ResourceBounds::L1L2 { l1_gas, l2_gas } => {
            elements.push(flattened_bounds(L1_GAS_RESOURCE_NAME, *l1_gas));
            elements.push(flattened_bounds(L2_GAS_RESOURCE_NAME, *l2_gas));
        }
        ResourceBounds::L1L2L1Data {
            l1_gas,
            l2_gas,
            l1_data_gas,
        } => {
            elements.push(flattened_bounds(L1_GAS_RESOURCE_NAME, *l1_gas));
            elements.push(flattened_bounds(L2_GAS_RESOURCE_NAME, *l2_gas));
            elements.push(flattened_bounds(L1_DATA_GAS_RESOURCE_NAME, *l1_data_gas));
        }
    }
    snhash_crypto::poseidon_hash_many(&elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_felts_rejects_amount_above_u64() {
        let over = Felt::from(u64::MAX) + Felt::ONE;
        assert!(ResourceBound::try_from_felts(&over, &Felt::ONE).is_err());
    }

    #[test]
    fn try_from_felts_accepts_in_range_values() {
        let bound = ResourceBound::try_from_felts(&Felt::from(100u64), &Felt::from(200u64)).unwrap();
        assert_eq!(bound.max_amount, 100);
        assert_eq!(bound.max_price_per_unit, 200);
    }

    #[test]
    fn flattened_bounds_places_fields_at_fixed_offsets() {
        let bound = ResourceBound {
            max_amount: 100,
            max_price_per_unit: 200,
        };
        let felt = flattened_bounds(L1_GAS_RESOURCE_NAME, bound);
        let bytes = felt.to_bytes_be();
        assert_eq!(&bytes[1..8], b"L1_GAS");
        assert_eq!(u64::from_be_bytes(bytes[8..16].try_into().unwrap()), 100);
        assert_eq!(
            u128::from_be_bytes(bytes[16..32].try_into().unwrap()),
            200
        );
    }

    #[test]
    fn two_bound_and_three_bound_forms_diverge() {
        let bound = ResourceBound {
            max_amount: 1,
            max_price_per_unit: 1,
        };
        let two = ResourceBounds::L1L2 {
            l1_gas: bound,
            l2_gas: bound,
        };
        let three = ResourceBounds::L1L2L1Data {
            l1_gas: bound,
            l2_gas: bound,
            l1_data_gas: bound,
        };
        assert_ne!(
            hash_fee_related_fields(0, &two),
            hash_fee_related_fields(0, &three)
        );
    }

    #[test]
    fn l1_data_resource_name_fits_without_truncation() {
        let bound = ResourceBound {
            max_amount: 1,
            max_price_per_unit: 1,
        };
        let felt = flattened_bounds(L1_DATA_GAS_RESOURCE_NAME, bound);
        let bytes = felt.to_bytes_be();
        assert_eq!(&bytes[1..8], b"L1_DATA");
    }
}
