//! `starknet_keccak`: Keccak-256 truncated to fit a field element by masking
//! the top byte down to its low two bits, used for `selector_from_name` and
//! SNIP-12's `encode_type`/enum-variant type hashes.

use sha3::{Digest, Keccak256};
use starknet_types_core::felt::Felt;

/// Masks the most significant byte of a 32-byte big-endian Keccak digest so
/// the result fits below `2^250`, matching the reference truncation scheme
/// (the Python implementation masks with `2**250 - 1`, equivalent to
/// clearing the top six bits of the first byte).
fn truncated_keccak(mut digest: [u8; 32]) -> Felt {
    digest[0] &= 0x03;
    Felt::from_bytes_be(&digest)
}

/// `starknet_keccak(data) = truncated_keccak(keccak256(data))`.
pub fn starknet_keccak(data: &[u8]) -> Felt {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest: [u8; 32] = hasher.finalize().into();
    truncated_keccak(digest)
}

/// A Starknet selector is the `starknet_keccak` of the entry point's ASCII
/// name; `encode_type`'s `type_hash` uses the same function.
pub fn selector_from_name(name: &str) -> Felt {
    starknet_keccak(name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_below_250_bits() {
        let felt = selector_from_name("transfer");
        let bytes = felt.to_bytes_be();
        assert_eq!(bytes[0] & !0x03, 0);
    }

    #[test]
    fn selector_is_deterministic() {
        pretty_assertions_sorted::assert_eq!(selector_from_name("transfer"), selector_from_name("transfer"));
        assert_ne!(selector_from_name("transfer"), selector_from_name("approve"));
    }
}
