//! Extensions over [`starknet_types_core::felt::Felt`]: checked signed
//! conversion, short-string packing, and byte-magnitude ordering.

use starknet_types_core::felt::Felt;

use crate::error::CommonError;

/// `2^251 + 17*2^192 + 1`, the Starknet field prime, as big-endian bytes.
/// Used only for the signed->field mapping; field arithmetic itself is
/// delegated to `Felt`.
const PRIME_BE: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

fn prime() -> num_bigint::BigUint {
    num_bigint::BigUint::from_bytes_be(&PRIME_BE)
}

/// Maps a signed 128-bit integer onto the field: non-negative values embed
/// directly, negative values map to `P - |x|` (the two's-complement-free
/// field negation SNIP-12 and the transaction-hash cascades both rely on).
pub fn felt_from_i128(value: i128) -> Felt {
    if value >= 0 {
        Felt::from(value as u128)
    } else {
        let abs = num_bigint::BigUint::from(value.unsigned_abs());
        let neg = prime() - abs;
        let bytes = neg.to_bytes_be();
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        Felt::from_bytes_be(&padded)
    }
}

/// Parses a `0x`-prefixed hex literal into a [`Felt`].
pub fn felt_from_hex(s: &str) -> Result<Felt, CommonError> {
    Felt::from_hex(s).map_err(|_| CommonError::InvalidLiteral(s.to_string()))
}

/// Parses a decimal literal into a [`Felt`].
pub fn felt_from_dec(s: &str) -> Result<Felt, CommonError> {
    Felt::from_dec_str(s).map_err(|_| CommonError::InvalidLiteral(s.to_string()))
}

/// Parses a (possibly `-`-prefixed) arbitrary-magnitude decimal literal,
/// mapping a negative value to `P - |x|` the same way [`felt_from_i128`]
/// does for the `i128` range. Used for JSON number/string values, which are
/// not bounded to 128 bits the way the `i128` basic type is.
pub fn felt_from_decimal_str(s: &str) -> Result<Felt, CommonError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = num_bigint::BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| CommonError::InvalidLiteral(s.to_string()))?;

    let value = if negative {
        if magnitude == num_bigint::BigUint::from(0u32) {
            magnitude
        } else {
            prime() - magnitude
        }
    } else {
        magnitude
    };

    let bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        return Err(CommonError::OutOfRange {
            what: "felt",
            value: s.to_string(),
        });
    }
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(Felt::from_bytes_be(&padded))
}

/// Encodes a Cairo short string (at most 31 ASCII bytes) as a [`Felt`], the
/// same packing `StarknetDomain.name`/`.version`/`.chainId` and enum-variant
/// selectors use.
pub fn short_string_to_felt(s: &str) -> Result<Felt, CommonError> {
    let bytes = s.as_bytes();
    if bytes.len() > 31 {
        return Err(CommonError::ShortStringTooLong(bytes.len()));
    }
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(Felt::from_bytes_be(&padded))
}

/// Decodes a short string previously packed by [`short_string_to_felt`].
/// Leading zero bytes are stripped before UTF-8 decoding.
pub fn felt_to_short_string(felt: &Felt) -> Result<String, CommonError> {
    let bytes = felt.to_bytes_be();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(32);
    String::from_utf8(bytes[start..].to_vec())
        .map_err(|_| CommonError::InvalidLiteral(hex::encode(bytes)))
}

/// Total (numeric) ordering over field elements via big-endian byte
/// comparison, used to pick the lexicographically-smaller leaf of a Merkle
/// pair. Equivalent to, but avoids depending on, a field-wide `Ord` impl.
pub fn felt_cmp(a: &Felt, b: &Felt) -> std::cmp::Ordering {
    a.to_bytes_be().cmp(&b.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn negative_round_trips_through_field_negation() {
        let neg_one = felt_from_i128(-1);
        assert_eq!(neg_one + Felt::ONE, Felt::ZERO);
    }

    #[test]
    fn positive_is_direct_embedding() {
        pretty_assertions_sorted::assert_eq!(felt_from_i128(42), Felt::from(42u128));
    }

    #[test]
    fn short_string_round_trips() {
        let felt = short_string_to_felt("STARKNET_CONTRACT_ADDRESS").unwrap();
        assert_eq!(
            felt_to_short_string(&felt).unwrap(),
            "STARKNET_CONTRACT_ADDRESS"
        );
    }

    #[test]
    fn short_string_rejects_too_long() {
        let s = "a".repeat(32);
        assert_matches!(
            short_string_to_felt(&s),
            Err(CommonError::ShortStringTooLong(32))
        );
    }

    #[test]
    fn decimal_str_handles_sign_and_magnitude() {
        assert_eq!(felt_from_decimal_str("0").unwrap(), Felt::ZERO);
        assert_eq!(felt_from_decimal_str("-0").unwrap(), Felt::ZERO);
        assert_eq!(felt_from_decimal_str("42").unwrap(), Felt::from(42u64));
        assert_eq!(felt_from_decimal_str("-1").unwrap(), felt_from_i128(-1));
    }

    #[test]
    fn cmp_matches_numeric_order() {
        assert_eq!(
            felt_cmp(&Felt::from(1u64), &Felt::from(2u64)),
            std::cmp::Ordering::Less
        );
    }
}
