//! The two incompatible typed-data syntax/hash-primitive revisions.

use starknet_types_core::felt::Felt;

use crate::error::TypedDataError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    V0,
    V1,
}

impl Revision {
    /// `domain.revision` is absent or `"0"` for V0, `"1"` for V1. Anything
    /// else is rejected rather than silently defaulted.
    pub fn from_domain_value(value: Option<&str>) -> Result<Self, TypedDataError> {
        match value {
            None | Some("0") => Ok(Revision::V0),
            Some("1") => Ok(Revision::V1),
            Some(other) => Err(TypedDataError::RevisionMismatch(format!(
                "unsupported domain revision {other:?}"
            ))),
        }
    }

    pub fn domain_separator_name(&self) -> &'static str {
        match self {
            Revision::V0 => "StarkNetDomain",
            Revision::V1 => "StarknetDomain",
        }
    }

    pub fn basic_types(&self) -> &'static [&'static str] {
        match self {
            Revision::V0 => &["felt", "bool", "string", "selector", "merkletree"],
            Revision::V1 => &[
                "felt",
                "bool",
                "string",
                "selector",
                "merkletree",
                "enum",
                "i128",
                "u128",
                "ContractAddress",
                "ClassHash",
                "timestamp",
                "shortstring",
            ],
        }
    }

    pub fn preset_types(&self) -> &'static [&'static str] {
        match self {
            Revision::V0 => &[],
            Revision::V1 => &["u256", "TokenAmount", "NftId"],
        }
    }

    /// Identity in V0; surrounds `s` with ASCII double quotes in V1.
    pub fn escape(&self, s: &str) -> String {
        match self {
            Revision::V0 => s.to_string(),
            Revision::V1 => format!("\"{s}\""),
        }
    }

    pub fn hash_algo(&self) -> snhash_merkle::HashAlgo {
        match self {
            Revision::V0 => snhash_merkle::HashAlgo::Pedersen,
            Revision::V1 => snhash_merkle::HashAlgo::Poseidon,
        }
    }

    /// The revision's array-hashing primitive: Pedersen-on-elements for V0,
    /// Poseidon sponge for V1. Used for struct, array, enum, and message
    /// hashing.
    pub fn hash_array(&self, elements: &[Felt]) -> Felt {
        match self {
            Revision::V0 => snhash_crypto::pedersen_on_elements(elements),
            Revision::V1 => snhash_crypto::poseidon_hash_many(elements),
        }
    }
}
