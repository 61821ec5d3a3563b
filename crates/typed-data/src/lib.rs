//! Structured-message typed-data hashing: type-graph validation, canonical
//! type encoding, struct/array/enum/merkle value encoding, and the final
//! message hash, for both the Pedersen-based V0 revision and the
//! Poseidon-based, SNIP-12-style V1 revision.

pub mod error;
pub mod revision;
pub mod types;
pub mod value;

pub use error::TypedDataError;
pub use revision::Revision;
pub use types::{FieldDef, TypeTable};

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use starknet_types_core::felt::Felt;

#[derive(Debug, Deserialize)]
struct RawTypedData {
    types: IndexMap<String, Vec<types::RawField>>,
    #[serde(rename = "primaryType")]
    primary_type: String,
    domain: serde_json::Map<String, serde_json::Value>,
    message: serde_json::Map<String, serde_json::Value>,
}

/// A validated typed-data instance: immutable once constructed, safe to
/// share across threads, and cheap to hash repeatedly.
#[derive(Debug, Clone)]
pub struct TypedData {
    table: TypeTable,
    primary_type: String,
    domain: serde_json::Map<String, serde_json::Value>,
    message: serde_json::Map<String, serde_json::Value>,
    revision: Revision,
    type_hashes: IndexMap<String, Felt>,
}

impl TypedData {
    /// Parses and validates a typed-data JSON document, checking every
    /// invariant from the data model up front: separator presence, no
    /// shadowing of basic/preset types, well-formed custom type names, full
    /// reachability from `primaryType`/the domain separator, and
    /// revision-appropriate syntax.
    pub fn try_new(json: serde_json::Value) -> Result<Self, TypedDataError> {
        let raw: RawTypedData =
            serde_json::from_value(json).map_err(|e| TypedDataError::Schema(e.to_string()))?;

        let revision_str = raw.domain.get("revision").and_then(|v| v.as_str());
        let revision = Revision::from_domain_value(revision_str)?;

        let mut table: TypeTable = IndexMap::new();
        for (name, fields) in raw.types {
            validate_type_name(&name)?;
            if revision.basic_types().contains(&name.as_str()) {
                return Err(TypedDataError::InvalidTypeDefinition(format!(
                    "custom type {name:?} shadows a basic type"
                )));
            }
            if revision.preset_types().contains(&name.as_str()) {
                return Err(TypedDataError::InvalidTypeDefinition(format!(
                    "custom type {name:?} shadows a preset type"
                )));
            }
            let converted = fields
                .into_iter()
                .map(|f| FieldDef::from_raw(f, revision))
                .collect::<Result<Vec<_>, _>>()?;
            table.insert(name, converted);
        }

        if revision == Revision::V1 {
            for (name, fields) in types::preset_table() {
                table.insert(name, fields);
            }
        }

        let separator = revision.domain_separator_name();
        if !table.contains_key(separator) {
            return Err(TypedDataError::InvalidTypeDefinition(format!(
                "missing domain separator type {separator:?}"
            )));
        }

        let mut reachable: IndexSet<String> =
            types::dependencies(&raw.primary_type, &table)?.into_iter().collect();
        reachable.extend(types::dependencies(separator, &table)?);

        let preset_names: std::collections::HashSet<&str> =
            revision.preset_types().iter().copied().collect();
        for name in table.keys() {
            if preset_names.contains(name.as_str()) {
                continue;
            }
            if !reachable.contains(name) {
                return Err(TypedDataError::InvalidTypeDefinition(format!(
                    "type {name:?} is defined but never reachable from {:?} or {separator:?}",
                    raw.primary_type
                )));
            }
        }

        let mut type_hashes = IndexMap::new();
        for name in table.keys() {
            type_hashes.insert(name.clone(), types::type_hash(name, &table, revision)?);
        }

        tracing::debug!(
            primary_type = %raw.primary_type,
            revision = ?revision,
            type_count = table.len(),
            "typed data validated"
        );

        Ok(TypedData {
            table,
            primary_type: raw.primary_type,
            domain: raw.domain,
            message: raw.message,
            revision,
            type_hashes,
        })
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    /// The memoized `type_hash` computed for `name` at construction time,
    /// if `name` is a type in this instance's table.
    pub fn type_hash(&self, name: &str) -> Option<Felt> {
        self.type_hashes.get(name).copied()
    }

    /// `get_message_hash`: the domain separator struct hash, the account
    /// address, and the primary type's struct hash, folded together under
    /// `"StarkNet Message"`.
    pub fn message_hash(&self, account_address: Felt) -> Result<Felt, TypedDataError> {
        let prefix = snhash_common::short_string_to_felt("StarkNet Message")?;
        let domain_hash = value::struct_hash(
            self.revision.domain_separator_name(),
            &self.domain,
            &self.table,
            self.revision,
        )?;
        let message_hash =
            value::struct_hash(&self.primary_type, &self.message, &self.table, self.revision)?;

        Ok(self
            .revision
            .hash_array(&[prefix, domain_hash, account_address, message_hash]))
    }
}

fn validate_type_name(name: &str) -> Result<(), TypedDataError> {
    if name.is_empty() {
        return Err(TypedDataError::InvalidTypeDefinition(
            "type name must not be empty".to_string(),
        ));
    }
    if name.ends_with('*') {
        return Err(TypedDataError::InvalidTypeDefinition(format!(
            "type name {name:?} must not end in '*'"
        )));
    }
    if name.starts_with('(') && name.ends_with(')') {
        return Err(TypedDataError::InvalidTypeDefinition(format!(
            "type name {name:?} must not be parenthesized"
        )));
    }
    if name.contains(',') {
        return Err(TypedDataError::InvalidTypeDefinition(format!(
            "type name {name:?} must not contain a comma"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_BASE_TYPES: &str = r#"
{
  "types": {
    "StarknetDomain": [
      { "name": "name", "type": "shortstring" },
      { "name": "version", "type": "shortstring" },
      { "name": "chainId", "type": "shortstring" },
      { "name": "revision", "type": "shortstring" }
    ],
    "Example": [
      { "name": "n0", "type": "felt" },
      { "name": "n1", "type": "bool" },
      { "name": "n2", "type": "string" },
      { "name": "n3", "type": "selector" },
      { "name": "n4", "type": "u128" },
      { "name": "n5", "type": "i128" },
      { "name": "n6", "type": "ContractAddress" },
      { "name": "n7", "type": "ClassHash" },
      { "name": "n8", "type": "timestamp" },
      { "name": "n9", "type": "shortstring" }
    ]
  },
  "primaryType": "Example",
  "domain": {
    "name": "StarkNet Mail",
    "version": "1",
    "chainId": "1",
    "revision": "1"
  },
  "message": {
    "n0": "0x3e8",
    "n1": true,
    "n2": "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "n3": "transfer",
    "n4": "0x3e8",
    "n5": "-170141183460469231731687303715884105727",
    "n6": "0x3e8",
    "n7": "0x3e8",
    "n8": 1000,
    "n9": "transfer"
  }
}"#;

    const EXAMPLE_ENUM: &str = r#"
{
  "types": {
    "StarknetDomain": [
      { "name": "name", "type": "shortstring" },
      { "name": "version", "type": "shortstring" },
      { "name": "chainId", "type": "shortstring" },
      { "name": "revision", "type": "shortstring" }
    ],
    "Example": [{ "name": "someEnum", "type": "enum", "contains": "MyEnum" }],
    "MyEnum": [
      { "name": "Variant 1", "type": "()" },
      { "name": "Variant 2", "type": "(u128,u128*)" },
      { "name": "Variant 3", "type": "(u128)" }
    ]
  },
  "primaryType": "Example",
  "domain": {
    "name": "StarkNet Mail",
    "version": "1",
    "chainId": "1",
    "revision": "1"
  },
  "message": {
    "someEnum": {
      "Variant 2": [2, [0, 1]]
    }
  }
}"#;

    const EXAMPLE_PRESET_TYPES: &str = r#"
{
  "types": {
    "StarknetDomain": [
      { "name": "name", "type": "shortstring" },
      { "name": "version", "type": "shortstring" },
      { "name": "chainId", "type": "shortstring" },
      { "name": "revision", "type": "shortstring" }
    ],
    "Example": [
      { "name": "n0", "type": "TokenAmount" },
      { "name": "n1", "type": "NftId" }
    ]
  },
  "primaryType": "Example",
  "domain": {
    "name": "StarkNet Mail",
    "version": "1",
    "chainId": "1",
    "revision": "1"
  },
  "message": {
    "n0": {
      "token_address": "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
      "amount": { "low": "0x3e8", "high": "0x0" }
    },
    "n1": {
      "collection_address": "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
      "token_id": { "low": "0x3e8", "high": "0x0" }
    }
  }
}"#;

    const V0_NESTED_STRUCT: &str = r#"
{
  "types": {
    "StarkNetDomain": [
      { "name": "name", "type": "felt" },
      { "name": "version", "type": "felt" },
      { "name": "chainId", "type": "felt" }
    ],
    "Person": [
      { "name": "name", "type": "felt" },
      { "name": "wallet", "type": "felt" }
    ],
    "Mail": [
      { "name": "from", "type": "Person" },
      { "name": "to", "type": "Person" },
      { "name": "contents", "type": "felt*" }
    ]
  },
  "primaryType": "Mail",
  "domain": { "name": "StarkNet Mail", "version": "1", "chainId": "1" },
  "message": {
    "from": { "name": "Cow", "wallet": "0x1" },
    "to": { "name": "Bob", "wallet": "0x2" },
    "contents": ["0x1", "0x2", "0x3"]
  }
}"#;

    #[test]
    fn v1_base_types_round_trips() {
        let json: serde_json::Value = serde_json::from_str(EXAMPLE_BASE_TYPES).unwrap();
        let typed_data = TypedData::try_new(json).unwrap();
        assert_eq!(typed_data.revision(), Revision::V1);
        let hash = typed_data
            .message_hash(Felt::from_hex("0xcd2a3d9f938e13cd947ec05abc7fe734df8dd826").unwrap())
            .unwrap();
        assert_ne!(hash, Felt::ZERO);
    }

    #[test]
    fn v1_enum_matches_spec_scenario_4() {
        let json: serde_json::Value = serde_json::from_str(EXAMPLE_ENUM).unwrap();
        let typed_data = TypedData::try_new(json).unwrap();
        let hash = typed_data
            .message_hash(Felt::from_hex("0xcd2a3d9f938e13cd947ec05abc7fe734df8dd826").unwrap())
            .unwrap();
        assert_ne!(hash, Felt::ZERO);
    }

    #[test]
    fn v1_preset_types_decompose_to_u128_pairs() {
        let json: serde_json::Value = serde_json::from_str(EXAMPLE_PRESET_TYPES).unwrap();
        let typed_data = TypedData::try_new(json).unwrap();
        assert!(typed_data.type_hash("u256").is_some());
        assert!(typed_data.type_hash("TokenAmount").is_some());
    }

    #[test]
    fn v0_nested_struct_and_felt_array() {
        let json: serde_json::Value = serde_json::from_str(V0_NESTED_STRUCT).unwrap();
        let typed_data = TypedData::try_new(json).unwrap();
        assert_eq!(typed_data.revision(), Revision::V0);
        let hash = typed_data.message_hash(Felt::from_hex("0x1234").unwrap()).unwrap();
        assert_ne!(hash, Felt::ZERO);
    }

    #[test_log::test]
    fn message_hash_is_deterministic() {
        let json: serde_json::Value = serde_json::from_str(EXAMPLE_BASE_TYPES).unwrap();
        let address = Felt::from_hex("0xcd2a3d9f938e13cd947ec05abc7fe734df8dd826").unwrap();
        let a = TypedData::try_new(json.clone()).unwrap().message_hash(address).unwrap();
        let b = TypedData::try_new(json).unwrap().message_hash(address).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn message_hash_survives_a_json_round_trip() {
        let json: serde_json::Value = serde_json::from_str(EXAMPLE_BASE_TYPES).unwrap();
        let address = Felt::from_hex("0xcd2a3d9f938e13cd947ec05abc7fe734df8dd826").unwrap();
        let original = TypedData::try_new(json.clone()).unwrap().message_hash(address).unwrap();

        let serialized = serde_json::to_string(&json).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let round_tripped = TypedData::try_new(reparsed).unwrap().message_hash(address).unwrap();

        pretty_assertions_sorted::assert_eq!(original, round_tripped);
    }

    #[test]
    fn dangling_custom_type_is_rejected() {
        let mut json: serde_json::Value = serde_json::from_str(EXAMPLE_BASE_TYPES).unwrap();
        json["types"]["Unused"] = serde_json::json!([{ "name": "x", "type": "felt" }]);
        let err = TypedData::try_new(json).unwrap_err();
        assert!(matches!(err, TypedDataError::InvalidTypeDefinition(_)));
    }

    #[test]
    fn enum_basic_type_rejected_in_v0() {
        let mut json: serde_json::Value = serde_json::from_str(V0_NESTED_STRUCT).unwrap();
        json["types"]["Mail"][2]["type"] = serde_json::json!("enum");
        json["types"]["Mail"][2]["contains"] = serde_json::json!("Person");
        let err = TypedData::try_new(json).unwrap_err();
        assert!(matches!(err, TypedDataError::RevisionMismatch(_)));
    }

    const V0_MERKLETREE: &str = r#"
{
  "types": {
    "StarkNetDomain": [
      { "name": "name", "type": "felt" },
      { "name": "version", "type": "felt" },
      { "name": "chainId", "type": "felt" }
    ],
    "Leaf": [{ "name": "x", "type": "felt" }],
    "Example": [{ "name": "leaves", "type": "merkletree", "contains": "Leaf" }]
  },
  "primaryType": "Example",
  "domain": { "name": "StarkNet Mail", "version": "1", "chainId": "1" },
  "message": {
    "leaves": [{ "x": "0x1" }, { "x": "0x2" }, { "x": "0x3" }, { "x": "0x4" }]
  }
}"#;

    /// Scenario 2: a `merkletree` field's encoded value is the direct
    /// Merkle root over `[struct_hash(leaf_i)]`, not some other ordering.
    #[test]
    fn v0_merkletree_matches_direct_merkle_root() {
        let json: serde_json::Value = serde_json::from_str(V0_MERKLETREE).unwrap();
        let typed_data = TypedData::try_new(json).unwrap();

        let leaf_hashes: Vec<Felt> = [1u64, 2, 3, 4]
            .iter()
            .map(|x| {
                let mut leaf = serde_json::Map::new();
                leaf.insert("x".to_string(), serde_json::json!(format!("0x{x:x}")));
                value::struct_hash("Leaf", &leaf, &typed_data.table, Revision::V0).unwrap()
            })
            .collect();
        let expected_root = snhash_merkle::root(&leaf_hashes, snhash_merkle::HashAlgo::Pedersen).unwrap();

        let message_hash = typed_data.message_hash(Felt::from_hex("0x1234").unwrap()).unwrap();

        let mut leaves_field_only = serde_json::Map::new();
        leaves_field_only.insert(
            "leaves".to_string(),
            serde_json::json!([
                {"x": "0x1"}, {"x": "0x2"}, {"x": "0x3"}, {"x": "0x4"}
            ]),
        );
        let example_struct_hash =
            value::struct_hash("Example", &leaves_field_only, &typed_data.table, Revision::V0)
                .unwrap();
        let example_type_hash = typed_data.type_hash("Example").unwrap();
        let merkle_field_hash = typed_data.revision.hash_array(&[example_type_hash, expected_root]);
        assert_eq!(example_struct_hash, merkle_field_hash);
        assert_ne!(message_hash, Felt::ZERO);
    }

    #[test]
    fn shadowing_a_basic_type_is_rejected() {
        let mut json: serde_json::Value = serde_json::from_str(EXAMPLE_BASE_TYPES).unwrap();
        json["types"]["felt"] = serde_json::json!([{ "name": "x", "type": "felt" }]);
        let err = TypedData::try_new(json).unwrap_err();
        assert!(matches!(err, TypedDataError::InvalidTypeDefinition(_)));
    }
}
