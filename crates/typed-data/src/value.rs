//! Value encoding: `encode_value_by_type` dispatches on the syntactic shape
//! of a type name (custom struct, array, basic type); `struct_hash` folds a
//! type's own field list, including the `merkletree`/`enum` field shapes
//! that only ever arise at this one call site.

use snhash_common::byte_array::StarknetByteArray;
use snhash_common::felt::{felt_from_decimal_str, felt_from_hex, short_string_to_felt};
use starknet_types_core::felt::Felt;

use crate::error::TypedDataError;
use crate::revision::Revision;
use crate::types::{type_hash, FieldDef, TypeTable};

/// Encodes `value` under `type_name`: a custom/preset struct name recurses
/// into [`struct_hash`], a trailing `*` recurses elementwise and folds with
/// `hash_array`, anything else is a basic type.
pub fn encode_value_by_type(
    value: &serde_json::Value,
    type_name: &str,
    table: &TypeTable,
    revision: Revision,
) -> Result<Felt, TypedDataError> {
    if table.contains_key(type_name) {
        let obj = value.as_object().ok_or_else(|| {
            TypedDataError::Schema(format!("value for type {type_name:?} must be an object"))
        })?;
        return struct_hash(type_name, obj, table, revision);
    }

    if let Some(stripped) = type_name.strip_suffix('*') {
        let arr = value.as_array().ok_or_else(|| {
            TypedDataError::Schema(format!("value for array type {type_name:?} must be an array"))
        })?;
        let hashes = arr
            .iter()
            .map(|element| encode_value_by_type(element, stripped, table, revision))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(revision.hash_array(&hashes));
    }

    encode_basic(value, type_name, revision)
}

fn felt_from_primitive(value: &serde_json::Value) -> Result<Felt, TypedDataError> {
    match value {
        serde_json::Value::Bool(b) => Ok(if *b { Felt::ONE } else { Felt::ZERO }),
        serde_json::Value::Number(n) => Ok(felt_from_decimal_str(&n.to_string())?),
        serde_json::Value::String(s) => {
            if s.is_empty() {
                return Ok(Felt::ZERO);
            }
            if let Ok(felt) = felt_from_hex(s) {
                return Ok(felt);
            }
            Ok(short_string_to_felt(s)?)
        }
        other => Err(TypedDataError::Schema(format!(
            "expected a primitive JSON value, got {other}"
        ))),
    }
}

/// Parses an `i128` value from either a JSON number or a `0x`-prefixed/
/// decimal string, then maps it onto the field the same way the other
/// signed conversions do.
fn encode_i128(value: &serde_json::Value) -> Result<Felt, TypedDataError> {
    let parsed: Result<i128, _> = match value {
        serde_json::Value::Number(n) => n.to_string().parse(),
        serde_json::Value::String(s) => match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => return i128_from_hex(hex, value),
            None => s.parse(),
        },
        other => {
            return Err(TypedDataError::Schema(format!(
                "expected an i128 number or string, got {other}"
            )))
        }
    };
    let n = parsed.map_err(|_| snhash_common::CommonError::OutOfRange {
        what: "i128",
        value: value.to_string(),
    })?;
    Ok(snhash_common::felt::felt_from_i128(n))
}

fn i128_from_hex(hex: &str, original: &serde_json::Value) -> Result<Felt, TypedDataError> {
    let n = i128::from_str_radix(hex, 16).map_err(|_| snhash_common::CommonError::OutOfRange {
        what: "i128",
        value: original.to_string(),
    })?;
    Ok(snhash_common::felt::felt_from_i128(n))
}

fn encode_basic(
    value: &serde_json::Value,
    type_name: &str,
    revision: Revision,
) -> Result<Felt, TypedDataError> {
    match type_name {
        "felt" | "bool" => felt_from_primitive(value),
        "string" => match revision {
            Revision::V0 => felt_from_primitive(value),
            Revision::V1 => {
                let s = value.as_str().ok_or_else(|| {
                    TypedDataError::Schema("string value must be a JSON string".to_string())
                })?;
                let byte_array = StarknetByteArray::from_string(s);
                Ok(revision.hash_array(&byte_array.to_calldata()))
            }
        },
        "selector" => {
            let s = value.as_str().ok_or_else(|| {
                TypedDataError::Schema("selector value must be a JSON string".to_string())
            })?;
            match felt_from_hex(s) {
                Ok(felt) => Ok(felt),
                Err(_) => Ok(snhash_crypto::selector_from_name(s)),
            }
        }
        "i128" => {
            require_v1(revision, "i128")?;
            encode_i128(value)
        }
        "u128" | "ContractAddress" | "ClassHash" | "timestamp" | "shortstring" => {
            require_v1(revision, type_name)?;
            felt_from_primitive(value)
        }
        other => Err(TypedDataError::UnknownType(other.to_string())),
    }
}

fn require_v1(revision: Revision, type_name: &str) -> Result<(), TypedDataError> {
    if revision == Revision::V0 {
        return Err(TypedDataError::RevisionMismatch(format!(
            "basic type {type_name:?} is not permitted in revision 0"
        )));
    }
    Ok(())
}

/// `struct_hash(t, obj) = hash_array([type_hash(t), ...encoded fields in
/// declaration order])`. `merkletree` and `enum` fields are resolved here,
/// where the declaring [`FieldDef`] (and therefore its `contains`) is known
/// — `encode_value_by_type` never reaches either on its own.
pub fn struct_hash(
    type_name: &str,
    obj: &serde_json::Map<String, serde_json::Value>,
    table: &TypeTable,
    revision: Revision,
) -> Result<Felt, TypedDataError> {
    let fields = table
        .get(type_name)
        .ok_or_else(|| TypedDataError::UnknownType(type_name.to_string()))?;

    let mut hashes = Vec::with_capacity(fields.len() + 1);
    hashes.push(type_hash(type_name, table, revision)?);

    for field in fields {
        let value = obj.get(field.name()).ok_or_else(|| {
            TypedDataError::Schema(format!(
                "missing field {:?} for type {type_name:?}",
                field.name()
            ))
        })?;

        let hash = match field {
            FieldDef::Standard { type_name, .. } => {
                encode_value_by_type(value, type_name, table, revision)?
            }
            FieldDef::Merkle { contains, .. } => encode_merkle_field(value, contains, table, revision)?,
            FieldDef::Enum { contains, .. } => encode_enum_field(value, contains, table, revision)?,
        };
        hashes.push(hash);
    }

    Ok(revision.hash_array(&hashes))
}

fn encode_merkle_field(
    value: &serde_json::Value,
    contains: &str,
    table: &TypeTable,
    revision: Revision,
) -> Result<Felt, TypedDataError> {
    let elements = value
        .as_array()
        .ok_or_else(|| TypedDataError::Schema("merkletree value must be an array".to_string()))?;
    let leaves = elements
        .iter()
        .map(|element| encode_value_by_type(element, contains, table, revision))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(snhash_merkle::root(&leaves, revision.hash_algo())?)
}

fn encode_enum_field(
    value: &serde_json::Value,
    contains: &str,
    table: &TypeTable,
    revision: Revision,
) -> Result<Felt, TypedDataError> {
    let obj = value
        .as_object()
        .ok_or_else(|| TypedDataError::Schema("enum value must be an object".to_string()))?;
    if obj.len() != 1 {
        return Err(TypedDataError::Schema(
            "enum value must have exactly one key".to_string(),
        ));
    }
    let (variant_name, args_value) = obj.iter().next().expect("checked len == 1");

    let variants = table
        .get(contains)
        .ok_or_else(|| TypedDataError::UnknownType(contains.to_string()))?;

    let matches: Vec<usize> = variants
        .iter()
        .enumerate()
        .filter(|(_, f)| f.name() == variant_name)
        .map(|(i, _)| i)
        .collect();
    let variant_index = match matches.as_slice() {
        [index] => *index,
        [] => {
            return Err(TypedDataError::Schema(format!(
                "unknown enum variant {variant_name:?} of {contains:?}"
            )))
        }
        _ => {
            return Err(TypedDataError::Schema(format!(
                "ambiguous enum variant {variant_name:?} of {contains:?}"
            )))
        }
    };

    let variant_type = match &variants[variant_index] {
        FieldDef::Standard { type_name, .. } => type_name,
        _ => {
            return Err(TypedDataError::InvalidTypeDefinition(format!(
                "enum variant {variant_name:?} must be a tuple type"
            )))
        }
    };
    let inner = variant_type
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| {
            TypedDataError::InvalidTypeDefinition(format!(
                "enum variant type {variant_type:?} is not parenthesized"
            ))
        })?;
    let arg_types: Vec<&str> = if inner.is_empty() {
        vec![]
    } else {
        inner.split(',').map(|s| s.trim()).collect()
    };

    let args = args_value
        .as_array()
        .ok_or_else(|| TypedDataError::Schema("enum args must be an array".to_string()))?;
    if args.len() != arg_types.len() {
        return Err(TypedDataError::Schema(format!(
            "enum variant {variant_name:?} expects {} args, got {}",
            arg_types.len(),
            args.len()
        )));
    }

    let mut elements = Vec::with_capacity(args.len() + 1);
    elements.push(Felt::from(variant_index as u64));
    for (arg, ty) in args.iter().zip(arg_types.iter()) {
        elements.push(encode_value_by_type(arg, ty, table, revision)?);
    }

    Ok(revision.hash_array(&elements))
}
