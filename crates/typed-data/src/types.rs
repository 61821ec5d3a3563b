//! Type-table entries, the dependency-graph closure, and canonical type
//! string construction (`encode_type`/`type_hash`).

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use starknet_types_core::felt::Felt;

use crate::error::TypedDataError;
use crate::revision::Revision;

/// The raw `{name, type[, contains]}` shape every field entry in the JSON
/// `types` map deserializes to, before it is classified into a [`FieldDef`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub contains: Option<String>,
}

/// A field's syntactic shape: a plain reference to another type (including
/// array/tuple spellings), a `merkletree` field, or (V1 only) an `enum`
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDef {
    Standard { name: String, type_name: String },
    Merkle { name: String, contains: String },
    Enum { name: String, contains: String },
}

impl FieldDef {
    pub fn name(&self) -> &str {
        match self {
            FieldDef::Standard { name, .. } => name,
            FieldDef::Merkle { name, .. } => name,
            FieldDef::Enum { name, .. } => name,
        }
    }

    pub fn from_raw(raw: RawField, revision: Revision) -> Result<Self, TypedDataError> {
        match raw.r#type.as_str() {
            "merkletree" => {
                let contains = raw.contains.ok_or_else(|| {
                    TypedDataError::InvalidTypeDefinition(format!(
                        "merkletree field {:?} is missing `contains`",
                        raw.name
                    ))
                })?;
                if contains.ends_with('*') {
                    return Err(TypedDataError::InvalidTypeDefinition(format!(
                        "merkletree field {:?} cannot contain an array type",
                        raw.name
                    )));
                }
                Ok(FieldDef::Merkle {
                    name: raw.name,
                    contains,
                })
            }
            "enum" => {
                if revision == Revision::V0 {
                    return Err(TypedDataError::RevisionMismatch(
                        "enum basic type is not permitted in revision 0".to_string(),
                    ));
                }
                let contains = raw.contains.ok_or_else(|| {
                    TypedDataError::InvalidTypeDefinition(format!(
                        "enum field {:?} is missing `contains`",
                        raw.name
                    ))
                })?;
                Ok(FieldDef::Enum {
                    name: raw.name,
                    contains,
                })
            }
            type_name => {
                if is_enum_variant_tuple(type_name) && revision == Revision::V0 {
                    return Err(TypedDataError::RevisionMismatch(
                        "(A,B,C) enum variant notation is not permitted in revision 0".to_string(),
                    ));
                }
                Ok(FieldDef::Standard {
                    name: raw.name,
                    type_name: type_name.to_string(),
                })
            }
        }
    }
}

fn is_enum_variant_tuple(type_name: &str) -> bool {
    type_name.starts_with('(') && type_name.ends_with(')')
}

pub type TypeTable = IndexMap<String, Vec<FieldDef>>;

/// The V1 preset types, implicitly available for dependency resolution and
/// encoding but never user-redefinable.
pub fn preset_table() -> TypeTable {
    let mut table = IndexMap::new();
    table.insert(
        "u256".to_string(),
        vec![
            FieldDef::Standard {
                name: "low".to_string(),
                type_name: "u128".to_string(),
            },
            FieldDef::Standard {
                name: "high".to_string(),
                type_name: "u128".to_string(),
            },
        ],
    );
    table.insert(
        "TokenAmount".to_string(),
        vec![
            FieldDef::Standard {
                name: "token_address".to_string(),
                type_name: "ContractAddress".to_string(),
            },
            FieldDef::Standard {
                name: "amount".to_string(),
                type_name: "u256".to_string(),
            },
        ],
    );
    table.insert(
        "NftId".to_string(),
        vec![
            FieldDef::Standard {
                name: "collection_address".to_string(),
                type_name: "ContractAddress".to_string(),
            },
            FieldDef::Standard {
                name: "token_id".to_string(),
                type_name: "u256".to_string(),
            },
        ],
    );
    table
}

/// Strips an array suffix (`T*` -> `T`) or splits an inline enum-variant
/// tuple (`(A,B,C)` -> `[A, B, C]`); anything else is a single bare name.
fn decompose_type_name(type_name: &str) -> Vec<String> {
    if let Some(stripped) = type_name.strip_suffix('*') {
        return vec![stripped.to_string()];
    }
    if is_enum_variant_tuple(type_name) {
        let inner = &type_name[1..type_name.len() - 1];
        if inner.is_empty() {
            return vec![];
        }
        return inner.split(',').map(|s| s.trim().to_string()).collect();
    }
    vec![type_name.to_string()]
}

fn field_dependency_names(field: &FieldDef) -> Vec<String> {
    match field {
        FieldDef::Standard { type_name, .. } => decompose_type_name(type_name),
        FieldDef::Merkle { contains, .. } => vec![contains.clone()],
        FieldDef::Enum { contains, .. } => vec![contains.clone()],
    }
}

/// The BFS closure of `root` over `table`: `root` itself first, followed by
/// every type name transitively referenced from its fields, each appearing
/// once.
pub fn dependencies(root: &str, table: &TypeTable) -> Result<Vec<String>, TypedDataError> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut queue: std::collections::VecDeque<String> = std::collections::VecDeque::new();
    queue.push_back(root.to_string());
    seen.insert(root.to_string());

    while let Some(name) = queue.pop_front() {
        let fields = table
            .get(&name)
            .ok_or_else(|| TypedDataError::UnknownType(name.clone()))?;
        for dep in fields.iter().flat_map(field_dependency_names) {
            if table.contains_key(&dep) && seen.insert(dep.clone()) {
                queue.push_back(dep);
            }
        }
    }
    Ok(seen.into_iter().collect())
}

/// `encode_type`: the root's own field list, followed by every other
/// dependency's field list in lexicographic order over the escaped type
/// name, each rendered as `"Name"(field1,field2,...)`.
pub fn encode_type(
    root: &str,
    table: &TypeTable,
    revision: Revision,
) -> Result<String, TypedDataError> {
    let mut deps = dependencies(root, table)?;
    let mut rest = deps.split_off(1);
    rest.sort_by_key(|dep| dep.to_lowercase());

    let mut ordered = deps;
    ordered.extend(rest);

    let mut out = String::new();
    for name in &ordered {
        out.push_str(&encode_single_type(name, table, revision)?);
    }
    Ok(out)
}

fn encode_single_type(
    name: &str,
    table: &TypeTable,
    revision: Revision,
) -> Result<String, TypedDataError> {
    let fields = table
        .get(name)
        .ok_or_else(|| TypedDataError::UnknownType(name.to_string()))?;

    let mut out = revision.escape(name);
    out.push('(');
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&encode_field(field, revision));
    }
    out.push(')');
    Ok(out)
}

fn encode_field(field: &FieldDef, revision: Revision) -> String {
    match field {
        FieldDef::Standard { name, type_name } if is_enum_variant_tuple(type_name) => {
            let inner = &type_name[1..type_name.len() - 1];
            let parts = if inner.is_empty() {
                String::new()
            } else {
                inner
                    .split(',')
                    .map(|t| revision.escape(t.trim()))
                    .collect::<Vec<_>>()
                    .join(",")
            };
            format!("{}:({})", revision.escape(name), parts)
        }
        FieldDef::Standard { name, type_name } => {
            format!("{}:{}", revision.escape(name), revision.escape(type_name))
        }
        FieldDef::Merkle { name, contains } | FieldDef::Enum { name, contains } => {
            format!("{}:{}", revision.escape(name), revision.escape(contains))
        }
    }
}

/// `type_hash(t) = selector_from_name(encode_type(t))`.
pub fn type_hash(name: &str, table: &TypeTable, revision: Revision) -> Result<Felt, TypedDataError> {
    let encoded = encode_type(name, table, revision)?;
    Ok(snhash_crypto::selector_from_name(&encoded))
}
