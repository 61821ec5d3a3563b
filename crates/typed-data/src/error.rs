/// Errors reported by typed-data validation and hashing, matching the
/// abstract error kinds the domain separator/message-hash flow is allowed
/// to surface. Validation of `types` happens exactly once, at construction;
/// hashing afterwards may only fail with `Schema`, `UnknownType`, or
/// `Empty`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypedDataError {
    #[error(transparent)]
    OutOfRange(#[from] snhash_common::CommonError),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("invalid type definition: {0}")]
    InvalidTypeDefinition(String),

    #[error("revision mismatch: {0}")]
    RevisionMismatch(String),

    #[error("cannot compute a merkle root over zero leaves")]
    Empty,
}

impl From<snhash_merkle::MerkleError> for TypedDataError {
    fn from(e: snhash_merkle::MerkleError) -> Self {
        match e {
            snhash_merkle::MerkleError::Empty => TypedDataError::Empty,
        }
    }
}
