/// Errors reported while computing a transaction hash. The hashers take
/// already-validated felts and bounded integers, so the only failure mode
/// left at this boundary is a value too wide for its declared width.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TxHashError {
    #[error(transparent)]
    OutOfRange(#[from] snhash_common::CommonError),
}
