/// Errors raised by the felt/byte-array/sized-integer primitives.
///
/// Every variant corresponds directly to one of the abstract error kinds in
/// the hashing core's error design: `OutOfRange` here, the rest
/// (`Schema`, `UnknownType`, ...) live closer to the components that can
/// produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommonError {
    #[error("{what} value {value} is out of range")]
    OutOfRange { what: &'static str, value: String },

    #[error("invalid felt literal: {0}")]
    InvalidLiteral(String),

    #[error("short string must be at most 31 bytes, got {0}")]
    ShortStringTooLong(usize),
}
