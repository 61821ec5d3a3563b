//! Field-element and primitive-encoding building blocks shared by every
//! other crate in this workspace: the [`Felt`] extensions, fixed-width
//! unsigned integers, and the Cairo `ByteArray` string encoding.

pub mod byte_array;
pub mod error;
pub mod felt;
pub mod sized_uint;

pub use error::CommonError;
pub use starknet_types_core::felt::Felt;

pub use byte_array::StarknetByteArray;
pub use felt::{
    felt_cmp, felt_from_dec, felt_from_decimal_str, felt_from_hex, felt_from_i128,
    felt_to_short_string, short_string_to_felt,
};
pub use sized_uint::{Uint128, Uint64};
