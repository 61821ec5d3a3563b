//! Fixed-width unsigned integers that round-trip through [`Felt`] with a
//! checked range, used wherever `spec.md`'s `u64`/`u128` basic types need to
//! carry their width into the type system instead of trusting every caller
//! to range-check by hand.

use starknet_types_core::felt::Felt;

use crate::error::CommonError;

macro_rules! sized_uint {
    ($name:ident, $repr:ty, $what:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            pub fn new(value: $repr) -> Self {
                Self(value)
            }

            pub fn value(&self) -> $repr {
                self.0
            }

            pub fn as_felt(&self) -> Felt {
                Felt::from(self.0)
            }

            pub fn try_from_u128(value: u128) -> Result<Self, CommonError> {
                <$repr>::try_from(value)
                    .map(Self)
                    .map_err(|_| CommonError::OutOfRange {
                        what: $what,
                        value: value.to_string(),
                    })
            }

            pub fn try_from_felt(felt: &Felt) -> Result<Self, CommonError> {
                let bytes = felt.to_bytes_be();
                let width = std::mem::size_of::<$repr>();
                if bytes[..32 - width].iter().any(|b| *b != 0) {
                    return Err(CommonError::OutOfRange {
                        what: $what,
                        value: felt.to_string(),
                    });
                }
                let mut buf = [0u8; std::mem::size_of::<$repr>()];
                buf.copy_from_slice(&bytes[32 - width..]);
                Ok(Self(<$repr>::from_be_bytes(buf)))
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }
    };
}

sized_uint!(Uint64, u64, "u64");
sized_uint!(Uint128, u128, "u128");
