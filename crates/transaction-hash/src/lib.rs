//! Bit-exact transaction hashing for invoke, declare, and deploy-account
//! envelopes at v1/v2 (Pedersen) and v3 (Poseidon).

pub mod da_mode;
pub mod error;
pub mod resource_bounds;
pub mod transaction;
pub mod v1v2;
pub mod v3;

pub use da_mode::{pack_da_modes, DataAvailabilityMode};
pub use error::TxHashError;
pub use resource_bounds::{ResourceBound, ResourceBounds};
pub use transaction::{
    compute_transaction_hash, DeclareTransaction, DeclareV1, DeclareV2, DeclareV3,
    DeployAccountTransaction, DeployAccountV1, DeployAccountV3, InvokeTransaction, InvokeV1,
    InvokeV3, Transaction,
};
pub use v1v2::{declare_v1_hash, declare_v2_hash, deploy_account_v1_hash, invoke_v1_hash};
pub use v3::{declare_v3_hash, deploy_account_v3_hash, invoke_v3_hash};
