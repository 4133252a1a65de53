//! Contract-core primitives for a spot hook backed by a truncated
//! geometric-mean oracle.
//!
//! This crate models the two pieces of the hook system that carry real
//! protocol logic:
//!
//! - [`hooks`]: deterministic encoding of a hook's lifecycle permissions
//!   into the 160-bit flag word checked by the pool manager, including the
//!   low-bits-of-address convention used when mining hook addresses.
//! - [`oracle`]: the owner-gated, bind-once gateway through which the hook
//!   forwards per-pool "cap occurred" signals to the external oracle.
//!
//! The oracle's internal math (geomean truncation, cap accumulation) and the
//! swap/liquidity callbacks themselves live outside this crate; the oracle is
//! reached only through the [`oracle::CapFrequencyOracle`] capability.
//!
//! # Example
//!
//! ```
//! use alloy::primitives::{B256, address};
//! use spot_hook_core::{HookPermissions, OracleGateway, PoolId};
//! # use spot_hook_core::{CapFrequencyOracle, OracleCallError};
//! # struct Oracle;
//! # impl CapFrequencyOracle for Oracle {
//! #     fn update_cap_frequency(&mut self, _: PoolId, _: bool) -> Result<(), OracleCallError> {
//! #         Ok(())
//! #     }
//! # }
//!
//! // Advertise the callbacks this hook participates in.
//! let permissions = HookPermissions {
//!     after_initialize: true,
//!     before_swap: true,
//!     after_swap: true,
//!     after_swap_returns_delta: true,
//!     ..HookPermissions::default()
//! };
//! assert_eq!(permissions.flags().bits().to::<u64>(), 0x10C4);
//!
//! // Wire the oracle once, then forward cap signals.
//! let owner = address!("0x1111111111111111111111111111111111111111");
//! let mut gateway = OracleGateway::new(owner, None);
//! gateway.set_oracle(owner, Oracle).unwrap();
//! gateway
//!     .update_cap_frequency(owner, PoolId::from(B256::ZERO), true)
//!     .unwrap();
//! ```

pub mod hooks;
pub mod oracle;
pub mod types;

pub use hooks::{HookFlags, HookPermissions};
pub use oracle::{CapFrequencyOracle, GatewayError, OracleCallError, OracleGateway};
pub use types::PoolId;
