//! Owner-gated binding and forwarding to the external cap-frequency oracle.
//!
//! The spot hook does not compute anything oracle-side: it only reports, per
//! pool, whether the current update hit the truncation cap. That report
//! travels through [`OracleGateway`], which enforces two things before
//! forwarding:
//!
//! - only the owner recorded at construction may call in
//! - the oracle is wired exactly once and can never be re-pointed afterwards
//!
//! The oracle itself is reached through the [`CapFrequencyOracle`] capability
//! so tests can substitute a fake; its internal math is out of scope here.

mod gateway;

pub use gateway::OracleGateway;

use alloy::primitives::Address;

use crate::types::PoolId;

/// The single entry point this crate needs from the external oracle.
///
/// Implementations accumulate per-pool cap-frequency state; the gateway
/// forwards `(pool, cap_occurred)` verbatim and does no bookkeeping of its
/// own.
pub trait CapFrequencyOracle {
    /// Records whether a value-capping condition occurred for `pool`.
    fn update_cap_frequency(
        &mut self,
        pool: PoolId,
        cap_occurred: bool,
    ) -> Result<(), OracleCallError>;
}

/// Failure reported by the external oracle itself.
///
/// The gateway surfaces this to its caller unchanged; it never interprets,
/// retries, or masks it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("oracle rejected cap-frequency update: {0}")]
pub struct OracleCallError(pub String);

/// Precondition violations raised by [`OracleGateway`] operations.
///
/// All variants are detected before any state change; a failed operation
/// leaves the gateway exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The caller is not the owner recorded at construction.
    #[error("caller {caller} is not the gateway owner {owner}")]
    Unauthorized {
        /// Identity that attempted the call.
        caller: Address,
        /// Identity recorded as owner at construction.
        owner: Address,
    },
    /// `set_oracle` called after an oracle was already bound.
    #[error("an oracle is already bound to this gateway")]
    AlreadyBound,
    /// `update_cap_frequency` called before any oracle was bound.
    #[error("no oracle is bound to this gateway")]
    OracleNotBound,
    /// The bound oracle failed; passed through unchanged.
    #[error(transparent)]
    Oracle(#[from] OracleCallError),
}
