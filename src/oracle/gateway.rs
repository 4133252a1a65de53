//! The bind-once oracle gateway.

use alloy::primitives::Address;

use super::{CapFrequencyOracle, GatewayError};
use crate::types::PoolId;

/// Owner-gated, bind-once conduit between the hook and its oracle.
///
/// The owner is fixed at construction and has no mutator. The oracle slot is
/// an `Option` that moves from `None` to `Some` at most once: binding at
/// construction or through [`OracleGateway::set_oracle`] is terminal, so a
/// deployed gateway can never be silently re-pointed at a different oracle
/// after initial wiring.
#[derive(Debug)]
pub struct OracleGateway<O> {
    owner: Address,
    oracle: Option<O>,
}

impl<O: CapFrequencyOracle> OracleGateway<O> {
    /// Creates a gateway owned by `owner`.
    ///
    /// Supplying `initial_oracle` binds immediately; the gateway then behaves
    /// exactly as if [`OracleGateway::set_oracle`] had already succeeded.
    pub fn new(owner: Address, initial_oracle: Option<O>) -> Self {
        tracing::info!(
            %owner,
            bound = initial_oracle.is_some(),
            "created oracle gateway"
        );
        Self {
            owner,
            oracle: initial_oracle,
        }
    }

    /// The identity recorded as owner at construction.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Whether an oracle has been bound.
    pub fn is_bound(&self) -> bool {
        self.oracle.is_some()
    }

    /// The bound oracle, if any.
    pub fn oracle(&self) -> Option<&O> {
        self.oracle.as_ref()
    }

    /// Binds the oracle. Succeeds at most once per gateway.
    ///
    /// Fails with [`GatewayError::Unauthorized`] unless `caller` is the owner,
    /// and with [`GatewayError::AlreadyBound`] if an oracle is already bound,
    /// regardless of caller. A failed call leaves the binding untouched.
    pub fn set_oracle(&mut self, caller: Address, oracle: O) -> Result<(), GatewayError> {
        self.ensure_owner(caller)?;
        if self.oracle.is_some() {
            return Err(GatewayError::AlreadyBound);
        }
        self.oracle = Some(oracle);
        tracing::info!(owner = %self.owner, "oracle bound");
        Ok(())
    }

    /// Forwards a per-pool cap signal to the bound oracle.
    ///
    /// Fails with [`GatewayError::Unauthorized`] unless `caller` is the owner,
    /// and with [`GatewayError::OracleNotBound`] before binding. The oracle's
    /// own failure, if any, is surfaced unchanged as
    /// [`GatewayError::Oracle`].
    pub fn update_cap_frequency(
        &mut self,
        caller: Address,
        pool: PoolId,
        cap_occurred: bool,
    ) -> Result<(), GatewayError> {
        self.ensure_owner(caller)?;
        let oracle = self.oracle.as_mut().ok_or(GatewayError::OracleNotBound)?;
        tracing::debug!(%pool, cap_occurred, "forwarding cap-frequency update");
        oracle.update_cap_frequency(pool, cap_occurred)?;
        Ok(())
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), GatewayError> {
        if caller != self.owner {
            tracing::warn!(%caller, owner = %self.owner, "rejected call from non-owner");
            return Err(GatewayError::Unauthorized {
                caller,
                owner: self.owner,
            });
        }
        Ok(())
    }
}
