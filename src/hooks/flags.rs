//! The 160-bit permission flag word.
//!
//! Bit positions are a stable convention shared with the hook-registration
//! protocol: the pool manager reads a hook's permissions straight out of the
//! low 14 bits of its deployed address, so the word is address-sized and the
//! assignment below must never change.
//!
//! | bit | callback                              |
//! |-----|---------------------------------------|
//! | 13  | before initialize                     |
//! | 12  | after initialize                      |
//! | 11  | before add liquidity                  |
//! | 10  | after add liquidity                   |
//! | 9   | before remove liquidity               |
//! | 8   | after remove liquidity                |
//! | 7   | before swap                           |
//! | 6   | after swap                            |
//! | 5   | before donate                         |
//! | 4   | after donate                          |
//! | 3   | before swap, returns delta            |
//! | 2   | after swap, returns delta             |
//! | 1   | after add liquidity, returns delta    |
//! | 0   | after remove liquidity, returns delta |

use alloy::primitives::Address;
use alloy::primitives::aliases::U160;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// A set of hook permission bits inside a 160-bit word.
///
/// Only the 14 reserved low bits can ever be set; every constructor masks out
/// the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookFlags(U160);

impl HookFlags {
    pub const BEFORE_INITIALIZE: Self = Self::from_bit(13);
    pub const AFTER_INITIALIZE: Self = Self::from_bit(12);
    pub const BEFORE_ADD_LIQUIDITY: Self = Self::from_bit(11);
    pub const AFTER_ADD_LIQUIDITY: Self = Self::from_bit(10);
    pub const BEFORE_REMOVE_LIQUIDITY: Self = Self::from_bit(9);
    pub const AFTER_REMOVE_LIQUIDITY: Self = Self::from_bit(8);
    pub const BEFORE_SWAP: Self = Self::from_bit(7);
    pub const AFTER_SWAP: Self = Self::from_bit(6);
    pub const BEFORE_DONATE: Self = Self::from_bit(5);
    pub const AFTER_DONATE: Self = Self::from_bit(4);
    pub const BEFORE_SWAP_RETURNS_DELTA: Self = Self::from_bit(3);
    pub const AFTER_SWAP_RETURNS_DELTA: Self = Self::from_bit(2);
    pub const AFTER_ADD_LIQUIDITY_RETURNS_DELTA: Self = Self::from_bit(1);
    pub const AFTER_REMOVE_LIQUIDITY_RETURNS_DELTA: Self = Self::from_bit(0);

    /// No permission bits set.
    pub const EMPTY: Self = Self(U160::ZERO);

    /// All 14 reserved permission bits.
    pub const ALL: Self = Self(U160::from_limbs([(1u64 << 14) - 1, 0, 0]));

    const fn from_bit(bit: u32) -> Self {
        Self(U160::from_limbs([1u64 << bit, 0, 0]))
    }

    /// Builds a flag set from a raw word, keeping only the reserved bits.
    pub fn from_bits(bits: U160) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// The permission bits carried in the low bits of a deployed hook address.
    ///
    /// Hook deployments mine a CREATE2 salt until the address satisfies this
    /// extraction, so for a valid hook it equals the hook's declared
    /// permissions.
    pub fn of_address(hook: Address) -> Self {
        Self(U160::from_be_slice(hook.as_slice()) & Self::ALL.0)
    }

    /// The raw 160-bit word.
    pub const fn bits(&self) -> U160 {
        self.0
    }

    /// Bitwise union of two flag sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }
}

impl BitOr for HookFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for HookFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl Display for HookFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
