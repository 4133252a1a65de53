//! Named lifecycle permissions and their flag encoding.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::flags::HookFlags;

/// The set of pool lifecycle callbacks a hook participates in.
///
/// One boolean per callback, constructed wholesale by the hook author and
/// never partially mutated afterwards. [`HookPermissions::flags`] is the only
/// consumer-facing encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HookPermissions {
    pub before_initialize: bool,
    pub after_initialize: bool,
    pub before_add_liquidity: bool,
    pub after_add_liquidity: bool,
    pub before_remove_liquidity: bool,
    pub after_remove_liquidity: bool,
    pub before_swap: bool,
    pub after_swap: bool,
    pub before_donate: bool,
    pub after_donate: bool,
    pub before_swap_returns_delta: bool,
    pub after_swap_returns_delta: bool,
    pub after_add_liquidity_returns_delta: bool,
    pub after_remove_liquidity_returns_delta: bool,
}

impl HookPermissions {
    /// Encodes the permission set into its flag word.
    ///
    /// Pure bitwise union of the flag constant for every enabled callback;
    /// the encoding is total and injective, and never sets a bit outside the
    /// 14 reserved positions.
    pub fn flags(&self) -> HookFlags {
        let mut flags = HookFlags::EMPTY;
        if self.before_initialize {
            flags |= HookFlags::BEFORE_INITIALIZE;
        }
        if self.after_initialize {
            flags |= HookFlags::AFTER_INITIALIZE;
        }
        if self.before_add_liquidity {
            flags |= HookFlags::BEFORE_ADD_LIQUIDITY;
        }
        if self.after_add_liquidity {
            flags |= HookFlags::AFTER_ADD_LIQUIDITY;
        }
        if self.before_remove_liquidity {
            flags |= HookFlags::BEFORE_REMOVE_LIQUIDITY;
        }
        if self.after_remove_liquidity {
            flags |= HookFlags::AFTER_REMOVE_LIQUIDITY;
        }
        if self.before_swap {
            flags |= HookFlags::BEFORE_SWAP;
        }
        if self.after_swap {
            flags |= HookFlags::AFTER_SWAP;
        }
        if self.before_donate {
            flags |= HookFlags::BEFORE_DONATE;
        }
        if self.after_donate {
            flags |= HookFlags::AFTER_DONATE;
        }
        if self.before_swap_returns_delta {
            flags |= HookFlags::BEFORE_SWAP_RETURNS_DELTA;
        }
        if self.after_swap_returns_delta {
            flags |= HookFlags::AFTER_SWAP_RETURNS_DELTA;
        }
        if self.after_add_liquidity_returns_delta {
            flags |= HookFlags::AFTER_ADD_LIQUIDITY_RETURNS_DELTA;
        }
        if self.after_remove_liquidity_returns_delta {
            flags |= HookFlags::AFTER_REMOVE_LIQUIDITY_RETURNS_DELTA;
        }
        flags
    }

    /// Decodes a flag word back into the named permission set.
    ///
    /// Inverse of [`HookPermissions::flags`] over the reserved bit range.
    pub fn from_flags(flags: HookFlags) -> Self {
        Self {
            before_initialize: flags.contains(HookFlags::BEFORE_INITIALIZE),
            after_initialize: flags.contains(HookFlags::AFTER_INITIALIZE),
            before_add_liquidity: flags.contains(HookFlags::BEFORE_ADD_LIQUIDITY),
            after_add_liquidity: flags.contains(HookFlags::AFTER_ADD_LIQUIDITY),
            before_remove_liquidity: flags.contains(HookFlags::BEFORE_REMOVE_LIQUIDITY),
            after_remove_liquidity: flags.contains(HookFlags::AFTER_REMOVE_LIQUIDITY),
            before_swap: flags.contains(HookFlags::BEFORE_SWAP),
            after_swap: flags.contains(HookFlags::AFTER_SWAP),
            before_donate: flags.contains(HookFlags::BEFORE_DONATE),
            after_donate: flags.contains(HookFlags::AFTER_DONATE),
            before_swap_returns_delta: flags.contains(HookFlags::BEFORE_SWAP_RETURNS_DELTA),
            after_swap_returns_delta: flags.contains(HookFlags::AFTER_SWAP_RETURNS_DELTA),
            after_add_liquidity_returns_delta: flags
                .contains(HookFlags::AFTER_ADD_LIQUIDITY_RETURNS_DELTA),
            after_remove_liquidity_returns_delta: flags
                .contains(HookFlags::AFTER_REMOVE_LIQUIDITY_RETURNS_DELTA),
        }
    }

    /// Whether a candidate hook address carries exactly this permission set in
    /// its low bits.
    ///
    /// Deployment tooling mines a CREATE2 salt until this holds; the pool
    /// manager rejects hook registrations where it does not.
    pub fn is_encoded_in(&self, hook: Address) -> bool {
        HookFlags::of_address(hook) == self.flags()
    }

    /// The permission set with every callback enabled.
    pub fn all() -> Self {
        Self::from_flags(HookFlags::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::primitives::aliases::U160;

    #[test]
    fn test_empty_permissions_encode_to_zero() {
        assert_eq!(HookPermissions::default().flags(), HookFlags::EMPTY);
    }

    #[test]
    fn test_full_permissions_encode_to_all_reserved_bits() {
        assert_eq!(HookPermissions::all().flags(), HookFlags::ALL);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let permissions = HookPermissions {
            before_swap: true,
            after_donate: true,
            ..HookPermissions::default()
        };
        assert_eq!(permissions.flags(), permissions.flags());
    }

    #[test]
    fn test_single_permission_bit_positions() {
        let permissions = HookPermissions {
            before_initialize: true,
            ..HookPermissions::default()
        };
        assert_eq!(permissions.flags().bits(), U160::from(1u64 << 13));

        let permissions = HookPermissions {
            after_remove_liquidity_returns_delta: true,
            ..HookPermissions::default()
        };
        assert_eq!(permissions.flags().bits(), U160::from(1u64));
    }

    #[test]
    fn test_spot_hook_permission_vector() {
        // The permission set of the spot hook itself: it reacts to pool
        // initialization, brackets every swap, and settles a swap delta.
        let permissions = HookPermissions {
            after_initialize: true,
            before_swap: true,
            after_swap: true,
            after_swap_returns_delta: true,
            ..HookPermissions::default()
        };
        assert_eq!(permissions.flags().bits(), U160::from(0x10c4u64));
    }

    #[test]
    fn test_encoding_is_injective_over_full_domain() {
        // 2^14 inputs is small enough to sweep exhaustively.
        for raw in 0u64..(1 << 14) {
            let flags = HookFlags::from_bits(U160::from(raw));
            let permissions = HookPermissions::from_flags(flags);
            assert_eq!(permissions.flags(), flags);
        }
    }

    #[test]
    fn test_distinct_sets_produce_distinct_masks() {
        let a = HookPermissions {
            before_swap: true,
            ..HookPermissions::default()
        };
        let b = HookPermissions {
            after_swap: true,
            ..HookPermissions::default()
        };
        assert_ne!(a.flags(), b.flags());
    }

    #[test]
    fn test_no_bit_outside_reserved_positions() {
        assert!(HookFlags::ALL.contains(HookPermissions::all().flags()));
        assert_eq!(
            HookPermissions::all().flags().bits() & !HookFlags::ALL.bits(),
            U160::ZERO
        );
    }

    #[test]
    fn test_address_interop_check() {
        let permissions = HookPermissions {
            after_initialize: true,
            before_swap: true,
            after_swap: true,
            after_swap_returns_delta: true,
            ..HookPermissions::default()
        };
        // Mined address: low 14 bits carry 0x10C4.
        let mined = address!("0x00000000000000000000000000000000000010c4");
        assert!(permissions.is_encoded_in(mined));

        let wrong = address!("0x00000000000000000000000000000000000010c0");
        assert!(!permissions.is_encoded_in(wrong));
    }

    #[test]
    fn test_serde_roundtrip() {
        let permissions = HookPermissions {
            before_add_liquidity: true,
            after_swap_returns_delta: true,
            ..HookPermissions::default()
        };
        let json = serde_json::to_string(&permissions).unwrap();
        let back: HookPermissions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, permissions);
    }
}
