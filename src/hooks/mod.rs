//! Hook lifecycle permissions and their bitmask encoding.
//!
//! A hook advertises which pool lifecycle callbacks it participates in as a
//! set of bits inside a 160-bit word:
//!
//! - `permissions`: the named boolean set a hook author writes down
//! - `flags`: the bit-level representation the pool manager dispatches on
//!
//! The pool manager never consults a registry: a hook's permission bits are
//! mined into the low bits of its deployed address, so the encoding must match
//! the shared bit-position table exactly.

pub mod flags;
pub mod permissions;

pub use flags::HookFlags;
pub use permissions::HookPermissions;
