//! Console variable flag word
//!
//! Bit values match the Source engine `FCVAR_*` constants so a host flag word
//! can be passed through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset of convar behaviour flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConVarFlags(u32);

impl ConVarFlags {
    /// No flags
    pub const NONE: Self = Self(0);
    /// Hidden from `find` and autocomplete
    pub const HIDDEN: Self = Self(1 << 4);
    /// Value is not sent to clients (passwords and the like)
    pub const PROTECTED: Self = Self(1 << 5);
    /// Saved to the engine's own archive config
    pub const ARCHIVE: Self = Self(1 << 7);
    /// Changes are announced to players
    pub const NOTIFY: Self = Self(1 << 8);
    /// Server value is replicated to clients
    pub const REPLICATED: Self = Self(1 << 13);
    /// Only changeable with `sv_cheats 1`
    pub const CHEAT: Self = Self(1 << 14);
    /// Excluded from generated and applied config files
    pub const DONT_RECORD: Self = Self(1 << 17);

    /// Build from a raw host flag word
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw flag word
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check that every bit of `other` is set
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Should this convar be written to and read from config files
    #[must_use]
    pub const fn is_persisted(self) -> bool {
        !self.contains(Self::DONT_RECORD)
    }
}

impl BitOr for ConVarFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConVarFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for ConVarFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for ConVarFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
