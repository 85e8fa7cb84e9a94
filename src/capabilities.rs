//! Debug-client capability flags.
//!
//! A client reports what it can do as a bitmask built from these flags.
//! The numeric values are part of the wire contract: hosts compare masks
//! they received from older clients, so each flag keeps its bit forever.

use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

bitflags! {
    /// Capabilities a debug client may advertise to its host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClientCapabilities: u16 {
        /// Breakpoint/step debugging.
        const HAS_DEBUGGER = 0x0001;
        /// Interactive interpreter.
        const HAS_INTERPRETER = 0x0002;
        /// Execution profiling.
        const HAS_PROFILER = 0x0004;
        /// Code-coverage collection.
        const HAS_COVERAGE = 0x0008;
        /// Code completion.
        const HAS_COMPLETER = 0x0010;
        /// Unit-test execution.
        const HAS_UNITTEST = 0x0020;
        /// Interactive shell.
        const HAS_SHELL = 0x0040;

        /// Union of every individual capability. Must be extended whenever
        /// a new flag is added above.
        const HAS_ALL = Self::HAS_DEBUGGER.bits()
            | Self::HAS_INTERPRETER.bits()
            | Self::HAS_PROFILER.bits()
            | Self::HAS_COVERAGE.bits()
            | Self::HAS_COMPLETER.bits()
            | Self::HAS_UNITTEST.bits()
            | Self::HAS_SHELL.bits();
    }
}

/// Error decoding a capability mask from a raw integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Unknown capability bits in mask {bits:#06x}")]
    UnknownBits { bits: u16 },
}

impl TryFrom<u16> for ClientCapabilities {
    type Error = CapabilityError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(CapabilityError::UnknownBits { bits })
    }
}

impl From<ClientCapabilities> for u16 {
    fn from(caps: ClientCapabilities) -> u16 {
        caps.bits()
    }
}

// Masks travel as plain integers, not as flag-name strings, so the serde
// representation is the raw bits.
impl Serialize for ClientCapabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ClientCapabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u16::deserialize(deserializer)?;
        Self::try_from(bits).map_err(D::Error::custom)
    }
}
