//! # Ledger Constants & Network Parameters
//!
//! Every magic number the builder relies on lives here. The ledger's
//! consensus rules fix most of them, so "tuning" any of these values is
//! a polite way of saying "producing transactions nobody will relay".

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Transaction Wire Constants
// ---------------------------------------------------------------------------

/// Transaction format version written in the first four bytes.
pub const TX_VERSION: i32 = 2;

/// Sequence number for every input. Final, no relative locktime, no RBF.
pub const DEFAULT_SEQUENCE: u32 = 0xffff_ffff;

/// Locktime for every transaction we emit. Zero means "valid immediately".
pub const DEFAULT_LOCKTIME: u32 = 0;

/// Length of a transaction identifier in bytes.
pub const TXID_LENGTH: usize = 32;

/// Bytes of a 1-input/1-output unsigned transaction that do not depend on
/// the locking script:
///
/// ```text
/// version 4 + input count 1 + prev txid 32 + vout 4 + empty scriptSig 1
///   + sequence 4 + output count 1 + value 8 + script length 1 + locktime 4
///   = 60
/// ```
///
/// Only valid for that topology and for locking scripts shorter than
/// 0xfd bytes (single-byte script length varint).
pub const SINGLE_IO_TX_OVERHEAD: u64 = 60;

// ---------------------------------------------------------------------------
// Address Parameters
// ---------------------------------------------------------------------------

/// Base58Check version byte for mainnet pay-to-pubkey-hash (`1...`).
pub const MAINNET_P2PKH_VERSION: u8 = 0x00;

/// Base58Check version byte for mainnet pay-to-script-hash (`3...`).
pub const MAINNET_P2SH_VERSION: u8 = 0x05;

/// Base58Check version byte for testnet pay-to-pubkey-hash (`m...`/`n...`).
pub const TESTNET_P2PKH_VERSION: u8 = 0x6f;

/// Base58Check version byte for testnet pay-to-script-hash (`2...`).
pub const TESTNET_P2SH_VERSION: u8 = 0xc4;

/// Bech32 human-readable parts.
pub const MAINNET_HRP: &str = "bc";
pub const TESTNET_HRP: &str = "tb";
pub const REGTEST_HRP: &str = "bcrt";

/// Length of a HASH160 digest carried by P2PKH and P2SH addresses.
pub const HASH160_LENGTH: usize = 20;

/// Length of the Base58Check checksum suffix.
pub const BASE58_CHECKSUM_LENGTH: usize = 4;

/// Witness program length bounds (inclusive).
pub const MIN_WITNESS_PROGRAM_LENGTH: usize = 2;
pub const MAX_WITNESS_PROGRAM_LENGTH: usize = 40;

/// Highest witness version a script can express (`OP_16`).
pub const MAX_WITNESS_VERSION: u8 = 16;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// The ledger network an address belongs to.
///
/// Testnet and signet share address parameters, so both decode as
/// [`Network::Testnet`]. Regtest shares base58 version bytes with testnet
/// and differs only in its bech32 HRP; base58 addresses therefore never
/// decode as regtest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// Base58Check version byte for P2PKH addresses on this network.
    pub fn p2pkh_version(self) -> u8 {
        match self {
            Self::Mainnet => MAINNET_P2PKH_VERSION,
            Self::Testnet | Self::Regtest => TESTNET_P2PKH_VERSION,
        }
    }

    /// Base58Check version byte for P2SH addresses on this network.
    pub fn p2sh_version(self) -> u8 {
        match self {
            Self::Mainnet => MAINNET_P2SH_VERSION,
            Self::Testnet | Self::Regtest => TESTNET_P2SH_VERSION,
        }
    }

    /// Bech32 human-readable part for witness addresses on this network.
    pub fn hrp(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_HRP,
            Self::Testnet => TESTNET_HRP,
            Self::Regtest => REGTEST_HRP,
        }
    }

    /// Parses a network name. Accepts the usual aliases (`main`, `bitcoin`,
    /// `test`, `signet`). Returns `None` for anything else; we don't guess.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Some(Self::Mainnet),
            "testnet" | "test" | "testnet3" | "testnet4" | "signet" => Some(Self::Testnet),
            "regtest" => Some(Self::Regtest),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
            Self::Regtest => write!(f, "regtest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overhead_matches_field_widths() {
        // version + in count + txid + vout + scriptSig len + sequence
        //   + out count + value + script len + locktime
        let sum = 4 + 1 + TXID_LENGTH as u64 + 4 + 1 + 4 + 1 + 8 + 1 + 4;
        assert_eq!(sum, SINGLE_IO_TX_OVERHEAD);
    }

    #[test]
    fn test_version_bytes_are_distinct() {
        let all = [
            MAINNET_P2PKH_VERSION,
            MAINNET_P2SH_VERSION,
            TESTNET_P2PKH_VERSION,
            TESTNET_P2SH_VERSION,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_network_parameters() {
        assert_eq!(Network::Mainnet.p2pkh_version(), 0x00);
        assert_eq!(Network::Mainnet.p2sh_version(), 0x05);
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
        assert_eq!(Network::Regtest.p2sh_version(), 0xc4);
        assert_eq!(Network::Regtest.hrp(), "bcrt");
    }

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("MAINNET"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("signet"), Some(Network::Testnet));
        assert_eq!(Network::from_name("regtest"), Some(Network::Regtest));
        assert_eq!(Network::from_name("litecoin"), None);
    }

    #[test]
    fn test_network_display_roundtrip() {
        for net in [Network::Mainnet, Network::Testnet, Network::Regtest] {
            assert_eq!(Network::from_name(&net.to_string()), Some(net));
        }
    }

    #[test]
    fn test_witness_bounds_sanity() {
        assert!(MIN_WITNESS_PROGRAM_LENGTH < MAX_WITNESS_PROGRAM_LENGTH);
        assert_eq!(MAX_WITNESS_VERSION, 16);
    }
}
