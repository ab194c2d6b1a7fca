//! # Destination Addresses
//!
//! Turns a human-readable address into a [`DecodedAddress`]: which family
//! it belongs to, which network, and the raw hash or witness program.
//!
//! Dispatch is by literal prefix, in a fixed order, with no trial decoding:
//!
//! ```text
//! 1, m, n            -> Base58Check, P2PKH (0x00 mainnet, 0x6f testnet)
//! 3, 2               -> Base58Check, P2SH  (0x05 mainnet, 0xc4 testnet)
//! bc1, tb1, bcrt1    -> Bech32/Bech32m witness program (case-insensitive)
//! anything else      -> UnsupportedAddressFormat
//! ```
//!
//! Every structural failure after dispatch is `InvalidAddress`, with the
//! underlying codec error as the reason.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{
    Network, HASH160_LENGTH, MAX_WITNESS_PROGRAM_LENGTH, MIN_WITNESS_PROGRAM_LENGTH,
};
use crate::encoding::base58;
use crate::encoding::bech32::{self, ChecksumVariant};
use crate::script::{resolve_script, Script};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding a destination address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address matched a known family but failed its structural checks
    /// (checksum, version byte, payload length, witness rules, network).
    #[error("invalid address {address}: {reason}")]
    InvalidAddress {
        /// The offending address string.
        address: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The address does not start with any recognized prefix.
    #[error("unsupported address format: {address}")]
    UnsupportedAddressFormat {
        /// The offending address string.
        address: String,
    },
}

impl AddressError {
    fn invalid(address: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// AddressFamily / DecodedAddress
// ---------------------------------------------------------------------------

/// The locking-script family an address commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    /// Pay to public-key hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
    /// Witness version 0 (P2WPKH / P2WSH).
    WitnessV0,
    /// Witness versions 1 through 16. Never constructed with 0.
    WitnessVn(u8),
}

impl AddressFamily {
    /// Family for a witness version. Version 0 maps to [`Self::WitnessV0`].
    pub fn witness(version: u8) -> Self {
        if version == 0 {
            Self::WitnessV0
        } else {
            Self::WitnessVn(version)
        }
    }

    /// The witness version, or `None` for base58 families.
    pub fn witness_version(&self) -> Option<u8> {
        match self {
            Self::P2pkh | Self::P2sh => None,
            Self::WitnessV0 => Some(0),
            Self::WitnessVn(v) => Some(*v),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P2pkh => write!(f, "p2pkh"),
            Self::P2sh => write!(f, "p2sh"),
            Self::WitnessV0 => write!(f, "witness_v0"),
            Self::WitnessVn(v) => write!(f, "witness_v{}", v),
        }
    }
}

/// The structural content of a destination address.
///
/// Invariant: the payload is 20 bytes for P2PKH/P2SH, and within
/// `[2, 40]` for witness families. Only [`decode_address`] builds these,
/// and it enforces the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedAddress {
    pub(crate) family: AddressFamily,
    pub(crate) network: Network,
    pub(crate) payload: Vec<u8>,
    pub(crate) checksum: Option<ChecksumVariant>,
}

impl DecodedAddress {
    /// Which locking-script family the address belongs to.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Network implied by the version byte or HRP.
    pub fn network(&self) -> Network {
        self.network
    }

    /// HASH160 for base58 families, the witness program otherwise.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Which bech32 checksum verified; `None` for base58 addresses.
    pub fn checksum(&self) -> Option<ChecksumVariant> {
        self.checksum
    }

    /// Shorthand for [`resolve_script`].
    pub fn script_pubkey(&self) -> Script {
        resolve_script(self)
    }

    /// Fails with `InvalidAddress` unless the address belongs to `expected`.
    pub fn require_network(&self, address: &str, expected: Network) -> Result<(), AddressError> {
        if self.network != expected {
            return Err(AddressError::invalid(
                address,
                format!("address is for {}, expected {}", self.network, expected),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// How an address string will be decoded, decided by prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Base58 {
        family: AddressFamily,
        network: Network,
    },
    Witness {
        network: Network,
    },
}

/// Ordered prefix match. First hit wins; no decoding is attempted here.
fn classify(addr: &str) -> Option<Encoding> {
    let base58 = |family, network| Some(Encoding::Base58 { family, network });

    match addr.as_bytes().first()? {
        b'1' => return base58(AddressFamily::P2pkh, Network::Mainnet),
        b'm' | b'n' => return base58(AddressFamily::P2pkh, Network::Testnet),
        b'3' => return base58(AddressFamily::P2sh, Network::Mainnet),
        b'2' => return base58(AddressFamily::P2sh, Network::Testnet),
        _ => {}
    }

    let lower = addr.get(..5).unwrap_or(addr).to_ascii_lowercase();
    if lower.starts_with("bc1") {
        Some(Encoding::Witness {
            network: Network::Mainnet,
        })
    } else if lower.starts_with("tb1") {
        Some(Encoding::Witness {
            network: Network::Testnet,
        })
    } else if lower.starts_with("bcrt1") {
        Some(Encoding::Witness {
            network: Network::Regtest,
        })
    } else {
        None
    }
}

/// Decodes a destination address.
///
/// # Errors
///
/// - [`AddressError::UnsupportedAddressFormat`] if no prefix matches.
/// - [`AddressError::InvalidAddress`] for any checksum, version-byte,
///   length, padding or version/checksum-pairing failure.
///
/// # Example
///
/// ```
/// use rawtx_core::address::{decode_address, AddressFamily};
///
/// let decoded = decode_address("39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMJ").unwrap();
/// assert_eq!(decoded.family(), AddressFamily::P2sh);
/// assert_eq!(decoded.payload().len(), 20);
/// ```
pub fn decode_address(addr: &str) -> Result<DecodedAddress, AddressError> {
    let decoded = match classify(addr) {
        Some(Encoding::Base58 { family, network }) => decode_base58(addr, family, network)?,
        Some(Encoding::Witness { network }) => decode_witness_address(addr, network)?,
        None => {
            return Err(AddressError::UnsupportedAddressFormat {
                address: addr.to_string(),
            })
        }
    };

    tracing::debug!(
        address = addr,
        family = %decoded.family,
        network = %decoded.network,
        payload_len = decoded.payload.len(),
        "address decoded"
    );
    Ok(decoded)
}

fn decode_base58(
    addr: &str,
    family: AddressFamily,
    network: Network,
) -> Result<DecodedAddress, AddressError> {
    let payload = base58::decode_check(addr).map_err(|e| AddressError::invalid(addr, e))?;

    let expected_version = match family {
        AddressFamily::P2sh => network.p2sh_version(),
        _ => network.p2pkh_version(),
    };
    let (&version, hash) = payload
        .split_first()
        .ok_or_else(|| AddressError::invalid(addr, "empty payload"))?;

    if version != expected_version {
        return Err(AddressError::invalid(
            addr,
            format!(
                "version byte 0x{:02x} is not {} {} (0x{:02x})",
                version, network, family, expected_version
            ),
        ));
    }
    if hash.len() != HASH160_LENGTH {
        return Err(AddressError::invalid(
            addr,
            format!(
                "{} hash must be {} bytes, got {}",
                family,
                HASH160_LENGTH,
                hash.len()
            ),
        ));
    }

    Ok(DecodedAddress {
        family,
        network,
        payload: hash.to_vec(),
        checksum: None,
    })
}

fn decode_witness_address(addr: &str, network: Network) -> Result<DecodedAddress, AddressError> {
    let witness = bech32::decode_witness(addr).map_err(|e| AddressError::invalid(addr, e))?;

    if witness.hrp != network.hrp() {
        return Err(AddressError::invalid(
            addr,
            format!("unexpected HRP '{}' for {}", witness.hrp, network),
        ));
    }

    let len = witness.program.len();
    if !(MIN_WITNESS_PROGRAM_LENGTH..=MAX_WITNESS_PROGRAM_LENGTH).contains(&len) {
        return Err(AddressError::invalid(
            addr,
            format!(
                "witness program length {} outside [{}, {}]",
                len, MIN_WITNESS_PROGRAM_LENGTH, MAX_WITNESS_PROGRAM_LENGTH
            ),
        ));
    }

    Ok(DecodedAddress {
        family: AddressFamily::witness(witness.version),
        network,
        payload: witness.program,
        checksum: Some(witness.checksum),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
