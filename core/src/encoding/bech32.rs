//! Bech32 / Bech32m witness-address decoding.
//!
//! Checksum verification is done by the `bech32` crate. We run both
//! checksum algorithms explicitly and record which one matched, because
//! the ledger ties them to the witness version: version 0 must use
//! Bech32, versions 1 through 16 must use Bech32m. A string that verifies
//! under the "other" algorithm is rejected, never silently accepted.
//!
//! After the checksum, the data part is a run of 5-bit words. The first
//! word is the witness version; the rest regroup into the 8-bit program,
//! with at most 4 bits of zero padding.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Bech32m};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::MAX_WITNESS_VERSION;

/// BIP-173 upper bound on the length of a bech32 string.
pub const MAX_BECH32_LENGTH: usize = 90;

/// The checksum algorithm that validated a bech32 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumVariant {
    /// BIP-173 constant `1`.
    Bech32,
    /// BIP-350 constant `0x2bc830a3`.
    Bech32m,
}

impl ChecksumVariant {
    /// The checksum the ledger requires for a given witness version.
    pub fn required_for(version: u8) -> Self {
        if version == 0 {
            Self::Bech32
        } else {
            Self::Bech32m
        }
    }
}

impl fmt::Display for ChecksumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bech32 => write!(f, "bech32"),
            Self::Bech32m => write!(f, "bech32m"),
        }
    }
}

/// A decoded witness address, prior to any network or length policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessData {
    /// Human-readable part, lowercased.
    pub hrp: String,
    /// Witness version, 0..=16.
    pub version: u8,
    /// The witness program bytes.
    pub program: Vec<u8>,
    /// The checksum algorithm the string verified under.
    pub checksum: ChecksumVariant,
}

/// Errors from witness-address decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    /// The string exceeds the 90-character limit.
    #[error("bech32 string is {0} characters (max {max})", max = MAX_BECH32_LENGTH)]
    TooLong(usize),

    /// Neither Bech32 nor Bech32m accepts the string.
    #[error("bech32 decode error: {0}")]
    Malformed(String),

    /// Valid checksum, but no data words at all.
    #[error("missing witness version")]
    EmptyData,

    /// The first data word is not a valid witness version.
    #[error("invalid witness version {0} (max {max})", max = MAX_WITNESS_VERSION)]
    InvalidVersion(u8),

    /// The string verified under the wrong algorithm for its version.
    #[error("witness version {version} requires a {required} checksum, found {found}")]
    ChecksumMismatch {
        /// Witness version carried by the string.
        version: u8,
        /// The algorithm the version requires.
        required: ChecksumVariant,
        /// The algorithm that actually verified.
        found: ChecksumVariant,
    },

    /// The program's 5-bit words leave more than 4 bits of padding, or
    /// padding with a bit set.
    #[error("invalid padding in witness program")]
    InvalidPadding,
}

/// Decodes a witness address string into version, program and checksum
/// variant, enforcing the version/checksum pairing.
pub fn decode_witness(s: &str) -> Result<WitnessData, Bech32Error> {
    if s.len() > MAX_BECH32_LENGTH {
        return Err(Bech32Error::TooLong(s.len()));
    }

    let (mut checked, checksum) = match CheckedHrpstring::new::<Bech32>(s) {
        Ok(checked) => (checked, ChecksumVariant::Bech32),
        Err(bech32_err) => match CheckedHrpstring::new::<Bech32m>(s) {
            Ok(checked) => (checked, ChecksumVariant::Bech32m),
            Err(_) => return Err(Bech32Error::Malformed(bech32_err.to_string())),
        },
    };

    let version = checked
        .remove_witness_version()
        .ok_or(Bech32Error::EmptyData)?
        .to_u8();
    if version > MAX_WITNESS_VERSION {
        return Err(Bech32Error::InvalidVersion(version));
    }

    let required = ChecksumVariant::required_for(version);
    if checksum != required {
        return Err(Bech32Error::ChecksumMismatch {
            version,
            required,
            found: checksum,
        });
    }

    checked
        .validate_segwit_padding()
        .map_err(|_| Bech32Error::InvalidPadding)?;

    Ok(WitnessData {
        hrp: checked.hrp().to_lowercase(),
        version,
        program: checked.byte_iter().collect(),
        checksum,
    })
}
