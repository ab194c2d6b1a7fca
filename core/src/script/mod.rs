//! # Locking Scripts
//!
//! Maps a [`DecodedAddress`] to the output script ("scriptPubKey") that
//! pays it. Three templates cover every address family we decode:
//!
//! ```text
//! P2PKH    OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG   76 a9 14 .. 88 ac
//! P2SH     OP_HASH160 <20> OP_EQUAL                            a9 14 .. 87
//! Witness  <OP_0 | OP_1..OP_16> <program>                      vv ll ..
//! ```
//!
//! [`resolve_script`] does no validation of its own: payload lengths were
//! enforced when the address was decoded. The public constructors take a
//! fixed-size hash or check the witness version and program length.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::address::{AddressFamily, DecodedAddress};
use crate::config::{
    HASH160_LENGTH, MAX_WITNESS_PROGRAM_LENGTH, MAX_WITNESS_VERSION, MIN_WITNESS_PROGRAM_LENGTH,
};

/// Script opcodes used by the output templates.
pub mod opcodes {
    pub const OP_0: u8 = 0x00;
    pub const OP_PUSHBYTES_20: u8 = 0x14;
    /// `OP_n` for n in 1..=16 is `OP_RESERVED + n`.
    pub const OP_RESERVED: u8 = 0x50;
    pub const OP_1: u8 = 0x51;
    pub const OP_16: u8 = 0x60;
    pub const OP_DUP: u8 = 0x76;
    pub const OP_EQUAL: u8 = 0x87;
    pub const OP_EQUALVERIFY: u8 = 0x88;
    pub const OP_HASH160: u8 = 0xa9;
    pub const OP_CHECKSIG: u8 = 0xac;
}

use opcodes::*;

/// Errors from building a witness output script by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("witness version {0} is above {max}", max = MAX_WITNESS_VERSION)]
    InvalidWitnessVersion(u8),

    #[error(
        "witness program length {0} outside [{min}, {max}]",
        min = MIN_WITNESS_PROGRAM_LENGTH,
        max = MAX_WITNESS_PROGRAM_LENGTH
    )]
    InvalidProgramLength(usize),
}

/// An immutable locking script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// The empty script. Unsigned inputs carry this as their scriptSig.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wraps raw script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`.
    pub fn p2pkh(hash160: &[u8; HASH160_LENGTH]) -> Self {
        Self::p2pkh_template(hash160)
    }

    /// `OP_HASH160 <hash> OP_EQUAL`.
    pub fn p2sh(hash160: &[u8; HASH160_LENGTH]) -> Self {
        Self::p2sh_template(hash160)
    }

    /// `<version opcode> <push program>`.
    ///
    /// Fails for versions above 16 or programs outside `[2, 40]` bytes.
    pub fn witness(version: u8, program: &[u8]) -> Result<Self, ScriptError> {
        let opcode =
            witness_version_opcode(version).ok_or(ScriptError::InvalidWitnessVersion(version))?;
        if !(MIN_WITNESS_PROGRAM_LENGTH..=MAX_WITNESS_PROGRAM_LENGTH).contains(&program.len()) {
            return Err(ScriptError::InvalidProgramLength(program.len()));
        }
        Ok(Self::witness_template(opcode, program))
    }

    // The templates below trust their caller for the payload length.
    // `DecodedAddress` payloads are length-checked at decode time.

    fn p2pkh_template(hash160: &[u8]) -> Self {
        let mut script = Vec::with_capacity(25);
        script.extend_from_slice(&[OP_DUP, OP_HASH160, OP_PUSHBYTES_20]);
        script.extend_from_slice(hash160);
        script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        Self(script)
    }

    fn p2sh_template(hash160: &[u8]) -> Self {
        let mut script = Vec::with_capacity(23);
        script.extend_from_slice(&[OP_HASH160, OP_PUSHBYTES_20]);
        script.extend_from_slice(hash160);
        script.push(OP_EQUAL);
        Self(script)
    }

    /// The program is at most 40 bytes, so its length byte doubles as a
    /// direct-push opcode.
    fn witness_template(opcode: u8, program: &[u8]) -> Self {
        let mut script = Vec::with_capacity(2 + program.len());
        script.push(opcode);
        script.push(program.len() as u8);
        script.extend_from_slice(program);
        Self(script)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// `OP_0` for version 0, `OP_1`..`OP_16` (0x51..0x60) for 1..=16, `None`
/// above that.
pub fn witness_version_opcode(version: u8) -> Option<u8> {
    match version {
        0 => Some(OP_0),
        1..=MAX_WITNESS_VERSION => Some(OP_RESERVED + version),
        _ => None,
    }
}

/// Produces the locking script for a decoded address.
pub fn resolve_script(address: &DecodedAddress) -> Script {
    let payload = address.payload();
    match address.family() {
        AddressFamily::P2pkh => Script::p2pkh_template(payload),
        AddressFamily::P2sh => Script::p2sh_template(payload),
        AddressFamily::WitnessV0 => Script::witness_template(OP_0, payload),
        AddressFamily::WitnessVn(version) => {
            // Decoding never yields a version above 16.
            let opcode = witness_version_opcode(version).unwrap_or(OP_RESERVED);
            Script::witness_template(opcode, payload)
        }
    }
}
