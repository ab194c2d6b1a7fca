//! Core value types for raw ledger transactions.
//!
//! Everything here is a plain value: built fresh per transaction, no
//! interior mutability, no shared state. Serialization follows the
//! legacy (non-witness) wire layout exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{DEFAULT_LOCKTIME, DEFAULT_SEQUENCE, TXID_LENGTH, TX_VERSION};
use crate::crypto::hash::double_sha256;
use crate::encoding::varint::{varint_len, write_varint};
use crate::script::Script;

// ---------------------------------------------------------------------------
// Txid
// ---------------------------------------------------------------------------

/// Errors from parsing a transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxidError {
    /// The string is not valid hex.
    #[error("txid is not valid hex: {0}")]
    InvalidHex(String),

    /// The string decodes to the wrong number of bytes.
    #[error("txid must be {len} bytes, got {0}", len = TXID_LENGTH)]
    InvalidLength(usize),
}

/// A 32-byte transaction identifier, stored in display order.
///
/// Block explorers and RPCs show txids byte-reversed relative to the wire.
/// [`Txid::from_hex`] takes the display form; [`Txid::to_wire_bytes`]
/// produces the order written into an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Txid([u8; TXID_LENGTH]);

impl Txid {
    /// Parses the 64-hex-character display form.
    pub fn from_hex(s: &str) -> Result<Self, TxidError> {
        let bytes = hex::decode(s).map_err(|e| TxidError::InvalidHex(e.to_string()))?;
        let display: [u8; TXID_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TxidError::InvalidLength(bytes.len()))?;
        Ok(Self(display))
    }

    /// Builds a txid from wire-order bytes (as hashed or serialized).
    pub fn from_wire_bytes(mut wire: [u8; TXID_LENGTH]) -> Self {
        wire.reverse();
        Self(wire)
    }

    /// Bytes in wire order (display order reversed).
    pub fn to_wire_bytes(&self) -> [u8; TXID_LENGTH] {
        let mut wire = self.0;
        wire.reverse();
        wire
    }
}

impl fmt::Display for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Txid {
    type Err = TxidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Txid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Txid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// TxInput / TxOutput
// ---------------------------------------------------------------------------

/// A reference to a previous output being spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    /// Transaction that created the output.
    pub prev_txid: Txid,
    /// Index of the output within that transaction.
    pub vout: u32,
    /// Unlocking script. Always empty for the unsigned transactions we build.
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxInput {
    /// An unsigned input: empty scriptSig, final sequence.
    pub fn unsigned(prev_txid: Txid, vout: u32) -> Self {
        Self {
            prev_txid,
            vout,
            script_sig: Script::empty(),
            sequence: DEFAULT_SEQUENCE,
        }
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.prev_txid.to_wire_bytes());
        buf.extend_from_slice(&self.vout.to_le_bytes());
        write_varint(buf, self.script_sig.len() as u64);
        buf.extend_from_slice(self.script_sig.as_bytes());
        buf.extend_from_slice(&self.sequence.to_le_bytes());
    }

    fn encoded_len(&self) -> usize {
        TXID_LENGTH + 4 + varint_len(self.script_sig.len() as u64) + self.script_sig.len() + 4
    }
}

/// A new output: an amount locked by a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in the smallest currency unit (satoshis).
    pub value: u64,
    pub script_pubkey: Script,
}

impl TxOutput {
    pub fn new(value: u64, script_pubkey: Script) -> Self {
        Self {
            value,
            script_pubkey,
        }
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value.to_le_bytes());
        write_varint(buf, self.script_pubkey.len() as u64);
        buf.extend_from_slice(self.script_pubkey.as_bytes());
    }

    fn encoded_len(&self) -> usize {
        8 + varint_len(self.script_pubkey.len() as u64) + self.script_pubkey.len()
    }
}

// ---------------------------------------------------------------------------
// RawTransaction
// ---------------------------------------------------------------------------

/// A transaction in legacy wire layout:
///
/// ```text
/// version:i32le | varint(#in) | inputs | varint(#out) | outputs | locktime:u32le
/// ```
///
/// No segwit marker, flag or witness section is ever written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl RawTransaction {
    /// An empty version-2 transaction with locktime 0.
    pub fn new() -> Self {
        Self {
            version: TX_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: DEFAULT_LOCKTIME,
        }
    }

    /// Canonical wire bytes. Deterministic: same fields, same bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size());

        buf.extend_from_slice(&self.version.to_le_bytes());

        write_varint(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            input.encode_into(&mut buf);
        }

        write_varint(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            output.encode_into(&mut buf);
        }

        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    /// Serialized size in bytes. Without witness data this is also the
    /// virtual size.
    pub fn size(&self) -> usize {
        4 + varint_len(self.inputs.len() as u64)
            + self.inputs.iter().map(TxInput::encoded_len).sum::<usize>()
            + varint_len(self.outputs.len() as u64)
            + self.outputs.iter().map(TxOutput::encoded_len).sum::<usize>()
            + 4
    }

    /// Hex of [`Self::serialize`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    /// `double_sha256(serialize())`, shown in display order.
    pub fn txid(&self) -> Txid {
        Txid::from_wire_bytes(double_sha256(&self.serialize()))
    }
}

impl Default for RawTransaction {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
