//! Unsigned transaction assembly.
//!
//! [`build_unsigned_transaction`] is the whole pipeline in one call:
//! parse the previous txid, decode the destination, resolve its locking
//! script, price the transaction and serialize it. Each stage either
//! succeeds or aborts the build; there is no partial result.
//!
//! [`TransactionBuilder`] is the lower-level fluent API for assembling a
//! [`RawTransaction`] with any number of inputs and outputs.

use serde::{Deserialize, Serialize};

use super::error::BuildError;
use super::fee::compute_fee;
use super::types::{RawTransaction, TxInput, TxOutput, Txid};
use crate::address::decode_address;
use crate::config::{Network, DEFAULT_LOCKTIME, TX_VERSION};
use crate::script::{resolve_script, Script};

// ---------------------------------------------------------------------------
// BuildParams
// ---------------------------------------------------------------------------

/// Everything one build needs. Constructed by the caller; nothing is read
/// from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParams {
    /// Previous txid in 64-hex display order.
    pub prev_txid: String,
    /// Output index being spent.
    pub vout: u32,
    /// Value of the spent output, in sats.
    pub input_sats: u64,
    /// Destination address.
    pub destination: String,
    /// Fee rate in sats per vbyte.
    pub fee_rate: u64,
    /// When set, the destination must belong to this network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_network: Option<Network>,
}

impl BuildParams {
    pub fn new(
        prev_txid: impl Into<String>,
        vout: u32,
        input_sats: u64,
        destination: impl Into<String>,
        fee_rate: u64,
    ) -> Self {
        Self {
            prev_txid: prev_txid.into(),
            vout,
            input_sats,
            destination: destination.into(),
            fee_rate,
            expected_network: None,
        }
    }

    /// Restricts the destination to `network`.
    pub fn network(mut self, network: Network) -> Self {
        self.expected_network = Some(network);
        self
    }
}

// ---------------------------------------------------------------------------
// BuiltTransaction
// ---------------------------------------------------------------------------

/// Metadata reported alongside the raw transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInfo {
    /// Resolved locking script, hex.
    pub script_pubkey_hex: String,
    pub vbytes: u64,
    pub fee: u64,
    pub output_sats: u64,
}

/// The result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltTransaction {
    /// Wire bytes, hex.
    pub raw_hex: String,
    /// Identifier of the unsigned transaction, display order.
    pub txid: Txid,
    pub info: TxInfo,
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`RawTransaction`].
///
/// ```
/// use rawtx_core::script::Script;
/// use rawtx_core::transaction::{TransactionBuilder, TxInput, Txid};
///
/// let prev = Txid::from_hex(&"11".repeat(32)).unwrap();
/// let tx = TransactionBuilder::new()
///     .input(TxInput::unsigned(prev, 0))
///     .output(5_000, Script::p2sh(&[0u8; 20]))
///     .build();
/// assert_eq!(tx.size(), 83);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    version: i32,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    lock_time: u32,
}

impl TransactionBuilder {
    /// Version 2, locktime 0, no inputs or outputs.
    pub fn new() -> Self {
        Self {
            version: TX_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: DEFAULT_LOCKTIME,
        }
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Appends an input. Order is preserved on the wire.
    pub fn input(mut self, input: TxInput) -> Self {
        self.inputs.push(input);
        self
    }

    /// Appends an output paying `value` sats to `script_pubkey`.
    pub fn output(mut self, value: u64, script_pubkey: Script) -> Self {
        self.outputs.push(TxOutput::new(value, script_pubkey));
        self
    }

    pub fn lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    pub fn build(self) -> RawTransaction {
        RawTransaction {
            version: self.version,
            inputs: self.inputs,
            outputs: self.outputs,
            lock_time: self.lock_time,
        }
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Serializes the 1-in/1-out unsigned transaction spending
/// `prev_txid:vout` into `script_pubkey` for `output_sats`.
///
/// Pure: the same arguments always give the same bytes.
pub fn assemble_transaction(
    prev_txid: &Txid,
    vout: u32,
    script_pubkey: &Script,
    output_sats: u64,
) -> Vec<u8> {
    TransactionBuilder::new()
        .input(TxInput::unsigned(*prev_txid, vout))
        .output(output_sats, script_pubkey.clone())
        .build()
        .serialize()
}

/// Builds an unsigned transaction from `params`.
///
/// # Errors
///
/// - [`BuildError::InvalidTxid`] if `prev_txid` is not 64 hex characters.
/// - [`BuildError::Address`] if the destination cannot be decoded, or
///   belongs to a network other than `expected_network`.
/// - [`BuildError::Fee`] if the fee consumes the whole input.
///
/// # Example
///
/// ```
/// use rawtx_core::transaction::{build_unsigned_transaction, BuildParams};
///
/// let params = BuildParams::new(
///     "c30b486d2c65299a1df82d851adac158a0ec5c40aad20d9d7905c1c3aed44f49",
///     0,
///     20_000,
///     "39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMJ",
///     20,
/// );
/// let built = build_unsigned_transaction(&params).unwrap();
/// assert_eq!(built.info.fee, 1_660);
/// assert!(built.raw_hex.starts_with("0200000001494fd4ae"));
/// ```
pub fn build_unsigned_transaction(params: &BuildParams) -> Result<BuiltTransaction, BuildError> {
    let prev_txid = Txid::from_hex(&params.prev_txid)?;

    let decoded = decode_address(&params.destination)?;
    if let Some(expected) = params.expected_network {
        decoded.require_network(&params.destination, expected)?;
    }

    let script_pubkey = resolve_script(&decoded);
    let quote = compute_fee(params.input_sats, script_pubkey.len(), params.fee_rate)?;

    let tx = TransactionBuilder::new()
        .input(TxInput::unsigned(prev_txid, params.vout))
        .output(quote.output_sats, script_pubkey.clone())
        .build();
    debug_assert_eq!(tx.size() as u64, quote.vbytes);

    let txid = tx.txid();
    tracing::debug!(
        %txid,
        family = %decoded.family(),
        vbytes = quote.vbytes,
        fee = quote.fee,
        "unsigned transaction assembled"
    );

    Ok(BuiltTransaction {
        raw_hex: tx.to_hex(),
        txid,
        info: TxInfo {
            script_pubkey_hex: script_pubkey.to_hex(),
            vbytes: quote.vbytes,
            fee: quote.fee,
            output_sats: quote.output_sats,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
