//! # Transaction Module
//!
//! Value types, fee model and assembly for unsigned raw transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs    Txid, TxInput, TxOutput, RawTransaction and wire serialization
//! fee.rs      Virtual size, fee and remaining output value
//! builder.rs  BuildParams, TransactionBuilder, build_unsigned_transaction
//! error.rs    BuildError and its flat ErrorKind
//! ```
//!
//! ## Pipeline
//!
//! 1. **Parse** the previous txid (display order) into a [`Txid`].
//! 2. **Decode** the destination address and resolve its locking script.
//! 3. **Price** the transaction with [`compute_fee`].
//! 4. **Assemble** the wire bytes and txid into a [`BuiltTransaction`].
//!
//! Every amount is a `u64` in sats. Arithmetic that can overflow is checked.

pub mod builder;
pub mod error;
pub mod fee;
pub mod types;

pub use builder::{
    assemble_transaction, build_unsigned_transaction, BuildParams, BuiltTransaction,
    TransactionBuilder, TxInfo,
};
pub use error::{BuildError, ErrorKind};
pub use fee::{compute_fee, single_io_vbytes, FeeError, FeeQuote};
pub use types::{RawTransaction, TxInput, TxOutput, Txid, TxidError};
