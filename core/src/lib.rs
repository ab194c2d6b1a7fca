// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # rawtx: Unsigned Raw Transaction Builder
//!
//! Give it a spendable output, a destination address and a fee rate; get
//! back the exact bytes of an unsigned, legacy-layout transaction plus
//! the size and fee it was priced at.
//!
//! The interesting part is not the arithmetic. It is the three address
//! codecs (Base58Check, Bech32, Bech32m) that all have to land on the
//! right locking script, and a serializer that has to agree with the
//! ledger's consensus encoding byte for byte. Get one bit wrong and the
//! transaction is simply unparseable.
//!
//! ## Architecture
//!
//! Leaf first, the way data flows through a build:
//!
//! - **encoding** Varint, Base58Check and Bech32/Bech32m codecs.
//! - **address** Prefix dispatch and structural validation of addresses.
//! - **script** Address payload to locking script (P2PKH, P2SH, witness).
//! - **transaction** Fee model, wire serialization and the build pipeline.
//! - **crypto** SHA-256 and double-SHA-256.
//! - **config** Protocol constants and network parameters.
//!
//! ## Ground Rules
//!
//! 1. Pure functions. Same inputs, same bytes, every time.
//! 2. No floating point near an amount. `u64` sats, checked arithmetic.
//! 3. Signing, broadcasting and UTXO selection are somebody else's job.
//!
//! ```
//! use rawtx_core::transaction::{build_unsigned_transaction, BuildParams};
//!
//! let built = build_unsigned_transaction(&BuildParams::new(
//!     "c30b486d2c65299a1df82d851adac158a0ec5c40aad20d9d7905c1c3aed44f49",
//!     0,
//!     20_000,
//!     "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
//!     10,
//! ))
//! .unwrap();
//! assert_eq!(built.info.vbytes, 82);
//! ```

pub mod address;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod script;
pub mod transaction;

pub use address::{decode_address, AddressError, AddressFamily, DecodedAddress};
pub use config::Network;
pub use script::{resolve_script, Script, ScriptError};
pub use transaction::{
    build_unsigned_transaction, BuildError, BuildParams, BuiltTransaction, ErrorKind,
    RawTransaction, Txid,
};
