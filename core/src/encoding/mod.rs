//! # Wire & Address Encodings
//!
//! Three independent codecs feed the builder:
//!
//! ```text
//! varint.rs  CompactSize integers for counts and script lengths
//! base58.rs  Base58Check (legacy P2PKH / P2SH addresses)
//! bech32.rs  Bech32 / Bech32m witness addresses
//! ```

pub mod base58;
pub mod bech32;
pub mod varint;

pub use self::bech32::{decode_witness, ChecksumVariant, WitnessData};
pub use base58::{decode_check, encode_check};
pub use varint::{encode_varint, varint_len, write_varint};
