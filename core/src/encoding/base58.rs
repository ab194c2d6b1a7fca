//! Base58Check: base58 text over `payload || checksum4(payload)`.
//!
//! The alphabet conversion is delegated to `bs58`; the checksum is the
//! first four bytes of double-SHA-256 over the payload.

use thiserror::Error;

use crate::config::BASE58_CHECKSUM_LENGTH;
use crate::crypto::hash::checksum4;

/// Errors from Base58Check decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// The string contains characters outside the base58 alphabet.
    #[error("invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded bytes are too short to hold a version byte and checksum.
    #[error("decoded length {0} is too short for a version byte and checksum")]
    TooShort(usize),

    /// The trailing four bytes do not match the payload's checksum.
    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Hex of the checksum computed from the payload.
        expected: String,
        /// Hex of the checksum carried by the string.
        found: String,
    },
}

/// Decodes a Base58Check string and returns the checked payload
/// (version byte included, checksum stripped).
pub fn decode_check(s: &str) -> Result<Vec<u8>, Base58Error> {
    let mut decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| Base58Error::InvalidEncoding(e.to_string()))?;

    if decoded.len() <= BASE58_CHECKSUM_LENGTH {
        return Err(Base58Error::TooShort(decoded.len()));
    }

    let payload_len = decoded.len() - BASE58_CHECKSUM_LENGTH;
    let expected = checksum4(&decoded[..payload_len]);
    let found = &decoded[payload_len..];
    if expected.as_slice() != found {
        return Err(Base58Error::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }

    decoded.truncate(payload_len);
    Ok(decoded)
}

/// Encodes `payload` as Base58Check.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + BASE58_CHECKSUM_LENGTH);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum4(payload));
    bs58::encode(data).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mainnet P2SH address; payload 05 || 5249bdf2c131d43995cff42e8feee293f79297a8.
    const P2SH_ADDR: &str = "39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMJ";

    #[test]
    fn decodes_known_address() {
        let payload = decode_check(P2SH_ADDR).unwrap();
        assert_eq!(
            hex::encode(payload),
            "055249bdf2c131d43995cff42e8feee293f79297a8"
        );
    }

    #[test]
    fn encode_matches_known_address() {
        let payload = hex::decode("055249bdf2c131d43995cff42e8feee293f79297a8").unwrap();
        assert_eq!(encode_check(&payload), P2SH_ADDR);
    }

    #[test]
    fn encode_then_decode_preserves_leading_zeros() {
        let payload = [0x00, 0x00, 0x01, 0x02, 0x03];
        let decoded = decode_check(&encode_check(&payload)).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn rejects_corrupted_checksum() {
        // Last character changed from 'J' to 'K'.
        let corrupted = "39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMK";
        assert!(matches!(
            decode_check(corrupted),
            Err(Base58Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn rejects_non_alphabet_characters() {
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet.
        assert!(matches!(
            decode_check("30OIl"),
            Err(Base58Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn rejects_too_short_input() {
        assert!(matches!(decode_check("1111"), Err(Base58Error::TooShort(4))));
        assert!(matches!(decode_check(""), Err(Base58Error::TooShort(0))));
    }
}
