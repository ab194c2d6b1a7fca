//! # Hashing Utilities
//!
//! The ledger hashes two things this crate cares about: Base58Check
//! payloads (checksum = first four bytes of `double_sha256`) and whole
//! transactions (txid = `double_sha256` of the wire bytes). Both use
//! SHA-256 applied twice, so that is all this module provides.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use rawtx_core::crypto::sha256;
///
/// let hash = sha256(b"rawtx");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Used for Base58Check checksums and transaction identifiers.
///
/// # Example
///
/// ```
/// use rawtx_core::crypto::double_sha256;
///
/// let txid = double_sha256(b"raw transaction bytes");
/// assert_eq!(txid.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of `double_sha256(payload)`, the Base58Check checksum.
pub fn checksum4(payload: &[u8]) -> [u8; 4] {
    let hash = double_sha256(payload);
    [hash[0], hash[1], hash[2], hash[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of the empty string.
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_double_sha256_known_vector() {
        // SHA-256d("hello"), a vector every Bitcoin library carries.
        let hash = double_sha256(b"hello");
        assert_eq!(
            hex::encode(hash),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn double_sha256_differs_from_single() {
        let single = sha256(b"rawtx");
        let double = double_sha256(b"rawtx");
        assert_ne!(single, double);
        assert_eq!(double, sha256(&single));
    }

    #[test]
    fn test_checksum4_is_prefix_of_double_hash() {
        let payload = [0x05u8; 21];
        let full = double_sha256(&payload);
        assert_eq!(&checksum4(&payload)[..], &full[..4]);
    }
}
