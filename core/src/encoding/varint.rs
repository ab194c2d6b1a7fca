//! Compact variable-length integers ("CompactSize").
//!
//! Counts and script lengths on the wire use this encoding:
//!
//! ```text
//! n < 0xfd                 -> [n]
//! n <= 0xffff              -> [0xfd, n as u16 LE]
//! n <= 0xffff_ffff         -> [0xfe, n as u32 LE]
//! otherwise                -> [0xff, n as u64 LE]
//! ```

/// Encodes `n` as a compact varint into a fresh buffer.
pub fn encode_varint(n: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(varint_len(n));
    write_varint(&mut buf, n);
    buf
}

/// Appends the compact varint encoding of `n` to `buf`.
pub fn write_varint(buf: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(0xfd);
        buf.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(0xfe);
        buf.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&n.to_le_bytes());
    }
}

/// Number of bytes [`encode_varint`] produces for `n`.
pub fn varint_len(n: u64) -> usize {
    if n < 0xfd {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffff_ffff {
        5
    } else {
        9
    }
}
