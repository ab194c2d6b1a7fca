//! Fee model for the single-input, single-output transactions we build.
//!
//! Without witness data a virtual byte is a plain byte, so the size is
//! exact rather than estimated:
//!
//! ```text
//! version 4 | #in 1 | prev txid 32 | vout 4 | scriptSig len 1 | sequence 4
//! #out 1 | value 8 | script len 1 | locktime 4                    = 60
//! ```
//!
//! plus the locking script itself, and two more bytes of script-length
//! varint once the script reaches 253 bytes. The overhead is only valid for
//! this topology; [`RawTransaction::size`](super::RawTransaction::size) is the
//! general measure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SINGLE_IO_TX_OVERHEAD;
use crate::encoding::varint::varint_len;

/// Errors from fee computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// The fee would consume the whole input, leaving nothing to send.
    #[error("fee of {fee} sats consumes the entire input of {input} sats")]
    FeeExceedsInput {
        /// Computed fee (saturated at `u64::MAX` on overflow).
        fee: u64,
        /// Value of the spent output.
        input: u64,
    },
}

/// Size, fee and remaining output value for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub vbytes: u64,
    pub fee: u64,
    /// `input - fee`; always greater than zero.
    pub output_sats: u64,
}

/// Virtual size of a 1-in/1-out transaction with a `script_len`-byte
/// locking script.
pub fn single_io_vbytes(script_len: usize) -> u64 {
    let script_len = script_len as u64;
    // The overhead already counts a one-byte script-length varint.
    let extra_varint = varint_len(script_len) as u64 - 1;
    SINGLE_IO_TX_OVERHEAD
        .saturating_add(extra_varint)
        .saturating_add(script_len)
}

/// Computes the fee for `fee_rate` sats/vbyte and the value left for the
/// output.
///
/// Multiplication overflow saturates, which always lands in
/// [`FeeError::FeeExceedsInput`].
pub fn compute_fee(input_sats: u64, script_len: usize, fee_rate: u64) -> Result<FeeQuote, FeeError> {
    let vbytes = single_io_vbytes(script_len);
    let fee = fee_rate.checked_mul(vbytes).unwrap_or(u64::MAX);

    if fee >= input_sats {
        tracing::debug!(fee, input_sats, "fee exceeds input");
        return Err(FeeError::FeeExceedsInput {
            fee,
            input: input_sats,
        });
    }

    let quote = FeeQuote {
        vbytes,
        fee,
        output_sats: input_sats - fee,
    };
    tracing::debug!(
        vbytes = quote.vbytes,
        fee = quote.fee,
        output_sats = quote.output_sats,
        "fee computed"
    );
    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;
    use crate::transaction::{RawTransaction, TxInput, TxOutput, Txid};

    #[test]
    fn p2sh_scenario() {
        let quote = compute_fee(20_000, 23, 20).unwrap();
        assert_eq!(
            quote,
            FeeQuote {
                vbytes: 83,
                fee: 1_660,
                output_sats: 18_340,
            }
        );
    }

    #[test]
    fn vbytes_per_template() {
        assert_eq!(single_io_vbytes(25), 85); // P2PKH
        assert_eq!(single_io_vbytes(22), 82); // P2WPKH
        assert_eq!(single_io_vbytes(34), 94); // P2TR
    }

    #[test]
    fn vbytes_track_script_length_varint() {
        assert_eq!(single_io_vbytes(0xfc), 312);
        assert_eq!(single_io_vbytes(0xfd), 315);
        assert_eq!(single_io_vbytes(0x1_0000), 65_600);

        for len in [0usize, 42, 0xfc, 0xfd, 520, 0xffff, 0x1_0000] {
            let mut tx = RawTransaction::new();
            tx.inputs.push(TxInput::unsigned(Txid::from_wire_bytes([0; 32]), 0));
            tx.outputs
                .push(TxOutput::new(1, Script::from_bytes(vec![0x6a; len])));
            assert_eq!(single_io_vbytes(len), tx.size() as u64, "script length {len}");
        }
    }

    #[test]
    fn zero_rate_is_free() {
        let quote = compute_fee(1, 23, 0).unwrap();
        assert_eq!(quote.fee, 0);
        assert_eq!(quote.output_sats, 1);
    }

    #[test]
    fn fee_equal_to_input_is_rejected() {
        // 83 vbytes * 20 = 1660
        assert_eq!(
            compute_fee(1_660, 23, 20),
            Err(FeeError::FeeExceedsInput {
                fee: 1_660,
                input: 1_660,
            })
        );
        assert_eq!(compute_fee(1_661, 23, 20).unwrap().output_sats, 1);
    }

    #[test]
    fn large_rate_fails() {
        assert!(matches!(
            compute_fee(20_000, 23, 1_000),
            Err(FeeError::FeeExceedsInput { fee: 83_000, .. })
        ));
    }

    #[test]
    fn overflow_saturates() {
        let err = compute_fee(u64::MAX, 23, u64::MAX).unwrap_err();
        assert_eq!(
            err,
            FeeError::FeeExceedsInput {
                fee: u64::MAX,
                input: u64::MAX,
            }
        );
    }

    #[test]
    fn zero_input_always_fails() {
        assert!(compute_fee(0, 23, 0).is_err());
    }
}
