//! Top-level error for a transaction build.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::fee::FeeError;
use super::types::TxidError;
use crate::address::AddressError;

/// Anything that can abort [`build_unsigned_transaction`](super::build_unsigned_transaction).
///
/// Every variant is terminal; a failed build emits no transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Fee(#[from] FeeError),

    /// The previous-output identifier is not 64 hex characters.
    #[error("invalid previous txid: {reason}")]
    InvalidTxid { reason: String },
}

impl From<TxidError> for BuildError {
    fn from(err: TxidError) -> Self {
        Self::InvalidTxid {
            reason: err.to_string(),
        }
    }
}

/// Flat classification of [`BuildError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidAddress,
    UnsupportedAddressFormat,
    FeeExceedsInput,
    InvalidTxid,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress => write!(f, "InvalidAddress"),
            Self::UnsupportedAddressFormat => write!(f, "UnsupportedAddressFormat"),
            Self::FeeExceedsInput => write!(f, "FeeExceedsInput"),
            Self::InvalidTxid => write!(f, "InvalidTxid"),
        }
    }
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Address(AddressError::InvalidAddress { .. }) => ErrorKind::InvalidAddress,
            Self::Address(AddressError::UnsupportedAddressFormat { .. }) => {
                ErrorKind::UnsupportedAddressFormat
            }
            Self::Fee(FeeError::FeeExceedsInput { .. }) => ErrorKind::FeeExceedsInput,
            Self::InvalidTxid { .. } => ErrorKind::InvalidTxid,
        }
    }
}
