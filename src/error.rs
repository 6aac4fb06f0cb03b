use thiserror::Error;

use crate::codec::hevc::ParameterSetKind;

/// Errors produced while decoding an HEVC Decoder Configuration Record.
///
/// Encoding is total and never fails; every variant here corresponds to one
/// read site in the decoder. Each variant carries enough context to identify
/// which field of the record was truncated or missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HvccError {
    /// The buffer is shorter than the fixed 23-byte record header.
    #[error("invalid configuration size: {len} bytes, need at least 23")]
    TooShort {
        /// Length of the supplied buffer.
        len: usize,
    },

    /// Fewer than 3 bytes remain where an array header and NALU count were
    /// expected.
    #[error("incomplete NAL unit array header at offset {offset}")]
    IncompleteArrayHeader {
        /// Byte offset at which the array header was expected.
        offset: usize,
    },

    /// Fewer than 2 bytes remain where a NALU length prefix was expected.
    #[error("incomplete NALU length prefix at offset {offset}")]
    IncompleteNaluLength {
        /// Byte offset at which the length prefix was expected.
        offset: usize,
    },

    /// The declared NALU length exceeds the remaining buffer.
    #[error("incomplete NALU data: declared {declared} bytes, {remaining} remain")]
    IncompleteNaluData {
        /// Payload length declared by the NALU length prefix.
        declared: usize,
        /// Bytes actually remaining in the buffer.
        remaining: usize,
    },

    /// The record walk completed without populating one of the required
    /// parameter sets.
    #[error("missing required parameter set: {kind}")]
    MissingParameterSet {
        /// Which parameter set never appeared in the record.
        kind: ParameterSetKind,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HvccError>;
