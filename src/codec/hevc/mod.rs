//! # HEVC Decoder Configuration Record
//!
//! This module decodes and rebuilds the HEVC Decoder Configuration Record, the
//! binary container that carries a stream's parameter sets (VPS, SPS, PPS)
//! inside streaming-protocol extradata. Supported operations:
//!
//! - Decoding a record buffer into its three parameter-set payloads
//! - Encoding three payloads back into a canonical record
//! - Strict bounds checking over the nested NAL unit arrays
//!
//! ## Example Usage
//!
//! ```rust
//! use hvccio::codec::hevc::HevcDecoderConfig;
//!
//! # fn main() -> hvccio::Result<()> {
//! let extradata: Vec<u8> = /* from a stream's codec private data */
//! #   HevcDecoderConfig::new(
//! #       vec![0x40, 0x01],
//! #       vec![0x42, 0x01, 0x01, 0x01],
//! #       vec![0x44, 0x01],
//! #   ).encode().to_vec();
//!
//! let config = HevcDecoderConfig::decode(&extradata)?;
//! println!("VPS is {} bytes", config.vps.len());
//! # Ok(())
//! # }
//! ```
//!
//! The payloads are opaque to this module: no H.265 bitstream parsing of the
//! parameter sets themselves takes place here.

/// Decoder and encoder for the configuration record
pub mod config;

/// Type definitions for the configuration record
pub mod types;

// Re-export commonly used types for convenience
pub use types::{HevcDecoderConfig, NalUnitType, ParameterSetKind};
