#![doc(html_root_url = "https://docs.rs/hvccio/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # hvccio - HEVC Decoder Configuration Record codec
//!
//! `hvccio` decodes and rebuilds the HEVC (H.265) Decoder Configuration Record
//! carried as extradata by streaming protocols and container formats. The record
//! is a fixed 23-byte header followed by nested, length-prefixed NAL unit arrays;
//! this crate walks that structure with strict bounds checking to extract the
//! three parameter sets every HEVC stream needs:
//!
//! - VPS (Video Parameter Set)
//! - SPS (Sequence Parameter Set)
//! - PPS (Picture Parameter Set)
//!
//! The parameter-set payloads are treated as opaque bytes; interpreting their
//! contents is out of scope. Both operations are pure and stateless, so they can
//! be called concurrently without coordination.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hvccio = "0.1.0"
//! ```
//!
//! ### Decoding extradata
//!
//! ```rust
//! use hvccio::codec::hevc::HevcDecoderConfig;
//!
//! # fn main() -> hvccio::Result<()> {
//! let config = HevcDecoderConfig::new(
//!     vec![0x40, 0x01, 0x0c],
//!     vec![0x42, 0x01, 0x01, 0x01, 0x60],
//!     vec![0x44, 0x01, 0xc0],
//! );
//! let extradata = config.encode();
//!
//! let decoded = HevcDecoderConfig::decode(&extradata)?;
//! assert_eq!(decoded, config);
//! # Ok(())
//! # }
//! ```
//!
//! ### Handling malformed records
//!
//! ```rust
//! use hvccio::codec::hevc::HevcDecoderConfig;
//! use hvccio::HvccError;
//!
//! let err = HevcDecoderConfig::decode(&[0u8; 4]).unwrap_err();
//! assert_eq!(err, HvccError::TooShort { len: 4 });
//! ```
//!
//! ## Module Overview
//!
//! - `codec`: the HEVC configuration record decoder and encoder
//!   - Bounds-checked walk over the nested NAL unit arrays
//!   - Canonical record construction from VPS/SPS/PPS payloads
//!
//! - `error`: error handling types and utilities
//!   - One variant per failing read site in the record layout
//!   - Result type alias for convenience

/// Codec implementation for the HEVC configuration record
pub mod codec;

/// Error types and utilities
pub mod error;

pub use error::{HvccError, Result};
