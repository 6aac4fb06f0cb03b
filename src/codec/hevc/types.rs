use std::fmt;

use bytes::Bytes;

/// NAL unit type carried in the low 6 bits of a configuration-record array
/// header, as defined in ISO/IEC 23008-2 Table 7-1.
///
/// Only the three parameter-set types matter to this codec; everything else is
/// preserved as [`NalUnitType::Unspecified`] and skipped during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// Video Parameter Set (type 32)
    Vps,
    /// Sequence Parameter Set (type 33)
    Sps,
    /// Picture Parameter Set (type 34)
    Pps,
    /// Any other NAL unit type; ignored by the decoder
    Unspecified(u8),
}

impl NalUnitType {
    /// Maps a raw 6-bit type code onto a `NalUnitType`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            32 => NalUnitType::Vps,
            33 => NalUnitType::Sps,
            34 => NalUnitType::Pps,
            _ => NalUnitType::Unspecified(value),
        }
    }
}

impl From<NalUnitType> for u8 {
    fn from(value: NalUnitType) -> Self {
        match value {
            NalUnitType::Vps => 32,
            NalUnitType::Sps => 33,
            NalUnitType::Pps => 34,
            NalUnitType::Unspecified(value) => value,
        }
    }
}

/// Identifies one of the three required parameter sets, used by error
/// reporting when a record is missing one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSetKind {
    /// Video Parameter Set
    Vps,
    /// Sequence Parameter Set
    Sps,
    /// Picture Parameter Set
    Pps,
}

impl fmt::Display for ParameterSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterSetKind::Vps => write!(f, "VPS"),
            ParameterSetKind::Sps => write!(f, "SPS"),
            ParameterSetKind::Pps => write!(f, "PPS"),
        }
    }
}

/// The parameter sets extracted from an HEVC Decoder Configuration Record.
///
/// A plain value type: three opaque payloads and nothing else. A successful
/// [`decode`](HevcDecoderConfig::decode) guarantees all three are non-empty;
/// [`encode`](HevcDecoderConfig::encode) accepts any payloads, including ones
/// that were never produced by this decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HevcDecoderConfig {
    /// Video Parameter Set payload
    pub vps: Bytes,
    /// Sequence Parameter Set payload
    pub sps: Bytes,
    /// Picture Parameter Set payload
    pub pps: Bytes,
}

impl HevcDecoderConfig {
    /// Creates a configuration from three parameter-set payloads.
    pub fn new(vps: impl Into<Bytes>, sps: impl Into<Bytes>, pps: impl Into<Bytes>) -> Self {
        Self {
            vps: vps.into(),
            sps: sps.into(),
            pps: pps.into(),
        }
    }
}
