use bytes::{BufMut, Bytes, BytesMut};
use log::{debug, trace};

use super::types::{HevcDecoderConfig, NalUnitType, ParameterSetKind};
use crate::error::{HvccError, Result};

/// Byte width of the fixed record header preceding the array count.
const FIXED_HEADER_LEN: usize = 22;

/// Minimum record size: the fixed header plus the one-byte array count.
const MIN_RECORD_LEN: usize = FIXED_HEADER_LEN + 1;

/// Value of header byte 12: reserved bits plus `lengthSizeMinusOne`,
/// signalling the fixed NAL-length-size used upstream.
const LENGTH_SIZE_SENTINEL: u8 = 0xF0;

/// Array-completeness flag in an array header byte.
const ARRAY_COMPLETENESS: u8 = 0x80;

impl HevcDecoderConfig {
    /// Decodes an HEVC Decoder Configuration Record from a byte buffer.
    ///
    /// Walks the nested NAL unit arrays and extracts the VPS, SPS, and PPS
    /// payloads. The first occurrence of each parameter-set type wins; later
    /// duplicates and arrays of other NAL unit types are skipped silently.
    /// Every read is checked against the remaining buffer before it is
    /// consumed, so a truncated record fails at the offending field and no
    /// partial result is ever returned.
    ///
    /// # Arguments
    ///
    /// * `buf` - Byte slice containing the full configuration record
    ///
    /// # Returns
    ///
    /// * `Ok(HevcDecoderConfig)` - All three parameter sets were found
    /// * `Err(_)` - The record was truncated or a parameter set was missing
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < MIN_RECORD_LEN {
            return Err(HvccError::TooShort { len: buf.len() });
        }

        // configurationVersion, profile/tier/level and chroma/bit-depth fields
        // are not modeled here; only their total width matters.
        let mut pos = FIXED_HEADER_LEN;

        let num_of_arrays = buf[pos] as usize;
        pos += 1;

        let mut vps: Option<Bytes> = None;
        let mut sps: Option<Bytes> = None;
        let mut pps: Option<Bytes> = None;

        for _ in 0..num_of_arrays {
            if pos + 3 > buf.len() {
                return Err(HvccError::IncompleteArrayHeader { offset: pos });
            }

            // Top two bits are array completeness and a reserved bit; both are
            // discarded on decode.
            let nal_type = NalUnitType::from_u8(buf[pos] & 0x3F);
            pos += 1;

            let num_nalus = u16::from_be_bytes([buf[pos], buf[pos + 1]]) as usize;
            pos += 2;

            trace!("NAL unit array: type={:?}, nalus={}", nal_type, num_nalus);

            for _ in 0..num_nalus {
                if pos + 2 > buf.len() {
                    return Err(HvccError::IncompleteNaluLength { offset: pos });
                }

                let nalu_len = u16::from_be_bytes([buf[pos], buf[pos + 1]]) as usize;
                pos += 2;

                if pos + nalu_len > buf.len() {
                    return Err(HvccError::IncompleteNaluData {
                        declared: nalu_len,
                        remaining: buf.len() - pos,
                    });
                }

                let payload = &buf[pos..pos + nalu_len];
                pos += nalu_len;

                let slot = match nal_type {
                    NalUnitType::Vps => &mut vps,
                    NalUnitType::Sps => &mut sps,
                    NalUnitType::Pps => &mut pps,
                    NalUnitType::Unspecified(value) => {
                        debug!("skipping NAL unit of type {}", value);
                        continue;
                    }
                };

                // First occurrence of each parameter-set type wins.
                if slot.is_none() {
                    *slot = Some(Bytes::copy_from_slice(payload));
                } else {
                    debug!("ignoring duplicate {:?} of {} bytes", nal_type, nalu_len);
                }
            }
        }

        let vps = vps.filter(|p| !p.is_empty()).ok_or(HvccError::MissingParameterSet {
            kind: ParameterSetKind::Vps,
        })?;
        let sps = sps.filter(|p| !p.is_empty()).ok_or(HvccError::MissingParameterSet {
            kind: ParameterSetKind::Sps,
        })?;
        let pps = pps.filter(|p| !p.is_empty()).ok_or(HvccError::MissingParameterSet {
            kind: ParameterSetKind::Pps,
        })?;

        Ok(Self { vps, sps, pps })
    }

    /// Encodes the configuration into a canonical record buffer.
    ///
    /// Always succeeds, for any payloads. The output has a fixed shape:
    /// exactly three arrays in VPS, SPS, PPS order with one NALU each. This is
    /// deliberately narrower than what [`decode`](Self::decode) accepts; a
    /// record with multiple NALUs per array or extra array types does not
    /// survive a decode/encode cycle in that richer form, only its first
    /// VPS/SPS/PPS payloads do.
    ///
    /// An empty payload is still emitted as a zero-length NALU, which a
    /// subsequent decode rejects as a missing parameter set.
    pub fn encode(&self) -> Bytes {
        let payload_len = self.vps.len() + self.sps.len() + self.pps.len();
        let mut buf = BytesMut::with_capacity(MIN_RECORD_LEN + 3 * 5 + payload_len);

        let mut header = [0u8; MIN_RECORD_LEN];
        header[0] = 1; // configurationVersion

        // Profile space/tier/idc and the compatibility flags are lifted
        // straight out of the SPS payload when it is long enough to carry
        // them; otherwise those header bytes stay zero.
        if self.sps.len() >= 4 {
            let n = usize::min(4, self.sps.len() - 1);
            header[1..1 + n].copy_from_slice(&self.sps[1..1 + n]);
        }

        header[12] = LENGTH_SIZE_SENTINEL;
        header[22] = 3; // numOfArrays: always VPS + SPS + PPS

        buf.put_slice(&header);

        for (nal_type, payload) in [
            (NalUnitType::Vps, &self.vps),
            (NalUnitType::Sps, &self.sps),
            (NalUnitType::Pps, &self.pps),
        ] {
            buf.put_u8(ARRAY_COMPLETENESS | u8::from(nal_type));
            buf.put_u16(1); // one NALU per array
            buf.put_u16(payload.len() as u16);
            buf.put_slice(payload);
        }

        buf.freeze()
    }
}
