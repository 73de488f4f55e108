use tracing::debug;

use crate::error::ConfigError;

const PROBE: u32 = 0x1234_5678;

/// How the host lays out the bytes of a 32-bit word in memory.
///
/// The choice only selects which word reducer runs; both reducers produce the
/// same canonical fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The byte order of the compilation target.
    pub const fn target() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Determines the host byte order.
    ///
    /// With the `static-byte-order` feature the answer is fixed at build time
    /// and no probe runs.
    pub fn detect() -> Result<Self, ConfigError> {
        #[cfg(feature = "static-byte-order")]
        let order = Self::target();
        #[cfg(not(feature = "static-byte-order"))]
        let order = Self::classify(PROBE.to_ne_bytes())?;

        debug!(byte_order = ?order, "detected host byte order");
        Ok(order)
    }

    /// Matches the in-memory bytes of `0x12345678` against the two supported
    /// layouts.
    pub fn classify(native: [u8; 4]) -> Result<Self, ConfigError> {
        let little = [
            extract(PROBE, 0),
            extract(PROBE, 8),
            extract(PROBE, 16),
            extract(PROBE, 24),
        ];
        let big = [little[3], little[2], little[1], little[0]];

        if native == little {
            Ok(ByteOrder::Little)
        } else if native == big {
            Ok(ByteOrder::Big)
        } else {
            Err(ConfigError::UnsupportedByteOrder { native })
        }
    }
}

#[inline(always)]
const fn extract(x: u32, shift: u32) -> u8 {
    ((x >> shift) & 0xff) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_both_layouts() {
        assert_eq!(
            ByteOrder::classify([0x78, 0x56, 0x34, 0x12]),
            Ok(ByteOrder::Little)
        );
        assert_eq!(
            ByteOrder::classify([0x12, 0x34, 0x56, 0x78]),
            Ok(ByteOrder::Big)
        );
    }

    #[test]
    fn rejects_mixed_layouts() {
        let pdp = [0x34, 0x12, 0x78, 0x56];
        assert_eq!(
            ByteOrder::classify(pdp),
            Err(ConfigError::UnsupportedByteOrder { native: pdp })
        );
    }

    #[test]
    fn detect_agrees_with_target() {
        assert_eq!(ByteOrder::detect(), Ok(ByteOrder::target()));
    }
}
