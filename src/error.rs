/// Platform configuration the fingerprint engine cannot run on.
///
/// These are only raised while building a [`Rabin64`](crate::Rabin64); once an
/// engine exists, no operation can fail.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported host byte order: 0x12345678 is stored as {native:02x?}")]
    UnsupportedByteOrder { native: [u8; 4] },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_the_only_failure() {
        let err = ConfigError::UnsupportedByteOrder {
            native: [0x34, 0x12, 0x78, 0x56],
        };
        let native = match err {
            ConfigError::UnsupportedByteOrder { native } => native,
        };
        assert_eq!(native, [0x34, 0x12, 0x78, 0x56]);
        assert_eq!(
            err.to_string(),
            "unsupported host byte order: 0x12345678 is stored as [34, 12, 78, 56]"
        );
    }
}
