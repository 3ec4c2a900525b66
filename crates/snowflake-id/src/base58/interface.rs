use core::str::FromStr;

use crate::{Base58Error, Error, MAX_LEN, Result, SnowflakeId, decode, encode_to_buf};

/// Extension trait for base-58 encoding and decoding of [`SnowflakeId`]s.
///
/// # Example
///
/// ```
/// use snowflake_id::{Base58Ext, SnowflakeId};
///
/// let id = SnowflakeId::from_components(123_456_789, 10, 7);
/// let encoded = id.encode().unwrap();
/// assert_eq!(encoded, "53w8xeJft");
/// assert_eq!(SnowflakeId::decode(&encoded).unwrap(), id);
/// ```
pub trait Base58Ext: Sized {
    /// Encodes this ID into a [`String`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode_to_buf`].
    fn encode(&self) -> Result<String> {
        let mut buf = [0; MAX_LEN];
        self.encode_to_buf(&mut buf).map(str::to_owned)
    }

    /// Encodes this ID into `buf` without heap allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Base58Error::EncodeNegative`] if the reserved sign bit is
    /// set, which only happens for IDs built with [`SnowflakeId::from_raw`].
    fn encode_to_buf<'a>(&self, buf: &'a mut [u8; MAX_LEN]) -> Result<&'a str>;

    /// Decodes a base-58 string back into an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, contains a byte outside the
    /// alphabet, or encodes a value beyond `i64::MAX`.
    fn decode(s: &str) -> Result<Self>;
}

impl Base58Ext for SnowflakeId {
    fn encode_to_buf<'a>(&self, buf: &'a mut [u8; MAX_LEN]) -> Result<&'a str> {
        encode_to_buf(self.to_raw(), buf)
    }

    fn decode(s: &str) -> Result<Self> {
        decode(s).map(Self::from_raw)
    }
}

impl FromStr for SnowflakeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as Base58Ext>::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn snowflake_roundtrip() {
        let id = SnowflakeId::from_components(SnowflakeId::max_timestamp(), 1023, 4095);
        let encoded = id.encode().unwrap();
        assert_eq!(encoded.len(), MAX_LEN);
        assert_eq!(SnowflakeId::decode(&encoded).unwrap(), id);
    }

    #[test]
    fn parses_with_from_str() {
        let id: SnowflakeId = "53w8xeJft".parse().unwrap();
        assert_eq!(id.timestamp(), 123_456_789);
        assert_eq!(id.node_id(), 10);
        assert_eq!(id.sequence(), 7);

        assert!("".parse::<SnowflakeId>().is_err());
        assert!("0".parse::<SnowflakeId>().is_err());
    }

    #[test]
    fn reserved_bit_is_rejected_when_encoding() {
        for raw in [-1, i64::MIN, i64::MIN | 58] {
            let id = SnowflakeId::from_raw(raw);
            assert!(!id.is_valid());
            assert_eq!(
                id.encode(),
                Err(Error::Base58(Base58Error::EncodeNegative { n: raw }))
            );

            let mut buf = [0; MAX_LEN];
            assert_eq!(id.encode_to_buf(&mut buf).unwrap_err().kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn zero_id_encodes_to_first_symbol() {
        assert_eq!(SnowflakeId::default().encode().unwrap(), "1");
    }
}
