#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Result,
    base58::{
        Base58Error,
        alphabet::{ALPHABET, BASE, LOOKUP, NO_VALUE},
    },
};

/// Length of the longest encoding, that of `i64::MAX`.
pub const MAX_LEN: usize = 11;

/// Encodes a non-negative integer as a base-58 string, most significant
/// symbol first, without padding.
///
/// # Errors
///
/// Returns [`Base58Error::EncodeNegative`] if `n < 0`.
///
/// # Example
///
/// ```
/// use snowflake_id::encode;
///
/// assert_eq!(encode(0).unwrap(), "1");
/// assert_eq!(encode(57).unwrap(), "Z");
/// assert_eq!(encode(58).unwrap(), "21");
/// assert!(encode(-1).is_err());
/// ```
pub fn encode(n: i64) -> Result<String> {
    let mut buf = [0; MAX_LEN];
    Ok(encode_to_buf(n, &mut buf)?.to_owned())
}

/// Encodes `n` into `buf` without heap allocation and returns the encoded
/// slice, which is right-aligned in `buf`.
///
/// # Errors
///
/// Returns [`Base58Error::EncodeNegative`] if `n < 0`.
///
/// # Example
///
/// ```
/// use snowflake_id::{MAX_LEN, encode_to_buf};
///
/// let mut buf = [0u8; MAX_LEN];
/// assert_eq!(encode_to_buf(1_234_567_890, &mut buf).unwrap(), "2T6u2h");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(buf)))]
pub fn encode_to_buf(mut n: i64, buf: &mut [u8; MAX_LEN]) -> Result<&str> {
    if n < 0 {
        return Err(Base58Error::EncodeNegative { n }.into());
    }

    // Digits are produced least significant first, so fill from the back.
    let mut start = MAX_LEN;
    while n >= BASE {
        start -= 1;
        buf[start] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }
    start -= 1;
    buf[start] = ALPHABET[n as usize];

    let encoded = &buf[start..];
    // SAFETY: every byte written comes from `ALPHABET`, which is ASCII.
    Ok(unsafe { core::str::from_utf8_unchecked(encoded) })
}

/// Decodes a base-58 string produced by [`encode`].
///
/// # Errors
///
/// - [`Base58Error::DecodeEmpty`] if `s` is empty
/// - [`Base58Error::DecodeInvalidAscii`] if `s` contains a byte outside
///   [`ALPHABET`]
/// - [`Base58Error::DecodeOverflow`] if the value exceeds `i64::MAX`
///
/// # Example
///
/// ```
/// use snowflake_id::decode;
///
/// assert_eq!(decode("1").unwrap(), 0);
/// assert_eq!(decode("Z").unwrap(), 57);
/// assert!(decode("").is_err());
/// assert!(decode("$").is_err());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn decode(s: &str) -> Result<i64> {
    if s.is_empty() {
        return Err(Base58Error::DecodeEmpty.into());
    }

    let mut acc: i64 = 0;
    for (index, byte) in s.bytes().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Base58Error::DecodeInvalidAscii { byte, index }.into());
        }
        acc = acc
            .checked_mul(BASE)
            .and_then(|acc| acc.checked_add(i64::from(val)))
            .ok_or(Base58Error::DecodeOverflow)?;
    }

    Ok(acc)
}
