/// Errors produced by the base-58 codec.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base58Error {
    /// Only non-negative integers have a base-58 form.
    #[error("cannot encode negative value {n}")]
    EncodeNegative {
        /// The rejected value.
        n: i64,
    },
    /// The input string was empty.
    #[error("cannot decode an empty string")]
    DecodeEmpty,
    /// The input contains a byte outside the alphabet.
    #[error("invalid base58 byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },
    /// The decoded value does not fit in an `i64`.
    #[error("decoded value exceeds i64::MAX")]
    DecodeOverflow,
}
