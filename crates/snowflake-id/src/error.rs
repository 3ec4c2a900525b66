/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `snowflake-id` can produce.
///
/// Generation itself never fails once a generator exists. Errors only surface
/// when constructing a generator with out-of-range arguments or when the
/// base-58 codec is handed input it cannot represent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The node ID does not fit the 10-bit node field.
    #[error("invalid node id {node_id}: must be in 0..={max}", max = crate::SnowflakeId::max_node_id())]
    InvalidNodeId {
        /// The rejected node ID.
        node_id: i64,
    },

    /// The epoch is negative or lies in the future.
    #[error("invalid epoch {epoch}: must be in 0..={now}")]
    InvalidEpoch {
        /// The rejected epoch, in Unix milliseconds.
        epoch: i64,
        /// The wall-clock time observed while validating.
        now: i64,
    },

    /// Base-58 encoding or decoding failed.
    #[cfg_attr(docsrs, doc(cfg(feature = "base58")))]
    #[cfg(feature = "base58")]
    #[error(transparent)]
    Base58(#[from] crate::Base58Error),
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor argument was out of bounds.
    InvalidArgument,
    /// Codec input could not be encoded or decoded.
    InvalidInput,
}

impl Error {
    /// Returns the kind of this error so callers can branch without matching
    /// every variant.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNodeId { .. } | Self::InvalidEpoch { .. } => ErrorKind::InvalidArgument,
            #[cfg(feature = "base58")]
            Self::Base58(_) => ErrorKind::InvalidInput,
        }
    }
}
