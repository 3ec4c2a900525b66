use core::fmt;

/// A 64-bit Snowflake ID.
///
/// - 1 bit reserved (always zero, keeps the value non-negative)
/// - 41 bits timestamp (ms since the generator's epoch)
/// - 10 bits node ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21          12 11             0
///              +--------------+----------------+--------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
///              +--------------+----------------+--------------+---------------+
///              |<----------- MSB ---------- 64 bits ---------- LSB ---------->|
/// ```
///
/// The layout is a compatibility contract: IDs produced by other
/// implementations with the same widths decode to the same fields.
///
/// # Example
///
/// ```
/// use snowflake_id::SnowflakeId;
///
/// let id = SnowflakeId::from_components(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.node_id(), 2);
/// assert_eq!(id.sequence(), 1);
/// assert_eq!(id.to_raw(), (1000 << 22) | (2 << 12) | 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SnowflakeId {
    id: i64,
}

impl SnowflakeId {
    /// Bitmask for the 41-bit timestamp field. Occupies bits 22 through 62.
    pub const TIMESTAMP_MASK: i64 = (1 << 41) - 1;

    /// Bitmask for the 10-bit node ID field. Occupies bits 12 through 21.
    pub const NODE_ID_MASK: i64 = (1 << 10) - 1;

    /// Bitmask for the 12-bit sequence field. Occupies bits 0 through 11.
    pub const SEQUENCE_MASK: i64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 = 22;

    /// Number of bits to shift the node ID to its position (bit 12).
    pub const NODE_ID_SHIFT: u32 = 12;

    /// Number of bits to shift the sequence (bit 0).
    pub const SEQUENCE_SHIFT: u32 = 0;

    /// Packs the three fields into an ID. Each component is masked to its
    /// field width, so out-of-range values never bleed into a neighbour.
    pub const fn from_components(timestamp: i64, node_id: i64, sequence: i64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let node_id = (node_id & Self::NODE_ID_MASK) << Self::NODE_ID_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | node_id | sequence,
        }
    }

    /// Wraps a raw integer without validation. See [`Self::is_valid`].
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }

    /// Returns the packed integer.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Extracts the timestamp (ms since epoch).
    pub const fn timestamp(&self) -> i64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the node ID.
    pub const fn node_id(&self) -> i64 {
        (self.id >> Self::NODE_ID_SHIFT) & Self::NODE_ID_MASK
    }

    /// Extracts the sequence number.
    pub const fn sequence(&self) -> i64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Creation time in Unix milliseconds, given the epoch the ID was minted
    /// against.
    pub const fn unix_millis(&self, epoch: i64) -> i64 {
        self.timestamp() + epoch
    }

    /// Largest value the 41-bit timestamp field can hold.
    pub const fn max_timestamp() -> i64 {
        Self::TIMESTAMP_MASK
    }

    /// Largest valid node ID (1023).
    pub const fn max_node_id() -> i64 {
        Self::NODE_ID_MASK
    }

    /// Largest sequence value within one millisecond (4095).
    pub const fn max_sequence() -> i64 {
        Self::SEQUENCE_MASK
    }

    /// Returns `true` if the reserved sign bit is clear.
    pub const fn is_valid(&self) -> bool {
        self.id >= 0
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

/// Rejects negative values, which no generator can produce.
impl TryFrom<i64> for SnowflakeId {
    type Error = InvalidSnowflake;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        let id = Self::from_raw(raw);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(InvalidSnowflake { raw })
        }
    }
}

/// A raw value with the reserved bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid snowflake id {raw}: reserved bit is set")]
pub struct InvalidSnowflake {
    /// The rejected value.
    pub raw: i64,
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("node_id", &self.node_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
