use crate::id::SnowflakeId;

/// A minimal interface for generating Snowflake IDs.
///
/// Every implementation guarantees that, for one generator instance, no two
/// calls return the same ID and the timestamp field never decreases. Calls
/// never fail: when the 4096 sequence values of the current millisecond are
/// used up, the call waits for the clock to advance.
pub trait SnowflakeGenerator {
    /// Generates the next ID as its typed view.
    fn next_snowflake(&self) -> SnowflakeId;

    /// Generates the next ID as a raw, non-negative `i64`.
    fn next_id(&self) -> i64 {
        self.next_snowflake().to_raw()
    }

    /// The node ID stamped into every generated ID.
    fn node_id(&self) -> i64;

    /// The epoch (Unix milliseconds) timestamps are measured from.
    fn epoch(&self) -> i64;
}
