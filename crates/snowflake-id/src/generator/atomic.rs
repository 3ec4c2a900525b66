use portable_atomic::{AtomicI64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::Result,
    generator::{
        SnowflakeGenerator,
        state::{Cursor, Step, step, validate},
    },
    id::SnowflakeId,
    time::{DEFAULT_EPOCH, SystemClock, TimeSource},
};

/// A lock-free Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The last issued timestamp and sequence are packed into a single
/// [`AtomicI64`] and advanced with a compare-and-swap loop. Sequencing is identical to
/// [`LockSnowflakeGenerator`]; only the waiting differs: a thread that loses a
/// race or finds the sequence exhausted retries without blocking others.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ No lock, no blocking between callers
///
/// ## Recommended When
/// - Many threads generate IDs at a very high rate
/// - Your target supports 64-bit atomics (or `portable-atomic` fallbacks)
///
/// ## See Also
/// - [`LockSnowflakeGenerator`]
///
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
pub struct AtomicSnowflakeGenerator<T = SystemClock>
where
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicI64>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicI64,
    node_id: i64,
    epoch: i64,
    time: T,
}

impl AtomicSnowflakeGenerator<SystemClock> {
    /// Creates a generator for `node_id` using [`DEFAULT_EPOCH`] and the
    /// system clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeId`] if `node_id` is outside `0..=1023`.
    ///
    /// [`Error::InvalidNodeId`]: crate::Error::InvalidNodeId
    pub fn new(node_id: i64) -> Result<Self> {
        Self::with_epoch(node_id, DEFAULT_EPOCH)
    }

    /// Creates a generator for `node_id` whose timestamps count from `epoch`
    /// (Unix milliseconds), using the system clock.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNodeId`] if `node_id` is outside `0..=1023`
    /// - [`Error::InvalidEpoch`] if `epoch` is negative or in the future
    ///
    /// [`Error::InvalidNodeId`]: crate::Error::InvalidNodeId
    /// [`Error::InvalidEpoch`]: crate::Error::InvalidEpoch
    pub fn with_epoch(node_id: i64, epoch: i64) -> Result<Self> {
        Self::with_time_source(node_id, epoch, SystemClock)
    }
}

impl<T> AtomicSnowflakeGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator reading the time from `time`.
    ///
    /// # Errors
    ///
    /// See [`LockSnowflakeGenerator::with_time_source`].
    ///
    /// [`LockSnowflakeGenerator::with_time_source`]: crate::LockSnowflakeGenerator::with_time_source
    pub fn with_time_source(node_id: i64, epoch: i64, time: T) -> Result<Self> {
        Self::with_cursor(Cursor::START, node_id, epoch, time)
    }

    /// Creates a generator whose state is the ID `(timestamp, node_id,
    /// sequence)`, as if that ID had just been issued.
    ///
    /// `timestamp` is milliseconds since `epoch` and is not limited to the
    /// 41-bit field.
    ///
    /// # Errors
    ///
    /// Same as [`Self::with_time_source`].
    pub fn from_components(
        timestamp: i64,
        node_id: i64,
        sequence: i64,
        epoch: i64,
        time: T,
    ) -> Result<Self> {
        Self::with_cursor(Cursor::new(timestamp, sequence), node_id, epoch, time)
    }

    fn with_cursor(cursor: Cursor, node_id: i64, epoch: i64, time: T) -> Result<Self> {
        validate(node_id, epoch, &time)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(node_id, epoch, "created atomic snowflake generator");
        Ok(Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(AtomicI64::new(cursor.to_packed())),
            #[cfg(not(feature = "cache-padded"))]
            state: AtomicI64::new(cursor.to_packed()),
            node_id,
            epoch,
            time,
        })
    }

    /// Generates the next ID as a raw `i64`. Never fails.
    pub fn next_id(&self) -> i64 {
        self.next_snowflake().to_raw()
    }

    /// Generates the next ID as a [`SnowflakeId`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_snowflake(&self) -> SnowflakeId {
        loop {
            let current_raw = self.state.load(Ordering::Relaxed);
            let now = self.elapsed_millis();

            let next = match step(Cursor::from_packed(current_raw), now) {
                Step::Ready(next) => next,
                Step::Exhausted => {
                    core::hint::spin_loop();
                    continue;
                }
            };

            // A failed exchange means another thread won the race; retry
            // against its state.
            if self
                .state
                .compare_exchange(
                    current_raw,
                    next.to_packed(),
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                )
                .is_ok()
            {
                break next.to_id(self.node_id);
            }
        }
    }

    /// The node ID stamped into every generated ID.
    pub fn node_id(&self) -> i64 {
        self.node_id
    }

    /// The epoch (Unix milliseconds) timestamps are measured from.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    fn elapsed_millis(&self) -> i64 {
        self.time.current_millis().saturating_sub(self.epoch)
    }
}

impl<T> SnowflakeGenerator for AtomicSnowflakeGenerator<T>
where
    T: TimeSource,
{
    fn next_snowflake(&self) -> SnowflakeId {
        self.next_snowflake()
    }

    fn next_id(&self) -> i64 {
        self.next_id()
    }

    fn node_id(&self) -> i64 {
        self.node_id()
    }

    fn epoch(&self) -> i64 {
        self.epoch()
    }
}
