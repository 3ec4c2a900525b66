#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(not(feature = "parking-lot"))]
use crate::generator::mutex::PoisonError;
use crate::{
    error::Result,
    generator::{
        SnowflakeGenerator,
        mutex::{Mutex, MutexGuard},
        state::{Cursor, Step, step, validate},
    },
    id::SnowflakeId,
    time::{DEFAULT_EPOCH, SystemClock, TimeSource},
};

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The last issued timestamp and sequence live behind a single mutex which is
/// held for the whole
/// of [`next_id`], including the wait for the next millisecond when the
/// sequence is exhausted. Callers may briefly block each other while that
/// happens.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ One critical section per call, overflow wait included
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Fair access across threads is important
///
/// ## See Also
/// - [`AtomicSnowflakeGenerator`]
///
/// [`next_id`]: LockSnowflakeGenerator::next_id
/// [`AtomicSnowflakeGenerator`]: crate::AtomicSnowflakeGenerator
pub struct LockSnowflakeGenerator<T = SystemClock>
where
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<Cursor>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<Cursor>,
    node_id: i64,
    epoch: i64,
    time: T,
}

impl LockSnowflakeGenerator<SystemClock> {
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
    /// # Example
    ///
    /// ```
    /// use snowflake_id::{LockSnowflakeGenerator, SnowflakeId};
    ///
    /// let generator = LockSnowflakeGenerator::with_epoch(10, 1_577_836_800_000).unwrap();
    /// let id = SnowflakeId::from_raw(generator.next_id());
    /// assert_eq!(id.node_id(), 10);
    /// ```
    ///
    /// [`Error::InvalidNodeId`]: crate::Error::InvalidNodeId
    /// [`Error::InvalidEpoch`]: crate::Error::InvalidEpoch
    pub fn with_epoch(node_id: i64, epoch: i64) -> Result<Self> {
        Self::with_time_source(node_id, epoch, SystemClock)
    }
}

impl<T> LockSnowflakeGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator reading the time from `time`.
    ///
    /// The epoch is validated against `time`, so a mocked clock decides what
    /// "the future" means.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNodeId`] if `node_id` is outside `0..=1023`
    /// - [`Error::InvalidEpoch`] if `epoch` is negative or later than
    ///   `time.current_millis()`
    ///
    /// [`Error::InvalidNodeId`]: crate::Error::InvalidNodeId
    /// [`Error::InvalidEpoch`]: crate::Error::InvalidEpoch
    pub fn with_time_source(node_id: i64, epoch: i64, time: T) -> Result<Self> {
        Self::with_cursor(Cursor::START, node_id, epoch, time)
    }

    /// Creates a generator whose state is the ID `(timestamp, node_id,
    /// sequence)`, as if that ID had just been issued.
    ///
    /// `timestamp` is milliseconds since `epoch` and is not limited to the
    /// 41-bit field. Useful for resuming from a persisted high-water mark. In
    /// typical use cases prefer [`Self::with_time_source`].
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
        tracing::debug!(node_id, epoch, "created lock snowflake generator");
        Ok(Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(Mutex::new(cursor)),
            #[cfg(not(feature = "cache-padded"))]
            state: Mutex::new(cursor),
            node_id,
            epoch,
            time,
        })
    }

    /// Generates the next ID as a raw `i64`.
    ///
    /// Never fails. If 4096 IDs were already issued in the current
    /// millisecond, spins until the clock advances.
    pub fn next_id(&self) -> i64 {
        self.next_snowflake().to_raw()
    }

    /// Generates the next ID as a [`SnowflakeId`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_snowflake(&self) -> SnowflakeId {
        let mut state = self.lock();
        loop {
            let now = self.elapsed_millis();
            match step(*state, now) {
                Step::Ready(next) => {
                    *state = next;
                    break next.to_id(self.node_id);
                }
                Step::Exhausted => core::hint::spin_loop(),
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

    fn lock(&self) -> MutexGuard<'_, Cursor> {
        #[cfg(feature = "parking-lot")]
        {
            self.state.lock()
        }
        // The guarded value is a pair of plain integers that is only ever
        // replaced wholesale, so a poisoned lock still holds a consistent state.
        #[cfg(not(feature = "parking-lot"))]
        {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

impl<T> SnowflakeGenerator for LockSnowflakeGenerator<T>
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
