use core::cmp::Ordering;

use crate::{
    error::{Error, Result},
    id::SnowflakeId,
    time::TimeSource,
};

/// The last issued `(timestamp, sequence)` pair.
///
/// `timestamp` is the elapsed milliseconds since the epoch *before* masking
/// to the 41-bit field, so ordering keeps working past the field's horizon.
/// The node ID is constant per generator and is only added when composing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) timestamp: i64,
    pub(crate) sequence: i64,
}

impl Cursor {
    /// Largest timestamp that still packs into an `i64` next to the sequence.
    pub(crate) const MAX_TIMESTAMP: i64 = i64::MAX >> Self::SEQUENCE_BITS;

    /// State before the first ID. Sits below every reachable elapsed value
    /// with an exhausted sequence, so the first call always starts a fresh
    /// millisecond at sequence 0.
    pub(crate) const START: Self = Self {
        timestamp: -1,
        sequence: SnowflakeId::max_sequence(),
    };

    const SEQUENCE_BITS: u32 = SnowflakeId::SEQUENCE_MASK.count_ones();

    pub(crate) const fn new(timestamp: i64, sequence: i64) -> Self {
        let timestamp = if timestamp > Self::MAX_TIMESTAMP {
            Self::MAX_TIMESTAMP
        } else {
            timestamp
        };
        Self {
            timestamp,
            sequence: sequence & SnowflakeId::SEQUENCE_MASK,
        }
    }

    /// Packs the pair into one word for atomic storage.
    #[cfg_attr(not(feature = "atomic"), allow(dead_code))]
    pub(crate) const fn to_packed(self) -> i64 {
        (self.timestamp << Self::SEQUENCE_BITS) | self.sequence
    }

    #[cfg_attr(not(feature = "atomic"), allow(dead_code))]
    pub(crate) const fn from_packed(raw: i64) -> Self {
        Self {
            timestamp: raw >> Self::SEQUENCE_BITS,
            sequence: raw & SnowflakeId::SEQUENCE_MASK,
        }
    }

    /// Composes the ID this cursor stands for on `node_id`.
    pub(crate) const fn to_id(self, node_id: i64) -> SnowflakeId {
        SnowflakeId::from_components(self.timestamp, node_id, self.sequence)
    }

    const fn has_sequence_room(self) -> bool {
        self.sequence < SnowflakeId::max_sequence()
    }

    const fn increment_sequence(self) -> Self {
        Self {
            timestamp: self.timestamp,
            sequence: self.sequence + 1,
        }
    }

    const fn rollover_to_timestamp(timestamp: i64) -> Self {
        Self {
            timestamp,
            sequence: 0,
        }
    }
}

/// Outcome of advancing the cursor to a clock reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// The cursor to issue and store as the new state.
    Ready(Cursor),
    /// All sequence values of the current timestamp are taken; re-read the
    /// clock and try again.
    Exhausted,
}

/// Checks constructor arguments against the field layout and the clock.
pub(crate) fn validate<T: TimeSource>(node_id: i64, epoch: i64, time: &T) -> Result<()> {
    if !(0..=SnowflakeId::max_node_id()).contains(&node_id) {
        return Err(Error::InvalidNodeId { node_id });
    }
    let now = time.current_millis();
    if epoch < 0 || epoch > now {
        return Err(Error::InvalidEpoch { epoch, now });
    }
    Ok(())
}

/// Computes the cursor following `current` when the clock reads `now`
/// (already relative to the epoch).
///
/// A clock that is behind the last issued timestamp keeps issuing on that
/// timestamp, so the timestamp never moves backward.
#[inline]
pub(crate) fn step(current: Cursor, now: i64) -> Step {
    let now = now.min(Cursor::MAX_TIMESTAMP);
    match now.cmp(&current.timestamp) {
        Ordering::Greater => Step::Ready(Cursor::rollover_to_timestamp(now)),
        Ordering::Equal => next_in_tick(current),
        Ordering::Less => cold_clock_behind(current, now),
    }
}

#[inline]
fn next_in_tick(current: Cursor) -> Step {
    if current.has_sequence_room() {
        Step::Ready(current.increment_sequence())
    } else {
        Step::Exhausted
    }
}

#[cold]
#[inline(never)]
fn cold_clock_behind(current: Cursor, now: i64) -> Step {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        last_timestamp = current.timestamp,
        now,
        "clock moved backward; holding last timestamp"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = now;
    next_in_tick(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime(i64);

    impl TimeSource for FixedTime {
        fn current_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn validate_accepts_full_node_range() {
        let time = FixedTime(1_000);
        for node_id in 0..=1023 {
            assert_eq!(validate(node_id, 0, &time), Ok(()));
            assert_eq!(validate(node_id, 1_000, &time), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_out_of_range_node() {
        let time = FixedTime(1_000);
        assert_eq!(
            validate(-1, 0, &time),
            Err(Error::InvalidNodeId { node_id: -1 })
        );
        assert_eq!(
            validate(1024, 0, &time),
            Err(Error::InvalidNodeId { node_id: 1024 })
        );
    }

    #[test]
    fn validate_rejects_negative_or_future_epoch() {
        let time = FixedTime(1_000);
        assert_eq!(
            validate(0, -1, &time),
            Err(Error::InvalidEpoch {
                epoch: -1,
                now: 1_000
            })
        );
        assert_eq!(
            validate(0, 1_001, &time),
            Err(Error::InvalidEpoch {
                epoch: 1_001,
                now: 1_000
            })
        );
    }

    #[test]
    fn step_rolls_over_on_newer_tick() {
        assert_eq!(step(Cursor::new(10, 17), 11), Step::Ready(Cursor::new(11, 0)));
    }

    #[test]
    fn step_increments_within_tick() {
        assert_eq!(step(Cursor::new(10, 17), 10), Step::Ready(Cursor::new(10, 18)));
    }

    #[test]
    fn step_exhausts_at_max_sequence() {
        let current = Cursor::new(10, SnowflakeId::max_sequence());
        assert_eq!(step(current, 10), Step::Exhausted);
    }

    #[test]
    fn step_holds_timestamp_when_clock_is_behind() {
        assert_eq!(step(Cursor::new(10, 5), 4), Step::Ready(Cursor::new(10, 6)));

        let full = Cursor::new(10, SnowflakeId::max_sequence());
        assert_eq!(step(full, 4), Step::Exhausted);
    }

    #[test]
    fn start_rolls_over_at_elapsed_zero() {
        assert_eq!(step(Cursor::START, 0), Step::Ready(Cursor::new(0, 0)));
        assert_eq!(step(Cursor::START, -1), Step::Exhausted);
        assert_eq!(step(Cursor::START, -50), Step::Exhausted);
    }

    #[test]
    fn cursor_orders_past_the_timestamp_field() {
        let max = SnowflakeId::max_timestamp();
        let past = Cursor::new(max + 6, 0);
        assert_eq!(step(past, max + 6), Step::Ready(Cursor::new(max + 6, 1)));
        assert_eq!(step(past, max + 7), Step::Ready(Cursor::new(max + 7, 0)));

        assert_eq!(past.to_id(3).timestamp(), 5);
        assert_eq!(past.to_id(3).node_id(), 3);
        assert_ne!(past.to_id(3), Cursor::new(max + 6, 1).to_id(3));
    }

    #[test]
    fn cursor_packs_into_one_word() {
        for cursor in [
            Cursor::START,
            Cursor::new(0, 0),
            Cursor::new(42, 4095),
            Cursor::new(SnowflakeId::max_timestamp() + 1, 7),
            Cursor::new(Cursor::MAX_TIMESTAMP, 1),
        ] {
            assert_eq!(Cursor::from_packed(cursor.to_packed()), cursor);
        }
    }

    #[test]
    fn step_clamps_far_future_readings() {
        assert_eq!(
            step(Cursor::new(0, 0), i64::MAX),
            Step::Ready(Cursor::new(Cursor::MAX_TIMESTAMP, 0))
        );
    }
}
