// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Derive sysctl codecs for values expressed through another value.
// Author: Lukas Bower

//! Values that reuse the codec of an underlying value.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::codec::{FixedSizeValue, SysctlValue};
use crate::types::{CodecError, LoadAvg, TimeVal};

const MICROS_PER_SECOND: i128 = 1_000_000;

/// Fixed-point scale the BSD kernels use for load averages.
const FSCALE: i64 = 1 << 11;

/// A value represented on the registry by another [`SysctlValue`].
///
/// Implementing this trait is enough to read and write the type; the codec of
/// [`MappedValue::Inner`] is reused in both directions.
pub trait MappedValue: Sized {
    /// The value the registry actually transfers.
    type Inner: SysctlValue;

    /// Convert into the underlying value before encoding.
    fn to_inner(&self) -> Self::Inner;

    /// Build the value from a decoded underlying value.
    ///
    /// Fails when `inner` has no counterpart in `Self`.
    fn from_inner(inner: Self::Inner) -> Result<Self, CodecError>;
}

impl<M: MappedValue> SysctlValue for M {
    type Raw = <M::Inner as SysctlValue>::Raw;

    fn from_raw(elements: &[Self::Raw]) -> Result<Self, CodecError> {
        M::Inner::from_raw(elements).and_then(M::from_inner)
    }

    fn with_raw<T>(&self, work: impl FnOnce(&[u8]) -> T) -> T {
        self.to_inner().with_raw(work)
    }
}

impl<M> FixedSizeValue for M
where
    M: MappedValue,
    M::Inner: FixedSizeValue,
{
}

/// Booleans travel as native `int`; any nonzero value reads as `true`.
impl MappedValue for bool {
    type Inner = i32;

    fn to_inner(&self) -> i32 {
        i32::from(*self)
    }

    fn from_inner(inner: i32) -> Result<Self, CodecError> {
        Ok(inner != 0)
    }
}

/// Timestamps travel as `struct timeval`, truncated to whole microseconds.
impl MappedValue for SystemTime {
    type Inner = TimeVal;

    fn to_inner(&self) -> TimeVal {
        let micros = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_micros() as i128,
            Err(before) => -(before.duration().as_micros() as i128),
        };
        TimeVal::new(
            micros.div_euclid(MICROS_PER_SECOND) as i64,
            micros.rem_euclid(MICROS_PER_SECOND) as i64,
        )
    }

    fn from_inner(inner: TimeVal) -> Result<Self, CodecError> {
        let out_of_range = || CodecError::OutOfRange { value: "timeval" };
        let micros = i128::from(inner.seconds) * MICROS_PER_SECOND + i128::from(inner.microseconds);
        let seconds = micros.div_euclid(MICROS_PER_SECOND);
        let nanos = (micros.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
        let whole = u64::try_from(seconds.unsigned_abs()).map_err(|_| out_of_range())?;
        let whole = Duration::from_secs(whole);
        let base = if seconds >= 0 {
            UNIX_EPOCH.checked_add(whole)
        } else {
            UNIX_EPOCH.checked_sub(whole)
        };
        base.and_then(|time| time.checked_add(Duration::from_nanos(u64::from(nanos))))
            .ok_or_else(out_of_range)
    }
}

/// System load averaged over the last 1, 5 and 15 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverages {
    /// One minute load average.
    pub one: f64,
    /// Five minute load average.
    pub five: f64,
    /// Fifteen minute load average.
    pub fifteen: f64,
}

impl MappedValue for LoadAverages {
    type Inner = LoadAvg;

    fn to_inner(&self) -> LoadAvg {
        let scale = |load: f64| (load * FSCALE as f64).round() as u32;
        LoadAvg {
            ldavg: [scale(self.one), scale(self.five), scale(self.fifteen)],
            fscale: FSCALE,
        }
    }

    fn from_inner(inner: LoadAvg) -> Result<Self, CodecError> {
        let fscale = if inner.fscale == 0 { 1.0 } else { inner.fscale as f64 };
        let [one, five, fifteen] = inner.ldavg.map(|load| f64::from(load) / fscale);
        Ok(Self { one, five, fifteen })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    fn round_trip<V: SysctlValue>(value: &V) -> V {
        let bytes = encode(value, |bytes| bytes.to_vec());
        decode(&bytes).expect("decode mapped value")
    }

    #[test]
    fn bool_uses_native_int() {
        assert_eq!(encode(&true, |bytes| bytes.to_vec()), 1i32.to_ne_bytes());
        assert_eq!(encode(&false, |bytes| bytes.to_vec()), 0i32.to_ne_bytes());
        assert!(round_trip(&true));
        assert!(!round_trip(&false));
    }

    #[test]
    fn any_nonzero_int_reads_true() {
        for raw in [1i32, -1, 2, i32::MAX, i32::MIN] {
            assert_eq!(decode::<bool>(&raw.to_ne_bytes()), Ok(true));
        }
        assert_eq!(decode::<bool>(&0i32.to_ne_bytes()), Ok(false));
    }

    #[test]
    fn system_time_keeps_microseconds() {
        let value = UNIX_EPOCH + Duration::new(1_700_000_123, 456_789_999);
        let back = round_trip(&value);
        let drift = value.duration_since(back).expect("truncated, never ahead");
        assert!(drift < Duration::from_micros(1));
        assert_eq!(value.to_inner(), TimeVal::new(1_700_000_123, 456_789));
    }

    #[test]
    fn system_time_before_epoch() {
        let value = UNIX_EPOCH - Duration::from_micros(1_500_000);
        assert_eq!(value.to_inner(), TimeVal::new(-2, 500_000));
        assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn system_time_keeps_distant_seconds() {
        let seconds = i64::MAX / 1000;
        let time = SystemTime::from_inner(TimeVal::new(seconds, 0)).expect("distant boot time");
        let since = time.duration_since(UNIX_EPOCH).expect("after the epoch");
        assert_eq!(since.as_secs(), seconds as u64);
    }

    #[test]
    fn system_time_rejects_unrepresentable_timeval() {
        let out_of_range = Err(CodecError::OutOfRange { value: "timeval" });
        assert_eq!(SystemTime::from_inner(TimeVal::new(i64::MAX, 1_000_000)), out_of_range);
        assert_eq!(SystemTime::from_inner(TimeVal::new(i64::MIN, 0)), out_of_range);
        let bytes = encode(&TimeVal::new(i64::MIN, 0), |bytes| bytes.to_vec());
        assert_eq!(decode::<SystemTime>(&bytes), out_of_range);
    }

    #[test]
    fn load_averages_scale_by_fscale() {
        let raw = LoadAvg {
            ldavg: [2048, 1024, 3072],
            fscale: 2048,
        };
        let loads = LoadAverages::from_inner(raw).expect("load averages");
        assert_eq!(
            loads,
            LoadAverages {
                one: 1.0,
                five: 0.5,
                fifteen: 1.5
            }
        );
        assert_eq!(loads.to_inner(), raw);
    }
}
