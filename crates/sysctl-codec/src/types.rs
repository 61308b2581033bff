// Author: Lukas Bower
// Purpose: Define sysctl record types and codec errors shared across components.
#![allow(clippy::module_name_repetitions)]

//! Kernel record layouts transferred by the registry.
//!
//! Layouts follow the LP64 BSD ABI: `long` and `time_t` are eight bytes and
//! records are padded to their widest member.

use core::mem::size_of;

use crate::codec::{identity_value, RawElement};

/// Possible errors produced while decoding registry buffers.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer length is not a whole number of raw elements.
    #[error("buffer of {len} bytes is not a whole number of {element}-byte elements")]
    Misaligned {
        /// Length of the buffer returned by the registry.
        len: usize,
        /// Size of the raw element the value expects.
        element: usize,
    },
    /// Value expected a different number of raw elements.
    #[error("expected {expected} element(s), found {actual}")]
    ElementCount {
        /// Number of elements the value can be built from.
        expected: usize,
        /// Number of elements present in the buffer.
        actual: usize,
    },
    /// Decoded raw value has no counterpart in the requested type.
    #[error("{value} is out of range for the requested type")]
    OutOfRange {
        /// Raw value that could not be represented.
        value: &'static str,
    },
    /// Encountered malformed UTF-8 data in a string value.
    #[error("invalid utf8 in string value")]
    InvalidUtf8,
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
type Micros = i32;
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
type Micros = i64;

/// `struct timeval`: seconds and microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeVal {
    /// Whole seconds (`tv_sec`).
    pub seconds: i64,
    /// Microseconds within the second (`tv_usec`).
    pub microseconds: i64,
}

impl TimeVal {
    /// Construct a time value from its two fields.
    #[must_use]
    pub fn new(seconds: i64, microseconds: i64) -> Self {
        Self {
            seconds,
            microseconds,
        }
    }
}

impl RawElement for TimeVal {
    const SIZE: usize = 16;

    fn read_ne(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(&bytes[..Self::SIZE]);
        let seconds = cursor.take::<i64>();
        let microseconds = i64::from(cursor.take::<Micros>());
        Self {
            seconds,
            microseconds,
        }
    }

    fn write_ne(&self, out: &mut Vec<u8>) {
        let start = out.len();
        self.seconds.write_ne(out);
        (self.microseconds as Micros).write_ne(out);
        out.resize(start + Self::SIZE, 0);
    }
}

/// `struct clockinfo`: clock rates of the running kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClockInfo {
    /// Clock frequency.
    pub hz: i32,
    /// Microseconds per hz tick.
    pub tick: i32,
    /// Clock skew rate for adjtime(). Unused on FreeBSD.
    pub tickadj: i32,
    /// Statistics clock frequency.
    pub stathz: i32,
    /// Profiling clock frequency.
    pub profhz: i32,
}

impl RawElement for ClockInfo {
    const SIZE: usize = 5 * size_of::<i32>();

    fn read_ne(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(&bytes[..Self::SIZE]);
        Self {
            hz: cursor.take(),
            tick: cursor.take(),
            tickadj: cursor.take(),
            stathz: cursor.take(),
            profhz: cursor.take(),
        }
    }

    fn write_ne(&self, out: &mut Vec<u8>) {
        for field in [self.hz, self.tick, self.tickadj, self.stathz, self.profhz] {
            field.write_ne(out);
        }
    }
}

/// `struct loadavg`: fixed-point load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadAvg {
    /// Load over the last 1, 5 and 15 minutes, scaled by `fscale`.
    pub ldavg: [u32; 3],
    /// Fixed-point scale of `ldavg`.
    pub fscale: i64,
}

impl RawElement for LoadAvg {
    const SIZE: usize = 24;

    fn read_ne(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(&bytes[..Self::SIZE]);
        let ldavg = [cursor.take(), cursor.take(), cursor.take()];
        cursor.skip(4);
        Self {
            ldavg,
            fscale: cursor.take(),
        }
    }

    fn write_ne(&self, out: &mut Vec<u8>) {
        for load in self.ldavg {
            load.write_ne(out);
        }
        out.extend_from_slice(&[0u8; 4]);
        self.fscale.write_ne(out);
    }
}

identity_value!(TimeVal, ClockInfo, LoadAvg);

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<R: RawElement>(&mut self) -> R {
        let value = R::read_ne(&self.buf[self.pos..]);
        self.pos += R::SIZE;
        value
    }

    fn skip(&mut self, len: usize) {
        self.pos += len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn timeval_occupies_one_record() {
        let value = TimeVal::new(1_700_000_000, 250_000);
        let bytes = encode(&value, |bytes| bytes.to_vec());
        assert_eq!(bytes.len(), TimeVal::SIZE);
        assert_eq!(decode::<TimeVal>(&bytes), Ok(value));
    }

    #[test]
    fn clockinfo_fields_keep_their_order() {
        let value = ClockInfo {
            hz: 100,
            tick: 10_000,
            tickadj: 2,
            stathz: 128,
            profhz: 1024,
        };
        let bytes = encode(&value, |bytes| bytes.to_vec());
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[..4], &100i32.to_ne_bytes());
        assert_eq!(decode::<ClockInfo>(&bytes), Ok(value));
    }

    #[test]
    fn loadavg_pads_before_scale() {
        let value = LoadAvg {
            ldavg: [2048, 1024, 512],
            fscale: 2048,
        };
        let bytes = encode(&value, |bytes| bytes.to_vec());
        assert_eq!(bytes.len(), LoadAvg::SIZE);
        assert_eq!(&bytes[12..16], &[0u8; 4]);
        assert_eq!(&bytes[16..], &2048i64.to_ne_bytes());
        assert_eq!(decode::<LoadAvg>(&bytes), Ok(value));
    }

    #[test]
    fn record_array_splits_on_record_size() {
        let values = vec![TimeVal::new(1, 2), TimeVal::new(3, 4)];
        let bytes = encode(&values, |bytes| bytes.to_vec());
        assert_eq!(bytes.len(), 2 * TimeVal::SIZE);
        assert_eq!(decode::<Vec<TimeVal>>(&bytes), Ok(values));
    }
}
