// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode and decode sysctl values to and from raw registry buffers.
// Author: Lukas Bower

//! Core codec traits and the scalar, string and array codecs.

use core::mem::size_of;
use core::slice;

use crate::types::CodecError;

/// Fixed-size unit the registry transfers for a value.
///
/// Implementations use native byte order, because the registry hands out the
/// kernel's in-memory representation.
pub trait RawElement: Copy {
    /// Size of one element in bytes.
    const SIZE: usize;

    /// Read one element from the first [`Self::SIZE`] bytes of `bytes`.
    ///
    /// Callers must supply at least [`Self::SIZE`] bytes.
    fn read_ne(bytes: &[u8]) -> Self;

    /// Append the native representation of this element to `out`.
    fn write_ne(&self, out: &mut Vec<u8>);
}

macro_rules! raw_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawElement for $ty {
                const SIZE: usize = size_of::<$ty>();

                fn read_ne(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_ne_bytes(buf)
                }

                fn write_ne(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

raw_integer!(u8, i32, u32, i64, u64);

/// A value that can be read from and written to the registry.
pub trait SysctlValue: Sized {
    /// The element type the registry transfers for this value.
    type Raw: RawElement;

    /// Build the value from exactly `elements.len()` raw elements.
    fn from_raw(elements: &[Self::Raw]) -> Result<Self, CodecError>;

    /// Encode the value and hand the encoded bytes to `work`.
    ///
    /// The buffer only lives for the duration of `work`.
    fn with_raw<T>(&self, work: impl FnOnce(&[u8]) -> T) -> T;
}

/// Marker for values that occupy exactly one raw element.
///
/// Only fixed-size values may be collected into a `Vec`.
pub trait FixedSizeValue: SysctlValue {}

/// Split a registry buffer into raw elements.
pub fn split<R: RawElement>(bytes: &[u8]) -> Result<Vec<R>, CodecError> {
    if R::SIZE == 0 || bytes.len() % R::SIZE != 0 {
        return Err(CodecError::Misaligned {
            len: bytes.len(),
            element: R::SIZE,
        });
    }
    Ok(bytes.chunks_exact(R::SIZE).map(R::read_ne).collect())
}

/// Decode a value from the bytes the registry returned.
pub fn decode<V: SysctlValue>(bytes: &[u8]) -> Result<V, CodecError> {
    let elements = split::<V::Raw>(bytes)?;
    V::from_raw(&elements)
}

/// Encode `value` and run `work` against the encoded bytes.
pub fn encode<V: SysctlValue, T>(value: &V, work: impl FnOnce(&[u8]) -> T) -> T {
    value.with_raw(work)
}

pub(crate) fn single<R: RawElement>(elements: &[R]) -> Result<R, CodecError> {
    match elements {
        [one] => Ok(*one),
        _ => Err(CodecError::ElementCount {
            expected: 1,
            actual: elements.len(),
        }),
    }
}

pub(crate) fn with_encoded<R: RawElement, T>(raw: &R, work: impl FnOnce(&[u8]) -> T) -> T {
    let mut buffer = Vec::with_capacity(R::SIZE);
    raw.write_ne(&mut buffer);
    work(&buffer)
}

/// Implements [`SysctlValue`] for types that are their own raw element.
macro_rules! identity_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::codec::SysctlValue for $ty {
                type Raw = $ty;

                fn from_raw(elements: &[Self::Raw]) -> Result<Self, crate::types::CodecError> {
                    crate::codec::single(elements)
                }

                fn with_raw<T>(&self, work: impl FnOnce(&[u8]) -> T) -> T {
                    crate::codec::with_encoded(self, work)
                }
            }

            impl crate::codec::FixedSizeValue for $ty {}
        )*
    };
}

pub(crate) use identity_value;

identity_value!(u8, i32, u32, i64, u64);

impl SysctlValue for String {
    type Raw = u8;

    fn from_raw(elements: &[u8]) -> Result<Self, CodecError> {
        let end = elements
            .iter()
            .position(|&unit| unit == 0)
            .unwrap_or(elements.len());
        String::from_utf8(elements[..end].to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }

    fn with_raw<T>(&self, work: impl FnOnce(&[u8]) -> T) -> T {
        // The registry appends the terminator on write.
        work(self.as_bytes())
    }
}

impl<V: FixedSizeValue> SysctlValue for Vec<V> {
    type Raw = V::Raw;

    fn from_raw(elements: &[Self::Raw]) -> Result<Self, CodecError> {
        elements
            .iter()
            .map(|element| V::from_raw(slice::from_ref(element)))
            .collect()
    }

    fn with_raw<T>(&self, work: impl FnOnce(&[u8]) -> T) -> T {
        let mut buffer = Vec::with_capacity(self.len() * <V::Raw as RawElement>::SIZE);
        for item in self {
            item.with_raw(|bytes| buffer.extend_from_slice(bytes));
        }
        work(&buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded<V: SysctlValue>(value: &V) -> Vec<u8> {
        encode(value, |bytes| bytes.to_vec())
    }

    #[test]
    fn scalars_survive_the_registry_encoding() {
        for value in [0i32, -1, i32::MIN, i32::MAX] {
            assert_eq!(decode::<i32>(&encoded(&value)), Ok(value));
        }
        for value in [0i64, -42, i64::MIN, i64::MAX] {
            assert_eq!(decode::<i64>(&encoded(&value)), Ok(value));
        }
        for value in [0u32, 7, u32::MAX] {
            assert_eq!(decode::<u32>(&encoded(&value)), Ok(value));
        }
        for value in [0u64, u64::MAX] {
            assert_eq!(decode::<u64>(&encoded(&value)), Ok(value));
        }
        for value in [0u8, 0x7f, u8::MAX] {
            assert_eq!(decode::<u8>(&encoded(&value)), Ok(value));
        }
    }

    #[test]
    fn scalar_rejects_partial_element() {
        let err = decode::<i64>(&[0u8; 4]).expect_err("half an i64");
        assert_eq!(err, CodecError::Misaligned { len: 4, element: 8 });
    }

    #[test]
    fn scalar_requires_exactly_one_element() {
        assert_eq!(
            decode::<i32>(&[]),
            Err(CodecError::ElementCount { expected: 1, actual: 0 })
        );
        assert_eq!(
            decode::<i32>(&[0u8; 8]),
            Err(CodecError::ElementCount { expected: 1, actual: 2 })
        );
    }

    #[test]
    fn string_write_excludes_terminator() {
        let value = String::from("darwin");
        assert_eq!(encode(&value, |bytes| bytes.len()), 6);
    }

    #[test]
    fn string_read_stops_at_terminator() {
        let decoded = decode::<String>(b"Darwin\0").expect("decode string");
        assert_eq!(decoded, "Darwin");
        assert_eq!(decoded.len(), 6);
        let trailing = decode::<String>(b"hw\0junk").expect("decode string");
        assert_eq!(trailing, "hw");
    }

    #[test]
    fn empty_buffers_decode_to_empty_values() {
        assert_eq!(decode::<String>(&[]), Ok(String::new()));
        assert_eq!(decode::<Vec<i32>>(&[]), Ok(Vec::new()));
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        assert_eq!(
            decode::<String>(&[0xff, 0xfe, 0]),
            Err(CodecError::InvalidUtf8)
        );
    }

    #[test]
    fn array_decodes_one_value_per_element() {
        let values = vec![3i32, -9, 27, i32::MAX];
        let bytes = encoded(&values);
        assert_eq!(bytes.len(), 4 * i32::SIZE);
        let decoded = decode::<Vec<i32>>(&bytes).expect("decode array");
        assert_eq!(decoded.len(), 4);
        for (index, chunk) in bytes.chunks_exact(i32::SIZE).enumerate() {
            assert_eq!(decode::<i32>(chunk), Ok(decoded[index]));
        }
        assert_eq!(decoded, values);
    }

    #[test]
    fn array_rejects_trailing_bytes() {
        let err = decode::<Vec<u32>>(&[0u8; 10]).expect_err("misaligned array");
        assert_eq!(err, CodecError::Misaligned { len: 10, element: 4 });
    }
}
