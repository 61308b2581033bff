// Author: Lukas Bower
// Purpose: Provide typed sysctl value codecs for host and catalogue code.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Typed codecs that move values between Rust types and the raw byte buffers
//! the kernel parameter registry transfers.
//!
//! Every value names a fixed-size [`RawElement`] and knows how to build itself
//! from a run of those elements and how to lend out an encoded buffer for the
//! duration of a callback. Derived values such as `bool` or
//! [`std::time::SystemTime`] are built on top of an existing codec through
//! [`MappedValue`].

mod codec;
mod mapped;
mod types;

pub use codec::{decode, encode, split, FixedSizeValue, RawElement, SysctlValue};
pub use mapped::{LoadAverages, MappedValue};
pub use types::*;
