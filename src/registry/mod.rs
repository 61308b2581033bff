// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! The kernel parameter registry boundary.
//!
//! [`Registry`] mirrors the shape of `sysctl(3)`: one call both reads (into
//! `old`) and writes (from `new`), and a null `old` buffer asks for the size.

mod memory;
mod system;

pub use memory::{CallRecord, MemoryRegistry};
pub use system::SystemRegistry;

use crate::error::Errno;
use crate::resolve::ResolvedPath;

/// Black-box access to a kernel parameter registry.
pub trait Registry {
    /// Issue one registry call against `path`.
    ///
    /// With `old` set to `None` nothing is copied out and the returned size is
    /// the space the current value needs. With a buffer, the value is copied
    /// into it and the number of bytes written is returned. A `new` buffer
    /// replaces the value.
    fn call(
        &self,
        path: &ResolvedPath,
        old: Option<&mut [u8]>,
        new: Option<&[u8]>,
    ) -> Result<usize, Errno>;

    /// Translate a dotted name into its MIB.
    fn name_to_mib(&self, name: &str) -> Result<Vec<i32>, Errno>;

    /// Whether [`Registry::call`] accepts symbolic paths.
    fn supports_names(&self) -> bool {
        true
    }
}

impl<R: Registry + ?Sized> Registry for &R {
    fn call(
        &self,
        path: &ResolvedPath,
        old: Option<&mut [u8]>,
        new: Option<&[u8]>,
    ) -> Result<usize, Errno> {
        (**self).call(path, old, new)
    }

    fn name_to_mib(&self, name: &str) -> Result<Vec<i32>, Errno> {
        (**self).name_to_mib(name)
    }

    fn supports_names(&self) -> bool {
        (**self).supports_names()
    }
}
