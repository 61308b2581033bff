// CLASSIFICATION: COMMUNITY
// Filename: system.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Host registry reached through `sysctl(3)` and friends.

use crate::error::Errno;
use crate::resolve::ResolvedPath;

use super::Registry;

/// The host kernel's registry.
///
/// Available on macOS, iOS, FreeBSD and DragonFly. Elsewhere every call fails
/// with [`Errno::UNSUPPORTED`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemRegistry;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
mod imp {
    use std::ffi::CString;
    use std::ptr;

    use libc::{c_int, c_uint, c_void, size_t};

    use crate::error::Errno;
    use crate::resolve::ResolvedPath;

    // Largest MIB any supported kernel hands out.
    const MAX_MIB_LEN: usize = 24;

    pub(super) fn call(
        path: &ResolvedPath,
        old: Option<&mut [u8]>,
        new: Option<&[u8]>,
    ) -> Result<usize, Errno> {
        let (old_ptr, mut old_len) = match old {
            Some(buf) => (buf.as_mut_ptr().cast::<c_void>(), buf.len() as size_t),
            None => (ptr::null_mut(), 0),
        };
        let (new_ptr, new_len) = match new {
            Some(buf) => (buf.as_ptr() as *mut c_void, buf.len() as size_t),
            None => (ptr::null_mut(), 0),
        };
        let rc = match path {
            ResolvedPath::Numeric(mib) => {
                let mut mib = mib.clone();
                // SAFETY: the MIB, both buffers and their lengths stay valid for the call.
                unsafe {
                    libc::sysctl(
                        mib.as_mut_ptr(),
                        mib.len() as c_uint,
                        old_ptr,
                        &mut old_len,
                        new_ptr,
                        new_len,
                    )
                }
            }
            ResolvedPath::Symbolic(name) => {
                let name = CString::new(name.as_str()).map_err(|_| Errno(libc::EINVAL))?;
                // SAFETY: `name` is NUL-terminated; buffers as above.
                unsafe {
                    libc::sysctlbyname(name.as_ptr(), old_ptr, &mut old_len, new_ptr, new_len)
                }
            }
        };
        if rc != 0 {
            return Err(Errno::last());
        }
        Ok(old_len as usize)
    }

    pub(super) fn name_to_mib(name: &str) -> Result<Vec<i32>, Errno> {
        let name = CString::new(name).map_err(|_| Errno(libc::EINVAL))?;
        let mut mib: [c_int; MAX_MIB_LEN] = [0; MAX_MIB_LEN];
        let mut len: size_t = MAX_MIB_LEN as size_t;
        // SAFETY: `mib` holds `len` entries and `name` is NUL-terminated.
        let rc = unsafe { libc::sysctlnametomib(name.as_ptr(), mib.as_mut_ptr(), &mut len) };
        if rc != 0 {
            return Err(Errno::last());
        }
        Ok(mib[..len as usize].to_vec())
    }
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
)))]
mod imp {
    use crate::error::Errno;
    use crate::resolve::ResolvedPath;

    pub(super) fn call(
        _path: &ResolvedPath,
        _old: Option<&mut [u8]>,
        _new: Option<&[u8]>,
    ) -> Result<usize, Errno> {
        Err(Errno::UNSUPPORTED)
    }

    pub(super) fn name_to_mib(_name: &str) -> Result<Vec<i32>, Errno> {
        Err(Errno::UNSUPPORTED)
    }
}

impl Registry for SystemRegistry {
    fn call(
        &self,
        path: &ResolvedPath,
        old: Option<&mut [u8]>,
        new: Option<&[u8]>,
    ) -> Result<usize, Errno> {
        imp::call(path, old, new)
    }

    fn name_to_mib(&self, name: &str) -> Result<Vec<i32>, Errno> {
        imp::name_to_mib(name)
    }
}
