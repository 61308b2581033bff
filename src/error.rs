// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Errors surfaced by path resolution and registry access.

use std::fmt;
use std::io;

use sysctl_codec::CodecError;
use thiserror::Error;

use crate::resolve::ResolvedPath;

/// Result type for registry operations.
pub type SysctlResult<T> = Result<T, SysctlError>;

/// Raw OS error code reported by a registry call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub i32);

impl Errno {
    /// No such entry.
    pub const NOT_FOUND: Errno = Errno(libc::ENOENT);
    /// Operation not permitted.
    pub const PERMISSION: Errno = Errno(libc::EPERM);
    /// Destination buffer too small.
    pub const NO_MEMORY: Errno = Errno(libc::ENOMEM);
    /// Operation not supported on this platform.
    pub const UNSUPPORTED: Errno = Errno(libc::ENOTSUP);

    /// The error code left behind by the last failed libc call.
    pub fn last() -> Self {
        Errno(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// Raw numeric code.
    pub fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

/// Registry primitive that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `sysctl(3)`, addressed by MIB.
    Sysctl,
    /// `sysctlbyname(3)`, addressed by dotted name.
    SysctlByName,
    /// `sysctlnametomib(3)`.
    SysctlNameToMib,
}

impl Primitive {
    /// The primitive used to reach `path`.
    pub fn for_path(path: &ResolvedPath) -> Self {
        match path {
            ResolvedPath::Numeric(_) => Primitive::Sysctl,
            ResolvedPath::Symbolic(_) => Primitive::SysctlByName,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Primitive::Sysctl => "sysctl",
            Primitive::SysctlByName => "sysctlbyname",
            Primitive::SysctlNameToMib => "sysctlnametomib",
        })
    }
}

/// Step of the access protocol during which a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Size probe with no destination buffer.
    Probe,
    /// Fetch into the allocated buffer.
    Fetch,
    /// Submission of a new value.
    Submit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Probe => "probing",
            Phase::Fetch => "reading",
            Phase::Submit => "writing",
        })
    }
}

/// Errors produced while resolving or accessing a registry field.
#[derive(Debug, Error)]
pub enum SysctlError {
    /// A probe, fetch or submit call returned an OS error.
    #[error("{primitive} failed when {phase} '{path}' ({errno})")]
    Call {
        /// Primitive that failed.
        primitive: Primitive,
        /// Protocol step that failed.
        phase: Phase,
        /// Path the call addressed.
        path: ResolvedPath,
        /// OS error code.
        errno: Errno,
    },
    /// Name translation reported that no such name exists.
    #[error("no sysctl named '{name}' ({errno})")]
    UnknownName {
        /// Dotted name that failed to translate.
        name: String,
        /// OS error code.
        errno: Errno,
    },
    /// Name translation failed for another reason.
    #[error("sysctlnametomib failed for name '{name}' ({errno})")]
    Translate {
        /// Dotted name that failed to translate.
        name: String,
        /// OS error code.
        errno: Errno,
    },
    /// The fetched buffer does not match the field's value type.
    #[error("could not decode '{path}': {source}")]
    Decode {
        /// Path that was read.
        path: ResolvedPath,
        /// Codec failure.
        #[source]
        source: CodecError,
    },
}

impl SysctlError {
    /// OS error code carried by the failure, if any.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            SysctlError::Call { errno, .. }
            | SysctlError::UnknownName { errno, .. }
            | SysctlError::Translate { errno, .. } => Some(*errno),
            SysctlError::Decode { .. } => None,
        }
    }

    /// Whether the failure means the addressed field does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SysctlError::UnknownName { .. }) || self.errno() == Some(Errno::NOT_FOUND)
    }

    /// Primitive that failed, for call and translation failures.
    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            SysctlError::Call { primitive, .. } => Some(*primitive),
            SysctlError::UnknownName { .. } | SysctlError::Translate { .. } => {
                Some(Primitive::SysctlNameToMib)
            }
            SysctlError::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_error_names_primitive_path_and_code() {
        let err = SysctlError::Call {
            primitive: Primitive::Sysctl,
            phase: Phase::Submit,
            path: ResolvedPath::Numeric(vec![1, 10]),
            errno: Errno::PERMISSION,
        };
        let text = err.to_string();
        assert!(text.starts_with("sysctl failed when writing '1,10'"), "{text}");
        assert!(text.contains(&format!("os error {}", libc::EPERM)), "{text}");
        assert_eq!(err.errno(), Some(Errno::PERMISSION));
        assert!(!err.is_not_found());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = SysctlError::UnknownName {
            name: "kern.nope".into(),
            errno: Errno::NOT_FOUND,
        };
        assert!(err.is_not_found());
        assert_eq!(err.primitive(), Some(Primitive::SysctlNameToMib));
    }
}
