// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2027-08-20
// Author: Lukas Bower

//! Typed access to the kernel's hierarchical configuration registry.
//!
//! Namespaces are zero-sized types chained to [`Root`]; fields are typed
//! leaves declared on them. A [`Container`] walks the tree and turns a field
//! into a registry call, preferring the numeric MIB when the whole chain has
//! one and falling back to the dotted name otherwise.

pub mod access;
pub mod catalogue;
pub mod config;
pub mod container;
pub mod error;
pub mod field;
pub mod namespace;
pub mod registry;
pub mod resolve;

pub use config::AccessConfig;
pub use container::{system, Container, SystemControl};
pub use error::{Errno, Phase, Primitive, SysctlError, SysctlResult};
pub use field::{Access, Field, ReadOnly, ReadWrite};
pub use namespace::{Namespace, NumericNamespace, Root};
pub use registry::{MemoryRegistry, Registry, SystemRegistry};
pub use resolve::{FieldPaths, PathPreference, ResolvedPath};
pub use sysctl_codec::{
    ClockInfo, CodecError, FixedSizeValue, LoadAverages, LoadAvg, MappedValue, SysctlValue, TimeVal,
};
