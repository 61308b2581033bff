// CLASSIFICATION: COMMUNITY
// Filename: resolve.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Resolution of field descriptors into registry lookup keys.
//!
//! A field resolves to a numeric MIB when it and every namespace above it
//! carry a number, and to a dotted name when it carries a name. Which of the
//! two wins when both exist is a [`PathPreference`].

use std::fmt;

use serde::Deserialize;

use crate::error::{Errno, SysctlError, SysctlResult};
use crate::field::Field;
use crate::namespace::Namespace;
use crate::registry::Registry;

/// A concrete lookup key for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedPath {
    /// Management information base: one number per segment.
    Numeric(Vec<i32>),
    /// Dotted symbolic name, e.g. `kern.hostname`.
    Symbolic(String),
}

impl ResolvedPath {
    /// The MIB, when this path is numeric.
    pub fn as_numeric(&self) -> Option<&[i32]> {
        match self {
            ResolvedPath::Numeric(mib) => Some(mib),
            ResolvedPath::Symbolic(_) => None,
        }
    }

    /// The dotted name, when this path is symbolic.
    pub fn as_symbolic(&self) -> Option<&str> {
        match self {
            ResolvedPath::Numeric(_) => None,
            ResolvedPath::Symbolic(name) => Some(name),
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedPath::Numeric(mib) => {
                let parts: Vec<String> = mib.iter().map(i32::to_string).collect();
                f.write_str(&parts.join(","))
            }
            ResolvedPath::Symbolic(name) => f.write_str(name),
        }
    }
}

/// Which form wins when a field resolves both ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPreference {
    /// Prefer the MIB; it skips name translation in the kernel.
    #[default]
    Numeric,
    /// Prefer the dotted name.
    Symbolic,
}

impl std::str::FromStr for PathPreference {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "numeric" | "mib" => Ok(PathPreference::Numeric),
            "symbolic" | "name" => Ok(PathPreference::Symbolic),
            other => Err(format!("unknown path preference '{other}'")),
        }
    }
}

/// Both resolutions of a field, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPaths {
    /// Dotted name, when the field has a name.
    pub symbolic: Option<String>,
    /// MIB, when the whole chain is numeric.
    pub numeric: Option<Vec<i32>>,
}

/// Numeric parts of `N` and its ancestors, root first.
///
/// `None` as soon as one segment lacks a number.
pub fn namespace_mib<N: Namespace>() -> Option<Vec<i32>> {
    if N::IS_ROOT {
        return Some(Vec::new());
    }
    let mut parts = namespace_mib::<N::Parent>()?;
    parts.push(N::MIB?);
    Some(parts)
}

/// Name parts of `N` and its ancestors, root first.
pub fn namespace_names<N: Namespace>() -> Vec<&'static str> {
    if N::IS_ROOT {
        return Vec::new();
    }
    let mut parts = namespace_names::<N::Parent>();
    parts.push(N::NAME);
    parts
}

/// The full MIB of `field`, if every segment and the field carry a number.
pub fn numeric_path<N: Namespace, V, A>(field: &Field<N, V, A>) -> Option<Vec<i32>> {
    let number = field.number()?;
    let mut mib = namespace_mib::<N>()?;
    mib.push(number);
    Some(mib)
}

/// The dotted name of `field`, if the field carries a name.
pub fn symbolic_path<N: Namespace, V, A>(field: &Field<N, V, A>) -> Option<String> {
    let name = field.name()?;
    let mut parts = namespace_names::<N>();
    parts.push(name);
    Some(parts.join("."))
}

/// Both resolutions of `field`.
pub fn describe<N: Namespace, V, A>(field: &Field<N, V, A>) -> FieldPaths {
    FieldPaths {
        symbolic: symbolic_path(field),
        numeric: numeric_path(field),
    }
}

/// Resolve `field`, trying the preferred form first.
///
/// # Panics
///
/// When the field resolves neither way. Fields built through the public
/// constructors always resolve at least one way.
pub fn resolve<N: Namespace, V, A>(
    field: &Field<N, V, A>,
    preference: PathPreference,
) -> ResolvedPath {
    let numeric = || numeric_path(field).map(ResolvedPath::Numeric);
    let symbolic = || symbolic_path(field).map(ResolvedPath::Symbolic);
    let resolved = match preference {
        PathPreference::Numeric => numeric().or_else(symbolic),
        PathPreference::Symbolic => symbolic().or_else(numeric),
    };
    match resolved {
        Some(path) => path,
        None => panic!("{field:?} resolves to neither a name nor a MIB"),
    }
}

/// Translate a dotted name into its MIB through the registry.
pub fn translate<R: Registry + ?Sized>(registry: &R, name: &str) -> SysctlResult<Vec<i32>> {
    match registry.name_to_mib(name) {
        Ok(mib) => {
            log::debug!("translated '{name}' to {mib:?}");
            Ok(mib)
        }
        Err(errno) if errno == Errno::NOT_FOUND => {
            log::warn!("sysctlnametomib: no entry for '{name}'");
            Err(SysctlError::UnknownName {
                name: name.to_owned(),
                errno,
            })
        }
        Err(errno) => {
            log::warn!("sysctlnametomib failed for '{name}': {errno}");
            Err(SysctlError::Translate {
                name: name.to_owned(),
                errno,
            })
        }
    }
}

/// Turn a resolved path into the key actually handed to the registry.
///
/// Symbolic paths are translated to MIBs when `translate_names` is set or
/// when the registry cannot address by name. Numeric paths pass through.
pub fn lookup_key<R: Registry + ?Sized>(
    registry: &R,
    path: ResolvedPath,
    translate_names: bool,
) -> SysctlResult<ResolvedPath> {
    match path {
        ResolvedPath::Symbolic(name) if translate_names || !registry.supports_names() => {
            translate(registry, &name).map(ResolvedPath::Numeric)
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Root;

    crate::namespace! {
        struct Hw: Root = "hw", mib = 6;
    }

    crate::namespace! {
        struct Machdep: Root = "machdep";
    }

    crate::namespace! {
        struct Cpu: Machdep = "cpu";
    }

    #[test]
    fn root_contributes_nothing() {
        assert_eq!(namespace_mib::<Root>(), Some(Vec::new()));
        assert!(namespace_names::<Root>().is_empty());
    }

    #[test]
    fn chain_without_numbers_has_no_mib() {
        assert_eq!(namespace_mib::<Cpu>(), None);
        assert_eq!(namespace_names::<Cpu>(), ["machdep", "cpu"]);
    }

    #[test]
    fn preference_picks_one_form_consistently() {
        let field = Field::<Hw, i32>::new(3, "ncpu");
        assert_eq!(
            resolve(&field, PathPreference::Numeric),
            ResolvedPath::Numeric(vec![6, 3])
        );
        assert_eq!(
            resolve(&field, PathPreference::Symbolic),
            ResolvedPath::Symbolic("hw.ncpu".into())
        );
    }

    #[test]
    fn preference_falls_back_when_form_missing() {
        let named = Field::<Cpu, String>::named("brand_string");
        assert_eq!(
            resolve(&named, PathPreference::Numeric),
            ResolvedPath::Symbolic("machdep.cpu.brand_string".into())
        );
        let numeric = Field::<Hw, i32>::numeric(3);
        assert_eq!(
            resolve(&numeric, PathPreference::Symbolic),
            ResolvedPath::Numeric(vec![6, 3])
        );
    }

    #[test]
    fn display_matches_registry_diagnostics() {
        assert_eq!(ResolvedPath::Numeric(vec![1, 14, 0]).to_string(), "1,14,0");
        assert_eq!(ResolvedPath::Symbolic("vm.loadavg".into()).to_string(), "vm.loadavg");
    }

    #[test]
    fn preference_parses_from_text() {
        assert_eq!("MIB".parse(), Ok(PathPreference::Numeric));
        assert_eq!("symbolic".parse(), Ok(PathPreference::Symbolic));
        assert!("both".parse::<PathPreference>().is_err());
    }
}
