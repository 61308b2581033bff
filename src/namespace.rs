// CLASSIFICATION: COMMUNITY
// Filename: namespace.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Type-level namespace tree.
//!
//! Each segment of a dotted registry path (`net`, `inet`, `ip`, ...) is a
//! zero-sized type implementing [`Namespace`] and naming its parent. The chain
//! ends at [`Root`], which is its own parent.

/// One segment of the registry namespace.
pub trait Namespace: Copy + Default + Send + Sync + 'static {
    /// Namespace this segment lives under. [`Root`] for top-level segments.
    type Parent: Namespace;

    /// Symbolic segment name, e.g. `kern`.
    const NAME: &'static str;

    /// Numeric segment identifier, when the registry defines one.
    const MIB: Option<i32> = None;

    #[doc(hidden)]
    const IS_ROOT: bool = false;
}

/// Namespace whose whole ancestor chain carries numeric identifiers.
///
/// Fields of such a namespace may be addressed purely by number. Declare
/// namespaces through [`namespace!`](crate::namespace!) so the parent chain is
/// checked at compile time.
pub trait NumericNamespace: Namespace {}

/// The root of the registry. It has neither a name nor a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Root;

impl Namespace for Root {
    type Parent = Root;
    const NAME: &'static str = "";
    const IS_ROOT: bool = true;
}

impl NumericNamespace for Root {}

/// Declare a zero-sized namespace type.
///
/// ```
/// use syscontrol::{namespace, Root};
///
/// namespace! {
///     /// The `kern` namespace.
///     pub struct Kern: Root = "kern", mib = 1;
/// }
///
/// namespace! {
///     /// The `kern.hv` namespace, reachable by name only.
///     pub struct Hypervisor: Kern = "hv";
/// }
/// ```
///
/// A namespace declared with a `mib` must sit under a numeric parent;
/// anything else fails to compile.
#[macro_export]
macro_rules! namespace {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $parent:ty = $part:literal, mib = $mib:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Namespace for $name {
            type Parent = $parent;
            const NAME: &'static str = $part;
            const MIB: ::core::option::Option<i32> = ::core::option::Option::Some($mib);
        }

        impl $crate::NumericNamespace for $name where $parent: $crate::NumericNamespace {}
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $parent:ty = $part:literal;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Namespace for $name {
            type Parent = $parent;
            const NAME: &'static str = $part;
        }
    };
}
