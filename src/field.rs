// CLASSIFICATION: COMMUNITY
// Filename: field.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Field descriptors: typed leaves inside a namespace.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::namespace::{Namespace, NumericNamespace};

mod sealed {
    pub trait Sealed {}
}

/// Access mode of a field.
pub trait Access: sealed::Sealed {
    /// Whether the field accepts writes.
    const WRITABLE: bool;
}

/// Field that can only be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadOnly {}

/// Field that can be read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadWrite {}

impl sealed::Sealed for ReadOnly {}
impl sealed::Sealed for ReadWrite {}

impl Access for ReadOnly {
    const WRITABLE: bool = false;
}

impl Access for ReadWrite {
    const WRITABLE: bool = true;
}

/// A typed value inside namespace `N`.
///
/// A field carries a symbolic name, a numeric identifier, or both. Numeric-only
/// fields are only constructible inside a [`NumericNamespace`].
pub struct Field<N, V, A = ReadOnly> {
    name: Option<&'static str>,
    number: Option<i32>,
    marker: PhantomData<fn() -> (N, V, A)>,
}

impl<N: Namespace, V, A: Access> Field<N, V, A> {
    #[track_caller]
    fn from_parts(number: Option<i32>, name: Option<&'static str>) -> Self {
        assert!(
            number.is_some() || name.is_some(),
            "field in `{}` needs a name or a numeric identifier",
            N::NAME
        );
        Self {
            name,
            number,
            marker: PhantomData,
        }
    }

    /// A field addressed by name only.
    #[track_caller]
    pub fn named(name: &'static str) -> Self {
        Self::from_parts(None, Some(name))
    }

    /// A field carrying both a numeric identifier and a name.
    #[track_caller]
    pub fn new(number: i32, name: &'static str) -> Self {
        Self::from_parts(Some(number), Some(name))
    }

    /// Whether the field accepts writes.
    pub fn is_writable(&self) -> bool {
        A::WRITABLE
    }
}

impl<N, V, A> Field<N, V, A> {
    /// Symbolic name part, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Numeric identifier part, if any.
    pub fn number(&self) -> Option<i32> {
        self.number
    }
}

impl<N: NumericNamespace, V, A: Access> Field<N, V, A> {
    /// A field addressed by number only.
    #[track_caller]
    pub fn numeric(number: i32) -> Self {
        Self::from_parts(Some(number), None)
    }

    /// A field from optional parts; `None` when both are absent.
    pub fn try_new(number: Option<i32>, name: Option<&'static str>) -> Option<Self> {
        if number.is_none() && name.is_none() {
            return None;
        }
        Some(Self::from_parts(number, name))
    }
}

impl<N: Namespace, V, A: Access> From<&'static str> for Field<N, V, A> {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl<N: NumericNamespace, V, A: Access> From<i32> for Field<N, V, A> {
    fn from(number: i32) -> Self {
        Self::numeric(number)
    }
}

impl<N, V, A> Clone for Field<N, V, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, V, A> Copy for Field<N, V, A> {}

impl<N, V, A> PartialEq for Field<N, V, A> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.number == other.number
    }
}

impl<N, V, A> Eq for Field<N, V, A> {}

impl<N, V, A> Hash for Field<N, V, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.number.hash(state);
    }
}

impl<N: Namespace, V, A> fmt::Debug for Field<N, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("namespace", &N::NAME)
            .field("name", &self.name)
            .field("number", &self.number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Root;

    crate::namespace! {
        struct Kern: Root = "kern", mib = 1;
    }

    crate::namespace! {
        struct Hypervisor: Kern = "hv";
    }

    #[test]
    fn named_field_has_no_number() {
        let field: Field<Hypervisor, bool> = "supported".into();
        assert_eq!(field.name(), Some("supported"));
        assert_eq!(field.number(), None);
        assert!(!field.is_writable());
    }

    #[test]
    fn numeric_field_in_numeric_namespace() {
        let field: Field<Kern, i32, ReadWrite> = 11.into();
        assert_eq!(field.number(), Some(11));
        assert_eq!(field.name(), None);
        assert!(field.is_writable());
    }

    #[test]
    fn try_new_refuses_empty_parts() {
        assert!(Field::<Kern, i32>::try_new(None, None).is_none());
        assert!(Field::<Kern, i32>::try_new(Some(3), None).is_some());
    }

    #[test]
    #[should_panic(expected = "needs a name or a numeric identifier")]
    fn empty_field_fails_at_construction() {
        let _ = Field::<Kern, i32>::from_parts(None, None);
    }
}
