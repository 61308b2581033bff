// CLASSIFICATION: COMMUNITY
// Filename: memory.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! In-process registry table.
//!
//! Behaves like the kernel registry for the calls the access engine makes and
//! journals every call, which lets catalogue code and the access protocol be
//! exercised off-host.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use sysctl_codec::SysctlValue;

use crate::error::{Errno, Phase};
use crate::resolve::ResolvedPath;

use super::Registry;

/// One call observed by a [`MemoryRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Path the call addressed.
    pub path: ResolvedPath,
    /// Protocol step the call performed.
    pub phase: Phase,
}

#[derive(Debug, Clone)]
struct Entry {
    mib: Option<Vec<i32>>,
    value: Vec<u8>,
    writable: bool,
}

#[derive(Debug, Default)]
struct State {
    entries: BTreeMap<String, Entry>,
    failures: HashMap<ResolvedPath, Errno>,
    translation_failures: HashMap<String, Errno>,
    calls: Vec<CallRecord>,
    translations: Vec<String>,
}

/// Registry backed by an in-memory table.
///
/// Every call and translation is journaled until [`MemoryRegistry::clear_journal`]
/// runs, so long-lived instances should clear the journal periodically.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    state: Mutex<State>,
    numeric_only: bool,
}

impl MemoryRegistry {
    /// An empty registry that accepts both MIBs and names.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry that only accepts MIBs, like `sysctl(3)` alone.
    pub fn numeric_only() -> Self {
        Self {
            numeric_only: true,
            ..Self::default()
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace a read-only entry holding raw bytes.
    pub fn insert(&self, name: &str, mib: Option<&[i32]>, bytes: impl Into<Vec<u8>>) -> &Self {
        self.state().entries.insert(
            name.to_owned(),
            Entry {
                mib: mib.map(<[i32]>::to_vec),
                value: bytes.into(),
                writable: false,
            },
        );
        self
    }

    /// Add or replace a read-only entry holding an encoded value.
    pub fn insert_value<V: SysctlValue>(
        &self,
        name: &str,
        mib: Option<&[i32]>,
        value: &V,
    ) -> &Self {
        let bytes = value.with_raw(<[u8]>::to_vec);
        self.insert(name, mib, bytes)
    }

    /// Allow or refuse writes to an entry.
    pub fn set_writable(&self, name: &str, writable: bool) -> &Self {
        if let Some(entry) = self.state().entries.get_mut(name) {
            entry.writable = writable;
        }
        self
    }

    /// Make every call against `path` fail with `errno`.
    pub fn fail(&self, path: ResolvedPath, errno: Errno) -> &Self {
        self.state().failures.insert(path, errno);
        self
    }

    /// Make translating `name` fail with `errno`.
    pub fn fail_translation(&self, name: &str, errno: Errno) -> &Self {
        self.state()
            .translation_failures
            .insert(name.to_owned(), errno);
        self
    }

    /// Current raw bytes of an entry.
    pub fn bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.state().entries.get(name).map(|entry| entry.value.clone())
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.state().calls.clone()
    }

    /// Names translated so far, oldest first.
    pub fn translations(&self) -> Vec<String> {
        self.state().translations.clone()
    }

    /// Forget journaled calls and translations.
    pub fn clear_journal(&self) {
        let mut state = self.state();
        state.calls.clear();
        state.translations.clear();
    }
}

impl State {
    fn entry_mut(&mut self, path: &ResolvedPath) -> Option<&mut Entry> {
        match path {
            ResolvedPath::Symbolic(name) => self.entries.get_mut(name),
            ResolvedPath::Numeric(mib) => self
                .entries
                .values_mut()
                .find(|entry| entry.mib.as_deref() == Some(mib.as_slice())),
        }
    }
}

impl Registry for MemoryRegistry {
    fn call(
        &self,
        path: &ResolvedPath,
        old: Option<&mut [u8]>,
        new: Option<&[u8]>,
    ) -> Result<usize, Errno> {
        let phase = match (&old, new) {
            (_, Some(_)) => Phase::Submit,
            (Some(_), None) => Phase::Fetch,
            (None, None) => Phase::Probe,
        };
        let mut state = self.state();
        state.calls.push(CallRecord {
            path: path.clone(),
            phase,
        });
        if let Some(errno) = state.failures.get(path) {
            return Err(*errno);
        }
        if self.numeric_only && path.as_symbolic().is_some() {
            return Err(Errno(libc::EINVAL));
        }
        let entry = state.entry_mut(path).ok_or(Errno::NOT_FOUND)?;
        let mut copied = entry.value.len();
        if let Some(buf) = old {
            if buf.len() < entry.value.len() {
                return Err(Errno::NO_MEMORY);
            }
            buf[..entry.value.len()].copy_from_slice(&entry.value);
        } else if new.is_some() {
            copied = 0;
        }
        if let Some(bytes) = new {
            if !entry.writable {
                return Err(Errno::PERMISSION);
            }
            entry.value = bytes.to_vec();
        }
        Ok(copied)
    }

    fn name_to_mib(&self, name: &str) -> Result<Vec<i32>, Errno> {
        let mut state = self.state();
        state.translations.push(name.to_owned());
        if let Some(errno) = state.translation_failures.get(name) {
            return Err(*errno);
        }
        state
            .entries
            .get(name)
            .and_then(|entry| entry.mib.clone())
            .ok_or(Errno::NOT_FOUND)
    }

    fn supports_names(&self) -> bool {
        !self.numeric_only
    }
}
