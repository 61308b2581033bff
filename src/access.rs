// CLASSIFICATION: COMMUNITY
// Filename: access.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Registry access protocol.
//!
//! Reads probe for the value size, fetch into a buffer of that size and
//! decode. Writes encode into a scoped buffer and submit it in one call.
//! Nothing is cached or retried between calls.

use sysctl_codec::SysctlValue;

use crate::error::{Errno, Phase, Primitive, SysctlError, SysctlResult};
use crate::registry::Registry;
use crate::resolve::ResolvedPath;

fn call_failed(path: &ResolvedPath, phase: Phase, errno: Errno) -> SysctlError {
    let primitive = Primitive::for_path(path);
    log::warn!("{primitive} failed when {phase} '{path}': {errno}");
    SysctlError::Call {
        primitive,
        phase,
        path: path.clone(),
        errno,
    }
}

/// Probe the number of bytes the value at `path` currently needs.
pub fn probe<R: Registry + ?Sized>(registry: &R, path: &ResolvedPath) -> SysctlResult<usize> {
    let size = registry
        .call(path, None, None)
        .map_err(|errno| call_failed(path, Phase::Probe, errno))?;
    log::trace!("probe '{path}': {size} bytes");
    Ok(size)
}

/// Fetch the raw bytes at `path`.
///
/// The returned buffer is truncated to the length the fetch reported.
pub fn fetch<R: Registry + ?Sized>(registry: &R, path: &ResolvedPath) -> SysctlResult<Vec<u8>> {
    let size = probe(registry, path)?;
    let mut buffer = vec![0u8; size];
    let fetched = registry
        .call(path, Some(buffer.as_mut_slice()), None)
        .map_err(|errno| call_failed(path, Phase::Fetch, errno))?;
    log::trace!("fetch '{path}': {fetched} of {size} bytes");
    buffer.truncate(fetched);
    Ok(buffer)
}

/// Read and decode the value at `path`.
pub fn read<V: SysctlValue, R: Registry + ?Sized>(
    registry: &R,
    path: &ResolvedPath,
) -> SysctlResult<V> {
    let buffer = fetch(registry, path)?;
    sysctl_codec::decode(&buffer).map_err(|source| {
        log::warn!("decode of '{path}' failed: {source}");
        SysctlError::Decode {
            path: path.clone(),
            source,
        }
    })
}

/// Encode `value` and submit it to `path`.
pub fn write<V: SysctlValue, R: Registry + ?Sized>(
    registry: &R,
    path: &ResolvedPath,
    value: &V,
) -> SysctlResult<()> {
    value
        .with_raw(|bytes| {
            log::debug!("submit '{path}': {} bytes", bytes.len());
            registry.call(path, None, Some(bytes))
        })
        .map(|_| ())
        .map_err(|errno| call_failed(path, Phase::Submit, errno))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;

    fn mib(parts: &[i32]) -> ResolvedPath {
        ResolvedPath::Numeric(parts.to_vec())
    }

    #[test]
    fn read_probes_then_fetches() {
        let registry = MemoryRegistry::new();
        registry.insert_value("hw.ncpu", Some(&[6, 3]), &8i32);
        let value: i32 = read(&registry, &mib(&[6, 3])).expect("read ncpu");
        assert_eq!(value, 8);
        let phases: Vec<Phase> = registry.calls().iter().map(|call| call.phase).collect();
        assert_eq!(phases, [Phase::Probe, Phase::Fetch]);
    }

    #[test]
    fn probe_failure_names_the_probe() {
        let registry = MemoryRegistry::new();
        let err = read::<i32, _>(&registry, &mib(&[6, 99])).expect_err("missing field");
        match err {
            SysctlError::Call {
                primitive,
                phase,
                errno,
                ..
            } => {
                assert_eq!(primitive, Primitive::Sysctl);
                assert_eq!(phase, Phase::Probe);
                assert_eq!(errno, Errno::NOT_FOUND);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(registry.calls().len(), 1);
    }

    #[test]
    fn zero_sized_value_still_fetches() {
        let registry = MemoryRegistry::new();
        registry.insert("kern.empty", None, Vec::<u8>::new());
        let path = ResolvedPath::Symbolic("kern.empty".into());
        assert_eq!(fetch(&registry, &path).expect("fetch"), Vec::<u8>::new());
        assert_eq!(registry.calls().len(), 2);
    }

    #[test]
    fn write_submits_once() {
        let registry = MemoryRegistry::new();
        registry.insert_value("kern.maxfiles", Some(&[1, 7]), &1024i32);
        registry.set_writable("kern.maxfiles", true);
        write(&registry, &mib(&[1, 7]), &4096i32).expect("write maxfiles");
        assert_eq!(registry.bytes("kern.maxfiles"), Some(4096i32.to_ne_bytes().to_vec()));
        let calls = registry.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].phase, Phase::Submit);
    }
}
