// CLASSIFICATION: COMMUNITY
// Filename: container.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Path-chainable accessors over the namespace tree.

use sysctl_codec::SysctlValue;

use crate::access;
use crate::config::AccessConfig;
use crate::error::SysctlResult;
use crate::field::{Field, ReadWrite};
use crate::namespace::{Namespace, Root};
use crate::registry::{Registry, SystemRegistry};
use crate::resolve::{self, FieldPaths, ResolvedPath};

/// Accessor for the children and fields of namespace `N`.
///
/// ```no_run
/// use syscontrol::catalogue::{Hardware, Kernel};
/// use syscontrol::Root;
///
/// let sysctl = syscontrol::system();
/// let cpus = sysctl.child(Root::hardware).get(Hardware::cpu_count)?;
/// let host = sysctl.child(Root::kernel).get(Kernel::hostname)?;
/// println!("{host}: {cpus} cpus");
/// # Ok::<(), syscontrol::SysctlError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Container<N, R> {
    namespace: N,
    registry: R,
    config: AccessConfig,
}

/// The root accessor over the host registry.
pub type SystemControl = Container<Root, SystemRegistry>;

/// The process-wide root accessor, configured from the environment.
pub fn system() -> SystemControl {
    Container::new(Root, SystemRegistry).with_config(AccessConfig::shared())
}

impl<R: Registry> Container<Root, R> {
    /// Root accessor over `registry` with the default configuration.
    pub fn root(registry: R) -> Self {
        Container::new(Root, registry)
    }
}

impl<N: Namespace, R: Registry> Container<N, R> {
    /// Accessor for `namespace` over `registry`.
    pub fn new(namespace: N, registry: R) -> Self {
        Self {
            namespace,
            registry,
            config: AccessConfig::default(),
        }
    }

    /// Replace the access configuration.
    #[must_use]
    pub fn with_config(mut self, config: AccessConfig) -> Self {
        self.config = config;
        self
    }

    /// The namespace this accessor points at.
    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    /// The registry this accessor talks to.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> AccessConfig {
        self.config
    }

    /// Descend into the child namespace returned by `select`.
    pub fn child<C>(&self, select: impl FnOnce(&N) -> C) -> Container<C, R>
    where
        C: Namespace<Parent = N>,
        R: Clone,
    {
        Container {
            namespace: select(&self.namespace),
            registry: self.registry.clone(),
            config: self.config,
        }
    }

    /// Descend into child namespace `C`.
    pub fn descend<C>(&self) -> Container<C, R>
    where
        C: Namespace<Parent = N>,
        R: Clone,
    {
        self.child(|_| C::default())
    }

    /// Both resolutions of the selected field.
    pub fn paths<V, A>(&self, select: impl FnOnce(&N) -> Field<N, V, A>) -> FieldPaths {
        resolve::describe(&select(&self.namespace))
    }

    /// The path the selected field resolves to under the active preference.
    pub fn resolve<V, A>(&self, select: impl FnOnce(&N) -> Field<N, V, A>) -> ResolvedPath {
        resolve::resolve(&select(&self.namespace), self.config.prefer)
    }

    fn lookup_key<V, A>(&self, field: &Field<N, V, A>) -> SysctlResult<ResolvedPath> {
        let path = resolve::resolve(field, self.config.prefer);
        resolve::lookup_key(&self.registry, path, self.config.translate_names)
    }

    /// Read the selected field.
    pub fn get<V: SysctlValue, A>(
        &self,
        select: impl FnOnce(&N) -> Field<N, V, A>,
    ) -> SysctlResult<V> {
        self.read(&select(&self.namespace))
    }

    /// Write the selected field.
    pub fn set<V: SysctlValue>(
        &self,
        select: impl FnOnce(&N) -> Field<N, V, ReadWrite>,
        value: &V,
    ) -> SysctlResult<()> {
        self.write(&select(&self.namespace), value)
    }

    /// Read `field`.
    pub fn read<V: SysctlValue, A>(&self, field: &Field<N, V, A>) -> SysctlResult<V> {
        let key = self.lookup_key(field)?;
        access::read(&self.registry, &key)
    }

    /// Write `field`.
    pub fn write<V: SysctlValue>(
        &self,
        field: &Field<N, V, ReadWrite>,
        value: &V,
    ) -> SysctlResult<()> {
        let key = self.lookup_key(field)?;
        access::write(&self.registry, &key, value)
    }
}
