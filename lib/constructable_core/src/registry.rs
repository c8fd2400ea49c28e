use crate::error::{invalid_descriptor, Error};
use crate::factory::Constructable;
use serde::Serialize;
use std::collections::HashMap;

/// A named, first-class construction capability.
///
/// Invoking it yields a fresh boxed instance of the concrete class it was
/// made from, erased to `S` (usually a trait object). Descriptors hold no
/// runtime state and are never mutated.
pub struct Descriptor<S: ?Sized> {
    name: &'static str,
    produces: &'static str,
    build: fn() -> Box<S>,
}

impl<S: ?Sized> Descriptor<S> {
    pub fn new(
        name: &'static str,
        produces: &'static str,
        build: fn() -> Box<S>,
    ) -> Descriptor<S> {
        Descriptor {
            name,
            produces,
            build,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name of the concrete class this descriptor builds.
    pub fn produces(&self) -> &'static str {
        self.produces
    }

    /// Invoke the construct signature. Always yields a fully initialized
    /// instance; there is no partial-construction state.
    pub fn construct(&self) -> Box<S> {
        (self.build)()
    }
}

impl<T: Constructable> Descriptor<T> {
    /// Shorthand for classes whose erased and concrete types coincide.
    pub fn of(name: &'static str) -> Descriptor<T> {
        Descriptor::new(name, std::any::type_name::<T>(), || {
            Box::new(T::construct())
        })
    }
}

impl<S: ?Sized> std::fmt::Debug for Descriptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Descriptor({} -> {})", self.name, self.produces)
    }
}

/// Name-keyed set of descriptors, for call sites that pick the class to
/// construct at runtime.
#[derive(Debug)]
pub struct Registry<S: ?Sized> {
    entries: HashMap<&'static str, Descriptor<S>>,
}

impl<S: ?Sized> Default for Registry<S> {
    fn default() -> Self {
        Registry {
            entries: HashMap::new(),
        }
    }
}

impl<S: ?Sized> Registry<S> {
    pub fn new() -> Registry<S> {
        Default::default()
    }

    /// Register a descriptor under its class name. Re-registering a name
    /// replaces the previous descriptor.
    pub fn register(&mut self, descriptor: Descriptor<S>) {
        let name = descriptor.name;
        if self.entries.insert(name, descriptor).is_some() {
            log::warn!("descriptor `{}` registered twice; keeping the last", name);
        }
    }

    /// Look up a descriptor. Unknown names fail fast with `InvalidDescriptor`.
    pub fn get(&self, name: &str) -> Result<&Descriptor<S>, Error> {
        self.entries.get(name).ok_or_else(|| {
            invalid_descriptor(&format!("no constructable class named `{}`", name))
        })
    }

    /// Resolve `name` and invoke its construct signature.
    pub fn construct(&self, name: &str) -> Result<Box<S>, Error> {
        Ok(self.get(name)?.construct())
    }

    /// Listing records for every registered descriptor, sorted by name.
    pub fn info(&self) -> Vec<DescriptorInfo> {
        let mut infos = self
            .entries
            .values()
            .map(|d| DescriptorInfo {
                name: d.name.to_string(),
                produces: d.produces.to_string(),
            })
            .collect::<Vec<_>>();
        infos.sort();
        infos
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializable record describing one descriptor (for tooling output).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DescriptorInfo {
    pub name: String,
    pub produces: String,
}
