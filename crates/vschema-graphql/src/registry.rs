//! # Type Registry
//!
//! Tracks the named type and enum definitions emitted during one projection
//! pass. The registry is created at the start of a projection call, threaded
//! by `&mut` through every resolution step and dropped at the end; nothing
//! leaks between calls.
//!
//! Registration order is emission order: [`TypeRegistry::all`] returns
//! definitions in the order they were first registered, which makes the
//! generated document deterministic for a given schema tree.

use std::collections::{HashMap, HashSet};

/// Per-projection store of emitted definitions.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// `(name, definition)` in registration order.
    types: Vec<(String, String)>,
    /// Names present in `types`.
    names: HashSet<String>,
    /// Next suffix to mint, per base name.
    counters: HashMap<String, usize>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `definition` under `name`.
    ///
    /// Returns `false` and keeps the existing entry if `name` is already
    /// registered, so the first definition and its position win.
    pub fn register(&mut self, name: impl Into<String>, definition: impl Into<String>) -> bool {
        let name = name.into();
        if self.names.contains(&name) {
            return false;
        }
        tracing::debug!(type_name = %name, "registered GraphQL type");
        self.names.insert(name.clone());
        self.types.push((name, definition.into()));
        true
    }

    /// Records `definition` under `name`, overwriting an existing entry in
    /// place. A new name is appended.
    pub fn replace(&mut self, name: impl Into<String>, definition: impl Into<String>) {
        let name = name.into();
        match self.types.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => {
                tracing::debug!(type_name = %name, "replaced GraphQL type");
                *existing = definition.into();
            }
            None => {
                self.register(name, definition);
            }
        }
    }

    /// Returns true if a definition is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `base` the first time it is asked for, then `base1`, `base2`, …
    ///
    /// Counters are independent per base string. Minted names are not
    /// registered; the caller registers them once the definition is built.
    pub fn generate_unique_name(&mut self, base: &str) -> String {
        let count = self.counters.entry(base.to_string()).or_insert(0);
        let name = if *count == 0 {
            base.to_string()
        } else {
            format!("{base}{count}")
        };
        *count += 1;
        name
    }

    /// All definitions, in registration order.
    pub fn all(&self) -> Vec<&str> {
        self.types.iter().map(|(_, d)| d.as_str()).collect()
    }

    /// Looks up the definition registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Drops all definitions and name counters.
    pub fn clear(&mut self) {
        self.types.clear();
        self.names.clear();
        self.counters.clear();
    }
}
