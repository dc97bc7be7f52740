//! Operator registry
//!
//! Maps operator names (and their aliases) to implementations. A registry
//! instance is seeded with the built-ins, optionally extended with custom
//! operators, then handed to `Predicate::compile`. Extension must finish
//! before evaluation traffic starts; the registry is not synchronized and
//! concurrent `register` calls are the caller's problem to serialize.

use crate::error::{EngineError, Result};
use crate::operators::{comparison, pattern, sets, Operator};
use std::collections::HashMap;
use std::sync::Arc;

/// A shared operator implementation; aliases hold clones of the same `Arc`
pub type SharedOperator = Arc<dyn Operator>;

/// What a registry name resolves to
pub enum OperatorEntry {
    /// An invokable operator
    Callable(SharedOperator),
    /// The `assigned` sentinel. Presence testing needs the raw lookup
    /// result (absent vs present), so the evaluator handles it directly
    /// instead of calling through the operator shape.
    Assigned,
}

/// Insertion-guarded mapping from operator name to implementation
pub struct OperatorRegistry {
    entries: HashMap<String, OperatorEntry>,
}

impl OperatorRegistry {
    /// Create a registry pre-populated with the built-in operators and
    /// their aliases
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };

        registry.seed(&["eq", "==="], Arc::new(comparison::eq));
        registry.seed(&["ne", "!=="], Arc::new(comparison::ne));
        registry.seed(&["gt", ">"], Arc::new(comparison::gt));
        registry.seed(&["ge", ">=", "greater"], Arc::new(comparison::ge));
        registry.seed(&["lt", "<"], Arc::new(comparison::lt));
        registry.seed(&["le", "<=", "less"], Arc::new(comparison::le));
        registry.seed(&["intersection", "∩"], Arc::new(sets::intersection));
        registry.seed(&["difference", "∆"], Arc::new(sets::difference));
        registry.seed(&["arrayEquals", "="], Arc::new(sets::array_equals));
        registry.seed(&["belongs", "∈", "includes", "has"], Arc::new(sets::belongs));
        registry.seed(&["regex"], Arc::new(pattern::regex));
        registry.seed(&["length"], Arc::new(pattern::length));
        registry
            .entries
            .insert("assigned".to_string(), OperatorEntry::Assigned);

        registry
    }

    fn seed(&mut self, names: &[&str], op: SharedOperator) {
        for name in names {
            self.entries
                .insert((*name).to_string(), OperatorEntry::Callable(Arc::clone(&op)));
        }
    }

    /// Register a custom operator.
    ///
    /// The one mutation path, and it never overwrites: a name that already
    /// exists, built-in or previously registered, is rejected with
    /// `EngineError::DuplicateOperator` and the existing entry stands.
    /// There is no unregister.
    pub fn register<O>(&mut self, name: impl Into<String>, op: O) -> Result<()>
    where
        O: Operator + 'static,
    {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(EngineError::DuplicateOperator(name));
        }
        tracing::debug!("registering custom operator {:?}", name);
        self.entries.insert(name, OperatorEntry::Callable(Arc::new(op)));
        Ok(())
    }

    /// Resolve a name to its entry
    pub fn lookup(&self, name: &str) -> Option<&OperatorEntry> {
        self.entries.get(name)
    }

    /// Check whether a name is registered
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
