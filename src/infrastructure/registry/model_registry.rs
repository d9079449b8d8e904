//! Model Registry
//!
//! Maps model names to their factories. A `RegistryBuilder` collects
//! registrations at startup; `build()` freezes them into a `ModelRegistry`
//! that is only ever read afterwards.

use std::fmt;
use std::sync::Arc;

use indexmap::map::Keys;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::domain::model::{ModelDescriptor, ModelEntry, ModelFactory, ModelName};
use crate::domain::registry::RegistryError;

type FactoryMap = IndexMap<ModelName, Arc<dyn ModelFactory>>;

/// Insert a new entry, rejecting malformed and duplicate names.
///
/// On error the map is left untouched.
fn insert_entry(
    entries: &mut FactoryMap,
    name: String,
    factory: Arc<dyn ModelFactory>,
) -> Result<(), RegistryError> {
    let model_name = match ModelName::new(name.as_str()) {
        Ok(model_name) => model_name,
        Err(reason) => return Err(RegistryError::invalid_name(name, reason)),
    };

    if entries.contains_key(&model_name) {
        return Err(RegistryError::duplicate_name(name));
    }

    debug!(model = %model_name, "Registering model");
    entries.insert(model_name, factory);

    Ok(())
}

/// Collects registrations before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    entries: FactoryMap,
}

impl RegistryBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`
    ///
    /// Duplicate names are rejected; the first registration stays in place.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn ModelFactory>,
    ) -> Result<(), RegistryError> {
        insert_entry(&mut self.entries, name.into(), factory)
    }

    /// Chaining form of [`register`](Self::register)
    pub fn with(
        mut self,
        name: impl Into<String>,
        factory: Arc<dyn ModelFactory>,
    ) -> Result<Self, RegistryError> {
        self.register(name, factory)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the registrations into a read-only registry
    pub fn build(self) -> ModelRegistry {
        info!(count = self.entries.len(), "Model registry built");
        ModelRegistry {
            entries: self.entries,
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("models", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Read-only mapping from model names to factories
///
/// Lookups are plain map reads, so a `ModelRegistry` can be shared across
/// threads behind an `Arc` without locking.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    entries: FactoryMap,
}

impl ModelRegistry {
    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve a name to its factory
    ///
    /// `name` is matched exactly (case-sensitive) and is never validated, so
    /// any string that was not registered yields `UnknownModel`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ModelFactory>, RegistryError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown_model(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in insertion order
    ///
    /// The iterator is `Clone`, and every call starts from the beginning.
    pub fn list(&self) -> ModelNames<'_> {
        ModelNames {
            inner: self.entries.keys(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry registered under `name`
    pub fn entry(&self, name: &str) -> Option<ModelEntry> {
        self.entries
            .get_key_value(name)
            .map(|(name, factory)| ModelEntry::new(name.clone(), factory.clone()))
    }

    /// All entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = ModelEntry> + '_ {
        self.entries
            .iter()
            .map(|(name, factory)| ModelEntry::new(name.clone(), factory.clone()))
    }

    /// Descriptors for every registered model, for diagnostics
    pub fn describe_all(&self) -> Vec<(ModelName, ModelDescriptor)> {
        self.entries
            .iter()
            .map(|(name, factory)| (name.clone(), factory.describe()))
            .collect()
    }

    /// Reopen the registry for further registration
    pub fn into_builder(self) -> RegistryBuilder {
        RegistryBuilder {
            entries: self.entries,
        }
    }

    /// Copy of this registry with one more entry
    pub(crate) fn with_entry(
        &self,
        name: String,
        factory: Arc<dyn ModelFactory>,
    ) -> Result<Self, RegistryError> {
        let mut entries = self.entries.clone();
        insert_entry(&mut entries, name, factory)?;
        Ok(Self { entries })
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over registered model names
#[derive(Clone)]
pub struct ModelNames<'a> {
    inner: Keys<'a, ModelName, Arc<dyn ModelFactory>>,
}

impl<'a> Iterator for ModelNames<'a> {
    type Item = &'a ModelName;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ModelNames<'_> {}
