//! Shared Model Registry
//!
//! Allows registration after startup (hot-loading a widget type while a
//! session is active). Readers load the current registry without locking;
//! writers build a new registry and publish it with a single atomic swap.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{info, warn};

use super::model_registry::ModelRegistry;
use crate::domain::model::{ModelFactory, ModelName};
use crate::domain::registry::RegistryError;

/// Copy-on-write wrapper around a frozen [`ModelRegistry`]
pub struct SharedModelRegistry {
    current: ArcSwap<ModelRegistry>,
    write_lock: Mutex<()>,
}

impl SharedModelRegistry {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            write_lock: Mutex::new(()),
        }
    }

    /// Consistent view of the registry at this moment
    pub fn snapshot(&self) -> Arc<ModelRegistry> {
        self.current.load_full()
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ModelFactory>, RegistryError> {
        self.current.load().resolve(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.current.load().contains(name)
    }

    /// Names registered at this moment, in insertion order
    pub fn list(&self) -> Vec<ModelName> {
        self.current.load().list().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Register a new model while readers may be active
    ///
    /// Writers are serialized; a rejected registration publishes nothing.
    pub fn register(
        &self,
        name: impl Into<String>,
        factory: Arc<dyn ModelFactory>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let _guard = self.write_lock.lock();

        let next = match self.current.load().with_entry(name.clone(), factory) {
            Ok(next) => next,
            Err(e) => {
                warn!(model = %name, error = %e, "Rejected model registration");
                return Err(e);
            }
        };

        self.current.store(Arc::new(next));
        info!(model = %name, "Hot-loaded model");

        Ok(())
    }
}

impl From<ModelRegistry> for SharedModelRegistry {
    fn from(registry: ModelRegistry) -> Self {
        Self::new(registry)
    }
}

impl Default for SharedModelRegistry {
    fn default() -> Self {
        Self::new(ModelRegistry::default())
    }
}

impl fmt::Debug for SharedModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedModelRegistry")
            .field("models", &self.list())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MockModelFactory;

    fn factory() -> Arc<dyn ModelFactory> {
        let mut mock = MockModelFactory::new();
        mock.expect_create().never();
        Arc::new(mock)
    }

    fn seeded() -> SharedModelRegistry {
        ModelRegistry::builder()
            .with("Audio", factory())
            .unwrap()
            .build()
            .into()
    }

    #[test]
    fn test_hot_load_new_model() {
        let shared = seeded();
        let video = factory();

        shared.register("Video", video.clone()).unwrap();

        assert!(Arc::ptr_eq(&shared.resolve("Video").unwrap(), &video));
        let names: Vec<_> = shared.list().into_iter().map(String::from).collect();
        assert_eq!(names, vec!["Audio", "Video"]);
    }

    #[test]
    fn test_hot_load_duplicate_keeps_original() {
        let audio = factory();
        let shared: SharedModelRegistry = ModelRegistry::builder()
            .with("Audio", audio.clone())
            .unwrap()
            .build()
            .into();

        let result = shared.register("Audio", factory());
        assert!(matches!(result, Err(RegistryError::DuplicateName { .. })));
        assert!(Arc::ptr_eq(&shared.resolve("Audio").unwrap(), &audio));
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_hot_load_invalid_name() {
        let shared = seeded();

        let result = shared.register("", factory());
        assert!(matches!(result, Err(RegistryError::InvalidName { .. })));
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_snapshot_is_stable() {
        let shared = seeded();
        let before = shared.snapshot();

        shared.register("Video", factory()).unwrap();

        assert_eq!(before.len(), 1);
        assert!(before.resolve("Video").is_err());
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn test_unknown_model() {
        let shared = SharedModelRegistry::default();

        assert!(shared.is_empty());
        assert!(matches!(
            shared.resolve("Audio"),
            Err(RegistryError::UnknownModel { .. })
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_during_hot_load() {
        let shared = Arc::new(seeded());
        let total = 50;

        let mut readers = Vec::new();
        for _ in 0..4 {
            let shared = shared.clone();
            readers.push(tokio::spawn(async move {
                let mut last_len = 0;
                for _ in 0..500 {
                    assert!(shared.resolve("Audio").is_ok());

                    let snapshot = shared.snapshot();
                    assert!(snapshot.len() >= last_len);
                    last_len = snapshot.len();

                    // every listed name must resolve in the same snapshot
                    for name in snapshot.list() {
                        assert!(snapshot.resolve(name.as_str()).is_ok());
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }

        let writer = {
            let shared = shared.clone();
            tokio::spawn(async move {
                for i in 0..total {
                    shared.register(format!("Widget{}", i), factory()).unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }

        assert_eq!(shared.len(), total + 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_registration() {
        let shared = Arc::new(SharedModelRegistry::default());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.register("Audio", factory()).is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(shared.len(), 1);
    }
}
