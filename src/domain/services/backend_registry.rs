//! Backend registry
//!
//! Pure mapping from a deployment target to the backend that serves it.
//! Selection never branches anywhere else.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ports::TargetBackend;
use crate::domain::value_objects::DeployTarget;
use crate::error::ConfigurationError;

#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: HashMap<DeployTarget, Arc<dyn TargetBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under its own target, replacing any previous one.
    pub fn register(mut self, backend: Arc<dyn TargetBackend>) -> Self {
        self.backends.insert(backend.target(), backend);
        self
    }

    pub fn resolve(&self, target: DeployTarget) -> Result<Arc<dyn TargetBackend>, ConfigurationError> {
        self.backends
            .get(&target)
            .cloned()
            .ok_or(ConfigurationError::NoBackend(target))
    }

    /// Registered targets in canonical order
    pub fn targets(&self) -> Vec<DeployTarget> {
        DeployTarget::ALL
            .into_iter()
            .filter(|t| self.backends.contains_key(t))
            .collect()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("targets", &self.targets())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeploymentConfig;
    use crate::domain::ports::BackendStage;
    use crate::domain::services::ProgressChannel;
    use crate::error::DeployResult;

    struct Stub(DeployTarget);

    impl TargetBackend for Stub {
        fn target(&self) -> DeployTarget {
            self.0
        }

        fn stages(&self, _config: &DeploymentConfig) -> Vec<BackendStage> {
            Vec::new()
        }

        fn deploy(
            &self,
            _config: &DeploymentConfig,
            _progress: &mut ProgressChannel<'_>,
        ) -> DeployResult<()> {
            Ok(())
        }
    }

    #[test]
    fn resolves_registered_target() {
        let registry = BackendRegistry::new().register(Arc::new(Stub(DeployTarget::Local)));
        let backend = registry.resolve(DeployTarget::Local).unwrap();
        assert_eq!(backend.target(), DeployTarget::Local);
    }

    #[test]
    fn missing_target_is_configuration_error() {
        let registry = BackendRegistry::new().register(Arc::new(Stub(DeployTarget::Local)));
        let err = registry.resolve(DeployTarget::Aws).err().unwrap();
        assert_eq!(err, ConfigurationError::NoBackend(DeployTarget::Aws));
    }

    #[test]
    fn targets_follow_canonical_order() {
        let registry = BackendRegistry::new()
            .register(Arc::new(Stub(DeployTarget::Local)))
            .register(Arc::new(Stub(DeployTarget::Aws)));
        assert_eq!(registry.targets(), vec![DeployTarget::Aws, DeployTarget::Local]);
    }
}
