//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;

use super::{Backend, DemoBackend, OfflineBackend};
use crate::config::BackendConfig;

/// Create a backend instance from the `[backend]` section.
///
/// # Errors
/// Returns error if the backend type is unknown or the demo data cannot be parsed.
pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn Backend>> {
    match config.backend_type.as_str() {
        "demo" => {
            let backend = DemoBackend::new(Duration::from_millis(config.latency_ms), config.fail_mutations)?;
            Ok(Arc::new(backend))
        }
        "offline" => Ok(Arc::new(OfflineBackend)),
        other => Err(anyhow!("Unknown backend type: {}", other)),
    }
}
