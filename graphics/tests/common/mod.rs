//! Common utilities for graphics integration tests.

use vbridge_graphics::{ContextConfig, DummyBackend, DummyProbe, GraphicsContext};

/// Test context pairing a graphics context with a probe into its backend.
pub struct TestContext {
    /// Context under test.
    pub context: GraphicsContext,
    /// Observer for what reached the native side.
    pub probe: DummyProbe,
}

impl TestContext {
    /// Create a context backed by a fresh dummy backend.
    pub fn new() -> Self {
        Self::with_backend(DummyBackend::new())
    }

    /// Create a context around a specific dummy backend.
    pub fn with_backend(backend: DummyBackend) -> Self {
        init_logger();
        let probe = backend.probe();
        let context = GraphicsContext::with_backend(ContextConfig::new(), Box::new(backend));
        Self { context, probe }
    }
}

/// Route `log` output through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
