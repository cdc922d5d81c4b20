//! Helpers shared by the test suites of the workspace.

pub mod execution_service;
pub mod fixtures;

/// Route log output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
