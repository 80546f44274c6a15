//! Test harness for the EcoLens JNI bridge.
//!
//! Builds the bridge with the `dev-secret` feature so the workspace tests run
//! without a provisioned `APP_SECRET`. Application builds never depend on this
//! crate, so they still require the real secret.
//!
//! # JVM Tests
//!
//! Tests that drive the exported entry point through a live JVM are behind
//! the `jvm` feature and need a JDK (`JAVA_HOME`):
//!
//! ```bash
//! cargo test -p ecolens-auth-harness --features jvm
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "jvm")]
pub mod jvm;

#[cfg(feature = "jvm")]
pub use jvm::test_jvm;
