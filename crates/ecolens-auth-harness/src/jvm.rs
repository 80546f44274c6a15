//! Shared in-process JVM.

use std::sync::OnceLock;

use jni::{InitArgsBuilder, JNIVersion, JavaVM};

static JVM: OnceLock<Result<JavaVM, String>> = OnceLock::new();

/// The process-wide test JVM, started on first use.
///
/// JNI allows one JVM per process, so every test shares this instance and
/// attaches its own thread.
pub fn test_jvm() -> Result<&'static JavaVM, String> {
    JVM.get_or_init(start_jvm).as_ref().map_err(Clone::clone)
}

fn start_jvm() -> Result<JavaVM, String> {
    let args = InitArgsBuilder::new()
        .version(JNIVersion::V8)
        .option("-Xcheck:jni")
        .build()
        .map_err(|e| format!("invalid JVM arguments: {e}"))?;
    JavaVM::new(args).map_err(|e| format!("failed to start JVM: {e}"))
}
