//! JNI bridge for EcoLens request signing
//!
//! Exposes `NativeSecurityManager.calculateHMAC(String): String` to the
//! Android app. The message is borrowed from the JVM for the duration of the
//! call, signed with the embedded secret, and the tag is returned as a new
//! local `java.lang.String` owned by the caller.
//!
//! # Failure values
//!
//! - `null` message: returns `null`, no exception
//! - message unreadable: returns `null`, no exception
//! - result string cannot be allocated: returns `null` with a pending Java
//!   exception
//!
//! # Build configuration
//!
//! `APP_SECRET` must be set at build time. The `dev-secret` feature embeds a
//! development secret instead, for non-release test builds only.

#![deny(missing_docs)]

pub mod embedded;
pub mod error;
#[cfg(test)]
mod provision;

use ecolens_auth::SignerError;
use jni::{
    JNIEnv,
    objects::{JObject, JString},
    sys::jstring,
};

pub use embedded::embedded_signer;
pub use error::BoundaryError;

/// JNI entry point for `com.nguyendevs.ecolens.network.NativeSecurityManager.calculateHMAC`.
///
/// Returns the 64-character lowercase hex HMAC-SHA256 tag of `message`, or
/// `null` on failure.
// Symbol name is fixed by the JNI naming convention
#[allow(non_snake_case, unsafe_code)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_nguyendevs_ecolens_network_NativeSecurityManager_calculateHMAC<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    message: JString<'local>,
) -> jstring {
    calculate_hmac(&mut env, &message).map_or(std::ptr::null_mut(), JString::into_raw)
}

/// Sign a JVM string with the embedded secret.
///
/// Returns `None` where the Java caller sees `null`. A JVM-side failure
/// leaves a Java exception pending; rejected input does not.
pub fn calculate_hmac<'local>(
    env: &mut JNIEnv<'local>,
    message: &JString<'_>,
) -> Option<JString<'local>> {
    match sign_message(env, message) {
        Ok(tag) => Some(tag),
        Err(err) => {
            tracing::warn!(error = %err, "calculateHMAC failed");
            if err.raises_exception() {
                raise_if_clear(env);
            }
            None
        },
    }
}

/// Read, sign and marshal one message.
fn sign_message<'local>(
    env: &mut JNIEnv<'local>,
    message: &JString<'_>,
) -> Result<JString<'local>, BoundaryError> {
    let message = read_message(env, message)?;
    let tag = embedded_signer().calculate_tag(message.as_deref())?;
    Ok(env.new_string(tag.into_string())?)
}

/// Copy the message out of the JVM, releasing the borrowed UTF chars before
/// returning.
fn read_message(
    env: &mut JNIEnv<'_>,
    message: &JString<'_>,
) -> Result<Option<String>, SignerError> {
    if message.is_null() {
        return Ok(None);
    }

    let chars = env
        .get_string(message)
        .map_err(|e| SignerError::UnreadableMessage { reason: e.to_string() })?;
    Ok(Some(String::from(chars)))
}

/// Throw `IllegalStateException` unless the JVM already has one pending.
fn raise_if_clear(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(true) {
        return;
    }
    if let Err(e) = env.throw_new("java/lang/IllegalStateException", "failed to return request tag")
    {
        tracing::error!(error = %e, "failed to raise exception for calculateHMAC");
    }
}
