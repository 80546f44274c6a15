//! JNI boundary tests against a live JVM.
//!
//! Exercise `calculateHMAC` the way the Android app calls it: Java strings
//! in, Java strings (or `null`) out, with no stray pending exceptions.

#![cfg(feature = "jvm")]

use ecolens_auth::TAG_LEN;
use ecolens_auth_harness::test_jvm;
use ecolens_auth_jni::{
    Java_com_nguyendevs_ecolens_network_NativeSecurityManager_calculateHMAC, calculate_hmac,
    embedded_signer,
};
use jni::objects::{JObject, JString};

fn expected_tag(message: &str) -> String {
    embedded_signer().sign(message.as_bytes()).into_string()
}

#[test]
fn null_message_returns_null_without_exception() {
    let jvm = test_jvm().unwrap();
    let mut env = jvm.attach_current_thread().unwrap();

    let message = JString::from(JObject::null());
    let result = calculate_hmac(&mut env, &message);

    assert!(result.is_none(), "null message must map to null");
    assert!(!env.exception_check().unwrap(), "null message must not raise");
}

#[test]
fn message_returns_hex_tag() {
    let jvm = test_jvm().unwrap();
    let mut env = jvm.attach_current_thread().unwrap();

    let message = env.new_string("hello").unwrap();
    let tag = calculate_hmac(&mut env, &message).unwrap();
    let text: String = env.get_string(&tag).unwrap().into();

    assert_eq!(text.len(), TAG_LEN);
    assert_eq!(text, expected_tag("hello"));
}

#[test]
fn empty_and_non_ascii_messages_sign_as_utf8() {
    let jvm = test_jvm().unwrap();
    let mut env = jvm.attach_current_thread().unwrap();

    for input in ["", "GET:/api/identify:1700000000000:req-1", "héllo ✓"] {
        let message = env.new_string(input).unwrap();
        let tag = calculate_hmac(&mut env, &message).unwrap();
        let text: String = env.get_string(&tag).unwrap().into();
        assert_eq!(text, expected_tag(input), "tag mismatch for {input:?}");
    }
}

#[test]
#[allow(unsafe_code)]
fn exported_symbol_matches_safe_entry_point() {
    let jvm = test_jvm().unwrap();
    let mut env = jvm.attach_current_thread().unwrap();

    let message = env.new_string("hello").unwrap();
    // SAFETY: the clone is only used for this call on the attached thread
    let call_env = unsafe { env.unsafe_clone() };
    let raw = Java_com_nguyendevs_ecolens_network_NativeSecurityManager_calculateHMAC(
        call_env,
        JObject::null(),
        message,
    );
    assert!(!raw.is_null());

    // SAFETY: `raw` is a live local reference returned by the call above
    let tag = unsafe { JString::from_raw(raw) };
    let text: String = env.get_string(&tag).unwrap().into();
    assert_eq!(text, expected_tag("hello"));

    // SAFETY: as above, used only for this call on the attached thread
    let call_env = unsafe { env.unsafe_clone() };
    let raw = Java_com_nguyendevs_ecolens_network_NativeSecurityManager_calculateHMAC(
        call_env,
        JObject::null(),
        JString::from(JObject::null()),
    );
    assert!(raw.is_null(), "null message must map to null");
    assert!(!env.exception_check().unwrap());
}
