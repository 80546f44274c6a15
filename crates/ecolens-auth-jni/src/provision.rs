//! Build-time secret resolution.
//!
//! Compiled into the build script and into the crate's unit tests; it has no
//! runtime role.

/// Development-only secret, used solely with the `dev-secret` feature
pub const DEV_SECRET: &str = "testsecret";

/// Build inputs that decide which secret gets embedded.
#[derive(Debug, Clone, Copy)]
pub struct BuildInputs<'a> {
    /// Value of `APP_SECRET`, if set
    pub app_secret: Option<&'a str>,
    /// Whether the `dev-secret` feature is enabled
    pub dev_secret: bool,
    /// Whether this is a release profile build
    pub release: bool,
}

/// Pick the secret to embed, or the reason the build must fail.
///
/// A configured `APP_SECRET` always wins. Without one the build fails,
/// unless `dev-secret` was requested for a non-release profile.
pub fn resolve_secret(inputs: BuildInputs<'_>) -> Result<&str, &'static str> {
    if inputs.dev_secret && inputs.release {
        return Err("the dev-secret feature is not allowed in release builds");
    }

    match inputs.app_secret {
        Some(secret) if secret.contains(['\n', '\r']) => {
            Err("APP_SECRET must be a single line")
        },
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ if inputs.dev_secret => Ok(DEV_SECRET),
        _ => Err("APP_SECRET is not set; a signing secret is required to build"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(app_secret: Option<&str>, dev_secret: bool, release: bool) -> BuildInputs<'_> {
        BuildInputs { app_secret, dev_secret, release }
    }

    #[test]
    fn missing_secret_fails_default_build() {
        assert!(resolve_secret(inputs(None, false, false)).is_err());
        assert!(resolve_secret(inputs(None, false, true)).is_err());
    }

    #[test]
    fn empty_secret_fails_default_build() {
        assert!(resolve_secret(inputs(Some(""), false, false)).is_err());
    }

    #[test]
    fn configured_secret_is_embedded() {
        assert_eq!(resolve_secret(inputs(Some("s3cr3t"), false, true)), Ok("s3cr3t"));
        assert_eq!(resolve_secret(inputs(Some("s3cr3t"), true, false)), Ok("s3cr3t"));
    }

    #[test]
    fn dev_secret_requires_opt_in() {
        assert_eq!(resolve_secret(inputs(None, true, false)), Ok(DEV_SECRET));
        assert_eq!(resolve_secret(inputs(Some(""), true, false)), Ok(DEV_SECRET));
    }

    #[test]
    fn dev_secret_rejected_in_release() {
        assert!(resolve_secret(inputs(None, true, true)).is_err());
        assert!(resolve_secret(inputs(Some("s3cr3t"), true, true)).is_err());
    }

    #[test]
    fn multiline_secret_rejected() {
        assert!(resolve_secret(inputs(Some("a\nb"), false, false)).is_err());
    }
}
