//! Process-wide signer keyed by the build-time secret.

use std::sync::OnceLock;

use ecolens_auth::{Signer, StaticSecret};

/// Secret injected by the build script.
const APP_SECRET: &str = env!("ECOLENS_APP_SECRET");

const _: () = assert!(!APP_SECRET.is_empty(), "embedded APP_SECRET must not be empty");

static SIGNER: OnceLock<Signer<StaticSecret>> = OnceLock::new();

/// Signer over the embedded secret.
///
/// Initialized exactly once on first use; every later call reads the same
/// instance without synchronization.
pub fn embedded_signer() -> &'static Signer<StaticSecret> {
    SIGNER.get_or_init(init_signer)
}

fn init_signer() -> Signer<StaticSecret> {
    let Ok(secret) = StaticSecret::new(APP_SECRET.as_bytes()) else {
        unreachable!("embedded secret is checked non-empty at compile time");
    };
    tracing::debug!("initialized embedded signer");
    Signer::new(secret)
}
