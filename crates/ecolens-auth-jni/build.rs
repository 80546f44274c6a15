//! Embeds the shared signing secret.
//!
//! `APP_SECRET` must be set and non-empty, otherwise the build fails. The
//! `dev-secret` feature substitutes a development secret for non-release
//! builds only; the test harness enables it, application builds never do.

// Build scripts talk to cargo over stdout
#![allow(clippy::print_stdout)]

#[path = "src/provision.rs"]
mod provision;

use std::{env, error::Error};

use provision::{BuildInputs, DEV_SECRET, resolve_secret};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo::rerun-if-env-changed=APP_SECRET");

    let app_secret = env::var("APP_SECRET").ok();
    let inputs = BuildInputs {
        app_secret: app_secret.as_deref(),
        dev_secret: env::var_os("CARGO_FEATURE_DEV_SECRET").is_some(),
        release: env::var("PROFILE").is_ok_and(|profile| profile == "release"),
    };

    let secret = resolve_secret(inputs)?;
    if inputs.dev_secret && secret == DEV_SECRET {
        println!("cargo::warning=embedding the development secret (dev-secret feature)");
    }

    println!("cargo::rustc-env=ECOLENS_APP_SECRET={secret}");
    Ok(())
}
