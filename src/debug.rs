//! Debug logging module for the settlement ID contract.
//!
//! This module provides conditional debug logging that is only enabled
//! when the "debug-log" feature flag is active. Logs go to the host's
//! diagnostic stream and never affect computed IDs.

use soroban_sdk::{BytesN, Env};

/// Debug log macro that only compiles and runs in debug builds.
///
/// # Usage
/// Enable the "debug-log" feature in Cargo.toml to activate debug logging:
/// ```toml
/// [features]
/// default = ["debug-log"]
/// debug-log = []
/// ```
///
/// Then use the macro in your code:
/// ```ignore
/// debug_log!(&env, "Settlement id computed: {}", value);
/// ```
#[macro_export]
#[cfg(feature = "debug-log")]
macro_rules! debug_log {
    ($env:expr, $msg:literal) => {
        soroban_sdk::log!($env, $msg)
    };
    ($env:expr, $msg:literal, $($arg:tt)*) => {
        soroban_sdk::log!($env, $msg, $($arg)*)
    };
}

/// Debug log macro that compiles to nothing in release builds.
#[macro_export]
#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
    ($env:expr, $msg:literal) => {};
    ($env:expr, $msg:literal, $($arg:tt)*) => {};
}

/// Logs a computed settlement ID in debug mode.
#[cfg(feature = "debug-log")]
pub fn log_compute_settlement_id(env: &Env, remittance_id: u64, id: &BytesN<32>) {
    debug_log!(
        env,
        "Compute settlement id: remittance_id={}, id={}",
        remittance_id,
        id.clone()
    );
}

/// Logs a verification outcome in debug mode.
#[cfg(feature = "debug-log")]
pub fn log_verify_settlement_id(env: &Env, remittance_id: u64, matched: bool) {
    debug_log!(
        env,
        "Verify settlement id: remittance_id={}, matched={}",
        remittance_id,
        matched
    );
}

/// Logs a field that failed canonical encoding in debug mode.
#[cfg(feature = "debug-log")]
pub fn log_encoding_rejected(env: &Env, remittance_id: u64) {
    debug_log!(env, "Encoding rejected: remittance_id={}", remittance_id);
}

/// Logs a request for an unregistered schema version in debug mode.
#[cfg(feature = "debug-log")]
pub fn log_schema_mismatch(env: &Env, schema_version: u32) {
    debug_log!(env, "Schema version mismatch: schema_version={}", schema_version);
}

// Non-feature-gated stubs for compile-time compatibility

/// Logs a computed settlement ID - no-op in release.
#[cfg(not(feature = "debug-log"))]
pub fn log_compute_settlement_id(_env: &Env, _remittance_id: u64, _id: &BytesN<32>) {}

/// Logs a verification outcome - no-op in release.
#[cfg(not(feature = "debug-log"))]
pub fn log_verify_settlement_id(_env: &Env, _remittance_id: u64, _matched: bool) {}

/// Logs a field that failed canonical encoding - no-op in release.
#[cfg(not(feature = "debug-log"))]
pub fn log_encoding_rejected(_env: &Env, _remittance_id: u64) {}

/// Logs a request for an unregistered schema version - no-op in release.
#[cfg(not(feature = "debug-log"))]
pub fn log_schema_mismatch(_env: &Env, _schema_version: u32) {}
