//! Deterministic Hashing Standard for settlement IDs
//!
//! This module defines the canonical method for generating settlement IDs
//! so external systems (banks, anchors, APIs) can reproduce identical hashes
//! from the same inputs.
//!
//! ## External System Integration
//!
//! External systems can reproduce settlement IDs by:
//! 1. Collecting the same input parameters
//! 2. Serializing them in the order given in [`crate::canonical`]
//! 3. Computing SHA-256 of the serialized bytes
//! 4. Using the resulting 32-byte hash as the settlement ID
//!
//! The vectors in `test_vectors/settlement_id_v1.json` are the conformance
//! gate for any such implementation.

use soroban_sdk::{Address, BytesN, Env};

use crate::canonical::encode_canonical;
use crate::digest::digest;
use crate::schema::layout_for;
use crate::{
    log_compute_settlement_id, log_encoding_rejected, log_schema_mismatch,
    log_verify_settlement_id, ContractError, EncodingError, FingerprintInput,
};

/// Generate a deterministic settlement ID from remittance fields.
///
/// This is the single canonical implementation. External systems must
/// follow the same field ordering and encoding to produce identical output.
///
/// # Arguments
/// * `env`            - Soroban environment
/// * `remittance_id`  - Unique remittance counter ID
/// * `sender`         - Sender account address
/// * `agent`          - Agent account address
/// * `amount`         - Payment amount in the smallest currency unit
/// * `fee`            - Fee amount in the same unit
/// * `expiry`         - Optional expiry timestamp (Unix seconds), None → 0
///
/// # Errors
/// * `InvalidInput` - sender or agent is not a canonical account address
pub fn compute_settlement_id(
    env: &Env,
    remittance_id: u64,
    sender: &Address,
    agent: &Address,
    amount: i128,
    fee: i128,
    expiry: Option<u64>,
) -> Result<BytesN<32>, ContractError> {
    let input = FingerprintInput::v1(
        remittance_id,
        sender.clone(),
        agent.clone(),
        amount,
        fee,
        expiry,
    );
    compute_from_input(env, &input)
}

/// Compute a settlement ID from a fully assembled input tuple.
///
/// # Errors
/// * `SchemaVersionMismatch` - `input.schema_version` has no registered layout
/// * `InvalidInput` - a field failed codec validation
pub fn compute_from_input(
    env: &Env,
    input: &FingerprintInput,
) -> Result<BytesN<32>, ContractError> {
    let canonical = encode_canonical(env, input).map_err(|err| reject(env, input, err))?;
    let id = digest(env, &canonical);

    log_compute_settlement_id(env, input.remittance_id, &id);

    Ok(id)
}

/// Recompute and compare by exact byte equality.
///
/// Inputs that cannot be encoded verify as `false`. The ID is not secret, so
/// plain equality is used.
#[allow(clippy::too_many_arguments)]
pub fn verify_settlement_id(
    env: &Env,
    expected: &BytesN<32>,
    remittance_id: u64,
    sender: &Address,
    agent: &Address,
    amount: i128,
    fee: i128,
    expiry: Option<u64>,
) -> bool {
    let computed = compute_settlement_id(env, remittance_id, sender, agent, amount, fee, expiry);
    let matched = match computed {
        Ok(id) => id == *expected,
        Err(_) => false,
    };

    log_verify_settlement_id(env, remittance_id, matched);

    matched
}

/// Verify against an ID recorded under an explicit schema version.
///
/// # Errors
/// * `SchemaVersionMismatch` - the version is not registered in this build;
///   the check is refused instead of being run under another layout
/// * `InvalidInput` - a field failed codec validation
#[allow(clippy::too_many_arguments)]
pub fn verify_settlement_id_versioned(
    env: &Env,
    schema_version: u32,
    expected: &BytesN<32>,
    remittance_id: u64,
    sender: &Address,
    agent: &Address,
    amount: i128,
    fee: i128,
    expiry: Option<u64>,
) -> Result<bool, ContractError> {
    if let Err(err) = layout_for(schema_version) {
        log_schema_mismatch(env, schema_version);
        return Err(err);
    }

    let input = FingerprintInput {
        schema_version,
        remittance_id,
        sender: sender.clone(),
        agent: agent.clone(),
        amount,
        fee,
        expiry,
    };
    let matched = compute_from_input(env, &input)? == *expected;

    log_verify_settlement_id(env, remittance_id, matched);

    Ok(matched)
}

/// Maps a codec failure to the service-level error.
fn reject(env: &Env, input: &FingerprintInput, err: EncodingError) -> ContractError {
    match err {
        EncodingError::UnsupportedSchema => {
            log_schema_mismatch(env, input.schema_version);
            ContractError::SchemaVersionMismatch
        }
        _ => {
            log_encoding_rejected(env, input.remittance_id);
            ContractError::InvalidInput
        }
    }
}
