#![no_std]

mod debug;
mod errors;
mod types;

pub mod canonical;
pub mod codec;
pub mod digest;
pub mod hashing;
pub mod replica;
pub mod schema;

#[cfg(test)]
mod test_property;

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String};

pub use debug::*;
pub use errors::{ContractError, EncodingError};
pub use schema::{ADDRESS_WIDTH, CANONICAL_LEN, SCHEMA_VERSION};
pub use types::*;

/// Read-only settlement ID service. Holds no storage and emits no events.
#[contract]
pub struct SettlementIdContract;

#[contractimpl]
impl SettlementIdContract {
    /// Layout version new IDs are computed under.
    pub fn schema_version(_env: Env) -> u32 {
        SCHEMA_VERSION
    }

    /// Settlement ID of a remittance under the current schema version.
    pub fn compute_settlement_id(
        env: Env,
        remittance_id: u64,
        sender: Address,
        agent: Address,
        amount: i128,
        fee: i128,
        expiry: Option<u64>,
    ) -> Result<BytesN<32>, ContractError> {
        hashing::compute_settlement_id(&env, remittance_id, &sender, &agent, amount, fee, expiry)
    }

    /// Settlement ID of an assembled input, under the version it carries.
    pub fn compute_settlement_id_for(
        env: Env,
        input: FingerprintInput,
    ) -> Result<BytesN<32>, ContractError> {
        hashing::compute_from_input(&env, &input)
    }

    /// True when `expected` matches the recomputed ID. Unencodable input is `false`.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_settlement_id(
        env: Env,
        expected: BytesN<32>,
        remittance_id: u64,
        sender: Address,
        agent: Address,
        amount: i128,
        fee: i128,
        expiry: Option<u64>,
    ) -> bool {
        hashing::verify_settlement_id(
            &env,
            &expected,
            remittance_id,
            &sender,
            &agent,
            amount,
            fee,
            expiry,
        )
    }

    /// Verifies against an ID recorded under `schema_version`.
    #[allow(clippy::too_many_arguments)]
    pub fn verify_settlement_id_versioned(
        env: Env,
        schema_version: u32,
        expected: BytesN<32>,
        remittance_id: u64,
        sender: Address,
        agent: Address,
        amount: i128,
        fee: i128,
        expiry: Option<u64>,
    ) -> Result<bool, ContractError> {
        hashing::verify_settlement_id_versioned(
            &env,
            schema_version,
            &expected,
            remittance_id,
            &sender,
            &agent,
            amount,
            fee,
            expiry,
        )
    }

    /// Exact preimage bytes, for integrators diffing their own encoder.
    pub fn canonical_payload(env: Env, input: FingerprintInput) -> Result<Bytes, ContractError> {
        canonical::encode_canonical(&env, &input).map_err(ContractError::from)
    }

    /// Lowercase hex rendering for text-based interfaces.
    pub fn settlement_id_hex(env: Env, id: BytesN<32>) -> Result<String, ContractError> {
        digest::to_hex_string(&env, &id)
    }
}
